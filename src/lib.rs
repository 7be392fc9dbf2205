// line-splicer - swaps the inline edit-task modal in ProjectDetails.tsx
// for the ImprovedTaskModal component, using fixed line offsets

pub mod config;
pub mod error;
pub mod splice;
pub mod utils;

use anyhow::Result;
use tracing::debug;

pub use config::SpliceConfig;
pub use error::SpliceError;
pub use splice::{LineSplicer, SpliceReport};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize the tracing subscriber
///
/// Logs always go to stderr; stdout carries only the status report.
pub fn init_with_logger(ansi_colors: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(ansi_colors)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    debug!("Initializing line-splicer v{}", version());
    Ok(())
}
