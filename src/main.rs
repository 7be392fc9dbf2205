use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

use line_splicer::{LineSplicer, SpliceConfig};

/// Replace lines 762-1123 of ProjectDetails.tsx with the ImprovedTaskModal block
#[derive(Parser, Debug)]
#[command(name = "line-splicer", version, about)]
struct Args {
    /// Directory containing ProjectDetails.tsx and its .backup
    #[arg(long, default_value = ".")]
    workdir: PathBuf,

    /// Print the report without writing ProjectDetails.tsx
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    line_splicer::init_with_logger(std::io::stderr().is_terminal())
        .context("Failed to initialize logging")?;

    info!(
        "Starting line-splicer v{} in {}",
        line_splicer::version(),
        args.workdir.display()
    );

    let splicer = LineSplicer::new(SpliceConfig::for_workdir(&args.workdir));
    let report = if args.dry_run {
        splicer.dry_run()?
    } else {
        splicer.run()?
    };

    print!("{}", report);
    Ok(())
}
