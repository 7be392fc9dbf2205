// Fixed-range line splicing: read, cut, insert, write, report

pub mod report;
pub mod source;

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{debug, info};

use crate::config::SpliceConfig;
use crate::utils::fs::write_file_verified;

pub use report::SpliceReport;
pub use source::{load_source, split_lines, SourceOrigin, SourceText, FALLBACK_NOTICE};

/// Build `lines[..prefix_len] + [block] + lines[suffix_start..]`.
///
/// Both bounds clamp to `lines.len()`, so a short input yields a shorter
/// prefix and an empty suffix instead of panicking.
pub fn splice_lines(
    lines: &[String],
    prefix_len: usize,
    suffix_start: usize,
    block: &str,
) -> Vec<String> {
    let prefix = &lines[..prefix_len.min(lines.len())];
    let suffix = &lines[suffix_start.min(lines.len())..];

    let mut result = Vec::with_capacity(prefix.len() + 1 + suffix.len());
    result.extend_from_slice(prefix);
    result.push(block.to_string());
    result.extend_from_slice(suffix);
    result
}

/// Source and result of a splice, before anything is written
#[derive(Debug, Clone)]
pub struct SplicePlan {
    pub source: SourceText,
    pub result: Vec<String>,
}

impl SplicePlan {
    /// The result as file content; elements are concatenated as-is
    pub fn content(&self) -> String {
        self.result.concat()
    }
}

/// Runs the fixed splice described by a `SpliceConfig`
#[derive(Debug, Clone, Default)]
pub struct LineSplicer {
    config: SpliceConfig,
}

impl LineSplicer {
    pub fn new(config: SpliceConfig) -> Self {
        Self { config }
    }

    /// Load the source and compute the result without touching the disk.
    /// The fallback notice, if any, is written to `out`.
    pub fn plan<W: Write>(&self, out: &mut W) -> Result<SplicePlan> {
        let source = load_source(&self.config, out)?;
        let result = splice_lines(
            &source.lines,
            self.config.prefix_len,
            self.config.suffix_start,
            self.config.replacement,
        );
        debug!(
            "Spliced {} source lines from {} into {} result lines",
            source.len(),
            source.origin,
            result.len()
        );
        Ok(SplicePlan { source, result })
    }

    /// Splice and overwrite the primary file, notices on stdout
    pub fn run(&self) -> Result<SpliceReport> {
        self.execute(true, &mut io::stdout())
    }

    /// Splice and overwrite the primary file, notices on `out`
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<SpliceReport> {
        self.execute(true, out)
    }

    /// Splice without writing anything
    pub fn dry_run(&self) -> Result<SpliceReport> {
        self.execute(false, &mut io::stdout())
    }

    fn execute<W: Write>(&self, write: bool, out: &mut W) -> Result<SpliceReport> {
        let plan = self.plan(out)?;
        let target = &self.config.primary_path;

        if write {
            write_file_verified(target, &plan.content())
                .with_context(|| format!("Failed to splice into {}", target.display()))?;
            info!("Wrote spliced content to {}", target.display());
        } else {
            info!("Dry run, not writing {}", target.display());
        }

        Ok(SpliceReport {
            origin: plan.source.origin,
            target: target.clone(),
            old_lines: plan.source.len(),
            new_lines: plan.result.len(),
            written: write,
        })
    }
}
