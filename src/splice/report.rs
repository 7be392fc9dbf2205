use std::fmt;
use std::path::PathBuf;

use super::source::SourceOrigin;

/// Outcome of a splice run, rendered as the operator-facing status lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceReport {
    pub origin: SourceOrigin,
    pub target: PathBuf,
    pub old_lines: usize,
    pub new_lines: usize,
    /// False for dry runs
    pub written: bool,
}

impl SpliceReport {
    /// Old minus new; negative when the splice grew the file
    pub fn removed(&self) -> i64 {
        self.old_lines as i64 - self.new_lines as i64
    }

    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(5);
        if self.written {
            lines.push("✅ Integration complete!".to_string());
        } else {
            lines.push(format!(
                "🔍 Dry run, {} left untouched",
                self.target.display()
            ));
        }
        lines.push(format!("📊 Old file: {} lines", self.old_lines));
        lines.push(format!("📊 New file: {} lines", self.new_lines));
        lines.push(format!("📉 Removed: {} lines", self.removed()));
        lines.push(format!("🎉 Code reduced by {} lines!", self.removed()));
        lines
    }
}

impl fmt::Display for SpliceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.status_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
