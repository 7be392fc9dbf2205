use anyhow::{Context, Result};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::SpliceConfig;
use crate::error::{SpliceError, SpliceResult};
use crate::utils::fs::read_utf8;

pub const FALLBACK_NOTICE: &str = "❌ Backup not found, using current file";

/// Which file the source lines were read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOrigin {
    Backup,
    Primary,
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceOrigin::Backup => write!(f, "backup"),
            SourceOrigin::Primary => write!(f, "primary"),
        }
    }
}

/// Lines loaded for a single splice run
#[derive(Debug, Clone)]
pub struct SourceText {
    pub origin: SourceOrigin,
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl SourceText {
    pub fn from_content(origin: SourceOrigin, path: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            origin,
            path: path.into(),
            lines: split_lines(content),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split text into lines, each keeping its own terminator.
///
/// `"a\r\nb\nc"` becomes `["a\r\n", "b\n", "c"]`; joining the result gives
/// back the input byte for byte.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_owned).collect()
}

/// Load the backup file, falling back to the primary file on any read failure.
///
/// The fallback notice goes to `out` before the primary is read, so it is
/// visible even when that read fails.
pub fn load_source<W: Write>(config: &SpliceConfig, out: &mut W) -> Result<SourceText> {
    match read_utf8(&config.backup_path) {
        Ok(content) => {
            debug!("Loaded backup: {}", config.backup_path.display());
            Ok(SourceText::from_content(
                SourceOrigin::Backup,
                &config.backup_path,
                &content,
            ))
        }
        Err(backup_err) => {
            warn!(
                "Backup {} unreadable ({}), using {}",
                config.backup_path.display(),
                backup_err,
                config.primary_path.display()
            );
            writeln!(out, "{}", FALLBACK_NOTICE).context("Failed to print fallback notice")?;
            Ok(load_primary(&config.backup_path, &config.primary_path)?)
        }
    }
}

fn load_primary(backup: &Path, primary: &Path) -> SpliceResult<SourceText> {
    let content = read_utf8(primary)
        .map_err(|e| SpliceError::no_readable_source(backup, primary, e))?;
    debug!("Loaded primary: {}", primary.display());
    Ok(SourceText::from_content(
        SourceOrigin::Primary,
        primary,
        &content,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_split_lines_keeps_terminators() {
        let lines = split_lines("a\r\nb\nc");
        assert_eq!(lines, vec!["a\r\n", "b\n", "c"]);
        assert_eq!(lines.concat(), "a\r\nb\nc");

        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n\n"), vec!["\n", "\n"]);

        // a lone carriage return does not end a line
        assert_eq!(split_lines("a\rb\nc\r"), vec!["a\rb\n", "c\r"]);
    }

    #[test]
    fn test_load_prefers_backup() {
        let dir = tempdir().unwrap();
        let config = SpliceConfig::for_workdir(dir.path());
        fs::write(&config.backup_path, "old\n").unwrap();
        fs::write(&config.primary_path, "current\n").unwrap();

        let mut out = Vec::new();
        let source = load_source(&config, &mut out).unwrap();
        assert_eq!(source.origin, SourceOrigin::Backup);
        assert_eq!(source.lines, vec!["old\n"]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_load_falls_back_to_primary() {
        let dir = tempdir().unwrap();
        let config = SpliceConfig::for_workdir(dir.path());
        fs::write(&config.primary_path, "current\nfile").unwrap();

        let mut out = Vec::new();
        let source = load_source(&config, &mut out).unwrap();
        assert_eq!(source.origin, SourceOrigin::Primary);
        assert_eq!(source.path, config.primary_path);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", FALLBACK_NOTICE));
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_invalid_utf8_backup_falls_back() {
        let dir = tempdir().unwrap();
        let config = SpliceConfig::for_workdir(dir.path());
        fs::write(&config.backup_path, [0xfe, 0xff, 0x0a]).unwrap();
        fs::write(&config.primary_path, "current\n").unwrap();

        let source = load_source(&config, &mut Vec::new()).unwrap();
        assert_eq!(source.origin, SourceOrigin::Primary);
    }

    #[test]
    fn test_both_missing_is_an_error() {
        let dir = tempdir().unwrap();
        let config = SpliceConfig::for_workdir(dir.path());

        let mut out = Vec::new();
        let err = load_source(&config, &mut out).unwrap_err();
        assert!(String::from_utf8(out).unwrap().contains(FALLBACK_NOTICE));
        match err.downcast_ref::<SpliceError>() {
            Some(SpliceError::NoReadableSource { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_notice_printed_before_failed_primary_read() {
        let dir = tempdir().unwrap();
        let config = SpliceConfig::for_workdir(dir.path());
        // a directory at the primary path cannot be read as text
        fs::create_dir(&config.primary_path).unwrap();

        let mut out = Vec::new();
        assert!(load_source(&config, &mut out).is_err());
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", FALLBACK_NOTICE));
    }
}
