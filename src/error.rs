use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the line splicer
#[derive(Error, Debug)]
pub enum SpliceError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("No readable source: backup {backup} and primary {primary} both failed")]
    NoReadableSource {
        backup: PathBuf,
        primary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read-back of {path} does not match the spliced result (primary already overwritten)")]
    WriteMismatch { path: PathBuf },
}

impl SpliceError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Neither the backup nor the primary file could be read
    pub fn no_readable_source(
        backup: impl Into<PathBuf>,
        primary: impl Into<PathBuf>,
        err: std::io::Error,
    ) -> Self {
        Self::NoReadableSource {
            backup: backup.into(),
            primary: primary.into(),
            source: err,
        }
    }

    pub fn write_mismatch(path: impl Into<PathBuf>) -> Self {
        Self::WriteMismatch { path: path.into() }
    }

    /// Path involved in the failure, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            SpliceError::Io { path, .. } => path.as_ref(),
            SpliceError::NoReadableSource { primary, .. } => Some(primary),
            SpliceError::WriteMismatch { path } => Some(path),
        }
    }
}

pub type SpliceResult<T> = std::result::Result<T, SpliceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_keeps_path() {
        let err = SpliceError::io_error(
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            Some("ProjectDetails.tsx"),
        );
        assert_eq!(err.path(), Some(&PathBuf::from("ProjectDetails.tsx")));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_no_readable_source_message() {
        let err = SpliceError::no_readable_source(
            "a.backup",
            "a",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("a.backup"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_write_mismatch_says_primary_was_overwritten() {
        let err = SpliceError::write_mismatch("ProjectDetails.tsx");
        let msg = err.to_string();
        assert!(msg.contains("ProjectDetails.tsx"));
        assert!(msg.contains("primary already overwritten"));
    }
}
