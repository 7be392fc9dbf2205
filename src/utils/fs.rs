use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{SpliceError, SpliceResult};

/// Read a file's contents as UTF-8, keeping the raw io error for fallback decisions
pub fn read_utf8(path: impl AsRef<Path>) -> std::io::Result<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    // Invalid UTF-8 surfaces as io::ErrorKind::InvalidData
    fs::read_to_string(path)
}

/// Write string content to a file and confirm the bytes on disk match
pub fn write_file_verified(path: impl AsRef<Path>, content: &str) -> SpliceResult<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to {}", content.len(), path.display());

    fs::write(path, content).map_err(|e| SpliceError::io_error(e, Some(path)))?;

    let hash_after = calculate_file_hash(path)?;
    if hash_after != calculate_string_hash(content) {
        warn!(
            "File hash after write doesn't match expected: {}",
            path.display()
        );
        return Err(SpliceError::write_mismatch(path));
    }

    Ok(())
}

/// Calculate a hash for file content
pub fn calculate_file_hash(path: impl AsRef<Path>) -> SpliceResult<String> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|e| SpliceError::io_error(e, Some(path)))?;

    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Calculate a hash for a string
pub fn calculate_string_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
