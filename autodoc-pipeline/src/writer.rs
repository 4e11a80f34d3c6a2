//! Atomic document writer.
//!
//! ## `write_document` protocol
//!
//! 1. Normalise line endings to LF.
//! 2. SHA-256 hash the content.
//! 3. Compare with the hash of the file already on disk → skip if identical.
//! 4. Create parent directories.
//! 5. Write to `<path>.autodoc.tmp`.
//! 6. Rename to final path (atomic on POSIX).

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{write_err, DocError};

/// Outcome of an individual document write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — rendered content matches what is on disk.
    Unchanged { path: PathBuf },
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// Atomically write a single rendered document.
///
/// Skips the write when the file already holds byte-identical content, so
/// repeated runs over unchanged inputs never touch mtimes.
pub fn write_document(path: &Path, content: &str) -> Result<WriteResult, DocError> {
    let tmp = PathBuf::from(format!("{}.autodoc.tmp", path.display()));
    write_document_with_tmp(path, content, &tmp)
}

fn write_document_with_tmp(
    path: &Path,
    content: &str,
    tmp: &Path,
) -> Result<WriteResult, DocError> {
    // Normalise line endings to LF before hashing and writing.
    let normalized = content.replace("\r\n", "\n");
    let content = normalized.as_str();

    let digest = sha256_hex(content.as_bytes());
    if let Ok(existing) = std::fs::read(path) {
        if sha256_hex(&existing) == digest {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_err(parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| write_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(write_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
