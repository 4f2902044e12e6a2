//! Input resolution: validate the user-supplied PDF path before extraction.
//!
//! Checking the `%PDF` magic bytes up front gives callers a precise error
//! instead of whatever a backend reports after chewing on a Word document.
//! Acquisition (downloading the PDF from a site) is a separate concern that
//! happens before this library is called; we only ever see a local file.

use crate::error::ConvertError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a local file path, validating existence, readability and PDF
/// magic bytes.
pub fn resolve_input(path: &Path) -> Result<PathBuf, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    match std::fs::File::open(path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(ConvertError::NotAPdf {
                    path: path.to_path_buf(),
                    magic,
                });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(ConvertError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(ConvertError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    debug!("resolved local PDF: {}", path.display());
    Ok(path.to_path_buf())
}
