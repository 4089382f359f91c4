//! # Index Persistence
//!
//! Writes a role index to disk as JSON. This is the external collaborator
//! invoked after the Project Index Builder returns: the builder itself never
//! touches storage.
//!
//! Missing parent directories in the destination path are created first.
//! Directory creation is idempotent: an already-existing destination
//! directory is not an error.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::index::RoleIndex;

/// Serialize one role index to a JSON file at `path`.
///
/// Creates any missing intermediate directories. An existing file at `path`
/// is overwritten.
pub fn write_index(index: &RoleIndex, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string(index).map_err(|e| Error::Serialization {
        message: format!("could not encode index for '{}': {}", path.display(), e),
    })?;
    fs::write(path, content)?;

    log::info!("wrote {} identities to {}", index.len(), path.display());
    Ok(())
}
