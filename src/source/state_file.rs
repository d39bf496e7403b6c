//! Saved UI state persistence.
//!
//! The hosting shell writes [`SavedUiState`] as JSON when the article view
//! detaches and reads it back when it attaches again.

use crate::model::error::StateFileError;
use crate::model::SavedUiState;
use std::path::Path;

/// Read saved state.
///
/// Returns `Ok(None)` if the file doesn't exist (nothing was saved yet).
///
/// # Errors
///
/// Returns error if the file exists but cannot be read or is not valid JSON.
pub fn load_saved_state(path: &Path) -> Result<Option<SavedUiState>, StateFileError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path).map_err(|source| StateFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let saved = serde_json::from_str(&contents).map_err(|source| StateFileError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(saved))
}

/// Write saved state, creating the parent directory if needed.
///
/// # Errors
///
/// Returns error if the directory or file cannot be written.
pub fn save_saved_state(path: &Path, saved: &SavedUiState) -> Result<(), StateFileError> {
    let io_error = |source| StateFileError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    let json = serde_json::to_string_pretty(saved).map_err(|source| StateFileError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(io_error)
}
