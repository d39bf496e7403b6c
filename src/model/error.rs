//! Error types for the artv application.
//!
//! Errors form a small hierarchy built with `thiserror`, composing through
//! `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from application setup and the shell
//!   - [`ConfigError`] - Config file read or parse failures
//!   - [`LoggingError`] - Log directory or subscriber setup failures
//!   - [`ArticleLoadError`] - The article file could not be read
//!   - [`StateFileError`] - The saved UI state could not be written
//!   - `std::io::Error` - Terminal failures
//!
//! # Error Recovery Strategy
//!
//! The binding, search and scroll cores never fail: stale values are skipped,
//! empty queries clear results, out-of-range cursors are clamped and
//! interrupted animations are replaced. Everything here comes from the
//! impure shell. A saved-state file that cannot be read is logged and
//! ignored, so only a failed write propagates as [`AppError::StateFile`].

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use artv::model::error::{AppError, ArticleLoadError};
///
/// fn run_app() -> Result<(), AppError> {
///     // ArticleLoadError converts to AppError via From
///     let _article = read_article()?;
///     Ok(())
/// }
/// # fn read_article() -> Result<(), ArticleLoadError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded. Fatal: reported before the terminal is taken over.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialised. Fatal.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The article to display could not be read. Fatal.
    #[error("Failed to load article: {0}")]
    ArticleLoad(#[from] ArticleLoadError),

    /// Saved UI state could not be persisted on exit.
    ///
    /// **Recovery**: the article was already displayed; report and exit non-zero.
    #[error("Failed to save UI state: {0}")]
    StateFile(#[from] StateFileError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: restore the terminal, then exit with the message on stderr.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors reading the article source.
#[derive(Debug, Error)]
pub enum ArticleLoadError {
    /// The article path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use artv::model::error::ArticleLoadError;
    ///
    /// let err = ArticleLoadError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.md")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.md"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path as given on the command line.
        path: PathBuf,
    },

    /// Any other I/O failure while reading the article.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Article path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors persisting saved UI state.
#[derive(Debug, Error)]
pub enum StateFileError {
    /// Reading or writing the file failed.
    #[error("I/O error on state file {path}: {source}")]
    Io {
        /// State file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid saved-state JSON.
    #[error("Invalid state file {path}: {source}")]
    Json {
        /// State file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}
