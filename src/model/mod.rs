//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod article;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod notify;
pub mod state;

// Re-export for convenience
pub use article::{AppSettings, ArticleData, ArticlePersonalInfo};
pub use error::{AppError, ArticleLoadError, StateFileError};
pub use identifiers::{ArticleId, InvalidArticleId};
pub use key_action::KeyAction;
pub use notify::{Notify, NotifyAction};
pub use state::{ArticleState, SavedUiState};
