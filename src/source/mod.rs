//! Article and saved-state sources on disk.
//!
//! - Article loading: one markdown file becomes article metadata plus content
//! - Saved UI state: JSON file written on exit, read back on start

pub mod article_file;
pub mod state_file;

pub use article_file::{load_article_file, LoadedArticle};
pub use state_file::{load_saved_state, save_saved_state};
