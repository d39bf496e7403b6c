//! Terminal article reader (artv)
//!
//! Reads one markdown article, with in-document search and a bottom bar that
//! scrolls away with the content.
//!
//! Pure state transitions and algorithms live in the library modules; the
//! terminal shell is `view`.

pub mod binding;
pub mod config;
pub mod logging;
pub mod markup;
pub mod model;
pub mod scroll;
pub mod search;
pub mod source;
pub mod view;
pub mod viewmodel;
