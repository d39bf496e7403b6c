//! Layout dimension constants for TUI rendering.
//!
//! Bar and submenu heights come from configuration; everything fixed lives here.

/// Height of the toolbar in lines (title, subtitle, bottom border).
pub const TOOLBAR_HEIGHT: u16 = 3;

/// Height of a toast including its border.
pub const TOAST_HEIGHT: u16 = 3;

/// Gap kept between a toast and whatever sits above it.
pub const TOAST_MARGIN_TOP: u16 = 0;

/// Gap kept between a toast and the bottom bar.
pub const TOAST_MARGIN_BOTTOM: u16 = 1;

/// Width of the submenu popup in columns.
pub const SUBMENU_WIDTH: u16 = 26;
