//! Domain-level keyboard actions independent of key bindings.

/// User intents that can be mapped to configurable key bindings.
///
/// These represent what the user wants, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Content scrolling (feeds the scroll gesture intake)
    /// Scroll content up one line. Default: k/↑
    ScrollUp,
    /// Scroll content down one line. Default: j/↓
    ScrollDown,
    /// Scroll content up half a page. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll content down half a page. Default: Ctrl+d/Page Down
    PageDown,

    // Bottom bar
    /// Toggle like. Default: l
    ToggleLike,
    /// Toggle bookmark. Default: b
    ToggleBookmark,
    /// Share the article. Default: s
    Share,
    /// Open or close the settings submenu. Default: m
    ToggleMenu,

    // Submenu
    /// Switch to big text. Default: +
    TextUp,
    /// Switch to normal text. Default: -
    TextDown,
    /// Toggle dark mode. Default: d
    ToggleDarkMode,

    // Search
    /// Enter search mode and focus the query. Default: /
    OpenSearch,
    /// Leave search mode. Default: Esc
    CloseSearch,
    /// Focus the previous match. Default: N
    PrevResult,
    /// Focus the next match. Default: n
    NextResult,

    // Notifications
    /// Press the button of the visible notification. Default: a
    NotificationAction,

    /// Quit. Default: q
    Quit,
}
