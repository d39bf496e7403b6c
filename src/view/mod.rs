//! TUI rendering and terminal management (impure shell)

mod article_binding;
pub mod constants;
mod highlight;
pub mod layout;
mod screen;
mod styles;
mod toast;
mod widgets;

pub use article_binding::{ArticleBinding, SEARCH_BINDING};
pub use highlight::{HighlightStyles, highlighted_lines};
pub use layout::{Placement, ScreenLayout, render_screen};
pub use screen::{ArticleScreen, LOADING_TEXT, LOGO_PLACEHOLDER};
pub use styles::{ArticleStyles, ColorConfig};
pub use toast::{Toast, ToastWidget, truncate_to_width};
pub use widgets::{BottomBar, Submenu, Toolbar};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, ArticleState, KeyAction, Notify, SavedUiState};
use crate::scroll::{GestureKind, ScrollAxis, ScrollConfig, ScrollCoordinator};
use crate::viewmodel::{ArticleRepository, ArticleViewModel};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stdout};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, trace};

/// Poll interval while an animation or gesture is in flight.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Poll interval with nothing moving.
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Shell settings resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellOptions {
    /// Bar and submenu geometry.
    pub scroll: ScrollConfig,
    /// Rows per wheel notch or line-scroll key.
    pub wheel_step: f32,
    /// Quiet time after which a gesture ends.
    pub gesture_idle: Duration,
    /// How long a toast stays up.
    pub toast_duration: Duration,
    /// Color output switch.
    pub colors: ColorConfig,
}

impl ShellOptions {
    /// Options from the resolved config.
    pub fn from_config(config: &ResolvedConfig, colors: ColorConfig) -> Self {
        Self {
            scroll: config.scroll_config(),
            wheel_step: config.wheel_step,
            gesture_idle: config.gesture_idle(),
            toast_duration: config.toast_duration(),
            colors,
        }
    }
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self::from_config(&ResolvedConfig::default(), ColorConfig::with_colors(true))
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B, R>
where
    B: Backend,
{
    terminal: Terminal<B>,
    viewmodel: ArticleViewModel<R>,
    binding: ArticleBinding,
    screen: ArticleScreen,
    coordinator: ScrollCoordinator,
    states: Receiver<ArticleState>,
    notifications: Receiver<Notify>,
    key_bindings: KeyBindings,
    options: ShellOptions,
    styles: ArticleStyles,
    toast: Option<Toast>,
    /// Time of the last event of the running gesture, if any.
    gesture_last_event: Option<Instant>,
    /// Content rows of the last drawn frame.
    viewport_rows: u16,
}

impl<R: ArticleRepository> TuiApp<CrosstermBackend<Stdout>, R> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(viewmodel: ArticleViewModel<R>, options: ShellOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Self::with_terminal(terminal, viewmodel, options)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.step(None, Instant::now())?;

        loop {
            let event = if event::poll(self.poll_timeout(Instant::now()))? {
                Some(event::read()?)
            } else {
                None
            };
            if self.step(event, Instant::now())? {
                return Ok(());
            }
        }
    }
}

impl<B, R> TuiApp<B, R>
where
    B: Backend,
    R: ArticleRepository,
{
    /// Build the shell on an existing terminal and render the first snapshot.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut viewmodel: ArticleViewModel<R>,
        options: ShellOptions,
    ) -> Result<Self, TuiError> {
        let states = viewmodel.subscribe();
        let notifications = viewmodel.notifications();
        let mut binding = ArticleBinding::new();
        let mut screen = ArticleScreen::new();
        binding.attach(&mut screen);

        let mut app = Self {
            terminal,
            viewmodel,
            binding,
            screen,
            coordinator: ScrollCoordinator::new(options.scroll),
            states,
            notifications,
            key_bindings: KeyBindings::default(),
            options,
            styles: ArticleStyles::new(options.colors, false),
            toast: None,
            gesture_last_event: None,
            viewport_rows: 0,
        };
        app.drain_states();
        Ok(app)
    }

    /// State owner.
    pub fn viewmodel(&self) -> &ArticleViewModel<R> {
        &self.viewmodel
    }

    /// Widget model.
    pub fn screen(&self) -> &ArticleScreen {
        &self.screen
    }

    /// Scroll coordinator.
    pub fn coordinator(&self) -> &ScrollCoordinator {
        &self.coordinator
    }

    /// Toast on screen, if any.
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Styles of the active palette.
    pub fn styles(&self) -> &ArticleStyles {
        &self.styles
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// One turn of the event loop: apply `event`, advance timers, redraw.
    ///
    /// Returns true if app should quit.
    pub fn step(&mut self, event: Option<Event>, now: Instant) -> Result<bool, TuiError> {
        if let Some(event) = event {
            let quit = match event {
                Event::Key(key) => self.handle_key(key, now),
                Event::Mouse(mouse) => {
                    self.handle_mouse(mouse, now);
                    false
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    false
                }
                _ => false,
            };
            if quit {
                return Ok(true);
            }
        }

        self.drain_states();
        self.drain_notifications(now);
        self.expire_toast(now);
        self.end_idle_gesture(now);
        self.coordinator.tick(now);
        self.draw()?;
        Ok(false)
    }

    /// Flags to persist on exit.
    pub fn saved_state(&self) -> SavedUiState {
        let mut saved = self.viewmodel.save_state();
        self.binding.save_ui(&mut saved);
        saved
    }

    /// Put back flags from a previous run.
    pub fn restore_state(&mut self, saved: &SavedUiState) {
        self.binding.restore_ui(saved);
        self.viewmodel.restore_state(saved);
        self.drain_states();
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        if self.coordinator.is_animating() || self.gesture_last_event.is_some() {
            return FRAME_INTERVAL;
        }
        match &self.toast {
            Some(toast) => toast.remaining(now).min(IDLE_INTERVAL),
            None => IDLE_INTERVAL,
        }
    }

    // ===== Channels =====

    fn drain_states(&mut self) {
        while let Ok(state) = self.states.try_recv() {
            self.binding.bind(&state, &mut self.screen);
        }
        if !self.binding.is_search() {
            self.binding.is_focused_search = false;
        }
        self.screen.search_focused = self.binding.is_focused_search;

        let styles = ArticleStyles::new(self.options.colors, self.screen.dark_mode_checked);
        if styles != self.styles {
            debug!(dark = self.screen.dark_mode_checked, "Palette switched");
            self.styles = styles;
        }
    }

    fn drain_notifications(&mut self, now: Instant) {
        while let Ok(notify) = self.notifications.try_recv() {
            debug!(message = notify.message(), "Showing toast");
            self.toast = Some(Toast::new(notify, now, self.options.toast_duration));
            self.coordinator.on_overlay_shown(Toast::footprint());
        }
    }

    fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.dismiss_toast();
        }
    }

    fn dismiss_toast(&mut self) -> Option<Toast> {
        let toast = self.toast.take();
        if toast.is_some() {
            self.coordinator.on_overlay_hidden();
        }
        toast
    }

    // ===== Gestures =====

    fn scroll_gesture(&mut self, dy: f32, now: Instant) {
        if self.gesture_last_event.is_none()
            && !self
                .coordinator
                .on_gesture_start(ScrollAxis::Vertical, GestureKind::Touch)
        {
            return;
        }
        self.gesture_last_event = Some(now);
        self.coordinator.on_gesture_delta(dy);

        let mut rows = dy.round() as i32;
        if rows == 0 {
            rows = dy.signum() as i32;
        }
        self.screen.scroll_content(rows);
    }

    fn end_idle_gesture(&mut self, now: Instant) {
        if let Some(last) = self.gesture_last_event {
            if now.saturating_duration_since(last) >= self.options.gesture_idle {
                self.gesture_last_event = None;
                self.coordinator.on_gesture_end(GestureKind::Touch, now);
            }
        }
    }

    fn page_rows(&self) -> f32 {
        f32::from((self.viewport_rows / 2).max(1))
    }

    // ===== Input =====

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let step = self.options.wheel_step;
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_gesture(step, now),
            MouseEventKind::ScrollUp => self.scroll_gesture(-step, now),
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {
                let accepted = self
                    .coordinator
                    .on_gesture_start(ScrollAxis::Horizontal, GestureKind::Touch);
                trace!(accepted, "Horizontal wheel");
            }
            _ => {}
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        if self.binding.is_focused_search {
            self.handle_query_key(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "Key action");

        match action {
            KeyAction::ScrollDown => self.scroll_gesture(self.options.wheel_step, now),
            KeyAction::ScrollUp => self.scroll_gesture(-self.options.wheel_step, now),
            KeyAction::PageDown => self.scroll_gesture(self.page_rows(), now),
            KeyAction::PageUp => self.scroll_gesture(-self.page_rows(), now),
            KeyAction::ToggleLike => self.viewmodel.handle_like(),
            KeyAction::ToggleBookmark => self.viewmodel.handle_bookmark(),
            KeyAction::Share => self.viewmodel.handle_share(),
            KeyAction::ToggleMenu => self.viewmodel.handle_toggle_menu(),
            KeyAction::TextUp => self.viewmodel.handle_up_text(),
            KeyAction::TextDown => self.viewmodel.handle_down_text(),
            KeyAction::ToggleDarkMode => self.viewmodel.handle_night_mode(),
            KeyAction::OpenSearch => self.open_search(now),
            KeyAction::CloseSearch => self.close_search(),
            KeyAction::NextResult => {
                if self.binding.is_search() {
                    self.viewmodel.handle_down_result();
                }
            }
            KeyAction::PrevResult => {
                if self.binding.is_search() {
                    self.viewmodel.handle_up_result();
                }
            }
            KeyAction::NotificationAction => {
                if let Some(action) = self.dismiss_toast().and_then(|t| t.notify().follow_up()) {
                    self.viewmodel.handle_notify_action(action);
                }
            }
            KeyAction::Quit => return true,
        }
        false
    }

    /// Keys typed into the focused query.
    fn handle_query_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_search(),
            KeyCode::Enter => {
                self.binding.is_focused_search = false;
                self.screen.search_focused = false;
            }
            KeyCode::Backspace => {
                let mut query = self.binding.search_query_text.clone();
                if query.pop().is_some() {
                    self.viewmodel.handle_search(Some(query.as_str()));
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut query = self.binding.search_query_text.clone();
                query.push(c);
                self.viewmodel.handle_search(Some(query.as_str()));
            }
            _ => {}
        }
    }

    fn open_search(&mut self, now: Instant) {
        if !self.binding.is_search() {
            self.viewmodel.handle_search_mode(true);
            // A query kept from earlier is searched again so the bar agrees
            // with the highlights.
            let kept = self
                .viewmodel
                .state()
                .search_query
                .clone()
                .filter(|query| !query.is_empty());
            if let Some(query) = kept {
                self.viewmodel.handle_search(Some(query.as_str()));
            }
            self.coordinator.snap_bar(true, now);
            info!("Search opened");
        }
        self.binding.is_focused_search = true;
        self.screen.search_focused = true;
    }

    fn close_search(&mut self) {
        self.binding.is_focused_search = false;
        self.screen.search_focused = false;
        if self.binding.is_search() {
            self.viewmodel.handle_search_mode(false);
            info!("Search closed");
        }
    }

    // ===== Drawing =====

    fn draw(&mut self) -> Result<(), TuiError> {
        let placement = Placement::from_coordinator(&self.coordinator);
        let screen = &mut self.screen;
        let styles = &self.styles;
        let toast = self.toast.as_ref();
        let mut content_rows = self.viewport_rows;

        self.terminal.draw(|frame| {
            let layout = render_screen(frame, screen, placement, styles, toast);
            content_rows = layout.content.height;
        })?;

        self.viewport_rows = content_rows;
        Ok(())
    }
}

/// Initialize and run the TUI for one article.
///
/// Returns the flags to persist. The terminal is restored on every path.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_article<R: ArticleRepository>(
    viewmodel: ArticleViewModel<R>,
    options: ShellOptions,
    saved: Option<&SavedUiState>,
) -> Result<SavedUiState, TuiError> {
    let result = TuiApp::new(viewmodel, options).and_then(|mut app| {
        if let Some(saved) = saved {
            app.restore_state(saved);
        }
        app.run().map(|()| app.saved_state())
    });

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
