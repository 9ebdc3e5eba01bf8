//! TUI rendering and terminal management (impure shell)

mod action_bar;
pub mod constants;
mod filter_bar;
mod filter_form;
mod help;
mod layout;
mod list_pane;
mod styles;

pub use help::render_help_overlay;
pub use layout::{calculate_areas, render_layout, rows_area, ListRows, ScreenAreas};
pub use styles::{ColorConfig, ListStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::state::{filter_form as form, mouse_handler, AppState, PointerEvent};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: ListStyles,
    /// Last rendered row area (for mouse hit testing)
    last_rows_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, mouse capture and
    /// focus change reporting.
    pub fn new(
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: ListStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        stdout.execute(EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings,
            styles,
            last_rows_area: None,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after an event.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                }
                Event::FocusLost => self.handle_focus_lost(),
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Help overlay swallows everything except its own dismissal and quit
        if self.app_state.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.app_state.help_visible = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        // Open form captures text input before key binding dispatch
        if self.app_state.form.is_open() {
            self.handle_form_key(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.help_visible = true,
            other => self.app_state.apply(other),
        }
        self.keep_cursor_visible();
        false
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let field_count = self.app_state.list().filter_fields().len();
        let current = std::mem::take(&mut self.app_state.form);
        self.app_state.form = match key.code {
            KeyCode::Esc => form::cancel_form(current),
            KeyCode::Tab => form::focus_next(current),
            KeyCode::BackTab => form::focus_prev(current),
            KeyCode::Left => form::handle_left(current, field_count),
            KeyCode::Right => form::handle_right(current, field_count),
            KeyCode::Backspace => form::handle_backspace(current),
            KeyCode::Enter => {
                self.app_state.form = current;
                self.app_state.submit_filter_form();
                self.keep_cursor_visible();
                return;
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form::handle_char_input(current, ch)
            }
            _ => current,
        };
    }

    /// Handle a mouse event over the last rendered frame
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.help_visible {
            return;
        }
        let rows_area = self.last_rows_area.unwrap_or_default();
        mouse_handler::handle_mouse(&mut self.app_state, mouse, rows_area);
        self.keep_cursor_visible();
    }

    /// Terminal lost focus: any drag in progress ends.
    fn handle_focus_lost(&mut self) {
        self.app_state.list_mut().pointer(PointerEvent::LeaveContainer);
    }

    fn keep_cursor_visible(&mut self) {
        if let Some(area) = self.last_rows_area {
            self.app_state.ensure_cursor_visible(usize::from(area.height));
        }
    }

    /// Render the current frame
    ///
    /// Refreshes the list (recomputing only if filters, sort or data
    /// changed), then renders every area.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let areas = calculate_areas(frame_area, self.app_state.form.is_open());
        let rows = rows_area(areas.list);
        self.last_rows_area = Some(rows);

        self.app_state.refresh();
        self.app_state.ensure_cursor_visible(usize::from(rows.height));

        let columns = self.app_state.columns().clone();
        let presentation: ListRows = self.app_state.list_mut().present(|record| {
            columns
                .iter()
                .map(|spec| spec.read(record).display_string())
                .collect()
        });

        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, state, &presentation, styles);
        })?;

        Ok(())
    }

    /// Consume the app and return its final state.
    pub fn into_state(self) -> AppState {
        self.app_state
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
//
// DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// This allows tests to construct TuiApp directly without going through
    /// terminal initialization. Used by acceptance test harness.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles: ListStyles::with_color_config(ColorConfig::new(true)),
            last_rows_area: None,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Simulate a focus-lost event (test-only accessor)
    pub(crate) fn handle_focus_lost_test(&mut self) {
        self.handle_focus_lost()
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application over a prepared state
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit. Returns the
/// final state so the caller can persist surviving records.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_state(
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: ListStyles,
) -> Result<AppState, TuiError> {
    let mut app = match TuiApp::new(app_state, key_bindings, styles) {
        Ok(app) => app,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err);
        }
    };

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result.map(|()| app.into_state())
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture and focus reporting, and leaves
/// alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(DisableFocusChange)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
