//! Test fixtures and the acceptance test harness.
//!
//! `Item` is a small typed entity for engine tests. `AcceptanceTestHarness`
//! wraps `TuiApp<TestBackend>` so shell tests can drive keys and mouse
//! gestures and inspect the rendered frame.

use crate::config::keybindings::KeyBindings;
use crate::model::{FieldRegistry, FieldSpec, FieldValue, Identify};
use crate::source::parse_records;
use crate::state::{AppState, ListFields};
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Typed fixture =====

/// Typed entity for engine tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub score: Option<f64>,
    pub subject: String,
}

impl Identify for Item {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

/// Item with the default subject.
pub fn item(id: i64, name: &str, score: Option<f64>) -> Item {
    Item {
        id,
        name: name.to_string(),
        score,
        subject: "math".to_string(),
    }
}

/// Registry exposing `name`, `score` and `subject`.
pub fn item_fields() -> FieldRegistry<Item> {
    FieldRegistry::new()
        .with(FieldSpec::new("name", "Name", |i: &Item| {
            FieldValue::from(i.name.as_str())
        }))
        .with(FieldSpec::new("score", "Score", |i: &Item| {
            FieldValue::from(i.score)
        }))
        .with(FieldSpec::new("subject", "Subject", |i: &Item| {
            FieldValue::from(i.subject.as_str())
        }))
}

// ===== Rendering =====

/// Convert a ratatui buffer to text, one line per row.
///
/// Trailing whitespace is trimmed and blank rows are dropped.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

// ===== Acceptance harness =====

/// Drives a `TuiApp<TestBackend>` loaded from inline JSON.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load records from JSON (array or lines) into an 80x24 terminal.
    pub fn from_json(json: &str) -> Result<Self, TuiError> {
        Self::from_json_with_size(json, 80, 24)
    }

    /// Load records from JSON into a terminal of the given size.
    ///
    /// Fields are inferred from the records.
    pub fn from_json_with_size(json: &str, width: u16, height: u16) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let report = parse_records(json, "id")?;
        let fields = ListFields::inferred(&report.records);
        let app_state = AppState::new(report.records, fields);
        let app = TuiApp::new_for_test(terminal, app_state, KeyBindings::default());

        Ok(Self { app, running: true })
    }

    /// Send a key with no modifiers. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send a key with modifiers. Returns true if the app quit.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }
        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type text one character at a time.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Press the left button at a cell.
    pub fn mouse_down(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    /// Drag with the left button held to a cell.
    pub fn mouse_drag(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Drag(MouseButton::Left), column, row);
    }

    /// Release the left button at a cell.
    pub fn mouse_up(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    /// Press and release at the same cell.
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.mouse_down(column, row);
        self.mouse_up(column, row);
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return;
        }
        // Hit tests use the areas from the last frame.
        let _ = self.app.render_test();
        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Simulate the terminal losing focus.
    pub fn focus_lost(&mut self) {
        self.app.handle_focus_lost_test();
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// False once a quit key was handled.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render a frame and return it as text.
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("rendering to TestBackend should succeed");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Screen row of the first line containing `needle`, after rendering.
    pub fn row_of(&mut self, needle: &str) -> Option<u16> {
        self.app
            .render_test()
            .expect("rendering to TestBackend should succeed");
        let buffer = self.app.terminal().backend().buffer();
        let area = buffer.area();
        (area.top()..area.bottom()).find(|&y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.contains(needle)
        })
    }
}
