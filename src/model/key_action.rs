//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor
    /// Move the row cursor up. Default: k/↑
    CursorUp,
    /// Move the row cursor down. Default: j/↓
    CursorDown,
    /// Jump to the first visible row. Default: g/Home
    CursorTop,
    /// Jump to the last visible row. Default: G/End
    CursorBottom,

    // Selection
    /// Toggle selection of the row under the cursor. Default: Space
    ToggleSelection,

    // Filters
    /// Open the add-filter form. Default: f or /
    StartFilter,
    /// Remove the most recently added clause. Default: x
    RemoveLastFilter,
    /// Remove every clause. Default: X
    ClearFilters,

    // Sorting
    /// Sort by the next sortable field. Default: s
    CycleSortField,
    /// Flip ascending/descending. Default: o
    ToggleSortOrder,

    // Action bar
    /// Run the action bar's current action (add or bulk delete). Default: a/Delete
    TriggerAction,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
