//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header line (title, counts, sort indicator).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the active filter chips line.
pub const FILTER_BAR_HEIGHT: u16 = 1;

/// Height of the filter form when open (border + input line).
pub const FILTER_FORM_HEIGHT: u16 = 3;

/// Height of the action bar line (action button + status message).
pub const ACTION_BAR_HEIGHT: u16 = 1;

/// Height of the key hint line at the bottom of the screen.
pub const HINT_BAR_HEIGHT: u16 = 1;

/// Width of the checkbox column, `[x]` plus padding.
pub const CHECKBOX_COLUMN_WIDTH: u16 = 3;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Placeholder shown when no entity passes the filters.
pub const NO_MATCHES_TEXT: &str = "No matching entities";
