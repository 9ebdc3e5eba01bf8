//! Filter form input handling (pure state transitions).
//!
//! The form composes one clause draft: a field chosen from the filterable
//! registry, an operation chosen from the known operations, and a free-text
//! value. All functions take the form by value and return the next form.

use crate::state::filter::{ClauseDraft, FilterOperation};

/// Which part of the form receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    /// Field chooser.
    #[default]
    Field,
    /// Operation chooser.
    Operation,
    /// Value text input.
    Value,
}

impl FormFocus {
    /// Next focus, wrapping.
    pub fn next(self) -> Self {
        match self {
            FormFocus::Field => FormFocus::Operation,
            FormFocus::Operation => FormFocus::Value,
            FormFocus::Value => FormFocus::Field,
        }
    }

    /// Previous focus, wrapping.
    pub fn prev(self) -> Self {
        match self {
            FormFocus::Field => FormFocus::Value,
            FormFocus::Operation => FormFocus::Field,
            FormFocus::Value => FormFocus::Operation,
        }
    }
}

/// Filter form state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterForm {
    /// Form hidden.
    #[default]
    Closed,
    /// Form shown and receiving input.
    Open {
        /// Index into the filterable registry.
        field: usize,
        /// Index into [`FilterOperation::KNOWN`].
        operation: usize,
        /// Value text.
        value: String,
        /// Cursor position in `value`, in chars.
        cursor: usize,
        /// Focused part.
        focus: FormFocus,
    },
}

impl FilterForm {
    /// True when the form is shown.
    pub fn is_open(&self) -> bool {
        matches!(self, FilterForm::Open { .. })
    }
}

fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Open an empty form focused on the field chooser.
///
/// No-op if already open.
pub fn open_form(form: FilterForm) -> FilterForm {
    match form {
        FilterForm::Closed => FilterForm::Open {
            field: 0,
            operation: 0,
            value: String::new(),
            cursor: 0,
            focus: FormFocus::Field,
        },
        open => open,
    }
}

/// Close the form, discarding the draft.
pub fn cancel_form(_form: FilterForm) -> FilterForm {
    FilterForm::Closed
}

/// Move focus forward.
pub fn focus_next(form: FilterForm) -> FilterForm {
    match form {
        FilterForm::Open {
            field,
            operation,
            value,
            cursor,
            focus,
        } => FilterForm::Open {
            field,
            operation,
            value,
            cursor,
            focus: focus.next(),
        },
        closed => closed,
    }
}

/// Move focus backward.
pub fn focus_prev(form: FilterForm) -> FilterForm {
    match form {
        FilterForm::Open {
            field,
            operation,
            value,
            cursor,
            focus,
        } => FilterForm::Open {
            field,
            operation,
            value,
            cursor,
            focus: focus.prev(),
        },
        closed => closed,
    }
}

/// Insert a character at the cursor. Only the value part accepts text.
pub fn handle_char_input(form: FilterForm, ch: char) -> FilterForm {
    match form {
        FilterForm::Open {
            field,
            operation,
            mut value,
            cursor,
            focus: FormFocus::Value,
        } => {
            value.insert(byte_index(&value, cursor), ch);
            FilterForm::Open {
                field,
                operation,
                value,
                cursor: cursor + 1,
                focus: FormFocus::Value,
            }
        }
        other => other,
    }
}

/// Delete the character before the cursor.
pub fn handle_backspace(form: FilterForm) -> FilterForm {
    match form {
        FilterForm::Open {
            field,
            operation,
            mut value,
            cursor,
            focus: FormFocus::Value,
        } if cursor > 0 => {
            value.remove(byte_index(&value, cursor - 1));
            FilterForm::Open {
                field,
                operation,
                value,
                cursor: cursor - 1,
                focus: FormFocus::Value,
            }
        }
        other => other,
    }
}

/// Left: previous choice on a chooser, cursor left on the value.
///
/// `field_count` is the size of the filterable registry.
pub fn handle_left(form: FilterForm, field_count: usize) -> FilterForm {
    step_choice(form, field_count, false)
}

/// Right: next choice on a chooser, cursor right on the value.
pub fn handle_right(form: FilterForm, field_count: usize) -> FilterForm {
    step_choice(form, field_count, true)
}

fn wrap_step(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

fn step_choice(form: FilterForm, field_count: usize, forward: bool) -> FilterForm {
    match form {
        FilterForm::Open {
            field,
            operation,
            value,
            cursor,
            focus,
        } => {
            let (field, operation, cursor) = match focus {
                FormFocus::Field => (wrap_step(field, field_count, forward), operation, cursor),
                FormFocus::Operation => (
                    field,
                    wrap_step(operation, FilterOperation::KNOWN.len(), forward),
                    cursor,
                ),
                FormFocus::Value => {
                    let max = value.chars().count();
                    let cursor = if forward {
                        (cursor + 1).min(max)
                    } else {
                        cursor.saturating_sub(1)
                    };
                    (field, operation, cursor)
                }
            };
            FilterForm::Open {
                field,
                operation,
                value,
                cursor,
                focus,
            }
        }
        closed => closed,
    }
}

/// Build the clause draft the form currently describes.
///
/// `field_names` are the filterable keys in registry order. An out-of-range
/// field index yields an empty field, which the clause set rejects.
pub fn draft(form: &FilterForm, field_names: &[&str]) -> Option<ClauseDraft> {
    match form {
        FilterForm::Open {
            field,
            operation,
            value,
            ..
        } => {
            let field = field_names.get(*field).copied().unwrap_or_default();
            let operation = FilterOperation::KNOWN
                .get(*operation)
                .map(|op| op.as_str().to_string())
                .unwrap_or_default();
            Some(ClauseDraft::new(field, operation, value.clone()))
        }
        FilterForm::Closed => None,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_form_tests.rs"]
mod tests;
