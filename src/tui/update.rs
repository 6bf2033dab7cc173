//! Pure state transitions: (Screen, Action) → Transition.
//!
//! Fully testable without a terminal. Unhandled actions return the
//! current screen unchanged.

use crate::error::TriStateError;
use crate::form::TriStateForm;

use super::state::{Action, FormEdit, Screen, Transition};

/// Pure state transition function.
///
/// `field_count` is the number of rows on the form, used to clamp the cursor.
pub fn update(screen: Screen, action: &Action, field_count: usize) -> Transition {
    match screen {
        Screen::Form { cursor } => update_form(cursor, action, field_count),
        Screen::Snapshot { cursor } => update_snapshot(cursor, action),
    }
}

fn update_form(cursor: usize, action: &Action, len: usize) -> Transition {
    let stay = Screen::Form { cursor };
    match action {
        Action::MoveUp => Transition::Screen(Screen::Form {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => {
            let new_cursor = if len == 0 { 0 } else { (cursor + 1).min(len - 1) };
            Transition::Screen(Screen::Form { cursor: new_cursor })
        }
        Action::Cycle if cursor < len => Transition::Edit {
            edit: FormEdit::Cycle(cursor),
            screen: stay,
        },
        Action::Emit(emitted) if cursor < len => Transition::Edit {
            edit: FormEdit::Emit {
                index: cursor,
                emitted: *emitted,
            },
            screen: stay,
        },
        Action::CycleAll => Transition::Edit {
            edit: FormEdit::CycleAll,
            screen: stay,
        },
        Action::ResetAll => Transition::Edit {
            edit: FormEdit::ResetAll,
            screen: stay,
        },
        Action::ToggleSnapshot => Transition::Screen(Screen::Snapshot { cursor }),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(stay),
    }
}

fn update_snapshot(cursor: usize, action: &Action) -> Transition {
    match action {
        Action::ToggleSnapshot | Action::Back => Transition::Screen(Screen::Form { cursor }),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Snapshot { cursor }),
    }
}

/// Apply a described edit to the form.
pub fn apply_edit(form: &mut TriStateForm, edit: FormEdit) -> Result<(), TriStateError> {
    match edit {
        FormEdit::Cycle(index) => form.cycle_at(index).map(|_| ()),
        FormEdit::Emit { index, emitted } => form.emit_at(index, emitted).map(|_| ()),
        FormEdit::CycleAll => {
            form.cycle_all();
            Ok(())
        }
        FormEdit::ResetAll => {
            form.reset_all();
            Ok(())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
