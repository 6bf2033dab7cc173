//! TUI state algebra: pure types, zero effects.
//!
//! Screen variants carry only per-screen transient state (the cursor).
//! The form itself lives in App and is only changed by applying a
//! [`FormEdit`] that the transition function describes.

use crossterm::event::KeyEvent;

use crate::display::Presentation;
use crate::form::TriStateForm;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// The terminal was resized; redraw.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Current screen.
    pub screen: Screen,

    /// The fields being edited.
    pub form: TriStateForm,

    /// Label/style/icon overrides used when rendering values.
    pub presentation: Presentation,

    /// Last error from applying an edit, shown above the help line.
    pub status: Option<String>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Checkbox list.
    Form {
        /// Focused row index.
        cursor: usize,
    },

    /// Read-only JSON view of the form values.
    /// Remembers the form cursor to restore on return.
    Snapshot { cursor: usize },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Form { cursor: 0 }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    /// Advance the focused field one step in the cycle.
    Cycle,
    /// Behave like a binary checkbox emitting `true` / `false`.
    Emit(bool),
    /// Advance every field.
    CycleAll,
    /// Set every field back to unknown.
    ResetAll,
    /// Switch between the form and the JSON view.
    ToggleSnapshot,
    /// Leave the JSON view.
    Back,
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Render this screen.
    Screen(Screen),
    /// Apply an edit to the form, then render this screen.
    Edit { edit: FormEdit, screen: Screen },
    /// Quit the application.
    Quit,
}

/// A change to the form requested by a pure transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEdit {
    /// Cycle the field at this index.
    Cycle(usize),
    /// A binary checkbox at this index emitted a boolean.
    Emit { index: usize, emitted: bool },
    CycleAll,
    ResetAll,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App on the form screen, cursor on the first row.
    pub fn new(form: TriStateForm, presentation: Presentation) -> Self {
        App {
            screen: Screen::default(),
            form,
            presentation,
            status: None,
            should_quit: false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_starts_on_form_top_row() {
        let app = App::new(TriStateForm::from_keys(["a"]), Presentation::default());
        assert_eq!(app.screen, Screen::Form { cursor: 0 });
        assert!(!app.should_quit);
    }

    #[test]
    fn transition_variants_are_distinguishable() {
        let t1 = Transition::Screen(Screen::default());
        let t2 = Transition::Quit;
        let t3 = Transition::Edit {
            edit: FormEdit::ResetAll,
            screen: Screen::default(),
        };

        assert_ne!(t1, t2);
        assert_ne!(t2, t3);
    }
}
