//! The tri-state transition.
//!
//! `cycle_tri_state` is the only place that knows the cycle order.
//! Everything else that advances a value goes through it.

use std::cell::Cell;

use crate::error::TriStateError;
use crate::types::TriState;

/// Next value in the fixed cycle `Unset → Affirmed → Denied → Unset`.
pub fn cycle_tri_state(value: TriState) -> TriState {
    match value {
        TriState::Unset => TriState::Affirmed,
        TriState::Affirmed => TriState::Denied,
        TriState::Denied => TriState::Unset,
    }
}

impl TriState {
    /// Method form of [`cycle_tri_state`].
    pub fn cycle(self) -> TriState {
        cycle_tri_state(self)
    }
}

/// Bare-value entry point: returns the next value.
///
/// The caller writes it back into its own storage.
pub fn turn_to_tri_state(value: TriState) -> TriState {
    cycle_tri_state(value)
}

// ============================================================================
// MUTABLE-FIELD HANDLES
// ============================================================================

/// A caller-owned field the library may read and overwrite.
///
/// Reading is fallible because some storage (serialized text) can hold
/// values outside the three members. Such a field is a contract
/// violation and must be reported, never coerced.
pub trait TriStateField {
    /// Current value of the field.
    fn current(&self) -> Result<TriState, TriStateError>;

    /// Replace the field's value.
    fn set(&mut self, value: TriState);
}

/// Handle entry point: advance the field in place.
///
/// On error the field is left untouched.
pub fn turn_field<F: TriStateField + ?Sized>(field: &mut F) -> Result<(), TriStateError> {
    let current = field.current()?;
    let next = cycle_tri_state(current);
    tracing::debug!(from = %current, to = %next, "cycling tri-state field");
    field.set(next);
    Ok(())
}

impl TriStateField for TriState {
    fn current(&self) -> Result<TriState, TriStateError> {
        Ok(*self)
    }

    fn set(&mut self, value: TriState) {
        *self = value;
    }
}

impl TriStateField for Option<bool> {
    fn current(&self) -> Result<TriState, TriStateError> {
        Ok(TriState::from(*self))
    }

    fn set(&mut self, value: TriState) {
        *self = value.as_option();
    }
}

/// Shared interior-mutable storage: only `&Cell` is needed to write.
impl TriStateField for &Cell<TriState> {
    fn current(&self) -> Result<TriState, TriStateError> {
        Ok(self.get())
    }

    fn set(&mut self, value: TriState) {
        Cell::set(*self, value);
    }
}

/// Serialized storage, e.g. the value attribute of a form input.
///
/// Read strictly: `"maybe"` in the field is a contract violation.
impl TriStateField for String {
    fn current(&self) -> Result<TriState, TriStateError> {
        self.parse::<TriState>().map_err(|_| {
            tracing::warn!(stored = %self, "field holds a non tri-state value");
            TriStateError::ContractViolation {
                detail: format!("field holds '{}', which is not true, false or null", self),
            }
        })
    }

    fn set(&mut self, value: TriState) {
        self.clear();
        self.push_str(value.as_str());
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// A form-control stand-in that counts writes.
    struct Control {
        value: TriState,
        writes: usize,
    }

    impl TriStateField for Control {
        fn current(&self) -> Result<TriState, TriStateError> {
            Ok(self.value)
        }

        fn set(&mut self, value: TriState) {
            self.value = value;
            self.writes += 1;
        }
    }

    #[test]
    fn cycle_order_is_fixed() {
        assert_eq!(cycle_tri_state(TriState::Unset), TriState::Affirmed);
        assert_eq!(cycle_tri_state(TriState::Affirmed), TriState::Denied);
        assert_eq!(cycle_tri_state(TriState::Denied), TriState::Unset);
    }

    #[test]
    fn cycle_has_length_three() {
        for value in TriState::ALL {
            assert_eq!(value.cycle().cycle().cycle(), value);
            assert_ne!(value.cycle(), value);
        }
    }

    #[test]
    fn bare_value_returns_next() {
        assert_eq!(turn_to_tri_state(TriState::Affirmed), TriState::Denied);
    }

    #[test]
    fn handle_is_advanced_in_place() {
        let mut control = Control {
            value: TriState::Unset,
            writes: 0,
        };
        turn_field(&mut control).unwrap();
        assert_eq!(control.value, TriState::Affirmed);
        assert_eq!(control.writes, 1);

        turn_field(&mut control).unwrap();
        turn_field(&mut control).unwrap();
        assert_eq!(control.value, TriState::Unset);
        assert_eq!(control.writes, 3);
    }

    #[test]
    fn option_bool_field_cycles_through_none() {
        let mut field: Option<bool> = None;
        turn_field(&mut field).unwrap();
        assert_eq!(field, Some(true));
        turn_field(&mut field).unwrap();
        assert_eq!(field, Some(false));
        turn_field(&mut field).unwrap();
        assert_eq!(field, None);
    }

    #[test]
    fn shared_cell_field_cycles() {
        let cell = Cell::new(TriState::Denied);
        let shared: &Cell<TriState> = &cell;
        let mut handle = shared;
        turn_field(&mut handle).unwrap();
        assert_eq!(cell.get(), TriState::Unset);

        // A second shared borrow sees and advances the same storage.
        let mut other = &cell;
        turn_field(&mut other).unwrap();
        assert_eq!(shared.get(), TriState::Affirmed);
    }

    #[test]
    fn string_field_cycles_canonical_text() {
        let mut field = String::new();
        turn_field(&mut field).unwrap();
        assert_eq!(field, "true");
        turn_field(&mut field).unwrap();
        assert_eq!(field, "false");
        turn_field(&mut field).unwrap();
        assert_eq!(field, "null");
    }

    #[test]
    fn malformed_string_field_is_rejected_and_untouched() {
        let mut field = String::from("maybe");
        let err = turn_field(&mut field).unwrap_err();
        assert!(matches!(err, TriStateError::ContractViolation { .. }));
        assert_eq!(field, "maybe");
    }
}
