//! A set of independent tri-state fields.
//!
//! Each field follows the same transition rule on its own; the form
//! only adds bulk operations that apply that rule field by field.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

use crate::adapter::handle_binary_change;
use crate::cycle::turn_field;
use crate::error::TriStateError;
use crate::types::TriState;

/// A named tri-state field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Control name, e.g. `hasWarranty`.
    pub key: String,
    /// Text shown next to the checkbox.
    pub label: String,
    #[serde(default)]
    pub value: TriState,
}

impl FormField {
    /// A field starting at `Unset`.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        FormField {
            key: key.into(),
            label: label.into(),
            value: TriState::Unset,
        }
    }
}

/// Ordered collection of fields. Keys are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriStateForm {
    fields: Vec<FormField>,
}

impl TriStateForm {
    /// Build a form, dropping any field whose key repeats an earlier one.
    pub fn new(fields: Vec<FormField>) -> Self {
        let mut unique: Vec<FormField> = Vec::with_capacity(fields.len());
        for field in fields {
            if unique.iter().any(|f| f.key == field.key) {
                tracing::warn!(key = %field.key, "duplicate form field ignored");
                continue;
            }
            unique.push(field);
        }
        TriStateForm { fields: unique }
    }

    /// Build a form from bare keys, labelling each `"<key>?"`.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = keys
            .into_iter()
            .map(|k| {
                let key: String = k.into();
                let label = format!("{}?", key);
                FormField::new(key, label)
            })
            .collect();
        TriStateForm::new(fields)
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Current value of `key`.
    pub fn get(&self, key: &str) -> Result<TriState, TriStateError> {
        self.field(key).map(|f| f.value)
    }

    fn field(&self, key: &str) -> Result<&FormField, TriStateError> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .ok_or_else(|| TriStateError::UnknownField { key: key.to_string() })
    }

    fn field_at_mut(&mut self, index: usize) -> Result<&mut FormField, TriStateError> {
        let len = self.fields.len();
        self.fields
            .get_mut(index)
            .ok_or(TriStateError::FieldIndexOutOfRange { index, len })
    }

    /// Advance one field by key.
    pub fn cycle(&mut self, key: &str) -> Result<TriState, TriStateError> {
        let index = self
            .fields
            .iter()
            .position(|f| f.key == key)
            .ok_or_else(|| TriStateError::UnknownField { key: key.to_string() })?;
        self.cycle_at(index)
    }

    /// Advance one field by position.
    pub fn cycle_at(&mut self, index: usize) -> Result<TriState, TriStateError> {
        let field = self.field_at_mut(index)?;
        turn_field(&mut field.value)?;
        Ok(field.value)
    }

    /// Apply a binary checkbox event to the field at `index`.
    pub fn emit_at(&mut self, index: usize, emitted: bool) -> Result<TriState, TriStateError> {
        let field = self.field_at_mut(index)?;
        handle_binary_change(&mut field.value, emitted)?;
        Ok(field.value)
    }

    /// Advance every field once.
    pub fn cycle_all(&mut self) {
        for field in &mut self.fields {
            field.value = field.value.cycle();
        }
    }

    /// Put every field back to `Unset`.
    pub fn reset_all(&mut self) {
        for field in &mut self.fields {
            field.value = TriState::Unset;
        }
    }

    /// Key → value view of the form, in field order.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            entries: self
                .fields
                .iter()
                .map(|f| (f.key.clone(), f.value))
                .collect(),
        }
    }
}

/// Form values keyed by field, in field order.
///
/// Serializes as a JSON object: `{"isActive": true, "isPublic": null}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub entries: Vec<(String, TriState)>,
}

impl Serialize for FormSnapshot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
