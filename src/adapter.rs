//! Glue for two-state checkbox widgets.
//!
//! A binary checkbox only ever emits `true` or `false`. These helpers
//! recover the intended tri-state transition from what it emits, and
//! produce the widget configuration and markup that bind a form field
//! to such a checkbox.

use serde::Serialize;

use crate::cycle::{TriStateField, cycle_tri_state};
use crate::display::display_attributes;
use crate::error::TriStateError;
use crate::types::TriState;

/// Resolve the next value after a binary checkbox emitted `emitted`.
///
/// | current  | emitted | next     |
/// |----------|---------|----------|
/// | Unset    | true    | Affirmed |
/// | Affirmed | false   | Denied   |
/// | Denied   | false   | Unset    |
///
/// Any other combination falls back to the regular cycle, so
/// `(Affirmed, true)` yields `Denied`.
pub fn resolve_from_binary_event(current: TriState, emitted: bool) -> TriState {
    match (current, emitted) {
        (TriState::Unset, true) => TriState::Affirmed,
        (TriState::Affirmed, false) => TriState::Denied,
        (TriState::Denied, false) => TriState::Unset,
        (TriState::Unset, false) | (TriState::Affirmed, true) | (TriState::Denied, true) => {
            cycle_tri_state(current)
        }
    }
}

/// Change-event handler: apply [`resolve_from_binary_event`] to a field.
pub fn handle_binary_change<F: TriStateField + ?Sized>(
    field: &mut F,
    emitted: bool,
) -> Result<(), TriStateError> {
    let current = field.current()?;
    let next = resolve_from_binary_event(current, emitted);
    tracing::debug!(from = %current, emitted, to = %next, "binary checkbox change");
    field.set(next);
    Ok(())
}

// ============================================================================
// WIDGET CONFIGURATION
// ============================================================================

/// Attribute set for a binary checkbox bound to a tri-state field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxConfig {
    pub value: TriState,
    pub input_id: String,
    pub name: String,
    pub indeterminate: bool,
    /// Always true: the widget emits plain booleans.
    pub binary: bool,
}

pub fn checkbox_config(value: TriState, input_id: &str, name: &str) -> CheckboxConfig {
    CheckboxConfig {
        value,
        input_id: input_id.to_string(),
        name: name.to_string(),
        indeterminate: display_attributes(value).indeterminate,
        binary: true,
    }
}

// ============================================================================
// MARKUP TEMPLATE
// ============================================================================

const DEFAULT_CONTAINER_CLASSES: &str = "flex items-center gap-2";
const DEFAULT_LABEL_CLASSES: &str = "whitespace-nowrap text-sm";

/// Options for [`render_checkbox_template`]. Empty strings use the default.
#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
    pub label: Option<String>,
    pub input_id: Option<String>,
    pub name: Option<String>,
    pub container_classes: Option<String>,
    pub label_classes: Option<String>,
}

/// Checkbox markup bound to `form.controls.<field_name>`.
pub fn render_checkbox_template(field_name: &str, options: &TemplateOptions) -> String {
    let or_default = |opt: &Option<String>, default: String| match opt.as_deref() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default,
    };

    let input_id = or_default(&options.input_id, field_name.to_string());
    let name = or_default(&options.name, field_name.to_string());
    let label = or_default(&options.label, format!("Has {}?", field_name));
    let container_classes =
        or_default(&options.container_classes, DEFAULT_CONTAINER_CLASSES.to_string());
    let label_classes = or_default(&options.label_classes, DEFAULT_LABEL_CLASSES.to_string());

    format!(
        r#"<div class="{container_classes}">
  <p-checkbox
    [value]="form.controls.{field_name}.value"
    inputId="{input_id}"
    name="{name}"
    [indeterminate]="form.controls.{field_name}.value === null"
    [binary]="true"
    (onChange)="turnToTriState(form.controls.{field_name})" />
  <label class="{label_classes}" for="{input_id}">
    {label}
  </label>
</div>"#
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_transitions() {
        assert_eq!(resolve_from_binary_event(TriState::Unset, true), TriState::Affirmed);
        assert_eq!(resolve_from_binary_event(TriState::Affirmed, false), TriState::Denied);
        assert_eq!(resolve_from_binary_event(TriState::Denied, false), TriState::Unset);
    }

    #[test]
    fn unmatched_combinations_fall_back_to_cycle() {
        assert_eq!(resolve_from_binary_event(TriState::Affirmed, true), TriState::Denied);
        assert_eq!(resolve_from_binary_event(TriState::Unset, false), TriState::Affirmed);
        assert_eq!(resolve_from_binary_event(TriState::Denied, true), TriState::Unset);
    }

    #[test]
    fn change_handler_writes_resolved_value() {
        let mut field: Option<bool> = Some(false);
        handle_binary_change(&mut field, false).unwrap();
        assert_eq!(field, None);
    }

    #[test]
    fn change_handler_rejects_malformed_field() {
        let mut field = String::from("1");
        assert!(handle_binary_change(&mut field, true).is_err());
        assert_eq!(field, "1");
    }

    #[test]
    fn checkbox_config_is_binary_and_indeterminate_for_unset() {
        let config = checkbox_config(TriState::Unset, "hasFusing", "hasFusing");
        assert!(config.binary);
        assert!(config.indeterminate);
        assert_eq!(config.input_id, "hasFusing");

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["inputId"], "hasFusing");
    }

    #[test]
    fn template_uses_defaults() {
        let markup = render_checkbox_template("warranty", &TemplateOptions::default());
        assert!(markup.starts_with(r#"<div class="flex items-center gap-2">"#));
        assert!(markup.contains(r#"inputId="warranty""#));
        assert!(markup.contains("Has warranty?"));
        assert!(markup.contains("turnToTriState(form.controls.warranty)"));
        assert!(markup.contains(r#"class="whitespace-nowrap text-sm""#));
    }

    #[test]
    fn template_options_override_and_empty_falls_back() {
        let options = TemplateOptions {
            label: Some("Is Active?".into()),
            input_id: Some("active-cb".into()),
            name: Some(String::new()),
            ..Default::default()
        };
        let markup = render_checkbox_template("isActive", &options);
        assert!(markup.contains("Is Active?"));
        assert!(markup.contains(r#"for="active-cb""#));
        assert!(markup.contains(r#"name="isActive""#));
    }
}
