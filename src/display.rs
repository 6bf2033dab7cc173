//! Presentation mapping: tri-state value → display metadata.
//!
//! Pure functions, no I/O. Each mapping owns one default table; callers
//! pass partial overrides that are merged over it per call.

use crate::types::{DisplayAttributes, IconSet, StateOverrides, StateTable, TriState, WidgetConfig};

/// Default label table.
pub fn default_labels() -> StateTable<String> {
    StateTable::from_strs("Unknown", "Yes", "No")
}

/// Default style tokens (utility CSS classes).
pub fn default_style_tokens() -> StateTable<String> {
    StateTable::from_strs(
        "text-yellow-600 bg-yellow-50 border-yellow-300",
        "text-green-600 bg-green-50 border-green-300",
        "text-red-600 bg-red-50 border-red-300",
    )
}

/// Display text for `value`.
///
/// An override of `""` yields `""`; it is not treated as missing.
pub fn label(value: TriState, overrides: Option<&StateOverrides>) -> String {
    lookup(default_labels(), value, overrides)
}

/// Style token for `value`, with the same merge rules as [`label`].
pub fn style_token(value: TriState, overrides: Option<&StateOverrides>) -> String {
    lookup(default_style_tokens(), value, overrides)
}

fn lookup(
    defaults: StateTable<String>,
    value: TriState,
    overrides: Option<&StateOverrides>,
) -> String {
    match overrides {
        Some(overrides) => defaults.merged(overrides).get(value).clone(),
        None => defaults.get(value).clone(),
    }
}

/// Icon table for a set: minus / check / times.
pub fn icon_table(set: &IconSet) -> StateTable<String> {
    let p = set.prefix();
    StateTable {
        unset: format!("{p} {p}-minus"),
        affirmed: format!("{p} {p}-check"),
        denied: format!("{p} {p}-times"),
    }
}

/// Icon class string for `value` in `set`.
pub fn icon(value: TriState, set: &IconSet) -> String {
    icon_table(set).get(value).clone()
}

/// Checked/indeterminate flags for a two-state checkbox.
pub fn display_attributes(value: TriState) -> DisplayAttributes {
    match value {
        TriState::Unset => DisplayAttributes {
            checked: false,
            indeterminate: true,
        },
        TriState::Affirmed => DisplayAttributes {
            checked: true,
            indeterminate: false,
        },
        TriState::Denied => DisplayAttributes {
            checked: false,
            indeterminate: false,
        },
    }
}

/// Configuration for a checkbox widget running in three-way mode.
pub fn widget_config(value: TriState) -> WidgetConfig {
    WidgetConfig {
        value,
        indeterminate: display_attributes(value).indeterminate,
        tri_state: true,
    }
}

/// Bundle of per-caller overrides, resolved once and reused per render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presentation {
    pub labels: StateOverrides,
    pub styles: StateOverrides,
    pub icon_set: IconSet,
}

impl Presentation {
    pub fn label(&self, value: TriState) -> String {
        label(value, Some(&self.labels))
    }

    pub fn style_token(&self, value: TriState) -> String {
        style_token(value, Some(&self.styles))
    }

    pub fn icon(&self, value: TriState) -> String {
        icon(value, &self.icon_set)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels_are_unknown_yes_no() {
        assert_eq!(label(TriState::Unset, None), "Unknown");
        assert_eq!(label(TriState::Affirmed, None), "Yes");
        assert_eq!(label(TriState::Denied, None), "No");
    }

    #[test]
    fn explicit_empty_label_is_respected() {
        let overrides = StateOverrides::only(TriState::Unset, "");
        assert_eq!(label(TriState::Unset, Some(&overrides)), "");
        assert_eq!(label(TriState::Affirmed, Some(&overrides)), "Yes");
    }

    #[test]
    fn partial_label_override_falls_back() {
        let overrides = StateOverrides {
            affirmed: Some("Verified".into()),
            ..Default::default()
        };
        assert_eq!(label(TriState::Affirmed, Some(&overrides)), "Verified");
        assert_eq!(label(TriState::Denied, Some(&overrides)), "No");
    }

    #[test]
    fn style_tokens_are_distinct_per_state() {
        let tokens: Vec<String> = TriState::ALL.iter().map(|&v| style_token(v, None)).collect();
        assert_eq!(tokens[0], "text-yellow-600 bg-yellow-50 border-yellow-300");
        assert_ne!(tokens[0], tokens[1]);
        assert_ne!(tokens[1], tokens[2]);
        assert_ne!(tokens[0], tokens[2]);
    }

    #[test]
    fn style_override_wins() {
        let overrides = StateOverrides::only(TriState::Denied, "bg-red-100 text-red-800");
        assert_eq!(
            style_token(TriState::Denied, Some(&overrides)),
            "bg-red-100 text-red-800"
        );
    }

    #[test]
    fn icons_per_set() {
        assert_eq!(icon(TriState::Unset, &IconSet::PrimeIcons), "pi pi-minus");
        assert_eq!(icon(TriState::Affirmed, &IconSet::PrimeIcons), "pi pi-check");
        assert_eq!(icon(TriState::Denied, &IconSet::PrimeIcons), "pi pi-times");
        assert_eq!(icon(TriState::Affirmed, &IconSet::FontAwesome), "fa fa-check");
        let custom = IconSet::Custom { prefix: "bi".into() };
        assert_eq!(icon(TriState::Denied, &custom), "bi bi-times");
    }

    #[test]
    fn display_attributes_table() {
        assert_eq!(
            display_attributes(TriState::Unset),
            DisplayAttributes { checked: false, indeterminate: true }
        );
        assert_eq!(
            display_attributes(TriState::Affirmed),
            DisplayAttributes { checked: true, indeterminate: false }
        );
        assert_eq!(
            display_attributes(TriState::Denied),
            DisplayAttributes { checked: false, indeterminate: false }
        );
    }

    #[test]
    fn widget_config_marks_tri_state_mode() {
        for value in TriState::ALL {
            let config = widget_config(value);
            assert_eq!(config.value, value);
            assert!(config.tri_state);
            assert_eq!(config.indeterminate, value == TriState::Unset);
        }
    }

    #[test]
    fn presentation_applies_its_overrides() {
        let presentation = Presentation {
            labels: StateOverrides::only(TriState::Unset, "?"),
            styles: StateOverrides::default(),
            icon_set: IconSet::FontAwesome,
        };
        assert_eq!(presentation.label(TriState::Unset), "?");
        assert_eq!(presentation.label(TriState::Denied), "No");
        assert_eq!(presentation.icon(TriState::Unset), "fa fa-minus");
    }
}
