//! Domain types for tri-state checkboxes.
//!
//! The value model, its string form, and the lookup tables the
//! presentation layer reads from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TriStateError;

// ============================================================================
// PRIMITIVES
// ============================================================================

/// A yes/no/unknown value.
///
/// Deliberately not `Option<bool>`: the unknown member is a first-class
/// state with its own label, style and icon, not an absent boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriState {
    /// Unknown / indeterminate. The starting state of every form field.
    #[default]
    Unset,
    /// Yes / true.
    Affirmed,
    /// No / false.
    Denied,
}

impl TriState {
    /// Every member, in cycle order.
    pub const ALL: [TriState; 3] = [TriState::Unset, TriState::Affirmed, TriState::Denied];

    /// Canonical string form: `"null"`, `"true"` or `"false"`.
    pub fn as_str(self) -> &'static str {
        match self {
            TriState::Unset => "null",
            TriState::Affirmed => "true",
            TriState::Denied => "false",
        }
    }

    /// Lenient parse: `"true"` and `"false"` map to their members,
    /// everything else (including `"null"` and `""`) maps to `Unset`.
    ///
    /// Use [`str::parse`] for the strict variant.
    pub fn from_string(input: &str) -> TriState {
        match input {
            "true" => TriState::Affirmed,
            "false" => TriState::Denied,
            _ => TriState::Unset,
        }
    }

    /// Parse under an explicit policy.
    pub fn parse_with(input: &str, policy: ParsePolicy) -> Result<TriState, TriStateError> {
        match policy {
            ParsePolicy::Lenient => Ok(TriState::from_string(input)),
            ParsePolicy::Strict => input.parse(),
        }
    }

    /// The `Option<bool>` image of this value (`Unset` is `None`).
    pub fn as_option(self) -> Option<bool> {
        match self {
            TriState::Unset => None,
            TriState::Affirmed => Some(true),
            TriState::Denied => Some(false),
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse. Only the canonical forms and the empty string are accepted.
impl FromStr for TriState {
    type Err = TriStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(TriState::Affirmed),
            "false" => Ok(TriState::Denied),
            "null" | "" => Ok(TriState::Unset),
            other => Err(TriStateError::InvalidSerializedValue {
                input: other.to_string(),
            }),
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => TriState::Unset,
            Some(true) => TriState::Affirmed,
            Some(false) => TriState::Denied,
        }
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        value.as_option()
    }
}

impl Serialize for TriState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_option().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TriState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<bool>::deserialize(deserializer).map(TriState::from)
    }
}

/// How unrecognized text is treated when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Unrecognized text becomes `Unset`.
    #[default]
    Lenient,
    /// Unrecognized text is an error.
    Strict,
}

// ============================================================================
// LOOKUP TABLES
// ============================================================================

/// One entry per member. Every presentation mapping reads from one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTable<T> {
    pub unset: T,
    pub affirmed: T,
    pub denied: T,
}

impl<T> StateTable<T> {
    /// The entry for `value`.
    pub fn get(&self, value: TriState) -> &T {
        match value {
            TriState::Unset => &self.unset,
            TriState::Affirmed => &self.affirmed,
            TriState::Denied => &self.denied,
        }
    }
}

impl StateTable<String> {
    /// Build a table from string literals.
    pub fn from_strs(unset: &str, affirmed: &str, denied: &str) -> Self {
        StateTable {
            unset: unset.to_string(),
            affirmed: affirmed.to_string(),
            denied: denied.to_string(),
        }
    }

    /// Merge `overrides` over this table.
    ///
    /// A present override wins even when it is the empty string; an
    /// absent one keeps the existing entry.
    pub fn merged(&self, overrides: &StateOverrides) -> StateTable<String> {
        let pick =
            |over: &Option<String>, base: &String| over.clone().unwrap_or_else(|| base.clone());
        StateTable {
            unset: pick(&overrides.unset, &self.unset),
            affirmed: pick(&overrides.affirmed, &self.affirmed),
            denied: pick(&overrides.denied, &self.denied),
        }
    }
}

/// Partial replacement for a [`StateTable<String>`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StateOverrides {
    pub unset: Option<String>,
    pub affirmed: Option<String>,
    pub denied: Option<String>,
}

impl StateOverrides {
    /// Override only the entry for `value`.
    pub fn only(value: TriState, text: impl Into<String>) -> Self {
        let mut overrides = StateOverrides::default();
        let text = Some(text.into());
        match value {
            TriState::Unset => overrides.unset = text,
            TriState::Affirmed => overrides.affirmed = text,
            TriState::Denied => overrides.denied = text,
        }
        overrides
    }

    /// True when no entry is overridden.
    pub fn is_empty(&self) -> bool {
        self.unset.is_none() && self.affirmed.is_none() && self.denied.is_none()
    }
}

// ============================================================================
// ICON SETS
// ============================================================================

/// Icon font used for the state icon.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IconSet {
    /// PrimeIcons (`pi pi-check`).
    #[default]
    PrimeIcons,
    /// Font Awesome (`fa fa-check`).
    FontAwesome,
    /// Any font following the `"{prefix} {prefix}-{name}"` convention.
    Custom { prefix: String },
}

impl IconSet {
    /// Resolve a set by its class prefix. Returns None for blank input.
    pub fn from_name(name: &str) -> Option<IconSet> {
        match name.trim() {
            "" => None,
            "pi" => Some(IconSet::PrimeIcons),
            "fa" => Some(IconSet::FontAwesome),
            other => Some(IconSet::Custom {
                prefix: other.to_string(),
            }),
        }
    }

    /// The class prefix (`"pi"`, `"fa"`, or the custom prefix).
    pub fn prefix(&self) -> &str {
        match self {
            IconSet::PrimeIcons => "pi",
            IconSet::FontAwesome => "fa",
            IconSet::Custom { prefix } => prefix,
        }
    }
}

impl TryFrom<String> for IconSet {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        IconSet::from_name(&name).ok_or_else(|| "icon set name must not be empty".to_string())
    }
}

impl From<IconSet> for String {
    fn from(set: IconSet) -> Self {
        set.prefix().to_string()
    }
}

// ============================================================================
// DERIVED RECORDS
// ============================================================================

/// What a two-state checkbox needs to draw a tri-state value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayAttributes {
    /// True only for `Affirmed`.
    pub checked: bool,
    /// True only for `Unset`.
    pub indeterminate: bool,
}

/// Configuration for a checkbox widget with a native three-way mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    pub value: TriState,
    pub indeterminate: bool,
    /// Always true; marks the widget as running in three-way mode.
    pub tri_state: bool,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_strings_round_trip_leniently() {
        for value in TriState::ALL {
            assert_eq!(TriState::from_string(&value.to_string()), value);
        }
    }

    #[test]
    fn lenient_parse_falls_back_to_unset() {
        assert_eq!(TriState::from_string(""), TriState::Unset);
        assert_eq!(TriState::from_string("null"), TriState::Unset);
        assert_eq!(TriState::from_string("garbage"), TriState::Unset);
        // Exact match only
        assert_eq!(TriState::from_string("True"), TriState::Unset);
    }

    #[test]
    fn strict_parse_rejects_unknown_text() {
        assert_eq!("true".parse::<TriState>(), Ok(TriState::Affirmed));
        assert_eq!("".parse::<TriState>(), Ok(TriState::Unset));
        assert_eq!(
            "garbage".parse::<TriState>(),
            Err(TriStateError::InvalidSerializedValue {
                input: "garbage".into()
            })
        );
    }

    #[test]
    fn parse_with_honors_policy() {
        assert_eq!(
            TriState::parse_with("yes", ParsePolicy::Lenient),
            Ok(TriState::Unset)
        );
        assert!(TriState::parse_with("yes", ParsePolicy::Strict).is_err());
        assert_eq!(
            TriState::parse_with("false", ParsePolicy::Strict),
            Ok(TriState::Denied)
        );
    }

    #[test]
    fn option_bool_conversions_agree() {
        for value in TriState::ALL {
            let opt: Option<bool> = value.into();
            assert_eq!(TriState::from(opt), value);
        }
        assert_eq!(TriState::from(None), TriState::Unset);
    }

    #[test]
    fn serializes_as_json_boolean_or_null() {
        assert_eq!(serde_json::to_string(&TriState::Unset).unwrap(), "null");
        assert_eq!(serde_json::to_string(&TriState::Affirmed).unwrap(), "true");
        let parsed: Vec<TriState> = serde_json::from_str("[false, null, true]").unwrap();
        assert_eq!(
            parsed,
            vec![TriState::Denied, TriState::Unset, TriState::Affirmed]
        );
    }

    #[test]
    fn merge_respects_explicit_empty_override() {
        let table = StateTable::from_strs("Unknown", "Yes", "No");
        let merged = table.merged(&StateOverrides::only(TriState::Unset, ""));
        assert_eq!(merged.get(TriState::Unset), "");
        assert_eq!(merged.get(TriState::Affirmed), "Yes");
        assert_eq!(merged.get(TriState::Denied), "No");
    }

    #[test]
    fn empty_overrides_leave_table_unchanged() {
        let table = StateTable::from_strs("a", "b", "c");
        assert!(StateOverrides::default().is_empty());
        assert_eq!(table.merged(&StateOverrides::default()), table);
    }

    #[test]
    fn icon_set_names_resolve() {
        assert_eq!(IconSet::from_name("pi"), Some(IconSet::PrimeIcons));
        assert_eq!(IconSet::from_name("fa"), Some(IconSet::FontAwesome));
        assert_eq!(
            IconSet::from_name("bi"),
            Some(IconSet::Custom { prefix: "bi".into() })
        );
        assert_eq!(IconSet::from_name("  "), None);
        assert_eq!(IconSet::default().prefix(), "pi");
    }

    #[test]
    fn widget_config_uses_camel_case_keys() {
        let config = WidgetConfig {
            value: TriState::Unset,
            indeterminate: true,
            tri_state: true,
        };
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json["triState"], serde_json::Value::Bool(true));
        assert!(json["value"].is_null());
    }
}
