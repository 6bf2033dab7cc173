//! Report formatting for tri-state values and forms.
//!
//! Pure functions — (data, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::display::{Presentation, display_attributes, widget_config};
use crate::form::FormSnapshot;
use crate::types::{DisplayAttributes, OutputFormat, TriState, WidgetConfig};

/// Everything the presentation layer derives from one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateReport {
    pub value: TriState,
    pub serialized: &'static str,
    pub label: String,
    pub style_token: String,
    pub icon: String,
    pub display: DisplayAttributes,
    pub widget: WidgetConfig,
}

/// Collect every mapping for `value` under `presentation`.
pub fn describe(value: TriState, presentation: &Presentation) -> StateReport {
    StateReport {
        value,
        serialized: value.as_str(),
        label: presentation.label(value),
        style_token: presentation.style_token(value),
        icon: presentation.icon(value),
        display: display_attributes(value),
        widget: widget_config(value),
    }
}

/// Format a state report for output.
pub fn format_state(report: &StateReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_state_human(report),
        OutputFormat::Json => format_json(report),
    }
}

/// Format a form snapshot for output.
pub fn format_form(snapshot: &FormSnapshot, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_form_human(snapshot),
        OutputFormat::Json => format_json(snapshot),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_state_human(report: &StateReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Value:          {}\n", report.serialized));
    out.push_str(&format!("Label:          {}\n", report.label));
    out.push_str(&format!("Style:          {}\n", report.style_token));
    out.push_str(&format!("Icon:           {}\n", report.icon));
    out.push_str(&format!("Checked:        {}\n", report.display.checked));
    out.push_str(&format!("Indeterminate:  {}\n", report.display.indeterminate));
    out
}

fn format_form_human(snapshot: &FormSnapshot) -> String {
    if snapshot.entries.is_empty() {
        return "(no fields)\n".to_string();
    }

    let width = snapshot
        .entries
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (key, value) in &snapshot.entries {
        out.push_str(&format!("{:width$}  {}\n", key, value, width = width));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize report to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
