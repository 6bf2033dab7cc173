//! TUI color semantics and style constants.
//!
//! Terminal counterpart of the default style tokens:
//! - Yellow: unknown (indeterminate checkbox)
//! - Green: yes (checked)
//! - Red: no (unchecked, explicitly answered)
//! - Cyan: interactive elements (keybinding hints)
//! - Dim: de-emphasized (icons, help)

use ratatui::style::{Color, Modifier, Style};

use crate::display::display_attributes;
use crate::types::{StateTable, TriState};

// ============================================================================
// STATE STYLES
// ============================================================================

/// Unknown — yellow.
pub const STYLE_UNSET: Style = Style::new().fg(Color::Yellow);

/// Yes — bold green.
pub const STYLE_AFFIRMED: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// No — red.
pub const STYLE_DENIED: Style = Style::new().fg(Color::Red);

/// One style per member.
pub const STATE_STYLES: StateTable<Style> = StateTable {
    unset: STYLE_UNSET,
    affirmed: STYLE_AFFIRMED,
    denied: STYLE_DENIED,
};

/// Style for a value.
pub fn state_style(value: TriState) -> Style {
    *STATE_STYLES.get(value)
}

/// Checkbox glyph: `[-]` indeterminate, `[x]` checked, `[ ]` unchecked.
pub fn checkbox_glyph(value: TriState) -> &'static str {
    let attrs = display_attributes(value);
    match (attrs.indeterminate, attrs.checked) {
        (true, _) => "[-]",
        (false, true) => "[x]",
        (false, false) => "[ ]",
    }
}

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized metadata — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Cursor row.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Error / status message.
pub const STYLE_ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_styles_have_expected_colors() {
        assert_eq!(state_style(TriState::Unset).fg, Some(Color::Yellow));
        assert_eq!(state_style(TriState::Affirmed).fg, Some(Color::Green));
        assert_eq!(state_style(TriState::Denied).fg, Some(Color::Red));
    }

    #[test]
    fn glyphs_are_distinct() {
        assert_eq!(checkbox_glyph(TriState::Unset), "[-]");
        assert_eq!(checkbox_glyph(TriState::Affirmed), "[x]");
        assert_eq!(checkbox_glyph(TriState::Denied), "[ ]");
    }

    #[test]
    fn cursor_style_is_reversed() {
        assert!(STYLE_CURSOR.add_modifier.contains(Modifier::REVERSED));
    }
}
