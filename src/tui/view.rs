//! Pure rendering: map App state to ratatui widget trees.
//!
//! `render()` lays out the common chrome and dispatches on the screen.
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget().

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::display::Presentation;
use crate::form::{FormField, TriStateForm};
use crate::report::format_form;
use crate::types::OutputFormat;

use super::state::{App, Screen};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // status
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&app.screen), chunks[0]);

    match &app.screen {
        Screen::Form { cursor } => {
            render_form(&app.form, &app.presentation, *cursor, frame, chunks[1]);
        }
        Screen::Snapshot { .. } => {
            render_snapshot(&app.form, frame, chunks[1]);
        }
    }

    if let Some(status) = &app.status {
        let line = Paragraph::new(Span::styled(format!("  {}", status), theme::STYLE_ERROR));
        frame.render_widget(line, chunks[2]);
    }

    frame.render_widget(render_help(&app.screen), chunks[3]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(screen: &Screen) -> Paragraph<'static> {
    let title_text = match screen {
        Screen::Form { .. } => "Tri-State Form",
        Screen::Snapshot { .. } => "Current Form State",
    };

    Paragraph::new(Line::from(vec![Span::styled(title_text, theme::STYLE_TITLE)]))
}

fn render_help(screen: &Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Form { .. } => {
            "[j/k] move  [Space] cycle  [y/n] check/uncheck  [c] cycle all  [r] reset all  [s] state  [q] quit"
        }
        Screen::Snapshot { .. } => "[s/Esc] back  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// SCREEN: FORM
// ============================================================================

fn render_form(
    form: &TriStateForm,
    presentation: &Presentation,
    cursor: usize,
    frame: &mut Frame,
    area: Rect,
) {
    if form.is_empty() {
        let empty = Paragraph::new(Span::styled("  No fields configured", theme::STYLE_DIM));
        frame.render_widget(empty, area);
        return;
    }

    let label_width = form
        .fields()
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = form
        .fields()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let line = field_line(field, presentation, label_width);
            if i == cursor {
                line.style(theme::STYLE_CURSOR)
            } else {
                line
            }
        })
        .collect();

    // Keep the cursor row visible.
    let visible_height = area.height as usize;
    let scroll_offset = if cursor >= visible_height {
        cursor - visible_height + 1
    } else {
        0
    };

    let list = Paragraph::new(lines).scroll((scroll_offset as u16, 0));
    frame.render_widget(list, area);
}

/// One checkbox row: glyph, label, state label, icon class.
fn field_line(field: &FormField, presentation: &Presentation, label_width: usize) -> Line<'static> {
    let style = theme::state_style(field.value);
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{} ", theme::checkbox_glyph(field.value)), style),
        Span::raw(format!("{:width$}  ", field.label, width = label_width)),
        Span::styled(presentation.label(field.value), style),
        Span::styled(format!("  {}", presentation.icon(field.value)), theme::STYLE_DIM),
    ])
}

// ============================================================================
// SCREEN: SNAPSHOT
// ============================================================================

fn render_snapshot(form: &TriStateForm, frame: &mut Frame, area: Rect) {
    let json = format_form(&form.snapshot(), OutputFormat::Json);
    let lines: Vec<Line> = json
        .lines()
        .map(|l| Line::from(Span::styled(format!("  {}", l), theme::STYLE_INTERACTIVE)))
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// TESTS
// ============================================================================
