//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! A key reader thread forwards crossterm events over an mpsc channel;
//! the loop renders, blocks on the channel, and dispatches.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::display::Presentation;
use crate::form::TriStateForm;

use super::state::{Action, App, AppEvent, Transition};
use super::update::{apply_edit, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Cycle),
        KeyCode::Char('y') => Some(Action::Emit(true)),
        KeyCode::Char('n') => Some(Action::Emit(false)),
        KeyCode::Char('c') => Some(Action::CycleAll),
        KeyCode::Char('r') => Some(Action::ResetAll),
        KeyCode::Char('s') => Some(Action::ToggleSnapshot),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                // Windows reports both press and release; act on press only.
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(_) => break,
            };
            if tx.send(forwarded).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive form until the user quits.
///
/// Returns the form with the values the user left it in.
pub fn run(form: TriStateForm, presentation: Presentation) -> io::Result<TriStateForm> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(form, presentation);
    tracing::info!(fields = app.form.len(), "tui started");

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    handle_action(&mut app, &action);
                }
            }
            AppEvent::Resize => {}
        }
    }

    restore_terminal()?;
    tracing::info!("tui stopped");
    Ok(app.form)
}

/// Run one action through the pure transition and apply its outcome.
fn handle_action(app: &mut App, action: &Action) {
    match update(app.screen, action, app.form.len()) {
        Transition::Screen(screen) => {
            app.screen = screen;
        }
        Transition::Edit { edit, screen } => {
            app.status = match apply_edit(&mut app.form, edit) {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!(?edit, error = %e, "form edit failed");
                    Some(e.to_string())
                }
            };
            app.screen = screen;
        }
        Transition::Quit => {
            app.should_quit = true;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
