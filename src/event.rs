//! Some code around handling events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Events sent to the main thread.
#[derive(Debug)]
pub enum BarraceEvent {
    Resize,
    KeyInput(KeyEvent),

    /// The advance timer fired. Carries the generation of the arm that fired.
    Advance(u64),
    Terminate,
}

/// Handle a [`KeyEvent`]. Returns `true` if the app should quit.
pub fn handle_key_event_or_break(event: KeyEvent, app: &mut App) -> bool {
    if event.modifiers.is_empty() || event.modifiers == KeyModifiers::SHIFT {
        match event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Char(' ') | KeyCode::Char('f') => app.toggle_pause(),
            KeyCode::Right | KeyCode::Char('l') => app.step(),
            KeyCode::Char('r') => app.restart(),
            _ => {}
        }
    } else if let KeyModifiers::CONTROL = event.modifiers {
        if event.code == KeyCode::Char('c') {
            return true;
        }
    }

    false
}
