use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    CursorUp,
    CursorDown,
    Submit,
    Quit,
    /// Any other key press.
    Other,
    Resize,
}

impl TuiEvent {
    /// The core action for this event. `Resize` only asks for a redraw.
    pub fn to_action(self) -> Option<Action> {
        match self {
            TuiEvent::CursorUp => Some(Action::MoveUp),
            TuiEvent::CursorDown => Some(Action::MoveDown),
            TuiEvent::Submit => Some(Action::Confirm),
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::Other => Some(Action::AnyKey),
            TuiEvent::Resize => None,
        }
    }
}

/// Block until the next event we care about.
pub fn read_event() -> io::Result<TuiEvent> {
    loop {
        if let Some(event) = map_event(event::read()?) {
            return Ok(event);
        }
    }
}

pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Release/repeat events arrive on terminals with keyboard enhancement
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        // Raw mode swallows SIGINT, so Ctrl+C has to quit explicitly
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        _ => Some(TuiEvent::Other),
    }
}
