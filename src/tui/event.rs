use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::Result;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports both press and release
                if key.kind == KeyEventKind::Press {
                    return Ok(AppEvent::Key(key));
                }
            }
        }
        Ok(AppEvent::Tick)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Cancel,
    MoveUp,
    MoveDown,
    NextPage,
    PrevPage,
    Select,
    None,
}

impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Cancel,
            KeyCode::Char('q') | KeyCode::Esc => Action::Cancel,
            KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
            KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
            KeyCode::Char('n') | KeyCode::PageDown | KeyCode::Right => Action::NextPage,
            KeyCode::Char('p') | KeyCode::PageUp | KeyCode::Left => Action::PrevPage,
            KeyCode::Enter => Action::Select,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from(key(KeyCode::Enter)), Action::Select);
        assert_eq!(Action::from(key(KeyCode::Char('j'))), Action::MoveDown);
        assert_eq!(Action::from(key(KeyCode::Up)), Action::MoveUp);
        assert_eq!(Action::from(key(KeyCode::Esc)), Action::Cancel);
        assert_eq!(Action::from(key(KeyCode::PageDown)), Action::NextPage);
        assert_eq!(Action::from(key(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Action::from(ev), Action::Cancel);
        assert_eq!(Action::from(key(KeyCode::Char('c'))), Action::None);
    }
}
