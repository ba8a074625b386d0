use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction, Speed};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Self::turn(Direction::Up),
            KeyCode::Down => Self::turn(Direction::Down),
            KeyCode::Left => Self::turn(Direction::Left),
            KeyCode::Right => Self::turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Self::turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Self::turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Self::turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Self::turn(Direction::Right),

            // Run control
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                KeyAction::Command(Command::TogglePause)
            }
            KeyCode::Enter => KeyAction::Command(Command::Start),
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Command(Command::Reset),

            // Speed presets
            KeyCode::Char(digit @ '1'..='3') => {
                let speed = Speed::ALL[(digit as u8 - b'1') as usize];
                KeyAction::Command(Command::SetSpeed(speed))
            }

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }

    fn turn(direction: Direction) -> KeyAction {
        KeyAction::Command(Command::RequestDirection(direction))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(handler: &InputHandler, code: KeyCode) -> KeyAction {
        handler.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_and_wasd_keys_match() {
        let handler = InputHandler::new();

        let pairs = [
            (KeyCode::Up, 'w', Direction::Up),
            (KeyCode::Down, 's', Direction::Down),
            (KeyCode::Left, 'a', Direction::Left),
            (KeyCode::Right, 'd', Direction::Right),
        ];

        for (arrow, letter, direction) in pairs {
            let expected = KeyAction::Command(Command::RequestDirection(direction));
            assert_eq!(press(&handler, arrow), expected);
            assert_eq!(press(&handler, KeyCode::Char(letter)), expected);
        }
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::Command(Command::RequestDirection(Direction::Up))
        );
    }

    #[test]
    fn test_run_control_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            press(&handler, KeyCode::Char(' ')),
            KeyAction::Command(Command::TogglePause)
        );
        assert_eq!(
            press(&handler, KeyCode::Char('p')),
            KeyAction::Command(Command::TogglePause)
        );
        assert_eq!(
            press(&handler, KeyCode::Enter),
            KeyAction::Command(Command::Start)
        );
        assert_eq!(
            press(&handler, KeyCode::Char('R')),
            KeyAction::Command(Command::Reset)
        );
    }

    #[test]
    fn test_speed_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            press(&handler, KeyCode::Char('1')),
            KeyAction::Command(Command::SetSpeed(Speed::Slow))
        );
        assert_eq!(
            press(&handler, KeyCode::Char('2')),
            KeyAction::Command(Command::SetSpeed(Speed::Medium))
        );
        assert_eq!(
            press(&handler, KeyCode::Char('3')),
            KeyAction::Command(Command::SetSpeed(Speed::Fast))
        );
        assert_eq!(press(&handler, KeyCode::Char('4')), KeyAction::None);
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(&handler, KeyCode::Esc), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(press(&handler, KeyCode::Char('x')), KeyAction::None);
    }
}
