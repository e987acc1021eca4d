use crate::engine::{Direction, Input};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A keypress that means something to the program
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Reset,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w')) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s')) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a')) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d')) => Some(Command::Right),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Reset),
            _ => None,
        }
    }

    /// The engine input this command corresponds to, if any
    pub(crate) fn to_input(self) -> Option<Input> {
        match self {
            Command::Quit => None,
            Command::Up => Some(Input::Turn(Direction::Up)),
            Command::Down => Some(Input::Turn(Direction::Down)),
            Command::Left => Some(Input::Turn(Direction::Left)),
            Command::Right => Some(Input::Turn(Direction::Right)),
            Command::Reset => Some(Input::Reset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('a'), KeyModifiers::NONE, Some(Command::Left))]
    #[case(KeyCode::Char('s'), KeyModifiers::NONE, Some(Command::Down))]
    #[case(KeyCode::Char('d'), KeyModifiers::NONE, Some(Command::Right))]
    #[case(KeyCode::Char(' '), KeyModifiers::NONE, Some(Command::Reset))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Char('W'), KeyModifiers::SHIFT, None)]
    #[case(KeyCode::Up, KeyModifiers::NONE, None)]
    #[case(KeyCode::Enter, KeyModifiers::NONE, None)]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(Command::from_key_event(KeyEvent::new(code, modifiers)), cmd);
    }

    #[rstest]
    #[case(Command::Up, Some(Input::Turn(Direction::Up)))]
    #[case(Command::Down, Some(Input::Turn(Direction::Down)))]
    #[case(Command::Left, Some(Input::Turn(Direction::Left)))]
    #[case(Command::Right, Some(Input::Turn(Direction::Right)))]
    #[case(Command::Reset, Some(Input::Reset))]
    #[case(Command::Quit, None)]
    fn test_to_input(#[case] cmd: Command, #[case] input: Option<Input>) {
        assert_eq!(cmd.to_input(), input);
    }
}
