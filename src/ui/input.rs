//! Key event mapping (Input -> Action)

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, Phase};

/// Map a key to an Action for the current phase.
pub fn get_action(phase: Phase, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        _ => {}
    }

    match phase {
        Phase::Question => match key {
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveHighlightUp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveHighlightDown),
            KeyCode::Enter => Some(Action::SubmitAnswer),
            KeyCode::Char('n') | KeyCode::Right => Some(Action::Advance),
            KeyCode::Char(c @ '1'..='9') => {
                Some(Action::JumpTo(c as usize - '1' as usize))
            }
            _ => None,
        },
        // The index strip is gone on the completion screen; only the
        // restart control remains.
        Phase::Completed => match key {
            KeyCode::Char('r') => Some(Action::Restart),
            _ => None,
        },
    }
}

/// Handle one key press; returns true when the app should exit.
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(app.phase, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_zero_based_jumps() {
        assert_eq!(
            get_action(Phase::Question, KeyCode::Char('1')),
            Some(Action::JumpTo(0))
        );
        assert_eq!(
            get_action(Phase::Question, KeyCode::Char('3')),
            Some(Action::JumpTo(2))
        );
    }

    #[test]
    fn test_restart_only_on_completion_screen() {
        assert_eq!(get_action(Phase::Question, KeyCode::Char('r')), None);
        assert_eq!(
            get_action(Phase::Completed, KeyCode::Char('r')),
            Some(Action::Restart)
        );
    }

    #[test]
    fn test_quit_works_in_any_phase() {
        assert_eq!(get_action(Phase::Question, KeyCode::Esc), Some(Action::Quit));
        assert_eq!(
            get_action(Phase::Completed, KeyCode::Char('q')),
            Some(Action::Quit)
        );
    }
}
