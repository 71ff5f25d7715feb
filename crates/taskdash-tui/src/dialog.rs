use crossterm::event::KeyCode;
use taskdash_core::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Cancel,
    Confirm,
}

/// Applies a key to a single-line text input.
///
/// Enter confirms unless the input is blank and `allow_empty` is false.
pub fn handle_dialog_input(input: &mut InputState, key_code: KeyCode, allow_empty: bool) -> DialogAction {
    match key_code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter => {
            if allow_empty || !input.is_blank() {
                DialogAction::Confirm
            } else {
                DialogAction::None
            }
        }
        KeyCode::Char(c) => {
            input.insert_char(c);
            DialogAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            DialogAction::None
        }
        KeyCode::Delete => {
            input.delete();
            DialogAction::None
        }
        KeyCode::Left => {
            input.move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            input.move_right();
            DialogAction::None
        }
        KeyCode::Home => {
            input.move_home();
            DialogAction::None
        }
        KeyCode::End => {
            input.move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}

/// Answer to a yes/no confirmation popup.
pub fn handle_confirm_input(key_code: KeyCode) -> DialogAction {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => DialogAction::Confirm,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => DialogAction::Cancel,
        _ => DialogAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_does_not_confirm() {
        let mut input = InputState::with_text("  ");
        assert_eq!(handle_dialog_input(&mut input, KeyCode::Enter, false), DialogAction::None);
        assert_eq!(handle_dialog_input(&mut input, KeyCode::Enter, true), DialogAction::Confirm);
    }

    #[test]
    fn test_typing_edits_input() {
        let mut input = InputState::new();
        handle_dialog_input(&mut input, KeyCode::Char('a'), false);
        handle_dialog_input(&mut input, KeyCode::Char('b'), false);
        handle_dialog_input(&mut input, KeyCode::Backspace, false);
        assert_eq!(input.as_str(), "a");
        assert_eq!(handle_dialog_input(&mut input, KeyCode::Esc, false), DialogAction::Cancel);
    }

    #[test]
    fn test_confirm_keys() {
        assert_eq!(handle_confirm_input(KeyCode::Char('y')), DialogAction::Confirm);
        assert_eq!(handle_confirm_input(KeyCode::Esc), DialogAction::Cancel);
        assert_eq!(handle_confirm_input(KeyCode::Char('x')), DialogAction::None);
    }
}
