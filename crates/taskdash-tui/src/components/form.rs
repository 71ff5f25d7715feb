//! Generic modal form: a column of labeled fields, one of them focused.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use taskdash_core::InputState;
use taskdash_domain::FormStatus;

use crate::components::popup::render_popup_with_block;
use crate::dialog::handle_dialog_input;
use crate::theme::{error_text, focused_border, highlight_text, label_text, normal_text, unfocused_border};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text typed into the field.
    Text,
    /// A fixed set of values cycled with Left/Right/Space.
    Choice,
}

#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FormField {
    pub const fn text(label: &'static str) -> Self {
        Self {
            label,
            kind: FieldKind::Text,
        }
    }

    pub const fn choice(label: &'static str) -> Self {
        Self {
            label,
            kind: FieldKind::Choice,
        }
    }
}

/// Field access for a draft shown in a [`FormState`].
pub trait FormModel {
    fn heading(&self) -> &'static str;
    fn fields(&self) -> &'static [FormField];
    /// Display value of field `index`.
    fn value(&self, index: usize) -> String;
    fn set_text(&mut self, index: usize, value: String);
    fn cycle(&mut self, index: usize, forward: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    None,
    Cancel,
    Submit,
}

pub struct FormState<M> {
    pub model: M,
    pub focus: usize,
    pub input: InputState,
    pub status: FormStatus,
}

impl<M: FormModel> FormState<M> {
    pub fn new(model: M) -> Self {
        let mut form = Self {
            model,
            focus: 0,
            input: InputState::new(),
            status: FormStatus::Editing,
        };
        form.load_focused();
        form
    }

    fn focused_kind(&self) -> Option<FieldKind> {
        self.model.fields().get(self.focus).map(|field| field.kind)
    }

    fn load_focused(&mut self) {
        match self.focused_kind() {
            Some(FieldKind::Text) => self.input = InputState::with_text(self.model.value(self.focus)),
            _ => self.input.clear(),
        }
    }

    /// Copies the text being typed into the draft.
    pub fn commit(&mut self) {
        if self.focused_kind() == Some(FieldKind::Text) {
            self.model.set_text(self.focus, self.input.as_str().to_string());
        }
    }

    pub fn focus_next(&mut self) {
        let len = self.model.fields().len();
        if len == 0 {
            return;
        }
        self.commit();
        self.focus = (self.focus + 1) % len;
        self.load_focused();
    }

    pub fn focus_prev(&mut self) {
        let len = self.model.fields().len();
        if len == 0 {
            return;
        }
        self.commit();
        self.focus = (self.focus + len - 1) % len;
        self.load_focused();
    }

    pub fn handle_key(&mut self, key: KeyCode) -> FormOutcome {
        if self.status.is_submitting() {
            return FormOutcome::None;
        }
        match key {
            KeyCode::Esc => FormOutcome::Cancel,
            KeyCode::Enter => {
                self.commit();
                FormOutcome::Submit
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                FormOutcome::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                FormOutcome::None
            }
            other => {
                match self.focused_kind() {
                    Some(FieldKind::Choice) => match other {
                        KeyCode::Left => self.model.cycle(self.focus, false),
                        KeyCode::Right | KeyCode::Char(' ') => self.model.cycle(self.focus, true),
                        _ => {}
                    },
                    Some(FieldKind::Text) => {
                        handle_dialog_input(&mut self.input, other, true);
                    }
                    None => {}
                }
                FormOutcome::None
            }
        }
    }
}

pub fn render_form<M: FormModel>(frame: &mut Frame, form: &FormState<M>) {
    let fields = form.model.fields();
    let inner = render_popup_with_block(frame, form.model.heading(), 60, 70);

    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(inner);

    for (index, field) in fields.iter().enumerate() {
        let focused = index == form.focus;
        let value = if focused && field.kind == FieldKind::Text {
            form.input.as_str().to_string()
        } else {
            form.model.value(index)
        };
        let value = match field.kind {
            FieldKind::Choice => format!("< {} >", value),
            FieldKind::Text => value,
        };
        let border = if focused { focused_border() } else { unfocused_border() };
        let widget = Paragraph::new(value).style(normal_text()).block(
            Block::default()
                .title(Span::styled(field.label, if focused { highlight_text() } else { label_text() }))
                .borders(Borders::ALL)
                .border_style(border),
        );
        frame.render_widget(widget, chunks[index]);

        if focused && field.kind == FieldKind::Text && !form.status.is_submitting() {
            let area = chunks[index];
            frame.set_cursor_position((area.x + form.input.cursor_column() as u16 + 1, area.y + 1));
        }
    }

    let footer = match &form.status {
        FormStatus::Submitting => Line::styled("Saving...", label_text()),
        FormStatus::Failed(message) => Line::styled(message.as_str(), error_text()),
        FormStatus::Editing => Line::styled(
            "Tab/↑↓: field  ←/→: change  Enter: save  Esc: cancel",
            label_text(),
        ),
    };
    frame.render_widget(Paragraph::new(footer), chunks[fields.len()]);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        name: String,
        flag: bool,
    }

    const PAIR_FIELDS: [FormField; 2] = [FormField::text("Name"), FormField::choice("Flag")];

    impl FormModel for Pair {
        fn heading(&self) -> &'static str {
            "Pair"
        }

        fn fields(&self) -> &'static [FormField] {
            &PAIR_FIELDS
        }

        fn value(&self, index: usize) -> String {
            match index {
                0 => self.name.clone(),
                _ => self.flag.to_string(),
            }
        }

        fn set_text(&mut self, index: usize, value: String) {
            if index == 0 {
                self.name = value;
            }
        }

        fn cycle(&mut self, _index: usize, _forward: bool) {
            self.flag = !self.flag;
        }
    }

    fn form() -> FormState<Pair> {
        FormState::new(Pair {
            name: "ab".to_string(),
            flag: false,
        })
    }

    #[test]
    fn test_typing_is_committed_on_focus_change() {
        let mut form = form();
        assert_eq!(form.input.as_str(), "ab");
        form.handle_key(KeyCode::Char('c'));
        form.handle_key(KeyCode::Tab);
        assert_eq!(form.model.name, "abc");
        assert_eq!(form.focus, 1);
    }

    #[test]
    fn test_choice_field_cycles() {
        let mut form = form();
        form.handle_key(KeyCode::Down);
        form.handle_key(KeyCode::Char(' '));
        assert!(form.model.flag);
        form.handle_key(KeyCode::Up);
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_enter_commits_and_submits() {
        let mut form = form();
        form.handle_key(KeyCode::Backspace);
        assert_eq!(form.handle_key(KeyCode::Enter), FormOutcome::Submit);
        assert_eq!(form.model.name, "a");
    }

    #[test]
    fn test_keys_ignored_while_submitting() {
        let mut form = form();
        form.status = FormStatus::Submitting;
        assert_eq!(form.handle_key(KeyCode::Enter), FormOutcome::None);
        assert_eq!(form.handle_key(KeyCode::Esc), FormOutcome::None);
    }
}
