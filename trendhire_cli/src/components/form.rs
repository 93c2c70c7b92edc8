/// Form controls: fixed-option selects and free-text inputs
use crate::theme::Theme;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectField {
    pub label: &'static str,
    pub options: &'static [&'static str],
    pub selected: usize,
}

impl SelectField {
    pub fn new(label: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            label,
            options,
            selected: 0,
        }
    }

    pub fn value(&self) -> &'static str {
        self.options.get(self.selected).copied().unwrap_or("")
    }

    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }

    /// Select `value` if it is one of the options
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| *o == value) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

impl TextField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
        }
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn set(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

/// Read-only view of a form control
#[derive(Debug, Clone, Copy)]
pub enum FieldRef<'a> {
    Select(&'a SelectField),
    Text(&'a TextField),
}

pub enum FieldMut<'a> {
    Select(&'a mut SelectField),
    Text(&'a mut TextField),
}

impl<'a> FieldRef<'a> {
    pub fn label(&self) -> &'static str {
        match self {
            FieldRef::Select(f) => f.label,
            FieldRef::Text(f) => f.label,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FieldRef::Text(_))
    }

    /// Two lines: the label, then the value with a focus marker
    pub fn lines(&self, focused: bool, theme: Theme) -> Vec<Line<'static>> {
        let marker = if focused { "> " } else { "  " };
        let value_style = if focused {
            Style::default()
                .fg(theme.accent())
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let value = match self {
            FieldRef::Select(f) => Span::styled(format!("◀ {} ▶", f.value()), value_style),
            FieldRef::Text(f) if f.value.is_empty() => Span::styled(
                f.placeholder.to_string(),
                value_style.add_modifier(Modifier::DIM),
            ),
            FieldRef::Text(f) => {
                let cursor = if focused { "_" } else { "" };
                Span::styled(format!("{}{}", f.value, cursor), value_style)
            }
        };

        vec![
            Line::from(Span::styled(self.label().to_string(), theme.dim())),
            Line::from(vec![Span::raw(marker), value]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: [&str; 3] = ["A", "B", "C"];

    #[test]
    fn test_select_cycles_both_ways() {
        let mut field = SelectField::new("Letter", &OPTIONS);
        assert_eq!(field.value(), "A");

        field.prev();
        assert_eq!(field.value(), "C");

        field.next();
        field.next();
        assert_eq!(field.value(), "B");
    }

    #[test]
    fn test_select_value() {
        let mut field = SelectField::new("Letter", &OPTIONS);
        assert!(field.select_value("C"));
        assert_eq!(field.selected, 2);
        assert!(!field.select_value("Z"));
        assert_eq!(field.selected, 2);
    }

    #[test]
    fn test_text_field_edit() {
        let mut field = TextField::new("Skills", "Python, React");
        assert!(!field.pop());

        field.push('G');
        field.push('o');
        assert_eq!(field.value, "Go");
        assert!(field.pop());
        assert_eq!(field.value, "G");
    }
}
