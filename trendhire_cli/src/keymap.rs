/// Centralized keybindings and help text for the TrendHire TUI
use crate::router::Page;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyMap;

impl KeyMap {
    /// Get help text for all keybindings
    pub fn help_text() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab/Shift-Tab", "Move focus between controls"),
            ("←/→", "Change page or selection"),
            ("F1-F4", "Jump to a page"),
            ("Enter", "Run the page action"),
            ("↑/↓", "Select learning step"),
            ("Space", "Expand/collapse step"),
            ("Backspace", "Delete in text field"),
            ("?", "Show help"),
            ("Esc/Ctrl-C", "Quit/Close"),
        ]
    }

    /// Check if key is quit
    pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Esc)
            || (matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Check if key is help
    pub fn is_help(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('?'))
    }

    pub fn is_focus_next(code: KeyCode) -> bool {
        matches!(code, KeyCode::Tab)
    }

    pub fn is_focus_prev(code: KeyCode) -> bool {
        matches!(code, KeyCode::BackTab)
    }

    pub fn is_left(code: KeyCode) -> bool {
        matches!(code, KeyCode::Left)
    }

    pub fn is_right(code: KeyCode) -> bool {
        matches!(code, KeyCode::Right)
    }

    /// Check if key is down
    pub fn is_down(code: KeyCode) -> bool {
        matches!(code, KeyCode::Down)
    }

    /// Check if key is up
    pub fn is_up(code: KeyCode) -> bool {
        matches!(code, KeyCode::Up)
    }

    /// Check if key is the primary action
    pub fn is_action(code: KeyCode) -> bool {
        matches!(code, KeyCode::Enter)
    }

    /// Check if key is space (for toggling sections)
    pub fn is_space(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char(' '))
    }

    /// Page bound to a function key
    pub fn page_for(code: KeyCode) -> Option<Page> {
        match code {
            KeyCode::F(n @ 1..=4) => Some(Page::ALL[n as usize - 1]),
            _ => None,
        }
    }
}
