mod action;
mod key_handler;
mod render;

pub use action::InputAction;

use crate::ui::theme::Theme;
use ratatui::style::Style;
use tui_textarea::TextArea;

pub struct InputWidget<'a> {
    textarea: TextArea<'a>,
    suggestions: Vec<String>,
    show_suggestions: bool,
    selected_suggestion: usize,
}

impl InputWidget<'_> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            textarea: Self::create_textarea(),
            suggestions: Vec::new(),
            show_suggestions: false,
            selected_suggestion: 0,
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn set_text(&mut self, text: &str) {
        let lines: Vec<String> = text.lines().map(ToString::to_string).collect();
        self.textarea = TextArea::new(lines);
        self.configure_textarea();
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
    }

    pub fn clear(&mut self) {
        self.textarea = Self::create_textarea();
        self.suggestions.clear();
        self.show_suggestions = false;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(String::is_empty)
    }

    pub fn take(&mut self) -> String {
        let text = self.text();
        self.clear();
        text
    }

    fn create_textarea() -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text("");
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Theme::white());
        textarea
    }

    fn configure_textarea(&mut self) {
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_cursor_style(Theme::white());
    }
}

impl Default for InputWidget<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let widget = InputWidget::new();
        assert!(widget.is_empty());
        assert_eq!(widget.text(), "");
    }

    #[test]
    fn take_clears_the_input() {
        let mut widget = InputWidget::new();
        widget.set_text("I need a car");

        assert_eq!(widget.take(), "I need a car");
        assert!(widget.is_empty());
    }
}
