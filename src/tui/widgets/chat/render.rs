use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{ChatMessage, MessageLevel};
use crate::ui::text::paragraph_breaks;
use crate::ui::theme::Theme;

const MAX_MESSAGE_LINES: usize = 50;

impl ChatMessage {
    pub fn render_to_lines(&self, width: u16) -> Vec<Line<'static>> {
        match self {
            Self::User(text) => render_with_prefix(text, width, "> ", Theme::white()),
            Self::Assistant(text) => {
                let mut lines = render_with_prefix(text, width, "● ", Theme::off_white());
                truncate_with_indicator(&mut lines);
                lines
            }
            Self::System { text, level } => render_system(text, level),
        }
    }
}

// The sentence-break transform applies to user and assistant text alike.
fn render_with_prefix(
    text: &str,
    width: u16,
    prefix: &'static str,
    style: ratatui::style::Style,
) -> Vec<Line<'static>> {
    let formatted = paragraph_breaks(text);
    let prefix_width = prefix.width();
    let available = (width as usize).saturating_sub(prefix_width + 1);

    let mut lines = Vec::new();
    let mut first = true;

    for raw_line in formatted.lines() {
        if raw_line.is_empty() {
            lines.push(Line::from(""));
            continue;
        }

        for wrapped in textwrap::wrap(raw_line, available.max(1)) {
            if first {
                lines.push(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(wrapped.to_string(), style),
                ]));
                first = false;
            } else {
                lines.push(Line::from(Span::styled(
                    format!("{:width$}{}", "", wrapped, width = prefix_width),
                    style,
                )));
            }
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(prefix, style)));
    }

    lines
}

fn render_system(text: &str, level: &MessageLevel) -> Vec<Line<'static>> {
    let icon = level.icon();
    let style = level.style();

    vec![Line::from(vec![
        Span::styled(format!("{icon} "), style),
        Span::styled(text.to_string(), style),
    ])]
}

fn truncate_with_indicator(lines: &mut Vec<Line<'static>>) {
    if lines.len() > MAX_MESSAGE_LINES {
        lines.truncate(MAX_MESSAGE_LINES);
        lines.push(Line::from(Span::styled(
            "  ... (message truncated)",
            Theme::muted(),
        )));
    }
}
