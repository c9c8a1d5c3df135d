use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthChar;

use crate::client::CarDetails;
use crate::ui::theme::{BoxChars, Theme};

/// Side panel listing booking options. Cards are appended in arrival
/// order, oldest first, unlike the newest-first message pane.
pub struct BookingPanel<'a> {
    cards: &'a [CarDetails],
}

impl<'a> BookingPanel<'a> {
    #[must_use]
    pub const fn new(cards: &'a [CarDetails]) -> Self {
        Self { cards }
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Theme::border())
            .title(Span::styled(" Booking options ", Theme::primary_bold()));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.cards.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No booking options yet.",
                Theme::muted(),
            )));
            empty.render(inner, buf);
            return;
        }

        let max_width = inner.width.saturating_sub(1) as usize;
        let mut lines = Vec::new();

        for (idx, card) in self.cards.iter().enumerate() {
            lines.extend(card_lines(card, max_width));

            if idx < self.cards.len() - 1 {
                lines.push(Line::from(""));
            }
        }

        let viewport = inner.height as usize;
        let truncated = lines.len() > viewport;

        for (i, line) in lines.into_iter().take(viewport).enumerate() {
            buf.set_line(inner.x + 1, inner.y + i as u16, &line, inner.width);
        }

        if truncated && inner.height > 0 {
            let indicator = Line::from(Span::styled(BoxChars::ELLIPSIS, Theme::muted()));
            buf.set_line(inner.x + 1, inner.y + inner.height - 1, &indicator, 1);
        }
    }
}

fn card_lines(card: &CarDetails, max_width: usize) -> Vec<Line<'static>> {
    let title = fit_width(&format!("{} {}", card.brand, card.model), max_width);

    vec![
        Line::from(Span::styled(title, Theme::primary_bold())),
        detail_line("Year", &card.year.to_string(), max_width),
        detail_line("Color", &card.color, max_width),
        detail_line("Location", &card.location, max_width),
        Line::from(vec![
            Span::styled(format!("{} ", BoxChars::DOT), Theme::muted()),
            Span::styled(
                fit_width(
                    &format!("Price: ${:.2}/day", card.price),
                    max_width.saturating_sub(2),
                ),
                Theme::success(),
            ),
        ]),
    ]
}

fn detail_line(label: &str, value: &str, max_width: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", BoxChars::DOT), Theme::muted()),
        Span::styled(
            fit_width(
                &format!("{label}: {value}"),
                max_width.saturating_sub(2),
            ),
            Theme::off_white(),
        ),
    ])
}

fn fit_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        result.push(ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> CarDetails {
        CarDetails {
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2021,
            color: "Blue".to_string(),
            price: 45.0,
            location: "Amsterdam".to_string(),
        }
    }

    fn lines_text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn card_shows_all_fields_with_price_framing() {
        let card = sample_card();
        let text = lines_text(&card_lines(&card, 40));

        assert_eq!(text[0], "Toyota Corolla");
        assert!(text.iter().any(|l| l.contains("Year: 2021")));
        assert!(text.iter().any(|l| l.contains("Color: Blue")));
        assert!(text.iter().any(|l| l.contains("Location: Amsterdam")));
        assert!(text.iter().any(|l| l.contains("Price: $45.00/day")));
    }

    #[test]
    fn fit_width_truncates_long_values() {
        assert_eq!(fit_width("Mercedes-Benz EQS", 8), "Mercedes");
        assert_eq!(fit_width("short", 10), "short");
    }

    #[test]
    fn panel_renders_empty_state() {
        let panel = BookingPanel::new(&[]);
        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);

        panel.render(area, &mut buf);

        let content: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(content.contains("Booking options"));
    }

    #[test]
    fn panel_renders_cards_in_append_order() {
        let first = sample_card();
        let mut second = sample_card();
        second.brand = "BMW".to_string();
        second.model = "X1".to_string();

        let cards = vec![first, second];
        let panel = BookingPanel::new(&cards);
        let area = Rect::new(0, 0, 30, 20);
        let mut buf = Buffer::empty(area);

        panel.render(area, &mut buf);

        let row_text = |y: u16| -> String {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        };

        let rows: Vec<String> = (0..area.height).map(row_text).collect();
        let toyota_row = rows.iter().position(|r| r.contains("Toyota"));
        let bmw_row = rows.iter().position(|r| r.contains("BMW"));

        assert!(toyota_row.expect("first card rendered") < bmw_row.expect("second card rendered"));
    }
}
