use crate::ui::theme::{Spinners, Theme};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use std::time::Duration;

pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    is_processing: bool,
    elapsed: Option<Duration>,
    spinner_frame: usize,
    booking_count: usize,
) {
    let hints = "/ commands | PgUp/PgDn scroll";
    let hints_width = hints.len() as u16;

    let left_line = Line::from(vec![Span::raw(" "), Span::styled(hints, Theme::muted())]);
    frame
        .buffer_mut()
        .set_line(area.x, area.y, &left_line, hints_width + 2);

    let right_line = if is_processing {
        let frames = Spinners::BRAILLE;
        let frame_char = frames[spinner_frame % frames.len()];

        let elapsed_text = elapsed
            .map(|d| {
                let secs = d.as_secs();
                if secs > 0 {
                    format!(" {secs}s")
                } else {
                    format!(" {}ms", d.as_millis())
                }
            })
            .unwrap_or_default();

        Some(Line::from(vec![
            Span::styled(
                format!("{frame_char} Contacting chatbot{elapsed_text}"),
                Theme::warning(),
            ),
            Span::raw(" "),
        ]))
    } else if booking_count > 0 {
        let label = if booking_count == 1 {
            "1 booking option".to_string()
        } else {
            format!("{booking_count} booking options")
        };
        Some(Line::from(vec![
            Span::styled(label, Theme::muted()),
            Span::raw(" "),
        ]))
    } else {
        None
    };

    if let Some(line) = right_line {
        let status_len = (line.width() + 1) as u16;
        let status_x = area.x + area.width.saturating_sub(status_len);
        frame
            .buffer_mut()
            .set_line(status_x, area.y, &line, status_len);
    }
}
