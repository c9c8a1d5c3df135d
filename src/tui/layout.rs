use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct LayoutAreas {
    pub header: Rect,
    pub chat: Rect,
    pub booking: Rect,
    pub input: Rect,
    pub status: Rect,
}

/// Header on top, status line at the bottom, and the middle split into the
/// chat column (messages + input) and the booking panel on the right.
#[must_use]
pub fn calculate_layout(area: Rect) -> LayoutAreas {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let middle_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(32)])
        .split(main_chunks[1]);

    let chat_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(middle_chunks[0]);

    LayoutAreas {
        header: main_chunks[0],
        chat: chat_chunks[0],
        booking: middle_chunks[1],
        input: chat_chunks[1],
        status: main_chunks[2],
    }
}
