#[derive(Debug, Clone)]
pub struct ScrollState {
    position: usize,
    total_lines: usize,
    viewport_height: usize,
    manual_scroll: bool,
}

/// Scroll offset into the message pane, anchored to the TOP: position 0
/// shows the newest message, and arrival of a new message snaps the view
/// back to the top unless the user has scrolled away.
impl ScrollState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: 0,
            total_lines: 0,
            viewport_height: 0,
            manual_scroll: false,
        }
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub const fn is_manual_scroll(&self) -> bool {
        self.manual_scroll
    }

    #[must_use]
    pub const fn is_at_top(&self) -> bool {
        self.position == 0
    }

    #[must_use]
    pub const fn has_more_below(&self) -> bool {
        self.position < self.max_scroll()
    }

    pub fn update(&mut self, total_lines: usize, viewport_height: usize) {
        self.total_lines = total_lines;
        self.viewport_height = viewport_height;
        self.position = self.position.min(self.max_scroll());
    }

    pub const fn scroll_to_top(&mut self) {
        self.position = 0;
        self.manual_scroll = false;
    }

    pub const fn scroll_to_bottom(&mut self) {
        self.position = self.max_scroll();
        self.manual_scroll = true;
    }

    pub const fn scroll_up(&mut self, lines: usize) {
        self.position = self.position.saturating_sub(lines);
        self.manual_scroll = true;
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.position = (self.position + lines).min(self.max_scroll());
        self.manual_scroll = true;
    }

    const fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport_height)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
