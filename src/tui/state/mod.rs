mod history;
mod messages;

pub use history::InputHistory;

use crate::client::CarDetails;
use crate::tui::widgets::{ChatMessage, ScrollState};
use std::time::{Duration, Instant};

pub struct AppState {
    pub should_quit: bool,
    pub frame: usize,
    pub spinner_frame: usize,
    pub is_processing: bool,
    pub history: InputHistory,
    pub messages: Vec<ChatMessage>,
    pub bookings: Vec<CarDetails>,
    pub scroll: ScrollState,

    spinner_last_update: Option<Instant>,
    request_start: Option<Instant>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_quit: false,
            frame: 0,
            spinner_frame: 0,
            spinner_last_update: None,
            is_processing: false,
            request_start: None,
            history: InputHistory::new(),
            messages: Vec::new(),
            bookings: Vec::new(),
            scroll: ScrollState::new(),
        }
    }

    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        self.update_spinner();
    }

    fn update_spinner(&mut self) {
        const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

        let now = Instant::now();
        match self.spinner_last_update {
            Some(last) if now.duration_since(last) >= SPINNER_INTERVAL => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.spinner_last_update = Some(now);
            }
            None => {
                self.spinner_last_update = Some(now);
            }
            _ => {}
        }
    }

    pub const fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn start_processing(&mut self) {
        self.is_processing = true;
        self.request_start = Some(Instant::now());
    }

    pub const fn stop_processing(&mut self) {
        self.is_processing = false;
        self.request_start = None;
    }

    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.request_start.map(|start| start.elapsed())
    }

    pub const fn scroll_up(&mut self, lines: usize) {
        self.scroll.scroll_up(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll.scroll_down(lines);
    }

    pub const fn scroll_to_top(&mut self) {
        self.scroll.scroll_to_top();
    }

    pub const fn scroll_to_bottom(&mut self) {
        self.scroll.scroll_to_bottom();
    }

    pub fn add_to_history(&mut self, input: String) {
        self.history.push(input);
    }

    pub fn history_prev(&mut self) -> Option<String> {
        self.history.prev()
    }

    pub fn history_next(&mut self) -> Option<String> {
        self.history.next()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
