use std::collections::VecDeque;

const MAX_HISTORY_SIZE: usize = 100;

/// Recall buffer for previously sent lines. Consecutive duplicates are
/// collapsed and the oldest entry is evicted past the size cap.
#[derive(Debug, Clone, Default)]
pub struct InputHistory {
    entries: VecDeque<String>,
    cursor: Option<usize>,
}

impl InputHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
        }
    }

    pub fn push(&mut self, input: String) {
        if input.trim().is_empty() || self.entries.back() == Some(&input) {
            return;
        }

        if self.entries.len() == MAX_HISTORY_SIZE {
            self.entries.pop_front();
        }
        self.entries.push_back(input);
        self.cursor = None;
    }

    #[must_use]
    pub fn prev(&mut self) -> Option<String> {
        let next_cursor = match self.cursor {
            None => self.entries.len().checked_sub(1)?,
            Some(i) => i.saturating_sub(1),
        };

        self.cursor = Some(next_cursor);
        self.entries.get(next_cursor).cloned()
    }

    #[must_use]
    pub fn next(&mut self) -> Option<String> {
        let i = self.cursor?;

        if i + 1 >= self.entries.len() {
            self.cursor = None;
            return None;
        }

        self.cursor = Some(i + 1);
        self.entries.get(i + 1).cloned()
    }

    pub const fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
