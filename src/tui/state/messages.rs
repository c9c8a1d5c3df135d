use crate::client::{ChatReply, ClientError};
use crate::tui::widgets::{ChatMessage, MessageLevel, ScrollState};

use super::AppState;

impl AppState {
    /// Gate for one send. Trims the input; whitespace-only input and
    /// submission while a request is in flight both return `None` and
    /// issue nothing (the single-slot guard keeps replies in send order).
    /// On success the user message is prepended and the slot is taken.
    pub fn begin_send(&mut self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() || self.is_processing {
            return None;
        }

        let text = text.to_string();
        self.push_user_message(text.clone());
        self.start_processing();
        Some(text)
    }

    pub fn apply_reply(&mut self, reply: ChatReply) {
        match reply {
            ChatReply::Plain(message) => self.push_assistant_message(message),
            ChatReply::Structured {
                message,
                car_details,
            } => {
                if let Some(details) = car_details {
                    self.bookings.push(details);
                }
                self.push_assistant_message(message);
            }
        }
        self.stop_processing();
    }

    pub fn apply_failure(&mut self, error: &ClientError) {
        self.push_system_message_with_level(
            error.user_message().to_string(),
            MessageLevel::Error,
        );
        self.stop_processing();
    }

    pub fn push_user_message(&mut self, text: String) {
        self.messages.insert(0, ChatMessage::User(text));
        self.scroll.scroll_to_top();
    }

    pub fn push_assistant_message(&mut self, text: String) {
        self.messages.insert(0, ChatMessage::Assistant(text));
        self.scroll.scroll_to_top();
    }

    pub fn push_system_message(&mut self, text: String) {
        self.push_system_message_with_level(text, MessageLevel::Info);
    }

    pub fn push_system_message_with_level(&mut self, text: String, level: MessageLevel) {
        self.messages.insert(0, ChatMessage::System { text, level });
        self.scroll.scroll_to_top();
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
        self.scroll = ScrollState::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{CONNECT_ERROR_TEXT, CarDetails, REPLY_ERROR_TEXT};

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

    fn message_text(message: &ChatMessage) -> &str {
        match message {
            ChatMessage::User(text) | ChatMessage::Assistant(text) => text,
            ChatMessage::System { text, .. } => text,
        }
    }

    #[test]
    fn begin_send_trims_and_prepends_user_message() {
        let mut state = AppState::new();

        let sent = state.begin_send("  I need a car  ");

        assert_eq!(sent, Some("I need a car".to_string()));
        assert!(state.is_processing);
        assert_eq!(state.messages.len(), 1);
        assert!(matches!(&state.messages[0], ChatMessage::User(t) if t == "I need a car"));
    }

    #[test]
    fn whitespace_only_input_sends_nothing() {
        let mut state = AppState::new();

        assert!(state.begin_send("").is_none());
        assert!(state.begin_send("   \t  ").is_none());

        assert!(state.messages.is_empty());
        assert!(!state.is_processing);
    }

    #[test]
    fn second_send_is_blocked_while_request_in_flight() {
        let mut state = AppState::new();

        assert!(state.begin_send("first").is_some());
        assert!(state.begin_send("second").is_none());

        assert_eq!(state.messages.len(), 1);

        state.apply_reply(ChatReply::Plain("done".to_string()));
        assert!(state.begin_send("second").is_some());
    }

    #[test]
    fn newest_message_is_first() {
        let mut state = AppState::new();

        state.push_user_message("older".to_string());
        state.push_assistant_message("newer".to_string());

        assert_eq!(message_text(&state.messages[0]), "newer");
        assert_eq!(message_text(&state.messages[1]), "older");
        assert!(state.scroll.is_at_top());
    }

    #[test]
    fn structured_reply_appends_card_and_prepends_message() {
        let mut state = AppState::new();
        state.start_processing();

        state.apply_reply(ChatReply::Structured {
            message: "How about this one?".to_string(),
            car_details: Some(sample_card()),
        });

        assert_eq!(state.bookings.len(), 1);
        assert_eq!(state.bookings[0].brand, "Toyota");
        assert!(matches!(&state.messages[0], ChatMessage::Assistant(t) if t == "How about this one?"));
        assert!(!state.is_processing);
    }

    #[test]
    fn cards_accumulate_in_arrival_order() {
        let mut state = AppState::new();

        state.apply_reply(ChatReply::Structured {
            message: "First option.".to_string(),
            car_details: Some(sample_card()),
        });

        let mut second = sample_card();
        second.brand = "BMW".to_string();
        state.apply_reply(ChatReply::Structured {
            message: "Second option.".to_string(),
            car_details: Some(second),
        });

        assert_eq!(state.bookings[0].brand, "Toyota");
        assert_eq!(state.bookings[1].brand, "BMW");
    }

    #[test]
    fn plain_reply_adds_no_card() {
        let mut state = AppState::new();
        state.start_processing();

        state.apply_reply(ChatReply::Plain("What color do you prefer?".to_string()));

        assert!(state.bookings.is_empty());
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn connection_failure_renders_fixed_error_text() {
        let mut state = AppState::new();
        state.start_processing();

        state.apply_failure(&ClientError::Connection("refused".to_string()));

        assert!(state.bookings.is_empty());
        assert_eq!(state.messages.len(), 1);
        assert_eq!(message_text(&state.messages[0]), CONNECT_ERROR_TEXT);
        assert!(!state.is_processing);
    }

    #[test]
    fn empty_reply_renders_fixed_error_text() {
        let mut state = AppState::new();
        state.start_processing();

        state.apply_failure(&ClientError::EmptyReply);

        assert_eq!(message_text(&state.messages[0]), REPLY_ERROR_TEXT);
    }

    #[test]
    fn duplicate_sends_create_independent_nodes() {
        let mut state = AppState::new();

        assert!(state.begin_send("Hello?").is_some());
        state.apply_reply(ChatReply::Plain("Yes?".to_string()));
        assert!(state.begin_send("Hello?").is_some());

        let user_messages: Vec<&str> = state
            .messages
            .iter()
            .filter_map(|m| match m {
                ChatMessage::User(t) => Some(t.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(user_messages, vec!["Hello?", "Hello?"]);
    }

    #[test]
    fn clear_messages_keeps_bookings() {
        let mut state = AppState::new();
        state.push_user_message("hi".to_string());
        state.apply_reply(ChatReply::Structured {
            message: "Option.".to_string(),
            car_details: Some(sample_card()),
        });

        state.clear_messages();

        assert!(state.messages.is_empty());
        assert_eq!(state.bookings.len(), 1);
    }
}
