pub mod booking;
pub mod chat;
pub mod input;

pub use booking::BookingPanel;
pub use chat::{ChatMessage, ChatWidget, MessageLevel, ScrollState};
pub use input::{InputAction, InputWidget};
