mod loops;

pub use loops::{terminal_event_loop, tick_loop};

use crate::client::{ChatReply, ClientError};
use crossterm::event::KeyEvent;
use std::time::Duration;

pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);
pub const SCROLL_DELTA: i16 = 3;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Paste(String),
    MouseScroll(i16),
    Resize(u16, u16),
    Tick,
    ReplyReceived(ChatReply),
    ReplyFailed(ClientError),
}
