pub const HELP_TEXT: &str = r"Available commands:
/help  - Show this help message
/clear - Clear the chat history
/exit  - Exit the application";

pub const SLASH_COMMANDS: &[&str] = &["/help", "/clear", "/exit"];

pub enum SlashCommand {
    Help,
    Clear,
    Exit,
    Unknown(String),
}

impl SlashCommand {
    pub fn parse(input: &str) -> Self {
        let cmd = input.split_whitespace().next().unwrap_or("");
        match cmd {
            "/help" => Self::Help,
            "/clear" => Self::Clear,
            "/exit" => Self::Exit,
            _ => Self::Unknown(cmd.to_string()),
        }
    }
}
