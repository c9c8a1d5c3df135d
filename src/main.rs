use std::sync::Arc;

use clap::{Parser, Subcommand};

use rentline::client::HttpChatService;
use rentline::config::AppConfig;
use rentline::error::Result;
use rentline::{logging, tui};

#[derive(Parser, Debug)]
#[command(name = "rentline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Chat service endpoint (e.g. http://127.0.0.1:5000)
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigSubcommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigSubcommands {
    Init,
    Where,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logging = logging::init(cli.verbose);
    let config = AppConfig::load();

    if let Some(Commands::Config { command }) = &cli.command {
        match command {
            ConfigSubcommands::Init => match AppConfig::init_default() {
                Ok(path) => {
                    println!("✓ Created config file at {}", path.display());
                }
                Err(e) => {
                    eprintln!("✗ Failed to create config: {e}");
                }
            },
            ConfigSubcommands::Where => match AppConfig::get_config_path() {
                Some(path) => println!("{}", path.display()),
                None => eprintln!("✗ Could not determine config path"),
            },
        }
        return Ok(());
    }

    let endpoint = config.endpoint_or_default(cli.endpoint.as_deref());
    let service = HttpChatService::new(endpoint)?;

    tui::run_tui(Arc::new(service)).await
}
