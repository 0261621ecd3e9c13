use clap::{Parser, Subcommand};
use std::io::BufRead;

use meetbot::application::messaging::EventDispatcher;
use meetbot::domain::entities::envelope::{EVT_CHAT_INDICATION, EVT_ROSTER_INDICATION};
use meetbot::domain::entities::Envelope;
use meetbot::domain::traits::{Session, UserId};
use meetbot::infrastructure::adapters::console::ConsoleSession;
use meetbot::infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "meetbot")]
#[command(about = "A meeting bot controlled through chat commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_bot(cli.config);
        }
        Commands::Version => {
            println!("meetbot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config(&cli.config);
        }
    }
}

fn run_bot(config_path: String) {
    // Load config
    let config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    tracing::info!("Starting meetbot: {}", config.bot.name);

    let dispatcher = EventDispatcher::new(&config.bot.prefix);

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let session = ConsoleSession::default();
        run_console_loop(&session, &dispatcher).await;
    });
}

/// Dev-mode loop: fabricates envelopes from stdin and feeds them to the
/// dispatcher as if they arrived over a live connection.
///
/// A plain line becomes a chat indication from a fixed operator id;
/// `:join <name>` becomes a roster indication adding one participant.
async fn run_console_loop(session: &dyn Session, dispatcher: &EventDispatcher) {
    const OPERATOR_ID: UserId = 1001;

    tracing::info!("Console mode; type chat lines, or :join <name> to simulate an arrival");

    let stdin = std::io::stdin();
    let mut next_guest_id: UserId = 2000;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ":quit" {
            break;
        }

        let envelope = if let Some(name) = line.strip_prefix(":join ") {
            next_guest_id += 1;
            Envelope::new(
                EVT_ROSTER_INDICATION,
                serde_json::json!({"add": [{"id": next_guest_id, "dn": name.trim()}]}),
            )
        } else {
            Envelope::new(
                EVT_CHAT_INDICATION,
                serde_json::json!({"text": line, "dest_node_id": OPERATOR_ID}),
            )
        };

        if let Err(e) = dispatcher.on_envelope(session, &envelope).await {
            tracing::error!("Dispatch failed: {}", e);
        }
    }

    tracing::info!("Console session closed");
}

fn init_config(path: &str) {
    if std::path::Path::new(path).exists() {
        tracing::warn!("{} already exists, not overwriting", path);
        return;
    }
    match Config::default().to_yaml() {
        Ok(yaml) => {
            if let Err(e) = std::fs::write(path, yaml) {
                tracing::error!("Failed to write {}: {}", path, e);
            } else {
                println!("Wrote default config to {}", path);
            }
        }
        Err(e) => tracing::error!("Failed to serialize default config: {}", e),
    }
}
