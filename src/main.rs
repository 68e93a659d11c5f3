use anyhow::Result;
use clap::{Parser, Subcommand};
use deckgen::app::App;
use deckgen::models::Config;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "deckgen")]
#[command(about = "Generate structured presentations from narration")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a presentation from a text file.
    Generate {
        /// Path to a UTF-8 text file with the source narration.
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Transcribe a WAV audio file.
    Transcribe {
        /// Path to the audio file.
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deckgen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let app = App::from_config(&config);

    match args.command {
        Command::Generate { input } => {
            let source_text = std::fs::read_to_string(&input)?;
            match app.generate(&source_text).await {
                Ok(document) => {
                    println!("{}", serde_json::to_string_pretty(&document)?);
                    info!("Generation completed successfully");
                    Ok(())
                }
                Err(e) => {
                    error!("Generation failed: {}", e);
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
            }
        }
        Command::Transcribe { input } => {
            let audio = std::fs::read(&input)?;
            match app.transcribe(&audio).await {
                Ok(result) => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                    info!("Transcription completed successfully");
                    Ok(())
                }
                Err(e) => {
                    error!("Transcription failed: {}", e);
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
            }
        }
    }
}
