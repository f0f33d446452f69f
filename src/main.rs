//! Main entry point for the application.
//!
//! Loads `.env`, initializes logging, builds a DeepSeek client, sends a single
//! conversation, prints the reply and saves it to disk.

use clap::Parser;
use colored::*;
use deepseek_client::cli::Cli;
use deepseek_client::config::{load_chat_settings, ChatSettings, ClientConfig};
use deepseek_client::llm::{first_choice_content, DeepSeekClient};
use deepseek_client::utils;
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, warn};

/// Main entry point.
///
/// Only configuration problems are fatal. A failed request or a failed save
/// has already been reported by the client and ends the run normally.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let _log_guard = utils::init_logging(
        &cli.logging_level,
        cli.log_to_file.then_some(Path::new("logs")),
    );

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    let file_settings = match &cli.config {
        Some(path) => match load_chat_settings(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("{} {}", "✗".red(), e.to_string().red());
                return ExitCode::FAILURE;
            }
        },
        None => ChatSettings::default(),
    };
    let settings = file_settings.merge(cli.settings());

    let client = match ClientConfig::from_env()
        .and_then(|config| settings.apply_to(config))
        .and_then(DeepSeekClient::new)
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e.to_string().red());
            return ExitCode::FAILURE;
        }
    };
    info!("Sending chat request to {}", client.endpoint());

    let messages = cli.messages();
    let spinner = utils::start_spinner("Waiting for DeepSeek...");
    let result = client
        .chat(&messages, settings.model(), settings.temperature())
        .await;
    spinner.finish_and_clear();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            return ExitCode::SUCCESS;
        }
    };

    println!("{}", "API Response:".bold());
    println!(
        "{}",
        serde_json::to_string_pretty(&response).unwrap_or_else(|_| response.to_string())
    );
    if let Some(reply) = first_choice_content(&response) {
        println!("\n{} {}", "Assistant:".cyan().bold(), reply.trim());
    }

    if !cli.no_save {
        let output = settings.output();
        match client.save_response(&response, &output) {
            Ok(()) => println!(
                "{} Response saved to {}",
                "✓".green(),
                output.display().to_string().bold()
            ),
            Err(e) => eprintln!("{} {}", "✗".red(), e),
        }
    }

    ExitCode::SUCCESS
}
