use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use nlweather_core::{Config, WeatherQueryHandler, config::API_KEY_ENV};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "nlweather", version, about = "Ask about the weather in plain English")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer a weather question, e.g. `nlweather ask will it rain in Pune tomorrow`.
    Ask {
        /// The question. Prompted for when omitted.
        query: Vec<String>,

        /// Skip the language model and use keyword heuristics for the location.
        #[arg(long)]
        offline: bool,
    },

    /// Store the API key used for location extraction.
    Configure,

    /// Print where the configuration file lives.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Ask { query, offline } => {
                let question = if query.is_empty() {
                    Text::new("What would you like to know about the weather?")
                        .prompt()
                        .context("Failed to read the question")?
                } else {
                    query.join(" ")
                };

                let config = Config::load()?;
                let handler = WeatherQueryHandler::from_config(&config, offline)
                    .context("Failed to set up the weather query handler")?;

                println!("{}", handler.handle(&question).await);
            }
            Command::Configure => {
                let mut config = Config::load()?;

                let api_key = Password::new("LLM API key (Groq):")
                    .with_display_mode(PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .with_help_message(&format!(
                        "Leave empty to clear. {API_KEY_ENV} takes precedence when set."
                    ))
                    .prompt()
                    .context("Failed to read the API key")?;

                config.set_api_key(api_key);
                config.save()?;

                println!("Saved configuration to {}", Config::config_file_path()?.display());
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
            }
        }

        Ok(())
    }
}
