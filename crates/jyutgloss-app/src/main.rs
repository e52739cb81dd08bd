use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use jyutgloss_config::Config;
use jyutgloss_core::lexicon::LexiconHandle;
use jyutgloss_core::preprocess::{LyricsPreprocessor, Preprocessor};
use jyutgloss_core::types::LyricsReport;
use jyutgloss_oracle::chat::{ChatOracle, ChatOracleConfig};
use jyutgloss_oracle::{DefinitionOracle, TranslationOracle};

mod cli;
mod output;

use self::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::new();

    let lexicon = match &config.lexicon.path {
        Some(path) => {
            tracing::info!(path = %path, "using reference file override");
            LexiconHandle::from_path(path)
        }
        None => LexiconHandle::embedded(),
    };

    match cli.command {
        Command::Translate { file } => {
            let lyrics = read_lyrics(file.as_deref()).await?;
            let lines = chat_oracle(&config).translate_lyrics(&lyrics).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&lines)?);
            } else {
                print!("{}", output::format_translation(&lines));
            }
        }
        Command::Analyze {
            file,
            context,
            no_suggest,
        } => {
            let lyrics = read_lyrics(file.as_deref()).await?;
            let analysis = lexicon.get().await?.classify(&lyrics);

            let suggestions = if no_suggest || analysis.new_characters.is_empty() {
                Vec::new()
            } else {
                chat_oracle(&config)
                    .suggest_definitions(&analysis.new_characters, &lyrics, context.as_deref())
                    .await?
            };

            if cli.json {
                let payload = serde_json::json!({
                    "analysis": analysis,
                    "suggestedDefinitions": suggestions,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print!("{}", output::format_analysis(&analysis));
                if !suggestions.is_empty() {
                    print!("{}", output::format_suggestions(&suggestions));
                }
            }
        }
        Command::Report { file, context } => {
            let lyrics = read_lyrics(file.as_deref()).await?;
            let oracle = chat_oracle(&config);

            // Same flow as submitting the form in the original tool:
            // translation first, then character analysis.
            let translation = oracle.translate_lyrics(&lyrics).await?;
            let analysis = lexicon.get().await?.classify(&lyrics);
            let suggested_definitions = oracle
                .suggest_definitions(&analysis.new_characters, &lyrics, context.as_deref())
                .await?;

            let report = LyricsReport {
                translation,
                analysis,
                suggested_definitions,
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", output::format_report(&report));
            }
        }
        Command::Lookup { characters } => {
            let lexicon = lexicon.get().await?;
            if cli.json {
                let entries: Vec<_> = characters
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| serde_json::json!({
                        "character": c,
                        "entry": lexicon.get(c),
                    }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", output::format_lookups(lexicon, &characters));
            }
        }
    }

    Ok(())
}

async fn read_lyrics(file: Option<&Path>) -> anyhow::Result<String> {
    let raw = match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read lyrics from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read lyrics from stdin")?;
            buf
        }
    };

    let lyrics = LyricsPreprocessor.process(&raw);
    anyhow::ensure!(!lyrics.is_empty(), "no lyrics provided");
    Ok(lyrics)
}

fn chat_oracle(config: &Config) -> ChatOracle {
    ChatOracle::new(ChatOracleConfig {
        api_key: config.oracle.api_key.clone(),
        api_url: config.oracle.api_url.clone(),
        model: config.oracle.model.clone(),
        temperature: config.oracle.temperature,
        translate_timeout: Duration::from_secs(config.oracle.translate_timeout_secs),
        define_timeout: Duration::from_secs(config.oracle.define_timeout_secs),
    })
}
