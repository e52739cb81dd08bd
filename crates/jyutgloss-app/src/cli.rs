use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cantonese lyrics translator and character analyzer
#[derive(Parser)]
#[command(name = "jyutgloss", version, about)]
pub struct Cli {
    /// Emit JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Translate lyrics line by line
    Translate {
        /// Lyrics file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Classify characters against the reference data and suggest
    /// definitions for unknown ones
    Analyze {
        /// Lyrics file; stdin when omitted
        file: Option<PathBuf>,
        /// Extra song context passed to the definition oracle
        #[arg(long)]
        context: Option<String>,
        /// Classification only, no definition suggestions
        #[arg(long)]
        no_suggest: bool,
    },
    /// Full pipeline: translation, classification, and suggested
    /// definitions in one report
    Report {
        /// Lyrics file; stdin when omitted
        file: Option<PathBuf>,
        /// Extra song context passed to the definition oracle
        #[arg(long)]
        context: Option<String>,
    },
    /// Look up characters in the reference data
    Lookup {
        /// Characters to look up
        characters: String,
    },
}
