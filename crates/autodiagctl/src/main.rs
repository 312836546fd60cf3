//! AutoDiag Control - AI vehicle fault diagnosis from the terminal.
//!
//! Runs the full-screen TUI by default; `diagnose` runs a single query
//! from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use autodiagctl::commands;
use autodiagctl::tui;

#[derive(Parser)]
#[command(name = "autodiagctl")]
#[command(about = "AutoDiag - AI vehicle fault diagnosis", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one diagnosis and print the suggested faults
    Diagnose {
        /// Vehicle make (e.g. Toyota)
        #[arg(long)]
        make: String,

        /// Vehicle model (e.g. Camry)
        #[arg(long)]
        model: Option<String>,

        /// Model year
        #[arg(long)]
        year: String,

        /// Symptom description
        #[arg(long)]
        symptoms: String,

        /// UI language code (ar, en, fr, de, es)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Open the interactive diagnosis screen (default)
    Tui {
        /// UI language code (ar, en, fr, de, es)
        #[arg(long)]
        lang: Option<String>,
    },

    /// List supported languages
    Languages,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Diagnose {
            make,
            model,
            year,
            symptoms,
            lang,
        }) => commands::diagnose(make, model, year, symptoms, lang).await,
        Some(Commands::Tui { lang }) => tui::run(lang).await,
        Some(Commands::Languages) => {
            commands::languages();
            Ok(())
        }
        None => tui::run(None).await,
    }
}
