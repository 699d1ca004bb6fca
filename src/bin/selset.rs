//! CLI entry point for the `selset` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use selector_set::cli::commands;

#[derive(Parser)]
#[command(
    name = "selset",
    about = "SelectorSet CLI — inspect selector classification and index layout"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the classification groups for one or more selectors
    Classify {
        /// Selector strings to classify
        #[arg(required = true)]
        selectors: Vec<String>,
    },
    /// Build a set from the given selectors and show its index layout
    Info {
        /// Selector strings to register
        #[arg(required = true)]
        selectors: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Classify { selectors } => commands::cmd_classify(&selectors, json),
        Commands::Info { selectors } => commands::cmd_info(&selectors, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
