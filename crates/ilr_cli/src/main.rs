mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ilrv")]
#[command(version, about = "ILR validation engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a submission against the rule catalog
    Validate {
        /// Path to the submission file (YAML, JSON or TOML)
        submission: String,

        /// Path to the reference data pack (YAML, JSON or TOML)
        #[arg(short, long)]
        refdata: String,

        /// Comma-separated rule names to run (defaults to the full catalog)
        #[arg(long)]
        rules: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a submission's structure without running the rule catalog
    Check {
        /// Path to the submission file (YAML, JSON or TOML)
        submission: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Write a starter submission skeleton
    Init {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// UKPRN to scaffold the skeleton with
        #[arg(short, long, default_value_t = 10000000)]
        ukprn: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            submission,
            refdata,
            rules,
            format,
        } => commands::validate::execute(&submission, &refdata, rules.as_deref(), &format),

        Commands::Check { submission, format } => commands::check::execute(&submission, &format),

        Commands::Init { output, ukprn } => commands::init::execute(output.as_deref(), ukprn),
    }
}
