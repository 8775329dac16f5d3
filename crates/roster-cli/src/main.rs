//! roster CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod notify;
mod session;

use config::OutputFormat;

#[derive(Parser)]
#[command(name = "roster", version, about = "In-memory student marks roster")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session reading commands from stdin
    Shell {
        /// Output format: text, html, json
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run commands against a fresh roster and print the result
    Exec {
        /// Commands to run in order (e.g. "add Neha 70" sort highest)
        #[arg(required = true)]
        commands: Vec<String>,

        /// Output format: text, html, json
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Write the rendered roster to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Exit with an error on the first rejected command
        #[arg(long)]
        strict: bool,

        /// Don't print success/error messages
        #[arg(long, short)]
        quiet: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the sample roster
    Sample {
        /// Output format: text, html, json
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roster=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Shell { format, config } => commands::shell::execute(format, config).await,
        Commands::Exec {
            commands,
            format,
            output,
            strict,
            quiet,
            config,
        } => commands::exec::execute(commands, format, output, strict, quiet, config),
        Commands::Sample { format, config } => commands::sample::execute(format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
