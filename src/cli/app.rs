//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use spec::output::OutputMode;

/// spec - Judge a subject against every rule of a rule set
#[derive(Parser, Debug)]
#[command(
    name = "spec",
    version,
    about = "Judge a subject against every rule of a rule set",
    long_about = "Evaluate a person against a bundled conjunction of rules.\n\n\
                  Every rule is checked, even after one fails, and every\n\
                  failing rule is reported in order."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Rules file (defaults to ~/.config/spec/rules.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether a person is a vampire
    Vampire {
        /// Age in years
        #[arg(short, long, default_value_t = 0)]
        age: u32,

        /// The person can die
        #[arg(short, long)]
        mortal: bool,

        /// Meals the person eats
        #[arg(short, long, value_delimiter = ',')]
        diet: Vec<String>,
    },

    /// Check whether a person is the configured scholar
    Scholar {
        /// Given name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Age in years
        #[arg(short, long, default_value_t = 0)]
        age: u32,

        /// The person can die
        #[arg(short, long)]
        mortal: bool,

        /// Year of birth
        #[arg(short, long, allow_negative_numbers = true, default_value_t = 0)]
        birth_year: i32,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Vampire { age, mortal, diet }) => {
            commands::vampire(cli.config.as_deref(), age, mortal, diet, output_mode)
        },
        Some(Command::Scholar {
            name,
            age,
            mortal,
            birth_year,
        }) => commands::scholar(cli.config.as_deref(), name, age, mortal, birth_year, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": spec::VERSION
                    })
                );
            } else {
                println!("spec v{}", spec::VERSION);
            }
            Ok(())
        },
        None => {
            println!("spec v{}", spec::VERSION);
            println!("Run 'spec --help' for usage information.");
            Ok(())
        },
    }
}
