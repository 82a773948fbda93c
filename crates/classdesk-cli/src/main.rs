//! classdesk CLI: student records, arithmetic quiz and jokes.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use classdesk_core::engine::Extreme;

mod commands;

#[derive(Parser)]
#[command(
    name = "classdesk",
    version,
    about = "Student records viewer, arithmetic quiz and joke teller"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Student marks file (overrides config)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// View all student records with a class summary
    List {
        /// Output format: text, table, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Write JSON to this path instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// View an individual record by student code or name
    Find {
        /// Student code, or part of a name (case-insensitive)
        query: String,
    },

    /// Show the student with the highest total score
    Highest,

    /// Show the student with the lowest total score
    Lowest,

    /// Check the marks file and report skipped lines
    Validate,

    /// Play the arithmetic quiz
    Quiz {
        /// Difficulty: 1 (easy), 2 (moderate), 3 (advanced)
        #[arg(long)]
        difficulty: Option<u8>,

        /// Number of questions
        #[arg(long)]
        questions: Option<u32>,
    },

    /// Tell jokes, setup first and punchline on demand
    Joke {
        /// CSV file with a `Joke` column (overrides config)
        #[arg(long)]
        jokes_file: Option<PathBuf>,
    },

    /// Create a starter config and sample data files
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("classdesk=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::List { format, output } => {
            commands::list::execute(config, cli.file, format, output)
        }
        Commands::Find { query } => commands::find::execute(config, cli.file, query),
        Commands::Highest => commands::extremum::execute(config, cli.file, Extreme::Highest),
        Commands::Lowest => commands::extremum::execute(config, cli.file, Extreme::Lowest),
        Commands::Validate => commands::validate::execute(config, cli.file),
        Commands::Quiz {
            difficulty,
            questions,
        } => commands::quiz::execute(config, difficulty, questions),
        Commands::Joke { jokes_file } => commands::joke::execute(config, jokes_file),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
