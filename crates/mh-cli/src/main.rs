//! CLI frontend for the Meihua plum-blossom divination engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::cast::CastOptions;

#[derive(Parser)]
#[command(
    name = "meihua",
    about = "Meihua: plum-blossom (梅花易數) I-Ching divination",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a reading and show the original and changed hexagrams
    Cast {
        #[command(subcommand)]
        method: CastMethod,
    },

    /// Show the earthly branch (時辰) for an hour
    Branch {
        /// Hour of day 0-23 (default: current hour)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
        hour: Option<u32>,
    },

    /// List the eight trigrams
    Trigrams,

    /// Show the 8x8 hexagram name grid
    Grid,

    /// Start an interactive reading session
    Session {
        /// Request an interpretation after every cast
        #[arg(long)]
        interpret: bool,
    },
}

#[derive(Subcommand)]
enum CastMethod {
    /// Consciousness method: a character and its stroke count (字占)
    Char {
        /// The character chosen by the inquirer
        character: String,

        /// Stroke count of the character
        strokes: u32,

        #[command(flatten)]
        opts: CastOptions,
    },

    /// Number method: two numbers between 1 and 99 (數占)
    Number {
        /// First number
        first: u32,

        /// Second number
        second: u32,

        #[command(flatten)]
        opts: CastOptions,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cast { method } => match method {
            CastMethod::Char {
                character,
                strokes,
                opts,
            } => commands::cast::run(
                mh_core::DivinationInput::consciousness(character, strokes),
                &opts,
            ),
            CastMethod::Number {
                first,
                second,
                opts,
            } => commands::cast::run(mh_core::DivinationInput::number(first, second), &opts),
        },
        Commands::Branch { hour } => commands::branch::run(hour),
        Commands::Trigrams => commands::trigrams::run(),
        Commands::Grid => commands::grid::run(),
        Commands::Session { interpret } => commands::session::run(interpret),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
