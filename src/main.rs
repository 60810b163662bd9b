use clap::{Parser, Subcommand};
use std::{error::Error, path::PathBuf};

mod cli;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Heap-sorts integer-list files
    Sort {
        /// File or directory of files to sort
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Sort in descending order
        #[arg(long)]
        descending: bool,

        /// Check every output against the reference sort
        #[arg(long)]
        validate: bool,

        /// Process at most N files of a directory
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        /// Never show a progress bar
        #[arg(long)]
        no_progress_bar: bool,
    },

    /// Writes a random integer list to stdout
    Generate {
        /// Number of integers to generate
        count: usize,

        /// RNG seed for reproducible lists
        #[arg(long)]
        seed: Option<u64>,

        /// Smallest value to generate
        #[arg(long, default_value_t = -1_000_000, allow_negative_numbers = true)]
        min: i64,

        /// Largest value to generate
        #[arg(long, default_value_t = 1_000_000, allow_negative_numbers = true)]
        max: i64,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command {
        Command::Sort {
            path,
            descending,
            validate,
            limit,
            no_progress_bar,
        } => cli::sort::sort(path, limit, validate, descending, no_progress_bar),
        Command::Generate {
            count,
            seed,
            min,
            max,
        } => cli::generate::generate(count, seed, min, max),
    }
}
