//! Letter Boxed Solver - CLI
//!
//! Solves Letter Boxed puzzles with greedy or exhaustive chain search.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use letter_boxed::{
    catalog::Exclusions,
    commands::{SolveConfig, normalize_file, run_interactive, solve_puzzle},
    core::Puzzle,
    output::{print_normalize_result, print_puzzle, print_solve_result},
    wordlists::{WORDS, loader},
};
use log::debug;

#[derive(Parser)]
#[command(
    name = "letter_boxed",
    about = "Letter Boxed solver using coverage-scored greedy and exhaustive chain search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (a small built-in sample of a few hundred words) or path to a
    /// newline-delimited word list; pass a full word list for real puzzles
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// File of words to exclude, one per line
    #[arg(short = 'x', long, global = true)]
    exclude: Option<String>,

    /// Word to exclude (repeatable)
    #[arg(long = "skip", global = true)]
    skip: Vec<String>,

    /// Search mode: greedy (default) or exhaustive
    #[arg(short, long, global = true, default_value = "greedy")]
    mode: String,

    /// Longest solution to report (exhaustive default: 3)
    #[arg(short = 'n', long, global = true)]
    max_words: Option<usize>,

    /// Greedy: extensions after the starting word
    #[arg(long, global = true, default_value = "3")]
    max_hops: usize,

    /// Greedy: keep extending solved chains to report longer solutions too
    #[arg(short, long, global = true)]
    all: bool,

    /// Greedy: maximum starting words to try (default: catalog size)
    #[arg(long, global = true)]
    max_attempts: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default - enter letters one at a time)
    Interactive,

    /// Solve a puzzle given as four sides, e.g. "abc def ghi jkl"
    Solve {
        /// The four sides, separated by spaces, commas, hyphens or slashes
        #[arg(num_args = 1..)]
        sides: Vec<String>,

        /// List shorter solutions first
        #[arg(short, long)]
        sort: bool,

        /// Show progress for exhaustive search
        #[arg(short, long)]
        progress: bool,
    },

    /// Normalize a raw word list and save it for later runs
    Normalize {
        /// Raw word list
        input: String,

        /// Where to write the normalized list
        #[arg(short, long, default_value = "words.txt")]
        output: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the dictionary based on the -d flag
fn load_dictionary(dictionary: &str) -> Result<Vec<String>> {
    match dictionary {
        "embedded" => Ok(loader::words_from_slice(WORDS)),
        path => loader::load_from_file(path)
            .with_context(|| format!("failed to read dictionary {path}")),
    }
}

/// Combine the --exclude file with --skip words
fn load_exclusions(file: Option<&str>, skip: &[String]) -> Result<Exclusions> {
    let mut exclusions = match file {
        Some(path) => loader::load_exclusions(path)
            .with_context(|| format!("failed to read exclusion list {path}"))?,
        None => Exclusions::new(),
    };
    exclusions.extend(skip);
    Ok(exclusions)
}

fn solve_config(cli: &Cli) -> SolveConfig {
    SolveConfig {
        mode: cli.mode.clone(),
        max_words: cli.max_words,
        max_hops: cli.max_hops,
        report_all: cli.all,
        max_attempts: cli.max_attempts,
        show_progress: false,
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to interactive mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Interactive);

    if let Commands::Normalize { input, output } = &command {
        let result = normalize_file(input, output)
            .with_context(|| format!("failed to normalize {input} into {output}"))?;
        print_normalize_result(&result, output);
        return Ok(());
    }

    let dictionary = load_dictionary(&cli.dictionary)?;
    let excluded = load_exclusions(cli.exclude.as_deref(), &cli.skip)?;
    debug!(
        "{} dictionary entries, {} exclusions",
        dictionary.len(),
        excluded.len()
    );

    let mut config = solve_config(&cli);

    match &command {
        Commands::Interactive => {
            run_interactive(&config, &dictionary, &excluded).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve {
            sides,
            sort,
            progress,
        } => {
            let puzzle: Puzzle = sides.join(" ").parse()?;
            config.show_progress = *progress;

            print_puzzle(&puzzle);
            let result = solve_puzzle(&config, puzzle, &dictionary, &excluded);
            print_solve_result(&result, cli.verbose > 0, *sort);
            Ok(())
        }
        Commands::Normalize { .. } => Ok(()),
    }
}
