// Wordstrand – A spangram word-search puzzle maker
// Copyright (C) 2025  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::process::ExitCode;
use std::time::Duration;
use clap::Parser;
use env_logger::Env;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordstrand::clock::InstantClock;
use wordstrand::geometry::{DEFAULT_ROWS, DEFAULT_COLS};
use wordstrand::layout::{
    DEFAULT_MAX_ALTERNATIVES,
    DEFAULT_MAX_ATTEMPTS,
    DEFAULT_DEADLINE,
};
use wordstrand::observer::LogObserver;
use wordstrand::{Geometry, Layout, LayoutConfig, Path, Puzzle};

/// Lays out the words of a spangram puzzle on a grid
#[derive(Parser)]
#[command(name = "make-layout")]
struct Cli {
    /// Number of rows in the grid
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of columns in the grid
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Alternative placements to try for each word before giving up
    /// on an attempt
    #[arg(long, default_value_t = DEFAULT_MAX_ALTERNATIVES)]
    alternatives: usize,

    /// Maximum number of attempts
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: u32,

    /// Time limit for the whole search in milliseconds
    #[arg(long, default_value_t = DEFAULT_DEADLINE.as_millis() as u64)]
    deadline_ms: u64,

    /// Don’t reject placements that leave unfillable gaps
    #[arg(long)]
    no_pruning: bool,

    /// Seed for a repeatable layout
    #[arg(long)]
    seed: Option<u64>,

    /// Print the puzzle as JSON
    #[arg(long)]
    json: bool,

    #[arg(long, default_value = "")]
    title: String,

    #[arg(long, default_value = "")]
    author: String,

    #[arg(long, default_value = "")]
    clue: String,

    /// Log the progress of the search
    #[arg(short, long)]
    verbose: bool,

    /// The word that must span the grid
    spangram: String,

    /// The rest of the words
    #[arg(required = true)]
    theme_words: Vec<String>,
}

fn format_path(path: &Path) -> String {
    path.iter()
        .map(|coord| coord.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_layout(
    geometry: Geometry,
    layout: &Layout,
    spangram: &str,
    theme_words: &[String],
) {
    for row in layout.rows(geometry) {
        println!("{}", row);
    }

    println!();

    let width = theme_words.iter()
        .map(|w| w.chars().count())
        .chain(std::iter::once(spangram.chars().count()))
        .max()
        .unwrap_or(0);

    println!("{:width$} {}", spangram, format_path(&layout.spangram_path));

    for (word, path) in theme_words.iter().zip(layout.theme_word_paths.iter()) {
        println!("{:width$} {}", word, format_path(path));
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" })
    ).init();

    let geometry = Geometry::new(cli.rows, cli.cols);

    let config = LayoutConfig {
        geometry,
        max_alternatives: cli.alternatives,
        max_attempts: cli.attempts,
        deadline: Duration::from_millis(cli.deadline_ms),
        prune_isolated_regions: !cli.no_pruning,
    };

    let spangram = cli.spangram.to_uppercase();
    let theme_words = cli.theme_words
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let layout = match wordstrand::generate_with(
        &spangram,
        &theme_words,
        &config,
        &mut rng,
        &InstantClock::start(),
        &mut LogObserver,
    ) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    if cli.json {
        let puzzle = Puzzle {
            title: cli.title,
            author: cli.author,
            clue: cli.clue,
            geometry,
            spangram,
            theme_words,
            layout,
        };

        match puzzle.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
        }
    } else {
        print_layout(geometry, &layout, &spangram, &theme_words);
    }

    ExitCode::SUCCESS
}
