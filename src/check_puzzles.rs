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
use std::sync::{Arc, mpsc, Mutex};
use std::thread;
use std::io::BufRead;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use clap::Parser;
use wordstrand::Puzzle;
use wordstrand::puzzle::PuzzleError;

/// Checks that every stored puzzle has a valid layout
#[derive(Parser)]
#[command(name = "check-puzzles")]
struct Cli {
    /// File with one JSON puzzle per line
    #[arg(default_value = "puzzles.jsonl")]
    filename: PathBuf,
}

struct PuzzleMessage {
    puzzle_num: usize,
    error: PuzzleError,
}

struct PuzzleQueue {
    data: Mutex<VecDeque<(usize, String)>>,
}

impl PuzzleQueue {
    fn new(jobs: VecDeque<(usize, String)>) -> PuzzleQueue {
        PuzzleQueue { data: Mutex::new(jobs) }
    }

    fn next(&self) -> Option<(usize, String)> {
        // A poisoned lock means another checker panicked. The panic
        // is picked up when the thread is joined.
        self.data.lock().ok()?.pop_front()
    }
}

fn load_puzzles(filename: &Path) -> Result<VecDeque<(usize, String)>, ()> {
    let mut puzzles = VecDeque::new();

    let f = match std::fs::File::open(filename) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}: {}", filename.display(), e);
            return Err(());
        },
    };

    for (line_num, line) in std::io::BufReader::new(f).lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("{}: {}", filename.display(), e);
                return Err(());
            },
        };

        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        puzzles.push_back((line_num, line.to_string()));
    }

    if puzzles.is_empty() {
        eprintln!("{}: empty file", filename.display());
        return Err(());
    }

    Ok(puzzles)
}

fn check_puzzles(
    puzzles: &PuzzleQueue,
    tx: mpsc::Sender<PuzzleMessage>,
) -> Result<(), mpsc::SendError<PuzzleMessage>> {
    while let Some((puzzle_num, puzzle_string)) = puzzles.next() {
        let result = Puzzle::from_json(&puzzle_string)
            .and_then(|puzzle| puzzle.check());

        if let Err(error) = result {
            tx.send(PuzzleMessage { puzzle_num, error })?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Ok(puzzles) = load_puzzles(&cli.filename)
    else {
        return ExitCode::FAILURE;
    };

    let n_puzzles = puzzles.len();

    let puzzles = Arc::new(PuzzleQueue::new(puzzles));

    let (tx, rx) = mpsc::channel();
    let n_threads = Into::<usize>::into(
        thread::available_parallelism().unwrap_or(std::num::NonZeroUsize::MIN)
    ).min(n_puzzles);

    let handles = (0..n_threads).map(|_| {
        let puzzles = Arc::clone(&puzzles);
        let tx = tx.clone();

        thread::spawn(move || check_puzzles(&puzzles, tx))
    }).collect::<Vec<_>>();

    std::mem::drop(tx);

    let mut messages = rx.into_iter().collect::<Vec<_>>();
    messages.sort_by_key(|m| m.puzzle_num);

    let mut result = ExitCode::SUCCESS;

    for message in messages {
        result = ExitCode::FAILURE;

        eprintln!(
            "{}:{}: {}",
            cli.filename.display(),
            message.puzzle_num + 1,
            message.error,
        );
    }

    for handle in handles {
        if let Err(e) = handle.join() {
            std::panic::resume_unwind(e);
        }
    }

    result
}
