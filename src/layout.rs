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

//! Finds a placement for every word of a puzzle so that between them
//! they cover the whole grid.
//!
//! Each attempt places the spangram first and then the theme words
//! from longest to shortest. Every word is allowed a small number of
//! alternative placements before the attempt gives up. Failed
//! attempts are retried from an empty grid with fresh randomness until
//! either the attempt limit or the deadline is reached.

use std::fmt;
use std::time::Duration;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Serialize, Deserialize};
use super::clock::{Clock, Deadline};
use super::geometry::{Coord, Geometry, Path};
use super::grid_state::GridState;
use super::observer::Observer;
use super::path_search::{self, OutOfTime};
use super::{spangram, verify};

pub const DEFAULT_MAX_ALTERNATIVES: usize = 3;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;
pub const DEFAULT_DEADLINE: Duration = Duration::from_millis(3000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    pub geometry: Geometry,
    /// How many successful placements of a single word to try before
    /// giving up on the attempt
    pub max_alternatives: usize,
    pub max_attempts: u32,
    /// Measured from the start of the whole operation
    pub deadline: Duration,
    /// Reject placements that leave a group of free cells too small
    /// for any of the remaining words
    pub prune_isolated_regions: bool,
}

impl Default for LayoutConfig {
    fn default() -> LayoutConfig {
        LayoutConfig {
            geometry: Geometry::default(),
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            deadline: DEFAULT_DEADLINE,
            prune_isolated_regions: true,
        }
    }
}

/// A finished layout. The theme word paths are in the same order as
/// the theme words that were given to the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub grid_letters: String,
    pub spangram_path: Path,
    pub theme_word_paths: Vec<Path>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    LetterCountMismatch { expected: usize, actual: usize },
    /// The index of the theme word, or None for the spangram
    EmptyWord(Option<usize>),
    Exhausted { attempts: u32 },
}

impl Layout {
    /// The grid letters split into one string per row
    pub fn rows(&self, geometry: Geometry) -> Vec<String> {
        let letters = self.grid_letters.chars().collect::<Vec<char>>();

        letters
            .chunks(geometry.cols.max(1))
            .map(|row| row.iter().collect())
            .collect()
    }

    pub fn letter(&self, geometry: Geometry, coord: Coord) -> Option<char> {
        let index = geometry.coord_to_index(coord).ok()?;
        self.grid_letters.chars().nth(index)
    }
}

struct TaggedWord {
    // Position in the caller’s list of theme words
    index: usize,
    text: String,
    letters: Vec<char>,
}

enum Outcome {
    Placed(GridState, Vec<(usize, Path)>),
    Exhausted,
    OutOfTime,
}

struct Layouter<'a, R: ?Sized, C: Clock + ?Sized, O: ?Sized> {
    config: &'a LayoutConfig,
    rng: &'a mut R,
    deadline: Deadline<'a, C>,
    observer: &'a mut O,
    attempt: u32,
}

impl<'a, R, C, O> Layouter<'a, R, C, O>
where
    R: Rng + ?Sized,
    C: Clock + ?Sized,
    O: Observer + ?Sized,
{
    fn out_of_time(&self) -> bool {
        self.deadline.has_passed()
    }

    fn leaves_room(&self, state: &GridState, remaining: &[&TaggedWord]) -> bool {
        if !self.config.prune_isolated_regions {
            return true;
        }

        let Some(shortest) = remaining.iter().map(|w| w.letters.len()).min()
        else {
            return true;
        };

        state.smallest_free_region()
            .map(|size| size >= shortest)
            .unwrap_or(true)
    }

    fn place_words(
        &mut self,
        state: &GridState,
        words: &[&TaggedWord],
    ) -> Outcome {
        let Some((word, rest)) = words.split_first()
        else {
            return Outcome::Placed(state.clone(), Vec::new());
        };

        let mut starts = state.geometry()
            .coords()
            .filter(|&coord| state.is_free(coord))
            .collect::<Vec<_>>();
        starts.shuffle(&mut *self.rng);

        let mut n_alternatives = 0;

        for start in starts {
            if n_alternatives >= self.config.max_alternatives {
                break;
            }

            if self.out_of_time() {
                return Outcome::OutOfTime;
            }

            let path = match path_search::find_path(
                &word.letters,
                start,
                state,
                &mut *self.rng,
                &self.deadline,
            ) {
                Ok(Some(path)) => path,
                Ok(None) => continue,
                Err(OutOfTime) => return Outcome::OutOfTime,
            };

            let branch = state.with_word(&word.letters, &path);

            if !self.leaves_room(&branch, rest) {
                continue;
            }

            n_alternatives += 1;

            match self.place_words(&branch, rest) {
                Outcome::Placed(final_state, mut paths) => {
                    paths.push((word.index, path));
                    return Outcome::Placed(final_state, paths);
                },
                Outcome::Exhausted => (),
                Outcome::OutOfTime => return Outcome::OutOfTime,
            }
        }

        self.observer.word_exhausted(self.attempt, &word.text);

        Outcome::Exhausted
    }

    fn run(
        &mut self,
        spangram: &str,
        theme_words: &[TaggedWord],
    ) -> Result<Layout, LayoutError> {
        let spangram_letters = spangram.chars().collect::<Vec<char>>();
        let mut sorted = theme_words.iter().collect::<Vec<_>>();
        // Longer words have fewer possible placements so they go
        // first. The sort is stable so ties keep the input order.
        sorted.sort_by(|a, b| b.letters.len().cmp(&a.letters.len()));

        let mut n_attempts = 0;

        while n_attempts < self.config.max_attempts {
            if self.out_of_time() {
                self.observer.deadline_reached(
                    n_attempts,
                    self.deadline.elapsed(),
                );
                break;
            }

            self.attempt = n_attempts;
            n_attempts += 1;
            self.observer.attempt_started(self.attempt);

            let mut state = GridState::new(self.config.geometry);

            let spangram_path = match spangram::place(
                &spangram_letters,
                &mut state,
                &mut *self.rng,
                &self.deadline,
            ) {
                Ok(Some(path)) => path,
                Ok(None) => {
                    self.observer.spangram_failed(self.attempt);
                    continue;
                },
                Err(OutOfTime) => {
                    self.observer.deadline_reached(
                        self.attempt,
                        self.deadline.elapsed(),
                    );
                    break;
                },
            };

            if !self.leaves_room(&state, &sorted) {
                self.observer.spangram_failed(self.attempt);
                continue;
            }

            let (final_state, mut placed) = match self.place_words(
                &state,
                &sorted,
            ) {
                Outcome::Placed(final_state, placed) => (final_state, placed),
                Outcome::Exhausted => continue,
                Outcome::OutOfTime => {
                    self.observer.deadline_reached(
                        self.attempt,
                        self.deadline.elapsed(),
                    );
                    break;
                },
            };

            placed.sort_by_key(|&(index, _)| index);

            let layout = Layout {
                grid_letters: final_state.letters_string(),
                spangram_path,
                theme_word_paths: placed.into_iter()
                    .map(|(_, path)| path)
                    .collect(),
            };

            let texts = theme_words.iter()
                .map(|w| w.text.as_str())
                .collect::<Vec<_>>();

            match verify::verify_spelling(
                self.config.geometry,
                &layout,
                spangram,
                &texts,
            ) {
                Ok(()) => {
                    self.observer.layout_found(
                        self.attempt,
                        self.deadline.elapsed(),
                    );
                    return Ok(layout);
                },
                Err(mismatches) => {
                    for mismatch in mismatches {
                        self.observer.verification_failed(
                            self.attempt,
                            &mismatch.word,
                            &mismatch.found,
                        );
                    }
                },
            }
        }

        self.observer.gave_up(n_attempts, self.deadline.elapsed());

        Err(LayoutError::Exhausted { attempts: n_attempts })
    }
}

/// Checks the words before any searching is done. Every word must have
/// at least one letter and the letters must exactly fill the grid.
pub fn check_words<S: AsRef<str>>(
    geometry: Geometry,
    spangram: &str,
    theme_words: &[S],
) -> Result<(), LayoutError> {
    if spangram.is_empty() {
        return Err(LayoutError::EmptyWord(None));
    }

    if let Some(index) = theme_words.iter().position(|w| w.as_ref().is_empty()) {
        return Err(LayoutError::EmptyWord(Some(index)));
    }

    let actual = spangram.chars().count()
        + theme_words.iter()
        .map(|w| w.as_ref().chars().count())
        .sum::<usize>();

    if actual != geometry.n_cells() {
        return Err(LayoutError::LetterCountMismatch {
            expected: geometry.n_cells(),
            actual,
        });
    }

    Ok(())
}

/// Runs the layout engine with everything that affects the result
/// passed in explicitly. With a seeded `rng` and a clock that doesn’t
/// hit the deadline the result is repeatable.
pub fn generate_with<S, R, C, O>(
    spangram: &str,
    theme_words: &[S],
    config: &LayoutConfig,
    rng: &mut R,
    clock: &C,
    observer: &mut O,
) -> Result<Layout, LayoutError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
    C: Clock + ?Sized,
    O: Observer + ?Sized,
{
    check_words(config.geometry, spangram, theme_words)?;

    let tagged = theme_words.iter()
        .enumerate()
        .map(|(index, word)| TaggedWord {
            index,
            text: word.as_ref().to_string(),
            letters: word.as_ref().chars().collect(),
        })
        .collect::<Vec<_>>();

    let mut layouter = Layouter {
        config,
        rng,
        deadline: Deadline::new(clock, config.deadline),
        observer,
        attempt: 0,
    };

    layouter.run(spangram, &tagged)
}

/// Runs the layout engine with the thread’s random number generator,
/// the system clock and no logging.
#[cfg(not(target_arch = "wasm32"))]
pub fn generate<S: AsRef<str>>(
    spangram: &str,
    theme_words: &[S],
    config: &LayoutConfig,
) -> Result<Layout, LayoutError> {
    let clock = super::clock::InstantClock::start();

    generate_with(
        spangram,
        theme_words,
        config,
        &mut rand::thread_rng(),
        &clock,
        &mut super::observer::NoopObserver,
    )
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LayoutError::LetterCountMismatch { expected, actual } => {
                write!(
                    f,
                    "letter count mismatch: the words have {} letters but \
                     the grid has {} cells",
                    actual,
                    expected,
                )
            },
            LayoutError::EmptyWord(None) => write!(f, "the spangram is empty"),
            LayoutError::EmptyWord(Some(index)) => {
                write!(f, "theme word {} is empty", index + 1)
            },
            LayoutError::Exhausted { .. } => {
                write!(
                    f,
                    "could not find a valid layout after multiple attempts. \
                     Try different words or shuffle again.",
                )
            },
        }
    }
}

impl std::error::Error for LayoutError {}
