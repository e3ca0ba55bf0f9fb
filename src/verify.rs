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

use std::fmt;
use super::geometry::{Coord, Geometry, has_repeated_cells};
use super::grid_state::EMPTY_LETTER;
use super::layout::Layout;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpellingMismatch {
    pub word: String,
    pub found: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutFault {
    GridSize { expected: usize, actual: usize },
    PathCount { expected: usize, actual: usize },
    PathLength { word: String, expected: usize, actual: usize },
    MalformedPath { word: String },
    SpangramDoesNotSpan,
    NotExactCover,
    Misspelt(SpellingMismatch),
}

fn words<'a, S: AsRef<str>>(
    spangram: &'a str,
    theme_words: &'a [S],
) -> impl Iterator<Item = &'a str> {
    std::iter::once(spangram).chain(theme_words.iter().map(|w| w.as_ref()))
}

fn paths(layout: &Layout) -> impl Iterator<Item = &[Coord]> {
    std::iter::once(layout.spangram_path.as_slice())
        .chain(layout.theme_word_paths.iter().map(|p| p.as_slice()))
}

/// Reads every word back off the grid along its path and compares it
/// with the word that was meant to be placed there. All of the
/// mismatches are returned.
pub fn verify_spelling<S: AsRef<str>>(
    geometry: Geometry,
    layout: &Layout,
    spangram: &str,
    theme_words: &[S],
) -> Result<(), Vec<SpellingMismatch>> {
    let letters = layout.grid_letters.chars().collect::<Vec<char>>();

    let mismatches = words(spangram, theme_words)
        .zip(paths(layout))
        .filter_map(|(word, path)| {
            let found = path.iter()
                .map(|&coord| {
                    geometry.coord_to_index(coord)
                        .ok()
                        .and_then(|index| letters.get(index).copied())
                        .unwrap_or(EMPTY_LETTER)
                })
                .collect::<String>();

            (found != word).then(|| SpellingMismatch {
                word: word.to_string(),
                found,
            })
        })
        .collect::<Vec<_>>();

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(mismatches)
    }
}

fn is_well_formed(geometry: Geometry, path: &[Coord]) -> bool {
    match path {
        [single] => geometry.contains(*single),
        _ => geometry.is_valid_path(path) && !has_repeated_cells(path),
    }
}

/// Checks every property that a finished layout must have. This is
/// used for layouts that come from outside of the engine, such as
/// stored puzzles.
pub fn check_layout<S: AsRef<str>>(
    geometry: Geometry,
    layout: &Layout,
    spangram: &str,
    theme_words: &[S],
) -> Result<(), LayoutFault> {
    let grid_size = layout.grid_letters.chars().count();

    if grid_size != geometry.n_cells() {
        return Err(LayoutFault::GridSize {
            expected: geometry.n_cells(),
            actual: grid_size,
        });
    }

    if layout.theme_word_paths.len() != theme_words.len() {
        return Err(LayoutFault::PathCount {
            expected: theme_words.len(),
            actual: layout.theme_word_paths.len(),
        });
    }

    for (word, path) in words(spangram, theme_words).zip(paths(layout)) {
        let word_length = word.chars().count();

        if path.len() != word_length {
            return Err(LayoutFault::PathLength {
                word: word.to_string(),
                expected: word_length,
                actual: path.len(),
            });
        }

        if !is_well_formed(geometry, path) {
            return Err(LayoutFault::MalformedPath { word: word.to_string() });
        }
    }

    if !geometry.spans_opposite_edges(&layout.spangram_path) {
        return Err(LayoutFault::SpangramDoesNotSpan);
    }

    if !geometry.all_cells_used_once(&paths(layout).collect::<Vec<_>>()) {
        return Err(LayoutFault::NotExactCover);
    }

    if let Err(mismatches) = verify_spelling(
        geometry,
        layout,
        spangram,
        theme_words,
    ) {
        if let Some(mismatch) = mismatches.into_iter().next() {
            return Err(LayoutFault::Misspelt(mismatch));
        }
    }

    Ok(())
}

impl fmt::Display for SpellingMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "path for “{}” spells “{}”", self.word, self.found)
    }
}

impl fmt::Display for LayoutFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LayoutFault::GridSize { expected, actual } => {
                write!(
                    f,
                    "grid has {} letters but should have {}",
                    actual,
                    expected,
                )
            },
            LayoutFault::PathCount { expected, actual } => {
                write!(
                    f,
                    "there are {} theme word paths for {} theme words",
                    actual,
                    expected,
                )
            },
            LayoutFault::PathLength { word, expected, actual } => {
                write!(
                    f,
                    "path for “{}” has {} cells instead of {}",
                    word,
                    actual,
                    expected,
                )
            },
            LayoutFault::MalformedPath { word } => {
                write!(f, "path for “{}” isn’t a chain of adjacent cells", word)
            },
            LayoutFault::SpangramDoesNotSpan => {
                write!(f, "spangram doesn’t touch two opposite edges")
            },
            LayoutFault::NotExactCover => {
                write!(f, "paths don’t cover every cell exactly once")
            },
            LayoutFault::Misspelt(mismatch) => mismatch.fmt(f),
        }
    }
}

impl std::error::Error for LayoutFault {}

#[cfg(test)]
mod test {
    use super::*;

    fn path(cells: &[(usize, usize)]) -> Vec<Coord> {
        cells.iter().map(|&(row, col)| Coord::new(row, col)).collect()
    }

    // AB
    // DC
    // EF
    fn good_layout() -> Layout {
        Layout {
            grid_letters: "ABDCEF".to_string(),
            spangram_path: path(&[(0, 0), (1, 0), (2, 0)]),
            theme_word_paths: vec![path(&[(0, 1), (1, 1), (2, 1)])],
        }
    }

    fn check(layout: &Layout, spangram: &str, theme: &[&str]) -> Result<(), LayoutFault> {
        check_layout(Geometry::new(3, 2), layout, spangram, theme)
    }

    #[test]
    fn good() {
        assert_eq!(check(&good_layout(), "ADE", &["BCF"]), Ok(()));
        assert_eq!(
            verify_spelling(Geometry::new(3, 2), &good_layout(), "ADE", &["BCF"]),
            Ok(()),
        );
    }

    #[test]
    fn spelling() {
        assert_eq!(
            verify_spelling(Geometry::new(3, 2), &good_layout(), "AXE", &["BCG"]),
            Err(vec![
                SpellingMismatch { word: "AXE".to_string(), found: "ADE".to_string() },
                SpellingMismatch { word: "BCG".to_string(), found: "BCF".to_string() },
            ]),
        );
        assert_eq!(
            &check(&good_layout(), "ADE", &["FCB"]).unwrap_err().to_string(),
            "path for “FCB” spells “BCF”",
        );
    }

    #[test]
    fn sizes() {
        let mut layout = good_layout();
        layout.grid_letters.push('G');
        assert_eq!(
            check(&layout, "ADE", &["BCF"]),
            Err(LayoutFault::GridSize { expected: 6, actual: 7 }),
        );

        assert_eq!(
            check(&good_layout(), "ADE", &["BCF", "X"]),
            Err(LayoutFault::PathCount { expected: 2, actual: 1 }),
        );

        assert_eq!(
            check(&good_layout(), "AD", &["BCF"]),
            Err(LayoutFault::PathLength {
                word: "AD".to_string(),
                expected: 2,
                actual: 3,
            }),
        );
    }

    #[test]
    fn malformed() {
        let mut layout = good_layout();
        layout.theme_word_paths[0] = path(&[(0, 1), (2, 1), (1, 1)]);
        assert_eq!(
            check(&layout, "ADE", &["BCF"]),
            Err(LayoutFault::MalformedPath { word: "BCF".to_string() }),
        );

        layout.theme_word_paths[0] = path(&[(0, 1), (1, 1), (0, 1)]);
        assert_eq!(
            check(&layout, "ADE", &["BCF"]),
            Err(LayoutFault::MalformedPath { word: "BCF".to_string() }),
        );
    }

    #[test]
    fn span_and_cover() {
        // ABC
        // DEF
        let geometry = Geometry::new(2, 3);

        let layout = Layout {
            grid_letters: "ABCDEF".to_string(),
            spangram_path: path(&[(0, 0), (0, 1)]),
            theme_word_paths: vec![path(&[(0, 2), (1, 2), (1, 1), (1, 0)])],
        };
        assert_eq!(
            check_layout(geometry, &layout, "AB", &["CFED"]),
            Err(LayoutFault::SpangramDoesNotSpan),
        );

        let layout = Layout {
            grid_letters: "ABCDEF".to_string(),
            spangram_path: path(&[(0, 0), (0, 1), (0, 2)]),
            theme_word_paths: vec![path(&[(1, 2), (1, 1), (0, 1)])],
        };
        assert_eq!(
            check_layout(geometry, &layout, "ABC", &["FEB"]),
            Err(LayoutFault::NotExactCover),
        );
    }
}
