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
use serde::{Serialize, Deserialize};
use super::geometry::{Coord, Geometry};
use super::layout::Layout;
use super::selection::{self, Judgement, SelectionError};
use super::verify::{self, LayoutFault};

/// A puzzle as it is handed to whatever stores it. Only the layout is
/// needed to play. The rest is shown to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub clue: String,
    #[serde(default)]
    pub geometry: Geometry,
    pub spangram: String,
    pub theme_words: Vec<String>,
    pub layout: Layout,
}

#[derive(Debug)]
pub enum PuzzleError {
    Json(serde_json::Error),
    Layout(LayoutFault),
}

impl Puzzle {
    pub fn from_json(s: &str) -> Result<Puzzle, PuzzleError> {
        serde_json::from_str(s).map_err(PuzzleError::Json)
    }

    pub fn to_json(&self) -> Result<String, PuzzleError> {
        serde_json::to_string(self).map_err(PuzzleError::Json)
    }

    /// Makes sure that the stored layout really is a solution for the
    /// stored words
    pub fn check(&self) -> Result<(), PuzzleError> {
        verify::check_layout(
            self.geometry,
            &self.layout,
            &self.spangram,
            self.theme_words.as_slice(),
        ).map_err(PuzzleError::Layout)
    }

    pub fn judge(&self, selection: &[Coord]) -> Result<Judgement, SelectionError> {
        selection::judge(self.geometry, &self.layout, selection)
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleError::Json(e) => write!(f, "{}", e),
            PuzzleError::Layout(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PuzzleError {}

#[cfg(test)]
mod test {
    use super::*;

    fn puzzle() -> Puzzle {
        Puzzle {
            title: "Pets".to_string(),
            author: "Neil".to_string(),
            clue: "Furry friends".to_string(),
            geometry: Geometry::new(2, 3),
            spangram: "CAT".to_string(),
            theme_words: vec!["DOG".to_string()],
            layout: Layout {
                grid_letters: "CATDOG".to_string(),
                spangram_path: vec![
                    Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2),
                ],
                theme_word_paths: vec![vec![
                    Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2),
                ]],
            },
        }
    }

    #[test]
    fn round_trip() {
        let puzzle = puzzle();
        let json = puzzle.to_json().unwrap();

        assert!(json.contains("\"themeWords\":[\"DOG\"]"));
        assert_eq!(Puzzle::from_json(&json).unwrap(), puzzle);
        assert!(puzzle.check().is_ok());
    }

    #[test]
    fn defaults() {
        let puzzle = Puzzle::from_json(
            "{\"spangram\":\"AB\",\"themeWords\":[],\
             \"layout\":{\"gridLetters\":\"\",\"spangramPath\":[],\
             \"themeWordPaths\":[]}}"
        ).unwrap();

        assert_eq!(puzzle.geometry, Geometry::default());
        assert_eq!(&puzzle.title, "");
        assert_eq!(
            &puzzle.check().unwrap_err().to_string(),
            "grid has 0 letters but should have 48",
        );
    }

    #[test]
    fn bad_json() {
        assert!(matches!(
            Puzzle::from_json("{\"spangram\":"),
            Err(PuzzleError::Json(_)),
        ));
    }

    #[test]
    fn judging() {
        let puzzle = puzzle();

        assert_eq!(
            puzzle.judge(&[Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)]),
            Ok(Judgement::ThemeWord(0)),
        );
        assert_eq!(
            puzzle.judge(&[Coord::new(1, 1), Coord::new(0, 0)]),
            Ok(Judgement::Other("OC".to_string())),
        );
    }
}
