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
use super::geometry::{Coord, Geometry, are_adjacent, has_repeated_cells};
use super::layout::Layout;

/// What a path drawn by the player turned out to be
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Judgement {
    Spangram,
    /// Index into the theme words
    ThemeWord(usize),
    /// A valid path that isn’t one of the puzzle’s words. The letters
    /// it spells are included so that they can be looked up for hints.
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionError {
    TooShort,
    OutOfBounds(Coord),
    NotAdjacent(Coord, Coord),
    RepeatedCell,
}

fn check_selection(
    geometry: Geometry,
    selection: &[Coord],
) -> Result<(), SelectionError> {
    if selection.len() < 2 {
        return Err(SelectionError::TooShort);
    }

    if let Some(&coord) = selection.iter().find(|&&c| !geometry.contains(c)) {
        return Err(SelectionError::OutOfBounds(coord));
    }

    if let Some(pair) = selection.windows(2)
        .find(|pair| !are_adjacent(pair[0], pair[1]))
    {
        return Err(SelectionError::NotAdjacent(pair[0], pair[1]));
    }

    if has_repeated_cells(selection) {
        return Err(SelectionError::RepeatedCell);
    }

    // The individual checks above are the same as these two
    debug_assert!(geometry.is_valid_selection(selection));

    Ok(())
}

/// Judges a path that a player has drawn over a finished layout. The
/// path only counts as one of the puzzle’s words if it follows
/// exactly the same cells, in the same order, as the layout placed
/// them.
pub fn judge(
    geometry: Geometry,
    layout: &Layout,
    selection: &[Coord],
) -> Result<Judgement, SelectionError> {
    check_selection(geometry, selection)?;

    if layout.spangram_path == selection {
        return Ok(Judgement::Spangram);
    }

    if let Some(index) = layout.theme_word_paths
        .iter()
        .position(|path| path == selection)
    {
        return Ok(Judgement::ThemeWord(index));
    }

    let letters = layout.grid_letters.chars().collect::<Vec<char>>();

    let word = selection.iter()
        .filter_map(|&coord| {
            geometry.coord_to_index(coord)
                .ok()
                .and_then(|index| letters.get(index).copied())
        })
        .collect::<String>();

    Ok(Judgement::Other(word))
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SelectionError::TooShort => {
                write!(f, "a word needs at least two letters")
            },
            SelectionError::OutOfBounds(coord) => {
                write!(f, "cell {} is outside the grid", coord)
            },
            SelectionError::NotAdjacent(a, b) => {
                write!(f, "cells {} and {} aren’t next to each other", a, b)
            },
            SelectionError::RepeatedCell => {
                write!(f, "a cell can only be used once")
            },
        }
    }
}

impl std::error::Error for SelectionError {}
