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
use super::geometry::{Coord, Geometry};

/// Character used for cells that don’t have a letter yet
pub const EMPTY_LETTER: char = '.';

/// The letters placed so far in one layout attempt, along with the
/// set of cells that they occupy. The used cells are always exactly
/// the union of the committed paths.
#[derive(Clone, Debug)]
pub struct GridState {
    geometry: Geometry,
    letters: Vec<Option<char>>,
    used: Vec<bool>,
    n_used: usize,
}

impl GridState {
    pub fn new(geometry: Geometry) -> GridState {
        GridState {
            geometry,
            letters: vec![None; geometry.n_cells()],
            used: vec![false; geometry.n_cells()],
            n_used: 0,
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn n_used(&self) -> usize {
        self.n_used
    }

    pub fn n_free(&self) -> usize {
        self.geometry.n_cells() - self.n_used
    }

    /// True if the cell is inside the grid and no path occupies it
    pub fn is_free(&self, coord: Coord) -> bool {
        self.geometry
            .coord_to_index(coord)
            .map(|index| !self.used[index])
            .unwrap_or(false)
    }

    pub fn letter(&self, coord: Coord) -> Option<char> {
        self.geometry
            .coord_to_index(coord)
            .ok()
            .and_then(|index| self.letters[index])
    }

    /// Writes the word along the path and marks the cells as used.
    /// The path must have come from a search against this state.
    pub fn commit(&mut self, word: &[char], path: &[Coord]) {
        debug_assert_eq!(word.len(), path.len());

        for (&letter, &coord) in word.iter().zip(path.iter()) {
            let Ok(index) = self.geometry.coord_to_index(coord)
            else {
                continue;
            };

            debug_assert!(!self.used[index]);

            self.letters[index] = Some(letter);

            if !self.used[index] {
                self.used[index] = true;
                self.n_used += 1;
            }
        }
    }

    /// Returns a copy of the state with the word committed. The
    /// original is left untouched so that a failed branch of the
    /// search can’t disturb it.
    pub fn with_word(&self, word: &[char], path: &[Coord]) -> GridState {
        let mut state = self.clone();
        state.commit(word, path);
        state
    }

    /// Counts the free cells reachable from `start` through other
    /// free cells.
    pub fn free_region_size(&self, start: Coord) -> usize {
        let mut visited = self.used.clone();
        self.flood(start, &mut visited)
    }

    /// Returns the size of the smallest connected group of free
    /// cells, or None if the grid is full.
    pub fn smallest_free_region(&self) -> Option<usize> {
        let mut visited = self.used.clone();
        let mut smallest = None;

        for coord in self.geometry.coords() {
            let size = self.flood(coord, &mut visited);

            if size > 0 && smallest.map(|s| size < s).unwrap_or(true) {
                smallest = Some(size);
            }
        }

        smallest
    }

    fn flood(&self, start: Coord, visited: &mut [bool]) -> usize {
        let Ok(start_index) = self.geometry.coord_to_index(start)
        else {
            return 0;
        };

        if visited[start_index] {
            return 0;
        }

        visited[start_index] = true;

        let mut stack = vec![start];
        let mut count = 0;

        while let Some(coord) = stack.pop() {
            count += 1;

            for neighbour in self.geometry.neighbours(coord) {
                let Ok(index) = self.geometry.coord_to_index(neighbour)
                else {
                    continue;
                };

                if !visited[index] {
                    visited[index] = true;
                    stack.push(neighbour);
                }
            }
        }

        count
    }

    /// Reads the letters along a path. Returns None if the path
    /// leaves the grid or crosses an empty cell.
    pub fn read_path(&self, path: &[Coord]) -> Option<String> {
        path.iter().map(|&coord| self.letter(coord)).collect()
    }

    /// All of the letters in row order, with [`EMPTY_LETTER`] for
    /// cells that no path covers.
    pub fn letters_string(&self) -> String {
        self.letters
            .iter()
            .map(|letter| letter.unwrap_or(EMPTY_LETTER))
            .collect()
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 && i % self.geometry.cols == 0 {
                writeln!(f)?;
            }

            write!(f, "{}", letter.unwrap_or(EMPTY_LETTER))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn commit() {
        let mut state = GridState::new(Geometry::new(2, 3));

        assert_eq!(state.n_free(), 6);
        assert_eq!(&state.letters_string(), "......");

        let path = [Coord::new(0, 0), Coord::new(1, 1), Coord::new(0, 2)];
        state.commit(&chars("CAT"), &path);

        assert_eq!(state.n_used(), 3);
        assert_eq!(state.n_free(), 3);
        assert!(!state.is_free(Coord::new(1, 1)));
        assert!(state.is_free(Coord::new(1, 0)));
        assert!(!state.is_free(Coord::new(2, 0)));
        assert_eq!(state.letter(Coord::new(0, 2)), Some('T'));
        assert_eq!(state.letter(Coord::new(0, 1)), None);
        assert_eq!(&state.to_string(), "C.T\n.A.");
        assert_eq!(state.read_path(&path).as_deref(), Some("CAT"));
        assert_eq!(state.read_path(&[Coord::new(0, 1)]), None);
    }

    #[test]
    fn branch_leaves_parent_alone() {
        let parent = GridState::new(Geometry::new(2, 2));
        let child = parent.with_word(
            &chars("HI"),
            &[Coord::new(0, 0), Coord::new(0, 1)],
        );

        assert_eq!(parent.n_used(), 0);
        assert_eq!(&parent.letters_string(), "....");
        assert_eq!(child.n_used(), 2);
        assert_eq!(&child.letters_string(), "HI..");
    }

    #[test]
    fn regions() {
        let mut state = GridState::new(Geometry::new(3, 3));

        assert_eq!(state.free_region_size(Coord::new(1, 1)), 9);
        assert_eq!(state.smallest_free_region(), Some(9));

        // Wall off the left column
        state.commit(
            &chars("ABC"),
            &[Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
        );

        assert_eq!(state.free_region_size(Coord::new(0, 0)), 3);
        assert_eq!(state.free_region_size(Coord::new(2, 2)), 3);
        assert_eq!(state.free_region_size(Coord::new(1, 1)), 0);
        assert_eq!(state.smallest_free_region(), Some(3));

        state.commit(&chars("D"), &[Coord::new(1, 2)]);
        assert_eq!(state.smallest_free_region(), Some(1));

        let mut full = GridState::new(Geometry::new(1, 2));
        full.commit(&chars("OK"), &[Coord::new(0, 0), Coord::new(0, 1)]);
        assert_eq!(full.smallest_free_region(), None);
    }
}
