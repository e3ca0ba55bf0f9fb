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

//! Pure functions over a rectangular grid of letters. The same rules
//! are used when generating a layout and when judging a path that a
//! player draws.

use std::fmt;
use serde::{Serialize, Deserialize};

pub const DEFAULT_ROWS: usize = 8;
pub const DEFAULT_COLS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// An ordered list of cells. The nth cell holds the nth letter of the
/// word that the path spells.
pub type Path = Vec<Coord>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub struct Geometry {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryError {
    CoordOutOfBounds(Coord),
    IndexOutOfBounds(usize),
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl Default for Geometry {
    fn default() -> Geometry {
        Geometry { rows: DEFAULT_ROWS, cols: DEFAULT_COLS }
    }
}

impl Geometry {
    pub fn new(rows: usize, cols: usize) -> Geometry {
        Geometry { rows, cols }
    }

    pub fn n_cells(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn coord_to_index(&self, coord: Coord) -> Result<usize, GeometryError> {
        if self.contains(coord) {
            Ok(coord.row * self.cols + coord.col)
        } else {
            Err(GeometryError::CoordOutOfBounds(coord))
        }
    }

    pub fn index_to_coord(&self, index: usize) -> Result<Coord, GeometryError> {
        if index < self.n_cells() {
            Ok(Coord::new(index / self.cols, index % self.cols))
        } else {
            Err(GeometryError::IndexOutOfBounds(index))
        }
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.n_cells()).map(move |i| Coord::new(i / cols, i % cols))
    }

    /// Iterates the in-bounds cells that are a king’s move away from
    /// `coord`.
    pub fn neighbours(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        let geometry = *self;

        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| {
                let row = coord.row.checked_add_signed(dr)?;
                let col = coord.col.checked_add_signed(dc)?;
                let neighbour = Coord::new(row, col);
                geometry.contains(neighbour).then_some(neighbour)
            })
    }

    /// The cells along one edge of the grid, top, left, bottom then
    /// right.
    pub fn edge(&self, edge: Edge) -> Vec<Coord> {
        match edge {
            Edge::Top => (0..self.cols).map(|col| Coord::new(0, col)).collect(),
            Edge::Left => (0..self.rows).map(|row| Coord::new(row, 0)).collect(),
            Edge::Bottom => {
                (0..self.cols)
                    .map(|col| Coord::new(self.rows - 1, col))
                    .collect()
            },
            Edge::Right => {
                (0..self.rows)
                    .map(|row| Coord::new(row, self.cols - 1))
                    .collect()
            },
        }
    }

    /// Checks bounds and king-move adjacency of consecutive cells. A
    /// path shorter than two cells is never valid. Repeated cells are
    /// not checked here, see [`Geometry::is_valid_selection`].
    pub fn is_valid_path(&self, path: &[Coord]) -> bool {
        path.len() >= 2
            && path.iter().all(|&coord| self.contains(coord))
            && path.windows(2).all(|pair| are_adjacent(pair[0], pair[1]))
    }

    /// [`Geometry::is_valid_path`] with the extra requirement that no
    /// cell is visited twice. This is the gate for paths that come
    /// from a player rather than from the layout engine.
    pub fn is_valid_selection(&self, path: &[Coord]) -> bool {
        self.is_valid_path(path) && !has_repeated_cells(path)
    }

    pub fn spans_opposite_edges(&self, path: &[Coord]) -> bool {
        if self.rows == 0 || self.cols == 0 {
            return false;
        }

        let touches_row = |row| path.iter().any(|c| c.row == row);
        let touches_col = |col| path.iter().any(|c| c.col == col);

        (touches_row(0) && touches_row(self.rows - 1))
            || (touches_col(0) && touches_col(self.cols - 1))
    }

    /// True if the paths between them cover every cell of the grid
    /// exactly once.
    pub fn all_cells_used_once<P: AsRef<[Coord]>>(&self, paths: &[P]) -> bool {
        let mut seen = vec![false; self.n_cells()];
        let mut count = 0;

        for coord in paths.iter().flat_map(|p| p.as_ref().iter()) {
            let Ok(index) = self.coord_to_index(*coord)
            else {
                return false;
            };

            if seen[index] {
                return false;
            }

            seen[index] = true;
            count += 1;
        }

        count == self.n_cells()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];
}

pub fn are_adjacent(a: Coord, b: Coord) -> bool {
    a != b && a.row.abs_diff(b.row) <= 1 && a.col.abs_diff(b.col) <= 1
}

pub fn has_repeated_cells(path: &[Coord]) -> bool {
    path.iter()
        .enumerate()
        .any(|(i, coord)| path[i + 1..].contains(coord))
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeometryError::CoordOutOfBounds(coord) => {
                write!(f, "coordinate {} is outside the grid", coord)
            },
            GeometryError::IndexOutOfBounds(index) => {
                write!(f, "cell index {} is outside the grid", index)
            },
        }
    }
}

impl std::error::Error for GeometryError {}
