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

//! Lays out the words of a spangram puzzle on a grid of letters.
//!
//! Every word becomes a chain of cells where each cell is a king’s
//! move from the previous one. Between them the chains cover every
//! cell of the grid exactly once. One word, the spangram, must also
//! touch two opposite edges of the grid.

pub mod geometry;
pub mod grid_state;
pub mod path_search;
pub mod spangram;
pub mod layout;
pub mod verify;
pub mod observer;
pub mod clock;
pub mod selection;
pub mod hints;
pub mod puzzle;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use geometry::{Coord, Geometry, Path};
pub use layout::{Layout, LayoutConfig, LayoutError, generate_with};
#[cfg(not(target_arch = "wasm32"))]
pub use layout::generate;
pub use puzzle::Puzzle;
