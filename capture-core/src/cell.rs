/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A cell of the maze, identified by its integer coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}
impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
    /// Returns the absolute value of the difference to other, component by component.
    pub fn abs_diff(&self, other: &Cell) -> Self {
        Self::new((self.x - other.x).abs(), (self.y - other.y).abs())
    }
    /// Manhattan distance between self and other.
    pub fn manhattan_dist(&self, other: Cell) -> u32 {
        let diff = self.abs_diff(&other);
        (diff.x + diff.y) as u32
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}
impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Self) -> Self::Output {
        Cell::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// The continuous position of an agent.
///
/// Hosts may interpolate movement, in which case an agent can stand between two cells.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}
impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }
    /// Returns the cell this position lies exactly on, if it is grid-aligned.
    pub fn to_cell(&self) -> Option<Cell> {
        let cell = self.nearest_cell();
        if cell.x as f32 == self.x && cell.y as f32 == self.y {
            Some(cell)
        } else {
            None
        }
    }
    /// Returns whether this position lies exactly on a cell.
    pub fn is_aligned(&self) -> bool {
        self.to_cell().is_some()
    }
    /// Rounds to the closest cell.
    pub fn nearest_cell(&self) -> Cell {
        Cell::new(
            (self.x + 0.5).floor() as i32,
            (self.y + 0.5).floor() as i32,
        )
    }
}

impl From<Cell> for Position {
    fn from(cell: Cell) -> Self {
        Position::new(cell.x as f32, cell.y as f32)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
