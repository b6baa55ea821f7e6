/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Cell;

/// A move an agent can take in one turn.
///
/// Coordinates follow the maze convention where north is `y + 1`.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    North,
    South,
    East,
    West,
    Stop,
}

impl Action {
    /// The symbolic name, also used as the deterministic tie-break order.
    pub const fn name(self) -> &'static str {
        match self {
            Action::North => "North",
            Action::South => "South",
            Action::East => "East",
            Action::West => "West",
            Action::Stop => "Stop",
        }
    }

    /// North and South, East and West are each other's reverse; Stop reverses to itself.
    pub const fn reverse(self) -> Self {
        match self {
            Action::North => Action::South,
            Action::South => Action::North,
            Action::East => Action::West,
            Action::West => Action::East,
            Action::Stop => Action::Stop,
        }
    }

    /// The unit displacement of this action.
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Action::North => (0, 1),
            Action::South => (0, -1),
            Action::East => (1, 0),
            Action::West => (-1, 0),
            Action::Stop => (0, 0),
        }
    }

    /// Moves `cell` by one step in this direction.
    pub fn apply(self, cell: Cell) -> Cell {
        let (dx, dy) = self.vector();
        cell + Cell::new(dx, dy)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four moving actions.
pub const MOVES: [Action; 4] = [Action::North, Action::South, Action::East, Action::West];

/// All actions, including [Action::Stop].
pub const ACTIONS: [Action; 5] = [
    Action::North,
    Action::South,
    Action::East,
    Action::West,
    Action::Stop,
];

/// Sorts actions by their symbolic name.
pub fn sort_by_name(actions: &mut [Action]) {
    actions.sort_by_key(|action| action.name());
}
