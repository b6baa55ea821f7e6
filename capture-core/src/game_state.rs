/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use serde::{Deserialize, Serialize};

use crate::{Action, AgentId, Cell, Position};

/// The half of the board a team calls home.
///
/// Red defends the west half, blue the east half.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub fn is_red(self) -> bool {
        self == Side::Red
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// Returns whether column `x` lies in this side's half of a board of the given width.
    pub fn is_home(self, width: i32, x: i32) -> bool {
        match self {
            Side::Red => x < width / 2,
            Side::Blue => x >= width / 2,
        }
    }

    /// The column one step inside this side's half, facing the opponent.
    pub fn home_boundary_column(self, width: i32) -> i32 {
        match self {
            Side::Red => width / 2 - 1,
            Side::Blue => width / 2,
        }
    }

    /// Converts a red-positive game score into this side's point of view.
    pub fn signed_score(self, score: i32) -> i32 {
        match self {
            Side::Red => score,
            Side::Blue => -score,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Blue => write!(f, "Blue"),
        }
    }
}

/// What the host tells about one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentState {
    /// position, None if the agent is not observable
    pub position: Option<Position>,
    /// whether the agent currently stands on the opponent's half
    pub is_pacman: bool,
    /// food carried and not yet deposited at home
    pub num_carrying: u32,
    /// direction of the last move
    pub direction: Action,
}

impl AgentState {
    /// The cell the agent stands on, if observable and grid-aligned.
    pub fn cell(&self) -> Option<Cell> {
        self.position.and_then(|position| position.to_cell())
    }

    /// The cell closest to the agent, if observable.
    pub fn nearest_cell(&self) -> Option<Cell> {
        self.position.map(|position| position.nearest_cell())
    }
}

/// True shortest-path distances through the maze.
///
/// Implementations must be symmetric and satisfy the triangle inequality,
/// the search engine uses them as an admissible heuristic.
pub trait MazeDistance {
    /// Returns the number of steps between `a` and `b`, `u32::MAX` if they are not connected.
    fn maze_distance(&self, a: Cell, b: Cell) -> u32;
}

/// A read-only snapshot of the game, supplied by the host every turn.
pub trait GameState: MazeDistance + Clone {
    /// Board width in cells.
    fn width(&self) -> i32;

    /// Board height in cells.
    fn height(&self) -> i32;

    /// Returns whether `cell` is a wall. Cells outside the board are walls.
    fn has_wall(&self, cell: Cell) -> bool;

    /// Returns the legal actions of `agent`, always containing at least [Action::Stop].
    fn legal_actions(&self, agent: AgentId) -> Vec<Action>;

    /// Returns the state after `agent` takes the legal `action`.
    fn generate_successor(&self, agent: AgentId, action: Action) -> Self;

    /// Returns the state of `agent`.
    fn agent_state(&self, agent: AgentId) -> AgentState;

    /// Returns the food cells `side` is trying to eat, those on the opponent's half.
    fn food(&self, side: Side) -> Vec<Cell>;

    /// Returns the agents playing against `side`.
    fn opponents(&self, side: Side) -> Vec<AgentId>;

    /// The current score, positive when red leads.
    fn score(&self) -> i32 {
        0
    }

    /// Non-wall cells of `side`'s home boundary column.
    fn home_boundary(&self, side: Side) -> Vec<Cell> {
        let x = side.home_boundary_column(self.width());
        (0..self.height())
            .map(|y| Cell::new(x, y))
            .filter(|&cell| !self.has_wall(cell))
            .collect()
    }
}

/// Applies `action` and, if the agent ends up between two cells, applies it once more,
/// so that the returned state has `agent` on a fully resolved cell.
pub fn resolved_successor<S: GameState>(state: &S, agent: AgentId, action: Action) -> S {
    let successor = state.generate_successor(agent, action);
    let aligned = successor
        .agent_state(agent)
        .position
        .map_or(true, |position| position.is_aligned());
    if aligned {
        successor
    } else {
        successor.generate_successor(agent, action)
    }
}

/// Returns the cell of `agent`, which must observe itself.
pub(crate) fn own_cell<S: GameState>(state: &S, agent: AgentId) -> Cell {
    state
        .agent_state(agent)
        .nearest_cell()
        .unwrap_or_else(|| panic!("{agent} has no position in its own observation"))
}
