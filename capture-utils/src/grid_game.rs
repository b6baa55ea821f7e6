/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::{fmt, sync::Arc};

use capture_core::{
    Action, AgentId, AgentState, Cell, GameState, MazeDistance, Position, Side, MOVES,
};

use crate::{Distancer, Grid, Layout};

/// How far an agent sees its opponents, in Manhattan distance.
pub const SIGHT_RANGE: u32 = 5;

/// The parts of a game that do not change during an episode.
#[derive(Debug)]
pub struct GridGame {
    walls: Grid<bool>,
    distancer: Distancer,
    starts: Vec<Cell>,
}

/// The state of one agent in a [GridGameState].
#[derive(Clone, Debug, PartialEq)]
pub struct GridAgent {
    /// position, None if hidden from the observer
    pub position: Option<Position>,
    /// whether the agent stands on the opponent's half
    pub is_pacman: bool,
    /// direction of the last move
    pub direction: Action,
    /// food carried
    pub num_carrying: u32,
    /// fraction of a cell travelled per move, 1 or 0.5
    pub speed: f32,
}

/// A minimal host: agents move on a wall grid, eat food on the opponent's half and score
/// it when they come back home. Agents with an even index play red, odd ones blue.
#[derive(Clone, Debug)]
pub struct GridGameState {
    game: Arc<GridGame>,
    food: Grid<bool>,
    agents: Vec<GridAgent>,
    score: i32,
}

impl GridGameState {
    /// Creates the initial state of a game on `layout`.
    pub fn new(layout: Layout) -> Self {
        let distancer = Distancer::new(&layout.walls);
        let width = layout.width();
        let agents = layout
            .agent_starts
            .iter()
            .enumerate()
            .map(|(index, &start)| GridAgent {
                position: Some(start.into()),
                is_pacman: !side_of(AgentId(index as u32)).is_home(width, start.x),
                direction: Action::Stop,
                num_carrying: 0,
                speed: 1.,
            })
            .collect();
        let game = GridGame {
            walls: layout.walls,
            distancer,
            starts: layout.agent_starts,
        };
        Self {
            game: Arc::new(game),
            food: layout.food,
            agents,
            score: 0,
        }
    }

    /// Number of agents in the game.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// The start cell of `agent` in the layout.
    pub fn start_of(&self, agent: AgentId) -> Cell {
        self.game.starts[agent.0 as usize]
    }

    /// The agents playing for `side`.
    pub fn agents_of(&self, side: Side) -> Vec<AgentId> {
        (0..self.agents.len() as u32)
            .map(AgentId)
            .filter(|&agent| side_of(agent) == side)
            .collect()
    }

    pub fn agent(&self, agent: AgentId) -> &GridAgent {
        &self.agents[agent.0 as usize]
    }

    fn agent_mut(&mut self, agent: AgentId) -> &mut GridAgent {
        &mut self.agents[agent.0 as usize]
    }

    /// Places `agent` on `cell`, updating which half it is on.
    pub fn with_agent_at(mut self, agent: AgentId, cell: Cell) -> Self {
        let width = self.width();
        let state = self.agent_mut(agent);
        state.position = Some(cell.into());
        state.is_pacman = !side_of(agent).is_home(width, cell.x);
        self
    }

    pub fn with_carrying(mut self, agent: AgentId, num_carrying: u32) -> Self {
        self.agent_mut(agent).num_carrying = num_carrying;
        self
    }

    pub fn with_direction(mut self, agent: AgentId, direction: Action) -> Self {
        self.agent_mut(agent).direction = direction;
        self
    }

    pub fn with_speed(mut self, agent: AgentId, speed: f32) -> Self {
        self.agent_mut(agent).speed = speed;
        self
    }

    pub fn with_food(mut self, cell: Cell, present: bool) -> Self {
        self.food.set(cell, present);
        self
    }

    /// Hides `agent`, as if it were out of sight.
    pub fn with_hidden(mut self, agent: AgentId) -> Self {
        self.agent_mut(agent).position = None;
        self
    }

    /// Returns what `side` observes: opponents farther than `sight_range` from every
    /// teammate are hidden. With no range, everything is visible.
    pub fn observed_by(&self, side: Side, sight_range: Option<u32>) -> Self {
        let mut observation = self.clone();
        let sight_range = match sight_range {
            Some(range) => range,
            None => return observation,
        };
        let teammates = self
            .agents_of(side)
            .into_iter()
            .filter_map(|agent| self.agent(agent).position)
            .map(|position| position.nearest_cell())
            .collect::<Vec<_>>();
        for opponent in self.agents_of(side.opponent()) {
            let state = observation.agent_mut(opponent);
            let visible = state.position.map_or(false, |position| {
                let cell = position.nearest_cell();
                teammates
                    .iter()
                    .any(|teammate| teammate.manhattan_dist(cell) <= sight_range)
            });
            if !visible {
                state.position = None;
            }
        }
        observation
    }

    /// Food left on `side`'s half, which its opponents try to eat.
    pub fn food_left_on(&self, side: Side) -> usize {
        self.food(side.opponent()).len()
    }

    /// The game is over once either half has no food left.
    pub fn is_over(&self) -> bool {
        self.food_left_on(Side::Red) == 0 || self.food_left_on(Side::Blue) == 0
    }
}

/// Even agents play red, odd ones blue.
pub fn side_of(agent: AgentId) -> Side {
    if agent.0 % 2 == 0 {
        Side::Red
    } else {
        Side::Blue
    }
}

impl MazeDistance for GridGameState {
    fn maze_distance(&self, a: Cell, b: Cell) -> u32 {
        self.game.distancer.maze_distance(a, b)
    }
}

impl GameState for GridGameState {
    fn width(&self) -> i32 {
        self.game.walls.width()
    }

    fn height(&self) -> i32 {
        self.game.walls.height()
    }

    fn has_wall(&self, cell: Cell) -> bool {
        self.game.walls.get(cell).copied().unwrap_or(true)
    }

    fn legal_actions(&self, agent: AgentId) -> Vec<Action> {
        let state = self.agent(agent);
        let position = match state.position {
            Some(position) => position,
            None => return vec![Action::Stop],
        };
        match position.to_cell() {
            Some(cell) => MOVES
                .into_iter()
                .filter(|action| !self.has_wall(action.apply(cell)))
                .chain(std::iter::once(Action::Stop))
                .collect(),
            // Between two cells, an agent can only go on
            None => vec![state.direction, Action::Stop],
        }
    }

    fn generate_successor(&self, agent: AgentId, action: Action) -> Self {
        debug_assert!(
            self.legal_actions(agent).contains(&action),
            "{agent} cannot take {action}"
        );
        let mut successor = self.clone();
        let width = self.width();
        let side = side_of(agent);
        let state = successor.agent_mut(agent);
        let position = match state.position {
            Some(position) => position,
            None => return successor,
        };
        let (dx, dy) = action.vector();
        let position = Position::new(
            position.x + dx as f32 * state.speed,
            position.y + dy as f32 * state.speed,
        );
        state.position = Some(position);
        if action != Action::Stop {
            state.direction = action;
        }

        let cell = match position.to_cell() {
            Some(cell) => cell,
            None => return successor,
        };
        state.is_pacman = !side.is_home(width, cell.x);
        if state.is_pacman {
            if successor.food.get(cell) == Some(&true) {
                successor.food.set(cell, false);
                successor.agent_mut(agent).num_carrying += 1;
            }
        } else if state.num_carrying > 0 {
            let deposited = state.num_carrying as i32;
            state.num_carrying = 0;
            successor.score += side.signed_score(deposited);
        }
        successor
    }

    fn agent_state(&self, agent: AgentId) -> AgentState {
        let state = self.agent(agent);
        AgentState {
            position: state.position,
            is_pacman: state.is_pacman,
            num_carrying: state.num_carrying,
            direction: state.direction,
        }
    }

    fn food(&self, side: Side) -> Vec<Cell> {
        let width = self.width();
        self.food
            .as_list()
            .into_iter()
            .filter(|cell| side.opponent().is_home(width, cell.x))
            .collect()
    }

    fn opponents(&self, side: Side) -> Vec<AgentId> {
        self.agents_of(side.opponent())
    }

    fn score(&self) -> i32 {
        self.score
    }
}

impl fmt::Display for GridGameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                let cell = Cell::new(x, y);
                let agent = self.agents.iter().position(|agent| {
                    agent
                        .position
                        .map_or(false, |position| position.nearest_cell() == cell)
                });
                let c = match agent {
                    Some(index) => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
                    None if self.has_wall(cell) => '%',
                    None if self.food.get(cell) == Some(&true) => '.',
                    None => ' ',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "score: {}", self.score)
    }
}
