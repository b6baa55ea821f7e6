/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use crate::{resolved_successor, Action, AgentId, Cell, GameState};

/// A cell reached by the search, with the actions that lead there from the start.
struct SearchNode {
    cell: Cell,
    path: Vec<Action>,
}

/// A frontier entry, ordered by ascending `g + h` then by insertion order.
struct FrontierEntry {
    priority: u32,
    order: u64,
    node: SearchNode,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &FrontierEntry) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.order == other.order
    }
}

impl Eq for FrontierEntry {}

/// A* search over the maze for one agent.
///
/// The cost so far is the number of steps and the heuristic is the host's maze distance,
/// which is consistent, so the first time the goal is popped its path is optimal.
///
/// Successors are not taken from an abstract graph: every expansion replays the node's
/// action list through [GameState::generate_successor] from the root state and asks that
/// state for the legal actions. Each expansion therefore costs O(depth) transitions and
/// a search O(depth²) overall, which stays small at maze-diameter depths.
pub struct AStar<'a, S: GameState> {
    state: &'a S,
    agent: AgentId,
    max_expansions: Option<u32>,
    expansions: u32,
}

impl<'a, S: GameState> AStar<'a, S> {
    /// Creates a search for `agent` rooted at `state`.
    pub fn new(state: &'a S, agent: AgentId) -> Self {
        Self {
            state,
            agent,
            max_expansions: None,
            expansions: 0,
        }
    }

    /// Bounds the number of expansions, exceeding the bound reports no path.
    pub fn with_max_expansions(mut self, max_expansions: Option<u32>) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Number of cells expanded by the last search.
    pub fn expansions(&self) -> u32 {
        self.expansions
    }

    /// Returns the actions of an optimal path from `start` to `goal`, or None if the goal
    /// cannot be reached.
    ///
    /// `start` is expected to be the agent's cell in the root state. If the agent is
    /// between two cells there, `start` is its rounded cell and is not considered reached:
    /// the root is expanded through the host's legal actions first.
    pub fn plan(&mut self, start: Cell, goal: Cell) -> Option<Vec<Action>> {
        debug_assert!(!self.state.has_wall(start), "search starts in wall {start}");
        debug_assert!(!self.state.has_wall(goal), "search goal is wall {goal}");
        self.expansions = 0;
        let root_between_cells = self
            .state
            .agent_state(self.agent)
            .position
            .map_or(false, |position| !position.is_aligned());

        let mut frontier = BinaryHeap::new();
        let mut explored = FxHashSet::default();
        let mut order = 0;
        frontier.push(FrontierEntry {
            priority: self.state.maze_distance(start, goal),
            order,
            node: SearchNode {
                cell: start,
                path: Vec::new(),
            },
        });

        while let Some(FrontierEntry { node, .. }) = frontier.pop() {
            let reached = !(root_between_cells && node.path.is_empty());
            // Lazy deletion: stale duplicates are skipped here rather than updated in the heap
            if reached && !explored.insert(node.cell) {
                continue;
            }

            if reached && node.cell == goal {
                log::trace!(
                    "{} reached {goal} from {start} in {} steps after {} expansions",
                    self.agent,
                    node.path.len(),
                    self.expansions
                );
                return Some(node.path);
            }

            if let Some(max_expansions) = self.max_expansions {
                if self.expansions >= max_expansions {
                    log::debug!(
                        "{} gives up searching {start} -> {goal} after {max_expansions} expansions",
                        self.agent
                    );
                    return None;
                }
            }
            self.expansions += 1;

            let current = self.replay(&node.path);
            for action in current.legal_actions(self.agent) {
                if action == Action::Stop {
                    continue;
                }
                let successor = resolved_successor(&current, self.agent, action);
                let cell = match successor.agent_state(self.agent).nearest_cell() {
                    Some(cell) => cell,
                    None => continue,
                };
                if explored.contains(&cell) {
                    continue;
                }
                let mut path = Vec::with_capacity(node.path.len() + 1);
                path.extend_from_slice(&node.path);
                path.push(action);
                let priority = (path.len() as u32)
                    .saturating_add(self.state.maze_distance(cell, goal));
                order += 1;
                frontier.push(FrontierEntry {
                    priority,
                    order,
                    node: SearchNode { cell, path },
                });
            }
        }

        log::debug!(
            "{} found no path {start} -> {goal} after {} expansions",
            self.agent,
            self.expansions
        );
        None
    }

    /// Returns the first action of an optimal path from `start` to `goal`,
    /// [Action::Stop] if already there, or None if the goal cannot be reached.
    pub fn first_action(&mut self, start: Cell, goal: Cell) -> Option<Action> {
        self.plan(start, goal)
            .map(|path| path.first().copied().unwrap_or(Action::Stop))
    }

    fn replay(&self, path: &[Action]) -> S {
        path.iter().fold(self.state.clone(), |state, &action| {
            resolved_successor(&state, self.agent, action)
        })
    }
}

/// Runs an unbounded [AStar] search and returns the first action towards `goal`.
pub fn search<S: GameState>(state: &S, agent: AgentId, start: Cell, goal: Cell) -> Option<Action> {
    AStar::new(state, agent).first_action(start, goal)
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::{FrontierEntry, SearchNode};
    use crate::Cell;

    fn entry(priority: u32, order: u64) -> FrontierEntry {
        FrontierEntry {
            priority,
            order,
            node: SearchNode {
                cell: Cell::new(0, 0),
                path: Vec::new(),
            },
        }
    }

    #[test]
    fn frontier_pops_lowest_priority_first_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(4, 0));
        heap.push(entry(2, 1));
        heap.push(entry(3, 2));
        heap.push(entry(2, 3));
        let popped = std::iter::from_fn(|| heap.pop())
            .map(|entry| (entry.priority, entry.order))
            .collect::<Vec<_>>();
        assert_eq!(popped, vec![(2, 1), (2, 3), (3, 2), (4, 0)]);
    }
}
