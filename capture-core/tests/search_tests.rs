/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use capture_core::{
    resolved_successor, search, AStar, Action, AgentId, Cell, GameState, MazeDistance,
};
use capture_utils::{GridGameState, Layout};

#[macro_use]
extern crate lazy_static;

const MAZE: &str = "\
%%%%%%%%%%
%1   %   %
% %% % % %
%    %   %
%%%% % %%%
%        %
%%%%%%%%%%";

const POCKET: &str = "\
%%%%%%%
%1  % %
%   % %
%   % %
%%%%%%%";

lazy_static! {
    static ref MAZE_LAYOUT: Layout = MAZE.parse().unwrap();
    static ref POCKET_LAYOUT: Layout = POCKET.parse().unwrap();
}

const AGENT: AgentId = AgentId(0);

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn open_cells(layout: &Layout) -> Vec<Cell> {
    layout.walls.cells().filter(|&cell| layout.walls.get(cell) == Some(&false)).collect()
}

fn follow(state: &GridGameState, path: &[Action]) -> Cell {
    let end = path
        .iter()
        .fold(state.clone(), |state, &action| state.generate_successor(AGENT, action));
    end.agent_state(AGENT).cell().unwrap()
}

#[test]
fn start_is_goal() {
    let state = GridGameState::new(MAZE_LAYOUT.clone());
    let start = state.agent_state(AGENT).cell().unwrap();
    let mut astar = AStar::new(&state, AGENT);
    assert_eq!(astar.plan(start, start), Some(Vec::new()));
    assert_eq!(astar.first_action(start, start), Some(Action::Stop));
    assert_eq!(search(&state, AGENT, start, start), Some(Action::Stop));
}

#[test]
fn unreachable_goal_has_no_path() {
    init_logger();
    let state = GridGameState::new(POCKET_LAYOUT.clone());
    let start = Cell::new(1, 3);
    let goal = Cell::new(5, 2);
    assert_eq!(state.maze_distance(start, goal), u32::MAX);
    let mut astar = AStar::new(&state, AGENT);
    assert_eq!(astar.plan(start, goal), None);
    // The whole reachable area is expanded before giving up
    assert_eq!(astar.expansions(), 9);
    assert_eq!(search(&state, AGENT, start, goal), None);
}

#[test]
fn paths_are_shortest_and_lead_to_goal() {
    let cells = open_cells(&MAZE_LAYOUT);
    let initial = GridGameState::new(MAZE_LAYOUT.clone());
    for &start in &cells {
        let state = initial.clone().with_agent_at(AGENT, start);
        for &goal in &cells {
            let mut astar = AStar::new(&state, AGENT);
            let path = astar.plan(start, goal).unwrap();
            assert_eq!(
                path.len() as u32,
                state.maze_distance(start, goal),
                "{start} -> {goal}"
            );
            assert!(!path.contains(&Action::Stop));
            assert_eq!(follow(&state, &path), goal);
            assert!(astar.expansions() as usize <= cells.len());
        }
    }
}

#[test]
fn first_action_starts_a_shortest_path() {
    let state = GridGameState::new(MAZE_LAYOUT.clone());
    let start = Cell::new(1, 5);
    let goal = Cell::new(8, 5);
    let action = search(&state, AGENT, start, goal).unwrap();
    assert!([Action::South, Action::East].contains(&action));
    let next = action.apply(start);
    assert_eq!(
        state.maze_distance(next, goal) + 1,
        state.maze_distance(start, goal)
    );
}

#[test]
fn expansion_cap_reports_no_path() {
    init_logger();
    let state = GridGameState::new(MAZE_LAYOUT.clone());
    let start = Cell::new(1, 5);
    let goal = Cell::new(8, 5);
    let mut astar = AStar::new(&state, AGENT).with_max_expansions(Some(1));
    assert_eq!(astar.plan(start, goal), None);
    assert_eq!(astar.expansions(), 1);

    let mut astar = AStar::new(&state, AGENT).with_max_expansions(Some(1));
    assert_eq!(astar.first_action(start, Cell::new(2, 5)), Some(Action::East));

    let mut astar = AStar::new(&state, AGENT).with_max_expansions(Some(1000));
    assert_eq!(astar.plan(start, goal).map(|path| path.len()), Some(15));
}

#[test]
fn half_speed_agents_plan_in_cells() {
    let state = GridGameState::new(MAZE_LAYOUT.clone()).with_speed(AGENT, 0.5);
    let start = Cell::new(1, 5);
    let goal = Cell::new(8, 5);
    let path = AStar::new(&state, AGENT).plan(start, goal).unwrap();
    assert_eq!(path.len(), 15);

    // Each planned action takes two half steps on the live state
    let end = path.iter().fold(state, |state, &action| {
        state
            .generate_successor(AGENT, action)
            .generate_successor(AGENT, action)
    });
    assert_eq!(end.agent_state(AGENT).cell(), Some(goal));
}

#[test]
fn start_between_cells_goes_on_first() {
    let state = GridGameState::new(MAZE_LAYOUT.clone())
        .with_speed(AGENT, 0.5)
        .generate_successor(AGENT, Action::East);
    assert_eq!(state.agent_state(AGENT).cell(), None);
    let start = state.agent_state(AGENT).nearest_cell().unwrap();
    assert_eq!(start, Cell::new(2, 5));

    // The rounded cell is not reached until the move is finished
    assert_eq!(search(&state, AGENT, start, start), Some(Action::East));

    let goal = Cell::new(8, 5);
    let path = AStar::new(&state, AGENT).plan(start, goal).unwrap();
    assert_eq!(path.len(), 15);
    assert_eq!(path[0], Action::East);
    let end = path.iter().fold(state, |state, &action| {
        resolved_successor(&state, AGENT, action)
    });
    assert_eq!(end.agent_state(AGENT).cell(), Some(goal));
}
