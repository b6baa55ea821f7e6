/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use capture_core::*;
use capture_utils::{run_match, GridGameState, Layout, SIGHT_RANGE};

#[macro_use]
extern crate lazy_static;

const ARENA: &str = "\
%%%%%%%%%%%%
%1  .  %  2%
%3 %% .  %4%
%  .   %%  %
%% .   .  .%
%%%%%%%%%%%%";

lazy_static! {
    static ref ARENA_LAYOUT: Layout = ARENA.parse().unwrap();
}

const DEFENDER: AgentId = AgentId(2);

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn patrol(seed: Option<u64>, turns: usize) -> Vec<Action> {
    let config = AgentConfiguration {
        seed,
        ..Default::default()
    };
    let mut agent = DefensiveSearchAgent::new(DEFENDER, Side::Red, &config);
    let mut state = GridGameState::new(ARENA_LAYOUT.clone());
    agent.register_initial_state(&state);
    (0..turns)
        .map(|_| {
            let action = agent.choose_action(&state);
            state = state.generate_successor(DEFENDER, action);
            action
        })
        .collect()
}

#[test]
fn same_seed_same_patrol() {
    init_logger();
    for seed in [0, 7, 1234] {
        assert_eq!(patrol(Some(seed), 30), patrol(Some(seed), 30));
    }
}

#[test]
fn unseeded_patrol_stays_legal() {
    // Every action is checked against the host in generate_successor
    assert_eq!(patrol(None, 30).len(), 30);
}

#[test]
fn reflex_choices_do_not_depend_on_history() {
    let state = GridGameState::new(ARENA_LAYOUT.clone());
    for index in [AgentId(0), AgentId(2)] {
        let mut first = OffensiveReflexAgent::new(index, Side::Red, OffensiveRole::default());
        let mut second = OffensiveReflexAgent::new(index, Side::Red, OffensiveRole::default());
        first.register_initial_state(&state);
        second.register_initial_state(&state);
        let action = first.choose_action(&state);
        for _ in 0..5 {
            assert_eq!(first.choose_action(&state), action);
        }
        assert_eq!(second.choose_action(&state), action);
    }
}

#[test]
fn seeded_matches_replay() {
    init_logger();
    let config = TeamConfiguration {
        first: "offensive-search".into(),
        second: "defensive-search".into(),
        agents: AgentConfiguration {
            seed: Some(11),
            ..Default::default()
        },
    };
    let outcome = run_match(
        GridGameState::new(ARENA_LAYOUT.clone()),
        &config,
        &TeamConfiguration::default(),
        100,
        Some(SIGHT_RANGE),
    )
    .unwrap();
    let replay = run_match(
        GridGameState::new(ARENA_LAYOUT.clone()),
        &config,
        &TeamConfiguration::default(),
        100,
        Some(SIGHT_RANGE),
    )
    .unwrap();
    assert_eq!(outcome, replay);
}
