/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

//! This is the decision core of the capture agents, containing the [A*](AStar) search engine,
//! the linear [feature](Features) evaluation and the policies built on top of them.
//!
//! The core never owns a game: it plans on whatever the host exposes through the [GameState]
//! and [MazeDistance] traits. Each agent is a [CaptureAgent] that captures its start cell in
//! [register_initial_state](CaptureAgent::register_initial_state) and picks one legal [Action]
//! per turn in [choose_action](CaptureAgent::choose_action).
//!
//! Two families of agents are provided:
//! - reflex agents ([ReflexAgent]) score every legal action with a role-specific [ReflexRole]
//!   and break ties deterministically,
//! - goal-directed agents ([OffensiveSearchAgent], [DefensiveSearchAgent]) pick a goal cell and
//!   return the first step of an A* plan towards it.
//!
//! Teams are built by role name through the static registry in [create_team].
//!
//! A minimal grid host, a maze-distance oracle and a match loop are available in the
//! `capture-utils` crate.

mod action;
mod agent;
mod cell;
mod config;
mod context;
mod evaluation;
mod features;
mod game_state;
mod goal;
mod reflex;
mod search;
mod team;

pub use action::*;
pub use agent::*;
pub use cell::*;
pub use config::*;
pub use context::*;
pub use evaluation::*;
pub use features::*;
pub use game_state::*;
pub use goal::*;
pub use reflex::*;
pub use search::*;
pub use team::*;

/// The index of an agent in the game, essentially a u32.
#[derive(
    Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub struct AgentId(pub u32);
impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A{}", self.0)
    }
}
