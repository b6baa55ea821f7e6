/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use rand::prelude::{thread_rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    choose_goal_directed_action, choose_reflex_action, defensive_goal, game_state::own_cell,
    offensive_goal, Action, AgentConfiguration, AgentId, BaselineRole, Cell, Context,
    DefensiveRole, GameState, OffensiveRole, ReflexRole, Side,
};

/// The hooks the host calls on each agent of a team.
pub trait CaptureAgent<S: GameState> {
    /// The index of this agent in the game.
    fn index(&self) -> AgentId;

    /// The side of this agent's team.
    fn side(&self) -> Side;

    /// Called once at the start of an episode, before any [choose_action](Self::choose_action).
    fn register_initial_state(&mut self, state: &S);

    /// Returns one of the legal actions of this agent in `state`.
    fn choose_action(&mut self, state: &S) -> Action;
}

/// What every agent remembers across turns: who it is and where it started.
#[derive(Clone, Debug)]
pub struct AgentBase {
    index: AgentId,
    side: Side,
    start: Option<Cell>,
}

impl AgentBase {
    pub fn new(index: AgentId, side: Side) -> Self {
        Self {
            index,
            side,
            start: None,
        }
    }

    /// The cell captured at registration, None before.
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    fn register<S: GameState>(&mut self, state: &S) {
        let start = own_cell(state, self.index);
        log::debug!("{} ({}) starts at {start}", self.index, self.side);
        self.start = Some(start);
    }

    fn context<'a, S: GameState>(&mut self, state: &'a S) -> Context<'a, S> {
        let start = match self.start {
            Some(start) => start,
            None => {
                let start = own_cell(state, self.index);
                log::warn!(
                    "{} chooses an action before registration, taking {start} as start",
                    self.index
                );
                self.start = Some(start);
                start
            }
        };
        Context::new(state, self.index, self.side, start)
    }
}

/// Teammates sharing a configured seed get distinct streams through their index.
fn new_rng(seed: Option<u64>, index: AgentId) -> ChaCha8Rng {
    let seed = match seed {
        Some(seed) => seed ^ u64::from(index.0),
        None => thread_rng().next_u64(),
    };
    ChaCha8Rng::seed_from_u64(seed)
}

/// An agent that scores every legal action with its role and takes the best one.
#[derive(Clone, Debug)]
pub struct ReflexAgent<R: ReflexRole> {
    base: AgentBase,
    role: R,
}

/// Reflex agent eating food on the opponent's half.
pub type OffensiveReflexAgent = ReflexAgent<OffensiveRole>;
/// Reflex agent guarding its home half.
pub type DefensiveReflexAgent = ReflexAgent<DefensiveRole>;
/// Reflex agent maximizing the game score.
pub type BaselineReflexAgent = ReflexAgent<BaselineRole>;

impl<R: ReflexRole> ReflexAgent<R> {
    pub fn new(index: AgentId, side: Side, role: R) -> Self {
        Self {
            base: AgentBase::new(index, side),
            role,
        }
    }

    pub fn base(&self) -> &AgentBase {
        &self.base
    }

    pub fn role(&self) -> &R {
        &self.role
    }
}

impl<S: GameState, R: ReflexRole> CaptureAgent<S> for ReflexAgent<R> {
    fn index(&self) -> AgentId {
        self.base.index
    }

    fn side(&self) -> Side {
        self.base.side
    }

    fn register_initial_state(&mut self, state: &S) {
        self.base.register(state);
    }

    fn choose_action(&mut self, state: &S) -> Action {
        let ctx = self.base.context(state);
        choose_reflex_action(ctx, &self.role)
    }
}

/// An agent planning with A* towards the closest food.
#[derive(Clone, Debug)]
pub struct OffensiveSearchAgent {
    base: AgentBase,
    max_expansions: Option<u32>,
    rng: ChaCha8Rng,
}

impl OffensiveSearchAgent {
    pub fn new(index: AgentId, side: Side, config: &AgentConfiguration) -> Self {
        Self {
            base: AgentBase::new(index, side),
            max_expansions: config.max_expansions,
            rng: new_rng(config.seed, index),
        }
    }

    pub fn base(&self) -> &AgentBase {
        &self.base
    }
}

impl<S: GameState> CaptureAgent<S> for OffensiveSearchAgent {
    fn index(&self) -> AgentId {
        self.base.index
    }

    fn side(&self) -> Side {
        self.base.side
    }

    fn register_initial_state(&mut self, state: &S) {
        self.base.register(state);
    }

    fn choose_action(&mut self, state: &S) -> Action {
        let ctx = self.base.context(state);
        let goal = offensive_goal(ctx);
        choose_goal_directed_action(ctx, goal, self.max_expansions, &mut self.rng)
    }
}

/// An agent planning with A* towards visible invaders, patrolling the boundary otherwise.
#[derive(Clone, Debug)]
pub struct DefensiveSearchAgent {
    base: AgentBase,
    max_expansions: Option<u32>,
    rng: ChaCha8Rng,
}

impl DefensiveSearchAgent {
    pub fn new(index: AgentId, side: Side, config: &AgentConfiguration) -> Self {
        Self {
            base: AgentBase::new(index, side),
            max_expansions: config.max_expansions,
            rng: new_rng(config.seed, index),
        }
    }

    pub fn base(&self) -> &AgentBase {
        &self.base
    }
}

impl<S: GameState> CaptureAgent<S> for DefensiveSearchAgent {
    fn index(&self) -> AgentId {
        self.base.index
    }

    fn side(&self) -> Side {
        self.base.side
    }

    fn register_initial_state(&mut self, state: &S) {
        self.base.register(state);
    }

    fn choose_action(&mut self, state: &S) -> Action {
        let ctx = self.base.context(state);
        let goal = defensive_goal(ctx, &mut self.rng);
        choose_goal_directed_action(ctx, goal, self.max_expansions, &mut self.rng)
    }
}
