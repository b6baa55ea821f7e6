/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use crate::{
    baseline_features, defensive_features, evaluate, offensive_features, resolved_successor,
    sort_by_name, Action, AgentConfiguration, Context, Features, GameState, Weights,
    BASELINE_WEIGHTS, DEFENSIVE_WEIGHTS, OFFENSIVE_WEIGHTS,
};

/// How a reflex agent scores its moves.
///
/// You need to implement at least [features](Self::features) and [weights](Self::weights).
pub trait ReflexRole {
    /// Returns the features of the state reached by `action`.
    fn features<S: GameState>(&self, ctx: Context<S>, action: Action) -> Features;

    /// Returns the fixed weights of this role.
    fn weights(&self) -> &Weights;

    /// Returns an action that takes precedence over the evaluation, if any.
    fn preferred_action<S: GameState>(&self, _ctx: Context<S>, _actions: &[Action]) -> Option<Action> {
        None
    }
}

/// Scores the game score only.
#[derive(Copy, Clone, Debug, Default)]
pub struct BaselineRole;

impl ReflexRole for BaselineRole {
    fn features<S: GameState>(&self, ctx: Context<S>, action: Action) -> Features {
        baseline_features(ctx, action)
    }

    fn weights(&self) -> &Weights {
        &BASELINE_WEIGHTS
    }
}

/// Eats food on the opponent's half, avoids defenders and brings its load home.
#[derive(Copy, Clone, Debug)]
pub struct OffensiveRole {
    pub carry_threshold: u32,
    pub danger_distance: u32,
}

impl OffensiveRole {
    pub fn new(config: &AgentConfiguration) -> Self {
        Self {
            carry_threshold: config.carry_threshold,
            danger_distance: config.danger_distance,
        }
    }
}

impl Default for OffensiveRole {
    fn default() -> Self {
        Self::new(&AgentConfiguration::DEFAULT)
    }
}

impl ReflexRole for OffensiveRole {
    fn features<S: GameState>(&self, ctx: Context<S>, action: Action) -> Features {
        offensive_features(ctx, action, self.danger_distance)
    }

    fn weights(&self) -> &Weights {
        &OFFENSIVE_WEIGHTS
    }

    fn preferred_action<S: GameState>(&self, ctx: Context<S>, actions: &[Action]) -> Option<Action> {
        let my_state = ctx.state.agent_state(ctx.agent);
        if my_state.num_carrying < self.carry_threshold || !my_state.is_pacman {
            return None;
        }
        let action = head_home(ctx, actions);
        if let Some(action) = action {
            log::debug!(
                "{} carries {} food, heading home with {action}",
                ctx.agent,
                my_state.num_carrying
            );
        }
        action
    }
}

/// Guards the home half, chases visible invaders and otherwise waits at the boundary.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefensiveRole;

impl ReflexRole for DefensiveRole {
    fn features<S: GameState>(&self, ctx: Context<S>, action: Action) -> Features {
        defensive_features(ctx, action)
    }

    fn weights(&self) -> &Weights {
        &DEFENSIVE_WEIGHTS
    }
}

/// Returns the distance from the agent's start to where `action` leads.
fn distance_to_start<S: GameState>(ctx: Context<S>, action: Action) -> (bool, u32) {
    let successor = resolved_successor(ctx.state, ctx.agent, action);
    let my_state = successor.agent_state(ctx.agent);
    let distance = my_state
        .nearest_cell()
        .map_or(u32::MAX, |cell| successor.maze_distance(ctx.start, cell));
    (my_state.is_pacman, distance)
}

/// Among `actions`, prefers one that steps back onto the home half, closest to the start;
/// if none does, the one closest to the start.
pub fn head_home<S: GameState>(ctx: Context<S>, actions: &[Action]) -> Option<Action> {
    let mut actions = actions.to_vec();
    sort_by_name(&mut actions);
    let candidates = actions
        .into_iter()
        .map(|action| (action, distance_to_start(ctx, action)))
        .collect::<Vec<_>>();
    candidates
        .iter()
        .filter(|(_, (is_pacman, _))| !is_pacman)
        .min_by_key(|(_, (_, distance))| *distance)
        .or_else(|| candidates.iter().min_by_key(|(_, (_, distance))| *distance))
        .map(|&(action, _)| action)
}

/// Breaks a tie between equally-scored actions: the one leading closest to the start wins,
/// and among those the one with the smallest name.
pub fn break_tie<S: GameState>(ctx: Context<S>, tied: &[Action]) -> Option<Action> {
    let mut tied = tied.to_vec();
    sort_by_name(&mut tied);
    tied.into_iter()
        .min_by_key(|&action| distance_to_start(ctx, action).1)
}

/// Picks among the legal actions of the agent those with the highest score,
/// then breaks ties deterministically with [break_tie].
///
/// Panics if the host reports no legal action.
pub fn choose_reflex_action<S: GameState, R: ReflexRole>(ctx: Context<S>, role: &R) -> Action {
    let actions = ctx.state.legal_actions(ctx.agent);
    assert!(
        !actions.is_empty(),
        "host reported no legal action for {}",
        ctx.agent
    );

    if let Some(action) = role.preferred_action(ctx, &actions) {
        return action;
    }

    let values = actions
        .iter()
        .map(|&action| evaluate(ctx, action, role))
        .collect::<Vec<_>>();
    let max_value = values.iter().copied().max();
    let best_actions = actions
        .iter()
        .zip(&values)
        .filter(|&(_, value)| Some(*value) == max_value)
        .map(|(&action, _)| action)
        .collect::<Vec<_>>();

    if best_actions.len() > 1 {
        log::trace!("{} breaks tie among {best_actions:?}", ctx.agent);
        if let Some(action) = break_tie(ctx, &best_actions) {
            return action;
        }
    }
    best_actions[0]
}
