/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use rand::{seq::SliceRandom, Rng};

use crate::{
    game_state::own_cell, nearest, visible_invaders, AStar, Action, Cell, Context, GameState, Side,
};

/// Patrol points of `side`: every non-wall cell of its home boundary column.
///
/// Recomputed on every call, the layout is static so callers may keep the result.
pub fn patrol_points<S: GameState>(state: &S, side: Side) -> Vec<Cell> {
    state.home_boundary(side)
}

/// The goal of an attacker: the food closest to it, if any is left.
pub fn offensive_goal<S: GameState>(ctx: Context<S>) -> Option<Cell> {
    let my_cell = own_cell(ctx.state, ctx.agent);
    let food = ctx.state.food(ctx.side);
    nearest(ctx.state, my_cell, &food).map(|(cell, _)| cell)
}

/// The goal of a defender: the closest visible invader, or else a random patrol point.
pub fn defensive_goal<S: GameState, R: Rng>(ctx: Context<S>, rng: &mut R) -> Option<Cell> {
    let my_cell = own_cell(ctx.state, ctx.agent);
    let invaders = visible_invaders(ctx.state, ctx.side);
    if let Some((invader, _)) = nearest(ctx.state, my_cell, &invaders) {
        return Some(invader);
    }
    patrol_points(ctx.state, ctx.side).choose(rng).copied()
}

/// Plans towards `goal` and returns the first step, or a random legal action if there
/// is no goal or no path to it.
///
/// Panics if the host reports no legal action.
pub fn choose_goal_directed_action<S: GameState, R: Rng>(
    ctx: Context<S>,
    goal: Option<Cell>,
    max_expansions: Option<u32>,
    rng: &mut R,
) -> Action {
    if let Some(goal) = goal {
        let start = own_cell(ctx.state, ctx.agent);
        let action = AStar::new(ctx.state, ctx.agent)
            .with_max_expansions(max_expansions)
            .first_action(start, goal);
        if let Some(action) = action {
            log::debug!("{} heads to {goal} with {action}", ctx.agent);
            return action;
        }
    }

    let actions = ctx.state.legal_actions(ctx.agent);
    let action = *actions
        .choose(rng)
        .unwrap_or_else(|| panic!("host reported no legal action for {}", ctx.agent));
    log::debug!(
        "{} has no plan towards {goal:?}, taking random {action}",
        ctx.agent
    );
    action
}
