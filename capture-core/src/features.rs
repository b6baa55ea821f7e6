/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::collections::BTreeMap;

use crate::{
    game_state::own_cell, resolved_successor, Action, Cell, Context, GameState, MazeDistance, Side,
};

/// The name of a feature.
pub type FeatureName = &'static str;

pub const SUCCESSOR_SCORE: FeatureName = "successor_score";
pub const DISTANCE_TO_FOOD: FeatureName = "distance_to_food";
pub const DISTANCE_TO_HOME: FeatureName = "distance_to_home";
pub const DEFENDER_DISTANCE: FeatureName = "defender_distance";
pub const DANGER_ZONE: FeatureName = "danger_zone";
pub const FOOD_CARRYING: FeatureName = "food_carrying";
pub const ON_DEFENSE: FeatureName = "on_defense";
pub const NUM_INVADERS: FeatureName = "num_invaders";
pub const INVADER_DISTANCE: FeatureName = "invader_distance";
pub const DISTANCE_FROM_CENTER: FeatureName = "distance_from_center";
pub const STOP: FeatureName = "stop";
pub const REVERSE: FeatureName = "reverse";

/// A sparse feature vector: only the features that were set are present,
/// absent ones read as zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Features(BTreeMap<FeatureName, f32>);

impl Features {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: FeatureName, value: f32) {
        self.0.insert(name, value);
    }

    /// Returns the value of `name`, 0 if absent.
    pub fn get(&self, name: FeatureName) -> f32 {
        self.0.get(name).copied().unwrap_or(0.)
    }

    pub fn contains(&self, name: FeatureName) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureName, f32)> + '_ {
        self.0.iter().map(|(&name, &value)| (name, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(FeatureName, f32)> for Features {
    fn from_iter<I: IntoIterator<Item = (FeatureName, f32)>>(iter: I) -> Self {
        Features(iter.into_iter().collect())
    }
}

fn visible_opponents<S: GameState>(state: &S, side: Side, pacman: bool) -> Vec<Cell> {
    state
        .opponents(side)
        .into_iter()
        .map(|opponent| state.agent_state(opponent))
        .filter(|opponent| opponent.is_pacman == pacman)
        .filter_map(|opponent| opponent.nearest_cell())
        .collect()
}

/// Cells of the observable opponents currently invading `side`'s half.
pub fn visible_invaders<S: GameState>(state: &S, side: Side) -> Vec<Cell> {
    visible_opponents(state, side, true)
}

/// Cells of the observable opponents defending their own half against `side`.
pub fn visible_defenders<S: GameState>(state: &S, side: Side) -> Vec<Cell> {
    visible_opponents(state, side, false)
}

/// The target closest to `from` by maze distance; the first one wins on equal distances.
pub fn nearest<M: MazeDistance + ?Sized>(
    oracle: &M,
    from: Cell,
    targets: &[Cell],
) -> Option<(Cell, u32)> {
    targets
        .iter()
        .map(|&target| (target, oracle.maze_distance(from, target)))
        .min_by_key(|&(_, distance)| distance)
}

/// Features of the game score, from the agent's side, after `action`.
pub fn baseline_features<S: GameState>(ctx: Context<S>, action: Action) -> Features {
    let successor = resolved_successor(ctx.state, ctx.agent, action);
    let mut features = Features::new();
    features.set(
        SUCCESSOR_SCORE,
        ctx.side.signed_score(successor.score()) as f32,
    );
    features
}

/// Features of an attacker after `action`: food left and how close it is, the way home,
/// nearby defenders and the load being carried.
pub fn offensive_features<S: GameState>(
    ctx: Context<S>,
    action: Action,
    danger_distance: u32,
) -> Features {
    let successor = resolved_successor(ctx.state, ctx.agent, action);
    let my_state = successor.agent_state(ctx.agent);
    let my_cell = own_cell(&successor, ctx.agent);
    let mut features = Features::new();

    // Fewer food left means more eaten
    let food = successor.food(ctx.side);
    features.set(SUCCESSOR_SCORE, -(food.len() as f32));
    if let Some((_, distance)) = nearest(&successor, my_cell, &food) {
        features.set(DISTANCE_TO_FOOD, distance as f32);
    }

    // Boundary cells are taken from the pre-action state, walls do not move
    let home = ctx.state.home_boundary(ctx.side);
    if let Some((_, distance)) = nearest(&successor, my_cell, &home) {
        features.set(DISTANCE_TO_HOME, distance as f32);
    }

    let defenders = visible_defenders(&successor, ctx.side);
    if let Some((_, distance)) = nearest(&successor, my_cell, &defenders) {
        features.set(DEFENDER_DISTANCE, distance as f32);
        if distance < danger_distance {
            features.set(DANGER_ZONE, 1.);
        }
    }

    features.set(FOOD_CARRYING, my_state.num_carrying as f32);

    features
}

/// Features of a defender after `action`: staying home, invaders and how close they are,
/// or the distance to the home boundary when none is visible, and move hygiene.
pub fn defensive_features<S: GameState>(ctx: Context<S>, action: Action) -> Features {
    let successor = resolved_successor(ctx.state, ctx.agent, action);
    let my_state = successor.agent_state(ctx.agent);
    let my_cell = own_cell(&successor, ctx.agent);
    let mut features = Features::new();

    features.set(ON_DEFENSE, if my_state.is_pacman { 0. } else { 1. });

    let invaders = visible_invaders(&successor, ctx.side);
    features.set(NUM_INVADERS, invaders.len() as f32);
    if let Some((_, distance)) = nearest(&successor, my_cell, &invaders) {
        features.set(INVADER_DISTANCE, distance as f32);
    } else {
        let boundary = ctx.side.home_boundary_column(ctx.state.width());
        // Own boundary column, not the opponent's first column
        features.set(DISTANCE_FROM_CENTER, (my_cell.x - boundary).abs() as f32);
    }

    if action == Action::Stop {
        features.set(STOP, 1.);
    }
    let facing = ctx.state.agent_state(ctx.agent).direction;
    if action == facing.reverse() {
        features.set(REVERSE, 1.);
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_features_read_as_zero() {
        let mut features = Features::new();
        assert!(features.is_empty());
        features.set(STOP, 1.);
        assert_eq!(features.get(STOP), 1.);
        assert_eq!(features.get(REVERSE), 0.);
        assert!(features.contains(STOP));
        assert!(!features.contains(REVERSE));
        assert_eq!(features.len(), 1);
    }

    #[test]
    fn set_overwrites() {
        let mut features: Features = [(ON_DEFENSE, 1.), (NUM_INVADERS, 2.)].into_iter().collect();
        features.set(NUM_INVADERS, 0.);
        assert_eq!(features.get(NUM_INVADERS), 0.);
        assert_eq!(features.len(), 2);
    }
}
