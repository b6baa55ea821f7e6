/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use ordered_float::NotNan;

use crate::{
    Action, Context, FeatureName, Features, GameState, ReflexRole, DANGER_ZONE, DEFENDER_DISTANCE,
    DISTANCE_FROM_CENTER, DISTANCE_TO_FOOD, DISTANCE_TO_HOME, FOOD_CARRYING, INVADER_DISTANCE,
    NUM_INVADERS, ON_DEFENSE, REVERSE, STOP, SUCCESSOR_SCORE,
};

/// The value of an action once its features are weighted.
pub type Score = NotNan<f32>;

// SAFETY: 0 is not NaN
const SCORE_ZERO: Score = unsafe { Score::new_unchecked(0.) };

/// A fixed, hand-tuned weight vector, one per role.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Weights(&'static [(FeatureName, f32)]);

impl Weights {
    pub const fn new(entries: &'static [(FeatureName, f32)]) -> Self {
        Weights(entries)
    }

    /// Returns the weight of `name`, 0 if absent.
    pub fn get(&self, name: FeatureName) -> f32 {
        self.0
            .iter()
            .find(|(entry, _)| *entry == name)
            .map_or(0., |&(_, weight)| weight)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureName, f32)> + '_ {
        self.0.iter().copied()
    }
}

pub const BASELINE_WEIGHTS: Weights = Weights::new(&[(SUCCESSOR_SCORE, 1.)]);

pub const OFFENSIVE_WEIGHTS: Weights = Weights::new(&[
    (SUCCESSOR_SCORE, 200.),
    (DISTANCE_TO_FOOD, -3.),
    (DISTANCE_TO_HOME, -1.),
    (DEFENDER_DISTANCE, 5.),
    (DANGER_ZONE, -100.),
    (FOOD_CARRYING, -10.),
]);

pub const DEFENSIVE_WEIGHTS: Weights = Weights::new(&[
    (NUM_INVADERS, -1000.),
    (ON_DEFENSE, 100.),
    (INVADER_DISTANCE, -10.),
    (STOP, -100.),
    (REVERSE, -2.),
    (DISTANCE_FROM_CENTER, -5.),
]);

impl Features {
    /// Sparse inner product: features without a weight, and weights without a feature,
    /// contribute nothing.
    pub fn dot(&self, weights: &Weights) -> f32 {
        self.iter()
            .map(|(name, value)| value * weights.get(name))
            .sum()
    }
}

/// Scores `action` in `ctx` with the features and weights of `role`.
pub fn evaluate<S: GameState, R: ReflexRole>(ctx: Context<S>, action: Action, role: &R) -> Score {
    let features = role.features(ctx, action);
    let value = features.dot(role.weights());
    log::trace!("{} {action}: {value} from {features:?}", ctx.agent);
    // Features and weights are finite
    Score::new(value).unwrap_or(SCORE_ZERO)
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn dot_ignores_unweighted_features() {
        let features: Features = [(SUCCESSOR_SCORE, -4.), (STOP, 1.), ("unknown", 7.)]
            .into_iter()
            .collect();
        assert_eq!(features.dot(&OFFENSIVE_WEIGHTS), -800.);
        assert_eq!(features.dot(&DEFENSIVE_WEIGHTS), -100.);
    }

    #[test]
    fn empty_features_score_zero() {
        assert_eq!(Features::new().dot(&DEFENSIVE_WEIGHTS), 0.);
    }

    #[test]
    fn weights_lookup() {
        assert_eq!(OFFENSIVE_WEIGHTS.get(DANGER_ZONE), -100.);
        assert_eq!(OFFENSIVE_WEIGHTS.get(STOP), 0.);
        assert_eq!(DEFENSIVE_WEIGHTS.iter().count(), 6);
        assert_eq!(BASELINE_WEIGHTS.get(SUCCESSOR_SCORE), 1.);
    }
}
