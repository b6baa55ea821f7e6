/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use serde::{Deserialize, Serialize};

/// The parameters of an agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AgentConfiguration {
    /// seed of the random fallback choices, if None a random seed is used
    pub seed: Option<u64>,
    /// maximum number of A* expansions per search, unbounded if None
    pub max_expansions: Option<u32>,
    /// carried food from which the offensive reflex agent heads home
    pub carry_threshold: u32,
    /// distance to a visible defender under which the offensive agent is in danger
    pub danger_distance: u32,
}

impl AgentConfiguration {
    pub const DEFAULT: Self = AgentConfiguration {
        seed: None,
        max_expansions: None,
        carry_threshold: 3,
        danger_distance: 3,
    };
}

impl Default for AgentConfiguration {
    fn default() -> Self {
        Self::DEFAULT
    }
}
