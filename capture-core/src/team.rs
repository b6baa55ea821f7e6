/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    AgentConfiguration, AgentId, BaselineRole, CaptureAgent, DefensiveRole, DefensiveSearchAgent,
    GameState, OffensiveRole, OffensiveSearchAgent, ReflexAgent, Side,
};

/// The roles an agent can be created with.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    BaselineReflex,
    OffensiveReflex,
    DefensiveReflex,
    OffensiveSearch,
    DefensiveSearch,
}

/// The name of an unregistered role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoleError(pub String);

impl fmt::Display for UnknownRoleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unknown role \"{}\", expected one of: {}",
            self.0,
            Role::ALL.map(Role::name).join(", ")
        )
    }
}

impl std::error::Error for UnknownRoleError {}

/// Builds a boxed agent for a role.
pub type AgentConstructor<S> = fn(AgentId, Side, &AgentConfiguration) -> Box<dyn CaptureAgent<S>>;

impl Role {
    pub const ALL: [Role; 5] = [
        Role::BaselineReflex,
        Role::OffensiveReflex,
        Role::DefensiveReflex,
        Role::OffensiveSearch,
        Role::DefensiveSearch,
    ];

    /// The registered name of this role.
    pub const fn name(self) -> &'static str {
        match self {
            Role::BaselineReflex => "baseline-reflex",
            Role::OffensiveReflex => "offensive-reflex",
            Role::DefensiveReflex => "defensive-reflex",
            Role::OffensiveSearch => "offensive-search",
            Role::DefensiveSearch => "defensive-search",
        }
    }

    /// The constructor registered for this role.
    pub fn constructor<S: GameState + 'static>(self) -> AgentConstructor<S> {
        match self {
            Role::BaselineReflex => new_baseline_reflex::<S>,
            Role::OffensiveReflex => new_offensive_reflex::<S>,
            Role::DefensiveReflex => new_defensive_reflex::<S>,
            Role::OffensiveSearch => new_offensive_search::<S>,
            Role::DefensiveSearch => new_defensive_search::<S>,
        }
    }

    /// Creates an agent of this role.
    pub fn instantiate<S: GameState + 'static>(
        self,
        index: AgentId,
        side: Side,
        config: &AgentConfiguration,
    ) -> Box<dyn CaptureAgent<S>> {
        (self.constructor())(index, side, config)
    }
}

fn new_baseline_reflex<S: GameState + 'static>(
    index: AgentId,
    side: Side,
    _config: &AgentConfiguration,
) -> Box<dyn CaptureAgent<S>> {
    Box::new(ReflexAgent::new(index, side, BaselineRole))
}

fn new_offensive_reflex<S: GameState + 'static>(
    index: AgentId,
    side: Side,
    config: &AgentConfiguration,
) -> Box<dyn CaptureAgent<S>> {
    Box::new(ReflexAgent::new(index, side, OffensiveRole::new(config)))
}

fn new_defensive_reflex<S: GameState + 'static>(
    index: AgentId,
    side: Side,
    _config: &AgentConfiguration,
) -> Box<dyn CaptureAgent<S>> {
    Box::new(ReflexAgent::new(index, side, DefensiveRole))
}

fn new_offensive_search<S: GameState + 'static>(
    index: AgentId,
    side: Side,
    config: &AgentConfiguration,
) -> Box<dyn CaptureAgent<S>> {
    Box::new(OffensiveSearchAgent::new(index, side, config))
}

fn new_defensive_search<S: GameState + 'static>(
    index: AgentId,
    side: Side,
    config: &AgentConfiguration,
) -> Box<dyn CaptureAgent<S>> {
    Box::new(DefensiveSearchAgent::new(index, side, config))
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| UnknownRoleError(s.to_string()))
    }
}

/// The two agents of a team.
pub type Team<S> = [Box<dyn CaptureAgent<S>>; 2];

/// Role names of the default team.
pub const DEFAULT_ROLES: [&str; 2] = ["offensive-reflex", "defensive-reflex"];

/// Creates a team of two agents from their role names.
///
/// Both names are resolved before any agent is built, an unknown one is an error.
pub fn create_team<S: GameState + 'static>(
    first_index: AgentId,
    second_index: AgentId,
    side: Side,
    first: &str,
    second: &str,
    config: &AgentConfiguration,
) -> Result<Team<S>, UnknownRoleError> {
    let first_role: Role = first.parse()?;
    let second_role: Role = second.parse()?;
    log::debug!("{side} team: {first_index} as {first_role}, {second_index} as {second_role}");
    Ok([
        first_role.instantiate(first_index, side, config),
        second_role.instantiate(second_index, side, config),
    ])
}

/// A team description, typically read from a configuration file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TeamConfiguration {
    /// role name of the first agent
    pub first: String,
    /// role name of the second agent
    pub second: String,
    /// parameters shared by both agents
    pub agents: AgentConfiguration,
}

impl Default for TeamConfiguration {
    fn default() -> Self {
        Self {
            first: DEFAULT_ROLES[0].to_string(),
            second: DEFAULT_ROLES[1].to_string(),
            agents: AgentConfiguration::default(),
        }
    }
}

impl TeamConfiguration {
    /// Creates the described team.
    pub fn build<S: GameState + 'static>(
        &self,
        first_index: AgentId,
        second_index: AgentId,
        side: Side,
    ) -> Result<Team<S>, UnknownRoleError> {
        create_team(
            first_index,
            second_index,
            side,
            &self.first,
            &self.second,
            &self.agents,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn names_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.name().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn unknown_name_is_reported() {
        let error = "OffensiveReflexAgent".parse::<Role>().unwrap_err();
        assert_eq!(error, UnknownRoleError("OffensiveReflexAgent".into()));
        assert!(error.to_string().contains("offensive-reflex"));
    }

    #[test]
    fn team_configuration_from_json() {
        let config: TeamConfiguration = serde_json::from_str(
            r#"{ "first": "offensive-search", "agents": { "seed": 7 } }"#,
        )
        .unwrap();
        assert_eq!(config.first, "offensive-search");
        assert_eq!(config.second, "defensive-reflex");
        assert_eq!(config.agents.seed, Some(7));
    }
}
