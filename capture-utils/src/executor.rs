/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use ansi_term::Style;
use capture_core::{
    Action, AgentId, CaptureAgent, GameState, Side, TeamConfiguration, UnknownRoleError,
};
use serde::Serialize;

use crate::GridGameState;

fn highlight_style() -> Style {
    ansi_term::Style::new().bold().fg(ansi_term::Colour::Green)
}
fn highlight_turn(turn: u32) -> String {
    let turn_text = format!("T{}", turn);
    highlight_style().paint(&turn_text).to_string()
}

fn highlight_agent(agent: AgentId) -> String {
    let agent_text = format!("{}", agent);
    highlight_style().paint(&agent_text).to_string()
}

/// A boxed agent playing on a [GridGameState].
pub type GridAgentBox = Box<dyn CaptureAgent<GridGameState>>;

/// How a match ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MatchOutcome {
    /// final score, positive when red leads
    pub score: i32,
    /// number of agent moves played
    pub turns: u32,
    /// food left on the red and the blue half
    pub food_left: [usize; 2],
}

/// A single-threaded match loop: agents move one after the other in index order,
/// each seeing the game through its team's observation.
pub struct MatchExecutor {
    /// The current state of the game
    state: GridGameState,
    /// The agents, sorted by index
    agents: Vec<GridAgentBox>,
    /// Number of moves played so far
    turn: u32,
    /// Number of moves after which the match ends
    max_turns: u32,
    /// Sight range of the observations, None for full observability
    sight_range: Option<u32>,
}

impl MatchExecutor {
    /// Creates a new executor and registers every agent with its initial observation.
    pub fn new(
        state: GridGameState,
        mut agents: Vec<GridAgentBox>,
        max_turns: u32,
        sight_range: Option<u32>,
    ) -> Self {
        agents.sort_by_key(|agent| agent.index());
        for agent in agents.iter_mut() {
            let observation = state.observed_by(agent.side(), sight_range);
            agent.register_initial_state(&observation);
        }
        Self {
            state,
            agents,
            turn: 0,
            max_turns,
            sight_range,
        }
    }

    /// Plays the move of the next agent, returns whether the match goes on.
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }

        let count = self.agents.len();
        let agent = &mut self.agents[self.turn as usize % count];
        let index = agent.index();
        let observation = self.state.observed_by(agent.side(), self.sight_range);
        let mut action = agent.choose_action(&observation);
        if !self.state.legal_actions(index).contains(&action) {
            log::warn!(
                "{} chose illegal {action}, replacing with {}",
                highlight_agent(index),
                Action::Stop
            );
            action = Action::Stop;
        }
        self.state = self.state.generate_successor(index, action);

        if log::log_enabled!(log::Level::Info) {
            log::info!(
                "{} {} plays {action}, score {}",
                highlight_turn(self.turn),
                highlight_agent(index),
                self.state.score()
            );
        }
        log::debug!("State:\n{}", self.state);
        self.turn += 1;

        !self.is_finished()
    }

    /// Whether the turn limit is reached or a half has been emptied.
    pub fn is_finished(&self) -> bool {
        self.agents.is_empty() || self.turn >= self.max_turns || self.state.is_over()
    }

    /// The current state of the game.
    pub fn state(&self) -> &GridGameState {
        &self.state
    }

    /// Number of moves played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The outcome of the match so far.
    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome {
            score: self.state.score(),
            turns: self.turn,
            food_left: [
                self.state.food_left_on(Side::Red),
                self.state.food_left_on(Side::Blue),
            ],
        }
    }
}

/// Builds both teams from their configurations, red playing the even indices
/// and blue the odd ones.
///
/// Panics if the state does not have two agents per side.
pub fn create_teams(
    state: &GridGameState,
    red: &TeamConfiguration,
    blue: &TeamConfiguration,
) -> Result<Vec<GridAgentBox>, UnknownRoleError> {
    let mut agents = Vec::new();
    for (side, config) in [(Side::Red, red), (Side::Blue, blue)] {
        let indices = state.agents_of(side);
        assert!(
            indices.len() == 2,
            "{side} needs two agents, the layout has {}",
            indices.len()
        );
        agents.extend(config.build(indices[0], indices[1], side)?);
    }
    Ok(agents)
}

/// Creates and runs a match to its end.
pub fn run_match(
    state: GridGameState,
    red: &TeamConfiguration,
    blue: &TeamConfiguration,
    max_turns: u32,
    sight_range: Option<u32>,
) -> Result<MatchOutcome, UnknownRoleError> {
    let agents = create_teams(&state, red, blue)?;
    let mut executor = MatchExecutor::new(state, agents, max_turns, sight_range);
    while executor.step() {}
    let outcome = executor.outcome();
    log::info!(
        "Match over after {} moves, score {}",
        highlight_turn(outcome.turns),
        outcome.score
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use capture_core::*;

    use crate::*;

    const MAZE: &str = "\
%%%%%%%%%%
%1 .  . 2%
%3 %%%% 4%
%  .  .  %
%%%%%%%%%%";

    fn state() -> GridGameState {
        GridGameState::new(MAZE.parse().unwrap())
    }

    /// Always asks to go north, which is a wall from the start cells.
    struct Stubborn(AgentId);

    impl<S: GameState> CaptureAgent<S> for Stubborn {
        fn index(&self) -> AgentId {
            self.0
        }

        fn side(&self) -> Side {
            side_of(self.0)
        }

        fn register_initial_state(&mut self, _state: &S) {}

        fn choose_action(&mut self, _state: &S) -> Action {
            Action::North
        }
    }

    #[test]
    fn illegal_action_is_replaced_by_stop() {
        let state = state();
        let agents: Vec<GridAgentBox> = vec![Box::new(Stubborn(AgentId(0)))];
        let mut executor = MatchExecutor::new(state.clone(), agents, 3, None);
        while executor.step() {}
        assert_eq!(executor.turn(), 3);
        assert_eq!(
            executor.state().agent_state(AgentId(0)).cell(),
            state.agent_state(AgentId(0)).cell()
        );
    }

    #[test]
    fn unknown_role_fails_before_playing() {
        let red = TeamConfiguration {
            first: "random".into(),
            ..Default::default()
        };
        let result = run_match(state(), &red, &TeamConfiguration::default(), 10, None);
        assert_eq!(result, Err(UnknownRoleError("random".into())));
    }

    #[test]
    fn seeded_matches_replay() {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = TeamConfiguration {
            first: "offensive-search".into(),
            second: "defensive-search".into(),
            agents: AgentConfiguration {
                seed: Some(3),
                ..Default::default()
            },
        };
        let first = run_match(state(), &config, &config, 40, Some(SIGHT_RANGE)).unwrap();
        let second = run_match(state(), &config, &config, 40, Some(SIGHT_RANGE)).unwrap();
        assert_eq!(first, second);
        assert!(first.turns <= 40);
    }

    #[test]
    fn reflex_match_ends_within_the_turn_limit() {
        let outcome = run_match(
            state(),
            &TeamConfiguration::default(),
            &TeamConfiguration::default(),
            200,
            None,
        )
        .unwrap();
        assert!(outcome.turns > 0 && outcome.turns <= 200);
        assert!(outcome.food_left[0] <= 2 && outcome.food_left[1] <= 2);
    }
}
