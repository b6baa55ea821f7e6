/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use crate::{AgentId, Cell, GameState, Side};

/// What an agent knows while deciding a turn
pub struct Context<'a, S: GameState> {
    /// snapshot of the game for this turn
    pub state: &'a S,
    /// agent deciding
    pub agent: AgentId,
    /// side of the agent's team
    pub side: Side,
    /// cell the agent started the episode on
    pub start: Cell,
}
impl<S: GameState> Copy for Context<'_, S> {}
impl<S: GameState> Clone for Context<'_, S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            agent: self.agent,
            side: self.side,
            start: self.start,
        }
    }
}
impl<'a, S: GameState> Context<'a, S> {
    /// Creates a new Context from its components.
    pub fn new(state: &'a S, agent: AgentId, side: Side, start: Cell) -> Self {
        Self {
            state,
            agent,
            side,
            start,
        }
    }
    /// Replaces the state, keeps the agent, side and start.
    pub fn with_state<'b>(self, state: &'b S) -> Context<'b, S> {
        Context {
            state,
            agent: self.agent,
            side: self.side,
            start: self.start,
        }
    }
}
