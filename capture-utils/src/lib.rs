/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

//! This is the utility module of the [capture agents](capture_core), containing support code
//! to run them outside of a full game host.
//!
//! It contains the following features:
//! - A dense 2-D container ([Grid]) addressed by [Cell].
//! - A reader for ASCII mazes ([Layout]).
//! - A maze-distance oracle computed by wavefront expansion ([Distancer]).
//! - A minimal host ([GridGameState]) implementing [GameState] with movement, food pickup and
//!   deposit, observation filtering and half-speed agents. It has no captures, capsules or
//!   time limits.
//! - A single-threaded match loop ([MatchExecutor], [run_match]).

#[cfg(doc)]
use capture_core::{Cell, GameState};

mod distancer;
mod executor;
mod grid;
mod grid_game;
mod layout;

pub use distancer::*;
pub use executor::*;
pub use grid::*;
pub use grid_game::*;
pub use layout::*;
