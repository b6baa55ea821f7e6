/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

//! Plays a match between two teams on the built-in layout.
//!
//! Usage: `cargo run --example match [RED_TEAM.json] [BLUE_TEAM.json]`, where each file
//! holds a [TeamConfiguration], for instance:
//! `{ "first": "offensive-search", "second": "defensive-search", "agents": { "seed": 1 } }`.

use std::{env, error::Error, fs};

use capture_core::TeamConfiguration;
use capture_utils::{run_match, GridGameState, SIGHT_RANGE};
use layouts::DEFAULT_LAYOUT;

#[macro_use]
extern crate lazy_static;

mod layouts;

const MAX_TURNS: u32 = 1200;

fn load_team(path: Option<String>) -> Result<TeamConfiguration, Box<dyn Error>> {
    match path {
        Some(path) => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
        None => Ok(TeamConfiguration::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Configure the log to just write its content and enable the info level.
    use std::io::Write;
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter(None, log::LevelFilter::Info)
        .init();

    let mut args = env::args().skip(1);
    let red = load_team(args.next())?;
    let blue = load_team(args.next())?;
    log::info!("Red: {} and {}, Blue: {} and {}", red.first, red.second, blue.first, blue.second);

    let state = GridGameState::new(DEFAULT_LAYOUT.clone());
    log::info!("Initial state:\n{state}");
    let outcome = run_match(state, &red, &blue, MAX_TURNS, Some(SIGHT_RANGE))?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
