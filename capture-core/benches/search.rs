/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use capture_core::{
    choose_reflex_action, AStar, AgentId, Cell, Context, DefensiveRole, OffensiveRole, Side,
};
use capture_utils::{GridGameState, Layout};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const MAZE: &str = "\
%%%%%%%%%%%%%%%%%%%%
%1 .   %    .   % 2%
%3 %%% % %%%% % %%4%
%  .     %  .  .   %
%%%% %%%%% %%% %%% %
%  .   .  .    %   %
% %%%%% %% %%%%% % %
%    .       .     %
%%%%%%%%%%%%%%%%%%%%";

const AGENT: AgentId = AgentId(0);

fn search_benchmark(c: &mut Criterion) {
    let layout: Layout = MAZE.parse().unwrap();
    let state = GridGameState::new(layout);
    let start = Cell::new(1, 7);
    let goal = Cell::new(18, 1);

    c.bench_function("astar_across_maze", |b| {
        b.iter(|| {
            let mut astar = AStar::new(black_box(&state), AGENT);
            black_box(astar.plan(start, goal).unwrap());
        });
    });
}

fn reflex_benchmark(c: &mut Criterion) {
    let layout: Layout = MAZE.parse().unwrap();
    let state = GridGameState::new(layout);
    let ctx = Context::new(&state, AGENT, Side::Red, Cell::new(1, 7));
    let offensive = OffensiveRole::default();

    c.bench_function("offensive_reflex_choice", |b| {
        b.iter(|| black_box(choose_reflex_action(black_box(ctx), &offensive)));
    });
    c.bench_function("defensive_reflex_choice", |b| {
        b.iter(|| black_box(choose_reflex_action(black_box(ctx), &DefensiveRole)));
    });
}

criterion_group!(benches, search_benchmark, reflex_benchmark);
criterion_main!(benches);
