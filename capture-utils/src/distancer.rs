/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use capture_core::{Cell, MazeDistance, MOVES};
use rustc_hash::FxHashMap;

use crate::Grid;

#[derive(Copy, Clone, Eq, PartialEq)]
struct WavefrontState {
    cost: u32,
    cell: Cell,
}

impl Ord for WavefrontState {
    fn cmp(&self, other: &WavefrontState) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.cell.cmp(&other.cell))
    }
}

impl PartialOrd for WavefrontState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn wavefront_expansion(walls: &Grid<bool>, start: Cell) -> Grid<u32> {
    let mut heap = BinaryHeap::new();
    let mut gradient = Grid::new(walls.width(), walls.height(), u32::MAX);

    heap.push(WavefrontState {
        cost: 0,
        cell: start,
    });

    while let Some(WavefrontState { cost, cell }) = heap.pop() {
        let gradient_value = match gradient.get_mut(cell) {
            Some(value) => value,
            None => continue,
        };
        if *gradient_value <= cost {
            continue;
        }
        *gradient_value = cost;

        for direction in MOVES {
            let next = direction.apply(cell);
            if walls.get(next) == Some(&false) {
                heap.push(WavefrontState {
                    cost: cost + 1,
                    cell: next,
                });
            }
        }
    }

    gradient
}

/// All-pairs maze distances, one wavefront per open cell.
#[derive(Clone, Debug)]
pub struct Distancer {
    gradients: FxHashMap<Cell, Grid<u32>>,
}

impl Distancer {
    pub fn new(walls: &Grid<bool>) -> Self {
        let gradients = walls
            .cells()
            .filter(|&cell| walls.get(cell) == Some(&false))
            .map(|cell| (cell, wavefront_expansion(walls, cell)))
            .collect::<FxHashMap<_, _>>();
        log::debug!("computed maze distances from {} cells", gradients.len());
        Self { gradients }
    }
}

impl MazeDistance for Distancer {
    fn maze_distance(&self, a: Cell, b: Cell) -> u32 {
        self.gradients
            .get(&a)
            .and_then(|gradient| gradient.get(b))
            .copied()
            .unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layout;

    #[test]
    fn distances_follow_corridors() {
        let layout: Layout = "%%%%%\n%1 %%\n%% %%\n%   %\n%%%%%".parse().unwrap();
        let distancer = Distancer::new(&layout.walls);
        let a = Cell::new(1, 3);
        let b = Cell::new(1, 1);
        assert_eq!(a.manhattan_dist(b), 2);
        assert_eq!(distancer.maze_distance(a, b), 4);
        assert_eq!(distancer.maze_distance(b, a), 4);
        assert_eq!(distancer.maze_distance(a, a), 0);
        assert_eq!(distancer.maze_distance(a, Cell::new(0, 0)), u32::MAX);
    }

    #[test]
    fn disconnected_cells_are_unreachable() {
        let layout: Layout = "%%%%%\n%1% %\n%%%%%".parse().unwrap();
        let distancer = Distancer::new(&layout.walls);
        assert_eq!(
            distancer.maze_distance(Cell::new(1, 1), Cell::new(3, 1)),
            u32::MAX
        );
    }
}
