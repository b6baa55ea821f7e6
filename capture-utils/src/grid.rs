/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::fmt;

use capture_core::Cell;

/// A dense rectangular grid of values, addressed by [Cell] with `(0, 0)` at the bottom left.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: i32,
    tiles: Box<[T]>,
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height()).rev() {
            write!(f, " ")?;
            for x in 0..self.width() {
                write!(f, "{:?} ", self.tiles[self.offset(x, y)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> Grid<T> {
    pub fn new(width: i32, height: i32, value: T) -> Self
    where
        T: Clone,
    {
        assert!(width > 0);
        assert!(height > 0);
        Grid {
            width,
            tiles: vec![value; (width * height) as usize].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.tiles.len() as i32 / self.width
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width() && cell.y >= 0 && cell.y < self.height()
    }

    fn offset(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(self.offset(cell.x, cell.y))
        } else {
            None
        }
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.index(cell).map(|index| &self.tiles[index])
    }

    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut T> {
        match self.index(cell) {
            Some(index) => Some(&mut self.tiles[index]),
            None => None,
        }
    }

    /// Sets the value at `cell`, returns false if `cell` is outside the grid.
    pub fn set(&mut self, cell: Cell, value: T) -> bool {
        match self.get_mut(cell) {
            Some(tile) => {
                *tile = value;
                true
            }
            None => false,
        }
    }

    /// All cells, row by row from the bottom.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let width = self.width();
        let height = self.height();
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

impl Grid<bool> {
    /// The cells whose value is true, row by row from the bottom.
    pub fn as_list(&self) -> Vec<Cell> {
        self.cells()
            .filter(|&cell| self.get(cell).copied().unwrap_or(false))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use capture_core::Cell;

    #[test]
    fn access() {
        let mut grid = Grid::new(3, 2, 0u8);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.set(Cell::new(2, 1), 7));
        assert!(!grid.set(Cell::new(3, 1), 7));
        assert_eq!(grid.get(Cell::new(2, 1)), Some(&7));
        assert_eq!(grid.get(Cell::new(-1, 0)), None);
        assert_eq!(grid.cells().count(), 6);
    }

    #[test]
    fn as_list() {
        let mut grid = Grid::new(2, 2, false);
        grid.set(Cell::new(1, 1), true);
        grid.set(Cell::new(0, 0), true);
        assert_eq!(grid.as_list(), vec![Cell::new(0, 0), Cell::new(1, 1)]);
    }
}
