/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::{fmt, str::FromStr};

use capture_core::Cell;

use crate::Grid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLayoutError {
    Empty,
    InconsistentLines,
    InvalidCharacter(char),
    DuplicateAgent(u32),
    MissingAgent(u32),
}

impl fmt::Display for ParseLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseLayoutError::Empty => write!(f, "empty layout"),
            ParseLayoutError::InconsistentLines => write!(f, "lines of different lengths"),
            ParseLayoutError::InvalidCharacter(c) => write!(f, "invalid layout character '{c}'"),
            ParseLayoutError::DuplicateAgent(index) => write!(f, "agent {index} placed twice"),
            ParseLayoutError::MissingAgent(index) => write!(f, "agent {index} is missing"),
        }
    }
}

impl std::error::Error for ParseLayoutError {}

/// A maze read from text.
///
/// `%` is a wall, `.` a food pellet, `1` to `9` the start of agents 0 to 8,
/// and a space (or `o`, capsules are ignored) an empty cell.
/// The first line is the top row of the maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub walls: Grid<bool>,
    pub food: Grid<bool>,
    pub agent_starts: Vec<Cell>,
}

impl Layout {
    pub fn width(&self) -> i32 {
        self.walls.width()
    }

    pub fn height(&self) -> i32 {
        self.walls.height()
    }
}

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s.trim_matches('\n').lines().collect::<Vec<_>>();
        let width = lines.first().map_or(0, |line| line.chars().count());
        if width == 0 {
            return Err(ParseLayoutError::Empty);
        }
        if lines.iter().any(|line| line.chars().count() != width) {
            return Err(ParseLayoutError::InconsistentLines);
        }
        let height = lines.len() as i32;
        let mut walls = Grid::new(width as i32, height, false);
        let mut food = Grid::new(width as i32, height, false);
        let mut starts: Vec<Option<Cell>> = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let y = height - 1 - row as i32;
            for (x, c) in line.chars().enumerate() {
                let cell = Cell::new(x as i32, y);
                match c {
                    '%' => {
                        walls.set(cell, true);
                    }
                    '.' => {
                        food.set(cell, true);
                    }
                    ' ' | 'o' => {}
                    '1'..='9' => {
                        let index = c as usize - '1' as usize;
                        if starts.len() <= index {
                            starts.resize(index + 1, None);
                        }
                        if starts[index].replace(cell).is_some() {
                            return Err(ParseLayoutError::DuplicateAgent(index as u32));
                        }
                    }
                    c => return Err(ParseLayoutError::InvalidCharacter(c)),
                }
            }
        }
        let agent_starts = starts
            .into_iter()
            .enumerate()
            .map(|(index, start)| start.ok_or(ParseLayoutError::MissingAgent(index as u32)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layout {
            walls,
            food,
            agent_starts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let layout: Layout = "%%%%\n%1.%\n%.2%\n%%%%".parse().unwrap();
        assert_eq!(layout.width(), 4);
        assert_eq!(layout.height(), 4);
        assert_eq!(layout.agent_starts, vec![Cell::new(1, 2), Cell::new(2, 1)]);
        assert_eq!(layout.food.as_list(), vec![Cell::new(1, 1), Cell::new(2, 2)]);
        assert_eq!(layout.walls.get(Cell::new(0, 0)), Some(&true));
        assert_eq!(layout.walls.get(Cell::new(1, 1)), Some(&false));
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<Layout>(), Err(ParseLayoutError::Empty));
        assert_eq!(
            "%%%\n%1".parse::<Layout>(),
            Err(ParseLayoutError::InconsistentLines)
        );
        assert_eq!(
            "%x%".parse::<Layout>(),
            Err(ParseLayoutError::InvalidCharacter('x'))
        );
        assert_eq!(
            "%2%".parse::<Layout>(),
            Err(ParseLayoutError::MissingAgent(0))
        );
        assert_eq!(
            "1 1".parse::<Layout>(),
            Err(ParseLayoutError::DuplicateAgent(0))
        );
    }
}
