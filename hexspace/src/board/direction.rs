// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Directions on the hex grid and the offset-coordinate adjacency rule.
use std::{convert::TryFrom, fmt, str::FromStr};

use enumflags2::BitFlags;
#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use thiserror::Error;

use crate::board::GridPoint;

/// Number of directions around a hex.
pub const NUM_DIRECTIONS: usize = 6;

/// One of the six sides of a hex, in clockwise order starting at the top. Directions
/// are bitflags so that sets of them (such as the open sides of a cell at the edge of
/// the grid) can be stored as a [`BitFlags<Direction>`].
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Direction {
    NN = 0b00_0001,
    NE = 0b00_0010,
    SE = 0b00_0100,
    SS = 0b00_1000,
    SW = 0b01_0000,
    NW = 0b10_0000,
}

impl Direction {
    /// All directions, in clockwise order. The position of a direction in this array is
    /// its [`index`][Direction::index].
    pub const ALL: [Direction; NUM_DIRECTIONS] = [
        Direction::NN,
        Direction::NE,
        Direction::SE,
        Direction::SS,
        Direction::SW,
        Direction::NW,
    ];

    /// Position of this direction in the clockwise cycle, `NN` being 0.
    pub fn index(self) -> usize {
        match self {
            Direction::NN => 0,
            Direction::NE => 1,
            Direction::SE => 2,
            Direction::SS => 3,
            Direction::SW => 4,
            Direction::NW => 5,
        }
    }

    /// Get the direction at the given position of the cycle. Wraps around, so any index
    /// is valid.
    pub fn from_index(idx: usize) -> Self {
        Self::ALL[idx % NUM_DIRECTIONS]
    }

    /// Turn this direction according to a single path symbol.
    pub fn rotate(self, turn: Turn) -> Self {
        match turn {
            Turn::Left => self.left(),
            Turn::Center => self,
            Turn::Right => self.right(),
        }
    }

    /// The next direction counter-clockwise.
    pub fn left(self) -> Self {
        Self::from_index(self.index() + NUM_DIRECTIONS - 1)
    }

    /// The next direction clockwise.
    pub fn right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + NUM_DIRECTIONS / 2)
    }

    /// Short display name, such as `DIR-NE`.
    pub fn name(self) -> &'static str {
        match self {
            Direction::NN => "DIR-NN",
            Direction::NE => "DIR-NE",
            Direction::SE => "DIR-SE",
            Direction::SS => "DIR-SS",
            Direction::SW => "DIR-SW",
            Direction::NW => "DIR-NW",
        }
    }

    /// Arrow glyph pointing in this direction, used to draw move markers.
    pub fn arrow(self) -> char {
        match self {
            Direction::NN => '\u{2B06}',
            Direction::NE => '\u{2B08}',
            Direction::SE => '\u{2B0A}',
            Direction::SS => '\u{2B07}',
            Direction::SW => '\u{2B0B}',
            Direction::NW => '\u{2B09}',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(feature = "rng_gen")]
impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::from_index(rng.gen_range(0, NUM_DIRECTIONS))
    }
}

/// Compute the coordinates of the hex adjacent to `from` in direction `dir`.
///
/// The grid uses offset coordinates where odd columns are shifted down by half a hex,
/// so the row of a diagonal neighbor depends on the parity of the column. No bounds
/// checking is done here.
pub fn neighbor(from: GridPoint, dir: Direction) -> GridPoint {
    let parity = from.col.rem_euclid(2);
    match dir {
        Direction::NN => GridPoint::new(from.row - 1, from.col),
        Direction::SS => GridPoint::new(from.row + 1, from.col),
        Direction::NE => GridPoint::new(from.row - 1 + parity, from.col + 1),
        Direction::NW => GridPoint::new(from.row - 1 + parity, from.col - 1),
        Direction::SE => GridPoint::new(from.row + parity, from.col + 1),
        Direction::SW => GridPoint::new(from.row + parity, from.col - 1),
    }
}

/// Relative turn applied before each step of a movement path.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Turn {
    /// Turn counter-clockwise, then step.
    Left,
    /// Keep the heading, then step.
    Center,
    /// Turn clockwise, then step.
    Right,
}

impl Turn {
    /// Path character for this turn.
    pub fn symbol(self) -> char {
        match self {
            Turn::Left => 'l',
            Turn::Center => 'c',
            Turn::Right => 'r',
        }
    }
}

impl TryFrom<char> for Turn {
    type Error = char;

    /// Parse a path character. Returns the character back if it is not a turn.
    fn try_from(chr: char) -> Result<Self, char> {
        match chr {
            'l' => Ok(Turn::Left),
            'c' => Ok(Turn::Center),
            'r' => Ok(Turn::Right),
            other => Err(other),
        }
    }
}

/// Error returned when a path string cannot be parsed.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum PathParseError {
    /// The path did not contain any turns.
    #[error("movement path is empty")]
    Empty,
    /// The path contained a character that is not `l`, `c`, or `r`.
    #[error("invalid turn {chr:?} at position {pos} of movement path")]
    InvalidTurn { chr: char, pos: usize },
}

/// A sequence of turns describing one candidate move, relative to a ship's heading.
/// Each turn rotates the heading and then advances one hex.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Path(Vec<Turn>);

impl Path {
    /// Construct a path from the given turns. Panics if `turns` is empty.
    pub fn new(turns: Vec<Turn>) -> Self {
        assert!(!turns.is_empty(), "movement path must have at least one turn");
        Path(turns)
    }

    /// The turns of this path, in order.
    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    /// Number of steps this path takes.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromStr for Path {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let turns = s
            .chars()
            .enumerate()
            .map(|(pos, chr)| Turn::try_from(chr).map_err(|chr| PathParseError::InvalidTurn { chr, pos }))
            .collect::<Result<Vec<_>, _>>()?;
        if turns.is_empty() {
            Err(PathParseError::Empty)
        } else {
            Ok(Path(turns))
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.0.iter().map(|turn| turn.symbol()).collect();
        f.pad(&s)
    }
}
