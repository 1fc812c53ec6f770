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
use std::{
    fmt,
    ops::{Add, AddAssign, Sub},
};

/// A `(row, col)` pair on the hex grid. Used both for absolute cell indexes and for
/// offsets between them, such as pixel positions inside a window or scroll deltas.
/// Values may be negative; whether a point is in bounds is up to the consumer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct GridPoint {
    /// Vertical component.
    pub row: i32,
    /// Horizontal component.
    pub col: i32,
}

impl GridPoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a [`GridPoint`] from the given `row` and `col`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns true if `0 <= row < bound.row` and `0 <= col < bound.col`.
    pub fn inside(&self, bound: &GridPoint) -> bool {
        0 <= self.row && self.row < bound.row && 0 <= self.col && self.col < bound.col
    }

    /// Add component-wise, or `None` if either component overflows.
    pub fn checked_add(self, rhs: GridPoint) -> Option<GridPoint> {
        Some(GridPoint::new(
            self.row.checked_add(rhs.row)?,
            self.col.checked_add(rhs.col)?,
        ))
    }

    /// Add component-wise, clamping each component at the bounds of `i32`.
    pub fn saturating_add(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(
            self.row.saturating_add(rhs.row),
            self.col.saturating_add(rhs.col),
        )
    }

    /// Whether the column is odd. Odd columns sit half a hex lower than even ones.
    pub fn odd_col(&self) -> bool {
        self.col.rem_euclid(2) == 1
    }
}

impl Add for GridPoint {
    type Output = GridPoint;

    fn add(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign for GridPoint {
    fn add_assign(&mut self, rhs: GridPoint) {
        self.row += rhs.row;
        self.col += rhs.col;
    }
}

impl Sub for GridPoint {
    type Output = GridPoint;

    fn sub(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.row, self.col)
    }
}

impl From<(i32, i32)> for GridPoint {
    /// Construct a [`GridPoint`] from the given `(row, col)` pair.
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<GridPoint> for (i32, i32) {
    /// Convert the [`GridPoint`] into a `(row, col)` pair.
    fn from(point: GridPoint) -> Self {
        (point.row, point.col)
    }
}
