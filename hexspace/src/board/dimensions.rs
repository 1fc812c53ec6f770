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
//! Size of the hex grid and conversions between grid points and arena indexes.
use std::convert::TryFrom;

use crate::board::{direction, Direction, DimensionError, GridPoint};

/// Size of a hex grid, in rows and columns of hexes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HexDimensions {
    /// Number of rows. This cooresponds to the `row` of a [`GridPoint`].
    rows: i32,
    /// Number of columns. This cooresponds to the `col` of a [`GridPoint`].
    cols: i32,
}

impl HexDimensions {
    /// Create new [`HexDimensions`] with the given number of rows and columns.
    /// Panics if either is not positive or if `rows * cols` does not fit in `usize`.
    pub fn new(rows: i32, cols: i32) -> Self {
        match Self::try_new(rows, cols) {
            Ok(dim) => dim,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create new [`HexDimensions`] with the given number of rows and columns.
    pub fn try_new(rows: i32, cols: i32) -> Result<Self, DimensionError> {
        if rows <= 0 || cols <= 0 {
            return Err(DimensionError::NotPositive { rows, cols });
        }
        usize::try_from(rows)
            .ok()
            .zip(usize::try_from(cols).ok())
            .and_then(|(r, c)| r.checked_mul(c))
            .map(|_| Self { rows, cols })
            .ok_or(DimensionError::TooLarge { rows, cols })
    }

    /// Get the number of rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Get the number of columns.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The dimensions as a point, one past the last valid index in both axes.
    pub fn max(&self) -> GridPoint {
        GridPoint::new(self.rows, self.cols)
    }

    /// Total number of hexes.
    pub fn total_size(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Returns true if the point is a valid index for these dimensions.
    pub fn contains(&self, point: &GridPoint) -> bool {
        point.inside(&self.max())
    }

    /// Convert a point to a linear index. Panics if the point is out of bounds.
    pub fn linearize(&self, point: &GridPoint) -> usize {
        match self.try_linearize(point) {
            Some(v) => v,
            None => panic!("{} is out of bounds for {:?}", point, self),
        }
    }

    /// Convert a point to a linear index, or `None` if the point is out of bounds.
    pub fn try_linearize(&self, point: &GridPoint) -> Option<usize> {
        if self.contains(point) {
            Some(point.row as usize * self.cols as usize + point.col as usize)
        } else {
            None
        }
    }

    /// Get back a point from a linear index. Panics if `idx >= total_size()`.
    pub fn un_linearize(&self, idx: usize) -> GridPoint {
        assert!(idx < self.total_size(), "index {} out of range", idx);
        let cols = self.cols as usize;
        GridPoint::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Get an iterator over every point, row by row.
    pub fn iter_points(&self) -> impl Iterator<Item = GridPoint> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| GridPoint::new(row, col)))
    }

    /// Iterate the in-bounds neighbors of a point along with the direction they lie in.
    /// Yields nothing if the point itself is out of bounds.
    pub fn neighbors(&self, point: GridPoint) -> impl Iterator<Item = (Direction, GridPoint)> {
        let dim = *self;
        let start = if dim.contains(&point) { 0 } else { Direction::ALL.len() };
        Direction::ALL[start..]
            .iter()
            .map(move |&dir| (dir, direction::neighbor(point, dir)))
            .filter(move |(_, n)| dim.contains(n))
    }
}

impl Default for HexDimensions {
    /// The default grid: 5 rows by 12 columns.
    fn default() -> Self {
        Self { rows: 5, cols: 12 }
    }
}
