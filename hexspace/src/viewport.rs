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
//! The window of the grid that is currently on screen, and the conversions between
//! absolute hex indexes, window-relative indexes and character cells of the window.

use log::{debug, trace};
use thiserror::Error;

use crate::board::GridPoint;

/// Width of a hex column on screen. Neighboring columns share their edge column.
const COL_STRIDE: i32 = 3;
/// Height of a hex on screen.
const ROW_STRIDE: i32 = 4;
/// Vertical shift of odd columns on screen.
const COL_STAGGER: i32 = 2;

/// Error when building a [`Viewport`] with inconsistent dimensions.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ViewportError {
    #[error("viewport dimensions must be positive, got {0}")]
    EmptyWindow(GridPoint),
    #[error("viewport of {dim} does not fit in a grid of {max}")]
    TooLarge { dim: GridPoint, max: GridPoint },
}

/// A rectangular window over a grid of `max` hexes, showing `dim` hexes starting at
/// `pos`. The window always lies fully inside the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Viewport {
    dim: GridPoint,
    pos: GridPoint,
    max: GridPoint,
}

impl Viewport {
    /// Create a viewport of size `dim` in the upper left corner of a grid of size `max`.
    pub fn new(dim: GridPoint, max: GridPoint) -> Result<Self, ViewportError> {
        if dim.row <= 0 || dim.col <= 0 {
            return Err(ViewportError::EmptyWindow(dim));
        }
        if dim.row > max.row || dim.col > max.col {
            return Err(ViewportError::TooLarge { dim, max });
        }
        Ok(Self {
            dim,
            pos: GridPoint::ORIGIN,
            max,
        })
    }

    /// Size of the window in hexes.
    pub fn dim(&self) -> GridPoint {
        self.dim
    }

    /// Absolute index of the upper left hex of the window.
    pub fn pos(&self) -> GridPoint {
        self.pos
    }

    /// Size of the whole grid.
    pub fn max(&self) -> GridPoint {
        self.max
    }

    /// Returns true if the absolute index is shown in the window.
    pub fn inside(&self, idx: GridPoint) -> bool {
        let within = |idx: i32, pos: i32, dim: i32| idx >= pos && idx - pos < dim;
        within(idx.row, self.pos.row, self.dim.row) && within(idx.col, self.pos.col, self.dim.col)
    }

    /// Scroll the window by the least amount needed to show `target`. The window never
    /// leaves the grid. Returns true if the window moved.
    pub fn update(&mut self, target: GridPoint) -> bool {
        debug!("Viewport pos: {} new: {}", self.pos, target);
        let row = Self::follow(self.pos.row, self.dim.row, self.max.row, target.row);
        let col = Self::follow(self.pos.col, self.dim.col, self.max.col, target.col);
        self.move_to(GridPoint::new(row, col))
    }

    /// Shift the window by `diff`, stopping at the edges of the grid. Returns true if the
    /// window moved.
    pub fn scroll_by(&mut self, diff: GridPoint) -> bool {
        let new_pos = self.pos.saturating_add(diff);
        let row = new_pos.row.min(self.max.row - self.dim.row).max(0);
        let col = new_pos.col.min(self.max.col - self.dim.col).max(0);
        self.move_to(GridPoint::new(row, col))
    }

    /// Convert an index relative to the window to an absolute index.
    pub fn to_absolute(&self, rel: GridPoint) -> GridPoint {
        rel + self.pos
    }

    /// Iterate over the absolute indexes of every hex in the window, row by row.
    pub fn visible(&self) -> impl Iterator<Item = GridPoint> {
        let Viewport { dim, pos, .. } = *self;
        (0..dim.row).flat_map(move |row| {
            (0..dim.col).map(move |col| pos + GridPoint::new(row, col))
        })
    }

    /// Character offset within the window of the upper left corner of the hex at the
    /// absolute index `idx_abs`. Odd columns of the grid sit two rows lower than even
    /// ones.
    pub fn get_upper_left(&self, idx_abs: GridPoint) -> GridPoint {
        let rel = idx_abs - self.pos;
        let offset = self.pos.col.rem_euclid(2);
        GridPoint::new(
            (rel.col + offset).rem_euclid(2) * COL_STAGGER + rel.row * ROW_STRIDE,
            rel.col * COL_STRIDE,
        )
    }

    /// Find the hex under a character of a window whose first column is even. Returns
    /// `None` if the character lies between hexes or the hex is not below `max`.
    ///
    /// The window is split into blocks of three columns, one per hex column. The first
    /// column of a block is shared by the edges of two neighboring hexes, the other two
    /// belong to the hex of the block.
    pub fn hex_from_pixel(win_row: i32, win_col: i32, max: GridPoint) -> Option<GridPoint> {
        if win_row < 0 || win_col < 0 {
            return None;
        }
        let block = win_col / COL_STRIDE;
        let hex = if win_col % COL_STRIDE == 0 {
            let row_offset = win_row - 1;
            if row_offset < 0 {
                None
            } else {
                let col = block - (row_offset / 2 + block) % 2;
                if col < 0 {
                    None
                } else {
                    Some(GridPoint::new(row_offset / ROW_STRIDE, col))
                }
            }
        } else {
            let row_offset = win_row - if block % 2 == 1 { COL_STAGGER } else { 0 };
            if row_offset < 0 {
                None
            } else {
                Some(GridPoint::new(row_offset / ROW_STRIDE, block))
            }
        };
        let hex = hex.filter(|hex| hex.row < max.row && hex.col < max.col);
        trace!("Event - row: {} col: {} hex: {:?}", win_row, win_col, hex);
        hex
    }

    /// Find the absolute index of the hex under a character of this window, if any.
    pub fn hex_at(&self, win_row: i32, win_col: i32) -> Option<GridPoint> {
        let rel = if self.pos.col.rem_euclid(2) == 0 {
            Self::hex_from_pixel(win_row, win_col, self.dim)?
        } else {
            // Lay the window out as if it started one column earlier, so its first
            // column gets the stagger of an odd column.
            let bound = GridPoint::new(self.dim.row, self.dim.col + 1);
            let shifted = Self::hex_from_pixel(win_row, win_col.checked_add(COL_STRIDE)?, bound)?;
            if shifted.col == 0 {
                return None;
            }
            GridPoint::new(shifted.row, shifted.col - 1)
        };
        Some(self.to_absolute(rel))
    }

    /// New start of the window along one axis so that `target` is shown.
    fn follow(pos: i32, dim: i32, max: i32, target: i32) -> i32 {
        if target < pos {
            target.max(0)
        } else if target >= pos + dim {
            (target - dim + 1).min(max - dim)
        } else {
            pos
        }
    }

    fn move_to(&mut self, new_pos: GridPoint) -> bool {
        if new_pos == self.pos {
            return false;
        }
        debug!("Viewport pos from: {} to: {}", self.pos, new_pos);
        self.pos = new_pos;
        true
    }
}
