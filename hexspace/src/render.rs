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
//! Rendering support: the character layout of a single hex, background shading, a cache
//! of color pairs, and a driver that walks the viewport and hands every visible hex to
//! a [`RenderSink`].

use std::collections::HashMap;

use log::debug;

use crate::{
    board::{GridPoint, Marker, ObjectArea},
    ships::{ShipId, ShipInstance},
    viewport::Viewport,
};

/// Height and width of a hex in characters.
pub const HEX_SIZE: usize = 4;

/// Characters of the `HEX_SIZE` square that belong to the hex. The four corners are cut.
pub const HEX_MASK: [[bool; HEX_SIZE]; HEX_SIZE] = [
    [false, true, true, false],
    [true, true, true, true],
    [true, true, true, true],
    [false, true, true, false],
];

/// Number of background shades used so neighboring hexes can be told apart.
pub const NUM_SHADES: usize = 3;

/// Returns true if the character at `row`/`col` of a hex square is part of the hex.
pub fn is_hex_pixel(row: usize, col: usize) -> bool {
    row < HEX_SIZE && col < HEX_SIZE && HEX_MASK[row][col]
}

/// Background shade of the hex at `point`. No two neighbors share a shade.
pub fn shade(point: GridPoint) -> usize {
    (point.row + 2 * point.col.rem_euclid(2)).rem_euclid(NUM_SHADES as i32) as usize
}

/// What is shown on a single hex.
#[derive(Debug)]
pub struct HexView<'a, I> {
    /// Absolute index of the hex.
    pub index: GridPoint,
    /// Ship on the hex, if any.
    pub ship: Option<&'a ShipInstance<I>>,
    /// Marker on the hex, if any.
    pub marker: Option<Marker>,
    /// Background shade, below [`NUM_SHADES`].
    pub shade: usize,
    /// The hex is under the cursor.
    pub highlight: bool,
}

/// Output device that draws hexes. `upper_left` is the character offset of the hex
/// inside the window, as computed by [`Viewport::get_upper_left`].
pub trait RenderSink<I> {
    fn draw_hex(&mut self, upper_left: GridPoint, hex: &HexView<'_, I>);
}

/// Source of color pair handles for a foreground and background color. Asking twice
/// for the same colors must give the same handle.
pub trait ColorPairs {
    fn pair(&mut self, fg: i16, bg: i16) -> i16;
}

/// Hands out color pair handles in the order colors are first requested.
#[derive(Debug, Clone)]
pub struct PairCache {
    pairs: HashMap<(i16, i16), i16>,
    start: i16,
    limit: usize,
}

impl PairCache {
    /// First handle given out. Lower handles are left to the terminal's defaults.
    pub const START: i16 = 8;
    /// Default number of pairs a cache can hold.
    pub const DEFAULT_LIMIT: usize = 64;

    /// Create an empty cache that holds up to `limit` pairs.
    pub fn new(limit: usize) -> Self {
        Self {
            pairs: HashMap::new(),
            start: Self::START,
            limit,
        }
    }

    /// Get the handle for a pair without creating it.
    pub fn get(&self, fg: i16, bg: i16) -> Option<i16> {
        self.pairs.get(&(fg, bg)).copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(handle, fg, bg)` for every pair, in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (i16, i16, i16)> {
        let mut pairs: Vec<_> = self
            .pairs
            .iter()
            .map(|(&(fg, bg), &handle)| (handle, fg, bg))
            .collect();
        pairs.sort_unstable();
        pairs.into_iter()
    }
}

impl Default for PairCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

impl ColorPairs for PairCache {
    /// Panics if a new pair is needed and the cache is full.
    fn pair(&mut self, fg: i16, bg: i16) -> i16 {
        if let Some(handle) = self.get(fg, bg) {
            return handle;
        }
        if self.pairs.len() >= self.limit {
            panic!("Too many color pairs: {}", self.limit);
        }
        let handle = self.start + self.pairs.len() as i16;
        debug!("color pair: {} fg: {} bg: {}", handle, fg, bg);
        self.pairs.insert((fg, bg), handle);
        handle
    }
}

/// Draw every hex of the window onto `sink`. The hex at `cursor`, if visible, is drawn
/// highlighted. Returns the number of hexes drawn.
pub fn render_viewport<I: ShipId, S: RenderSink<I> + ?Sized>(
    area: &ObjectArea<I>,
    viewport: &Viewport,
    cursor: Option<GridPoint>,
    sink: &mut S,
) -> usize {
    let mut drawn = 0;
    for index in viewport.visible() {
        let cell = match area.try_get(index) {
            Some(cell) => cell,
            None => continue,
        };
        let view = HexView {
            index,
            ship: cell.ship(),
            marker: cell.marker(),
            shade: shade(index),
            highlight: cursor == Some(index),
        };
        sink.draw_hex(viewport.get_upper_left(index), &view);
        drawn += 1;
    }
    drawn
}
