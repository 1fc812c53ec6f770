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
//! Character screen that the viewport is rendered onto.

use std::io::{self, Write};

use hexspace::{
    board::{GridPoint, HexDimensions, Marker, MoveMarker, ObjectArea},
    render::{
        is_hex_pixel, render_viewport, ColorPairs, HexView, PairCache, RenderSink, HEX_SIZE,
        NUM_SHADES,
    },
    viewport::Viewport,
};
use rand::Rng;

/// On average one in this many characters of space is a star.
const STAR_RATIO: u32 = 24;

const WHITE: i16 = 15;
const SHIP_FG: i16 = 226;
const SPACE_NORMAL: [i16; NUM_SHADES] = [236, 238, 240];
const SPACE_HIGHLIGHT: [i16; NUM_SHADES] = [52, 88, 124];
const MARKER_NORMAL: [i16; NUM_SHADES] = [22, 28, 34];
const MARKER_HIGHLIGHT: [i16; NUM_SHADES] = [70, 76, 82];
const SHIP_BG: [i16; NUM_SHADES] = [17, 18, 19];

type HexPixels = [[bool; HEX_SIZE]; HEX_SIZE];

/// Random stars in the background of every hex of the grid. Stars stay in place when
/// the viewport scrolls.
pub struct Starfield {
    dim: HexDimensions,
    stars: Vec<HexPixels>,
}

impl Starfield {
    pub fn new(rng: &mut impl Rng, dim: HexDimensions) -> Self {
        let stars = (0..dim.total_size())
            .map(|_| {
                let mut hex = HexPixels::default();
                for (row, line) in hex.iter_mut().enumerate() {
                    for (col, star) in line.iter_mut().enumerate() {
                        *star = is_hex_pixel(row, col) && rng.gen_ratio(1, STAR_RATIO);
                    }
                }
                hex
            })
            .collect();
        Self { dim, stars }
    }

    fn is_star(&self, hex: GridPoint, row: usize, col: usize) -> bool {
        self.dim
            .try_linearize(&hex)
            .map_or(false, |idx| self.stars[idx][row][col])
    }
}

#[derive(Debug, Copy, Clone)]
struct Glyph {
    chr: char,
    pair: Option<i16>,
}

const BLANK: Glyph = Glyph { chr: ' ', pair: None };

/// A grid of characters big enough to hold the hexes of a viewport.
pub struct Screen {
    rows: usize,
    cols: usize,
    glyphs: Vec<Glyph>,
    colors: PairCache,
    stars: Starfield,
}

impl Screen {
    /// Create a screen for a window of `view` hexes.
    pub fn new(view: GridPoint, stars: Starfield) -> Self {
        let rows = view.row as usize * HEX_SIZE + HEX_SIZE / 2;
        let cols = view.col as usize * (HEX_SIZE - 1) + 1;
        Self {
            rows,
            cols,
            glyphs: vec![BLANK; rows * cols],
            colors: PairCache::default(),
            stars,
        }
    }

    /// Blank the whole screen.
    pub fn clear(&mut self) {
        for glyph in self.glyphs.iter_mut() {
            *glyph = BLANK;
        }
    }

    fn put(&mut self, row: i32, col: i32, glyph: Glyph) {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return;
        }
        self.glyphs[row as usize * self.cols + col as usize] = glyph;
    }

    /// Print the screen with a ruler of character positions along the top and left, so
    /// positions can be given to the click command. Colors are ANSI 256 color escapes.
    pub fn print(&self, out: &mut impl Write, color: bool) -> io::Result<()> {
        let palette: Vec<(i16, i16, i16)> = self.colors.iter().collect();
        write!(out, "    ")?;
        for col in 0..self.cols {
            write!(out, "{}", col % 10)?;
        }
        writeln!(out)?;
        for (row, line) in self.glyphs.chunks(self.cols).enumerate() {
            write!(out, "{:>3} ", row)?;
            for glyph in line {
                let colors = glyph.pair.and_then(|handle| {
                    palette
                        .iter()
                        .find(|&&(h, _, _)| h == handle)
                        .map(|&(_, fg, bg)| (fg, bg))
                });
                match colors {
                    Some((fg, bg)) if color => {
                        write!(out, "\x1b[38;5;{};48;5;{}m{}\x1b[0m", fg, bg, glyph.chr)?
                    }
                    _ => write!(out, "{}", glyph.chr)?,
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Redraw the viewport, highlighting the hex at `cursor`.
    pub fn render(
        &mut self,
        area: &ObjectArea<usize>,
        viewport: &Viewport,
        cursor: Option<GridPoint>,
    ) -> usize {
        self.clear();
        render_viewport(area, viewport, cursor, self)
    }
}

impl RenderSink<usize> for Screen {
    fn draw_hex(&mut self, upper_left: GridPoint, hex: &HexView<'_, usize>) {
        let shade = hex.shade;
        let bg = match (hex.ship, hex.marker, hex.highlight) {
            (_, Some(_), true) => MARKER_HIGHLIGHT[shade],
            (_, Some(_), false) => MARKER_NORMAL[shade],
            (_, None, true) => SPACE_HIGHLIGHT[shade],
            (Some(_), None, false) => SHIP_BG[shade],
            (None, None, false) => SPACE_NORMAL[shade],
        };
        for row in 0..HEX_SIZE {
            for col in 0..HEX_SIZE {
                if !is_hex_pixel(row, col) {
                    continue;
                }
                let center = (1..=2).contains(&row) && (1..=2).contains(&col);
                let (chr, fg) = match (hex.ship, hex.marker) {
                    (Some(ship), _) if center && row == 1 => (ship.direction().arrow(), SHIP_FG),
                    (Some(ship), _) if center => {
                        let digits = format!("{:02}", ship.id() % 100);
                        (digits.chars().nth(col - 1).unwrap_or('?'), SHIP_FG)
                    }
                    (Some(_), _) => ('#', SHIP_FG),
                    (None, Some(Marker::Move(MoveMarker::Toward(dir)))) if center => {
                        (dir.arrow(), WHITE)
                    }
                    _ if self.stars.is_star(hex.index, row, col) => ('.', WHITE),
                    _ => (' ', WHITE),
                };
                let pair = Some(self.colors.pair(fg, bg));
                self.put(
                    upper_left.row + row as i32,
                    upper_left.col + col as i32,
                    Glyph { chr, pair },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexspace::{
        board::Direction,
        ships::{ShipInstance, ShipTypes},
    };

    #[test]
    fn draws_ship_and_markers() {
        let dim = HexDimensions::new(3, 3);
        let mut area = ObjectArea::new(dim);
        area.place_ship(GridPoint::new(0, 0), ShipInstance::new(7, ShipTypes::NORMAL, Direction::SS))
            .unwrap();
        area.set_marker(GridPoint::new(0, 1), Marker::toward(Direction::SE)).unwrap();
        let viewport = Viewport::new(GridPoint::new(2, 2), dim.max()).unwrap();
        let mut screen = Screen::new(viewport.dim(), Starfield::new(&mut rand::thread_rng(), dim));

        assert_eq!(screen.render(&area, &viewport, None), 4);
        let mut out = Vec::new();
        screen.print(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), screen.rows + 1);
        assert!(lines[0].starts_with("    0123456"));
        // Ship at 0/0 faces south and has id 07.
        assert!(lines[2].contains(Direction::SS.arrow()));
        assert!(lines[3].contains("07"));
        // Marker at 0/1 is drawn two rows lower.
        assert!(lines[4].contains(Direction::SE.arrow()));
    }
}
