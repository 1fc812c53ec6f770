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
//! Spatial and movement engine for a turn-based game played on a grid of hexagons.
//!
//! The grid uses offset coordinates: hexes are laid out in rows and columns, and odd
//! columns are shifted half a hex down. An [`ObjectArea`][board::ObjectArea] holds the
//! cells of the grid, the ships on them and the markers that show where a selected ship
//! can go. The [`movement`] module projects a ship's paths onto the grid as markers and
//! drives the select, project, move cycle. A [`Viewport`][viewport::Viewport] tracks
//! which part of the grid is on screen and converts between hex indexes and character
//! positions, and [`render`] walks the viewport to feed an output device.
//!
//! ```
//! use hexspace::{
//!     board::{Direction, GridPoint, HexDimensions, ObjectArea},
//!     movement::Selection,
//!     ships::{ShipInstance, ShipTypes},
//! };
//!
//! let catalog = ShipTypes::standard();
//! let mut area = ObjectArea::new(HexDimensions::new(5, 12));
//! let start = GridPoint::new(2, 2);
//! area.place_ship(start, ShipInstance::new("scout", ShipTypes::NORMAL, Direction::NN))
//!     .unwrap();
//!
//! let mut selection = Selection::default();
//! selection.select(&mut area, &catalog, start).unwrap();
//! selection.commit(&mut area, GridPoint::new(1, 1)).unwrap();
//! assert_eq!(area.ship_at(GridPoint::new(1, 1)).unwrap().direction(), Direction::NW);
//! ```

pub mod board;
pub mod movement;
pub mod render;
pub mod ships;
pub mod viewport;
