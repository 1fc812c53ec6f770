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
//! Errors used by the [`ObjectArea`][crate::board::ObjectArea].
use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::GridPoint, ships::ShipInstance};

/// Invalid grid size.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum DimensionError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    NotPositive { rows: i32, cols: i32 },
    #[error("grid of {rows}x{cols} hexes is too large")]
    TooLarge { rows: i32, cols: i32 },
}

/// Reason why a ship could not be placed on the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The requested position is not on the grid.
    #[error("the requested position is out of bounds")]
    OutOfBounds,
    /// Another ship already occupies the requested position.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
    /// A ship with the same ID is already on the grid.
    #[error("ship was already placed")]
    AlreadyPlaced,
}

/// Error caused when attempting to place a ship in an invalid position. Hands the ship
/// back to the caller.
#[derive(Error)]
#[error("could not place ship {:?} at {point}: {reason}", .ship.id())]
pub struct PlaceError<I: Debug> {
    #[source]
    reason: CannotPlaceReason,
    point: GridPoint,
    ship: ShipInstance<I>,
}

impl<I: Debug> Debug for PlaceError<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<I: Debug> PlaceError<I> {
    /// Construct a placement error from a reason, position, and the rejected ship.
    pub(super) fn new(reason: CannotPlaceReason, point: GridPoint, ship: ShipInstance<I>) -> Self {
        Self {
            reason,
            point,
            ship,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the position where placement was attempted.
    pub fn point(&self) -> GridPoint {
        self.point
    }

    /// Get a reference to the ship that was not placed.
    pub fn ship(&self) -> &ShipInstance<I> {
        &self.ship
    }

    /// Extract the ship from this error.
    pub fn into_ship(self) -> ShipInstance<I> {
        self.ship
    }
}
