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
//! Transient annotations placed on cells while a ship is selected.
use crate::board::Direction;

/// What a move marker says about the cell it sits on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveMarker {
    /// The cell holds the selected ship. Only used for highlighting; never a valid
    /// move target.
    Origin,
    /// The selected ship may move here and will face the given direction on arrival.
    Toward(Direction),
}

/// A marker on a cell. A cell carries at most one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Marker {
    Move(MoveMarker),
}

impl Marker {
    /// Marker for the selected ship's own cell.
    pub const ORIGIN: Marker = Marker::Move(MoveMarker::Origin);

    /// Marker for a legal destination reached facing `dir`.
    pub fn toward(dir: Direction) -> Self {
        Marker::Move(MoveMarker::Toward(dir))
    }

    /// If this marker is a move destination, get the direction the ship will face.
    pub fn destination(&self) -> Option<Direction> {
        match self {
            Marker::Move(MoveMarker::Toward(dir)) => Some(*dir),
            Marker::Move(MoveMarker::Origin) => None,
        }
    }

    /// Returns true if this marker highlights the selected ship.
    pub fn is_origin(&self) -> bool {
        matches!(self, Marker::Move(MoveMarker::Origin))
    }

    /// Glyph drawn on top of the hex for this marker, if any.
    pub fn glyph(&self) -> Option<char> {
        self.destination().map(Direction::arrow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_not_a_destination() {
        assert_eq!(Marker::ORIGIN.destination(), None);
        assert!(Marker::ORIGIN.is_origin());
        assert_eq!(Marker::ORIGIN.glyph(), None);
    }

    #[test]
    fn toward_carries_direction() {
        let marker = Marker::toward(Direction::SW);
        assert_eq!(marker.destination(), Some(Direction::SW));
        assert!(!marker.is_origin());
        assert_eq!(marker.glyph(), Some('\u{2B0B}'));
    }
}
