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
//! The object area: the grid of hexes, what occupies each of them, and the markers
//! placed on them.

use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use enumflags2::BitFlags;
use log::debug;

use crate::ships::{ShipId, ShipInstance};

use self::grid::Grid;
pub use self::{
    dimensions::HexDimensions,
    direction::{neighbor, Direction, Path, PathParseError, Turn, NUM_DIRECTIONS},
    errors::{CannotPlaceReason, DimensionError, PlaceError},
    grid::Cell,
    marker::{Marker, MoveMarker},
    point::GridPoint,
};

mod dimensions;
pub mod direction;
mod errors;
mod grid;
mod marker;
mod point;

/// The authoritative grid of occupancy and markers, plus the adjacency graph between
/// cells. The size is fixed when the area is built.
#[derive(Debug)]
pub struct ObjectArea<I: ShipId> {
    /// Cells of the area.
    grid: Grid<I>,

    /// Arena index of the cell holding each ship on the grid.
    ships: HashMap<I, usize>,
}

impl<I: ShipId> ObjectArea<I> {
    /// Build an empty area with the given dimensions, linking every cell to its
    /// neighbors.
    pub fn new(dim: HexDimensions) -> Self {
        debug!("Creating object area with: {}/{}", dim.rows(), dim.cols());
        Self {
            grid: Grid::new(dim),
            ships: HashMap::new(),
        }
    }

    /// Get the [`HexDimensions`] of this area.
    pub fn dimensions(&self) -> &HexDimensions {
        &self.grid.dim
    }

    /// Get the cell at the given position. Panics if the position is out of bounds.
    pub fn get(&self, pos: GridPoint) -> &Cell<I> {
        &self.grid[pos]
    }

    /// Get the cell at the given position, or `None` if it is out of bounds.
    pub fn try_get(&self, pos: GridPoint) -> Option<&Cell<I>> {
        self.grid.get(&pos)
    }

    /// Iterate over every cell, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell<I>> {
        self.grid.cells.iter()
    }

    /// Get the cell adjacent to `pos` in direction `dir`, or `None` at the edge of the
    /// grid. Panics if `pos` is out of bounds.
    pub fn neighbor_of(&self, pos: GridPoint, dir: Direction) -> Option<&Cell<I>> {
        let idx = self.index(pos);
        self.grid.step(idx, dir).map(|n| &self.grid.cells[n])
    }

    /// The set of directions in which the cell at `pos` has a neighbor. Panics if `pos`
    /// is out of bounds.
    pub fn exits(&self, pos: GridPoint) -> BitFlags<Direction> {
        self.get(pos).exits()
    }

    /// Get the ship at the given position, if any.
    pub fn ship_at(&self, pos: GridPoint) -> Option<&ShipInstance<I>> {
        self.try_get(pos).and_then(Cell::ship)
    }

    /// Get the position of the ship with the given ID, if it is on the grid.
    pub fn find_ship<Q: ?Sized>(&self, id: &Q) -> Option<GridPoint>
    where
        I: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.ships.get(id).map(|&idx| self.grid.cells[idx].position)
    }

    /// Iterate over all ships on the grid and their positions.
    pub fn ships(&self) -> impl Iterator<Item = (GridPoint, &ShipInstance<I>)> {
        self.iter_cells()
            .filter_map(|cell| cell.ship().map(|ship| (cell.position, ship)))
    }

    /// Put a ship onto an empty cell. On failure the ship is handed back inside the
    /// error.
    pub fn place_ship(&mut self, pos: GridPoint, ship: ShipInstance<I>) -> Result<(), PlaceError<I>> {
        let idx = match self.grid.index_of(&pos) {
            Some(idx) => idx,
            None => return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, pos, ship)),
        };
        if self.ships.contains_key(ship.id()) {
            return Err(PlaceError::new(CannotPlaceReason::AlreadyPlaced, pos, ship));
        }
        let cell = &mut self.grid.cells[idx];
        if cell.ship.is_some() {
            return Err(PlaceError::new(CannotPlaceReason::AlreadyOccupied, pos, ship));
        }
        debug!("Placing ship {:?} at: {}", ship.id(), pos);
        self.ships.insert(ship.id().clone(), idx);
        cell.ship = Some(ship);
        Ok(())
    }

    /// Remove the ship at the given position from the grid and return it. Any marker on
    /// the cell stays in place.
    pub fn take_ship(&mut self, pos: GridPoint) -> Option<ShipInstance<I>> {
        let ship = self.grid.get_mut(&pos)?.ship.take()?;
        self.ships.remove(ship.id());
        Some(ship)
    }

    /// Move the ship at `from` to the empty cell `to`, turning it to face `new_dir`.
    ///
    /// Callers are expected to have validated the target with
    /// [`can_move_to`][ObjectArea::can_move_to]. Panics without changing anything if
    /// `from` holds no ship, `to` is occupied, or either is out of bounds.
    pub fn move_ship(&mut self, from: GridPoint, to: GridPoint, new_dir: Direction) {
        let from_idx = self.index(from);
        let to_idx = self.index(to);
        if self.grid.cells[from_idx].ship.is_none() {
            panic!("Source is not a ship: {}", from);
        }
        if self.grid.cells[to_idx].ship.is_some() {
            panic!("Target is not empty: {}", to);
        }
        if let Some(mut ship) = self.grid.cells[from_idx].ship.take() {
            debug!("Moving ship {:?} from: {} to: {} facing: {}", ship.id(), from, to, new_dir);
            ship.set_direction(new_dir);
            self.ships.insert(ship.id().clone(), to_idx);
            self.grid.cells[to_idx].ship = Some(ship);
        }
    }

    /// Returns true if a ship may move onto the cell: the cell carries a move marker with
    /// a direction. Out of bounds positions are never valid targets.
    pub fn can_move_to(&self, pos: GridPoint) -> bool {
        self.marker(pos)
            .map_or(false, |marker| marker.destination().is_some())
    }

    /// Get the marker at the given position, if any.
    pub fn marker(&self, pos: GridPoint) -> Option<Marker> {
        self.try_get(pos).and_then(Cell::marker)
    }

    /// Place a marker on the cell at `pos`. If the cell already has a marker, it is kept
    /// and returned as the error.
    ///
    /// Panics if `pos` is out of bounds, if an origin marker is placed on a cell without
    /// a ship, or if a destination marker is placed on an occupied cell.
    pub fn set_marker(&mut self, pos: GridPoint, marker: Marker) -> Result<(), Marker> {
        let cell = &mut self.grid[pos];
        if let Some(existing) = cell.marker {
            return Err(existing);
        }
        match marker.destination() {
            Some(dir) if cell.ship.is_some() => {
                panic!("Object {} is a ship and marker dir is: {}", pos, dir)
            }
            None if cell.ship.is_none() => panic!("Object {} has no ship to highlight", pos),
            _ => {}
        }
        cell.marker = Some(marker);
        Ok(())
    }

    /// Remove the marker from the cell at `pos`, returning it.
    pub fn clear_marker(&mut self, pos: GridPoint) -> Option<Marker> {
        self.grid.get_mut(&pos).and_then(|cell| cell.marker.take())
    }

    /// Remove every marker from the area. Returns how many were removed.
    pub fn clear_markers(&mut self) -> usize {
        self.grid
            .cells
            .iter_mut()
            .filter_map(|cell| cell.marker.take())
            .count()
    }

    /// Iterate over the positions and markers of all marked cells.
    pub fn markers(&self) -> impl Iterator<Item = (GridPoint, Marker)> + '_ {
        self.iter_cells()
            .filter_map(|cell| cell.marker.map(|marker| (cell.position, marker)))
    }

    /// Follow the precomputed link from `pos` toward `dir`. Returns `None` at the edge of
    /// the grid.
    pub(crate) fn step(&self, pos: GridPoint, dir: Direction) -> Option<GridPoint> {
        self.neighbor_of(pos, dir).map(Cell::position)
    }

    /// Arena index of `pos`, panicking if it is out of bounds.
    fn index(&self, pos: GridPoint) -> usize {
        self.grid.dim.linearize(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::ShipTypes;

    fn ship(id: u32, dir: Direction) -> ShipInstance<u32> {
        ShipInstance::new(id, ShipTypes::NORMAL, dir)
    }

    fn area() -> ObjectArea<u32> {
        ObjectArea::new(HexDimensions::new(5, 12))
    }

    #[test]
    fn place_and_find() {
        let mut area = area();
        area.place_ship(GridPoint::new(2, 2), ship(1, Direction::NN)).unwrap();
        assert_eq!(area.find_ship(&1), Some(GridPoint::new(2, 2)));
        assert!(!area.get(GridPoint::new(2, 2)).is_empty());
        assert_eq!(area.ships().count(), 1);
    }

    #[test]
    fn place_rejects_conflicts() {
        let mut area = area();
        area.place_ship(GridPoint::new(2, 2), ship(1, Direction::NN)).unwrap();

        let err = area.place_ship(GridPoint::new(2, 2), ship(2, Direction::SS)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(*err.into_ship().id(), 2);

        let err = area.place_ship(GridPoint::new(0, 0), ship(1, Direction::SS)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyPlaced);

        let err = area.place_ship(GridPoint::new(5, 0), ship(3, Direction::SS)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert_eq!(err.point(), GridPoint::new(5, 0));
    }

    #[test]
    fn move_updates_position_and_direction() {
        let mut area = area();
        area.place_ship(GridPoint::new(2, 2), ship(7, Direction::NN)).unwrap();
        area.move_ship(GridPoint::new(2, 2), GridPoint::new(1, 1), Direction::NW);
        assert!(area.get(GridPoint::new(2, 2)).is_empty());
        let moved = area.ship_at(GridPoint::new(1, 1)).unwrap();
        assert_eq!(moved.direction(), Direction::NW);
        assert_eq!(area.find_ship(&7), Some(GridPoint::new(1, 1)));
    }

    #[test]
    #[should_panic(expected = "Source is not a ship")]
    fn move_from_empty_cell_panics() {
        area().move_ship(GridPoint::new(0, 0), GridPoint::new(0, 1), Direction::SE);
    }

    #[test]
    #[should_panic(expected = "Target is not empty")]
    fn move_onto_ship_panics() {
        let mut area = area();
        area.place_ship(GridPoint::new(0, 0), ship(1, Direction::NN)).unwrap();
        area.place_ship(GridPoint::new(0, 1), ship(2, Direction::NN)).unwrap();
        area.move_ship(GridPoint::new(0, 0), GridPoint::new(0, 1), Direction::SE);
    }

    #[test]
    fn failed_move_leaves_area_untouched() {
        let mut area = area();
        area.place_ship(GridPoint::new(0, 0), ship(1, Direction::NN)).unwrap();
        area.place_ship(GridPoint::new(0, 1), ship(2, Direction::NN)).unwrap();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            area.move_ship(GridPoint::new(0, 0), GridPoint::new(0, 1), Direction::SE)
        }));
        assert!(result.is_err());
        assert_eq!(area.find_ship(&1), Some(GridPoint::new(0, 0)));
        assert_eq!(area.ship_at(GridPoint::new(0, 0)).unwrap().direction(), Direction::NN);
        assert_eq!(area.find_ship(&2), Some(GridPoint::new(0, 1)));
    }

    #[test]
    fn can_move_to_requires_destination_marker() {
        let mut area = area();
        area.place_ship(GridPoint::new(2, 2), ship(1, Direction::NN)).unwrap();
        assert!(!area.can_move_to(GridPoint::new(1, 2)));

        area.set_marker(GridPoint::new(2, 2), Marker::ORIGIN).unwrap();
        assert!(!area.can_move_to(GridPoint::new(2, 2)));

        area.set_marker(GridPoint::new(1, 2), Marker::toward(Direction::NN)).unwrap();
        assert!(area.can_move_to(GridPoint::new(1, 2)));
        assert!(!area.can_move_to(GridPoint::new(-1, 2)));
    }

    #[test]
    fn set_marker_keeps_existing() {
        let mut area = area();
        let pos = GridPoint::new(1, 1);
        area.set_marker(pos, Marker::toward(Direction::NE)).unwrap();
        assert_eq!(
            area.set_marker(pos, Marker::toward(Direction::NW)),
            Err(Marker::toward(Direction::NE))
        );
        assert_eq!(area.clear_markers(), 1);
        assert_eq!(area.marker(pos), None);
    }

    #[test]
    #[should_panic(expected = "no ship to highlight")]
    fn origin_marker_needs_ship() {
        area().set_marker(GridPoint::new(1, 1), Marker::ORIGIN).ok();
    }

    #[test]
    fn take_ship_removes_from_index() {
        let mut area = area();
        area.place_ship(GridPoint::new(3, 3), ship(4, Direction::SE)).unwrap();
        let taken = area.take_ship(GridPoint::new(3, 3)).unwrap();
        assert_eq!(*taken.id(), 4);
        assert_eq!(area.find_ship(&4), None);
        area.place_ship(GridPoint::new(0, 0), taken).unwrap();
        assert_eq!(area.find_ship(&4), Some(GridPoint::new(0, 0)));
    }

    #[test]
    fn neighbor_links() {
        let area = area();
        let nw = area.neighbor_of(GridPoint::new(2, 2), Direction::NW).unwrap();
        assert_eq!(nw.position(), GridPoint::new(1, 1));
        assert!(area.neighbor_of(GridPoint::new(0, 0), Direction::NN).is_none());
        assert_eq!(area.exits(GridPoint::new(4, 11)), Direction::NN | Direction::NW);
    }
}
