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
//! Arena of cells that make up the object area, with neighbor links stored as indexes
//! into the same arena.
use std::ops::{Index, IndexMut};

use enumflags2::BitFlags;

use crate::{
    board::{direction, Direction, GridPoint, HexDimensions, Marker, NUM_DIRECTIONS},
    ships::ShipInstance,
};

/// A single hex of the object area.
#[derive(Debug)]
pub struct Cell<I> {
    /// Where this cell sits in the grid.
    pub(super) position: GridPoint,

    /// The ship that occupies this cell, if any.
    pub(super) ship: Option<ShipInstance<I>>,

    /// Marker placed on this cell by the movement projector, if any.
    pub(super) marker: Option<Marker>,

    /// Arena index of the adjacent cell for each [`Direction`], or `None` past the edge
    /// of the grid. Fixed once the grid is built.
    pub(super) neighbors: [Option<usize>; NUM_DIRECTIONS],
}

impl<I> Cell<I> {
    /// The grid position of this cell.
    pub fn position(&self) -> GridPoint {
        self.position
    }

    /// The ship on this cell, if any.
    pub fn ship(&self) -> Option<&ShipInstance<I>> {
        self.ship.as_ref()
    }

    /// Returns true if nothing occupies this cell.
    pub fn is_empty(&self) -> bool {
        self.ship.is_none()
    }

    /// The marker on this cell, if any.
    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    /// Whether the grid continues past this cell in the given direction.
    pub fn has_neighbor(&self, dir: Direction) -> bool {
        self.neighbors[dir.index()].is_some()
    }

    /// The set of directions in which this cell has a neighbor.
    pub fn exits(&self) -> BitFlags<Direction> {
        Direction::ALL
            .iter()
            .filter(|dir| self.has_neighbor(**dir))
            .fold(BitFlags::empty(), |acc, dir| acc | *dir)
    }
}

/// Storage for the cells of the object area.
#[derive(Debug)]
pub(super) struct Grid<I> {
    /// Dimensions of this grid.
    pub(super) dim: HexDimensions,
    /// Cells that make up this grid, row by row.
    pub(super) cells: Box<[Cell<I>]>,
}

impl<I> Grid<I> {
    /// Build an empty grid and link every cell to its in-bounds neighbors.
    pub(super) fn new(dim: HexDimensions) -> Self {
        let cells = (0..dim.total_size())
            .map(|idx| {
                let position = dim.un_linearize(idx);
                let mut neighbors = [None; NUM_DIRECTIONS];
                for dir in Direction::ALL.iter().copied() {
                    neighbors[dir.index()] = dim.try_linearize(&direction::neighbor(position, dir));
                }
                Cell {
                    position,
                    ship: None,
                    marker: None,
                    neighbors,
                }
            })
            .collect();
        Self { dim, cells }
    }

    /// Get the arena index of the cell at the given point.
    pub(super) fn index_of(&self, point: &GridPoint) -> Option<usize> {
        self.dim.try_linearize(point)
    }

    /// Get a reference to the cell at the given point.
    pub(super) fn get(&self, point: &GridPoint) -> Option<&Cell<I>> {
        self.index_of(point).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given point.
    pub(super) fn get_mut(&mut self, point: &GridPoint) -> Option<&mut Cell<I>> {
        self.index_of(point).and_then(move |i| self.cells.get_mut(i))
    }

    /// Follow the neighbor link of the cell at `idx` in direction `dir`.
    pub(super) fn step(&self, idx: usize, dir: Direction) -> Option<usize> {
        self.cells[idx].neighbors[dir.index()]
    }
}

impl<I> Index<GridPoint> for Grid<I> {
    type Output = Cell<I>;

    fn index(&self, point: GridPoint) -> &Self::Output {
        match self.get(&point) {
            Some(cell) => cell,
            None => panic!("coordinate {} out of bounds", point),
        }
    }
}

impl<I> IndexMut<GridPoint> for Grid<I> {
    fn index_mut(&mut self, point: GridPoint) -> &mut Self::Output {
        match self.get_mut(&point) {
            Some(cell) => cell,
            None => panic!("coordinate {} out of bounds", point),
        }
    }
}
