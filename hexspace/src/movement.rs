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
//! Projection of move markers for a selected ship, and the selection cycle that turns a
//! marked destination into a move.

use log::debug;
use thiserror::Error;

use crate::{
    board::{GridPoint, Marker, ObjectArea, Path},
    ships::{ShipCatalog, ShipId},
};

/// Mark the cell of the ship at `pos` as the origin of a move.
///
/// Panics if there is no ship at `pos`.
pub fn mark_origin<I: ShipId>(area: &mut ObjectArea<I>, pos: GridPoint) {
    if area.ship_at(pos).is_none() {
        panic!("Object {} is not a ship", pos);
    }
    if let Err(existing) = area.set_marker(pos, Marker::ORIGIN) {
        debug!("Origin {} already marked with {:?}", pos, existing);
    }
}

/// Walk `path` from the ship at `pos`, turning before each step, and mark the cell where
/// it ends with the direction the ship would face on arrival.
///
/// Returns the destination, or `None` if the walk leaves the grid, ends on an occupied
/// cell, or ends on a cell another path already marked. Panics if there is no ship at
/// `pos`.
pub fn project_path<I: ShipId>(
    area: &mut ObjectArea<I>,
    pos: GridPoint,
    path: &Path,
) -> Option<GridPoint> {
    let mut dir = match area.ship_at(pos) {
        Some(ship) => ship.direction(),
        None => panic!("Object {} is not a ship", pos),
    };
    let mut cur = pos;
    for &turn in path.turns() {
        dir = dir.rotate(turn);
        cur = match area.step(cur, dir) {
            Some(next) => next,
            None => {
                debug!("Path {} from {} leaves the grid at {}", path, pos, cur);
                return None;
            }
        };
    }
    if !area.get(cur).is_empty() {
        debug!("Path {} from {} ends on occupied {}", path, pos, cur);
        return None;
    }
    match area.set_marker(cur, Marker::toward(dir)) {
        Ok(()) => {
            debug!("Path {} from {} marks {} facing {}", path, pos, cur, dir);
            Some(cur)
        }
        Err(existing) => {
            debug!("Path {} from {} ends on {} already marked {:?}", path, pos, cur, existing);
            None
        }
    }
}

/// Mark the origin of the ship at `pos` and project every path its class can take.
/// Returns the destinations that were marked.
pub fn project_ship<I: ShipId, C: ShipCatalog + ?Sized>(
    area: &mut ObjectArea<I>,
    pos: GridPoint,
    catalog: &C,
) -> Vec<GridPoint> {
    let class = match area.ship_at(pos) {
        Some(ship) => ship.class(),
        None => panic!("Object {} is not a ship", pos),
    };
    mark_origin(area, pos);
    catalog
        .paths(class)
        .iter()
        .filter_map(|path| project_path(area, pos, path))
        .collect()
}

/// Remove every marker from the area.
pub fn clear_markers<I: ShipId>(area: &mut ObjectArea<I>) -> usize {
    area.clear_markers()
}

/// Error for a selection step that cannot be carried out.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum MoveError {
    /// There is no ship at the position to select.
    #[error("there is no ship at {0}")]
    NoShip(GridPoint),
    /// A move was requested with no ship selected.
    #[error("no ship is selected")]
    NothingSelected,
    /// The target does not carry a destination marker.
    #[error("{0} is not reachable from the selected ship")]
    NotReachable(GridPoint),
}

/// Where the player is in the select, project, move cycle.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Selection {
    /// Nothing selected, no markers on the area.
    Idle,
    /// A ship is selected but its moves are not shown.
    Selected(GridPoint),
    /// A ship is selected and its reachable destinations are marked.
    Projected {
        origin: GridPoint,
        targets: Vec<GridPoint>,
    },
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Idle
    }
}

impl Selection {
    /// Position of the selected ship, if any.
    pub fn selected(&self) -> Option<GridPoint> {
        match self {
            Selection::Idle => None,
            Selection::Selected(pos) => Some(*pos),
            Selection::Projected { origin, .. } => Some(*origin),
        }
    }

    /// Destinations currently marked for the selected ship.
    pub fn targets(&self) -> &[GridPoint] {
        match self {
            Selection::Projected { targets, .. } => targets,
            _ => &[],
        }
    }

    /// Select the ship at `pos` and mark its moves, replacing any previous selection.
    /// Returns the marked destinations.
    pub fn select<I: ShipId, C: ShipCatalog + ?Sized>(
        &mut self,
        area: &mut ObjectArea<I>,
        catalog: &C,
        pos: GridPoint,
    ) -> Result<&[GridPoint], MoveError> {
        if area.ship_at(pos).is_none() {
            return Err(MoveError::NoShip(pos));
        }
        area.clear_markers();
        *self = Selection::Selected(pos);
        self.project(area, catalog)
    }

    /// Mark the moves of the currently selected ship. Does nothing if they are already
    /// marked.
    pub fn project<I: ShipId, C: ShipCatalog + ?Sized>(
        &mut self,
        area: &mut ObjectArea<I>,
        catalog: &C,
    ) -> Result<&[GridPoint], MoveError> {
        if let Selection::Selected(origin) = *self {
            let targets = project_ship(area, origin, catalog);
            debug!("Selected {} with {} reachable targets", origin, targets.len());
            *self = Selection::Projected { origin, targets };
        }
        if *self == Selection::Idle {
            return Err(MoveError::NothingSelected);
        }
        Ok(self.targets())
    }

    /// Move the selected ship onto `target`, which must carry a destination marker. The
    /// ship then stays selected at its new position, with markers cleared.
    pub fn commit<I: ShipId>(
        &mut self,
        area: &mut ObjectArea<I>,
        target: GridPoint,
    ) -> Result<GridPoint, MoveError> {
        let origin = match self {
            Selection::Projected { origin, .. } => *origin,
            _ => return Err(MoveError::NothingSelected),
        };
        let dir = area
            .marker(target)
            .and_then(|marker| marker.destination())
            .ok_or(MoveError::NotReachable(target))?;
        area.move_ship(origin, target, dir);
        area.clear_markers();
        *self = Selection::Selected(target);
        Ok(target)
    }

    /// Drop the selection and clear all markers.
    pub fn deselect<I: ShipId>(&mut self, area: &mut ObjectArea<I>) {
        area.clear_markers();
        *self = Selection::Idle;
    }
}
