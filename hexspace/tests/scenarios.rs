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
//! End to end checks of selecting, projecting and moving ships while the viewport
//! follows along.

use hexspace::{
    board::{Direction, GridPoint, HexDimensions, Marker, MoveMarker, ObjectArea},
    movement::{clear_markers, mark_origin, project_path, MoveError, Selection},
    ships::{ShipInstance, ShipTypes},
    viewport::Viewport,
};

fn area() -> ObjectArea<u32> {
    ObjectArea::new(HexDimensions::new(5, 12))
}

#[test]
fn left_turn_from_center() {
    let mut area = area();
    let start = GridPoint::new(2, 2);
    area.place_ship(start, ShipInstance::new(1, ShipTypes::NORMAL, Direction::NN))
        .unwrap();
    mark_origin(&mut area, start);

    let dest = project_path(&mut area, start, &"l".parse().unwrap());
    assert_eq!(dest, Some(GridPoint::new(1, 1)));
    assert_eq!(
        area.marker(GridPoint::new(1, 1)),
        Some(Marker::Move(MoveMarker::Toward(Direction::NW)))
    );
    assert_eq!(area.marker(start), Some(Marker::ORIGIN));
    assert!(area.can_move_to(GridPoint::new(1, 1)));
    assert!(!area.can_move_to(start));

    area.move_ship(start, GridPoint::new(1, 1), Direction::NW);
    assert_eq!(clear_markers(&mut area), 2);
    assert_eq!(area.ship_at(GridPoint::new(1, 1)).unwrap().direction(), Direction::NW);
}

#[test]
fn straight_off_the_top_edge() {
    let mut area = area();
    area.place_ship(GridPoint::ORIGIN, ShipInstance::new(1, ShipTypes::NORMAL, Direction::NN))
        .unwrap();
    assert_eq!(project_path(&mut area, GridPoint::ORIGIN, &"c".parse().unwrap()), None);
    assert_eq!(area.markers().count(), 0);
}

#[test]
fn click_outside_and_inside_hexes() {
    let max = GridPoint::new(3, 3);
    assert_eq!(Viewport::hex_from_pixel(0, 0, max), None);
    assert_eq!(Viewport::hex_from_pixel(0, 1, max), Some(GridPoint::new(0, 0)));
}

#[test]
fn viewport_follows_target() {
    let mut viewport = Viewport::new(GridPoint::new(5, 5), GridPoint::new(10, 10)).unwrap();
    viewport.scroll_by(GridPoint::new(2, 2));
    assert!(viewport.update(GridPoint::new(7, 7)));
    assert_eq!(viewport.pos(), GridPoint::new(3, 3));
    assert!(!viewport.update(GridPoint::new(3, 3)));
}

#[test]
fn ship_walks_across_the_screen() {
    let catalog = ShipTypes::standard();
    let mut area = ObjectArea::new(HexDimensions::new(10, 20));
    let mut viewport = Viewport::new(GridPoint::new(4, 4), area.dimensions().max()).unwrap();
    let mut selection = Selection::default();
    let mut pos = GridPoint::new(1, 1);
    area.place_ship(pos, ShipInstance::new("runner", ShipTypes::NORMAL, Direction::SE))
        .unwrap();

    for _ in 0..8 {
        selection.select(&mut area, &catalog, pos).unwrap();
        // Always take the straight two-step move.
        let target = GridPoint::new(pos.row + 1, pos.col + 2);
        assert!(selection.targets().contains(&target), "{} from {}", target, pos);

        // Click the middle of the target hex.
        viewport.update(target);
        let ul = viewport.get_upper_left(target);
        let clicked = viewport.hex_at(ul.row + 1, ul.col + 1).unwrap();
        assert_eq!(clicked, target);

        pos = selection.commit(&mut area, clicked).unwrap();
        assert!(viewport.inside(pos));
    }
    assert_eq!(area.find_ship("runner"), Some(GridPoint::new(9, 17)));
    assert_eq!(selection.commit(&mut area, pos), Err(MoveError::NothingSelected));
}

#[test]
fn blocked_moves_are_not_offered() {
    let catalog = ShipTypes::standard();
    let mut area = area();
    let start = GridPoint::new(2, 2);
    area.place_ship(start, ShipInstance::new(1, ShipTypes::NORMAL, Direction::NN))
        .unwrap();
    area.place_ship(GridPoint::new(1, 2), ShipInstance::new(2, ShipTypes::NORMAL, Direction::SS))
        .unwrap();

    let mut selection = Selection::default();
    let targets = selection.select(&mut area, &catalog, start).unwrap().to_vec();
    assert_eq!(targets.len(), 5);
    assert!(!targets.contains(&GridPoint::new(1, 2)));
    assert_eq!(
        selection.commit(&mut area, GridPoint::new(1, 2)),
        Err(MoveError::NotReachable(GridPoint::new(1, 2)))
    );

    // Selecting the other ship drops the first ship's markers.
    selection.select(&mut area, &catalog, GridPoint::new(1, 2)).unwrap();
    assert_eq!(area.marker(start), None);
    assert_eq!(selection.selected(), Some(GridPoint::new(1, 2)));
}
