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
use std::collections::HashSet;

use proptest::prelude::*;

use hexspace::{
    board::{neighbor, Direction, GridPoint, HexDimensions, ObjectArea, Path, Turn},
    movement::project_path,
    ships::{ShipInstance, ShipTypes},
    viewport::Viewport,
};

fn direction() -> impl Strategy<Value = Direction> {
    (0usize..6).prop_map(Direction::from_index)
}

fn turn() -> impl Strategy<Value = Turn> {
    prop_oneof![Just(Turn::Left), Just(Turn::Center), Just(Turn::Right)]
}

fn path() -> impl Strategy<Value = Path> {
    proptest::collection::vec(turn(), 1..5).prop_map(Path::new)
}

#[derive(Debug, Clone)]
enum Op {
    Place(u8, GridPoint, Direction),
    Move(GridPoint, GridPoint, Direction),
    Take(GridPoint),
}

fn op() -> impl Strategy<Value = Op> {
    let point = || (0i32..6, 0i32..6).prop_map(GridPoint::from);
    prop_oneof![
        (0u8..8, point(), direction()).prop_map(|(id, p, d)| Op::Place(id, p, d)),
        (point(), point(), direction()).prop_map(|(f, t, d)| Op::Move(f, t, d)),
        point().prop_map(Op::Take),
    ]
}

proptest! {
    #[test]
    fn adjacency_is_symmetric(rows in 1i32..10, cols in 1i32..10) {
        let area: ObjectArea<u8> = ObjectArea::new(HexDimensions::new(rows, cols));
        for cell in area.iter_cells() {
            for &dir in Direction::ALL.iter() {
                if let Some(other) = area.neighbor_of(cell.position(), dir) {
                    let back = area.neighbor_of(other.position(), dir.opposite());
                    prop_assert_eq!(back.map(|c| c.position()), Some(cell.position()));
                }
                prop_assert_eq!(
                    cell.has_neighbor(dir),
                    area.dimensions().contains(&neighbor(cell.position(), dir))
                );
            }
        }
    }

    #[test]
    fn rotation_group_law(dir in direction()) {
        prop_assert_eq!(dir.rotate(Turn::Left).rotate(Turn::Right), dir);
        prop_assert_eq!(dir.rotate(Turn::Center), dir);
        let mut spun = dir;
        for _ in 0..6 {
            spun = spun.rotate(Turn::Right);
        }
        prop_assert_eq!(spun, dir);
        prop_assert_eq!(dir.opposite().opposite(), dir);
    }

    #[test]
    fn ships_occupy_one_cell_each(ops in proptest::collection::vec(op(), 0..40)) {
        let mut area = ObjectArea::new(HexDimensions::new(5, 5));
        for op in ops {
            match op {
                Op::Place(id, pos, dir) => {
                    let _ = area.place_ship(pos, ShipInstance::new(id, ShipTypes::NORMAL, dir));
                }
                Op::Move(from, to, dir) => {
                    let valid = area.ship_at(from).is_some()
                        && area.try_get(to).map_or(false, |cell| cell.is_empty());
                    if valid {
                        area.move_ship(from, to, dir);
                    }
                }
                Op::Take(pos) => {
                    area.take_ship(pos);
                }
            }
        }
        let mut seen = HashSet::new();
        for (pos, ship) in area.ships() {
            prop_assert!(seen.insert(*ship.id()), "ship {} on two cells", ship.id());
            prop_assert_eq!(area.find_ship(ship.id()), Some(pos));
        }
        for id in 0u8..8 {
            if let Some(pos) = area.find_ship(&id) {
                prop_assert_eq!(area.ship_at(pos).map(|ship| *ship.id()), Some(id));
            }
        }
    }

    #[test]
    fn markers_match_reachable_destinations(
        row in 0i32..5,
        col in 0i32..6,
        facing in direction(),
        blocker in (0i32..5, 0i32..6),
        paths in proptest::collection::vec(path(), 1..8),
    ) {
        let dim = HexDimensions::new(5, 6);
        let start = GridPoint::new(row, col);
        let blocker = GridPoint::from(blocker);
        let mut area = ObjectArea::new(dim);
        area.place_ship(start, ShipInstance::new(0, ShipTypes::NORMAL, facing)).unwrap();
        if blocker != start {
            area.place_ship(blocker, ShipInstance::new(1, ShipTypes::NORMAL, facing)).unwrap();
        }

        let mut expected = HashSet::new();
        for path in &paths {
            let mut dir = facing;
            let mut cur = Some(start);
            for &turn in path.turns() {
                dir = dir.rotate(turn);
                cur = cur.map(|p| neighbor(p, dir)).filter(|p| dim.contains(p));
            }
            if let Some(dest) = cur {
                if dest != start && dest != blocker {
                    expected.insert(dest);
                }
            }
        }

        let marked: HashSet<_> = paths
            .iter()
            .filter_map(|path| project_path(&mut area, start, path))
            .collect();
        prop_assert_eq!(&marked, &expected);
        prop_assert_eq!(area.markers().count(), expected.len());
        prop_assert_eq!(area.clear_markers(), expected.len());
        prop_assert_eq!(area.markers().count(), 0);
    }

    #[test]
    fn viewport_stays_on_grid(
        max in (1i32..30, 1i32..30),
        dim in (1i32..30, 1i32..30),
        moves in proptest::collection::vec((any::<bool>(), -40i32..40, -40i32..40), 0..20),
    ) {
        let max = GridPoint::from(max);
        let dim = GridPoint::new(dim.0.min(max.row), dim.1.min(max.col));
        let mut viewport = Viewport::new(dim, max).unwrap();
        for (follow, row, col) in moves {
            let point = GridPoint::new(row, col);
            if follow {
                viewport.update(point);
                if point.inside(&max) {
                    prop_assert!(viewport.inside(point));
                }
            } else {
                viewport.scroll_by(point);
            }
            let pos = viewport.pos();
            prop_assert!(pos.row >= 0 && pos.col >= 0);
            prop_assert!(pos.row + dim.row <= max.row && pos.col + dim.col <= max.col);
        }
    }
}
