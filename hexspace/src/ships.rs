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
//! Types used for defining ships and the moves available to them.
use std::{fmt::Debug, hash::Hash};

use crate::board::{Direction, Path, PathParseError, Turn};

/// Trait for types that can be used as a ship's ID within an
/// [`ObjectArea`][crate::board::ObjectArea]. IDs are treated as disposable and cheaply
/// cloneable. If you need a complex ID type that isn't cheap to clone, you may want to
/// wrap it in `Rc` or `Arc`.
///
/// Auto-implemented for any type which implements `Debug`,`Clone`, `Eq`, and `Hash`.
pub trait ShipId: Debug + Clone + Eq + Hash {}
impl<T: Debug + Clone + Eq + Hash> ShipId for T {}

/// Handle to a ship type registered in a [`ShipTypes`] catalog.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShipClass(usize);

/// A ship on the grid. Ships live inside the cell they occupy and move with it, so a
/// ship is only ever held by a single cell.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShipInstance<I> {
    /// ID of the ship.
    id: I,
    /// Type of the ship, which decides how it can move.
    class: ShipClass,
    /// Direction the ship is currently facing.
    direction: Direction,
}

impl<I> ShipInstance<I> {
    /// Construct a ship with the given ID and class, facing `direction`.
    pub fn new(id: I, class: ShipClass, direction: Direction) -> Self {
        Self {
            id,
            class,
            direction,
        }
    }

    /// Get the ID of the ship.
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Get the class of the ship.
    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Get the direction the ship is facing.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }
}

/// Source of the movement paths for each ship class.
pub trait ShipCatalog {
    /// Get the movement paths available to ships of the given class. Each path is
    /// evaluated independently from the ship's current cell and facing.
    fn paths(&self, class: ShipClass) -> &[Path];
}

/// A type of ship.
#[derive(Debug, Clone)]
pub struct ShipType {
    name: String,
    paths: Vec<Path>,
}

impl ShipType {
    /// Name of the ship type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fixed list of movement paths of this type.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }
}

/// Catalog of ship types, indexed by [`ShipClass`].
#[derive(Debug, Clone, Default)]
pub struct ShipTypes {
    types: Vec<ShipType>,
}

impl ShipTypes {
    /// The class of the single ship type in the [`standard`][ShipTypes::standard]
    /// catalog.
    pub const NORMAL: ShipClass = ShipClass(0);

    /// Construct an empty catalog.
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    /// Catalog containing just the normal ship type as [`ShipTypes::NORMAL`]. A normal
    /// ship moves one step straight or turned, or two steps where only the second may
    /// turn.
    pub fn standard() -> Self {
        use Turn::*;
        let mut types = Self::new();
        types.add(
            "normal",
            vec![
                Path::new(vec![Center]),
                Path::new(vec![Left]),
                Path::new(vec![Right]),
                Path::new(vec![Center, Center]),
                Path::new(vec![Center, Left]),
                Path::new(vec![Center, Right]),
            ],
        );
        types
    }

    /// Register a ship type and get the class that refers to it.
    pub fn add(&mut self, name: impl Into<String>, paths: Vec<Path>) -> ShipClass {
        let class = ShipClass(self.types.len());
        self.types.push(ShipType {
            name: name.into(),
            paths,
        });
        class
    }

    /// Register a ship type whose paths are given as path strings such as `"cl"`.
    pub fn add_parsed(
        &mut self,
        name: impl Into<String>,
        paths: &[&str],
    ) -> Result<ShipClass, PathParseError> {
        let paths = paths
            .iter()
            .map(|p| p.parse())
            .collect::<Result<Vec<Path>, _>>()?;
        Ok(self.add(name, paths))
    }

    /// Get the ship type for a class, if it was registered in this catalog.
    pub fn get(&self, class: ShipClass) -> Option<&ShipType> {
        self.types.get(class.0)
    }

    /// Iterate over all registered classes and their types.
    pub fn iter(&self) -> impl Iterator<Item = (ShipClass, &ShipType)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, ty)| (ShipClass(i), ty))
    }
}

impl ShipCatalog for ShipTypes {
    /// Panics if the class was not registered in this catalog.
    fn paths(&self, class: ShipClass) -> &[Path] {
        match self.get(class) {
            Some(ty) => ty.paths(),
            None => panic!("{:?} is not registered in this catalog", class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog() {
        let types = ShipTypes::standard();
        let paths: Vec<String> = types
            .paths(ShipTypes::NORMAL)
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(paths, ["c", "l", "r", "cc", "cl", "cr"]);
        assert_eq!(types.get(ShipTypes::NORMAL).unwrap().name(), "normal");
    }

    #[test]
    fn add_parsed_rejects_bad_paths() {
        let mut types = ShipTypes::new();
        assert!(types.add_parsed("bad", &["c", "q"]).is_err());
        let class = types.add_parsed("scout", &["cc", "ccc"]).unwrap();
        assert_eq!(types.paths(class).len(), 2);
        assert_eq!(types.iter().count(), 1);
    }

    #[test]
    #[should_panic]
    fn unknown_class_panics() {
        ShipTypes::new().paths(ShipTypes::NORMAL);
    }
}
