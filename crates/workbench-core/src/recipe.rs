//! Craft recipes: which drone goes to which workbench cell.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::grid::CellId;

/// Identifier of a craft recipe.
pub type RecipeId = u32;

/// Drone identifier, unique within one recipe (e.g. `"drone5"`).
pub type DroneId = String;

/// Drone -> target cell mapping for one recipe.
///
/// Target cells are not checked against the layout until they are
/// transformed into flight coordinates.
pub type Assignments = BTreeMap<DroneId, CellId>;

/// Serializable recipe entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSpec {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub assignments: Assignments,
}

impl RecipeSpec {
    pub fn new<'a>(
        id: RecipeId,
        name: impl Into<String>,
        assignments: impl IntoIterator<Item = (&'a str, CellId)>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            assignments: assignments
                .into_iter()
                .map(|(drone, cell)| (drone.to_owned(), cell))
                .collect(),
        }
    }
}

/// A recipe held by the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    id: RecipeId,
    name: String,
    assignments: Assignments,
}

impl Recipe {
    #[inline]
    pub fn id(&self) -> RecipeId {
        self.id
    }

    /// Display name, e.g. `"Меч"`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    /// Number of drones taking part in the recipe.
    #[inline]
    pub fn drone_count(&self) -> usize {
        self.assignments.len()
    }
}

impl From<RecipeSpec> for Recipe {
    fn from(spec: RecipeSpec) -> Self {
        Self {
            id: spec.id,
            name: spec.name,
            assignments: spec.assignments,
        }
    }
}

impl From<&Recipe> for RecipeSpec {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            assignments: recipe.assignments.clone(),
        }
    }
}
