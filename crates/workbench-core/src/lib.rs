//! Workbench catalog for drone swarm choreography.
//!
//! Holds the static configuration the planner works against: the grid
//! layout (cell id -> row/column), the craft recipe table (recipe id ->
//! drone -> target cell) and two physical constants, the spacing between
//! cell centers and the hover height above the marker plane.
//!
//! A [`Catalog`] is validated once at construction and is read-only
//! afterwards. Recipe targets are deliberately not checked against the grid
//! here; the planner reports them when it transforms coordinates.

mod catalog;
mod grid;
mod io;
mod recipe;

pub use catalog::{
    Catalog, CatalogError, LookupError, WorkbenchSpec, DEFAULT_CELL_SIZE, DEFAULT_HOVER_HEIGHT,
};
pub use grid::{CellId, CellLayout, CellOffset, CellPosition, GridSpec};
pub use io::{WorkbenchConfigError, WorkbenchIoError};
pub use recipe::{Assignments, DroneId, Recipe, RecipeId, RecipeSpec};
