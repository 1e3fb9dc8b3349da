//! Workbench catalog: the validated, read-only configuration.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::grid::{cell_positions, CellId, CellLayout, CellPosition, GridSpec};
use crate::recipe::{Recipe, RecipeId, RecipeSpec};

/// Distance between adjacent cell centers of the built-in workbench, meters.
pub const DEFAULT_CELL_SIZE: f64 = 0.15;
/// Hover height above the marker plane for the built-in workbench, meters.
pub const DEFAULT_HOVER_HEIGHT: f64 = 0.3;

/// Serializable workbench configuration.
///
/// `cell_size` and `hover_height` are in meters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkbenchSpec {
    pub grid: GridSpec,
    #[serde(default)]
    pub layout: CellLayout,
    pub cell_size: f64,
    pub hover_height: f64,
    #[serde(default)]
    pub recipes: Vec<RecipeSpec>,
}

impl WorkbenchSpec {
    /// The embedded 3×3 workbench with its four craft recipes.
    pub fn builtin() -> Self {
        Self {
            grid: GridSpec::WORKBENCH_3X3,
            layout: CellLayout::RowMajor,
            cell_size: DEFAULT_CELL_SIZE,
            hover_height: DEFAULT_HOVER_HEIGHT,
            recipes: vec![
                RecipeSpec::new(0, "Кирка", [("drone5", 1), ("drone6", 4), ("drone11", 7)]),
                RecipeSpec::new(
                    1,
                    "Топор",
                    [("drone5", 0), ("drone6", 1), ("drone11", 3), ("drone13", 4)],
                ),
                RecipeSpec::new(
                    2,
                    "Меч",
                    [("drone5", 4), ("drone6", 5), ("drone11", 3), ("drone13", 6)],
                ),
                RecipeSpec::new(
                    3,
                    "Мотыга",
                    [("drone5", 0), ("drone6", 1), ("drone11", 4), ("drone13", 7)],
                ),
            ],
        }
    }
}

impl Default for WorkbenchSpec {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Catalog construction errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("grid rows and cols must be >= 1 (got {rows}x{cols})")]
    InvalidGridSize { rows: u32, cols: u32 },
    #[error("grid has {cells} cells, more than cell ids can address")]
    GridTooLarge { cells: usize },
    #[error("cell_size must be finite and > 0 (got {0})")]
    InvalidCellSize(f64),
    #[error("hover_height must be finite and > 0 (got {0})")]
    InvalidHoverHeight(f64),
    #[error("recipe id {0} is defined more than once")]
    DuplicateRecipe(RecipeId),
}

/// Catalog lookup errors.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    #[error("cell {0} is not part of the workbench")]
    UnknownCell(CellId),
    #[error("recipe {0} is not configured")]
    UnknownRecipe(RecipeId),
}

/// Immutable workbench configuration.
///
/// Built once at startup and then only read; it is `Send + Sync` and can be
/// shared by reference between any number of callers.
#[derive(Clone, Debug)]
pub struct Catalog {
    grid: GridSpec,
    layout: CellLayout,
    cell_size: f64,
    hover_height: f64,
    cells: Vec<CellPosition>,
    recipes: BTreeMap<RecipeId, Recipe>,
}

impl Catalog {
    /// Validate and create a catalog from a spec.
    pub fn new(spec: WorkbenchSpec) -> Result<Self, CatalogError> {
        let GridSpec { rows, cols } = spec.grid;
        if rows == 0 || cols == 0 {
            return Err(CatalogError::InvalidGridSize { rows, cols });
        }
        let cells = spec.grid.cell_count();
        if i32::try_from(cells).is_err() {
            return Err(CatalogError::GridTooLarge { cells });
        }
        if !spec.cell_size.is_finite() || spec.cell_size <= 0.0 {
            return Err(CatalogError::InvalidCellSize(spec.cell_size));
        }
        if !spec.hover_height.is_finite() || spec.hover_height <= 0.0 {
            return Err(CatalogError::InvalidHoverHeight(spec.hover_height));
        }

        let mut seen = HashSet::new();
        for recipe in &spec.recipes {
            if !seen.insert(recipe.id) {
                return Err(CatalogError::DuplicateRecipe(recipe.id));
            }
        }

        Ok(Self::assemble(spec))
    }

    /// Catalog for [`WorkbenchSpec::builtin`].
    pub fn builtin() -> Self {
        Self::assemble(WorkbenchSpec::builtin())
    }

    fn assemble(spec: WorkbenchSpec) -> Self {
        let cells = cell_positions(spec.grid, spec.layout);
        let recipes = spec
            .recipes
            .into_iter()
            .map(|r| (r.id, Recipe::from(r)))
            .collect();
        Self {
            grid: spec.grid,
            layout: spec.layout,
            cell_size: spec.cell_size,
            hover_height: spec.hover_height,
            cells,
            recipes,
        }
    }

    /// `(row, column)` of a cell.
    pub fn layout_of(&self, cell_id: CellId) -> Result<CellPosition, LookupError> {
        usize::try_from(cell_id)
            .ok()
            .and_then(|idx| self.cells.get(idx))
            .copied()
            .ok_or(LookupError::UnknownCell(cell_id))
    }

    pub fn recipe_of(&self, recipe_id: RecipeId) -> Result<&Recipe, LookupError> {
        self.recipes
            .get(&recipe_id)
            .ok_or(LookupError::UnknownRecipe(recipe_id))
    }

    #[inline]
    pub fn contains_cell(&self, cell_id: CellId) -> bool {
        self.layout_of(cell_id).is_ok()
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All valid cell ids in ascending order.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..self.cells.len()).filter_map(|idx| CellId::try_from(idx).ok())
    }

    /// Recipes ordered by id.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> + '_ {
        self.recipes.values()
    }

    /// Distance between adjacent cell centers, meters.
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Vertical offset above the marker plane, meters.
    #[inline]
    pub fn hover_height(&self) -> f64 {
        self.hover_height
    }

    #[inline]
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    #[inline]
    pub fn layout(&self) -> CellLayout {
        self.layout
    }

    /// Serializable form of this catalog.
    pub fn spec(&self) -> WorkbenchSpec {
        WorkbenchSpec {
            grid: self.grid,
            layout: self.layout,
            cell_size: self.cell_size,
            hover_height: self.hover_height,
            recipes: self.recipes.values().map(RecipeSpec::from).collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_spec_passes_validation() {
        let catalog = Catalog::new(WorkbenchSpec::builtin()).expect("builtin catalog");
        assert_eq!(catalog.cell_count(), 9);
        assert_eq!(catalog.recipes().count(), 4);
        assert_eq!(catalog.cell_size(), 0.15);
        assert_eq!(catalog.hover_height(), 0.3);
    }

    #[test]
    fn layout_is_total_over_cell_range() {
        let catalog = Catalog::builtin();
        for id in 0..9 {
            let pos = catalog.layout_of(id).expect("cell");
            assert_eq!(pos.row, id / 3);
            assert_eq!(pos.col, id % 3);
        }
        assert_eq!(catalog.cell_ids().collect::<Vec<_>>(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn unknown_cells_are_reported() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.layout_of(9), Err(LookupError::UnknownCell(9)));
        assert_eq!(catalog.layout_of(-1), Err(LookupError::UnknownCell(-1)));
        assert_eq!(catalog.layout_of(99), Err(LookupError::UnknownCell(99)));
        assert!(!catalog.contains_cell(99));
    }

    #[test]
    fn recipe_lookup() {
        let catalog = Catalog::builtin();
        let sword = catalog.recipe_of(2).expect("recipe 2");
        assert_eq!(sword.name(), "Меч");
        assert_eq!(sword.drone_count(), 4);
        assert_eq!(sword.assignments().get("drone13"), Some(&6));
        assert_eq!(
            catalog.recipe_of(99).unwrap_err(),
            LookupError::UnknownRecipe(99)
        );
    }

    #[test]
    fn rejects_bad_constants() {
        let mut spec = WorkbenchSpec::builtin();
        spec.cell_size = 0.0;
        assert_eq!(
            Catalog::new(spec).unwrap_err(),
            CatalogError::InvalidCellSize(0.0)
        );

        let mut spec = WorkbenchSpec::builtin();
        spec.hover_height = f64::NAN;
        assert!(matches!(
            Catalog::new(spec),
            Err(CatalogError::InvalidHoverHeight(_))
        ));

        let mut spec = WorkbenchSpec::builtin();
        spec.grid = GridSpec { rows: 0, cols: 3 };
        assert_eq!(
            Catalog::new(spec).unwrap_err(),
            CatalogError::InvalidGridSize { rows: 0, cols: 3 }
        );
    }

    #[test]
    fn rejects_duplicate_recipe_ids() {
        let mut spec = WorkbenchSpec::builtin();
        spec.recipes.push(RecipeSpec::new(1, "dup", [("drone1", 0)]));
        assert_eq!(
            Catalog::new(spec).unwrap_err(),
            CatalogError::DuplicateRecipe(1)
        );
    }

    #[test]
    fn out_of_grid_targets_are_accepted_at_construction() {
        let mut spec = WorkbenchSpec::builtin();
        spec.recipes
            .push(RecipeSpec::new(7, "broken", [("drone1", 42), ("drone2", -3)]));
        let catalog = Catalog::new(spec).expect("lazy target validation");
        assert_eq!(catalog.recipe_of(7).expect("recipe").drone_count(), 2);
    }

    #[test]
    fn spec_round_trips_through_catalog() {
        let spec = WorkbenchSpec::builtin();
        let catalog = Catalog::new(spec.clone()).expect("catalog");
        assert_eq!(catalog.spec(), spec);
    }

    #[test]
    fn catalog_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
