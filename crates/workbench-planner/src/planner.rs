use std::path::Path;

use nalgebra::Point3;
use workbench_core::{
    Assignments, Catalog, CatalogError, CellId, RecipeId, WorkbenchConfigError, WorkbenchSpec,
};

use crate::plan::{plan_flight, FlightPlan};
use crate::resolve::{resolve_assignments, AssignmentResolution};
use crate::transform::{compute_flight_targets, FlightTargets, MarkerReading};

/// Flight planner bound to one workbench catalog.
///
/// Holds no state besides the catalog, so a single planner can serve any
/// number of threads through a shared reference.
#[derive(Clone, Debug, Default)]
pub struct FlightPlanner {
    catalog: Catalog,
}

impl FlightPlanner {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn from_spec(spec: WorkbenchSpec) -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::new(spec)?))
    }

    /// Planner for a JSON workbench config on disk.
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self, WorkbenchConfigError> {
        Ok(Self::new(Catalog::load_json(path)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn resolve_assignments(
        &self,
        recipe_id: RecipeId,
        observed_marker_id: CellId,
    ) -> AssignmentResolution {
        resolve_assignments(&self.catalog, recipe_id, observed_marker_id)
    }

    pub fn compute_flight_targets(
        &self,
        marker_position: Point3<f64>,
        marker_cell_id: CellId,
        assignments: &Assignments,
    ) -> FlightTargets {
        compute_flight_targets(&self.catalog, marker_position, marker_cell_id, assignments)
    }

    pub fn plan(&self, recipe_id: RecipeId, reading: &MarkerReading) -> FlightPlan {
        plan_flight(&self.catalog, recipe_id, reading)
    }
}

impl From<Catalog> for FlightPlanner {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
