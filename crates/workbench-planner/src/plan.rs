//! End-to-end flight plan: recipe lookup followed by the coordinate transform.

use std::collections::BTreeMap;
use std::path::Path;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use workbench_core::{Assignments, Catalog, DroneId, RecipeId, WorkbenchIoError};

use crate::diagnostics::Diagnostic;
use crate::resolve::resolve_assignments;
use crate::transform::{compute_flight_targets_for, MarkerReading};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Flight plan for one craft request, serializable as a JSON report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightPlan {
    pub recipe_id: RecipeId,
    #[serde(default)]
    pub recipe_name: Option<String>,
    pub marker: MarkerReading,
    pub assignments: Assignments,
    pub targets: BTreeMap<DroneId, Point3<f64>>,
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl FlightPlan {
    /// `true` if every assigned drone got a target and nothing was reported.
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty() && self.targets.len() == self.assignments.len()
    }

    /// Drones that were assigned but have no target.
    pub fn missing_drones(&self) -> impl Iterator<Item = &str> + '_ {
        self.assignments
            .keys()
            .filter(|d| !self.targets.contains_key(*d))
            .map(String::as_str)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write this plan to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), WorkbenchIoError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, WorkbenchIoError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Resolve `recipe_id` and place its drones relative to `reading`.
///
/// When the recipe is unknown the transform is not attempted. All reported
/// conditions from both steps are collected in [`FlightPlan::diagnostics`].
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(catalog)))]
pub fn plan_flight(catalog: &Catalog, recipe_id: RecipeId, reading: &MarkerReading) -> FlightPlan {
    let resolution = resolve_assignments(catalog, recipe_id, reading.cell_id);
    let mut diagnostics = resolution.diagnostics;

    let targets = if resolution.assignments.is_empty() {
        BTreeMap::new()
    } else {
        let out = compute_flight_targets_for(catalog, reading, &resolution.assignments);
        diagnostics.extend(out.diagnostics);
        out.targets
    };

    FlightPlan {
        recipe_id,
        recipe_name: resolution.recipe_name,
        marker: *reading,
        assignments: resolution.assignments,
        targets,
        diagnostics,
    }
}
