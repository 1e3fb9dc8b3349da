//! High-level facade crate for the `workbench-*` workspace.
//!
//! This crate provides:
//! - re-exports of the catalog (`workbench-core`) and planner
//!   (`workbench-planner`) crates
//! - a few helpers the `drone-workbench` CLI is built on: loading a catalog
//!   from an optional config path and rendering a flight plan as text
//!
//! ## Quickstart
//!
//! ```
//! use drone_workbench::{FlightPlanner, MarkerReading};
//!
//! let planner = FlightPlanner::default();
//! // the camera saw marker 3 at (2.5, 1.8, 0.5); craft the sword (recipe 2)
//! let plan = planner.plan(2, &MarkerReading::new([2.5, 1.8, 0.5], 3));
//! assert!(plan.is_complete());
//! println!("{}", drone_workbench::render_plan(&plan));
//! ```
//!
//! ## API map
//! - `drone_workbench::core`: catalog, grid layout, recipes, config I/O.
//! - `drone_workbench::planner`: assignment lookup, coordinate transform, plans.
//! - `drone_workbench::logging`: stderr logger setup for the CLI.

pub use workbench_core as core;
pub use workbench_planner as planner;

pub mod logging;

pub use workbench_core::{Catalog, CellId, RecipeId, WorkbenchSpec};
pub use logging::init_logging;
pub use workbench_planner::{Diagnostic, FlightPlan, FlightPlanner, MarkerReading};

use std::fmt::Write as _;
use std::path::Path;

use workbench_core::{WorkbenchConfigError, WorkbenchIoError};

/// Errors produced by the high-level facade helpers and the CLI.
#[derive(thiserror::Error, Debug)]
pub enum WorkbenchError {
    /// The workbench config could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] WorkbenchConfigError),
    /// A plan or config could not be written.
    #[error(transparent)]
    Io(#[from] WorkbenchIoError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Planner for `config`, or for the built-in workbench when `None`.
pub fn load_planner(config: Option<&Path>) -> Result<FlightPlanner, WorkbenchError> {
    match config {
        Some(path) => {
            log::info!("loading workbench config from {}", path.display());
            Ok(FlightPlanner::from_json(path)?)
        }
        None => Ok(FlightPlanner::default()),
    }
}

/// Human-readable flight plan summary.
pub fn render_plan(plan: &FlightPlan) -> String {
    let mut out = String::new();
    let name = plan.recipe_name.as_deref().unwrap_or("<unknown>");
    let m = &plan.marker;
    let _ = writeln!(
        out,
        "craft '{}' (id {}) relative to marker {} at [{}, {}, {}]",
        name, plan.recipe_id, m.cell_id, m.position.x, m.position.y, m.position.z
    );
    for (drone, p) in &plan.targets {
        let _ = writeln!(out, "  - {drone} -> [x={}, y={}, z={}]", p.x, p.y, p.z);
    }
    for diag in &plan.diagnostics {
        let _ = writeln!(out, "  ! {diag}");
    }
    out
}

/// Human-readable recipe table.
pub fn render_recipes(catalog: &Catalog) -> String {
    let mut out = String::new();
    for recipe in catalog.recipes() {
        let _ = write!(out, "{:>3}  {}:", recipe.id(), recipe.name());
        for (drone, cell) in recipe.assignments() {
            let _ = write!(out, " {drone}->{cell}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_targets_and_diagnostics() {
        let planner = FlightPlanner::default();
        let ok = render_plan(&planner.plan(2, &MarkerReading::new([2.5, 1.8, 0.5], 3)));
        assert!(ok.contains("craft 'Меч' (id 2)"));
        assert!(ok.contains("drone13 -> [x=2.65, y=1.65, z=0.8]"));

        let bad = render_plan(&planner.plan(99, &MarkerReading::new([0.0, 0.0, 0.0], 3)));
        assert!(bad.contains("<unknown>"));
        assert!(bad.contains("! no recipe for craft id 99"));
    }

    #[test]
    fn recipe_table_lists_every_recipe() {
        let table = render_recipes(&Catalog::builtin());
        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("Кирка: drone11->7 drone5->1 drone6->4"));
    }

    #[test]
    fn missing_config_is_a_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_planner(Some(&dir.path().join("workbench.json"))).unwrap_err();
        assert!(matches!(err, WorkbenchError::Config(_)));
    }

    #[test]
    fn unwritable_plan_is_an_io_error() {
        let plan = FlightPlanner::default().plan(2, &MarkerReading::new([0.0, 0.0, 0.0], 3));
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("plan.json");
        let err = WorkbenchError::from(plan.write_json(&path).unwrap_err());
        assert!(matches!(err, WorkbenchError::Io(_)));
    }

    #[test]
    fn default_planner_without_config() {
        let planner = load_planner(None).expect("planner");
        assert_eq!(planner.catalog().cell_count(), 9);
    }
}
