//! Drone placement on the workbench.
//!
//! Two steps, run in sequence by the caller:
//! 1. [`resolve_assignments`]: recipe id -> which drone goes to which cell.
//! 2. [`compute_flight_targets`]: marker reading + assignments -> metric
//!    hover point per drone, relative to the detected marker.
//!
//! [`plan_flight`] runs both. Neither step fails hard: unknown recipes,
//! unknown marker cells and unknown target cells shrink the output and are
//! returned as [`Diagnostic`]s (and logged through `log`).
//!
//! ```
//! use workbench_core::Catalog;
//! use workbench_planner::{compute_flight_targets, resolve_assignments};
//! use nalgebra::Point3;
//!
//! let catalog = Catalog::builtin();
//! let res = resolve_assignments(&catalog, 2, 3);
//! let out = compute_flight_targets(&catalog, Point3::new(2.5, 1.8, 0.5), 3, &res.assignments);
//! assert_eq!(out.get("drone6"), Some(&Point3::new(2.8, 1.8, 0.8)));
//! ```

mod diagnostics;
mod plan;
mod planner;
mod resolve;
mod transform;

pub use diagnostics::Diagnostic;
pub use plan::{plan_flight, FlightPlan};
pub use planner::FlightPlanner;
pub use resolve::{resolve_assignments, AssignmentResolution};
pub use transform::{
    compute_flight_targets, compute_flight_targets_for, metric_offset, round_mm, FlightTargets,
    MarkerReading,
};
