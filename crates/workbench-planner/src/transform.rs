//! Grid offset -> metric flight coordinates.
//!
//! Frame convention: columns grow along +X, rows grow along -Y (row 0 is the
//! far edge of the bench, "forward" in the flight frame), Z is up.
//! Every target hovers `hover_height` above the marker plane.

use std::collections::BTreeMap;
use std::num::ParseFloatError;

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use workbench_core::{Assignments, Catalog, CellId, CellOffset, DroneId};

use crate::diagnostics::Diagnostic;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Measured position of a detected workbench marker, and the cell it marks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerReading {
    /// Marker position in meters.
    pub position: Point3<f64>,
    pub cell_id: CellId,
}

impl MarkerReading {
    pub fn new(position: [f64; 3], cell_id: CellId) -> Self {
        Self {
            position: Point3::from(position),
            cell_id,
        }
    }
}

/// Outcome of [`compute_flight_targets`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightTargets {
    /// Per-drone hover point in meters, rounded to millimeters.
    pub targets: BTreeMap<DroneId, Point3<f64>>,
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl FlightTargets {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn get(&self, drone: &str) -> Option<&Point3<f64>> {
        self.targets.get(drone)
    }
}

/// Round to 3 decimals (millimeters).
///
/// Rounds the exact decimal expansion of `v`, ties to even, so
/// `0.0625 -> 0.062` and `1.0005 -> 1.0` (the stored value is just below
/// the half).
pub fn round_mm(v: f64) -> Result<f64, ParseFloatError> {
    format!("{v:.3}").parse()
}

fn round_point_mm(p: &Point3<f64>) -> Result<Point3<f64>, ParseFloatError> {
    Ok(Point3::new(round_mm(p.x)?, round_mm(p.y)?, round_mm(p.z)?))
}

/// Metric displacement of a grid offset.
#[inline]
pub fn metric_offset(offset: CellOffset, cell_size: f64, hover_height: f64) -> Vector3<f64> {
    Vector3::new(
        offset.dcol as f64 * cell_size,
        -(offset.drow as f64) * cell_size,
        hover_height,
    )
}

/// Compute where each assigned drone must hover.
///
/// `marker_position` is the measured position of the marker on cell
/// `marker_cell_id`. If that cell is not on the workbench the result is
/// empty. Drones whose target cell is not on the workbench are skipped;
/// all others are still computed. Each skipped input is reported as a
/// [`Diagnostic`].
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(catalog, assignments), fields(drones = assignments.len()))
)]
pub fn compute_flight_targets(
    catalog: &Catalog,
    marker_position: Point3<f64>,
    marker_cell_id: CellId,
    assignments: &Assignments,
) -> FlightTargets {
    let Ok(marker_cell) = catalog.layout_of(marker_cell_id) else {
        let diag = Diagnostic::UnknownMarkerCell {
            cell_id: marker_cell_id,
        };
        diag.report();
        return FlightTargets {
            targets: BTreeMap::new(),
            diagnostics: vec![diag],
        };
    };

    let mut out = FlightTargets::default();
    for (drone, &cell_id) in assignments {
        let Ok(target_cell) = catalog.layout_of(cell_id) else {
            let diag = Diagnostic::UnknownTargetCell {
                drone: drone.clone(),
                cell_id,
            };
            diag.report();
            out.diagnostics.push(diag);
            continue;
        };

        let offset = marker_cell.offset_to(target_cell);
        let p = marker_position
            + metric_offset(offset, catalog.cell_size(), catalog.hover_height());
        let p = match round_point_mm(&p) {
            Ok(rounded) => rounded,
            Err(err) => {
                log::warn!("{drone}: cannot round target {p:?} to millimeters ({err})");
                p
            }
        };
        log::debug!(
            "{drone}: cell {cell_id} offset (drow={}, dcol={}) -> [{}, {}, {}]",
            offset.drow,
            offset.dcol,
            p.x,
            p.y,
            p.z
        );
        out.targets.insert(drone.clone(), p);
    }
    out
}

/// [`compute_flight_targets`] for a [`MarkerReading`].
pub fn compute_flight_targets_for(
    catalog: &Catalog,
    reading: &MarkerReading,
    assignments: &Assignments,
) -> FlightTargets {
    compute_flight_targets(catalog, reading.position, reading.cell_id, assignments)
}
