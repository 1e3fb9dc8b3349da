//! Non-fatal conditions reported by the planner.
//!
//! None of these abort a call: the affected output is left empty or the
//! offending drone is omitted, and the condition is both logged and returned
//! to the caller.

use serde::{Deserialize, Serialize};
use workbench_core::{CellId, DroneId, RecipeId};

/// One reported condition with the offending id.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The requested recipe is not in the catalog; no assignments.
    #[error("no recipe for craft id {recipe_id}")]
    UnknownRecipe { recipe_id: RecipeId },
    /// The observed marker is not a workbench cell; no flight targets.
    #[error("observed marker {cell_id} is not part of the workbench")]
    UnknownMarkerCell { cell_id: CellId },
    /// One drone was assigned a cell outside the workbench; that drone is skipped.
    #[error("drone {drone} is assigned to invalid cell {cell_id}")]
    UnknownTargetCell { drone: DroneId, cell_id: CellId },
}

impl Diagnostic {
    /// Whether the condition emptied the whole result rather than one entry.
    pub fn is_total(&self) -> bool {
        !matches!(self, Diagnostic::UnknownTargetCell { .. })
    }

    pub(crate) fn report(&self) {
        if self.is_total() {
            log::error!("{self}");
        } else {
            log::warn!("{self}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use log::{Level, LevelFilter, Log, Metadata, Record};

    /// Collects every log record emitted in this test binary.
    struct CaptureLog;

    static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
    static CAPTURE: CaptureLog = CaptureLog;

    impl Log for CaptureLog {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut records) = RECORDS.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    fn capture() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);
    }

    fn logged(level: Level, needle: &str) -> bool {
        RECORDS
            .lock()
            .expect("records")
            .iter()
            .any(|(l, msg)| *l == level && msg.contains(needle))
    }

    #[test]
    fn reports_reach_the_logger() {
        use crate::{compute_flight_targets, resolve_assignments};
        use nalgebra::Point3;
        use workbench_core::{Assignments, Catalog};

        capture();
        let catalog = Catalog::builtin();

        resolve_assignments(&catalog, 4711, 3);
        assert!(logged(Level::Error, "no recipe for craft id 4711"));

        compute_flight_targets(&catalog, Point3::origin(), 4242, &Assignments::new());
        assert!(logged(Level::Error, "observed marker 4242 is not part of the workbench"));

        let assignments: Assignments = [("drone-report".to_string(), 777)].into_iter().collect();
        let out = compute_flight_targets(&catalog, Point3::origin(), 4, &assignments);
        assert!(out.is_empty());
        assert!(logged(Level::Warn, "drone drone-report is assigned to invalid cell 777"));
        assert!(!logged(Level::Error, "drone-report"));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let diag = Diagnostic::UnknownTargetCell {
            drone: "drone6".to_string(),
            cell_id: 12,
        };
        let json = serde_json::to_value(&diag).expect("json");
        assert_eq!(json["kind"], "unknown_target_cell");
        assert_eq!(json["drone"], "drone6");
        assert_eq!(json["cell_id"], 12);
    }

    #[test]
    fn only_target_cells_are_partial() {
        assert!(Diagnostic::UnknownRecipe { recipe_id: 99 }.is_total());
        assert!(Diagnostic::UnknownMarkerCell { cell_id: 99 }.is_total());
        assert!(!Diagnostic::UnknownTargetCell {
            drone: "drone5".into(),
            cell_id: 99
        }
        .is_total());
    }

    #[test]
    fn messages_name_the_offending_id() {
        let msg = Diagnostic::UnknownMarkerCell { cell_id: 42 }.to_string();
        assert!(msg.contains("42"));
    }
}
