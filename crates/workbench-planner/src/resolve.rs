//! Recipe -> drone assignment lookup.

use serde::{Deserialize, Serialize};
use workbench_core::{Assignments, Catalog, CellId, RecipeId};

use crate::diagnostics::Diagnostic;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Outcome of [`resolve_assignments`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResolution {
    pub recipe_id: RecipeId,
    /// Marker the request was made for. Carried for context only.
    pub observed_marker_id: CellId,
    #[serde(default)]
    pub recipe_name: Option<String>,
    pub assignments: Assignments,
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl AssignmentResolution {
    /// `true` when the recipe was found, even if it assigns no drones.
    pub fn is_resolved(&self) -> bool {
        self.recipe_name.is_some()
    }
}

/// Look up which drone flies to which cell for `recipe_id`.
///
/// The configured assignments are returned unchanged. An unknown recipe is
/// not an error: the result has empty assignments and an
/// [`Diagnostic::UnknownRecipe`] entry. `observed_marker_id` does not
/// influence the lookup and is not validated.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(catalog)))]
pub fn resolve_assignments(
    catalog: &Catalog,
    recipe_id: RecipeId,
    observed_marker_id: CellId,
) -> AssignmentResolution {
    match catalog.recipe_of(recipe_id) {
        Ok(recipe) => {
            log::info!(
                "craft '{}' (id {}) requested for marker {}: {} drone assignments",
                recipe.name(),
                recipe_id,
                observed_marker_id,
                recipe.drone_count()
            );
            AssignmentResolution {
                recipe_id,
                observed_marker_id,
                recipe_name: Some(recipe.name().to_owned()),
                assignments: recipe.assignments().clone(),
                diagnostics: Vec::new(),
            }
        }
        Err(_) => {
            let diag = Diagnostic::UnknownRecipe { recipe_id };
            diag.report();
            AssignmentResolution {
                recipe_id,
                observed_marker_id,
                recipe_name: None,
                assignments: Assignments::new(),
                diagnostics: vec![diag],
            }
        }
    }
}
