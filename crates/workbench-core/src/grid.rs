//! Workbench grid geometry: cell ids and their `(row, column)` locations.

use serde::{Deserialize, Serialize};

/// Identifier of one workbench cell.
///
/// Signed so that out-of-range readings (including negative ones) stay
/// representable and can be reported instead of rejected at the type level.
pub type CellId = i32;

/// Workbench grid dimensions, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: u32,
    pub cols: u32,
}

impl GridSpec {
    /// The 3×3 workbench.
    pub const WORKBENCH_3X3: GridSpec = GridSpec { rows: 3, cols: 3 };

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

/// Cell id numbering scheme for the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CellLayout {
    /// Ids are assigned row by row starting at the top-left cell:
    /// `id = row * cols + col`.
    #[default]
    RowMajor,
    /// Ids are assigned column by column starting at the top-left cell:
    /// `id = col * rows + row`.
    ColumnMajor,
}

/// Location of a cell in the grid (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: i32,
    pub col: i32,
}

impl CellPosition {
    /// Grid displacement `(row_diff, col_diff)` from `self` to `other`.
    #[inline]
    pub fn offset_to(self, other: CellPosition) -> CellOffset {
        CellOffset {
            drow: other.row - self.row,
            dcol: other.col - self.col,
        }
    }
}

/// Integer displacement between two cells, in grid steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellOffset {
    pub drow: i32,
    pub dcol: i32,
}

/// Enumerate `(row, col)` for every cell id `0..cell_count`, in id order.
pub(crate) fn cell_positions(grid: GridSpec, layout: CellLayout) -> Vec<CellPosition> {
    let rows = grid.rows as i32;
    let cols = grid.cols as i32;
    let mut out = Vec::with_capacity(grid.cell_count());
    match layout {
        CellLayout::RowMajor => {
            for row in 0..rows {
                for col in 0..cols {
                    out.push(CellPosition { row, col });
                }
            }
        }
        CellLayout::ColumnMajor => {
            for col in 0..cols {
                for row in 0..rows {
                    out.push(CellPosition { row, col });
                }
            }
        }
    }
    out
}
