//! Runtime diagnostics for cut-cell slope evaluation.
//!
//! The least-squares gradient of a cut cell can be undetermined when the
//! cell has too few connected neighbors (a sliver, or a cell whose
//! neighbors all lie on a line). Such cells get a zero gradient along the
//! affected axes instead of an error; this module counts them so the
//! caller can decide whether the geometry needs attention.
//!
//! # Example
//!
//! ```
//! use godunov_rs::{EbCellFlag, SlopeDiagnostics};
//!
//! let mut x_pass = SlopeDiagnostics::default();
//! x_pass.record([0, 0, 0], EbCellFlag::regular(), false);
//! x_pass.record([1, 0, 0], EbCellFlag::single_valued(), false);
//!
//! let mut y_pass = SlopeDiagnostics::default();
//! y_pass.record([2, 0, 0], EbCellFlag::covered(), false);
//! y_pass.record([3, 0, 0], EbCellFlag::single_valued(), true);
//!
//! x_pass.merge(&y_pass);
//! assert_eq!(x_pass.cells, 4);
//! assert_eq!(x_pass.cut_cells, 2);
//! assert_eq!(x_pass.covered_cells, 1);
//! assert!(!x_pass.is_clean());
//! assert_eq!(x_pass.first_degenerate, Some([3, 0, 0]));
//! x_pass.log_summary("tracer");
//! ```

use std::fmt;

use crate::eb::EbCellFlag;

/// Counters collected while evaluating least-squares slopes over a region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlopeDiagnostics {
    /// Cells visited
    pub cells: usize,
    /// Cut (single-valued) cells among them
    pub cut_cells: usize,
    /// Covered cells, which always get a zero slope
    pub covered_cells: usize,
    /// Cells whose normal equations were singular
    pub degenerate_cells: usize,
    /// First degenerate cell in visiting order
    pub first_degenerate: Option<[i32; 3]>,
}

impl SlopeDiagnostics {
    /// Account for one evaluated cell.
    pub fn record(&mut self, p: [i32; 3], flag: EbCellFlag, degenerate: bool) {
        self.cells += 1;
        if flag.is_single_valued() {
            self.cut_cells += 1;
        } else if flag.is_covered() {
            self.covered_cells += 1;
        }
        if degenerate {
            self.degenerate_cells += 1;
            self.first_degenerate.get_or_insert(p);
        }
    }

    /// Combine counters from another pass.
    pub fn merge(&mut self, other: &SlopeDiagnostics) {
        self.cells += other.cells;
        self.cut_cells += other.cut_cells;
        self.covered_cells += other.covered_cells;
        self.degenerate_cells += other.degenerate_cells;
        if self.first_degenerate.is_none() {
            self.first_degenerate = other.first_degenerate;
        }
    }

    /// No degenerate cells were met.
    pub fn is_clean(&self) -> bool {
        self.degenerate_cells == 0
    }

    /// Log through the `log` facade: a warning when degenerate cells were
    /// found, a debug line otherwise.
    pub fn log_summary(&self, what: &str) {
        if self.is_clean() {
            log::debug!("{what}: {self}");
        } else {
            log::warn!("{what}: {self}");
        }
    }
}

impl fmt::Display for SlopeDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cells ({} cut, {} covered), {} degenerate",
            self.cells, self.cut_cells, self.covered_cells, self.degenerate_cells
        )?;
        if let Some([i, j, k]) = self.first_degenerate {
            write!(f, ", first at ({i},{j},{k})")?;
        }
        Ok(())
    }
}
