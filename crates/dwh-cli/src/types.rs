use std::path::PathBuf;

use dwh_model::{AssemblyReport, CleanReport, MartTable, PipelinePaths};
use serde::Serialize;

/// Which stages a run covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Clean,
    Transform,
    Run,
}

#[derive(Debug, Clone, Serialize)]
pub struct MartTableSummary {
    pub table: MartTable,
    pub rows: usize,
    /// `None` on dry runs.
    pub path: Option<PathBuf>,
}

/// Everything a run did, printed as tables and optionally saved as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: RunMode,
    pub dry_run: bool,
    pub paths: PipelinePaths,
    pub cleaned: Vec<CleanReport>,
    pub assembly: Option<AssemblyReport>,
    pub tables: Vec<MartTableSummary>,
}

impl RunReport {
    pub fn new(mode: RunMode, paths: PipelinePaths, dry_run: bool) -> Self {
        Self {
            mode,
            dry_run,
            paths,
            cleaned: Vec::new(),
            assembly: None,
            tables: Vec::new(),
        }
    }

    pub fn rows_dropped(&self) -> usize {
        self.cleaned.iter().map(CleanReport::dropped_total).sum()
    }

    pub fn fact_rows(&self) -> Option<usize> {
        self.assembly.as_ref().map(|report| report.fact_rows)
    }
}
