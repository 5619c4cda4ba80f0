//! Stage orchestration: raw extracts to cleaned tables to the data mart.
//!
//! Each stage reads from and writes to the directories in [`PipelinePaths`];
//! nothing here consults a global location. With `write` off a stage still
//! computes everything and only skips the file handoff.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use dwh_clean::{CleanOutcome, clean_entity};
use dwh_ingest::{FileKind, read_entity_table, require_inputs, write_csv_table};
use dwh_model::{AssemblyReport, CleanReport, MartTable, PipelinePaths};
use dwh_transform::{CleanedTables, assemble};
use tracing::{info, info_span, warn};

use crate::types::{MartTableSummary, RunReport};

/// Output of the clean stage.
#[derive(Debug)]
pub struct CleanStage {
    pub tables: CleanedTables,
    pub reports: Vec<CleanReport>,
}

/// Output of the transform stage.
#[derive(Debug)]
pub struct TransformStage {
    pub report: AssemblyReport,
    pub tables: Vec<MartTableSummary>,
}

/// Directories for `clean`: cleaned tables default to a sibling of the raw directory.
pub fn clean_paths(raw_dir: &Path, cleaned_dir: Option<&Path>) -> PipelinePaths {
    let paths = PipelinePaths::from_raw_dir(raw_dir);
    match cleaned_dir {
        Some(dir) => paths.with_cleaned_dir(dir),
        None => paths,
    }
}

/// Directories for `transform`: the mart defaults to a sibling of the cleaned directory.
pub fn transform_paths(cleaned_dir: &Path, output_dir: Option<&Path>) -> PipelinePaths {
    let paths = PipelinePaths::from_cleaned_dir(cleaned_dir);
    match output_dir {
        Some(dir) => paths.with_transformed_dir(dir),
        None => paths,
    }
}

/// Directories for `run`.
///
/// The mart follows the cleaned directory, so `--cleaned-dir` alone moves
/// both outputs; `--output-dir` always wins.
pub fn run_paths(
    raw_dir: &Path,
    cleaned_dir: Option<&Path>,
    output_dir: Option<&Path>,
) -> PipelinePaths {
    let paths = clean_paths(raw_dir, cleaned_dir);
    let transformed = transform_paths(&paths.cleaned_dir, output_dir).transformed_dir;
    paths.with_transformed_dir(transformed)
}

/// Cleans every raw extract, in catalogue order.
///
/// All fifteen extracts must be present before any is read.
pub fn clean_stage(paths: &PipelinePaths, write: bool) -> Result<CleanStage> {
    let span = info_span!("clean", raw_dir = %paths.raw_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    let inputs = require_inputs(&paths.raw_dir, FileKind::Raw).context("locate raw extracts")?;
    let mut tables = CleanedTables::new();
    let mut reports = Vec::with_capacity(inputs.len());
    for input in inputs {
        let entity = input.entity;
        let raw = read_entity_table(&input.path, entity)
            .with_context(|| format!("read {}", input.path.display()))?;
        let CleanOutcome { mut data, report } =
            clean_entity(entity, &raw).with_context(|| format!("clean {entity}"))?;
        if data.height() == 0 && report.rows_in > 0 {
            warn!(%entity, rows_in = report.rows_in, "every row was dropped");
        }
        if write {
            let path = paths.cleaned_path(entity);
            write_csv_table(&mut data, &path)
                .with_context(|| format!("write {}", path.display()))?;
        }
        tables.insert(entity, data);
        reports.push(report);
    }

    info!(
        entities = reports.len(),
        rows_dropped = reports.iter().map(CleanReport::dropped_total).sum::<usize>(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(CleanStage { tables, reports })
}

/// Loads previously cleaned tables from the cleaned directory.
pub fn load_cleaned(paths: &PipelinePaths) -> Result<CleanedTables> {
    let inputs =
        require_inputs(&paths.cleaned_dir, FileKind::Cleaned).context("locate cleaned tables")?;
    let mut tables = CleanedTables::new();
    for input in inputs {
        let data = read_entity_table(&input.path, input.entity)
            .with_context(|| format!("read {}", input.path.display()))?;
        tables.insert(input.entity, data);
    }
    Ok(tables)
}

/// Assembles the data mart and writes its six tables.
pub fn transform_stage(
    tables: &CleanedTables,
    paths: &PipelinePaths,
    write: bool,
) -> Result<TransformStage> {
    let span = info_span!("transform", output_dir = %paths.transformed_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mart = assemble(tables).context("assemble data mart")?;
    // All six frames render before the first write; a render failure writes nothing.
    let mut rendered = Vec::with_capacity(MartTable::ALL.len());
    for table in MartTable::ALL {
        let data = mart
            .table(table)
            .with_context(|| format!("render {table}"))?;
        rendered.push((table, data));
    }

    let mut summaries = Vec::with_capacity(rendered.len());
    for (table, mut data) in rendered {
        let path = if write {
            let path = paths.mart_path(table);
            write_csv_table(&mut data, &path)
                .with_context(|| format!("write {}", path.display()))?;
            Some(path)
        } else {
            None
        };
        summaries.push(MartTableSummary {
            table,
            rows: data.height(),
            path,
        });
    }

    info!(
        fact_rows = mart.report.fact_rows,
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    Ok(TransformStage {
        report: mart.report,
        tables: summaries,
    })
}

/// Writes the run report as pretty JSON, creating parent directories.
pub fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
