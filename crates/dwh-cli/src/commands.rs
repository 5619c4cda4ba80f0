use anyhow::Result;
use comfy_table::Table;
use dwh_clean::default_registry;
use dwh_model::Entity;
use tracing::info_span;

use dwh_cli::generate::{GenerateOptions, GeneratedTable, generate_stage};
use dwh_cli::pipeline::{
    clean_paths, clean_stage, load_cleaned, run_paths, transform_paths, transform_stage,
    write_report,
};
use dwh_cli::types::{RunMode, RunReport};

use crate::cli::{CleanArgs, GenerateArgs, OutputArgs, RunArgs, TransformArgs};
use crate::summary::apply_table_style;

pub fn run_entities() {
    let mut table = Table::new();
    table.set_header(vec!["Entity", "Raw file", "Cleaned file", "Description", "Cleaning"]);
    apply_table_style(&mut table);
    let registry = default_registry();
    for entity in Entity::ALL {
        let cleaning = registry
            .get(entity)
            .map_or("-", |cleaner| cleaner.description());
        table.add_row(vec![
            entity.name().to_string(),
            entity.raw_file_name(),
            entity.clean_file_name(),
            entity.description().to_string(),
            cleaning.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn run_generate(args: &GenerateArgs) -> Result<Vec<GeneratedTable>> {
    let span = info_span!("university_dwh", mode = "generate");
    let _guard = span.enter();
    let options = GenerateOptions {
        rows: args.rows,
        seed: args.seed,
    };
    generate_stage(&args.raw_dir, options)
}

pub fn run_clean(args: &CleanArgs) -> Result<RunReport> {
    let paths = clean_paths(&args.raw_dir, args.cleaned_dir.as_deref());
    let span = info_span!("university_dwh", mode = "clean");
    let _guard = span.enter();

    let mut report = RunReport::new(RunMode::Clean, paths, args.output.dry_run);
    let stage = clean_stage(&report.paths, !args.output.dry_run)?;
    report.cleaned = stage.reports;
    finish(report, &args.output)
}

pub fn run_transform(args: &TransformArgs) -> Result<RunReport> {
    let paths = transform_paths(&args.cleaned_dir, args.output_dir.as_deref());
    let span = info_span!("university_dwh", mode = "transform");
    let _guard = span.enter();

    let mut report = RunReport::new(RunMode::Transform, paths, args.output.dry_run);
    let tables = load_cleaned(&report.paths)?;
    let stage = transform_stage(&tables, &report.paths, !args.output.dry_run)?;
    report.assembly = Some(stage.report);
    report.tables = stage.tables;
    finish(report, &args.output)
}

pub fn run_pipeline(args: &RunArgs) -> Result<RunReport> {
    let paths = run_paths(
        &args.raw_dir,
        args.cleaned_dir.as_deref(),
        args.output_dir.as_deref(),
    );
    let span = info_span!("university_dwh", mode = "run");
    let _guard = span.enter();

    let write = !args.output.dry_run;
    let mut report = RunReport::new(RunMode::Run, paths, args.output.dry_run);
    let cleaned = clean_stage(&report.paths, write)?;
    // Cleaned frames are all text, so handing them over in memory matches a re-read.
    let stage = transform_stage(&cleaned.tables, &report.paths, write)?;
    report.cleaned = cleaned.reports;
    report.assembly = Some(stage.report);
    report.tables = stage.tables;
    finish(report, &args.output)
}

fn finish(report: RunReport, output: &OutputArgs) -> Result<RunReport> {
    if let Some(path) = &output.report {
        write_report(&report, path)?;
    }
    Ok(report)
}
