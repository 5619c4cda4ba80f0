use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dwh_cli::generate::GeneratedTable;
use dwh_cli::types::{MartTableSummary, RunReport};
use dwh_model::{AssemblyReport, CleanReport};

/// Reasons listed per entity before the rest are folded into "+N more".
const MAX_REASONS: usize = 3;

pub fn print_summary(report: &RunReport) {
    if report.dry_run {
        println!("Dry run: no tables written");
    }
    if !report.cleaned.is_empty() {
        println!("Raw: {}", report.paths.raw_dir.display());
        println!("Cleaned: {}", report.paths.cleaned_dir.display());
        print_clean_table(&report.cleaned);
    }
    if let Some(assembly) = &report.assembly {
        if report.cleaned.is_empty() {
            println!("Cleaned: {}", report.paths.cleaned_dir.display());
        }
        println!("Transformed: {}", report.paths.transformed_dir.display());
        print_assembly_table(assembly);
        print_mart_table(&report.tables);
    }
}

pub fn print_generated(tables: &[GeneratedTable]) {
    if let Some(first) = tables.first()
        && let Some(dir) = first.path.parent()
    {
        println!("Raw: {}", dir.display());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Entity"), header_cell("Rows"), header_cell("File")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for generated in tables {
        let file = generated
            .path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
        table.add_row(vec![
            entity_cell(&generated.entity.to_string()),
            Cell::new(generated.rows),
            Cell::new(file),
        ]);
    }
    println!("{table}");
}

fn print_clean_table(reports: &[CleanReport]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("Rows In"),
        header_cell("Rows Out"),
        header_cell("Dropped"),
        header_cell("Repaired"),
        header_cell("Top Reasons"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_in = 0usize;
    let mut total_out = 0usize;
    let mut total_dropped = 0usize;
    let mut total_repaired = 0usize;
    for report in reports {
        total_in += report.rows_in;
        total_out += report.rows_out;
        total_dropped += report.dropped_total();
        total_repaired += report.repaired_total();
        table.add_row(vec![
            entity_cell(&report.entity.to_string()),
            Cell::new(report.rows_in),
            Cell::new(report.rows_out),
            count_cell(report.dropped_total(), Color::Yellow),
            count_cell(report.repaired_total(), Color::Blue),
            reasons_cell(report),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_in).add_attribute(Attribute::Bold),
        Cell::new(total_out).add_attribute(Attribute::Bold),
        count_cell(total_dropped, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_repaired, Color::Blue).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn print_assembly_table(report: &AssemblyReport) {
    let rows = [
        ("Enrollments", report.enrollment_rows),
        ("Faculty assignments", report.assignment_rows),
        ("Enrollment x assignment", report.spine_rows),
        ("Joined with students", report.student_joined_rows),
        ("Admission dates", report.date_dimension_rows),
        ("Fact rows", report.fact_rows),
        ("Without DateID", report.missing_date_id),
        ("Exam average zero-filled", report.exam_zero_filled),
        ("Attendance unrecorded", report.attendance_unrecorded),
        ("Feedback unrecorded", report.feedback_unrecorded),
        ("Dropout flagged", report.dropout_flagged),
    ];
    let mut table = Table::new();
    table.set_header(vec![header_cell("Join chain"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    println!("{table}");
}

fn print_mart_table(summaries: &[MartTableSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Written"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for summary in summaries {
        let name = if summary.table.is_fact() {
            Cell::new(summary.table)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(summary.table)
        };
        let written = match &summary.path {
            Some(_) => Cell::new("✓")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
            None => dim_cell("-"),
        };
        table.add_row(vec![name, Cell::new(summary.rows), written]);
    }
    println!("{table}");
}

fn reasons_cell(report: &CleanReport) -> Cell {
    let mut reasons: Vec<(String, usize)> = report
        .dropped
        .iter()
        .map(|(reason, count)| (format!("-{count} {reason}"), *count))
        .chain(
            report
                .repaired
                .iter()
                .map(|(reason, count)| (format!("~{count} {reason}"), *count)),
        )
        .collect();
    if reasons.is_empty() {
        return dim_cell("-");
    }
    reasons.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let hidden = reasons.len().saturating_sub(MAX_REASONS);
    let mut text: Vec<String> = reasons
        .into_iter()
        .take(MAX_REASONS)
        .map(|(label, _)| label)
        .collect();
    if hidden > 0 {
        text.push(format!("+{hidden} more"));
    }
    Cell::new(text.join("\n"))
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn entity_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
