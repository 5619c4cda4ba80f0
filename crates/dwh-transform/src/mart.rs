//! The assembled data mart and its tabular rendering.

use dwh_ingest::{format_numeric, string_column};
use dwh_model::columns::{
    ADMISSION_DATE, ADMISSION_DAY, ADMISSION_MONTH, ADMISSION_YEAR, ATTENDANCE_RATE, COURSE_ID,
    DATE_ID, DEPARTMENT_ID, DROPOUT_FLAG, EXAM_SCORE_AVG, FACT_ID, FACULTY_ID,
    FEEDBACK_DEVIATION, SEMESTER_ID, STUDENT_ID,
};
use dwh_model::{
    AssemblyReport, DimDateRow, Entity, FactRow, MartTable, Metric, UNRECORDED_MARKER,
};
use polars::prelude::{Column, DataFrame};

use crate::error::{Result, TransformError};
use crate::tables::CleanedTables;

/// Fact rows, dimensions and the join accounting of one assembly run.
#[derive(Debug, Clone)]
pub struct DataMart {
    pub fact: Vec<FactRow>,
    pub dim_date: Vec<DimDateRow>,
    pub students: DataFrame,
    pub courses: DataFrame,
    pub faculty: DataFrame,
    pub semesters: DataFrame,
    pub report: AssemblyReport,
}

impl DataMart {
    /// `fact_academic_engagement` with unrecorded metrics spelled out.
    pub fn fact_frame(&self) -> Result<DataFrame> {
        let fact = &self.fact;
        let df = DataFrame::new(vec![
            Column::new(
                FACT_ID.into(),
                fact.iter().map(|r| r.fact_id).collect::<Vec<u64>>(),
            ),
            string_column(STUDENT_ID, texts(fact, |r| Some(r.student_id.clone()))),
            string_column(COURSE_ID, texts(fact, |r| Some(r.course_id.clone()))),
            string_column(FACULTY_ID, texts(fact, |r| r.faculty_id.clone())),
            string_column(SEMESTER_ID, texts(fact, |r| Some(r.semester_id.clone()))),
            Column::new(
                DATE_ID.into(),
                fact.iter().map(|r| r.date_id).collect::<Vec<Option<u32>>>(),
            ),
            string_column(
                EXAM_SCORE_AVG,
                texts(fact, |r| Some(format_numeric(r.exam_score_avg))),
            ),
            string_column(
                ATTENDANCE_RATE,
                texts(fact, |r| Some(render_metric(r.attendance_rate))),
            ),
            string_column(
                FEEDBACK_DEVIATION,
                texts(fact, |r| Some(render_metric(r.feedback_deviation))),
            ),
            Column::new(
                DROPOUT_FLAG.into(),
                fact.iter()
                    .map(|r| i32::from(r.dropout_flag))
                    .collect::<Vec<i32>>(),
            ),
        ])?;
        Ok(df)
    }

    /// `dim_date`; the admission date itself is only the join key and is not written.
    pub fn dim_date_frame(&self) -> Result<DataFrame> {
        let rows = &self.dim_date;
        let df = DataFrame::new(vec![
            Column::new(
                DATE_ID.into(),
                rows.iter().map(|r| r.date_id).collect::<Vec<u32>>(),
            ),
            Column::new(
                ADMISSION_DAY.into(),
                rows.iter().map(|r| r.day).collect::<Vec<u32>>(),
            ),
            Column::new(
                ADMISSION_MONTH.into(),
                rows.iter().map(|r| r.month).collect::<Vec<u32>>(),
            ),
            Column::new(
                ADMISSION_YEAR.into(),
                rows.iter().map(|r| r.year).collect::<Vec<i32>>(),
            ),
        ])?;
        Ok(df)
    }

    /// Renders one output table.
    pub fn table(&self, table: MartTable) -> Result<DataFrame> {
        match table {
            MartTable::FactAcademicEngagement => self.fact_frame(),
            MartTable::Date => self.dim_date_frame(),
            MartTable::Students => Ok(self.students.clone()),
            MartTable::Courses => Ok(self.courses.clone()),
            MartTable::Faculty => Ok(self.faculty.clone()),
            MartTable::Semesters => Ok(self.semesters.clone()),
        }
    }

    /// Row count of one output table without rendering it.
    pub fn row_count(&self, table: MartTable) -> usize {
        match table {
            MartTable::FactAcademicEngagement => self.fact.len(),
            MartTable::Date => self.dim_date.len(),
            MartTable::Students => self.students.height(),
            MartTable::Courses => self.courses.height(),
            MartTable::Faculty => self.faculty.height(),
            MartTable::Semesters => self.semesters.height(),
        }
    }
}

fn texts<F>(rows: &[FactRow], cell: F) -> Vec<Option<String>>
where
    F: Fn(&FactRow) -> Option<String>,
{
    rows.iter().map(cell).collect()
}

/// Metric cell text: the number, or the unrecorded marker.
pub fn render_metric(metric: Metric) -> String {
    match metric {
        Metric::Recorded(value) => format_numeric(value),
        Metric::Unrecorded => UNRECORDED_MARKER.to_string(),
    }
}

fn without(tables: &CleanedTables, entity: Entity, columns: &[&str]) -> Result<DataFrame> {
    let mut df = tables.get(entity)?.clone();
    for column in columns {
        if df.column(column).is_err() {
            return Err(TransformError::MissingColumn {
                entity,
                column: (*column).to_string(),
            });
        }
        df = df.drop(column)?;
    }
    Ok(df)
}

/// Students, courses, faculty and semesters with join-only columns removed.
pub(crate) fn dimension_tables(
    tables: &CleanedTables,
) -> Result<(DataFrame, DataFrame, DataFrame, DataFrame)> {
    Ok((
        without(tables, Entity::Student, &[DEPARTMENT_ID, ADMISSION_DATE])?,
        without(tables, Entity::Course, &[DEPARTMENT_ID])?,
        without(tables, Entity::Faculty, &[DEPARTMENT_ID])?,
        tables.get(Entity::Semester)?.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_metric() {
        assert_eq!(render_metric(Metric::Recorded(0.5)), "0.5");
        assert_eq!(render_metric(Metric::Recorded(-1.0)), "-1");
        assert_eq!(render_metric(Metric::Unrecorded), "Data Unrecorded");
    }
}
