//! Classroom cleaner.
//!
//! A missing ResourceType is inferred from capacity: the most common capacity
//! of each known resource type is computed, and the row takes the type whose
//! mode is closest to its own capacity.

use dwh_ingest::parse_f64;
use dwh_model::columns::{BUILDING_NAME, CAPACITY, RESOURCE_TYPE, ROOM_ID};
use dwh_model::{DropReason, Entity, RepairReason};
use polars::prelude::DataFrame;

use super::common::CleaningFrame;
use crate::cleaner_trait::{CleanOutcome, EntityCleaner};
use crate::error::Result;
use crate::imputation::{category_modes, nearest_mode_category};

pub(crate) struct ClassroomCleaner;

impl EntityCleaner for ClassroomCleaner {
    fn entity(&self) -> Entity {
        Entity::Classroom
    }

    fn description(&self) -> &'static str {
        "Positive capacity required; missing resource type imputed from the nearest capacity mode"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.trim(&[ROOM_ID, BUILDING_NAME, RESOURCE_TYPE])?;
        work.keep_numeric(CAPACITY, DropReason::NonPositive(CAPACITY), |v| v > 0.0)?;
        impute_resource_type(&mut work)?;
        work.dedupe_rows()?;
        Ok(work.finish())
    }
}

fn impute_resource_type(work: &mut CleaningFrame) -> Result<()> {
    let capacities: Vec<Option<f64>> = work
        .values(CAPACITY)?
        .iter()
        .map(|value| value.as_deref().and_then(parse_f64))
        .collect();
    let types = work.values(RESOURCE_TYPE)?;

    let modes = category_modes(
        types
            .iter()
            .zip(&capacities)
            .filter_map(|(kind, capacity)| Some((kind.as_deref()?, (*capacity)?))),
    );

    let mut imputed = 0;
    let filled: Vec<Option<String>> = types
        .iter()
        .zip(&capacities)
        .map(|(kind, capacity)| match (kind, capacity) {
            (Some(kind), _) => Some(kind.clone()),
            (None, Some(capacity)) => {
                let nearest = nearest_mode_category(&modes, *capacity).map(str::to_string);
                if nearest.is_some() {
                    imputed += 1;
                }
                nearest
            }
            (None, None) => None,
        })
        .collect();

    work.set(RESOURCE_TYPE, filled)?;
    work.report_mut()
        .record_repair(RepairReason::NearestModeImputed(RESOURCE_TYPE), imputed);
    Ok(())
}
