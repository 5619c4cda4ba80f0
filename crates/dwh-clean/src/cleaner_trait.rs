//! Entity cleaner trait and registry.
//!
//! Each of the fifteen entities has one [`EntityCleaner`]. The
//! [`CleanerRegistry`] looks cleaners up by entity and iterates them in
//! catalogue order; [`default_registry()`] returns a cached registry with all
//! of them registered.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use dwh_model::{CleanReport, Entity};
use polars::prelude::DataFrame;

use crate::cleaners;
use crate::error::{CleanError, Result};

/// A cleaned table together with the account of what happened to its rows.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub data: DataFrame,
    pub report: CleanReport,
}

/// Cleaning rules for one entity.
///
/// Implementors are stateless unit structs. `clean` never fails because of
/// bad rows; those are dropped or repaired and counted in the report. It
/// fails only when the input frame is structurally unusable.
pub trait EntityCleaner: Send + Sync {
    /// The entity this cleaner handles.
    fn entity(&self) -> Entity;

    /// Returns a human-readable summary of the rules applied.
    fn description(&self) -> &'static str {
        "Entity cleaner"
    }

    /// Cleans a raw all-string frame.
    ///
    /// # Errors
    ///
    /// Returns an error if a required column is missing or a frame
    /// operation fails.
    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome>;
}

/// Registry of cleaners indexed by entity.
pub struct CleanerRegistry {
    cleaners: BTreeMap<Entity, Box<dyn EntityCleaner>>,
}

impl CleanerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            cleaners: BTreeMap::new(),
        }
    }

    /// Registers a cleaner, replacing any existing one for its entity.
    pub fn register(&mut self, cleaner: Box<dyn EntityCleaner>) {
        self.cleaners.insert(cleaner.entity(), cleaner);
    }

    pub fn get(&self, entity: Entity) -> Option<&dyn EntityCleaner> {
        self.cleaners.get(&entity).map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.cleaners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleaners.is_empty()
    }

    /// Registered cleaners in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn EntityCleaner> + '_ {
        self.cleaners.values().map(|c| c.as_ref())
    }
}

impl Default for CleanerRegistry {
    fn default() -> Self {
        build_default_registry()
    }
}

static DEFAULT_REGISTRY: OnceLock<CleanerRegistry> = OnceLock::new();

/// Returns the registry with all fifteen cleaners, built on first access.
pub fn default_registry() -> &'static CleanerRegistry {
    DEFAULT_REGISTRY.get_or_init(build_default_registry)
}

fn build_default_registry() -> CleanerRegistry {
    let mut registry = CleanerRegistry::new();
    registry.register(Box::new(cleaners::AttendanceCleaner));
    registry.register(Box::new(cleaners::ClassroomCleaner));
    registry.register(Box::new(cleaners::CoursePrerequisiteCleaner));
    registry.register(Box::new(cleaners::CourseCleaner));
    registry.register(Box::new(cleaners::DepartmentCleaner));
    registry.register(Box::new(cleaners::ExamResultCleaner));
    registry.register(Box::new(cleaners::ExamScheduleCleaner));
    registry.register(Box::new(cleaners::FacultyCleaner));
    registry.register(Box::new(cleaners::FacultyAssignmentCleaner));
    registry.register(Box::new(cleaners::FeedbackCleaner));
    registry.register(Box::new(cleaners::GradeCleaner));
    registry.register(Box::new(cleaners::SemesterCleaner));
    registry.register(Box::new(cleaners::EnrollmentCleaner));
    registry.register(Box::new(cleaners::DropoutLogCleaner));
    registry.register(Box::new(cleaners::StudentCleaner));
    registry
}

/// Cleans one entity table with the default registry.
pub fn clean_entity(entity: Entity, raw: &DataFrame) -> Result<CleanOutcome> {
    let cleaner = default_registry()
        .get(entity)
        .ok_or(CleanError::NotRegistered(entity))?;
    cleaner.clean(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_covers_catalogue() {
        let registry = default_registry();
        assert_eq!(registry.len(), Entity::ALL.len());
        let order: Vec<Entity> = registry.iter().map(|c| c.entity()).collect();
        let mut expected = Entity::ALL.to_vec();
        expected.sort();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_empty_registry() {
        let registry = CleanerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get(Entity::Grade).is_none());
    }
}
