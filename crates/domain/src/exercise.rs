use std::collections::BTreeMap;

use derive_more::{AsRef, Display};

use crate::ReadError;

/// Read-only lookup table of exercises known to the gym.
///
/// Exercise data is owned by an external directory. The core only ever
/// resolves ids it received from that directory; it never mints ids.
pub trait ExerciseRepository {
    fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
}

#[derive(AsRef, Debug, Display, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Directory snapshot keyed by id, for resolving display names.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseIndex(BTreeMap<ExerciseID, Exercise>);

impl ExerciseIndex {
    #[must_use]
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self(
            exercises
                .into_iter()
                .map(|exercise| (exercise.id.clone(), exercise))
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.0.get(id)
    }

    /// An id without a directory entry resolves to an empty name. A
    /// stale id must not fail rendering or export.
    #[must_use]
    pub fn resolve_name(&self, id: &ExerciseID) -> &str {
        self.0.get(id).map_or("", |exercise| exercise.name.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
