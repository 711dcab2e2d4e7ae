use derive_more::{AsRef, Display};

use crate::{ReadError, Reps, Weight};

/// Read-only access to the gym's member roster and capability test
/// results. Consumed by the composition engine, never mutated by it.
pub trait MemberRepository {
    fn read_members(&self) -> Result<Vec<Member>, ReadError>;
    fn read_capabilities(&self, id: &MemberID) -> Result<Capabilities, ReadError>;
}

/// Enrollment id issued by the gym's administration.
#[derive(AsRef, Debug, Display, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MemberID(String);

impl MemberID {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for MemberID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MemberID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: MemberID,
    pub name: String,
    pub height_cm: Option<u32>,
    pub weight_kg: Option<f32>,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

/// Global capability test results of a member (strongest single set).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capabilities {
    pub max_weight: Weight,
    pub max_reps: Reps,
}

/// Case-insensitive member picker filter: matches on name or
/// enrollment id, empty query matches everyone.
#[must_use]
pub fn search<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    let query = query.trim().to_lowercase();
    members
        .iter()
        .filter(|m| {
            query.is_empty()
                || m.name.to_lowercase().contains(&query)
                || m.id.as_ref().to_lowercase().contains(&query)
        })
        .collect()
}
