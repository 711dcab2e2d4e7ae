//! In-process collaborators backed by plain collections. Used by
//! hosts that resolve directory data ahead of time and by tests.

use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;

use liftplan_domain as domain;

/// Directory holding already-resolved exercise and member data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDirectory {
    exercises: Vec<domain::Exercise>,
    members: Vec<domain::Member>,
    capabilities: BTreeMap<domain::MemberID, domain::Capabilities>,
}

impl InMemoryDirectory {
    #[must_use]
    pub fn new(
        exercises: Vec<domain::Exercise>,
        members: Vec<domain::Member>,
        capabilities: BTreeMap<domain::MemberID, domain::Capabilities>,
    ) -> Self {
        Self {
            exercises,
            members,
            capabilities,
        }
    }
}

impl domain::ExerciseRepository for InMemoryDirectory {
    fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        Ok(self.exercises.clone())
    }
}

impl domain::MemberRepository for InMemoryDirectory {
    fn read_members(&self) -> Result<Vec<domain::Member>, domain::ReadError> {
        Ok(self.members.clone())
    }

    fn read_capabilities(
        &self,
        id: &domain::MemberID,
    ) -> Result<domain::Capabilities, domain::ReadError> {
        self.capabilities
            .get(id)
            .copied()
            .ok_or(domain::ReadError::NotFound)
    }
}

/// Sink that records submitted payloads instead of persisting them.
#[derive(Debug, Default)]
pub struct InMemorySink {
    submitted: RefCell<Vec<domain::SubmissionPayload>>,
}

impl InMemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn submitted(&self) -> Ref<'_, Vec<domain::SubmissionPayload>> {
        self.submitted.borrow()
    }
}

impl domain::SubmissionRepository for InMemorySink {
    fn submit(&self, payload: &domain::SubmissionPayload) -> Result<(), domain::SubmitError> {
        self.submitted.borrow_mut().push(payload.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use domain::{ExerciseRepository, MemberRepository, SubmissionRepository};
    use pretty_assertions::assert_eq;

    use super::*;

    fn directory() -> InMemoryDirectory {
        InMemoryDirectory::new(
            vec![
                domain::Exercise {
                    id: "ex1".into(),
                    name: String::from("Bench Press"),
                },
                domain::Exercise {
                    id: "ex2".into(),
                    name: String::from("Back Squat"),
                },
            ],
            vec![domain::Member {
                id: "GYM-0001".into(),
                name: String::from("Ada Deshmukh"),
                height_cm: Some(168),
                weight_kg: Some(61.5),
                age: Some(29),
                gender: Some(String::from("female")),
            }],
            BTreeMap::from([(
                "GYM-0001".into(),
                domain::Capabilities {
                    max_weight: domain::Weight::new(80.0).unwrap(),
                    max_reps: domain::Reps::new(12).unwrap(),
                },
            )]),
        )
    }

    #[test]
    fn test_read_exercises() {
        assert_eq!(directory().read_exercises().unwrap().len(), 2);
    }

    #[test]
    fn test_read_capabilities_miss() {
        assert!(matches!(
            directory().read_capabilities(&"GYM-0009".into()),
            Err(domain::ReadError::NotFound)
        ));
    }

    #[test]
    fn test_sink_records_payloads() {
        let sink = InMemorySink::new();
        let mut week = domain::WeekComposer::new();
        for &day in &[domain::Day::One, domain::Day::Two, domain::Day::Three] {
            week.record_day(day, vec![domain::WorkoutEntry::new("ex1".into())]);
        }
        let payload = domain::finalize(&week, "GYM-0001", "Strength Wk1").unwrap();
        sink.submit(&payload).unwrap();
        assert_eq!(*sink.submitted(), vec![payload]);
    }
}
