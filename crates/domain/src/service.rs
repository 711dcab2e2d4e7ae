use log::{debug, error};

use crate::{
    Capabilities, Exercise, ExerciseIndex, ExerciseRepository, Member, MemberID, MemberRepository,
    ReadError, SubmissionPayload, SubmissionRepository, SubmitError, WeekComposer, finalize,
    member,
};

/// Facade over the external collaborators: directories for reference
/// data and the sink for finished plans.
pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> Service<R> {
    pub fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }

    pub fn exercise_index(&self) -> Result<ExerciseIndex, ReadError> {
        Ok(ExerciseIndex::new(self.get_exercises()?))
    }
}

impl<R: MemberRepository> Service<R> {
    pub fn get_members(&self) -> Result<Vec<Member>, ReadError> {
        log_on_error!(self.repository.read_members(), ReadError, "get", "members")
    }

    pub fn find_members(&self, query: &str) -> Result<Vec<Member>, ReadError> {
        let members = self.get_members()?;
        Ok(member::search(&members, query)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn get_capabilities(&self, id: &MemberID) -> Result<Capabilities, ReadError> {
        log_on_error!(
            self.repository.read_capabilities(id),
            ReadError,
            "get",
            "capabilities"
        )
    }
}

impl<R: SubmissionRepository> Service<R> {
    /// Normalizes and submits a composed week. The sink is only
    /// reached with a payload that passed validation.
    pub fn submit_routine(
        &self,
        week: &WeekComposer,
        member: &str,
        name: &str,
    ) -> Result<SubmissionPayload, SubmitError> {
        let payload = finalize(week, member, name)?;
        log_on_error!(
            self.repository.submit(&payload),
            SubmitError,
            "submit",
            "routine"
        )?;
        Ok(payload)
    }
}
