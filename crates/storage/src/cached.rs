//! Read-through directory cache.
//!
//! Directory data is fetched once per session and kept for its whole
//! lifetime; there is no invalidation. Capability test results are
//! member-specific and always read through to the inner directory.

use std::cell::RefCell;

use liftplan_domain as domain;
use log::debug;

pub struct CachedDirectory<R> {
    inner: R,
    exercises: RefCell<Option<Vec<domain::Exercise>>>,
    members: RefCell<Option<Vec<domain::Member>>>,
}

impl<R> CachedDirectory<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            exercises: RefCell::new(None),
            members: RefCell::new(None),
        }
    }
}

impl<R: domain::ExerciseRepository> domain::ExerciseRepository for CachedDirectory<R> {
    fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        if let Some(exercises) = self.exercises.borrow().as_ref() {
            return Ok(exercises.clone());
        }
        let exercises = self.inner.read_exercises()?;
        debug!("populated exercise cache ({} entries)", exercises.len());
        *self.exercises.borrow_mut() = Some(exercises.clone());
        Ok(exercises)
    }
}

impl<R: domain::MemberRepository> domain::MemberRepository for CachedDirectory<R> {
    fn read_members(&self) -> Result<Vec<domain::Member>, domain::ReadError> {
        if let Some(members) = self.members.borrow().as_ref() {
            return Ok(members.clone());
        }
        let members = self.inner.read_members()?;
        debug!("populated member cache ({} entries)", members.len());
        *self.members.borrow_mut() = Some(members.clone());
        Ok(members)
    }

    fn read_capabilities(
        &self,
        id: &domain::MemberID,
    ) -> Result<domain::Capabilities, domain::ReadError> {
        self.inner.read_capabilities(id)
    }
}
