use crate::{Reps, Weight};

/// One prescribed set: number within the exercise, load and reps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetRecord {
    pub set_no: u32,
    pub weight: Weight,
    pub reps: Reps,
}

/// Ordered list of prescribed sets for one exercise entry on one day.
///
/// Set numbers follow insertion order and are not reassigned on
/// removal, so they need not stay contiguous.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SetLedger {
    records: Vec<SetRecord>,
}

impl SetLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a set numbered after the current count. Never fails.
    pub fn add_set(&mut self, weight: Weight, reps: Reps) -> SetRecord {
        #[allow(clippy::cast_possible_truncation)]
        let record = SetRecord {
            set_no: self.records.len() as u32 + 1,
            weight,
            reps,
        };
        self.records.push(record);
        record
    }

    /// Entry-boundary variant: invalid numeric input is recorded as
    /// zero rather than rejected.
    pub fn add_set_from_input(&mut self, weight: &str, reps: &str) -> SetRecord {
        self.add_set(Weight::from_input(weight), Reps::from_input(reps))
    }

    /// Removes the first record with the given number. Remaining
    /// records keep their numbers. No-op if absent.
    pub fn remove_set(&mut self, set_no: u32) {
        if let Some(index) = self.records.iter().position(|r| r.set_no == set_no) {
            self.records.remove(index);
        }
    }

    /// Restartable read-only view for rendering and export.
    pub fn sets(&self) -> impl Iterator<Item = &SetRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(Weight, Reps)> for SetLedger {
    fn from_iter<I: IntoIterator<Item = (Weight, Reps)>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for (weight, reps) in iter {
            ledger.add_set(weight, reps);
        }
        ledger
    }
}
