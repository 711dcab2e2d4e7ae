use crate::{Day, DayRoutine, ExerciseID, Reps, SetRecord, Weight, WeekComposer, WorkoutEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Empty,
    Editing,
    Saved,
}

/// Per-day editing state machine: `Empty → Editing → Saved`, with a
/// `Saved → Editing` re-entry that keeps existing entries.
///
/// Saving hands an owned snapshot to the week composer; the editor's
/// working list stays live and never shares structure with it.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEditor {
    day: Day,
    entries: Vec<WorkoutEntry>,
    state: EditorState,
}

impl DayEditor {
    #[must_use]
    pub fn new(day: Day) -> Self {
        Self {
            day,
            entries: Vec::new(),
            state: EditorState::Empty,
        }
    }

    /// Editor for a day that already has content, e.g. one populated
    /// by an earlier duplication. Starts out saved; `edit` unlocks it.
    #[must_use]
    pub fn hydrated(day: Day, workouts: Vec<WorkoutEntry>) -> Self {
        if workouts.is_empty() {
            return Self::new(day);
        }
        Self {
            day,
            entries: workouts,
            state: EditorState::Saved,
        }
    }

    #[must_use]
    pub fn day(&self) -> Day {
        self.day
    }

    #[must_use]
    pub fn state(&self) -> EditorState {
        self.state
    }

    #[must_use]
    pub fn entries(&self) -> &[WorkoutEntry] {
        &self.entries
    }

    /// Appends a new entry with an empty set ledger. A repeated id
    /// appends a second entry; merging is never done here. Ignored
    /// while saved.
    pub fn select_exercise(&mut self, exercise_id: ExerciseID) {
        if self.state == EditorState::Saved {
            return;
        }
        self.entries.push(WorkoutEntry::new(exercise_id));
        self.state = EditorState::Editing;
    }

    /// Removes the first entry with the given id. No-op if absent or
    /// while saved.
    pub fn delete_entry(&mut self, exercise_id: &ExerciseID) {
        if self.state == EditorState::Saved {
            return;
        }
        if let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.exercise_id == *exercise_id)
        {
            self.entries.remove(index);
        }
    }

    /// Adds a set to the first entry with the given id. Returns the
    /// appended record, or `None` if the entry is absent or the day is
    /// saved.
    pub fn add_set_to_entry(
        &mut self,
        exercise_id: &ExerciseID,
        weight: Weight,
        reps: Reps,
    ) -> Option<SetRecord> {
        if self.state == EditorState::Saved {
            return None;
        }
        self.entries
            .iter_mut()
            .find(|entry| entry.exercise_id == *exercise_id)
            .map(|entry| entry.sets.add_set(weight, reps))
    }

    /// Freezes the working list into a snapshot and locks the editor.
    ///
    /// Returns `None` without changing state when the working list is
    /// empty or the day is already saved.
    pub fn save(&mut self) -> Option<DayRoutine> {
        if self.entries.is_empty() || self.state == EditorState::Saved {
            return None;
        }
        self.state = EditorState::Saved;
        Some(DayRoutine {
            day: self.day,
            workouts: self.entries.clone(),
        })
    }

    /// Saves and forwards the snapshot to the week composer. This is
    /// the only point at which a day's data crosses into the aggregate.
    pub fn save_into(&mut self, week: &mut WeekComposer) -> bool {
        match self.save() {
            Some(routine) => {
                week.record_day(routine.day, routine.workouts);
                true
            }
            None => false,
        }
    }

    /// Unlocks a saved day for further changes without discarding its
    /// entries.
    pub fn edit(&mut self) {
        if self.state == EditorState::Saved {
            self.state = EditorState::Editing;
        }
    }
}
