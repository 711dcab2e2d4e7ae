use std::collections::BTreeMap;

use crate::{Day, DayRoutine, WorkoutEntry};

/// Owner of the six day slots of a weekly routine.
///
/// Saving one of the first three days mirrors its workouts onto the
/// paired slot (Day 1 → Day 4, Day 2 → Day 5, Day 3 → Day 6),
/// unconditionally overwriting whatever that slot held. The mirror is
/// one-way; saving Day 4/5/6 writes only its own slot. Slot assignment
/// is last-write-wins, there is no divergence tracking.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WeekComposer {
    slots: BTreeMap<Day, DayRoutine>,
}

impl WeekComposer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a composer from already-composed day routines, e.g. a
    /// plan loaded from storage. No mirroring is applied; the routines
    /// are taken as they were persisted. Later entries for the same
    /// day win.
    #[must_use]
    pub fn from_routines(routines: Vec<DayRoutine>) -> Self {
        Self {
            slots: routines
                .into_iter()
                .map(|routine| (routine.day, routine))
                .collect(),
        }
    }

    pub fn record_day(&mut self, day: Day, workouts: Vec<WorkoutEntry>) {
        if let Some(target) = day.mirror_target() {
            self.slots.insert(
                target,
                DayRoutine {
                    day: target,
                    workouts: workouts.clone(),
                },
            );
        }
        self.slots.insert(day, DayRoutine { day, workouts });
    }

    #[must_use]
    pub fn get_day(&self, day: Day) -> Option<&DayRoutine> {
        self.slots.get(&day)
    }

    /// Days with a recorded routine, in canonical order.
    pub fn recorded_days(&self) -> impl Iterator<Item = Day> + '_ {
        self.slots.keys().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
