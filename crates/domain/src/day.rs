use std::{fmt, slice::Iter};

use crate::{ExerciseID, SetLedger};

/// Canonical slot of the six-day training week.
///
/// The first half of the week is mirrored onto the second: Day 1 pairs
/// with Day 4, Day 2 with Day 5, Day 3 with Day 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl Day {
    pub fn iter() -> Iter<'static, Day> {
        static DAYS: [Day; 6] = [Day::One, Day::Two, Day::Three, Day::Four, Day::Five, Day::Six];
        DAYS.iter()
    }

    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Day::One => 1,
            Day::Two => 2,
            Day::Three => 3,
            Day::Four => 4,
            Day::Five => 5,
            Day::Six => 6,
        }
    }

    /// The slot this day is duplicated onto when saved, if any.
    #[must_use]
    pub fn mirror_target(self) -> Option<Day> {
        match self {
            Day::One => Some(Day::Four),
            Day::Two => Some(Day::Five),
            Day::Three => Some(Day::Six),
            Day::Four | Day::Five | Day::Six => None,
        }
    }

    /// The slot this day is filled from when left empty, if any.
    #[must_use]
    pub fn mirror_source(self) -> Option<Day> {
        match self {
            Day::One | Day::Two | Day::Three => None,
            Day::Four => Some(Day::One),
            Day::Five => Some(Day::Two),
            Day::Six => Some(Day::Three),
        }
    }
}

impl TryFrom<u8> for Day {
    type Error = DayError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Day::One),
            2 => Ok(Day::Two),
            3 => Ok(Day::Three),
            4 => Ok(Day::Four),
            5 => Ok(Day::Five),
            6 => Ok(Day::Six),
            _ => Err(DayError::OutOfRange(value)),
        }
    }
}

impl TryFrom<&str> for Day {
    type Error = DayError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let number = value
            .trim()
            .strip_prefix("Day ")
            .and_then(|suffix| suffix.parse::<u8>().ok())
            .ok_or_else(|| DayError::InvalidLabel(value.to_string()))?;
        Day::try_from(number)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}", self.number())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum DayError {
    #[error("day must be in the range 1 to 6 ({0} given)")]
    OutOfRange(u8),
    #[error("invalid day label: {0}")]
    InvalidLabel(String),
}

/// One exercise picked for a day, with its prescribed sets.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutEntry {
    pub exercise_id: ExerciseID,
    pub sets: SetLedger,
}

impl WorkoutEntry {
    #[must_use]
    pub fn new(exercise_id: ExerciseID) -> Self {
        Self {
            exercise_id,
            sets: SetLedger::new(),
        }
    }
}

/// Frozen snapshot of a day's workout list, emitted by a day editor on
/// save. Owns all of its data, so cloning yields a deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRoutine {
    pub day: Day,
    pub workouts: Vec<WorkoutEntry>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_day_iter_is_ascending() {
        let days = Day::iter().copied().collect::<Vec<_>>();
        let mut sorted = days.clone();
        sorted.sort_unstable();
        assert_eq!(days, sorted);
        assert_eq!(days.len(), 6);
    }

    #[rstest]
    #[case(Day::One, Some(Day::Four))]
    #[case(Day::Two, Some(Day::Five))]
    #[case(Day::Three, Some(Day::Six))]
    #[case(Day::Four, None)]
    #[case(Day::Five, None)]
    #[case(Day::Six, None)]
    fn test_day_mirror_target(#[case] day: Day, #[case] expected: Option<Day>) {
        assert_eq!(day.mirror_target(), expected);
    }

    #[rstest]
    #[case(Day::Four, Some(Day::One))]
    #[case(Day::Five, Some(Day::Two))]
    #[case(Day::Six, Some(Day::Three))]
    #[case(Day::One, None)]
    fn test_day_mirror_source(#[case] day: Day, #[case] expected: Option<Day>) {
        assert_eq!(day.mirror_source(), expected);
    }

    #[rstest]
    #[case(Day::One, "Day 1")]
    #[case(Day::Six, "Day 6")]
    fn test_day_display(#[case] day: Day, #[case] expected: &str) {
        assert_eq!(day.to_string(), expected);
    }

    #[rstest]
    #[case(1, Ok(Day::One))]
    #[case(6, Ok(Day::Six))]
    #[case(0, Err(DayError::OutOfRange(0)))]
    #[case(7, Err(DayError::OutOfRange(7)))]
    fn test_day_try_from_u8(#[case] value: u8, #[case] expected: Result<Day, DayError>) {
        assert_eq!(Day::try_from(value), expected);
    }

    #[rstest]
    #[case("Day 3", Ok(Day::Three))]
    #[case(" Day 4 ", Ok(Day::Four))]
    #[case("Day 9", Err(DayError::OutOfRange(9)))]
    #[case("Tuesday", Err(DayError::InvalidLabel("Tuesday".to_string())))]
    fn test_day_try_from_label(#[case] value: &str, #[case] expected: Result<Day, DayError>) {
        assert_eq!(Day::try_from(value), expected);
    }
}
