use crate::{Day, DayRoutine, MemberID, Name, SubmitError, ValidationError, WeekComposer};

/// Persistence or export sink for finished weekly plans. Callers must
/// only hand it payloads produced by `finalize`.
pub trait SubmissionRepository {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError>;
}

/// Complete, validated weekly plan. Constructed only by `finalize` and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload {
    member: MemberID,
    name: Name,
    week_routine: Vec<DayRoutine>,
}

impl SubmissionPayload {
    #[must_use]
    pub fn member(&self) -> &MemberID {
        &self.member
    }

    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The six day routines, ordered Day 1 to Day 6.
    #[must_use]
    pub fn week_routine(&self) -> &[DayRoutine] {
        &self.week_routine
    }
}

/// Normalizes a composed week into a submission payload.
///
/// Days 4 to 6 that were never recorded are filled from their mirror
/// source. After the fill, all six days must be present and member and
/// name must be non-empty; otherwise a validation error describing
/// exactly what is missing is returned.
pub fn finalize(
    week: &WeekComposer,
    member: &str,
    name: &str,
) -> Result<SubmissionPayload, ValidationError> {
    let mut week_routine: Vec<DayRoutine> = Vec::with_capacity(6);
    let mut missing: Vec<Day> = Vec::new();

    for &day in Day::iter() {
        if let Some(routine) = week.get_day(day) {
            week_routine.push(routine.clone());
            continue;
        }
        let fallback = day
            .mirror_source()
            .and_then(|source| week.get_day(source))
            .map(|source| DayRoutine {
                day,
                workouts: source.workouts.clone(),
            });
        match fallback {
            Some(routine) => week_routine.push(routine),
            None => missing.push(day),
        }
    }

    if !missing.is_empty() {
        return Err(ValidationError::MissingDays(missing));
    }

    week_routine.sort_by_key(|routine| routine.day.number());

    let member = member.trim();
    if member.is_empty() {
        return Err(ValidationError::MissingField("member"));
    }

    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    let name = Name::new(name)?;

    Ok(SubmissionPayload {
        member: MemberID::from(member),
        name,
        week_routine,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Reps, SetLedger, Weight, WorkoutEntry};

    use super::*;

    fn workouts(exercise_id: &str, sets: &[(f32, u32)]) -> Vec<WorkoutEntry> {
        vec![WorkoutEntry {
            exercise_id: exercise_id.into(),
            sets: sets
                .iter()
                .map(|&(w, r)| (Weight::new(w).unwrap(), Reps::new(r).unwrap()))
                .collect::<SetLedger>(),
        }]
    }

    fn first_half_week() -> WeekComposer {
        let mut week = WeekComposer::new();
        week.record_day(Day::One, workouts("ex1", &[(20.0, 10)]));
        week.record_day(Day::Two, vec![]);
        week.record_day(Day::Three, workouts("ex2", &[]));
        week
    }

    #[test]
    fn test_finalize_fills_unrecorded_second_half() {
        let week = WeekComposer::from_routines(vec![
            DayRoutine {
                day: Day::One,
                workouts: workouts("ex1", &[(20.0, 10)]),
            },
            DayRoutine {
                day: Day::Two,
                workouts: vec![],
            },
            DayRoutine {
                day: Day::Three,
                workouts: workouts("ex2", &[]),
            },
        ]);
        let payload = finalize(&week, "GYM-0001", "Strength Wk1").unwrap();
        assert_eq!(payload.week_routine().len(), 6);
        assert_eq!(
            payload.week_routine()[3].workouts,
            workouts("ex1", &[(20.0, 10)])
        );
        assert_eq!(payload.week_routine()[4].workouts, vec![]);
        assert_eq!(payload.week_routine()[5].workouts, workouts("ex2", &[]));
    }

    #[test]
    fn test_finalize_end_to_end_scenario() {
        let week = first_half_week();
        let payload = finalize(&week, "mem-1", "Strength Wk1").unwrap();
        assert_eq!(payload.member(), &MemberID::from("mem-1"));
        assert_eq!(payload.name(), &Name::new("Strength Wk1").unwrap());
        assert_eq!(
            payload
                .week_routine()
                .iter()
                .map(|r| r.day)
                .collect::<Vec<_>>(),
            Day::iter().copied().collect::<Vec<_>>()
        );
        assert_eq!(
            payload.week_routine()[3].workouts,
            payload.week_routine()[0].workouts
        );
        assert_eq!(payload.week_routine()[4].workouts, vec![]);
        assert_eq!(
            payload.week_routine()[5].workouts,
            payload.week_routine()[2].workouts
        );
    }

    #[test]
    fn test_finalize_missing_days_are_listed() {
        let week = WeekComposer::from_routines(vec![DayRoutine {
            day: Day::One,
            workouts: workouts("ex1", &[(20.0, 10)]),
        }]);
        assert_eq!(
            finalize(&week, "GYM-0001", "Strength Wk1"),
            Err(ValidationError::MissingDays(vec![
                Day::Two,
                Day::Three,
                Day::Five,
                Day::Six,
            ]))
        );
    }

    #[test]
    fn test_finalize_empty_week_lists_all_days() {
        assert_eq!(
            finalize(&WeekComposer::new(), "GYM-0001", "Strength Wk1"),
            Err(ValidationError::MissingDays(
                Day::iter().copied().collect()
            ))
        );
    }

    #[test]
    fn test_finalize_order_is_independent_of_insertion_order() {
        let mut forward = WeekComposer::new();
        forward.record_day(Day::One, workouts("ex1", &[(20.0, 10)]));
        forward.record_day(Day::Two, workouts("ex2", &[(30.0, 8)]));
        forward.record_day(Day::Three, workouts("ex3", &[(40.0, 6)]));

        let mut reversed = WeekComposer::new();
        reversed.record_day(Day::Three, workouts("ex3", &[(40.0, 6)]));
        reversed.record_day(Day::Two, workouts("ex2", &[(30.0, 8)]));
        reversed.record_day(Day::One, workouts("ex1", &[(20.0, 10)]));

        assert_eq!(
            finalize(&forward, "GYM-0001", "Wk1").unwrap(),
            finalize(&reversed, "GYM-0001", "Wk1").unwrap()
        );
    }

    #[rstest]
    #[case("", "Strength Wk1", ValidationError::MissingField("member"))]
    #[case("   ", "Strength Wk1", ValidationError::MissingField("member"))]
    #[case("GYM-0001", "", ValidationError::MissingField("name"))]
    #[case("GYM-0001", "  ", ValidationError::MissingField("name"))]
    fn test_finalize_required_fields(
        #[case] member: &str,
        #[case] name: &str,
        #[case] expected: ValidationError,
    ) {
        assert_eq!(finalize(&first_half_week(), member, name), Err(expected));
    }

    #[test]
    fn test_finalize_overlong_name_is_invalid() {
        assert!(matches!(
            finalize(&first_half_week(), "GYM-0001", &"x".repeat(81)),
            Err(ValidationError::InvalidName(_))
        ));
    }

    #[test]
    fn test_finalize_payload_days_are_deep_copies() {
        let mut week = first_half_week();
        let payload = finalize(&week, "GYM-0001", "Wk1").unwrap();
        week.record_day(Day::One, workouts("ex9", &[(50.0, 3)]));
        assert_eq!(
            payload.week_routine()[0].workouts,
            workouts("ex1", &[(20.0, 10)])
        );
    }
}
