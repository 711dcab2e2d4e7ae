//! JSON wire shapes for directory fixtures and plan export.
//!
//! Field names follow the documents produced by the gym's existing
//! tooling (camelCase, `Member`/`Name`/`WeekRoutine` at the export
//! top level), so exported plans stay readable by it.

use std::cell::RefCell;
use std::io::Write;

use liftplan_domain as domain;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(thiserror::Error, Debug)]
pub enum DirectoryError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Weight(#[from] domain::WeightError),
    #[error(transparent)]
    Reps(#[from] domain::RepsError),
}

#[derive(Deserialize)]
struct ExerciseDoc {
    id: String,
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberDoc {
    enrollment_id: String,
    name: String,
    height: Option<u32>,
    weight: Option<f32>,
    age: Option<u32>,
    gender: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CapabilitiesDoc {
    max_weight: f32,
    max_reps: u32,
}

pub fn exercises_from_json(data: &str) -> Result<Vec<domain::Exercise>, DirectoryError> {
    let docs: Vec<ExerciseDoc> = serde_json::from_str(data)?;
    Ok(docs
        .into_iter()
        .map(|doc| domain::Exercise {
            id: doc.id.into(),
            name: doc.name,
        })
        .collect())
}

pub fn members_from_json(data: &str) -> Result<Vec<domain::Member>, DirectoryError> {
    let docs: Vec<MemberDoc> = serde_json::from_str(data)?;
    Ok(docs
        .into_iter()
        .map(|doc| domain::Member {
            id: doc.enrollment_id.into(),
            name: doc.name,
            height_cm: doc.height,
            weight_kg: doc.weight,
            age: doc.age,
            gender: doc.gender,
        })
        .collect())
}

pub fn capabilities_from_json(data: &str) -> Result<domain::Capabilities, DirectoryError> {
    let doc: CapabilitiesDoc = serde_json::from_str(data)?;
    Ok(domain::Capabilities {
        max_weight: domain::Weight::new(doc.max_weight)?,
        max_reps: domain::Reps::new(doc.max_reps)?,
    })
}

/// Display line for one prescribed set, as printed on routine sheets.
#[must_use]
pub fn set_line(record: &domain::SetRecord) -> String {
    format!(
        "Set {}: {} kg x {} reps",
        record.set_no, record.weight, record.reps
    )
}

/// Builds the export document for a finalized plan. Exercise names are
/// resolved against the directory snapshot; unknown ids get an empty
/// name rather than failing the export.
#[must_use]
pub fn payload_to_json(
    payload: &domain::SubmissionPayload,
    index: &domain::ExerciseIndex,
) -> Value {
    json!({
        "Member": payload.member().to_string(),
        "Name": payload.name().to_string(),
        "WeekRoutine": payload
            .week_routine()
            .iter()
            .map(|routine| {
                json!({
                    "day": routine.day.to_string(),
                    "workouts": routine
                        .workouts
                        .iter()
                        .map(|workout| {
                            json!({
                                "exerciseId": workout.exercise_id.to_string(),
                                "name": index.resolve_name(&workout.exercise_id),
                                "sets": workout
                                    .sets
                                    .sets()
                                    .map(|record| {
                                        json!({
                                            "setNo": record.set_no,
                                            "weight": f32::from(record.weight),
                                            "reps": u32::from(record.reps),
                                        })
                                    })
                                    .collect::<Vec<_>>(),
                            })
                        })
                        .collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>(),
    })
}

/// Sink writing one export document per submitted plan.
pub struct JsonWriterSink<W: Write> {
    writer: RefCell<W>,
    index: domain::ExerciseIndex,
}

impl<W: Write> JsonWriterSink<W> {
    pub fn new(writer: W, index: domain::ExerciseIndex) -> Self {
        Self {
            writer: RefCell::new(writer),
            index,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> domain::SubmissionRepository for JsonWriterSink<W> {
    fn submit(&self, payload: &domain::SubmissionPayload) -> Result<(), domain::SubmitError> {
        let document = payload_to_json(payload, &self.index);
        let mut writer = self.writer.borrow_mut();
        serde_json::to_writer_pretty(&mut *writer, &document)
            .map_err(|err| domain::SubmitError::Other(err.into()))?;
        writer
            .write_all(b"\n")
            .map_err(|err| domain::SubmitError::Other(err.into()))?;
        Ok(())
    }
}
