#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod day;
mod editor;
mod error;
mod exercise;
mod member;
mod name;
mod quantity;
mod service;
mod set_ledger;
mod submission;
mod week;

pub use day::{Day, DayError, DayRoutine, WorkoutEntry};
pub use editor::{DayEditor, EditorState};
pub use error::{ReadError, StorageError, SubmitError, ValidationError};
pub use exercise::{Exercise, ExerciseID, ExerciseIndex, ExerciseRepository};
pub use member::{Capabilities, Member, MemberID, MemberRepository, search as search_members};
pub use name::{Name, NameError};
pub use quantity::{Reps, RepsError, Weight, WeightError};
pub use service::Service;
pub use set_ledger::{SetLedger, SetRecord};
pub use submission::{SubmissionPayload, SubmissionRepository, finalize};
pub use week::WeekComposer;
