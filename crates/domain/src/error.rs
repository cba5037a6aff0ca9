use crate::{ExerciseID, SetID};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("Please select at least one body area.")]
    NoBodyAreas,
    #[error("no workout")]
    NoWorkout,
    #[error("set {0} not found")]
    SetNotFound(SetID),
    #[error("exercise {exercise_id} not found in set {set_id}")]
    ExerciseNotFound {
        set_id: SetID,
        exercise_id: ExerciseID,
    },
    #[error("unknown exercise {0}")]
    UnknownExercise(ExerciseID),
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
