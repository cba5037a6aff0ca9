use derive_more::{AsRef, Deref, Display};
use uuid::Uuid;

use crate::{BodyArea, Exercise, ExerciseID};

/// The recipe that produced a workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutOptions {
    pub body_areas: Vec<BodyArea>,
    pub mode: Mode,
    pub count: ExerciseCount,
    pub group_by_station: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Regular,
    Superset(Pairing),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    Agonist,
    Antagonist,
    #[default]
    Random,
}

impl Pairing {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Pairing::Agonist => "Agonist",
            Pairing::Antagonist => "Antagonist",
            Pairing::Random => "Random",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [Pairing::Agonist, Pairing::Antagonist, Pairing::Random]
            .into_iter()
            .find(|p| p.name() == name)
    }
}

/// Total number of exercises requested across all sets.
#[derive(Deref, Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseCount(u32);

impl ExerciseCount {
    pub fn new(value: u32) -> Result<Self, ExerciseCountError> {
        if value == 0 {
            return Err(ExerciseCountError::Zero);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for ExerciseCount {
    type Error = ExerciseCountError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => ExerciseCount::new(parsed_value),
            Err(_) => Err(ExerciseCountError::ParseError),
        }
    }
}

impl Default for ExerciseCount {
    fn default() -> Self {
        Self(10)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseCountError {
    #[error("Exercise count must be at least 1")]
    Zero,
    #[error("Exercise count must be an integer")]
    ParseError,
}

/// A generated workout together with the options that produced it.
///
/// `options` is only absent for sessions restored from records written before options were
/// stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub sets: Vec<WorkoutSet>,
    pub options: Option<WorkoutOptions>,
}

impl Workout {
    #[must_use]
    pub fn exercises(&self) -> impl Iterator<Item = &WorkoutExercise> {
        self.sets.iter().flat_map(|s| s.exercises().iter())
    }

    #[must_use]
    pub fn contains_exercise(&self, exercise_id: &ExerciseID) -> bool {
        self.exercises().any(|e| e.exercise.id == *exercise_id)
    }

    #[must_use]
    pub fn set(&self, set_id: &SetID) -> Option<&WorkoutSet> {
        self.sets.iter().find(|s| s.id == *set_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSet {
    pub id: SetID,
    exercises: Vec<WorkoutExercise>,
}

impl WorkoutSet {
    #[must_use]
    pub fn regular(id: SetID, exercise: WorkoutExercise) -> Self {
        Self {
            id,
            exercises: vec![exercise],
        }
    }

    #[must_use]
    pub fn superset(id: SetID, first: WorkoutExercise, second: WorkoutExercise) -> Self {
        Self {
            id,
            exercises: vec![first, second],
        }
    }

    /// Rebuilds a set from stored parts, checking the type tag against the exercise count.
    pub fn new(
        id: SetID,
        set_type: SetType,
        exercises: Vec<WorkoutExercise>,
    ) -> Result<Self, WorkoutSetError> {
        match (set_type, exercises.len()) {
            (SetType::Regular, 1) | (SetType::Superset, 2) => Ok(Self { id, exercises }),
            (_, len) => Err(WorkoutSetError::Mismatch(set_type, len)),
        }
    }

    #[must_use]
    pub fn set_type(&self) -> SetType {
        if self.exercises.len() == 2 {
            SetType::Superset
        } else {
            SetType::Regular
        }
    }

    #[must_use]
    pub fn exercises(&self) -> &[WorkoutExercise] {
        &self.exercises
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.exercises.iter().all(|e| e.is_completed)
    }

    pub(crate) fn exercise_mut(
        &mut self,
        exercise_id: &ExerciseID,
    ) -> Option<&mut WorkoutExercise> {
        self.exercises
            .iter_mut()
            .find(|e| e.exercise.id == *exercise_id)
    }

    pub(crate) fn reset(&mut self) {
        for exercise in &mut self.exercises {
            exercise.is_completed = false;
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutSetError {
    #[error("{0:?} set must not contain {1} exercises")]
    Mismatch(SetType, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetType {
    Regular,
    Superset,
}

impl SetType {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SetType::Regular => "Regular",
            SetType::Superset => "Superset",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [SetType::Regular, SetType::Superset]
            .into_iter()
            .find(|t| t.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutExercise {
    pub exercise: Exercise,
    pub is_completed: bool,
}

impl From<Exercise> for WorkoutExercise {
    fn from(exercise: Exercise) -> Self {
        Self {
            exercise,
            is_completed: false,
        }
    }
}

impl From<&Exercise> for WorkoutExercise {
    fn from(exercise: &Exercise) -> Self {
        Self::from(exercise.clone())
    }
}

#[derive(AsRef, Deref, Display, Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetID(String);

impl From<&str> for SetID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SetID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Source of set identities. Identities must be unique at least within one generation run.
pub trait SetIdSource {
    fn next_set_id(&mut self) -> SetID;
}

#[derive(Debug, Clone)]
pub struct SequentialSetIds {
    prefix: String,
    next: usize,
}

impl SequentialSetIds {
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 0,
        }
    }
}

impl Default for SequentialSetIds {
    fn default() -> Self {
        Self::new("set")
    }
}

impl SetIdSource for SequentialSetIds {
    fn next_set_id(&mut self) -> SetID {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        SetID(id)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSetIds;

impl SetIdSource for RandomSetIds {
    fn next_set_id(&mut self) -> SetID {
        SetID(format!("set-{}", Uuid::new_v4()))
    }
}
