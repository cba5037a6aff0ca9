use resistance_gen_domain::{self as domain, Property};
use serde_json::Value;

/// Current shape of the saved session.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Record {
    pub workout: Vec<WorkoutSet>,
    pub config: Option<Config>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutSet {
    pub id: String,
    #[serde(rename = "type")]
    pub set_type: String,
    pub exercises: Vec<WorkoutExercise>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub id: String,
    pub name: String,
    pub target_muscle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_muscles: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub movement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub body_areas: Vec<String>,
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset_type: Option<String>,
    pub count: u32,
    #[serde(default)]
    pub group_by_station: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("unexpected record shape")]
    UnexpectedShape,
    #[error("unknown {kind} \"{name}\"")]
    UnknownName { kind: &'static str, name: String },
    #[error("no station for exercise {0}")]
    MissingStation(String),
    #[error(transparent)]
    InvalidSet(#[from] domain::WorkoutSetError),
    #[error(transparent)]
    InvalidCount(#[from] domain::ExerciseCountError),
}

/// Parses a saved session.
///
/// An object with `workout` and `config` fields is the current shape. A bare array of sets
/// is accepted as a workout without options.
pub fn decode(raw: &str) -> Result<domain::Workout, RecordError> {
    let value: Value = serde_json::from_str(raw)?;
    let is_current = value
        .as_object()
        .is_some_and(|object| object.contains_key("workout") && object.contains_key("config"));

    if is_current {
        let record: Record = serde_json::from_value(value)?;
        return domain::Workout::try_from(record);
    }

    if value.is_array() {
        let sets: Vec<WorkoutSet> = serde_json::from_value(value)?;
        return Ok(domain::Workout {
            sets: sets
                .into_iter()
                .map(domain::WorkoutSet::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            options: None,
        });
    }

    Err(RecordError::UnexpectedShape)
}

/// Serializes a workout in the current shape, or as a bare array if it has no options.
pub fn encode(workout: &domain::Workout) -> Result<String, serde_json::Error> {
    let sets = workout.sets.iter().map(WorkoutSet::from).collect::<Vec<_>>();
    match &workout.options {
        Some(options) => serde_json::to_string(&Record {
            workout: sets,
            config: Some(Config::from(options)),
        }),
        None => serde_json::to_string(&sets),
    }
}

fn property<P: Property>(kind: &'static str, name: &str) -> Result<P, RecordError> {
    P::from_name(name).ok_or_else(|| RecordError::UnknownName {
        kind,
        name: name.to_string(),
    })
}

impl TryFrom<Record> for domain::Workout {
    type Error = RecordError;

    fn try_from(value: Record) -> Result<Self, Self::Error> {
        Ok(Self {
            sets: value
                .workout
                .into_iter()
                .map(domain::WorkoutSet::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            options: value.config.map(domain::WorkoutOptions::try_from).transpose()?,
        })
    }
}

impl From<&domain::WorkoutSet> for WorkoutSet {
    fn from(value: &domain::WorkoutSet) -> Self {
        Self {
            id: value.id.to_string(),
            set_type: value.set_type().name().to_string(),
            exercises: value.exercises().iter().map(WorkoutExercise::from).collect(),
        }
    }
}

impl TryFrom<WorkoutSet> for domain::WorkoutSet {
    type Error = RecordError;

    fn try_from(value: WorkoutSet) -> Result<Self, Self::Error> {
        let set_type =
            domain::SetType::from_name(&value.set_type).ok_or(RecordError::UnknownName {
                kind: "set type",
                name: value.set_type,
            })?;
        let exercises = value
            .exercises
            .into_iter()
            .map(domain::WorkoutExercise::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(domain::WorkoutSet::new(
            value.id.into(),
            set_type,
            exercises,
        )?)
    }
}

impl From<&domain::WorkoutExercise> for WorkoutExercise {
    fn from(value: &domain::WorkoutExercise) -> Self {
        let exercise = &value.exercise;
        Self {
            id: exercise.id.to_string(),
            name: exercise.name.clone(),
            target_muscle: exercise.target_muscle.name().to_string(),
            secondary_muscles: if exercise.secondary_muscles.is_empty() {
                None
            } else {
                Some(
                    exercise
                        .secondary_muscles
                        .iter()
                        .map(|m| m.name().to_string())
                        .collect(),
                )
            },
            movement: exercise.movement.name().to_string(),
            station: Some(exercise.station.name().to_string()),
            description: exercise.description.clone(),
            tips: exercise.tips.clone(),
            is_completed: value.is_completed,
        }
    }
}

impl TryFrom<WorkoutExercise> for domain::WorkoutExercise {
    type Error = RecordError;

    fn try_from(value: WorkoutExercise) -> Result<Self, Self::Error> {
        // Records written before stations existed take the station from the catalog.
        let station = match &value.station {
            Some(name) => property("station", name)?,
            None => domain::catalog::exercises()
                .iter()
                .find(|e| *e.id == value.id)
                .map(|e| e.station)
                .ok_or_else(|| RecordError::MissingStation(value.id.clone()))?,
        };
        Ok(Self {
            exercise: domain::Exercise {
                target_muscle: property("body area", &value.target_muscle)?,
                secondary_muscles: value
                    .secondary_muscles
                    .unwrap_or_default()
                    .iter()
                    .map(|m| property("body area", m))
                    .collect::<Result<Vec<_>, _>>()?,
                movement: property("movement", &value.movement)?,
                station,
                id: value.id.into(),
                name: value.name,
                description: value.description,
                tips: value.tips,
            },
            is_completed: value.is_completed,
        })
    }
}

impl From<&domain::WorkoutOptions> for Config {
    fn from(value: &domain::WorkoutOptions) -> Self {
        let (mode, superset_type) = match value.mode {
            domain::Mode::Regular => ("Regular", None),
            domain::Mode::Superset(pairing) => ("Superset", Some(pairing.name().to_string())),
        };
        Self {
            body_areas: value
                .body_areas
                .iter()
                .map(|a| a.name().to_string())
                .collect(),
            mode: mode.to_string(),
            superset_type,
            count: *value.count,
            group_by_station: value.group_by_station,
        }
    }
}

impl TryFrom<Config> for domain::WorkoutOptions {
    type Error = RecordError;

    fn try_from(value: Config) -> Result<Self, Self::Error> {
        let mode = match value.mode.as_str() {
            "Regular" => domain::Mode::Regular,
            "Superset" => domain::Mode::Superset(match value.superset_type {
                Some(name) => domain::Pairing::from_name(&name).ok_or(
                    RecordError::UnknownName {
                        kind: "superset type",
                        name,
                    },
                )?,
                None => domain::Pairing::default(),
            }),
            _ => {
                return Err(RecordError::UnknownName {
                    kind: "mode",
                    name: value.mode.clone(),
                });
            }
        };
        Ok(Self {
            body_areas: value
                .body_areas
                .iter()
                .map(|a| property("body area", a))
                .collect::<Result<Vec<_>, _>>()?,
            mode,
            count: domain::ExerciseCount::new(value.count)?,
            group_by_station: value.group_by_station,
        })
    }
}
