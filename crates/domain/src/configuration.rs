use crate::{BodyArea, Exercise, ExerciseCount, Mode, Pairing, WorkoutOptions};

/// Generator configuration as currently selected by the user.
///
/// The pairing strategy is remembered while superset mode is switched off, so it is kept
/// separately from the superset flag here and only combined into a [`Mode`] when options are
/// built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkoutConfiguration {
    pub body_areas: Vec<BodyArea>,
    pub superset: bool,
    pub pairing: Pairing,
    pub count: ExerciseCount,
    pub group_by_station: bool,
}

impl WorkoutConfiguration {
    pub fn toggle_body_area(&mut self, body_area: BodyArea) {
        if let Some(idx) = self.body_areas.iter().position(|a| *a == body_area) {
            self.body_areas.remove(idx);
        } else {
            self.body_areas.push(body_area);
        }
    }

    #[must_use]
    pub fn options(&self) -> WorkoutOptions {
        WorkoutOptions {
            body_areas: self.body_areas.clone(),
            mode: self.mode(),
            count: self.count,
            group_by_station: self.group_by_station,
        }
    }

    /// Options recorded for a workout started by adding a single exercise.
    ///
    /// Falls back to the exercise's own target muscle when no body area is selected.
    #[must_use]
    pub fn options_for(&self, exercise: &Exercise) -> WorkoutOptions {
        let mut options = self.options();
        if options.body_areas.is_empty() {
            options.body_areas.push(exercise.target_muscle);
        }
        options
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.superset {
            Mode::Superset(self.pairing)
        } else {
            Mode::Regular
        }
    }
}

impl From<&WorkoutOptions> for WorkoutConfiguration {
    fn from(value: &WorkoutOptions) -> Self {
        let (superset, pairing) = match value.mode {
            Mode::Regular => (false, Pairing::default()),
            Mode::Superset(pairing) => (true, pairing),
        };
        Self {
            body_areas: value.body_areas.clone(),
            superset,
            pairing,
            count: value.count,
            group_by_station: value.group_by_station,
        }
    }
}
