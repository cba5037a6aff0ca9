use std::collections::HashMap;

use log::debug;
use rand::Rng;

use crate::{
    Exercise, ExerciseID, ReadError, SessionError, SetID, SetIdSource, Workout,
    WorkoutConfiguration, WorkoutExercise, WorkoutOptions, WorkoutSet, WriteError, generate,
};

/// Durable slot holding the current workout. `None` means no saved session.
pub trait WorkoutRepository {
    fn read_workout(&self) -> Result<Option<Workout>, ReadError>;
    fn write_workout(&self, workout: Option<&Workout>) -> Result<(), WriteError>;
}

/// Yes/no prompt shown before destructive operations.
pub trait Confirmation {
    fn confirm(&self, message: &str) -> bool;
}

pub const RESET_CONFIRMATION: &str = "Are you sure you want to mark all exercises as incomplete?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The last open exercise of the set was just completed.
    SetCompleted(SetID),
}

/// The current workout plus display overrides that live only as long as the workout.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Session {
    workout: Option<Workout>,
    overrides: Overrides,
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Overrides {
    collapsed_sets: HashMap<SetID, bool>,
    expanded_exercises: HashMap<ExerciseID, bool>,
}

impl Overrides {
    fn clear(&mut self) {
        self.collapsed_sets.clear();
        self.expanded_exercises.clear();
    }
}

impl Session {
    #[must_use]
    pub fn restore(workout: Option<Workout>) -> Self {
        Self {
            workout,
            overrides: Overrides::default(),
        }
    }

    #[must_use]
    pub fn workout(&self) -> Option<&Workout> {
        self.workout.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.workout.is_some()
    }

    #[must_use]
    pub fn contains_exercise(&self, exercise_id: &ExerciseID) -> bool {
        self.workout
            .as_ref()
            .is_some_and(|w| w.contains_exercise(exercise_id))
    }

    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        catalog: &[Exercise],
        options: WorkoutOptions,
        rng: &mut R,
        ids: &mut impl SetIdSource,
    ) -> Result<&Workout, SessionError> {
        if options.body_areas.is_empty() {
            return Err(SessionError::NoBodyAreas);
        }

        let sets = generate(catalog, &options, rng, ids);
        self.overrides.clear();

        Ok(self.workout.insert(Workout {
            sets,
            options: Some(options),
        }))
    }

    pub fn clear(&mut self) {
        self.workout = None;
        self.overrides.clear();
    }

    pub fn toggle_exercise_completion(
        &mut self,
        set_id: &SetID,
        exercise_id: &ExerciseID,
    ) -> Result<Option<SessionEvent>, SessionError> {
        let workout = self.workout.as_mut().ok_or(SessionError::NoWorkout)?;
        let set = workout
            .sets
            .iter_mut()
            .find(|s| s.id == *set_id)
            .ok_or_else(|| SessionError::SetNotFound(set_id.clone()))?;
        let was_complete = set.is_complete();
        let exercise =
            set.exercise_mut(exercise_id)
                .ok_or_else(|| SessionError::ExerciseNotFound {
                    set_id: set_id.clone(),
                    exercise_id: exercise_id.clone(),
                })?;

        exercise.is_completed = !exercise.is_completed;

        if !was_complete && set.is_complete() {
            debug!("set {set_id} completed");
            return Ok(Some(SessionEvent::SetCompleted(set_id.clone())));
        }

        Ok(None)
    }

    /// Marks every exercise as incomplete after the user confirmed.
    ///
    /// Returns whether the reset took place.
    pub fn reset_all_exercises(
        &mut self,
        confirmation: &impl Confirmation,
    ) -> Result<bool, SessionError> {
        let workout = self.workout.as_mut().ok_or(SessionError::NoWorkout)?;

        if workout.sets.is_empty() || !confirmation.confirm(RESET_CONFIRMATION) {
            return Ok(false);
        }

        for set in &mut workout.sets {
            set.reset();
        }
        self.overrides.clear();

        Ok(true)
    }

    /// Appends the exercise as a new regular set.
    ///
    /// Starting from an empty session records options derived from `configuration`, so a
    /// workout is never stored without its recipe.
    pub fn add_exercise(
        &mut self,
        exercise: &Exercise,
        configuration: &WorkoutConfiguration,
        ids: &mut impl SetIdSource,
    ) -> SetID {
        let set = WorkoutSet::regular(ids.next_set_id(), WorkoutExercise::from(exercise));
        let set_id = set.id.clone();

        match &mut self.workout {
            Some(workout) => workout.sets.push(set),
            None => {
                self.workout = Some(Workout {
                    sets: vec![set],
                    options: Some(configuration.options_for(exercise)),
                });
            }
        }

        set_id
    }

    #[must_use]
    pub fn is_set_collapsed(&self, set: &WorkoutSet) -> bool {
        self.overrides
            .collapsed_sets
            .get(&set.id)
            .copied()
            .unwrap_or_else(|| set.is_complete())
    }

    pub fn toggle_set_collapsed(&mut self, set_id: &SetID) -> Result<(), SessionError> {
        let set = self
            .workout
            .as_ref()
            .ok_or(SessionError::NoWorkout)?
            .set(set_id)
            .ok_or_else(|| SessionError::SetNotFound(set_id.clone()))?;
        let collapsed = self.is_set_collapsed(set);

        self.overrides
            .collapsed_sets
            .insert(set_id.clone(), !collapsed);

        Ok(())
    }

    #[must_use]
    pub fn is_exercise_collapsed(&self, exercise: &WorkoutExercise) -> bool {
        exercise.is_completed
            && !self
                .overrides
                .expanded_exercises
                .get(&exercise.exercise.id)
                .copied()
                .unwrap_or_default()
    }

    pub fn toggle_exercise_expanded(
        &mut self,
        exercise_id: &ExerciseID,
    ) -> Result<(), SessionError> {
        let workout = self.workout.as_ref().ok_or(SessionError::NoWorkout)?;
        if !workout.contains_exercise(exercise_id) {
            return Err(SessionError::UnknownExercise(exercise_id.clone()));
        }

        let expanded = self
            .overrides
            .expanded_exercises
            .entry(exercise_id.clone())
            .or_default();
        *expanded = !*expanded;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    use super::*;
    use crate::{BodyArea, ExerciseCount, Mode, Pairing, SequentialSetIds, catalog};

    struct Answer(bool);

    impl Confirmation for Answer {
        fn confirm(&self, message: &str) -> bool {
            assert_eq!(message, RESET_CONFIRMATION);
            self.0
        }
    }

    struct Unreachable;

    impl Confirmation for Unreachable {
        fn confirm(&self, _: &str) -> bool {
            panic!("unexpected confirmation prompt");
        }
    }

    fn options(mode: Mode) -> WorkoutOptions {
        WorkoutOptions {
            body_areas: vec![BodyArea::Chest, BodyArea::Back],
            mode,
            count: ExerciseCount::new(4).unwrap(),
            group_by_station: false,
        }
    }

    fn active_session(mode: Mode) -> Session {
        let mut session = Session::default();
        session
            .generate(
                catalog::exercises(),
                options(mode),
                &mut StdRng::seed_from_u64(0),
                &mut SequentialSetIds::default(),
            )
            .unwrap();
        session
    }

    fn ids(session: &Session, set: usize, exercise: usize) -> (SetID, ExerciseID) {
        let set = &session.workout().unwrap().sets[set];
        (set.id.clone(), set.exercises()[exercise].exercise.id.clone())
    }

    fn completed(session: &Session) -> Vec<bool> {
        session
            .workout()
            .unwrap()
            .exercises()
            .map(|e| e.is_completed)
            .collect()
    }

    #[test]
    fn test_generate() {
        let session = active_session(Mode::Regular);
        let workout = session.workout().unwrap();

        assert!(session.is_active());
        assert_eq!(workout.sets.len(), 4);
        assert_eq!(workout.options, Some(options(Mode::Regular)));
    }

    #[test]
    fn test_generate_without_body_areas() {
        let mut session = active_session(Mode::Regular);
        let before = session.clone();
        let mut options = options(Mode::Regular);
        options.body_areas.clear();

        assert_eq!(
            session
                .generate(
                    catalog::exercises(),
                    options,
                    &mut StdRng::seed_from_u64(1),
                    &mut SequentialSetIds::default(),
                )
                .map(|_| ()),
            Err(SessionError::NoBodyAreas)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_generate_clears_overrides() {
        let mut session = active_session(Mode::Regular);
        let (set_id, exercise_id) = ids(&session, 0, 0);
        session.toggle_set_collapsed(&set_id).unwrap();
        session.toggle_exercise_expanded(&exercise_id).unwrap();

        session
            .generate(
                catalog::exercises(),
                options(Mode::Regular),
                &mut StdRng::seed_from_u64(0),
                &mut SequentialSetIds::default(),
            )
            .unwrap();

        assert_eq!(session, Session::restore(session.workout().cloned()));
    }

    #[test]
    fn test_clear() {
        let mut session = active_session(Mode::Regular);
        let (set_id, _) = ids(&session, 0, 0);
        session.toggle_set_collapsed(&set_id).unwrap();

        session.clear();

        assert!(!session.is_active());
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_toggle_exercise_completion_twice() {
        let mut session = active_session(Mode::Superset(Pairing::Random));
        let before = completed(&session);
        let (set_id, exercise_id) = ids(&session, 1, 1);

        session
            .toggle_exercise_completion(&set_id, &exercise_id)
            .unwrap();
        assert_eq!(completed(&session), vec![false, false, false, true]);

        session
            .toggle_exercise_completion(&set_id, &exercise_id)
            .unwrap();
        assert_eq!(completed(&session), before);
    }

    #[test]
    fn test_toggle_exercise_completion_emits_set_completed() {
        let mut session = active_session(Mode::Superset(Pairing::Random));
        let (set_id, first) = ids(&session, 0, 0);
        let (_, second) = ids(&session, 0, 1);

        assert_eq!(session.toggle_exercise_completion(&set_id, &first), Ok(None));
        assert_eq!(
            session.toggle_exercise_completion(&set_id, &second),
            Ok(Some(SessionEvent::SetCompleted(set_id.clone())))
        );
        assert_eq!(session.toggle_exercise_completion(&set_id, &second), Ok(None));
        assert_eq!(
            session.toggle_exercise_completion(&set_id, &second),
            Ok(Some(SessionEvent::SetCompleted(set_id.clone())))
        );
    }

    #[test]
    fn test_toggle_exercise_completion_unknown_ids() {
        let mut session = active_session(Mode::Regular);
        let before = session.clone();
        let (set_id, exercise_id) = ids(&session, 0, 0);
        let (_, other_exercise_id) = ids(&session, 1, 0);

        assert_eq!(
            session.toggle_exercise_completion(&"unknown".into(), &exercise_id),
            Err(SessionError::SetNotFound("unknown".into()))
        );
        assert_eq!(
            session.toggle_exercise_completion(&set_id, &other_exercise_id),
            Err(SessionError::ExerciseNotFound {
                set_id: set_id.clone(),
                exercise_id: other_exercise_id.clone(),
            })
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_toggle_exercise_completion_without_workout() {
        let mut session = Session::default();

        assert_eq!(
            session.toggle_exercise_completion(&"set-0".into(), &"abs-plank".into()),
            Err(SessionError::NoWorkout)
        );
    }

    #[rstest]
    #[case(false, vec![true, true, false, true])]
    #[case(true, vec![false, false, false, false])]
    fn test_reset_all_exercises(#[case] confirm: bool, #[case] expected: Vec<bool>) {
        let mut session = active_session(Mode::Regular);
        for (set, exercise) in [(0, 0), (1, 0), (3, 0)] {
            let (set_id, exercise_id) = ids(&session, set, exercise);
            session
                .toggle_exercise_completion(&set_id, &exercise_id)
                .unwrap();
        }
        let (set_id, _) = ids(&session, 2, 0);
        session.toggle_set_collapsed(&set_id).unwrap();

        assert_eq!(session.reset_all_exercises(&Answer(confirm)), Ok(confirm));
        assert_eq!(completed(&session), expected);
        assert_eq!(
            session.is_set_collapsed(&session.workout().unwrap().sets[2]),
            !confirm
        );
    }

    #[test]
    fn test_reset_all_exercises_without_sets() {
        let mut session = Session::restore(Some(Workout {
            sets: vec![],
            options: None,
        }));

        assert_eq!(session.reset_all_exercises(&Unreachable), Ok(false));
        assert_eq!(
            Session::default().reset_all_exercises(&Unreachable),
            Err(SessionError::NoWorkout)
        );
    }

    #[test]
    fn test_add_exercise_to_empty_session() {
        let mut session = Session::default();
        let exercise = &catalog::exercises()[27];

        let set_id = session.add_exercise(
            exercise,
            &WorkoutConfiguration::default(),
            &mut SequentialSetIds::new("added"),
        );

        let workout = session.workout().unwrap();
        assert_eq!(set_id, SetID::from("added-0"));
        assert_eq!(workout.sets.len(), 1);
        assert_eq!(
            workout.sets[0].exercises(),
            &[WorkoutExercise::from(exercise)]
        );
        assert_eq!(
            workout.options.as_ref().map(|o| o.body_areas.clone()),
            Some(vec![BodyArea::Abs])
        );
        assert!(session.contains_exercise(&exercise.id));
    }

    #[test]
    fn test_add_exercise_to_active_session() {
        let mut session = active_session(Mode::Regular);
        let options = session.workout().unwrap().options.clone();
        let mut configuration = WorkoutConfiguration::default();
        configuration.toggle_body_area(BodyArea::Legs);

        session.add_exercise(
            &catalog::exercises()[27],
            &configuration,
            &mut SequentialSetIds::new("added"),
        );

        let workout = session.workout().unwrap();
        assert_eq!(workout.sets.len(), 5);
        assert_eq!(workout.sets[4].id, SetID::from("added-0"));
        assert_eq!(workout.options, options);
    }

    #[test]
    fn test_set_collapsed_follows_completion() {
        let mut session = active_session(Mode::Regular);
        let (set_id, exercise_id) = ids(&session, 0, 0);
        let set = |session: &Session| session.workout().unwrap().sets[0].clone();

        assert!(!session.is_set_collapsed(&set(&session)));

        session
            .toggle_exercise_completion(&set_id, &exercise_id)
            .unwrap();
        assert!(session.is_set_collapsed(&set(&session)));

        session.toggle_set_collapsed(&set_id).unwrap();
        assert!(!session.is_set_collapsed(&set(&session)));

        session.toggle_set_collapsed(&set_id).unwrap();
        assert!(session.is_set_collapsed(&set(&session)));

        assert_eq!(
            session.toggle_set_collapsed(&"unknown".into()),
            Err(SessionError::SetNotFound("unknown".into()))
        );
    }

    #[test]
    fn test_exercise_collapsed_follows_completion() {
        let mut session = active_session(Mode::Regular);
        let (set_id, exercise_id) = ids(&session, 0, 0);
        let exercise =
            |session: &Session| session.workout().unwrap().sets[0].exercises()[0].clone();

        assert!(!session.is_exercise_collapsed(&exercise(&session)));

        session
            .toggle_exercise_completion(&set_id, &exercise_id)
            .unwrap();
        assert!(session.is_exercise_collapsed(&exercise(&session)));

        session.toggle_exercise_expanded(&exercise_id).unwrap();
        assert!(!session.is_exercise_collapsed(&exercise(&session)));

        session.toggle_exercise_expanded(&exercise_id).unwrap();
        assert!(session.is_exercise_collapsed(&exercise(&session)));

        assert_eq!(
            session.toggle_exercise_expanded(&"unknown".into()),
            Err(SessionError::UnknownExercise("unknown".into()))
        );
    }
}
