use log::{debug, info};
use rand::Rng;

use crate::{
    Confirmation, Exercise, ExerciseID, Service, Session, SessionError, SessionEvent, SetID,
    SetIdSource, Workout, WorkoutConfiguration, WorkoutRepository, WriteError,
};

/// Holds the current session and mirrors every change of the workout to the repository.
pub struct SessionStore<R, G, I> {
    service: Service<R>,
    session: Session,
    configuration: WorkoutConfiguration,
    catalog: &'static [Exercise],
    rng: G,
    ids: I,
    save_error: Option<WriteError>,
}

impl<R, G, I> SessionStore<R, G, I>
where
    R: WorkoutRepository,
    G: Rng,
    I: SetIdSource,
{
    /// Restores the saved session and seeds the configuration from its options.
    pub fn new(service: Service<R>, catalog: &'static [Exercise], rng: G, ids: I) -> Self {
        let session = service.load_session();
        let configuration = session
            .workout()
            .and_then(|w| w.options.as_ref())
            .map(WorkoutConfiguration::from)
            .unwrap_or_default();

        Self {
            service,
            session,
            configuration,
            catalog,
            rng,
            ids,
            save_error: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn workout(&self) -> Option<&Workout> {
        self.session.workout()
    }

    #[must_use]
    pub fn catalog(&self) -> &'static [Exercise] {
        self.catalog
    }

    #[must_use]
    pub fn configuration(&self) -> &WorkoutConfiguration {
        &self.configuration
    }

    /// The error of the most recent save, if it failed.
    #[must_use]
    pub fn last_save_error(&self) -> Option<&WriteError> {
        self.save_error.as_ref()
    }

    pub fn configuration_mut(&mut self) -> &mut WorkoutConfiguration {
        &mut self.configuration
    }

    pub fn generate(&mut self) -> Result<&Workout, SessionError> {
        let options = self.configuration.options();
        let sets = self
            .session
            .generate(self.catalog, options, &mut self.rng, &mut self.ids)?
            .sets
            .len();
        info!("generated workout with {sets} sets");
        self.persist();
        self.session.workout().ok_or(SessionError::NoWorkout)
    }

    pub fn clear(&mut self) {
        self.session.clear();
        self.persist();
    }

    pub fn toggle_exercise_completion(
        &mut self,
        set_id: &SetID,
        exercise_id: &ExerciseID,
    ) -> Result<Option<SessionEvent>, SessionError> {
        let event = self
            .session
            .toggle_exercise_completion(set_id, exercise_id)?;
        self.persist();
        Ok(event)
    }

    pub fn reset_all_exercises(
        &mut self,
        confirmation: &impl Confirmation,
    ) -> Result<bool, SessionError> {
        let reset = self.session.reset_all_exercises(confirmation)?;
        if reset {
            self.persist();
        }
        Ok(reset)
    }

    /// Appends a catalog exercise to the workout, starting a new workout if necessary.
    pub fn add_exercise_to_workout(
        &mut self,
        exercise_id: &ExerciseID,
    ) -> Result<SetID, SessionError> {
        let exercise = self
            .catalog
            .iter()
            .find(|e| e.id == *exercise_id)
            .ok_or_else(|| SessionError::UnknownExercise(exercise_id.clone()))?;
        let set_id = self
            .session
            .add_exercise(exercise, &self.configuration, &mut self.ids);
        debug!("added {exercise_id} as {set_id}");
        self.persist();
        Ok(set_id)
    }

    pub fn toggle_set_collapsed(&mut self, set_id: &SetID) -> Result<(), SessionError> {
        self.session.toggle_set_collapsed(set_id)
    }

    pub fn toggle_exercise_expanded(
        &mut self,
        exercise_id: &ExerciseID,
    ) -> Result<(), SessionError> {
        self.session.toggle_exercise_expanded(exercise_id)
    }

    fn persist(&mut self) {
        self.save_error = self.service.save_session(&self.session).err();
    }
}
