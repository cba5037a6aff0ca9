use log::{debug, error, warn};

use crate::{ReadError, Session, StorageError, Workout, WorkoutRepository, WriteError};

pub struct Service<R> {
    repository: R,
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: WorkoutRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Restores the saved session.
    ///
    /// Missing, unreadable and malformed records all yield an empty session.
    pub fn load_session(&self) -> Session {
        match self.repository.read_workout() {
            Ok(workout) => Session::restore(workout),
            Err(ReadError::Malformed(reason)) => {
                warn!("discarding saved workout: {reason}");
                Session::default()
            }
            Err(ReadError::Storage(StorageError::Unavailable)) => {
                debug!("failed to load workout: storage unavailable");
                Session::default()
            }
            Err(err) => {
                error!("failed to load workout: {err}");
                Session::default()
            }
        }
    }

    pub fn save_session(&self, session: &Session) -> Result<(), WriteError> {
        self.save_workout(session.workout())
    }

    fn save_workout(&self, workout: Option<&Workout>) -> Result<(), WriteError> {
        log_on_error!(
            self.repository.write_workout(workout),
            WriteError,
            "save",
            "workout"
        )
    }
}
