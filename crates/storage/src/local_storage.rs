use std::collections::VecDeque;

use resistance_gen_domain as domain;
use resistance_gen_web_app::log as app_log;
use strum::AsRefStr;

use crate::{
    backend::{Backend, Browser},
    record,
};

const LOG_CAPACITY: usize = 100;

#[derive(AsRefStr, Debug, Clone, Copy)]
pub enum Key {
    #[strum(serialize = "lastWorkout")]
    LastWorkout,
    #[strum(serialize = "log")]
    Log,
}

/// Session and log records kept in a key-value backend.
#[derive(Debug, Default)]
pub struct LocalStorage<B> {
    backend: B,
}

impl LocalStorage<Browser> {
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Browser)
    }
}

impl<B: Backend> LocalStorage<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: Backend> domain::WorkoutRepository for LocalStorage<B> {
    fn read_workout(&self) -> Result<Option<domain::Workout>, domain::ReadError> {
        let Some(raw) = self
            .backend
            .get(Key::LastWorkout.as_ref())
            .map_err(domain::StorageError::from)?
        else {
            return Ok(None);
        };

        record::decode(&raw)
            .map(Some)
            .map_err(|err| domain::ReadError::Malformed(err.to_string()))
    }

    fn write_workout(&self, workout: Option<&domain::Workout>) -> Result<(), domain::WriteError> {
        let key = Key::LastWorkout.as_ref();
        match workout {
            Some(workout) => {
                let raw = record::encode(workout)
                    .map_err(|err| domain::WriteError::Other(err.into()))?;
                self.backend.set(key, &raw)
            }
            None => self.backend.remove(key),
        }
        .map_err(|err| domain::StorageError::from(err).into())
    }
}

impl<B: Backend + Send + Sync + 'static> app_log::Repository for LocalStorage<B> {
    fn read_entries(&self) -> Result<VecDeque<app_log::Entry>, app_log::Error> {
        match self.backend.get(Key::Log.as_ref()) {
            // Must not log: this runs inside the logger.
            Ok(Some(raw)) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            Ok(None) => Ok(VecDeque::new()),
            Err(err) => Err(app_log::Error::Unknown(err.to_string())),
        }
    }

    fn write_entry(&self, entry: app_log::Entry) -> Result<(), app_log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(LOG_CAPACITY);
        let raw = serde_json::to_string(&entries)
            .map_err(|err| app_log::Error::Unknown(err.to_string()))?;
        self.backend
            .set(Key::Log.as_ref(), &raw)
            .map_err(|err| app_log::Error::Unknown(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;
    use resistance_gen_domain::WorkoutRepository;
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::{
        backend::{BackendError, Memory},
        tests::data,
    };

    struct Unavailable;

    impl Backend for Unavailable {
        fn get(&self, _: &str) -> Result<Option<String>, BackendError> {
            Err(BackendError::Unavailable)
        }

        fn set(&self, _: &str, _: &str) -> Result<(), BackendError> {
            Err(BackendError::Unavailable)
        }

        fn remove(&self, _: &str) -> Result<(), BackendError> {
            Err(BackendError::Unavailable)
        }
    }

    thread_local! {
        static RECORDS: Cell<usize> = const { Cell::new(0) };
    }

    struct CountingLogger;

    impl log::Log for CountingLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, _: &log::Record) {
            RECORDS.with(|records| records.set(records.get() + 1));
        }

        fn flush(&self) {}
    }

    static COUNTING_LOGGER: CountingLogger = CountingLogger;

    fn stored(storage: &LocalStorage<Memory>, key: Key) -> Option<Value> {
        storage
            .backend
            .get(key.as_ref())
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    fn entry(message: &str) -> app_log::Entry {
        app_log::Entry {
            time: "Jan 01 00:00:00".to_string(),
            level: log::Level::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_key() {
        assert_eq!(Key::LastWorkout.as_ref(), "lastWorkout");
        assert_eq!(Key::Log.as_ref(), "log");
    }

    #[test]
    fn test_read_workout_without_record() {
        let storage = LocalStorage::new(Memory::default());

        assert_eq!(storage.read_workout().unwrap(), None);
    }

    #[test]
    fn test_write_workout() {
        let storage = LocalStorage::new(Memory::default());

        storage.write_workout(Some(&*data::WORKOUT)).unwrap();

        assert_eq!(stored(&storage, Key::LastWorkout), Some(data::RECORD.clone()));
        assert_eq!(storage.read_workout().unwrap(), Some(data::WORKOUT.clone()));
    }

    #[test]
    fn test_write_workout_is_idempotent() {
        let storage = LocalStorage::new(Memory::default());

        storage.write_workout(Some(&*data::WORKOUT)).unwrap();
        let first = storage.backend.get(Key::LastWorkout.as_ref()).unwrap();
        storage.write_workout(Some(&*data::WORKOUT)).unwrap();

        assert_eq!(storage.backend.get(Key::LastWorkout.as_ref()).unwrap(), first);
    }

    #[test]
    fn test_write_workout_without_options() {
        let storage = LocalStorage::new(Memory::default());
        let workout = domain::Workout {
            sets: data::WORKOUT.sets.clone(),
            options: None,
        };

        storage.write_workout(Some(&workout)).unwrap();

        assert_eq!(
            stored(&storage, Key::LastWorkout),
            Some(data::RECORD["workout"].clone())
        );
        assert_eq!(storage.read_workout().unwrap(), Some(workout));
    }

    #[test]
    fn test_write_empty_session_removes_record() {
        let storage = LocalStorage::new(Memory::default());
        storage.write_workout(Some(&*data::WORKOUT)).unwrap();

        storage.write_workout(None).unwrap();

        assert_eq!(storage.backend.get(Key::LastWorkout.as_ref()), Ok(None));
        assert_eq!(storage.read_workout().unwrap(), None);
    }

    #[rstest]
    #[case::invalid_json("{")]
    #[case::string("\"workout\"")]
    #[case::object_without_config(r#"{"workout": []}"#)]
    #[case::invalid_set(r#"[{"id": "set-1", "type": "Superset", "exercises": []}]"#)]
    fn test_read_malformed_workout(#[case] raw: &str) {
        let storage = LocalStorage::new(Memory::default());
        storage
            .backend
            .set(Key::LastWorkout.as_ref(), raw)
            .unwrap();

        assert!(matches!(
            storage.read_workout(),
            Err(domain::ReadError::Malformed(_))
        ));
    }

    #[test]
    fn test_service_loads_malformed_workout_as_empty_session() {
        let storage = LocalStorage::new(Memory::default());
        storage
            .backend
            .set(Key::LastWorkout.as_ref(), "[{]")
            .unwrap();

        assert_eq!(
            domain::Service::new(storage).load_session(),
            domain::Session::default()
        );
    }

    #[test]
    fn test_unavailable_backend() {
        let storage = LocalStorage::new(Unavailable);

        assert!(matches!(
            storage.read_workout(),
            Err(domain::ReadError::Storage(domain::StorageError::Unavailable))
        ));
        assert!(matches!(
            storage.write_workout(None),
            Err(domain::WriteError::Storage(domain::StorageError::Unavailable))
        ));
        assert!(matches!(
            app_log::Repository::read_entries(&storage),
            Err(app_log::Error::Unknown(_))
        ));
    }

    #[test]
    fn test_write_entry() {
        let storage = LocalStorage::new(Memory::default());

        for i in 0..=LOG_CAPACITY {
            app_log::Repository::write_entry(&storage, entry(&i.to_string())).unwrap();
        }

        let entries = app_log::Repository::read_entries(&storage).unwrap();
        assert_eq!(entries.len(), LOG_CAPACITY);
        assert_eq!(entries[0].message, LOG_CAPACITY.to_string());
        assert_eq!(entries[LOG_CAPACITY - 1].message, "1");
    }

    #[test]
    fn test_read_malformed_entries() {
        let storage = LocalStorage::new(Memory::default());
        storage.backend.set(Key::Log.as_ref(), "{").unwrap();

        assert!(
            app_log::Repository::read_entries(&storage)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_write_entry_over_malformed_log() {
        let _ = log::set_logger(&COUNTING_LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
        let storage = LocalStorage::new(Memory::default());
        storage.backend.set(Key::Log.as_ref(), "{").unwrap();
        let records = RECORDS.with(Cell::get);

        app_log::Repository::write_entry(&storage, entry("foo")).unwrap();

        assert_eq!(RECORDS.with(Cell::get), records);
        assert_eq!(
            stored(&storage, Key::Log),
            Some(serde_json::json!([
                { "time": "Jan 01 00:00:00", "level": "Info", "message": "foo" }
            ]))
        );
    }
}
