use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::kv::KeyValueStore;
use crate::{AppConfig, StoreResult};

/// Durable backend: one `<key>.json` file per collection under a data
/// directory. Survives process restarts, local to one machine.
///
/// Writes go to a temporary file first and are renamed into place, so a
/// reader never observes a half-written collection.
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        debug!(dir = %data_dir.display(), "opened file store");
        Ok(Self { data_dir })
    }

    pub fn from_config(config: &AppConfig) -> StoreResult<Self> {
        Self::new(&config.store.data_dir)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, value: String) -> StoreResult<()> {
        let final_path = self.path_for(key);
        let temp_path = self.data_dir.join(format!("{key}.json.tmp"));

        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &final_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        assert!(store.get("users").unwrap().is_none());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = JsonFileStore::new(dir.path()).unwrap();
            store.put("routes", "[{\"id\":\"route1\"}]".to_string()).unwrap();
        }

        let reopened = JsonFileStore::new(dir.path()).unwrap();
        assert_eq!(
            reopened.get("routes").unwrap().as_deref(),
            Some("[{\"id\":\"route1\"}]")
        );
    }

    #[test]
    fn put_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        store.put("bookings", "[]".to_string()).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("bookings.json")]);
    }
}
