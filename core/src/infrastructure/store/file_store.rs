use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::domain::{common::entities::app_errors::CoreError, journal::ports::PersistedStore};

/// One JSON file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            CoreError::StorageError(format!("create data dir {}: {}", root.display(), e))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(CoreError::StorageError(format!("invalid store key '{}'", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl PersistedStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::StorageError(format!(
                "read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Writes to a temporary sibling and renames it over the target.
    fn write(&self, key: &str, value: &[u8]) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        let write_tmp = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(value)?;
            file.sync_all()?;
            fs::rename(&tmp, &path)
        };

        write_tmp().map_err(|e| {
            let _ = fs::remove_file(&tmp);
            CoreError::StorageError(format!("write {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert_eq!(store.read("nutrivision_meals").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested")).unwrap();

        store.write("nutrivision_meals", b"[1,2]").unwrap();
        store.write("nutrivision_meals", b"[]").unwrap();

        assert_eq!(store.read("nutrivision_meals").unwrap(), Some(b"[]".to_vec()));
        assert!(dir.path().join("nested/nutrivision_meals.json").is_file());
        assert!(!dir.path().join("nested/nutrivision_meals.json.tmp").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(
                store.write(key, b"x"),
                Err(CoreError::StorageError(_))
            ));
        }
    }

    #[test]
    fn test_journal_survives_restart() {
        use crate::domain::journal::{entities::MealType, services::MealJournal};
        use crate::domain::nutrition::entities::{Carbohydrates, Fat, NutritionResult};

        let dir = tempfile::tempdir().unwrap();
        let mut journal =
            MealJournal::load(FileStore::new(dir.path()).unwrap(), "nutrivision_meals");
        let meal = journal.log(
            NutritionResult {
                food_name: "Ramen".to_string(),
                serving_size: "1 bowl".to_string(),
                calories: 550.0,
                protein: 20.0,
                carbohydrates: Carbohydrates {
                    total: 70.0,
                    sugar: 4.0,
                    fiber: 3.0,
                },
                fat: Fat {
                    total: 18.0,
                    saturated: 5.0,
                },
                vitamins: Vec::new(),
            },
            MealType::Dinner,
        );

        let reloaded =
            MealJournal::load(FileStore::new(dir.path()).unwrap(), "nutrivision_meals");

        assert_eq!(reloaded.meals(), &[meal]);
    }
}
