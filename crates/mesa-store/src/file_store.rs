use crate::session_store::SessionStore;
use crate::{Result as StoreErrorResult, StoreError};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::io::AsyncWriteExt;

/// File-backed session store.
///
/// One JSON file per key inside a data directory, written with the
/// temp-file / fsync / rename pattern so a crash mid-write can never leave
/// a half-written record behind. On native runtimes the data directory
/// lives inside the OS-protected application data area.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a storage key. Path separators and other hostile
    /// characters are flattened so a key can never escape the data
    /// directory.
    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

#[async_trait]
impl SessionStore for FileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn load(&self, key: &str) -> StoreErrorResult<Option<String>> {
        let path = self.path_for(key);

        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::read(path, e)),
        }
    }

    async fn save(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path_for(key);
        let temp_path = final_path.with_extension(format!("json.tmp.{}", std::process::id()));

        // Write to temp file with explicit sync
        {
            let mut file = tokio::fs::File::create(&temp_path)
                .await
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .await
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;
        }

        // Atomic rename
        tokio::fs::rename(&temp_path, &final_path)
            .await
            .map_err(|e| {
                // Clean up temp file on failure
                let _ = std::fs::remove_file(&temp_path);
                StoreError::atomic_rename(temp_path, final_path.clone(), e)
            })?;

        debug!("Session record written to {}", final_path.display());
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreErrorResult<()> {
        let path = self.path_for(key);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Session record removed at {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::delete(path, e)),
        }
    }
}
