//! File-backed record store
//!
//! Persists records to a datafile with one JSON document per line. The whole
//! file is loaded into memory on open; every insert appends one line and
//! flushes before the record becomes visible.

use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, RwLock};

use super::{Query, Record, RecordStore, ensure_unique};
use crate::error::StoreError;

pub struct FileStore<T> {
    path: PathBuf,
    records: RwLock<Vec<T>>,
    file: Mutex<File>,
}

impl<T> FileStore<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    /// Opens the datafile at `path`, creating it (and its parent directory)
    /// if it does not exist.
    ///
    /// Fails with [`StoreError::Corrupt`] if a line does not parse or repeats an id.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };
        let records = parse_records(&contents)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        // Hand-edited files may lack the final newline
        if !contents.is_empty() && !contents.ends_with('\n') {
            file.write_all(b"\n").await?;
            file.flush().await?;
        }

        info!(
            "Opened datafile {} ({} records)",
            path.display(),
            records.len()
        );

        Ok(Self {
            path,
            records: RwLock::new(records),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn parse_records<T>(contents: &str) -> Result<Vec<T>, StoreError>
where
    T: Record + DeserializeOwned,
{
    let mut records: Vec<T> = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record: T = serde_json::from_str(line).map_err(|e| StoreError::Corrupt {
            line: index + 1,
            message: e.to_string(),
        })?;

        if ensure_unique(&records, &record).is_err() {
            return Err(StoreError::Corrupt {
                line: index + 1,
                message: format!("duplicate id {}", record.id()),
            });
        }
        records.push(record);
    }

    Ok(records)
}

impl<T> RecordStore<T> for FileStore<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    async fn insert(&self, record: T) -> Result<(), StoreError> {
        // Holding the write lock across the append keeps file order equal to
        // memory order.
        let mut records = self.records.write().await;
        ensure_unique(&records, &record)?;

        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = self.file.lock().await;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        file.sync_data().await?;

        debug!("Appended record {} to {}", record.id(), self.path.display());
        records.push(record);
        Ok(())
    }

    async fn find_one(&self, query: &Query) -> Result<Option<T>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| query.matches(*record)).cloned())
    }
}
