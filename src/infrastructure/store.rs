//! Generic file-per-record JSON store
//!
//! Each record lives in `<dir>/<id>.json` as a pretty-printed JSON object.
//! Lookups by id derive the path directly; listings scan the directory.
//! There is no locking: one process is expected to write at a time.

use crate::domain::{timestamp_now, Record};
use crate::error::{Result, UltistatsError};
use chrono::Utc;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, trace};

/// File extension of record files
pub const EXTENSION: &str = "json";

const ID_FIELD: &str = "id";
const CREATED_AT_FIELD: &str = "created_at";
const UPDATED_AT_FIELD: &str = "updated_at";

static ID_SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Mint a record id: wall-clock milliseconds plus a per-process sequence
/// number, e.g. `1710497430123-0007`.
fn mint_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed) % 10_000;
    format!("{}-{:04}", millis, seq)
}

/// Ids become file names, so they must not escape the store directory
fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
        return Err(UltistatsError::InvalidId(id.to_string()));
    }
    Ok(())
}

/// Store for one entity kind, backed by one directory
#[derive(Debug, Clone)]
pub struct JsonStore<T> {
    dir: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> JsonStore<T> {
    /// Create a store for `dir` without touching the filesystem
    pub fn new(dir: PathBuf) -> Self {
        JsonStore {
            dir,
            _record: PhantomData,
        }
    }

    /// Create a store and make sure its directory exists
    pub fn open(dir: PathBuf) -> Result<Self> {
        let store = Self::new(dir);
        store.ensure_directory()?;
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the backing directory (and parents) if absent
    pub fn ensure_directory(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    fn path_for(&self, id: &str) -> Result<PathBuf> {
        validate_id(id)?;
        Ok(self.dir.join(format!("{}.{}", id, EXTENSION)))
    }

    /// Check whether a record file exists for `id`
    pub fn exists(&self, id: &str) -> bool {
        self.path_for(id).map(|p| p.is_file()).unwrap_or(false)
    }

    /// All records, sorted by id ascending.
    ///
    /// Files without a `.json` extension are ignored. A file that fails to
    /// parse, or a record without a string `id`, fails the whole listing.
    pub fn list_all(&self) -> Result<Vec<T>> {
        self.list_objects()?
            .into_iter()
            .map(Self::from_object)
            .collect()
    }

    /// Read a record by id, failing with `RecordNotFound` if absent
    pub fn get(&self, id: &str) -> Result<T> {
        let object = self.read_record(id)?;
        Self::from_object(object)
    }

    /// Read a record by id; absent (or impossible) ids give `Ok(None)`
    pub fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        match self.get(id) {
            Ok(record) => Ok(Some(record)),
            Err(UltistatsError::RecordNotFound { .. }) | Err(UltistatsError::InvalidId(_)) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Records whose top-level `field` equals `value`, in id order
    pub fn find_by_field(&self, field: &str, value: &Value) -> Result<Vec<T>> {
        self.list_objects()?
            .into_iter()
            .filter(|object| object.get(field) == Some(value))
            .map(Self::from_object)
            .collect()
    }

    /// Persist a new record.
    ///
    /// Mints an id when the record has none and stamps `created_at`. A
    /// caller-supplied id that is already taken is rejected.
    pub fn create(&self, record: T) -> Result<T> {
        let mut object = Self::to_object(&record)?;

        let (id, path) = match record.id() {
            Some(id) => {
                let path = self.path_for(id)?;
                if path.exists() {
                    return Err(UltistatsError::DuplicateRecord {
                        kind: T::KIND,
                        id: id.to_string(),
                    });
                }
                (id.to_string(), path)
            }
            None => loop {
                let id = mint_id();
                let path = self.path_for(&id)?;
                if !path.exists() {
                    break (id, path);
                }
            },
        };

        object.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        object.insert(CREATED_AT_FIELD.to_string(), Value::String(timestamp_now()));
        object.remove(UPDATED_AT_FIELD);

        self.ensure_directory()?;
        Self::write_object(&path, &object)?;
        debug!(kind = %T::KIND, id = %id, "created record");

        Self::from_object(object)
    }

    /// Replace a stored record wholesale.
    ///
    /// The stored `id` and `created_at` win over whatever `record` carries;
    /// `updated_at` is restamped.
    pub fn update(&self, id: &str, record: T) -> Result<T> {
        let path = self.path_for(id)?;
        let existing = self.read_record(id)?;
        let mut object = Self::to_object(&record)?;

        object.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
        match existing.get(CREATED_AT_FIELD) {
            Some(created) => {
                object.insert(CREATED_AT_FIELD.to_string(), created.clone());
            }
            None => {
                object.remove(CREATED_AT_FIELD);
            }
        }
        object.insert(UPDATED_AT_FIELD.to_string(), Value::String(timestamp_now()));

        Self::write_object(&path, &object)?;
        debug!(kind = %T::KIND, id = %id, "updated record");

        Self::from_object(object)
    }

    /// Read-modify-write: load the record, apply `transform`, persist.
    /// Returns `Ok(None)` when no record exists for `id`.
    pub fn update_with<F>(&self, id: &str, transform: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut T),
    {
        let Some(mut record) = self.find_by_id(id)? else {
            return Ok(None);
        };
        transform(&mut record);
        self.update(id, record).map(Some)
    }

    /// Remove a record file. Returns whether anything was deleted.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let path = match self.path_for(id) {
            Ok(path) => path,
            Err(UltistatsError::InvalidId(_)) => return Ok(false),
            Err(e) => return Err(e),
        };

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(kind = %T::KIND, id = %id, "deleted record");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(UltistatsError::Io(e)),
        }
    }

    fn read_record(&self, id: &str) -> Result<Map<String, Value>> {
        let path = self.path_for(id)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse_object(&path, &contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(UltistatsError::not_found(T::KIND, id))
            }
            Err(e) => Err(UltistatsError::Io(e)),
        }
    }

    fn list_objects(&self) -> Result<Vec<Map<String, Value>>> {
        let mut records = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }

            let contents = fs::read_to_string(&path)?;
            let object = Self::parse_object(&path, &contents)?;
            let id = match object.get(ID_FIELD) {
                Some(Value::String(id)) => id.clone(),
                _ => {
                    return Err(UltistatsError::MalformedRecord {
                        path,
                        reason: "record has no string id".to_string(),
                    })
                }
            };
            records.push((id, object));
        }

        records.sort_by(|(a, _), (b, _)| a.cmp(b));
        trace!(kind = %T::KIND, count = records.len(), "listed records");

        Ok(records.into_iter().map(|(_, object)| object).collect())
    }

    fn parse_object(path: &Path, contents: &str) -> Result<Map<String, Value>> {
        let value: Value =
            serde_json::from_str(contents).map_err(|e| UltistatsError::MalformedRecord {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        match value {
            Value::Object(object) => Ok(object),
            _ => Err(UltistatsError::MalformedRecord {
                path: path.to_path_buf(),
                reason: "top-level value is not an object".to_string(),
            }),
        }
    }

    fn write_object(path: &Path, object: &Map<String, Value>) -> Result<()> {
        let contents = serde_json::to_string_pretty(object)?;
        fs::write(path, contents)?;
        Ok(())
    }

    fn to_object(record: &T) -> Result<Map<String, Value>> {
        match serde_json::to_value(record)? {
            Value::Object(object) => Ok(object),
            _ => Err(UltistatsError::Validation(format!(
                "{} record does not serialize to an object",
                T::KIND
            ))),
        }
    }

    fn from_object(object: Map<String, Value>) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(object))?)
    }
}
