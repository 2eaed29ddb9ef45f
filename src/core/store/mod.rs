//! Persistent, append-only collection of grade records
//!
//! The store owns its backing CSV file. Every mutation rewrites the whole file,
//! so the file always mirrors the in-memory collection.

pub mod csv_codec;

use crate::core::error::{PlannerError, StorageError};
use crate::core::models::GradeRecord;
use crate::core::stats::{self, AcademicStats};
use crate::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use csv_codec::COLUMNS;

/// Grade records in entry order, backed by a CSV file
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<GradeRecord>,
}

impl RecordStore {
    /// Create an empty store bound to `path` without touching the file
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Create a store bound to `path` and load it
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, StorageError> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory collection with the contents of the backing file
    ///
    /// A missing file yields an empty collection.
    ///
    /// # Errors
    /// Returns `StorageError::Malformed` for a file that does not match the
    /// record schema, `StorageError::Read` if it cannot be read.
    pub fn load(&mut self) -> Result<(), StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No record file at {}, starting empty", self.path.display());
                self.records.clear();
                return Ok(());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        self.records =
            csv_codec::decode_records(&content).map_err(|e| StorageError::Malformed {
                path: self.path.clone(),
                line: e.line,
                reason: e.reason,
            })?;
        info!(
            "Loaded {} record(s) from {}",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Write the whole collection to the backing file
    ///
    /// # Errors
    /// Returns `StorageError::Write` if the directory or file cannot be written.
    pub fn save(&self) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        fs::write(&self.path, csv_codec::encode_records(&self.records)).map_err(write_err)?;
        debug!(
            "Saved {} record(s) to {}",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Validate, grade, append and persist a course
    ///
    /// # Errors
    /// Returns `PlannerError::InvalidInput` if units or score are out of range and
    /// `PlannerError::Storage` if the file cannot be written. Either way the
    /// collection is left as it was.
    pub fn add(
        &mut self,
        course_code: &str,
        units: i64,
        score: f64,
    ) -> Result<&GradeRecord, PlannerError> {
        let record = GradeRecord::new(course_code, units, score)?;
        self.records.push(record);

        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e.into());
        }

        let added = &self.records[self.records.len() - 1];
        info!(
            "Added {} ({} units, score {}) -> {} / {} GP",
            added.course_code(),
            added.units(),
            added.score(),
            added.grade(),
            added.grade_point()
        );
        Ok(added)
    }

    /// Delete the backing file and empty the collection
    ///
    /// # Errors
    /// Returns `StorageError::Remove` if the file exists but cannot be deleted.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(StorageError::Remove {
                    path: self.path.clone(),
                    source,
                })
            }
        }
        let removed = self.records.len();
        self.records.clear();
        info!("Cleared {removed} record(s) from {}", self.path.display());
        Ok(())
    }

    /// Records in entry order
    #[must_use]
    pub fn all(&self) -> &[GradeRecord] {
        &self.records
    }

    /// CGPA and totals over every record
    #[must_use]
    pub fn stats(&self) -> AcademicStats {
        stats::compute_stats(&self.records)
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, RecordStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = RecordStore::new(dir.path().join("data").join("records.csv"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_dir, mut store) = temp_store();
        store.load().unwrap();
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_add_persists_immediately() {
        let (_dir, mut store) = temp_store();
        let added = store.add("cve311", 3, 75.0).unwrap();
        assert_eq!(added.course_code(), "CVE311");

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "Course_Code,Units,Score,Grade,GP,WP\nCVE311,3,75,A,5,15\n"
        );
    }

    #[test]
    fn test_rejected_input_leaves_store_unchanged() {
        let (_dir, mut store) = temp_store();
        store.add("CVE311", 3, 75.0).unwrap();

        for (units, score) in [(0, 50.0), (7, 50.0), (3, -1.0), (3, 101.0)] {
            let err = store.add("BAD", units, score).unwrap_err();
            assert!(err.is_invalid_input(), "expected invalid input for {units}/{score}");
        }

        assert_eq!(store.len(), 1);
        let reloaded = RecordStore::open(store.path()).unwrap();
        assert_eq!(reloaded.all(), store.all());
    }

    #[test]
    fn test_clear_removes_file() {
        let (_dir, mut store) = temp_store();
        store.add("CVE311", 3, 75.0).unwrap();
        assert!(store.path().exists());

        store.clear().unwrap();
        assert!(store.is_empty());
        assert!(!store.path().exists());

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the write fail
        let path = dir.path().join("records.csv");
        fs::create_dir(&path).unwrap();
        let mut store = RecordStore::new(&path);

        let err = store.add("CVE311", 3, 75.0).unwrap_err();
        assert!(matches!(err, PlannerError::Storage(StorageError::Write { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn test_stats_follow_records() {
        let (_dir, mut store) = temp_store();
        store.add("CVE311", 3, 75.0).unwrap();
        store.add("CVE313", 4, 55.0).unwrap();

        let stats = store.stats();
        assert_eq!(stats.total_units, 7);
        assert_eq!(stats.total_weighted_points, 27);
        assert!((stats.gpa - 3.86).abs() < 1e-9);
    }
}
