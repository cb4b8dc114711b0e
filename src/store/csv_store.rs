//! CSV-backed implementations of the queue and output stores
//!
//! Records are single-column CSV rows, no header. Appends reopen the file in
//! append mode and flush before returning, so every record that was reported
//! written survives a crash. The queue overwrite is a plain truncate-and-
//! rewrite; it is not atomic with respect to a crash mid-pass (see
//! [`crate::pipeline::run_resolve_pass`]).

use crate::store::{OutputStore, QueueStore, StoreError, StoreResult};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// File-backed persisted queue of pending links
#[derive(Debug)]
pub struct CsvQueue {
    path: PathBuf,
}

impl CsvQueue {
    /// Opens (or prepares to create) a queue file at the given path
    ///
    /// Parent directories are created if missing. The file itself is only
    /// created on first write, so a fresh queue reads as empty.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        ensure_parent_dir(&path)?;
        Ok(Self { path })
    }

    /// The path backing this queue
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QueueStore for CsvQueue {
    fn read_all(&self) -> StoreResult<Vec<String>> {
        read_records(&self.path)
    }

    fn overwrite_all(&mut self, records: &[String]) -> StoreResult<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        for record in records {
            writer.write_record([record.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }

    fn append_one(&mut self, record: &str) -> StoreResult<()> {
        append_record(&self.path, record)
    }
}

/// File-backed append-only store of resolved canonical URLs
#[derive(Debug)]
pub struct CsvOutput {
    path: PathBuf,
}

impl CsvOutput {
    /// Opens (or prepares to create) an output file at the given path
    ///
    /// Parent directories are created if missing.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        ensure_parent_dir(&path)?;
        Ok(Self { path })
    }

    /// The path backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full contents, for reporting and tests
    pub fn read_all(&self) -> StoreResult<Vec<String>> {
        read_records(&self.path)
    }
}

impl OutputStore for CsvOutput {
    fn append_one(&mut self, record: &str) -> StoreResult<()> {
        append_record(&self.path, record)
    }
}

/// Creates the parent directory of a file path if it does not exist
fn ensure_parent_dir(path: &Path) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Reads all first-column values from a CSV file; missing file reads as empty
fn read_records(path: &Path) -> StoreResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        match row.get(0) {
            Some(url) => records.push(url.to_string()),
            None => {
                return Err(StoreError::EmptyRecord {
                    path: path.display().to_string(),
                })
            }
        }
    }
    Ok(records)
}

/// Appends one single-column record and flushes it to disk
fn append_record(path: &Path, record: &str) -> StoreResult<()> {
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record([record])?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn queue_in(dir: &TempDir) -> CsvQueue {
        CsvQueue::open(dir.path().join("pending.csv")).unwrap()
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let queue = queue_in(&dir);
        assert!(queue.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_read_preserves_order() {
        let dir = TempDir::new().unwrap();
        let mut queue = queue_in(&dir);

        queue.append_one("https://a.example.com/1").unwrap();
        queue.append_one("https://a.example.com/2").unwrap();
        queue.append_one("https://a.example.com/3").unwrap();

        assert_eq!(
            queue.read_all().unwrap(),
            vec![
                "https://a.example.com/1",
                "https://a.example.com/2",
                "https://a.example.com/3"
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let dir = TempDir::new().unwrap();
        let mut queue = queue_in(&dir);

        queue.append_one("https://a.example.com/1").unwrap();
        queue.append_one("https://a.example.com/1").unwrap();

        assert_eq!(queue.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_overwrite_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let mut queue = queue_in(&dir);

        queue.append_one("https://a.example.com/1").unwrap();
        queue.append_one("https://a.example.com/2").unwrap();

        queue
            .overwrite_all(&["https://a.example.com/3".to_string()])
            .unwrap();

        assert_eq!(queue.read_all().unwrap(), vec!["https://a.example.com/3"]);
    }

    #[test]
    fn test_overwrite_with_empty_clears() {
        let dir = TempDir::new().unwrap();
        let mut queue = queue_in(&dir);

        queue.append_one("https://a.example.com/1").unwrap();
        queue.overwrite_all(&[]).unwrap();

        assert!(queue.read_all().unwrap().is_empty());
        // The file still exists after a clear; it reads as empty
        assert!(queue.path().exists());
    }

    #[test]
    fn test_append_after_overwrite() {
        let dir = TempDir::new().unwrap();
        let mut queue = queue_in(&dir);

        queue
            .overwrite_all(&["https://a.example.com/1".to_string()])
            .unwrap();
        queue.append_one("https://a.example.com/2").unwrap();

        assert_eq!(
            queue.read_all().unwrap(),
            vec!["https://a.example.com/1", "https://a.example.com/2"]
        );
    }

    #[test]
    fn test_url_with_comma_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut queue = queue_in(&dir);

        let tricky = "https://a.example.com/search?q=a,b";
        queue.append_one(tricky).unwrap();
        assert_eq!(queue.read_all().unwrap(), vec![tricky]);
    }

    #[test]
    fn test_output_appends_across_reopens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("canonical.csv");

        {
            let mut output = CsvOutput::open(&path).unwrap();
            output.append_one("https://a.example.com/c1").unwrap();
        }
        {
            let mut output = CsvOutput::open(&path).unwrap();
            output.append_one("https://a.example.com/c2").unwrap();
            assert_eq!(
                output.read_all().unwrap(),
                vec!["https://a.example.com/c1", "https://a.example.com/c2"]
            );
        }
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data/deep/pending.csv");

        let mut queue = CsvQueue::open(&nested).unwrap();
        queue.append_one("https://a.example.com/1").unwrap();

        assert!(nested.exists());
    }
}
