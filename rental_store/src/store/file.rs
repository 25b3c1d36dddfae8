use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::record::RentalRecord;
use crate::store::RentalsRepository;

/// File-backed rental store. The whole sequence is serialized on every
/// mutation, one record per line.
#[derive(Debug, Clone)]
pub struct FileRentalStore {
    path: PathBuf,
    records: Vec<RentalRecord>,
}

impl FileRentalStore {
    /// An empty store bound to `path`. Nothing is written until the first
    /// mutation.
    pub fn new(path: impl Into<PathBuf>) -> FileRentalStore {
        FileRentalStore {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Reads the store from `path`. A missing file yields an empty store;
    /// any other read failure is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<FileRentalStore> {
        let path = path.into();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed file read {:?}", path))
            }
        };

        Ok(FileRentalStore {
            records: parse_records(&path, &contents),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One record per line; the first unreadable line ends the load, keeping
/// whatever parsed before it.
fn parse_records(path: &Path, contents: &str) -> Vec<RentalRecord> {
    let mut records = Vec::new();
    for (lineno, line) in contents.lines().enumerate() {
        match line.parse::<RentalRecord>() {
            Ok(record) => records.push(record),
            Err(err) => {
                log::warn!(
                    "Stopping load of {:?} at line {}: {}",
                    path,
                    lineno + 1,
                    err
                );
                break;
            }
        }
    }
    records
}

impl RentalsRepository for FileRentalStore {
    fn save(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp_file = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed temp file creation in {:?}", dir))?;

        for record in &self.records {
            writeln!(tmp_file, "{}", record)
                .with_context(|| format!("Failed record write for {:?}", self.path))?;
        }

        tmp_file.flush()?;
        tmp_file
            .persist(&self.path)
            .with_context(|| format!("Failed file replace {:?}", self.path))?;

        Ok(())
    }

    fn list(&self) -> &[RentalRecord] {
        &self.records
    }

    fn add(&mut self, record: RentalRecord) -> Result<()> {
        self.records.push(record);
        self.save()
    }

    fn find_by_exact(&self, value: &str) -> Vec<&RentalRecord> {
        self.records
            .iter()
            .filter(|record| record.renter_name == value || record.phone_model == value)
            .collect()
    }

    fn delete_first_by_name(&mut self, name: &str) -> Result<bool> {
        match self
            .records
            .iter()
            .position(|record| record.renter_name == name)
        {
            Some(idx) => {
                self.records.remove(idx);
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn sorted_by_name(&self) -> Vec<RentalRecord> {
        let mut sorted = self.records.to_vec();
        sorted.sort_by(|a, b| a.renter_name.cmp(&b.renter_name));
        sorted
    }
}
