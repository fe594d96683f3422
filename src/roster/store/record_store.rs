use super::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::{check_gpa, NewStudent, Student, StudentPatch};
use std::io;
use std::path::PathBuf;

/// Outcome of reading the backing data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadReport {
    /// Nothing stored yet; the store starts empty.
    Missing,
    /// All records were read.
    Loaded(usize),
    /// The stored data could not be used and the store fell back to empty.
    Recovered {
        reason: String,
        backup: Option<PathBuf>,
    },
}

/// All student records, held in memory and saved in full after every change.
///
/// Records keep insertion order. Every accessor hands out clones, so a
/// returned snapshot is never affected by later mutations.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    students: Vec<Student>,
    last_load: LoadReport,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Construct the store and load whatever the backend holds.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self {
            backend,
            students: Vec::new(),
            last_load: LoadReport::Missing,
        };
        store.load()?;
        Ok(store)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    pub fn last_load(&self) -> &LoadReport {
        &self.last_load
    }

    /// Replace the in-memory set with the stored one.
    ///
    /// Malformed data is not an error: it is logged, a copy is kept when the
    /// backend supports it, and the store becomes empty. A file that cannot
    /// be read at all is an error and the in-memory set is left as it was.
    pub fn load(&mut self) -> Result<LoadReport> {
        let report = match self.backend.load_records() {
            Ok(None) => {
                log::debug!(
                    "No data at {}, starting empty",
                    self.backend.location().display()
                );
                self.students.clear();
                LoadReport::Missing
            }
            Ok(Some(students)) => {
                log::debug!(
                    "Loaded {} students from {}",
                    students.len(),
                    self.backend.location().display()
                );
                let count = students.len();
                self.students = students;
                LoadReport::Loaded(count)
            }
            Err(err) if is_malformed(&err) => {
                let location = self.backend.location();
                log::warn!("Discarding malformed data in {}: {}", location.display(), err);

                let backup = match self.backend.preserve_unreadable() {
                    Ok(backup) => backup,
                    Err(e) => {
                        log::error!("Could not keep a copy of {}: {}", location.display(), e);
                        None
                    }
                };
                if let Some(path) = &backup {
                    log::warn!("Unreadable data copied to {}", path.display());
                }

                self.students.clear();
                LoadReport::Recovered {
                    reason: err.to_string(),
                    backup,
                }
            }
            // Anything else (permissions, a directory in the way) leaves the
            // file untouched and must not be mistaken for an empty roster.
            Err(err) => {
                log::error!("Could not read {}: {}", self.backend.location().display(), err);
                return Err(err);
            }
        };

        self.last_load = report.clone();
        Ok(report)
    }

    /// Overwrite the stored data with the full in-memory set.
    pub fn save(&self) -> Result<()> {
        self.backend.save_records(&self.students)
    }

    pub fn add(&mut self, fields: NewStudent) -> Result<Student> {
        check_gpa(fields.gpa)?;
        let student = Student::new(fields);
        self.students.push(student.clone());

        if let Err(e) = self.save() {
            self.students.pop();
            return Err(e);
        }

        log::info!("Added student {} ({})", student.id, student.name);
        Ok(student)
    }

    pub fn list(&self) -> Vec<Student> {
        self.students.clone()
    }

    pub fn get(&self, id: &str) -> Option<Student> {
        self.students.iter().find(|s| s.id == id).cloned()
    }

    /// Apply `patch` to the record `id`. Returns `Ok(None)` without saving
    /// when there is no such record.
    pub fn update(&mut self, id: &str, patch: &StudentPatch) -> Result<Option<Student>> {
        let Some(pos) = self.position(id) else {
            return Ok(None);
        };
        if let Some(gpa) = patch.gpa {
            check_gpa(gpa)?;
        }

        let previous = self.students[pos].clone();
        self.students[pos].apply(patch);

        if let Err(e) = self.save() {
            self.students[pos] = previous;
            return Err(e);
        }

        log::info!("Updated student {}", id);
        Ok(Some(self.students[pos].clone()))
    }

    /// Remove the record `id`. Returns `Ok(false)` without saving when there
    /// is no such record.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(pos) = self.position(id) else {
            return Ok(false);
        };

        let removed = self.students.remove(pos);
        if let Err(e) = self.save() {
            self.students.insert(pos, removed);
            return Err(e);
        }

        log::info!("Deleted student {} ({})", removed.id, removed.name);
        Ok(true)
    }

    /// Case-insensitive substring match on `name`. An empty query matches all.
    pub fn search_by_name(&self, query: &str) -> Vec<Student> {
        let query = query.to_lowercase();
        self.students
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// Ids starting with `prefix`, in listing order.
    pub fn ids_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.students
            .iter()
            .filter(|s| s.id.starts_with(prefix))
            .map(|s| s.id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }
}

/// Data errors a load may recover from. Only these are safe to replace
/// with an empty roster, since the file itself was readable.
fn is_malformed(err: &RosterError) -> bool {
    match err {
        RosterError::Serialization(_) | RosterError::Store(_) => true,
        RosterError::Io(e) => e.kind() == io::ErrorKind::InvalidData,
        _ => false,
    }
}
