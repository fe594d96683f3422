use super::{decode_records, encode_records, StorageBackend};
use crate::error::{Result, RosterError};
use crate::model::Student;
use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data. Content is kept as encoded text so it goes
/// through the same codec as the file backend.
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<Option<String>>,
    preserved: RefCell<Option<String>>,
    fail_saves: Cell<bool>,
    fail_loads: Cell<Option<io::ErrorKind>>,
    saves: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored text, valid or not.
    pub fn with_content(content: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.content.borrow_mut() = Some(content.into());
        backend
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Make every subsequent load fail with an I/O error of `kind`, as if
    /// the stored data could not be read at all.
    pub fn set_fail_loads(&self, kind: Option<io::ErrorKind>) {
        self.fail_loads.set(kind);
    }

    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    pub fn preserved(&self) -> Option<String> {
        self.preserved.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn load_records(&self) -> Result<Option<Vec<Student>>> {
        if let Some(kind) = self.fail_loads.get() {
            return Err(RosterError::Io(io::Error::new(kind, "simulated read failure")));
        }
        match self.content.borrow().as_deref() {
            None => Ok(None),
            Some(raw) => decode_records(raw).map(Some),
        }
    }

    fn save_records(&self, students: &[Student]) -> Result<()> {
        if self.fail_saves.get() {
            return Err(RosterError::Io(io::Error::other("simulated write failure")));
        }
        let encoded = encode_records(students)?;
        *self.content.borrow_mut() = Some(encoded);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://students.json")
    }

    fn preserve_unreadable(&self) -> Result<Option<PathBuf>> {
        let current = self.content.borrow().clone();
        match current {
            None => Ok(None),
            Some(raw) => {
                *self.preserved.borrow_mut() = Some(raw);
                Ok(Some(PathBuf::from("memory://students.json.corrupt")))
            }
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NewStudent;
    use crate::store::RecordStore;

    pub struct StoreFixture {
        pub store: RecordStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: RecordStore::open(MemBackend::new()).unwrap(),
            }
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                let fields = NewStudent::new(
                    format!("Student {}", i + 1),
                    18 + i as u32,
                    "Undeclared",
                    3.0,
                    format!("student{}@example.com", i + 1),
                );
                self.store.add(fields).unwrap();
            }
            self
        }

        pub fn with_student(mut self, name: &str, major: &str) -> Self {
            let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
            self.store
                .add(NewStudent::new(name, 20, major, 3.5, email))
                .unwrap();
            self
        }
    }
}
