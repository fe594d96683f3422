//! # Storage Layer
//!
//! [`RecordStore`] is the heart of roster: it owns every [`Student`] in memory
//! and mirrors the full set to a backing file after each mutation.
//!
//! Raw persistence is abstracted behind the [`StorageBackend`] trait so the
//! record logic can be tested without touching the filesystem:
//!
//! - [`fs::FsBackend`]: production JSON file, written atomically
//!   (temp file + rename).
//! - [`memory::MemBackend`]: in-memory text buffer for tests. It goes through
//!   the same codec as the file backend, so corrupt-data paths can be exercised.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "id": "3f0c...",
//!     "name": "Ada Lovelace",
//!     "age": 30,
//!     "major": "Math",
//!     "gpa": 4.0,
//!     "email": "ada@example.com"
//!   }
//! ]
//! ```
//!
//! Every save replaces the whole file. There is no header, version or log.

use crate::error::{Result, RosterError};
use crate::model::Student;
use std::collections::HashSet;
use std::path::PathBuf;

pub mod fs;
pub mod memory;
pub mod record_store;

pub use record_store::{LoadReport, RecordStore};

/// Raw whole-set I/O for the record store.
pub trait StorageBackend {
    /// Read the full record set. `Ok(None)` means nothing has been stored yet.
    fn load_records(&self) -> Result<Option<Vec<Student>>>;

    /// Replace the stored record set with `students`.
    /// MUST be all-or-nothing: a failed save leaves the previous data intact.
    fn save_records(&self, students: &[Student]) -> Result<()>;

    /// Where the data lives, for display.
    fn location(&self) -> PathBuf;

    /// Keep a copy of data that failed to load before it gets overwritten.
    /// Returns the location of the copy, if one was made.
    fn preserve_unreadable(&self) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}

/// Parse the backing file contents, rejecting duplicate ids.
pub fn decode_records(content: &str) -> Result<Vec<Student>> {
    let students: Vec<Student> = serde_json::from_str(content)?;
    let mut seen = HashSet::with_capacity(students.len());
    for student in &students {
        if !seen.insert(student.id.as_str()) {
            return Err(RosterError::Store(format!(
                "Duplicate student id: {}",
                student.id
            )));
        }
    }
    Ok(students)
}

pub fn encode_records(students: &[Student]) -> Result<String> {
    let mut content = serde_json::to_string_pretty(students)?;
    content.push('\n');
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewStudent;

    #[test]
    fn decodes_array_of_objects() {
        let content = r#"[
  {"id": "a1", "name": "Ada", "age": 30, "major": "Math", "gpa": 4.0, "email": "ada@example.com"},
  {"id": "b2", "name": "Alan", "age": 41, "major": "Logic", "gpa": 3.9, "email": "alan@example.com"}
]"#;
        let students = decode_records(content).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].id, "a1");
        assert_eq!(students[1].name, "Alan");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let content = r#"[
  {"id": "a1", "name": "Ada", "age": 30, "major": "Math", "gpa": 4.0, "email": "a"},
  {"id": "a1", "name": "Alan", "age": 41, "major": "Logic", "gpa": 3.9, "email": "b"}
]"#;
        let err = decode_records(content).unwrap_err();
        assert!(matches!(err, RosterError::Store(_)));
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(matches!(
            decode_records(r#"{"students": []}"#),
            Err(RosterError::Serialization(_))
        ));
        assert!(matches!(
            decode_records(r#"[{"id": "a1", "name": "Ada"}]"#),
            Err(RosterError::Serialization(_))
        ));
    }

    #[test]
    fn encodes_with_two_space_indent() {
        let student = Student::new(NewStudent::new("Ada", 30, "Math", 4.0, "ada@example.com"));
        let content = encode_records(&[student]).unwrap();
        assert!(content.starts_with("[\n  {\n    \"id\": "));
        assert!(content.contains("\"gpa\": 4.0"));
    }
}
