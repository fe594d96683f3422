use super::{decode_records, encode_records, StorageBackend};
use crate::error::{Result, RosterError};
use crate::model::Student;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const CORRUPT_SUFFIX: &str = ".corrupt";

/// JSON file backend.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "students.json".to_string())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RosterError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_records(&self) -> Result<Option<Vec<Student>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(RosterError::Io)?;
        decode_records(&content).map(Some)
    }

    fn save_records(&self, students: &[Student]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let content = encode_records(students)?;

        // Write next to the target so the rename stays on one filesystem
        let tmp_file = dir.join(format!(".{}-{}.tmp", self.file_name(), Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(RosterError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(RosterError::Io(e));
        }

        log::debug!("Saved {} students to {}", students.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }

    fn preserve_unreadable(&self) -> Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }
        // Each recovery gets its own copy; an earlier one is never replaced
        let backup = self.parent_dir().join(format!(
            "{}{}-{}",
            self.file_name(),
            CORRUPT_SUFFIX,
            Uuid::new_v4().simple()
        ));
        fs::copy(&self.path, &backup).map_err(RosterError::Io)?;
        Ok(Some(backup))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewStudent;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FsBackend) {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().join("students.json"));
        (dir, backend)
    }

    fn sample() -> Vec<Student> {
        vec![
            Student::new(NewStudent::new("Ada Lovelace", 30, "Math", 4.0, "ada@example.com")),
            Student::new(NewStudent::new("Alan Turing", 41, "Logic", 3.9, "alan@example.com")),
        ]
    }

    #[test]
    fn missing_file_loads_as_none() {
        let (_dir, backend) = setup();
        assert!(backend.load_records().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, backend) = setup();
        let students = sample();
        backend.save_records(&students).unwrap();

        let loaded = backend.load_records().unwrap().unwrap();
        assert_eq!(loaded, students);
    }

    #[test]
    fn save_replaces_previous_content() {
        let (_dir, backend) = setup();
        backend.save_records(&sample()).unwrap();
        backend.save_records(&sample()[..1]).unwrap();

        let loaded = backend.load_records().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn save_leaves_no_temp_files() {
        let (dir, backend) = setup();
        backend.save_records(&sample()).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().join("nested").join("deeper").join("db.json"));
        backend.save_records(&sample()).unwrap();
        assert!(backend.path().exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let (_dir, backend) = setup();
        fs::write(backend.path(), "not json at all").unwrap();
        assert!(matches!(
            backend.load_records(),
            Err(RosterError::Serialization(_))
        ));
    }

    #[test]
    fn preserve_unreadable_copies_the_file() {
        let (dir, backend) = setup();
        fs::write(backend.path(), "{ broken").unwrap();

        let backup = backend.preserve_unreadable().unwrap().unwrap();
        assert_eq!(backup.parent(), Some(dir.path()));
        let name = backup.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("students.json.corrupt-"), "bad name: {}", name);
        assert_eq!(fs::read_to_string(backup).unwrap(), "{ broken");
    }

    #[test]
    fn repeated_preserve_keeps_every_copy() {
        let (_dir, backend) = setup();
        fs::write(backend.path(), "first").unwrap();
        let first = backend.preserve_unreadable().unwrap().unwrap();
        fs::write(backend.path(), "second").unwrap();
        let second = backend.preserve_unreadable().unwrap().unwrap();

        assert_ne!(first, second);
        assert_eq!(fs::read_to_string(first).unwrap(), "first");
        assert_eq!(fs::read_to_string(second).unwrap(), "second");
    }

    #[test]
    fn invalid_utf8_is_invalid_data() {
        let (_dir, backend) = setup();
        fs::write(backend.path(), [0xffu8, 0xfe, 0x00, 0x5b]).unwrap();
        match backend.load_records() {
            Err(RosterError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn directory_in_place_of_file_is_a_read_error() {
        let (_dir, backend) = setup();
        fs::create_dir(backend.path()).unwrap();
        match backend.load_records() {
            Err(RosterError::Io(e)) => assert_ne!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn preserve_unreadable_without_file_is_none() {
        let (_dir, backend) = setup();
        assert!(backend.preserve_unreadable().unwrap().is_none());
    }
}
