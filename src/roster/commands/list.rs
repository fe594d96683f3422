use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let students = store.list();
    let mut result = CmdResult::default();
    if students.is_empty() {
        result.add_message(CmdMessage::info("No students found."));
    }
    Ok(result.with_listed_students(students))
}
