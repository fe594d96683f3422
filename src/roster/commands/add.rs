use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewStudent;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, fields: NewStudent) -> Result<CmdResult> {
    let student = store.add(fields)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added: {} ({})",
        student.name, student.id
    )));
    result.affected_students.push(student);
    Ok(result)
}
