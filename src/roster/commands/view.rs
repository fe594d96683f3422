use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::resolve_id;

pub fn run<B: StorageBackend>(store: &RecordStore<B>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match resolve_id(store, id)?.and_then(|id| store.get(&id)) {
        Some(student) => result.listed_students.push(student),
        None => result.add_message(CmdMessage::warning(format!("Student not found: {}", id))),
    }
    Ok(result)
}
