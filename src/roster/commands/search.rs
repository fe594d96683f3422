use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>, query: &str) -> Result<CmdResult> {
    let matches = store.search_by_name(query);
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No matches."));
    }
    Ok(result.with_listed_students(matches))
}
