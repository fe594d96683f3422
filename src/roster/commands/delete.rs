use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::resolve_id;

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let target = resolve_id(store, id)?.and_then(|resolved| store.get(&resolved));
    let Some(student) = target else {
        result.add_message(CmdMessage::warning(format!("Student not found: {}", id)));
        return Ok(result);
    };

    if store.delete(&student.id)? {
        result.add_message(CmdMessage::success(format!(
            "Student deleted: {} ({})",
            student.name, student.id
        )));
        result.affected_students.push(student);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{list, MessageLevel};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_student() {
        let mut store = StoreFixture::new().with_students(2).store;
        let id = store.list()[0].id.clone();

        let result = run(&mut store, &id).unwrap();
        assert_eq!(result.affected_students[0].id, id);
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let remaining = list::run(&store).unwrap().listed_students;
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|s| s.id != id));
    }

    #[test]
    fn unknown_id_is_a_warning() {
        let mut store = StoreFixture::new().with_students(1).store;
        let result = run(&mut store, "missing").unwrap();
        assert!(result.affected_students.is_empty());
        assert!(result.has_warnings());
        assert_eq!(store.len(), 1);
    }
}
