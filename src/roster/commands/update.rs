use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentPatch;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::resolve_id;

pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    id: &str,
    patch: &StudentPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let updated = match resolve_id(store, id)? {
        Some(resolved) => store.update(&resolved, patch)?,
        None => None,
    };

    match updated {
        Some(student) => {
            result.add_message(CmdMessage::success(format!(
                "Student updated: {} ({})",
                student.name, student.id
            )));
            result.affected_students.push(student);
        }
        None => result.add_message(CmdMessage::warning(format!("Student not found: {}", id))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{view, MessageLevel};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_only_given_fields() {
        let mut store = StoreFixture::new().with_student("Ada Lovelace", "Math").store;
        let before = store.list()[0].clone();

        run(&mut store, &before.id, &StudentPatch::new().major("Computing")).unwrap();

        let after = view::run(&store, &before.id).unwrap().listed_students[0].clone();
        assert_eq!(after.major, "Computing");
        assert_eq!(after.name, before.name);
        assert_eq!(after.email, before.email);
        assert_eq!(after.age, before.age);
        assert_eq!(after.gpa, before.gpa);
    }

    #[test]
    fn unknown_id_is_a_warning_and_saves_nothing() {
        let mut store = StoreFixture::new().with_students(1).store;
        let saves = store.backend().save_count();

        let result = run(&mut store, "nope", &StudentPatch::new().age(99)).unwrap();
        assert!(result.affected_students.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.backend().save_count(), saves);
    }
}
