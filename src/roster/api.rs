//! # API Facade
//!
//! [`RosterApi`] is the single entry point for every roster operation,
//! whatever the UI. It owns the [`RecordStore`] and dispatches to the
//! command layer; it does no printing and holds no business logic.
//!
//! The facade is generic over [`StorageBackend`]:
//! - Production: `RosterApi<FsBackend>`
//! - Testing: `RosterApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::{NewStudent, StudentPatch};
use crate::store::{LoadReport, RecordStore, StorageBackend};
use std::path::PathBuf;

pub struct RosterApi<B: StorageBackend> {
    store: RecordStore<B>,
}

impl<B: StorageBackend> RosterApi<B> {
    /// Open the store behind `backend`. Malformed data does not fail this
    /// call; inspect [`RosterApi::load_report`] to find out what happened.
    /// Data that cannot be read at all does.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self {
            store: RecordStore::open(backend)?,
        })
    }

    pub fn add_student(&mut self, fields: NewStudent) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, fields)
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_student(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn update_student(
        &mut self,
        id: &str,
        patch: &StudentPatch,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_student(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn search_students(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    /// Re-read the backing data, dropping in-memory state.
    pub fn reload(&mut self) -> Result<LoadReport> {
        self.store.load()
    }

    pub fn load_report(&self) -> &LoadReport {
        self.store.last_load()
    }

    pub fn data_path(&self) -> PathBuf {
        self.store.location()
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;

    fn api() -> RosterApi<MemBackend> {
        RosterApi::open(MemBackend::new()).unwrap()
    }

    fn ada() -> NewStudent {
        NewStudent::new("Ada Lovelace", 30, "Math", 4.0, "ada@example.com")
    }

    #[test]
    fn add_dispatches_and_persists() {
        let mut api = api();
        let result = api.add_student(ada()).unwrap();
        assert_eq!(result.affected_students.len(), 1);
        assert_eq!(api.store().backend().save_count(), 1);
    }

    #[test]
    fn crud_cycle() {
        let mut api = api();
        let id = api.add_student(ada()).unwrap().affected_students[0].id.clone();

        let viewed = api.view_student(&id).unwrap();
        assert_eq!(viewed.listed_students[0].name, "Ada Lovelace");

        let updated = api
            .update_student(&id, &StudentPatch::new().email("countess@example.com"))
            .unwrap();
        assert_eq!(updated.affected_students[0].email, "countess@example.com");

        let found = api.search_students("LOVELACE").unwrap();
        assert_eq!(found.listed_students.len(), 1);

        let deleted = api.delete_student(&id).unwrap();
        assert_eq!(deleted.affected_students.len(), 1);
        assert!(api.list_students().unwrap().listed_students.is_empty());
    }

    #[test]
    fn reports_recovered_load() {
        let api = RosterApi::open(MemBackend::with_content("nonsense")).unwrap();
        assert!(matches!(api.load_report(), LoadReport::Recovered { .. }));
        assert!(api.list_students().unwrap().listed_students.is_empty());
    }

    #[test]
    fn unreadable_backend_fails_open() {
        let backend = MemBackend::new();
        backend.set_fail_loads(Some(std::io::ErrorKind::PermissionDenied));
        assert!(RosterApi::open(backend).is_err());
    }

    #[test]
    fn reload_rereads_backend() {
        let mut api = api();
        api.add_student(ada()).unwrap();
        assert_eq!(api.reload().unwrap(), LoadReport::Loaded(1));
    }
}
