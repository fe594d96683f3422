//! # Roster Architecture
//!
//! Roster is a small student record manager. All records live in memory and
//! are written to a single JSON file after every change.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, the interactive menu, printing, exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the RecordStore, dispatches to commands             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves ids, turns outcomes into CmdResult messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore: the record set + save-on-every-mutation     │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through the `log` facade; the binary installs `env_logger`.
//!
//! ## Load Failures
//!
//! A missing data file means an empty roster. A file that cannot be parsed
//! also yields an empty roster, but the failure is logged, a copy of the file
//! is kept next to it (`students.json.corrupt-<uuid>`) and the outcome is
//! reported through [`store::LoadReport`]. A file that cannot be read at all
//! (permissions, a directory in the way) is an error and is left untouched.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: RecordStore and storage backends
//! - [`model`]: `Student`, `NewStudent`, `StudentPatch`
//! - [`config`]: Configuration and data file resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
