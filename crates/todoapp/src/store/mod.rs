//! # Storage Layer
//!
//! The whole [`crate::model::Document`] is persisted as one JSON value under a
//! single key (the *slot*). Every mutation rewrites the slot in full; there is no
//! partial update, journal or cache.
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw string I/O for a key. Knows nothing about
//!   documents.
//! - [`slot::SlotStore`]: encodes/decodes the document, seeds a first-run
//!   document when the slot is empty.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production backend, one file per key, atomic
//!   writes (tmp file + rename).
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O. Can
//!   simulate read and write failures.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! └── simple_todo_v1.json   # The slot: {"lists": [...], "selectedListId": ...}
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod slot;
