//! # Todoapp Architecture
//!
//! Todoapp is a **UI-agnostic task-list library**: named lists of tasks, one of
//! them selected, persisted as a single JSON document. It has a terminal client,
//! but nothing in here knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI client (the `todo` binary, or any other view layer)     │
//! │  - Parses input, renders output, asks for confirmation      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves positions and names to ids                      │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State Store (state.rs) + Snapshots (snapshot.rs)           │
//! │  - Owns the Document, the only code that mutates it         │
//! │  - Persists after every applied change                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SlotStore: document <-> JSON, first-run seeding          │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular Rust
//! types, never writes to stdout/stderr and never exits the process.
//!
//! ## Testing Strategy
//!
//! Store and API logic is tested against `MemBackend`, which keeps everything in
//! memory and can simulate failing reads and writes. Filesystem behavior is
//! covered by the integration tests in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for UI clients
//! - [`state`]: The State Store and its mutation operations
//! - [`snapshot`]: Export/import of the whole document
//! - [`store`]: Slot persistence and storage backends
//! - [`model`]: Core data types (`Document`, `TodoList`, `Task`)
//! - [`view`]: Read-only display projections (sorting, overdue)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod view;
