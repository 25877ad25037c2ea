//! Storage layer for the persisted link hub document.
//!
//! # Modules
//!
//! - `backend`: the [`KeyValueStore`] trait
//! - `file`: JSON file per key, atomic writes
//! - `memory`: shared in-memory store with an optional quota
//! - `persistence`: the adapter that stores the document under one key

pub mod backend;
pub mod file;
pub mod memory;
pub mod persistence;

pub use backend::KeyValueStore;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persistence::{Persistence, STORAGE_KEY};
