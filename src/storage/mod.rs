//! Storage layer for persisted navigation state.
//!
//! This module provides the key-value storage abstraction the expand state is
//! written through, the backends implementing it, and the persisted record
//! type.
//!
//! # Modules
//!
//! - `backend`: [`Storage`] trait, a local-storage shaped slot store
//! - `json`: JSON file-based storage with atomic writes
//! - `memory`: In-process storage with disabled / quota failure modes
//! - `models`: [`ExpandState`], the persisted folder → expanded mapping

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::Storage;
pub use json::JsonFileStorage;
pub use memory::MemoryStorage;
pub use models::ExpandState;
