//! mindcheck-storage
//!
//! Local persistence. JSON records in a key-value store, either one file
//! per key on disk or an in-memory map.

pub mod assessments;
pub mod error;
pub mod file;
pub mod memory;
pub mod state;
pub mod store;
