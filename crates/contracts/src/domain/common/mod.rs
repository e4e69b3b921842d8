//! Common types and traits for all record kinds

pub mod record_id;
pub mod record_store;

// Re-exports
pub use record_id::{Record, RecordId};
pub use record_store::RecordStore;
