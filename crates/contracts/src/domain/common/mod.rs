//! Common types and traits for all master-data records

pub mod loose;
pub mod master_record;
pub mod record_id;

// Re-exports
pub use master_record::{MasterRecord, SortKind};
pub use record_id::RecordId;
