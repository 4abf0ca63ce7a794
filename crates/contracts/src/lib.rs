//! Wire types shared between the master-data frontend and the REST backend.
//!
//! Records arrive with lower-case field names (`brandname`), mutation
//! payloads leave with PascalCase names (`BrandName`). Both mappings live
//! here as serde attributes and nowhere else.

pub mod domain;
pub mod shared;
