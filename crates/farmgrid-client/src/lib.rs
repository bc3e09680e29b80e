//! Farmgrid Client - HTTP upload adapter
//!
//! This crate delivers seed-dataset records to the farm API, one POST per
//! record, classifying each outcome instead of propagating failures.

pub mod uploader;

// Re-export main types
pub use uploader::{RecordKind, UploadEvent, UploadOutcome, UploadReport, Uploader};
