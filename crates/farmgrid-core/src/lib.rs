//! Farmgrid Core - Domain models, dataset generation, and configuration
//!
//! This crate contains the seed-dataset domain logic shared by the generator
//! and uploader front-ends.

pub mod config;
pub mod dataset;
pub mod error;
pub mod generate;
pub mod models;

pub use error::{FarmgridError, Result};
