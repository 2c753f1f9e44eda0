//! Core module for taskrank
//!
//! Task types, wire records and the ingestion layer that validates them.

pub mod ingest;
mod types;

pub use ingest::{InputFormat, parse_batch, validate_batch};
pub use types::*;
