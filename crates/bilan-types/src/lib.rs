#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/bilan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core type definitions for the bilan financial statement analyzer.
//!
//! This crate provides the input side of the pipeline: the statement table,
//! its typed rows, the required-column contract and the shared error type.

/// The version of the bilan-types crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod schema;
pub mod types;

// Re-exports
pub use error::{BilanError, Result};
pub use schema::{REQUIRED_COLUMNS, ensure_schema, missing_columns, validate};
pub use types::{FinancialRecord, FinancialStatements, Period};
