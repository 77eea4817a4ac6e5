//! Core library for the cursor-based circular ring container.
//!
//! This crate provides the fundamental pieces of the ring data structure:
//! - The circular container itself and its single movable cursor
//! - Error types shared across ring operations
//! - Textual token ingestion for bulk loading

pub mod error;
pub mod ingest;
pub mod ring;

pub use error::{Error, Result, TokenError};
pub use ingest::{ingest_tokens, FromToken, IngestReport, SkippedToken};
pub use ring::Ring;
