//! Presigned S3 upload URL generator

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Command-line interface
pub mod cli;

/// Shared types
pub mod types;

/// Presigned upload URL generation
pub mod upload_storage;
