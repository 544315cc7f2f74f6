//! Error types for presigned URL generation

use thiserror::Error;

/// Result type for upload storage operations
pub type BucketResult<T> = Result<T, BucketError>;

/// Errors that can occur while generating a presigned URL
#[derive(Error, Debug)]
pub enum BucketError {
    /// Ambient AWS credentials are missing or malformed
    #[error("Credentials error: {0}")]
    CredentialsError(String),

    /// Presigning configuration was rejected
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// S3 SDK error
    #[error("S3 service error: {0}")]
    S3Error(String),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
