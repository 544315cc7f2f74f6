//! Command-line interface for the presigned URL generator

use clap::Parser;

/// Default validity window for generated URLs, in seconds
pub const DEFAULT_PRESIGNED_URL_EXPIRY_SECS: u64 = 3600;

/// Generates a presigned S3 PUT URL and prints it to standard output
///
/// Credentials are resolved through the AWS SDK's standard discovery chain
/// (environment variables, shared credential files, instance metadata).
#[derive(Debug, Parser)]
#[command(name = "presigner", version, about)]
pub struct Cli {
    /// S3 bucket that receives the upload
    pub bucket: String,

    /// Object key within the bucket
    pub key: String,

    /// Validity window of the generated URL, in seconds
    #[arg(
        long,
        env = "PRESIGNED_URL_EXPIRY_SECS",
        default_value_t = DEFAULT_PRESIGNED_URL_EXPIRY_SECS
    )]
    pub expires_in: u64,
}
