//! S3-based presigned upload URL generation
mod error;

use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::{error::SdkError, presigning::PresigningConfig, Client as S3Client};
use chrono::{DateTime, Utc};
use tracing::debug;

pub use error::{BucketError, BucketResult};

/// Presigned URL with expiration information
#[derive(Debug, Clone)]
pub struct PresignedUrl {
    /// The presigned URL for PUT operations
    pub url: String,
    /// UTC timestamp when the URL expires
    pub expires_at: DateTime<Utc>,
}

/// Upload URL generator for a single S3 bucket
pub struct UploadStorage {
    s3_client: Arc<S3Client>,
    bucket_name: String,
    presigned_url_expiry_secs: u64,
}

impl UploadStorage {
    /// Creates a new upload storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - S3 bucket that receives the upload
    /// * `presigned_url_expiry_secs` - Expiry time for presigned URLs in seconds
    #[must_use]
    pub const fn new(
        s3_client: Arc<S3Client>,
        bucket_name: String,
        presigned_url_expiry_secs: u64,
    ) -> Self {
        Self {
            s3_client,
            bucket_name,
            presigned_url_expiry_secs,
        }
    }

    /// Generates a presigned URL authorizing a single HTTP PUT of `object_key`
    ///
    /// Signing is local computation over the client's resolved credentials;
    /// no request is dispatched to S3. The bucket's existence is not checked.
    ///
    /// # Arguments
    ///
    /// * `object_key` - Key of the object within the bucket
    ///
    /// # Returns
    ///
    /// A `PresignedUrl` struct containing the URL and expiration time
    ///
    /// # Errors
    ///
    /// Returns `BucketError::InvalidInput` for an empty bucket name, an empty
    /// object key, or a zero expiry
    /// Returns `BucketError::ConfigError` if presigning config creation fails
    /// (the signature algorithm caps the expiry at one week)
    /// Returns `BucketError::CredentialsError` if credential resolution fails
    /// Returns `BucketError::S3Error` for any other SDK failure
    pub async fn generate_presigned_put_url(&self, object_key: &str) -> BucketResult<PresignedUrl> {
        if self.bucket_name.is_empty() {
            return Err(BucketError::InvalidInput(
                "bucket name must not be empty".to_string(),
            ));
        }
        if object_key.is_empty() {
            return Err(BucketError::InvalidInput(
                "object key must not be empty".to_string(),
            ));
        }
        if self.presigned_url_expiry_secs == 0 {
            return Err(BucketError::InvalidInput(
                "expiry must be a positive number of seconds".to_string(),
            ));
        }

        debug!(
            "Generating presigned PUT URL for object: {} in bucket: {}",
            object_key, self.bucket_name
        );

        let presigned_config =
            PresigningConfig::expires_in(Duration::from_secs(self.presigned_url_expiry_secs))
                .map_err(|e| {
                    BucketError::ConfigError(format!("Failed to create presigning config: {e}"))
                })?;

        let presigned_url = self
            .s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(object_key)
            .presigned(presigned_config)
            .await
            .map_err(|e| match &e {
                // Presigning never dispatches a request, so a construction
                // failure means identity resolution did not produce usable
                // credentials.
                SdkError::ConstructionFailure(_) => BucketError::CredentialsError(format!(
                    "Failed to resolve AWS credentials: {e:?}"
                )),
                _ => BucketError::S3Error(format!("Failed to generate presigned URL: {e}")),
            })?;

        let expires_at: DateTime<Utc> =
            Utc::now() + Duration::from_secs(self.presigned_url_expiry_secs);

        debug!(
            "Generated presigned URL for object: {} expires at: {}",
            object_key, expires_at
        );

        Ok(PresignedUrl {
            url: presigned_url.uri().to_string(),
            expires_at,
        })
    }
}
