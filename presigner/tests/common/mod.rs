// Not every util is used in every test, so we allow dead code
#![allow(dead_code)]

use std::sync::Arc;

use aws_credential_types::Credentials;
use aws_sdk_s3::{
    config::{BehaviorVersion, Region},
    Client as S3Client,
};

/// LocalStack-style endpoint used by the presigning tests
pub const TEST_ENDPOINT: &str = "http://localhost:4566";

/// Access key id embedded in the test credentials
pub const TEST_ACCESS_KEY_ID: &str = "test-access-key";

/// Builds an S3 client with static test credentials
///
/// Presigning is local computation, so tests using this client never reach
/// the endpoint.
pub fn test_s3_client() -> Arc<S3Client> {
    let credentials = Credentials::from_keys(TEST_ACCESS_KEY_ID, "test-secret-key", None);

    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .endpoint_url(TEST_ENDPOINT)
        .credentials_provider(credentials)
        .force_path_style(true)
        .build();

    Arc::new(S3Client::from_conf(config))
}

/// Builds an S3 client with no credentials provider configured
pub fn test_s3_client_without_credentials() -> Arc<S3Client> {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .endpoint_url(TEST_ENDPOINT)
        .force_path_style(true)
        .build();

    Arc::new(S3Client::from_conf(config))
}
