//! End-to-end upload flow against LocalStack
//!
//! Requires LocalStack running on localhost:4566 with the test bucket
//! created: `awslocal s3 mb s3://public-circuits`

mod common;

use presigner::upload_storage::UploadStorage;

#[tokio::test]
#[ignore = "requires LocalStack on localhost:4566"]
async fn test_e2e_put_through_presigned_url() {
    let storage = UploadStorage::new(
        common::test_s3_client(),
        "public-circuits".to_string(),
        3600,
    );

    let presigned = storage
        .generate_presigned_put_url("prover2")
        .await
        .expect("Failed to generate presigned URL");

    assert!(presigned.url.starts_with(common::TEST_ENDPOINT));

    let body = b"circuit artifact bytes".to_vec();
    let client = reqwest::Client::new();
    let response = client
        .put(&presigned.url)
        .header(reqwest::header::CONTENT_LENGTH, body.len())
        .body(body)
        .send()
        .await
        .expect("Failed to PUT through presigned URL");

    assert!(
        response.status().is_success(),
        "S3 upload failed with status: {}",
        response.status()
    );
}
