use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use presigner::{cli::Cli, types::Environment, upload_storage::UploadStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let environment = Environment::from_env();

    // Configure logging format based on environment
    // Use JSON format for staging/production, regular format for development.
    // Diagnostics go to stderr; stdout carries only the generated URL.
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(std::io::stderr)
                .init();
        }
        Environment::Development => {
            fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(std::io::stderr)
                .init();
        }
    }

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let upload_storage = UploadStorage::new(s3_client, cli.bucket, cli.expires_in);

    let presigned = upload_storage.generate_presigned_put_url(&cli.key).await?;
    info!(
        "Presigned PUT URL expires at: {}",
        presigned.expires_at.to_rfc3339()
    );

    println!("{}", presigned.url);

    Ok(())
}
