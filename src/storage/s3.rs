use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::Region;

use crate::error::{AppError, AppResult};

use super::StorageBackend;

pub struct S3Backend {
    bucket: Box<Bucket>,
    bucket_name: String,
    public_url_base: String,
}

impl S3Backend {
    pub fn new(
        bucket_name: String,
        endpoint: String,
        access_key: String,
        secret_key: String,
        public_url_base: Option<String>,
    ) -> AppResult<Self> {
        let region = Region::Custom {
            region: "auto".to_string(),
            endpoint: endpoint.clone(),
        };

        let credentials = Credentials::new(
            Some(&access_key),
            Some(&secret_key),
            None, // security token
            None, // session token
            None, // profile
        )
        .map_err(|e| AppError::Storage(format!("S3 credentials error: {}", e)))?;

        let bucket = Bucket::new(&bucket_name, region, credentials)
            .map_err(|e| AppError::Storage(format!("S3 bucket error: {}", e)))?;

        let public_url_base = public_url_base
            .unwrap_or_else(|| format!("{}/{}", endpoint.trim_end_matches('/'), bucket_name));

        Ok(Self {
            bucket,
            bucket_name,
            public_url_base,
        })
    }
}

#[tonic::async_trait]
impl StorageBackend for S3Backend {
    async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> AppResult<()> {
        self.bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(|e| AppError::Storage(format!("S3 upload failed: {}", e)))?;

        tracing::info!("S3 upload: bucket={}, key={}", self.bucket_name, key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.bucket
            .delete_object(key)
            .await
            .map_err(|e| AppError::Storage(format!("S3 delete failed: {}", e)))?;

        tracing::info!("S3 delete: bucket={}, key={}", self.bucket_name, key);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_url_base.trim_end_matches('/'), key)
    }

    fn bucket(&self) -> &str {
        &self.bucket_name
    }
}
