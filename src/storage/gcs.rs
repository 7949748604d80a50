use google_cloud_storage::{
    client::{Client, ClientConfig},
    http::objects::{
        delete::DeleteObjectRequest,
        upload::{Media, UploadObjectRequest, UploadType},
    },
};

use crate::error::{AppError, AppResult};

use super::StorageBackend;

pub struct GcsBackend {
    client: Client,
    bucket: String,
}

impl GcsBackend {
    pub async fn new(bucket: String) -> AppResult<Self> {
        let config = ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| AppError::Storage(format!("GCS auth failed: {}", e)))?;
        let client = Client::new(config);
        Ok(Self { client, bucket })
    }
}

#[tonic::async_trait]
impl StorageBackend for GcsBackend {
    async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> AppResult<()> {
        let mut media = Media::new(key.to_string());
        media.content_type = std::borrow::Cow::Owned(content_type.to_string());
        let upload_type = UploadType::Simple(media);

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: self.bucket.clone(),
                    ..Default::default()
                },
                data.to_vec(),
                &upload_type,
            )
            .await
            .map_err(|e| AppError::Storage(format!("GCS upload failed: {}", e)))?;

        tracing::info!("GCS upload: bucket={}, key={}", self.bucket, key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object(&DeleteObjectRequest {
                bucket: self.bucket.clone(),
                object: key.to_string(),
                ..Default::default()
            })
            .await
            .map_err(|e| AppError::Storage(format!("GCS delete failed: {}", e)))?;

        tracing::info!("GCS delete: bucket={}, key={}", self.bucket, key);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://storage.googleapis.com/{}/{}", self.bucket, key)
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
