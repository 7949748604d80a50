// Storage abstraction for S3-compatible and GCS backends

pub mod gcs;
pub mod s3;

pub use gcs::GcsBackend;
pub use s3::S3Backend;

use crate::error::AppResult;

/// Blob storage backend (Supabase Storage / Cloudflare R2 / GCS common
/// interface). Uploads are never rolled back; a photo row referencing an
/// object that later fails to persist is tolerated by readers.
#[tonic::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Uploads a file under the given key.
    async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> AppResult<()>;

    /// Deletes an object.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Public URL for a stored object.
    fn public_url(&self, key: &str) -> String;

    /// Bucket name.
    fn bucket(&self) -> &str;
}
