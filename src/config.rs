use std::env;

#[derive(Clone, Debug, PartialEq)]
pub enum StorageKind {
    S3,
    Gcs,
    None,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub storage_kind: StorageKind,
    pub storage_bucket: Option<String>,
    /// Base URL public photo links are built from (S3-compatible backends).
    pub storage_public_url: Option<String>,
    pub s3_endpoint: Option<String>,
    pub s3_access_key: Option<String>,
    pub s3_secret_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        let storage_kind = match env::var("STORAGE_BACKEND").as_deref() {
            Ok("s3") => StorageKind::S3,
            Ok("gcs") => StorageKind::Gcs,
            _ => StorageKind::None,
        };

        Ok(Config {
            database_url: env::var("DATABASE_URL")?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "50051".to_string())
                .parse()
                .unwrap_or(50051),
            storage_kind,
            storage_bucket: env::var("STORAGE_BUCKET").ok(),
            storage_public_url: env::var("STORAGE_PUBLIC_URL").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            s3_access_key: env::var("S3_ACCESS_KEY").ok(),
            s3_secret_key: env::var("S3_SECRET_KEY").ok(),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
