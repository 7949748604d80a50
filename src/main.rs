use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use boxed_inventory::config::{Config, StorageKind};
use boxed_inventory::db::create_pool;
use boxed_inventory::proto::boxes::boxes_service_server::BoxesServiceServer;
use boxed_inventory::proto::export::export_service_server::ExportServiceServer;
use boxed_inventory::proto::health::health_server::HealthServer;
use boxed_inventory::proto::item_photos::item_photos_service_server::ItemPhotosServiceServer;
use boxed_inventory::proto::items::items_service_server::ItemsServiceServer;
use boxed_inventory::services::{
    BoxesServiceImpl, ExportServiceImpl, HealthServiceImpl, ItemPhotosServiceImpl,
    ItemsServiceImpl,
};
use boxed_inventory::storage::{GcsBackend, S3Backend, StorageBackend};

use tonic::transport::Server;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Include file descriptor for gRPC reflection
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("boxed_descriptor");

async fn build_storage(config: &Config) -> Option<Arc<dyn StorageBackend>> {
    match config.storage_kind {
        StorageKind::S3 => {
            let (Some(bucket), Some(endpoint), Some(access_key), Some(secret_key)) = (
                config.storage_bucket.clone(),
                config.s3_endpoint.clone(),
                config.s3_access_key.clone(),
                config.s3_secret_key.clone(),
            ) else {
                tracing::error!("S3 storage selected but STORAGE_BUCKET/S3_* are incomplete");
                return None;
            };
            tracing::info!("S3 storage enabled: bucket={}", bucket);
            match S3Backend::new(
                bucket,
                endpoint,
                access_key,
                secret_key,
                config.storage_public_url.clone(),
            ) {
                Ok(backend) => Some(Arc::new(backend)),
                Err(e) => {
                    tracing::error!("Failed to create S3 backend: {}", e);
                    None
                }
            }
        }
        StorageKind::Gcs => {
            let Some(bucket) = config.storage_bucket.clone() else {
                tracing::error!("GCS storage selected but STORAGE_BUCKET is not set");
                return None;
            };
            tracing::info!("GCS storage enabled: bucket={}", bucket);
            match GcsBackend::new(bucket).await {
                Ok(backend) => Some(Arc::new(backend)),
                Err(e) => {
                    tracing::error!("Failed to create GCS backend: {}", e);
                    None
                }
            }
        }
        StorageKind::None => {
            tracing::info!("Object storage disabled, photo uploads are unavailable");
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boxed_inventory=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!("Starting boxed-inventory gRPC server...");
    tracing::info!("Connecting to database...");

    // Create database pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection established");

    let storage = build_storage(&config).await;

    // Create services
    let boxes_service = BoxesServiceImpl::new(pool.clone());
    let items_service = ItemsServiceImpl::new(pool.clone(), storage);
    let item_photos_service = ItemPhotosServiceImpl::new(pool.clone());
    let export_service = ExportServiceImpl::new(pool.clone());
    let health_service = HealthServiceImpl::new();

    // CORS layer for gRPC-Web
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
        .expose_headers(Any);

    // Build reflection service
    let reflection_service = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!("Listening on {}", addr);

    // Build and run server with gRPC-Web support
    Server::builder()
        .accept_http1(true) // Required for gRPC-Web
        .layer(cors)
        .layer(tonic_web::GrpcWebLayer::new()) // Enable gRPC-Web
        .add_service(reflection_service)
        .add_service(BoxesServiceServer::new(boxes_service))
        .add_service(ItemsServiceServer::new(items_service))
        .add_service(ItemPhotosServiceServer::new(item_photos_service))
        .add_service(ExportServiceServer::new(export_service))
        .add_service(HealthServer::new(health_service))
        .serve(addr)
        .await?;

    Ok(())
}
