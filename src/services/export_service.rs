use std::collections::HashMap;

use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::db::{get_profile_from_request, set_current_profile};
use crate::export::{
    project_inventory, project_marketplace, to_csv, INVENTORY_COLUMNS, INVENTORY_FILENAME,
    MARKETPLACE_COLUMNS, MARKETPLACE_FILENAME,
};
use crate::models::{BoxModel, ItemModel, ItemPhotoModel, BOX_COLUMNS, ITEM_COLUMNS, PHOTO_COLUMNS};
use crate::proto::export::export_service_server::ExportService;
use crate::proto::export::{ExportReq, ExportRes};

pub struct ExportServiceImpl {
    pool: PgPool,
}

/// Rows grouped by the owning item, preserving the incoming sort.
fn group_photos(photos: Vec<ItemPhotoModel>) -> HashMap<String, Vec<ItemPhotoModel>> {
    let mut by_item: HashMap<String, Vec<ItemPhotoModel>> = HashMap::new();
    for photo in photos {
        by_item.entry(photo.item_id.clone()).or_default().push(photo);
    }
    by_item
}

impl ExportServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn setup_rls<T>(
        &self,
        request: &Request<T>,
    ) -> Result<(sqlx::pool::PoolConnection<sqlx::Postgres>, String), Status> {
        let profile_id = get_profile_from_request(request);
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| Status::internal(format!("Database connection error: {}", e)))?;
        set_current_profile(&mut conn, &profile_id)
            .await
            .map_err(|e| Status::internal(format!("Failed to set profile context: {}", e)))?;
        Ok((conn, profile_id))
    }

    async fn load_boxes(
        conn: &mut sqlx::PgConnection,
        profile_id: &str,
    ) -> Result<Vec<BoxModel>, Status> {
        let sql = format!(
            "SELECT {} FROM boxes WHERE owner_profile_id = $1::uuid ORDER BY created_at ASC",
            BOX_COLUMNS
        );
        sqlx::query_as(&sql)
            .bind(profile_id)
            .fetch_all(conn)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))
    }

    /// Photos for a set of items, sorted so each item's group comes out
    /// ascending by sort order.
    async fn load_photos(
        conn: &mut sqlx::PgConnection,
        item_ids: &[String],
    ) -> Result<Vec<ItemPhotoModel>, Status> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT {} FROM item_photos WHERE item_id = ANY($1::uuid[]) \
             ORDER BY item_id, sort_order ASC",
            PHOTO_COLUMNS
        );
        sqlx::query_as(&sql)
            .bind(item_ids)
            .fetch_all(conn)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))
    }
}

#[tonic::async_trait]
impl ExportService for ExportServiceImpl {
    async fn export_inventory(
        &self,
        request: Request<ExportReq>,
    ) -> Result<Response<ExportRes>, Status> {
        let (mut conn, profile_id) = self.setup_rls(&request).await?;

        let boxes = Self::load_boxes(&mut conn, &profile_id).await?;
        let box_ids: Vec<String> = boxes.iter().map(|b| b.id.clone()).collect();

        let items: Vec<ItemModel> = if box_ids.is_empty() {
            Vec::new()
        } else {
            let sql = format!(
                "SELECT {} FROM items WHERE box_id = ANY($1::uuid[]) ORDER BY created_at ASC",
                ITEM_COLUMNS
            );
            sqlx::query_as(&sql)
                .bind(&box_ids)
                .fetch_all(&mut *conn)
                .await
                .map_err(|e| Status::internal(format!("Database error: {}", e)))?
        };

        let item_ids: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        let photos_by_item = group_photos(Self::load_photos(&mut conn, &item_ids).await?);

        let mut items_by_box: HashMap<String, Vec<ItemModel>> = HashMap::new();
        for item in items {
            items_by_box.entry(item.box_id.clone()).or_default().push(item);
        }

        let rows = project_inventory(&boxes, &items_by_box, &photos_by_item);
        let content = to_csv(&INVENTORY_COLUMNS, &rows);

        tracing::info!("Inventory export: boxes={} rows={}", boxes.len(), rows.len());
        Ok(Response::new(ExportRes {
            filename: INVENTORY_FILENAME.to_string(),
            content,
        }))
    }

    async fn export_marketplace(
        &self,
        request: Request<ExportReq>,
    ) -> Result<Response<ExportRes>, Status> {
        let (mut conn, profile_id) = self.setup_rls(&request).await?;

        let boxes = Self::load_boxes(&mut conn, &profile_id).await?;
        let box_ids: Vec<String> = boxes.iter().map(|b| b.id.clone()).collect();

        let items: Vec<ItemModel> = if box_ids.is_empty() {
            Vec::new()
        } else {
            let sql = format!(
                "SELECT {} FROM items \
                 WHERE box_id = ANY($1::uuid[]) AND for_sale = TRUE \
                 ORDER BY created_at ASC",
                ITEM_COLUMNS
            );
            sqlx::query_as(&sql)
                .bind(&box_ids)
                .fetch_all(&mut *conn)
                .await
                .map_err(|e| Status::internal(format!("Database error: {}", e)))?
        };

        let item_ids: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        let photos_by_item = group_photos(Self::load_photos(&mut conn, &item_ids).await?);

        let boxes_by_id: HashMap<String, BoxModel> =
            boxes.into_iter().map(|b| (b.id.clone(), b)).collect();

        let rows = project_marketplace(&items, &boxes_by_id, &photos_by_item);
        let content = to_csv(&MARKETPLACE_COLUMNS, &rows);

        tracing::info!("Marketplace export: rows={}", rows.len());
        Ok(Response::new(ExportRes {
            filename: MARKETPLACE_FILENAME.to_string(),
            content,
        }))
    }
}
