use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use std::sync::Arc;
use tonic::{Request, Response, Status};
use uuid::Uuid;

use crate::db::{get_profile_from_request, set_current_profile};
use crate::error::{AppError, AppResult};
use crate::models::{
    primary_photo_url, ItemModel, ItemPhotoModel, ItemTypeModel, ITEM_COLUMNS, PHOTO_COLUMNS,
    PRICE_TYPES, PRICE_TYPE_BIDDING, PRICE_TYPE_FIXED,
};
use crate::proto::items::items_service_server::ItemsService;
use crate::proto::items::{
    CreateItemReq, CreateItemRes, CreateItemTypeReq, CreateItemTypeRes, GetItemReq, GetItemRes,
    Item, ItemType, ListItemTypesReq, ListItemTypesRes, ListItemsReq, ListItemsRes,
    SearchItemsReq, SearchItemsRes, UpdateItemReq, UpdateItemRes, UploadItemPhotosReq,
    UploadItemPhotosRes,
};
use crate::storage::StorageBackend;

/// A collection may not grow past this many photos. Enforced here at the
/// item level; the photo service itself places no ceiling.
pub const MAX_PHOTOS_PER_ITEM: usize = 10;

pub struct ItemsServiceImpl {
    pool: PgPool,
    storage: Option<Arc<dyn StorageBackend>>,
}

/// Validated input for an item insert.
#[derive(Debug, Default, PartialEq)]
pub struct NewItem {
    pub box_id: String,
    pub name: String,
    pub quantity: i32,
    pub type_id: Option<i32>,
    pub value: Option<f64>,
    pub condition: Option<String>,
    pub for_sale: bool,
    pub ad_description: Option<String>,
    pub marktplaats_category: Option<String>,
    pub price_type: Option<String>,
    pub bid_from: Option<f64>,
    pub delivery_pickup: Option<bool>,
    pub delivery_shipping: Option<bool>,
}

/// Normalized partial update. Outer Option = field present in the request,
/// inner Option = value vs NULL.
#[derive(Debug, Default, PartialEq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub type_id: Option<Option<i32>>,
    pub value: Option<Option<f64>>,
    pub condition: Option<Option<String>>,
    pub last_used: Option<Option<String>>,
    pub for_sale: Option<bool>,
    pub ad_description: Option<Option<String>>,
    pub marktplaats_category: Option<Option<String>>,
    pub price_type: Option<Option<String>>,
    pub bid_from: Option<Option<f64>>,
    pub delivery_pickup: Option<Option<bool>>,
    pub delivery_shipping: Option<Option<bool>>,
}

impl ItemChanges {
    fn is_empty(&self) -> bool {
        *self == ItemChanges::default()
    }

    /// Clears every commerce field; applied when for_sale is switched off.
    fn clear_commerce(&mut self) {
        self.price_type = Some(None);
        self.bid_from = Some(None);
        self.marktplaats_category = Some(None);
        self.ad_description = Some(None);
        self.delivery_pickup = Some(None);
        self.delivery_shipping = Some(None);
    }
}

/// Parses caller-supplied decimal text. Empty or unparsable input is
/// "absent", not zero; negative amounts are rejected.
pub fn parse_money(input: &str) -> AppResult<Option<f64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v < 0.0 => Err(AppError::InvalidInput(
            "price must not be negative".to_string(),
        )),
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Ok(None),
    }
}

fn trimmed_opt(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn validate_price_type(input: &str) -> AppResult<String> {
    if PRICE_TYPES.contains(&input) {
        Ok(input.to_string())
    } else {
        Err(AppError::InvalidInput(format!(
            "price_type must be one of: {}",
            PRICE_TYPES.join(", ")
        )))
    }
}

/// Validates and coerces a create request. Commerce fields only survive
/// when the item is marked for sale; pickup then defaults to true and
/// shipping to false.
pub fn validate_new_item(req: &CreateItemReq) -> AppResult<NewItem> {
    if req.box_id.is_empty() {
        return Err(AppError::InvalidInput("box_id is required".to_string()));
    }
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput("name is required".to_string()));
    }
    if req.quantity < 0 {
        return Err(AppError::InvalidInput(
            "quantity must be positive".to_string(),
        ));
    }
    let quantity = if req.quantity == 0 { 1 } else { req.quantity };
    let type_id = if req.type_id == 0 {
        None
    } else {
        Some(req.type_id)
    };

    let mut item = NewItem {
        box_id: req.box_id.clone(),
        name: name.to_string(),
        quantity,
        type_id,
        value: parse_money(&req.value)?,
        condition: trimmed_opt(&req.condition),
        for_sale: req.for_sale,
        ..NewItem::default()
    };

    if req.for_sale {
        let price_type = if req.price_type.is_empty() {
            PRICE_TYPE_FIXED.to_string()
        } else {
            validate_price_type(&req.price_type)?
        };
        item.bid_from = if price_type == PRICE_TYPE_BIDDING {
            parse_money(&req.bid_from)?
        } else {
            None
        };
        item.price_type = Some(price_type);
        item.ad_description = trimmed_opt(&req.ad_description);
        item.marktplaats_category = trimmed_opt(&req.marktplaats_category);
        item.delivery_pickup = Some(req.delivery_pickup.unwrap_or(true));
        item.delivery_shipping = Some(req.delivery_shipping.unwrap_or(false));
    }

    Ok(item)
}

/// Normalizes a partial update. Fields absent from the request stay
/// untouched; for_sale=false wipes the whole commerce sub-state even when
/// the caller supplied values for it.
pub fn normalize_changes(req: &UpdateItemReq) -> AppResult<ItemChanges> {
    let mut changes = ItemChanges::default();

    if let Some(name) = &req.name {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput("name is required".to_string()));
        }
        changes.name = Some(name.to_string());
    }
    if let Some(quantity) = req.quantity {
        if quantity <= 0 {
            return Err(AppError::InvalidInput(
                "quantity must be positive".to_string(),
            ));
        }
        changes.quantity = Some(quantity);
    }
    if let Some(type_id) = req.type_id {
        if type_id < 0 {
            return Err(AppError::InvalidInput("invalid type_id".to_string()));
        }
        changes.type_id = Some(if type_id == 0 { None } else { Some(type_id) });
    }
    if let Some(value) = &req.value {
        changes.value = Some(parse_money(value)?);
    }
    if let Some(condition) = &req.condition {
        changes.condition = Some(trimmed_opt(condition));
    }
    if let Some(last_used) = &req.last_used {
        changes.last_used = Some(trimmed_opt(last_used));
    }
    if let Some(ad_description) = &req.ad_description {
        changes.ad_description = Some(trimmed_opt(ad_description));
    }
    if let Some(category) = &req.marktplaats_category {
        changes.marktplaats_category = Some(trimmed_opt(category));
    }
    if let Some(price_type) = &req.price_type {
        changes.price_type = Some(match trimmed_opt(price_type) {
            Some(pt) => Some(validate_price_type(&pt)?),
            None => None,
        });
    }
    if let Some(bid_from) = &req.bid_from {
        changes.bid_from = Some(parse_money(bid_from)?);
    }
    if let Some(pickup) = req.delivery_pickup {
        changes.delivery_pickup = Some(Some(pickup));
    }
    if let Some(shipping) = req.delivery_shipping {
        changes.delivery_shipping = Some(Some(shipping));
    }
    if let Some(for_sale) = req.for_sale {
        changes.for_sale = Some(for_sale);
    }

    // bid_from is only meaningful while bidding
    if let Some(price_type) = &changes.price_type {
        if price_type.as_deref() != Some(PRICE_TYPE_BIDDING) {
            changes.bid_from = Some(None);
        }
    }
    // switching for_sale off wipes the commerce sub-state
    if changes.for_sale == Some(false) {
        changes.clear_commerce();
    }

    Ok(changes)
}

/// Recomputes the denormalized primary photo cache from the photo
/// collection's first element. This is the only code path that writes
/// items.photo_url; photo deletion alone leaves the cache stale.
pub async fn reconcile_primary_photo(
    conn: &mut PgConnection,
    item_id: &str,
) -> AppResult<Option<String>> {
    let sql = format!(
        "SELECT {} FROM item_photos WHERE item_id = $1::uuid ORDER BY sort_order ASC",
        PHOTO_COLUMNS
    );
    let photos: Vec<ItemPhotoModel> = sqlx::query_as(&sql)
        .bind(item_id)
        .fetch_all(&mut *conn)
        .await?;

    let url = primary_photo_url(&photos).map(str::to_string);

    sqlx::query("UPDATE items SET photo_url = $1, updated_at = NOW() WHERE id = $2::uuid")
        .bind(&url)
        .bind(item_id)
        .execute(&mut *conn)
        .await?;

    Ok(url)
}

impl ItemsServiceImpl {
    pub fn new(pool: PgPool, storage: Option<Arc<dyn StorageBackend>>) -> Self {
        Self { pool, storage }
    }

    fn model_to_proto(model: &ItemModel) -> Item {
        Item {
            id: model.id.clone(),
            box_id: model.box_id.clone(),
            type_id: model.type_id.unwrap_or_default(),
            name: model.name.clone(),
            quantity: model.quantity,
            photo_url: model.photo_url.clone().unwrap_or_default(),
            last_used: model.last_used.clone().unwrap_or_default(),
            condition: model.condition.clone().unwrap_or_default(),
            value: model.value.map(|v| v.to_string()).unwrap_or_default(),
            for_sale: model.for_sale.unwrap_or_default(),
            ad_description: model.ad_description.clone().unwrap_or_default(),
            marktplaats_category: model.marktplaats_category.clone().unwrap_or_default(),
            price_type: model.price_type.clone().unwrap_or_default(),
            bid_from: model.bid_from.map(|v| v.to_string()).unwrap_or_default(),
            delivery_pickup: model.delivery_pickup.unwrap_or_default(),
            delivery_shipping: model.delivery_shipping.unwrap_or_default(),
            created_at: model.created_at.clone(),
            updated_at: model.updated_at.clone(),
        }
    }

    async fn setup_rls<T>(
        &self,
        request: &Request<T>,
    ) -> Result<sqlx::pool::PoolConnection<Postgres>, Status> {
        let profile_id = get_profile_from_request(request);
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| Status::internal(format!("Database connection error: {}", e)))?;
        set_current_profile(&mut conn, &profile_id)
            .await
            .map_err(|e| Status::internal(format!("Failed to set profile context: {}", e)))?;
        Ok(conn)
    }

    async fn fetch_item(conn: &mut PgConnection, id: &str) -> Result<ItemModel, Status> {
        let sql = format!("SELECT {} FROM items WHERE id = $1::uuid", ITEM_COLUMNS);
        let model: Option<ItemModel> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))?;
        model
            .ok_or_else(|| AppError::NotFound(format!("Item not found: {}", id)))
            .map_err(Status::from)
    }
}

#[tonic::async_trait]
impl ItemsService for ItemsServiceImpl {
    async fn create_item(
        &self,
        request: Request<CreateItemReq>,
    ) -> Result<Response<CreateItemRes>, Status> {
        let mut conn = self.setup_rls(&request).await?;
        let req = request.into_inner();

        let new_item = validate_new_item(&req).map_err(Status::from)?;

        let box_exists: Option<(String,)> =
            sqlx::query_as("SELECT id::text FROM boxes WHERE id = $1::uuid")
                .bind(&new_item.box_id)
                .fetch_optional(&mut *conn)
                .await
                .map_err(|e| Status::internal(format!("Database error: {}", e)))?;
        if box_exists.is_none() {
            return Err(AppError::NotFound(format!("Box not found: {}", new_item.box_id)).into());
        }

        let sql = format!(
            "INSERT INTO items (box_id, type_id, name, quantity, value, condition, for_sale, \
             ad_description, marktplaats_category, price_type, bid_from, \
             delivery_pickup, delivery_shipping) \
             VALUES ($1::uuid, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {}",
            ITEM_COLUMNS
        );
        let model: ItemModel = sqlx::query_as(&sql)
            .bind(&new_item.box_id)
            .bind(new_item.type_id)
            .bind(&new_item.name)
            .bind(new_item.quantity)
            .bind(new_item.value)
            .bind(&new_item.condition)
            .bind(new_item.for_sale)
            .bind(&new_item.ad_description)
            .bind(&new_item.marktplaats_category)
            .bind(&new_item.price_type)
            .bind(new_item.bid_from)
            .bind(new_item.delivery_pickup)
            .bind(new_item.delivery_shipping)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        tracing::info!("Created item: id={}, box_id={}", model.id, model.box_id);

        Ok(Response::new(CreateItemRes {
            item: Some(Self::model_to_proto(&model)),
        }))
    }

    async fn get_item(&self, request: Request<GetItemReq>) -> Result<Response<GetItemRes>, Status> {
        let mut conn = self.setup_rls(&request).await?;
        let req = request.into_inner();

        if req.id.is_empty() {
            return Err(Status::invalid_argument("id is required"));
        }

        let model = Self::fetch_item(&mut conn, &req.id).await?;

        Ok(Response::new(GetItemRes {
            item: Some(Self::model_to_proto(&model)),
        }))
    }

    async fn update_item(
        &self,
        request: Request<UpdateItemReq>,
    ) -> Result<Response<UpdateItemRes>, Status> {
        let mut conn = self.setup_rls(&request).await?;
        let req = request.into_inner();

        if req.id.is_empty() {
            return Err(Status::invalid_argument("id is required"));
        }

        let changes = normalize_changes(&req).map_err(Status::from)?;
        if changes.is_empty() {
            // nothing to write, return the current row
            let model = Self::fetch_item(&mut conn, &req.id).await?;
            return Ok(Response::new(UpdateItemRes {
                item: Some(Self::model_to_proto(&model)),
            }));
        }

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE items SET updated_at = NOW()");
        if let Some(name) = &changes.name {
            qb.push(", name = ").push_bind(name.clone());
        }
        if let Some(quantity) = changes.quantity {
            qb.push(", quantity = ").push_bind(quantity);
        }
        if let Some(type_id) = changes.type_id {
            qb.push(", type_id = ").push_bind(type_id);
        }
        if let Some(value) = changes.value {
            qb.push(", value = ").push_bind(value);
        }
        if let Some(condition) = &changes.condition {
            qb.push(", condition = ").push_bind(condition.clone());
        }
        if let Some(last_used) = &changes.last_used {
            qb.push(", last_used = ")
                .push_bind(last_used.clone())
                .push("::timestamptz");
        }
        if let Some(for_sale) = changes.for_sale {
            qb.push(", for_sale = ").push_bind(for_sale);
        }
        if let Some(ad_description) = &changes.ad_description {
            qb.push(", ad_description = ").push_bind(ad_description.clone());
        }
        if let Some(category) = &changes.marktplaats_category {
            qb.push(", marktplaats_category = ").push_bind(category.clone());
        }
        if let Some(price_type) = &changes.price_type {
            qb.push(", price_type = ").push_bind(price_type.clone());
        }
        if let Some(bid_from) = changes.bid_from {
            qb.push(", bid_from = ").push_bind(bid_from);
        }
        if let Some(pickup) = changes.delivery_pickup {
            qb.push(", delivery_pickup = ").push_bind(pickup);
        }
        if let Some(shipping) = changes.delivery_shipping {
            qb.push(", delivery_shipping = ").push_bind(shipping);
        }
        qb.push(" WHERE id = ").push_bind(req.id.clone()).push("::uuid");
        qb.push(" RETURNING ").push(ITEM_COLUMNS);

        let model: Option<ItemModel> = qb
            .build_query_as()
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        match model {
            Some(m) => Ok(Response::new(UpdateItemRes {
                item: Some(Self::model_to_proto(&m)),
            })),
            None => Err(AppError::NotFound(format!("Item not found: {}", req.id)).into()),
        }
    }

    async fn list_items(
        &self,
        request: Request<ListItemsReq>,
    ) -> Result<Response<ListItemsRes>, Status> {
        let mut conn = self.setup_rls(&request).await?;
        let req = request.into_inner();

        if req.box_id.is_empty() {
            return Err(Status::invalid_argument("box_id is required"));
        }

        let sql = format!(
            "SELECT {} FROM items WHERE box_id = $1::uuid ORDER BY created_at ASC",
            ITEM_COLUMNS
        );
        let models: Vec<ItemModel> = sqlx::query_as(&sql)
            .bind(&req.box_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        let items: Vec<Item> = models.iter().map(Self::model_to_proto).collect();
        Ok(Response::new(ListItemsRes { items }))
    }

    async fn search_items(
        &self,
        request: Request<SearchItemsReq>,
    ) -> Result<Response<SearchItemsRes>, Status> {
        let mut conn = self.setup_rls(&request).await?;
        let req = request.into_inner();

        // Build dynamic WHERE clause
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        let text = req.query.trim().to_string();
        let text_filter = if !text.is_empty() {
            conditions.push(format!("name ILIKE '%' || ${} || '%'", param_idx));
            param_idx += 1;
            Some(text)
        } else {
            None
        };

        let for_sale_filter = req.for_sale;
        if for_sale_filter.is_some() {
            conditions.push(format!("for_sale = ${}", param_idx));
            param_idx += 1;
        }

        if !req.box_ids.is_empty() {
            conditions.push(format!("box_id = ANY(${}::uuid[])", param_idx));
            // last param, no need to increment
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        // Ranking is the backend's; name order keeps responses stable.
        let sql = format!(
            "SELECT {} FROM items {} ORDER BY name ASC",
            ITEM_COLUMNS, where_clause
        );

        let mut query = sqlx::query_as::<_, ItemModel>(&sql);
        if let Some(ref text) = text_filter {
            query = query.bind(text);
        }
        if let Some(for_sale) = for_sale_filter {
            query = query.bind(for_sale);
        }
        if !req.box_ids.is_empty() {
            query = query.bind(&req.box_ids);
        }

        let models: Vec<ItemModel> = query
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        let items: Vec<Item> = models.iter().map(Self::model_to_proto).collect();
        Ok(Response::new(SearchItemsRes {
            items,
            // echoed verbatim; the client keeps only the highest seq it sent
            seq: req.seq,
        }))
    }

    async fn upload_item_photos(
        &self,
        request: Request<UploadItemPhotosReq>,
    ) -> Result<Response<UploadItemPhotosRes>, Status> {
        let mut conn = self.setup_rls(&request).await?;
        let req = request.into_inner();

        if req.item_id.is_empty() {
            return Err(Status::invalid_argument("item_id is required"));
        }

        let item = Self::fetch_item(&mut conn, &req.item_id).await?;

        let (existing,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM item_photos WHERE item_id = $1::uuid")
                .bind(&item.id)
                .fetch_one(&mut *conn)
                .await
                .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        if existing as usize + req.files.len() > MAX_PHOTOS_PER_ITEM {
            return Err(Status::invalid_argument(format!(
                "an item can have at most {} photos",
                MAX_PHOTOS_PER_ITEM
            )));
        }

        let Some(storage) = &self.storage else {
            return Err(Status::failed_precondition("Blob storage not configured"));
        };

        let timestamp = chrono::Utc::now().timestamp_millis();
        let mut photo_urls = Vec::with_capacity(req.files.len());

        // Uploads run one at a time, in caller order. The first failure
        // aborts the rest; rows already written stay behind (no rollback).
        for (i, file) in req.files.iter().enumerate() {
            let ext = file.filename.rsplit('.').next().unwrap_or("bin");
            let key = format!(
                "{}/{}_{}_{}.{}",
                item.box_id,
                item.id,
                timestamp,
                Uuid::new_v4(),
                ext
            );
            let content_type = if file.content_type.is_empty() {
                "application/octet-stream"
            } else {
                &file.content_type
            };

            storage
                .upload(&key, &file.content, content_type)
                .await
                .map_err(|e| {
                    tracing::error!(
                        "Photo upload aborted: item_id={}, position={}, error={}",
                        item.id,
                        i,
                        e
                    );
                    Status::from(AppError::Upload(e.to_string()))
                })?;

            let url = storage.public_url(&key);
            sqlx::query(
                "INSERT INTO item_photos (item_id, photo_url, sort_order) \
                 VALUES ($1::uuid, $2, $3)",
            )
            .bind(&item.id)
            .bind(&url)
            .bind(existing as i32 + i as i32)
            .execute(&mut *conn)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

            photo_urls.push(url);
        }

        let primary_photo_url = if photo_urls.is_empty() {
            item.photo_url.unwrap_or_default()
        } else {
            reconcile_primary_photo(&mut conn, &item.id)
                .await
                .map_err(Status::from)?
                .unwrap_or_default()
        };

        tracing::info!(
            "Uploaded {} photos: item_id={}, primary={}",
            photo_urls.len(),
            item.id,
            primary_photo_url
        );

        Ok(Response::new(UploadItemPhotosRes {
            photo_urls,
            primary_photo_url,
        }))
    }

    async fn list_item_types(
        &self,
        request: Request<ListItemTypesReq>,
    ) -> Result<Response<ListItemTypesRes>, Status> {
        let mut conn = self.setup_rls(&request).await?;

        let models: Vec<ItemTypeModel> =
            sqlx::query_as("SELECT id, name FROM item_types ORDER BY name ASC")
                .fetch_all(&mut *conn)
                .await
                .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        let item_types = models
            .iter()
            .map(|t| ItemType {
                id: t.id,
                name: t.name.clone(),
            })
            .collect();
        Ok(Response::new(ListItemTypesRes { item_types }))
    }

    async fn create_item_type(
        &self,
        request: Request<CreateItemTypeReq>,
    ) -> Result<Response<CreateItemTypeRes>, Status> {
        let mut conn = self.setup_rls(&request).await?;
        let req = request.into_inner();

        let name = req.name.trim();
        if name.is_empty() {
            return Err(Status::invalid_argument("name is required"));
        }

        let model: ItemTypeModel =
            sqlx::query_as("INSERT INTO item_types (name) VALUES ($1) RETURNING id, name")
                .bind(name)
                .fetch_one(&mut *conn)
                .await
                .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        Ok(Response::new(CreateItemTypeRes {
            item_type: Some(ItemType {
                id: model.id,
                name: model.name,
            }),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_req(name: &str) -> CreateItemReq {
        CreateItemReq {
            box_id: "b1".to_string(),
            name: name.to_string(),
            ..CreateItemReq::default()
        }
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = validate_new_item(&create_req("  ")).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn create_defaults_quantity_to_one() {
        let item = validate_new_item(&create_req("Lamp")).unwrap();
        assert_eq!(item.name, "Lamp");
        assert_eq!(item.quantity, 1);
        assert!(!item.for_sale);
        assert_eq!(item.price_type, None);
    }

    #[test]
    fn create_rejects_negative_quantity() {
        let mut req = create_req("Lamp");
        req.quantity = -2;
        assert!(matches!(
            validate_new_item(&req),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn create_trims_name_and_condition() {
        let mut req = create_req("  Lamp  ");
        req.condition = "  as new ".to_string();
        let item = validate_new_item(&req).unwrap();
        assert_eq!(item.name, "Lamp");
        assert_eq!(item.condition.as_deref(), Some("as new"));
    }

    #[test]
    fn create_for_sale_defaults_pickup_over_shipping() {
        let mut req = create_req("Lamp");
        req.for_sale = true;
        let item = validate_new_item(&req).unwrap();
        assert_eq!(item.price_type.as_deref(), Some("fixed"));
        assert_eq!(item.delivery_pickup, Some(true));
        assert_eq!(item.delivery_shipping, Some(false));
    }

    #[test]
    fn create_not_for_sale_drops_commerce_fields() {
        let mut req = create_req("Lamp");
        req.for_sale = false;
        req.price_type = "bidding".to_string();
        req.bid_from = "10".to_string();
        req.marktplaats_category = "Antiek".to_string();
        req.delivery_pickup = Some(true);
        let item = validate_new_item(&req).unwrap();
        assert_eq!(item.price_type, None);
        assert_eq!(item.bid_from, None);
        assert_eq!(item.marktplaats_category, None);
        assert_eq!(item.delivery_pickup, None);
        assert_eq!(item.delivery_shipping, None);
    }

    #[test]
    fn create_bid_from_only_kept_for_bidding() {
        let mut req = create_req("Lamp");
        req.for_sale = true;
        req.price_type = "fixed".to_string();
        req.bid_from = "10".to_string();
        let item = validate_new_item(&req).unwrap();
        assert_eq!(item.bid_from, None);

        req.price_type = "bidding".to_string();
        let item = validate_new_item(&req).unwrap();
        assert_eq!(item.bid_from, Some(10.0));
    }

    #[test]
    fn create_rejects_unknown_price_type() {
        let mut req = create_req("Lamp");
        req.for_sale = true;
        req.price_type = "auction".to_string();
        assert!(matches!(
            validate_new_item(&req),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn money_parsing_normalizes_to_absent() {
        assert_eq!(parse_money("").unwrap(), None);
        assert_eq!(parse_money("  ").unwrap(), None);
        assert_eq!(parse_money("abc").unwrap(), None);
        assert_eq!(parse_money("12.50").unwrap(), Some(12.5));
        assert!(matches!(
            parse_money("-3"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn update_absent_fields_stay_untouched() {
        let req = UpdateItemReq {
            id: "i1".to_string(),
            ..UpdateItemReq::default()
        };
        let changes = normalize_changes(&req).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn update_blank_name_rejected() {
        let req = UpdateItemReq {
            id: "i1".to_string(),
            name: Some("   ".to_string()),
            ..UpdateItemReq::default()
        };
        assert!(matches!(
            normalize_changes(&req),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn update_unparsable_value_clears_instead_of_zeroing() {
        let req = UpdateItemReq {
            id: "i1".to_string(),
            value: Some("not a number".to_string()),
            ..UpdateItemReq::default()
        };
        let changes = normalize_changes(&req).unwrap();
        assert_eq!(changes.value, Some(None));
    }

    #[test]
    fn update_for_sale_false_wipes_commerce_even_if_supplied() {
        let req = UpdateItemReq {
            id: "i1".to_string(),
            for_sale: Some(false),
            price_type: Some("bidding".to_string()),
            bid_from: Some("12".to_string()),
            marktplaats_category: Some("Antiek".to_string()),
            ad_description: Some("nice lamp".to_string()),
            delivery_pickup: Some(true),
            delivery_shipping: Some(true),
            ..UpdateItemReq::default()
        };
        let changes = normalize_changes(&req).unwrap();
        assert_eq!(changes.for_sale, Some(false));
        assert_eq!(changes.price_type, Some(None));
        assert_eq!(changes.bid_from, Some(None));
        assert_eq!(changes.marktplaats_category, Some(None));
        assert_eq!(changes.ad_description, Some(None));
        assert_eq!(changes.delivery_pickup, Some(None));
        assert_eq!(changes.delivery_shipping, Some(None));
    }

    #[test]
    fn update_bid_from_dropped_when_price_type_not_bidding() {
        let req = UpdateItemReq {
            id: "i1".to_string(),
            for_sale: Some(true),
            price_type: Some("fixed".to_string()),
            bid_from: Some("12".to_string()),
            ..UpdateItemReq::default()
        };
        let changes = normalize_changes(&req).unwrap();
        assert_eq!(changes.bid_from, Some(None));

        let req = UpdateItemReq {
            id: "i1".to_string(),
            for_sale: Some(true),
            price_type: Some("bidding".to_string()),
            bid_from: Some("12".to_string()),
            ..UpdateItemReq::default()
        };
        let changes = normalize_changes(&req).unwrap();
        assert_eq!(changes.bid_from, Some(Some(12.0)));
    }

    #[test]
    fn update_empty_strings_clear_nullable_fields() {
        let req = UpdateItemReq {
            id: "i1".to_string(),
            condition: Some("".to_string()),
            value: Some("".to_string()),
            ..UpdateItemReq::default()
        };
        let changes = normalize_changes(&req).unwrap();
        assert_eq!(changes.condition, Some(None));
        assert_eq!(changes.value, Some(None));
    }
}
