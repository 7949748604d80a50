use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::db::{get_profile_from_request, set_current_profile};
use crate::error::AppError;
use crate::models::{BoxModel, BOX_COLUMNS, BOX_STATUSES};
use crate::proto::boxes::boxes_service_server::BoxesService;
use crate::proto::boxes::{
    Box as ProtoBox, CreateBoxReq, CreateBoxRes, GetBoxReq, GetBoxRes, ListBoxesReq, ListBoxesRes,
};

pub struct BoxesServiceImpl {
    pool: PgPool,
}

const DEFAULT_BOX_STATUS: &str = "unpacked";

impl BoxesServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn model_to_proto(model: &BoxModel) -> ProtoBox {
        ProtoBox {
            id: model.id.clone(),
            owner_profile_id: model.owner_profile_id.clone(),
            name: model.name.clone(),
            location: model.location.clone().unwrap_or_default(),
            status: model.status.clone(),
            photo_url: model.photo_url.clone().unwrap_or_default(),
            created_at: model.created_at.clone(),
            updated_at: model.updated_at.clone(),
        }
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
}

#[tonic::async_trait]
impl BoxesService for BoxesServiceImpl {
    async fn list_boxes(
        &self,
        request: Request<ListBoxesReq>,
    ) -> Result<Response<ListBoxesRes>, Status> {
        let (mut conn, profile_id) = self.setup_rls(&request).await?;

        let sql = format!(
            "SELECT {} FROM boxes WHERE owner_profile_id = $1::uuid ORDER BY created_at ASC",
            BOX_COLUMNS
        );
        let models: Vec<BoxModel> = sqlx::query_as(&sql)
            .bind(&profile_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        let boxes = models.iter().map(Self::model_to_proto).collect();
        Ok(Response::new(ListBoxesRes { boxes }))
    }

    async fn get_box(&self, request: Request<GetBoxReq>) -> Result<Response<GetBoxRes>, Status> {
        let (mut conn, _) = self.setup_rls(&request).await?;
        let req = request.into_inner();

        if req.id.is_empty() {
            return Err(Status::invalid_argument("id is required"));
        }

        let sql = format!("SELECT {} FROM boxes WHERE id = $1::uuid", BOX_COLUMNS);
        let model: Option<BoxModel> = sqlx::query_as(&sql)
            .bind(&req.id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        let model = model
            .ok_or_else(|| AppError::NotFound(format!("Box not found: {}", req.id)))
            .map_err(Status::from)?;
        Ok(Response::new(GetBoxRes {
            r#box: Some(Self::model_to_proto(&model)),
        }))
    }

    async fn create_box(
        &self,
        request: Request<CreateBoxReq>,
    ) -> Result<Response<CreateBoxRes>, Status> {
        let (mut conn, profile_id) = self.setup_rls(&request).await?;
        let req = request.into_inner();

        let name = req.name.trim();
        if name.is_empty() {
            return Err(Status::invalid_argument("name is required"));
        }

        let status = if req.status.is_empty() {
            DEFAULT_BOX_STATUS
        } else {
            req.status.as_str()
        };
        if !BOX_STATUSES.contains(&status) {
            return Err(Status::invalid_argument(format!(
                "status must be one of {:?}",
                BOX_STATUSES
            )));
        }

        let location = req.location.trim();
        let location = (!location.is_empty()).then(|| location.to_string());

        let sql = format!(
            "INSERT INTO boxes (owner_profile_id, name, location, status) \
             VALUES ($1::uuid, $2, $3, $4) RETURNING {}",
            BOX_COLUMNS
        );
        let model: BoxModel = sqlx::query_as(&sql)
            .bind(&profile_id)
            .bind(name)
            .bind(&location)
            .bind(status)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        tracing::info!("Created box: id={} name={}", model.id, model.name);
        Ok(Response::new(CreateBoxRes {
            r#box: Some(Self::model_to_proto(&model)),
        }))
    }
}
