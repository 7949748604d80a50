use thiserror::Error;
use tonic::Status;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Database(e) => Status::internal(format!("Database error: {}", e)),
            AppError::NotFound(msg) => Status::not_found(msg),
            AppError::InvalidInput(msg) => Status::invalid_argument(msg),
            AppError::Upload(msg) => Status::internal(format!("Upload error: {}", msg)),
            AppError::Storage(msg) => Status::internal(format!("Storage error: {}", msg)),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn validation_and_lookup_errors_map_to_client_codes() {
        let status = Status::from(AppError::InvalidInput("name is required".to_string()));
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "name is required");

        let status = Status::from(AppError::NotFound("Item not found".to_string()));
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "Item not found");
    }

    #[test]
    fn infrastructure_errors_map_to_internal() {
        assert_eq!(
            Status::from(AppError::Upload("timeout".to_string())).code(),
            Code::Internal
        );
        assert_eq!(
            Status::from(AppError::Storage("bucket gone".to_string())).code(),
            Code::Internal
        );
        assert_eq!(
            Status::from(AppError::Database(sqlx::Error::RowNotFound)).code(),
            Code::Internal
        );
    }
}
