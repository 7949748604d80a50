pub mod boxes_service;
pub mod export_service;
pub mod health_service;
pub mod item_photos_service;
pub mod items_service;

pub use boxes_service::BoxesServiceImpl;
pub use export_service::ExportServiceImpl;
pub use health_service::HealthServiceImpl;
pub use item_photos_service::ItemPhotosServiceImpl;
pub use items_service::ItemsServiceImpl;
