use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Box statuses accepted on creation.
pub const BOX_STATUSES: [&str; 3] = ["unpacked", "packed", "in_transit"];

/// Select/returning list shared by the box queries.
pub const BOX_COLUMNS: &str = "id::text, owner_profile_id::text, name, location, status, \
     photo_url, created_at::text, updated_at::text";

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BoxModel {
    pub id: String,
    pub owner_profile_id: String,
    pub name: String,
    pub location: Option<String>,
    pub status: String,
    pub photo_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
