use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Accepted price type tokens for items marked for sale.
pub const PRICE_TYPES: [&str; 4] = ["fixed", "bidding", "see_description", "free"];

pub const PRICE_TYPE_FIXED: &str = "fixed";
pub const PRICE_TYPE_BIDDING: &str = "bidding";

/// Select/returning list shared by the item queries.
pub const ITEM_COLUMNS: &str = "id::text, box_id::text, type_id, name, quantity, photo_url, \
     last_used::text, condition, value, for_sale, ad_description, marktplaats_category, \
     price_type, bid_from, delivery_pickup, delivery_shipping, \
     created_at::text, updated_at::text";

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ItemModel {
    pub id: String,
    pub box_id: String,
    pub type_id: Option<i32>,
    pub name: String,
    pub quantity: i32,
    /// Denormalized copy of the sort-order-0 photo URL. Best effort: only
    /// reconciliation rewrites it, so it can lag behind the photo set.
    pub photo_url: Option<String>,
    pub last_used: Option<String>,
    pub condition: Option<String>,
    pub value: Option<f64>,
    pub for_sale: Option<bool>,
    pub ad_description: Option<String>,
    pub marktplaats_category: Option<String>,
    pub price_type: Option<String>,
    pub bid_from: Option<f64>,
    pub delivery_pickup: Option<bool>,
    pub delivery_shipping: Option<bool>,
    pub created_at: String,
    pub updated_at: String,
}
