use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Select/returning list shared by the photo queries.
pub const PHOTO_COLUMNS: &str =
    "id::text, item_id::text, photo_url, sort_order, created_at::text";

/// One image link belonging to an item. Sort orders are zero-based within
/// the item; position 0 is the primary photo.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ItemPhotoModel {
    pub id: String,
    pub item_id: String,
    pub photo_url: String,
    pub sort_order: i32,
    pub created_at: String,
}

/// URL of the photo with the lowest sort order. Deletion can leave gaps, so
/// this picks the minimum rather than assuming order 0 exists.
pub fn primary_photo_url(photos: &[ItemPhotoModel]) -> Option<&str> {
    photos
        .iter()
        .min_by_key(|p| p.sort_order)
        .map(|p| p.photo_url.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str, url: &str, sort_order: i32) -> ItemPhotoModel {
        ItemPhotoModel {
            id: id.to_string(),
            item_id: "i1".to_string(),
            photo_url: url.to_string(),
            sort_order,
            created_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn primary_is_lowest_sort_order() {
        let photos = vec![
            photo("p2", "https://cdn/b.jpg", 1),
            photo("p1", "https://cdn/a.jpg", 0),
        ];
        assert_eq!(primary_photo_url(&photos), Some("https://cdn/a.jpg"));
    }

    #[test]
    fn primary_survives_gap_after_deletion() {
        // order 0 deleted, order 1 left behind without renumbering
        let photos = vec![photo("p2", "https://cdn/b.jpg", 1)];
        assert_eq!(primary_photo_url(&photos), Some("https://cdn/b.jpg"));
    }

    #[test]
    fn no_photos_no_primary() {
        assert_eq!(primary_photo_url(&[]), None);
    }

    #[test]
    fn cached_primary_goes_stale_after_deletion_until_recomputed() {
        let mut photos = vec![
            photo("p1", "https://cdn/a.jpg", 0),
            photo("p2", "https://cdn/b.jpg", 1),
        ];
        // the items table caches this value at reconciliation time
        let cached = primary_photo_url(&photos).map(str::to_string);
        assert_eq!(cached.as_deref(), Some("https://cdn/a.jpg"));

        // deleting the primary photo rewrites nothing on the item side
        photos.remove(0);
        assert_ne!(primary_photo_url(&photos), cached.as_deref());

        // the next reconciliation picks the new first element
        assert_eq!(primary_photo_url(&photos), Some("https://cdn/b.jpg"));
    }
}
