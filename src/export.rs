//! Flattened tabular projections of the box/item/photo data and the CSV
//! encoding used for downloads. Output is byte-stable for a given input
//! order; callers pre-sort boxes and items before projecting.

use std::collections::HashMap;

use crate::models::{BoxModel, ItemModel, ItemPhotoModel, PRICE_TYPE_FIXED};

/// Column order of the generic inventory export.
pub const INVENTORY_COLUMNS: [&str; 18] = [
    "box_id",
    "box_name",
    "box_location",
    "box_status",
    "item_id",
    "item_name",
    "item_quantity",
    "item_value",
    "item_condition",
    "item_for_sale",
    "item_ad_description",
    "item_marktplaats_category",
    "item_price_type",
    "item_bid_from",
    "item_delivery_pickup",
    "item_delivery_shipping",
    "item_photo_url",
    "item_photo_urls",
];

/// Column order of the Marktplaats listing export.
pub const MARKETPLACE_COLUMNS: [&str; 11] = [
    "title",
    "description",
    "price_type",
    "price",
    "bid_from",
    "condition",
    "category",
    "delivery_pickup",
    "delivery_shipping",
    "photo_urls",
    "box_name",
];

pub const INVENTORY_FILENAME: &str = "boxed_export.csv";
pub const MARKETPLACE_FILENAME: &str = "marktplaats_export.csv";

const PHOTO_URL_SEPARATOR: &str = "; ";

fn fmt_decimal(v: f64) -> String {
    // 12.0 renders as "12", 12.5 as "12.5"
    format!("{}", v)
}

fn opt_decimal(v: Option<f64>) -> String {
    v.map(fmt_decimal).unwrap_or_default()
}

fn opt_str(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

fn bool_or_false(v: Option<bool>) -> String {
    v.unwrap_or(false).to_string()
}

/// All photo URLs of an item joined in sort order, falling back to the
/// legacy single photo_url field when the item has no photo rows.
fn joined_photo_urls(
    item: &ItemModel,
    photos_by_item: &HashMap<String, Vec<ItemPhotoModel>>,
) -> String {
    match photos_by_item.get(&item.id) {
        Some(photos) if !photos.is_empty() => photos
            .iter()
            .map(|p| p.photo_url.as_str())
            .collect::<Vec<_>>()
            .join(PHOTO_URL_SEPARATOR),
        _ => item.photo_url.clone().unwrap_or_default(),
    }
}

/// One row per item; a box without items still emits exactly one row with
/// all item fields empty so every box appears in the export.
pub fn project_inventory(
    boxes: &[BoxModel],
    items_by_box: &HashMap<String, Vec<ItemModel>>,
    photos_by_item: &HashMap<String, Vec<ItemPhotoModel>>,
) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for bx in boxes {
        let items = items_by_box.get(&bx.id).map(Vec::as_slice).unwrap_or(&[]);

        if items.is_empty() {
            let mut row = vec![
                bx.id.clone(),
                bx.name.clone(),
                opt_str(&bx.location),
                bx.status.clone(),
            ];
            row.extend(std::iter::repeat(String::new()).take(INVENTORY_COLUMNS.len() - 4));
            rows.push(row);
            continue;
        }

        for it in items {
            rows.push(vec![
                bx.id.clone(),
                bx.name.clone(),
                opt_str(&bx.location),
                bx.status.clone(),
                it.id.clone(),
                it.name.clone(),
                it.quantity.to_string(),
                opt_decimal(it.value),
                opt_str(&it.condition),
                bool_or_false(it.for_sale),
                opt_str(&it.ad_description),
                opt_str(&it.marktplaats_category),
                opt_str(&it.price_type),
                opt_decimal(it.bid_from),
                bool_or_false(it.delivery_pickup),
                bool_or_false(it.delivery_shipping),
                opt_str(&it.photo_url),
                joined_photo_urls(it, photos_by_item),
            ]);
        }
    }

    rows
}

/// One row per for-sale item; everything else is excluded from this
/// projection. Price type defaults to "fixed" when unset.
pub fn project_marketplace(
    items: &[ItemModel],
    boxes_by_id: &HashMap<String, BoxModel>,
    photos_by_item: &HashMap<String, Vec<ItemPhotoModel>>,
) -> Vec<Vec<String>> {
    items
        .iter()
        .filter(|it| it.for_sale.unwrap_or(false))
        .map(|it| {
            vec![
                it.name.clone(),
                opt_str(&it.ad_description),
                it.price_type
                    .clone()
                    .unwrap_or_else(|| PRICE_TYPE_FIXED.to_string()),
                opt_decimal(it.value),
                opt_decimal(it.bid_from),
                opt_str(&it.condition),
                opt_str(&it.marktplaats_category),
                bool_or_false(it.delivery_pickup),
                bool_or_false(it.delivery_shipping),
                joined_photo_urls(it, photos_by_item),
                boxes_by_id
                    .get(&it.box_id)
                    .map(|b| b.name.clone())
                    .unwrap_or_default(),
            ]
        })
        .collect()
}

fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Header line followed by one line per row, newline-joined. Every data
/// field is double-quoted unconditionally, with embedded quotes doubled.
pub fn to_csv(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(columns.join(","));
    for row in rows {
        lines.push(
            row.iter()
                .map(|field| quote_field(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_box(id: &str, name: &str) -> BoxModel {
        BoxModel {
            id: id.to_string(),
            owner_profile_id: "p1".to_string(),
            name: name.to_string(),
            location: Some("attic".to_string()),
            status: "packed".to_string(),
            photo_url: None,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    fn test_item(id: &str, box_id: &str, name: &str) -> ItemModel {
        ItemModel {
            id: id.to_string(),
            box_id: box_id.to_string(),
            type_id: None,
            name: name.to_string(),
            quantity: 1,
            photo_url: None,
            last_used: None,
            condition: None,
            value: None,
            for_sale: None,
            ad_description: None,
            marktplaats_category: None,
            price_type: None,
            bid_from: None,
            delivery_pickup: None,
            delivery_shipping: None,
            created_at: "2026-01-02T00:00:00Z".to_string(),
            updated_at: "2026-01-02T00:00:00Z".to_string(),
        }
    }

    fn test_photo(id: &str, item_id: &str, url: &str, sort_order: i32) -> ItemPhotoModel {
        ItemPhotoModel {
            id: id.to_string(),
            item_id: item_id.to_string(),
            photo_url: url.to_string(),
            sort_order,
            created_at: "2026-01-03T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn quote_doubling() {
        assert_eq!(quote_field("He said \"hi\""), "\"He said \"\"hi\"\"\"");
        assert_eq!(quote_field(""), "\"\"");
        assert_eq!(quote_field("plain"), "\"plain\"");
    }

    #[test]
    fn csv_quotes_every_field_including_numbers_and_bools() {
        let rows = vec![vec!["1".to_string(), "true".to_string()]];
        let csv = to_csv(&["a", "b"], &rows);
        assert_eq!(csv, "a,b\n\"1\",\"true\"");
    }

    #[test]
    fn decimal_rendering_drops_trailing_zero() {
        assert_eq!(fmt_decimal(12.0), "12");
        assert_eq!(fmt_decimal(12.5), "12.5");
        assert_eq!(opt_decimal(None), "");
    }

    #[test]
    fn empty_box_emits_single_row_with_empty_item_fields() {
        let boxes = vec![test_box("b1", "Kitchen")];
        let rows = project_inventory(&boxes, &HashMap::new(), &HashMap::new());

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.len(), INVENTORY_COLUMNS.len());
        assert_eq!(row[0], "b1");
        assert_eq!(row[1], "Kitchen");
        assert_eq!(row[2], "attic");
        assert_eq!(row[3], "packed");
        // item_id and every item field after it are empty
        assert!(row[4..].iter().all(|f| f.is_empty()));
    }

    #[test]
    fn inventory_row_per_item_with_defaults() {
        let boxes = vec![test_box("b1", "Kitchen")];
        let mut item = test_item("i1", "b1", "Lamp");
        item.value = Some(12.5);
        let mut items_by_box = HashMap::new();
        items_by_box.insert("b1".to_string(), vec![item, test_item("i2", "b1", "Mug")]);

        let rows = project_inventory(&boxes, &items_by_box, &HashMap::new());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][4], "i1");
        assert_eq!(rows[0][5], "Lamp");
        assert_eq!(rows[0][6], "1");
        assert_eq!(rows[0][7], "12.5");
        // unset flags render as false, unset price type as empty
        assert_eq!(rows[0][9], "false");
        assert_eq!(rows[0][12], "");
        assert_eq!(rows[1][4], "i2");
    }

    #[test]
    fn photo_urls_joined_in_sort_order_with_legacy_fallback() {
        let boxes = vec![test_box("b1", "Kitchen")];
        let mut with_photos = test_item("i1", "b1", "Lamp");
        with_photos.photo_url = Some("https://cdn/one.jpg".to_string());
        let mut legacy_only = test_item("i2", "b1", "Mug");
        legacy_only.photo_url = Some("https://cdn/legacy.jpg".to_string());

        let mut items_by_box = HashMap::new();
        items_by_box.insert("b1".to_string(), vec![with_photos, legacy_only]);

        let mut photos_by_item = HashMap::new();
        photos_by_item.insert(
            "i1".to_string(),
            vec![
                test_photo("p1", "i1", "https://cdn/one.jpg", 0),
                test_photo("p2", "i1", "https://cdn/two.jpg", 1),
            ],
        );

        let rows = project_inventory(&boxes, &items_by_box, &photos_by_item);
        assert_eq!(rows[0][17], "https://cdn/one.jpg; https://cdn/two.jpg");
        assert_eq!(rows[1][17], "https://cdn/legacy.jpg");
    }

    #[test]
    fn marketplace_excludes_items_not_for_sale() {
        let mut for_sale = test_item("i1", "b1", "Lamp");
        for_sale.for_sale = Some(true);
        let not_for_sale = test_item("i2", "b1", "Mug");
        let mut explicit_false = test_item("i3", "b1", "Chair");
        explicit_false.for_sale = Some(false);

        let items = vec![for_sale, not_for_sale, explicit_false];
        let rows = project_marketplace(&items, &HashMap::new(), &HashMap::new());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "Lamp");
    }

    #[test]
    fn item_excluded_from_marketplace_still_appears_in_inventory() {
        let boxes = vec![test_box("b1", "Kitchen")];
        let item = test_item("i1", "b1", "Mug");
        let mut items_by_box = HashMap::new();
        items_by_box.insert("b1".to_string(), vec![item.clone()]);

        let inventory = project_inventory(&boxes, &items_by_box, &HashMap::new());
        let marketplace = project_marketplace(&[item], &HashMap::new(), &HashMap::new());

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory[0][4], "i1");
        assert!(marketplace.is_empty());
    }

    #[test]
    fn marketplace_price_type_defaults_to_fixed() {
        let mut item = test_item("i1", "b1", "Lamp");
        item.for_sale = Some(true);
        item.value = Some(30.0);
        let mut boxes_by_id = HashMap::new();
        boxes_by_id.insert("b1".to_string(), test_box("b1", "Kitchen"));

        let rows = project_marketplace(&[item], &boxes_by_id, &HashMap::new());
        assert_eq!(rows[0].len(), MARKETPLACE_COLUMNS.len());
        assert_eq!(rows[0][2], "fixed");
        assert_eq!(rows[0][3], "30");
        assert_eq!(rows[0][10], "Kitchen");
    }

    #[test]
    fn marketplace_bidding_fields() {
        let mut item = test_item("i1", "b1", "Lamp");
        item.for_sale = Some(true);
        item.price_type = Some("bidding".to_string());
        item.bid_from = Some(7.5);
        item.delivery_pickup = Some(true);

        let rows = project_marketplace(&[item], &HashMap::new(), &HashMap::new());
        assert_eq!(rows[0][2], "bidding");
        assert_eq!(rows[0][4], "7.5");
        assert_eq!(rows[0][7], "true");
        assert_eq!(rows[0][8], "false");
    }

    #[test]
    fn full_inventory_csv_round_trip_is_byte_stable() {
        let boxes = vec![test_box("b1", "Box \"A\"")];
        let rows = project_inventory(&boxes, &HashMap::new(), &HashMap::new());
        let csv = to_csv(&INVENTORY_COLUMNS, &rows);

        let expected_header = INVENTORY_COLUMNS.join(",");
        let expected_row = format!(
            "\"b1\",\"Box \"\"A\"\"\",\"attic\",\"packed\"{}",
            ",\"\"".repeat(14)
        );
        assert_eq!(csv, format!("{}\n{}", expected_header, expected_row));
        // projecting the same input twice yields identical bytes
        assert_eq!(csv, to_csv(&INVENTORY_COLUMNS, &rows));
    }
}
