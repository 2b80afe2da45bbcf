use axum::{extract::Path, Json};

use crate::models::{Item, ItemCreated, ItemDetail, NewItem};

/// GET /items
/// Returns the sample item catalog.
pub async fn list_items() -> Json<Vec<Item>> {
    Json(vec![
        Item {
            id: 1,
            name: "Item 1".to_string(),
            price: 10.0,
        },
        Item {
            id: 2,
            name: "Item 2".to_string(),
            price: 20.0,
        },
    ])
}

/// GET /items/{id}
/// Returns a sample item for any id.
pub async fn get_item(Path(item_id): Path<i64>) -> Json<ItemDetail> {
    // Placeholder; a real service would look the item up in a store.
    Json(ItemDetail {
        item_id,
        name: "Sample Item".to_string(),
    })
}

/// POST /items
/// Echoes the submitted item back with a fixed id.
pub async fn create_item(Json(item): Json<NewItem>) -> Json<ItemCreated> {
    // Placeholder; a real service would persist the item.
    Json(ItemCreated {
        id: 1,
        name: item.name,
        price: item.price,
        description: item.description,
    })
}
