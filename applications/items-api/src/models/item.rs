use serde::{Deserialize, Serialize};

/// Catalog entry returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Payload accepted when creating an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// Response for a single item lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDetail {
    pub item_id: i64,
    pub name: String,
}

/// Response returned after an item is created. The description field is
/// echoed back even when absent from the request, serialized as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreated {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}
