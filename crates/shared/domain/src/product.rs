//! Product domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    /// Store-assigned identifier
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price, never negative
    pub price: f64,
    /// Units in stock, never negative
    pub quantity: i32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product. The identifier is assigned by the store.
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
            category: input.category,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Product creation data transfer object
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub category: String,
}
