use serde::{Deserialize, Serialize};

use super::{CategoryId, ProductId};
use crate::collection::RecordRef;
use crate::medium::Medium;
use crate::store::Store;
use crate::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "categories")]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::default(),
            name: name.into(),
            description: String::new(),
        }
    }

    /// Products currently filed under this category.
    pub fn products<M: Medium>(&self, store: &Store<M>) -> Vec<Product> {
        store
            .collection::<Product>()
            .filter(|p| p.category_id.as_ref() == Some(&self.id))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
    OutOfStock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "products")]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId::default(),
            name: name.into(),
            description: String::new(),
            price,
            category_id: None,
            stock: 0,
            status: ProductStatus::Active,
            image: None,
        }
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Active with at least one unit on hand.
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Active && self.stock > 0
    }

    /// Resolve the soft link to the product's category.
    pub fn category<M: Medium>(&self, store: &Store<M>) -> Option<Category> {
        self.category_id.as_ref()?.resolve(store)
    }
}
