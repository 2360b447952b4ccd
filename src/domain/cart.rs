use serde::{Deserialize, Serialize};

use super::{CartItemId, Product, ProductId};
use crate::collection::RecordRef;
use crate::medium::Medium;
use crate::store::Store;
use crate::Record;

/// One line of the shopping cart. The cart is a plain collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "cart")]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(default)]
    pub id: CartItemId,
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    /// Snapshot `product` into a cart line.
    pub fn for_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: CartItemId::default(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// The product as it is now, which may differ from the snapshot or be gone.
    pub fn product<M: Medium>(&self, store: &Store<M>) -> Option<Product> {
        self.product_id.resolve(store)
    }
}
