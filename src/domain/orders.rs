use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CartItem, OrderId, Product, ProductId, User, UserId};
use crate::collection::RecordRef;
use crate::medium::Medium;
use crate::store::Store;
use crate::Record;

/// Ad hoc key holding a copy of the most recently placed order.
pub const LAST_ORDER_KEY: &str = "lastOrder";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn product<M: Medium>(&self, store: &Store<M>) -> Option<Product> {
        self.product_id.resolve(store)
    }
}

impl From<&CartItem> for OrderItem {
    fn from(line: &CartItem) -> Self {
        Self {
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
        }
    }
}

/// Contact details captured at checkout. `user_id` is set for signed-in buyers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "orders")]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: OrderStatus,
    pub total: f64,
    pub customer: Customer,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Build a pending order from cart lines, totalled from the lines.
    pub fn from_cart(lines: &[CartItem], customer: Customer) -> Self {
        let items: Vec<OrderItem> = lines.iter().map(OrderItem::from).collect();
        let total = items.iter().map(OrderItem::subtotal).sum();
        Self {
            id: OrderId::default(),
            items,
            status: OrderStatus::Pending,
            total,
            customer,
            created_at: Utc::now(),
        }
    }

    /// Sum of line subtotals; may differ from `total` if the order was edited.
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// The registered user who placed the order, if any and still present.
    pub fn customer_user<M: Medium>(&self, store: &Store<M>) -> Option<User> {
        self.customer.user_id.as_ref()?.resolve(store)
    }
}
