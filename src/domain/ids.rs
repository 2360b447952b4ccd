use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CartItem, Category, Order, Product, Review, User};
use crate::collection::RecordRef;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident => $target:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl RecordRef for $name {
            type Target = $target;
        }
    };
}

record_id!(
    /// Id of a [`Product`].
    ProductId => Product
);
record_id!(
    /// Id of a [`Category`].
    CategoryId => Category
);
record_id!(
    /// Id of a [`User`].
    UserId => User
);
record_id!(
    /// Id of an [`Order`].
    OrderId => Order
);
record_id!(ReviewId => Review);
record_id!(CartItemId => CartItem);
