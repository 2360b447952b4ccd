use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Product, ProductId, ReviewId, User, UserId};
use crate::collection::RecordRef;
use crate::medium::Medium;
use crate::store::Store;
use crate::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct InvalidRating(pub u8);

/// A star rating, always in `1..=5`. Stored as a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Result<Self, InvalidRating> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(InvalidRating(stars))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "reviews")]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub id: ReviewId,
    pub product_id: ProductId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub rating: Rating,
    #[serde(default)]
    pub comment: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn product<M: Medium>(&self, store: &Store<M>) -> Option<Product> {
        self.product_id.resolve(store)
    }

    pub fn author<M: Medium>(&self, store: &Store<M>) -> Option<User> {
        self.user_id.as_ref()?.resolve(store)
    }

    /// Mean rating over `reviews`, `None` when there are none.
    pub fn average(reviews: &[Review]) -> Option<f64> {
        if reviews.is_empty() {
            return None;
        }
        let sum: u32 = reviews.iter().map(|r| u32::from(r.rating.get())).sum();
        Some(f64::from(sum) / reviews.len() as f64)
    }
}
