use serde::{Deserialize, Serialize};

/// What a write did to a collection or entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    Added,
    Updated,
    Removed,
    Cleared,
    Seeded,
}

/// Notification describing one successful write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreChange {
    /// Collection (or ad hoc entry key) that was written.
    pub collection: String,
    pub kind: ChangeKind,
    /// Affected record id, for single-record writes.
    pub id: Option<String>,
}
