pub use in_memory_badge_store::InMemoryBadgeStore;

use serde::{Deserialize, Serialize};

use crate::api::{BadgeDetails, BadgeId, UserId, UserProfile};

mod in_memory_badge_store;

#[derive(thiserror::Error, Debug)]
pub enum BadgeStoreError {
    #[error("Badge {0} not found")]
    BadgeNotFound(BadgeId),

    #[error("User {0} not found")]
    UserNotFound(UserId),

    #[error("Failed to deserialize catalog: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Other error {0}")]
    Other(String),
}

/// On-disk shape of a badge catalog, also used for the built-in sample data
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BadgeCatalog {
    pub badges: Vec<BadgeDetails>,
    pub profiles: Vec<UserProfile>,
}

#[async_trait::async_trait]
pub trait BadgeStore {
    /// Retrieves details of a single badge from the catalog
    async fn get_badge(&self, badge_id: &str) -> Result<BadgeDetails, BadgeStoreError>;
    /// Lists all badges in the catalog
    async fn list_badges(&self) -> Result<Vec<BadgeDetails>, BadgeStoreError>;
    /// Retrieves the profile of a user, including the badges they already hold
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, BadgeStoreError>;
}
