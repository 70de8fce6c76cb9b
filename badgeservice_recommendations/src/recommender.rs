use std::sync::Arc;

pub use catalog_recommender::{CatalogRecommender, CatalogRecommenderFactory};

use crate::api::Recommendations;
use crate::badge_store::BadgeStoreError;

mod catalog_recommender;

#[derive(thiserror::Error, Debug)]
pub enum RecommenderError {
    #[error(transparent)]
    Store(#[from] BadgeStoreError),

    #[error("{0}")]
    Other(String),
}

/// Computes badge recommendations for a single user
#[async_trait::async_trait]
pub trait BadgeRecommender {
    async fn recommend_badges(&self, user_id: &str) -> Result<Recommendations, RecommenderError>;
}

/// Hands out a fresh recommender per request, handlers never share one
pub trait RecommenderFactory {
    fn recommender(&self) -> Box<dyn BadgeRecommender + Send + Sync>;
}

pub type SharedRecommenderFactory = Arc<dyn RecommenderFactory + Send + Sync>;
