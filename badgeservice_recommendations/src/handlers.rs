use std::sync::Arc;

use actix_web::web::Data;
use actix_web::Error;
use actix_web::HttpResponse;
use paperclip::actix::{
    api_v2_operation,
    web::{self, Json},
};

use crate::api::{BadgeId, ErrorDetail, ServiceInfo, UserId};
use crate::badge_store::{BadgeStore, BadgeStoreError};
use crate::recommender::SharedRecommenderFactory;

#[api_v2_operation]
pub async fn health() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok().finish())
}

#[api_v2_operation]
pub async fn service_info() -> Result<Json<ServiceInfo>, Error> {
    Ok(Json(ServiceInfo {
        message: "OpenBadge Recommendation API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs_url: "/apispec/v2".to_string(),
    }))
}

#[api_v2_operation]
pub async fn recommend_badges(
    factory: Data<SharedRecommenderFactory>,
    user_id: web::Path<UserId>,
) -> Result<HttpResponse, Error> {
    let user_id = user_id.into_inner();
    // One recommender per request, nothing is shared between calls
    let recommender = factory.recommender();
    Ok(match recommender.recommend_badges(&user_id).await {
        Ok(recommendations) => {
            tracing::info!(
                "Returning {} recommendations for user {}",
                recommendations.recommendations.len(),
                user_id
            );
            HttpResponse::Ok().json(recommendations)
        }
        Err(err) => {
            tracing::error!("Recommendation lookup for user {} failed {}", user_id, err);
            HttpResponse::InternalServerError().json(ErrorDetail {
                detail: err.to_string(),
            })
        }
    })
}

#[api_v2_operation]
pub async fn get_badge(
    badge_store: Data<Arc<dyn BadgeStore + Send + Sync>>,
    badge_id: web::Path<BadgeId>,
) -> Result<HttpResponse, Error> {
    Ok(match badge_store.get_badge(&badge_id.into_inner()).await {
        Ok(details) => HttpResponse::Ok().json(details),
        Err(BadgeStoreError::BadgeNotFound(_)) => HttpResponse::NotFound().finish(),
        Err(err) => {
            tracing::error!("Get badge failed {}", err);
            HttpResponse::InternalServerError().json(ErrorDetail {
                detail: err.to_string(),
            })
        }
    })
}

#[api_v2_operation]
pub async fn get_user_profile(
    badge_store: Data<Arc<dyn BadgeStore + Send + Sync>>,
    user_id: web::Path<UserId>,
) -> Result<HttpResponse, Error> {
    Ok(match badge_store.get_profile(&user_id.into_inner()).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(BadgeStoreError::UserNotFound(_)) => HttpResponse::NotFound().finish(),
        Err(err) => {
            tracing::error!("Get user profile failed {}", err);
            HttpResponse::InternalServerError().json(ErrorDetail {
                detail: err.to_string(),
            })
        }
    })
}
