use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

pub type UserId = String;
pub type BadgeId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Apiv2Schema)]
/// Static descriptor returned by the root endpoint
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub docs_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Apiv2Schema)]
/// A single badge proposed to a user, with the scoring rationale attached
pub struct BadgeRecommendation {
    pub badge_id: BadgeId,
    pub name: String,
    pub issuer: String,
    pub skills: Vec<String>,
    pub competency: String,
    /// Match quality in [0.0, 1.0]
    pub similarity_score: f64,
    pub recommendation_reason: String,
    pub preparation_steps: String,
    pub expected_benefits: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Apiv2Schema)]
/// Response of the recommendation endpoint, ordered by descending score
pub struct Recommendations {
    pub recommendations: Vec<BadgeRecommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct BadgeDetails {
    pub badge_id: BadgeId,
    pub name: String,
    pub issuer: String,
    pub description: String,
    pub criteria: String,
    pub skills: Vec<String>,
    pub competency: String,
    pub tags: Vec<String>,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct UserProfile {
    pub user_id: UserId,
    pub name: String,
    pub goal: String,
    pub skills: Vec<String>,
    pub competency_level: String,
    pub education_level: String,
    pub acquired_badges: Vec<BadgeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
/// Uniform error body, all internal failures collapse into this shape
pub struct ErrorDetail {
    pub detail: String,
}
