use std::collections::HashSet;
use std::sync::Arc;

use itertools::Itertools;

use crate::api::{BadgeDetails, BadgeRecommendation, Recommendations, UserProfile};
use crate::badge_store::BadgeStore;
use crate::recommender::{BadgeRecommender, RecommenderError, RecommenderFactory};

const NO_OF_RECOMMENDATIONS: usize = 5;

const SKILL_WEIGHT: f64 = 0.5;
const GOAL_WEIGHT: f64 = 0.3;
const LEVEL_WEIGHT: f64 = 0.2;

pub struct CatalogRecommenderFactory {
    store: Arc<dyn BadgeStore + Send + Sync>,
}

impl CatalogRecommenderFactory {
    pub fn new(store: Arc<dyn BadgeStore + Send + Sync>) -> Self {
        Self { store }
    }
}

impl RecommenderFactory for CatalogRecommenderFactory {
    fn recommender(&self) -> Box<dyn BadgeRecommender + Send + Sync> {
        Box::new(CatalogRecommender::new(self.store.clone()))
    }
}

/// Scores catalog badges against a user profile.
/// Holds only a read handle to the store, safe to build one per request.
pub struct CatalogRecommender {
    store: Arc<dyn BadgeStore + Send + Sync>,
}

impl CatalogRecommender {
    pub fn new(store: Arc<dyn BadgeStore + Send + Sync>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl BadgeRecommender for CatalogRecommender {
    async fn recommend_badges(&self, user_id: &str) -> Result<Recommendations, RecommenderError> {
        let profile = self.store.get_profile(user_id).await?;
        let badges = self.store.list_badges().await?;

        let acquired: HashSet<&str> = profile
            .acquired_badges
            .iter()
            .map(|id| id.as_str())
            .collect();

        let recommendations = badges
            .iter()
            .filter(|badge| !acquired.contains(badge.badge_id.as_str()))
            .map(|badge| score_badge(&profile, badge))
            .sorted_by(|a, b| {
                b.similarity_score
                    .total_cmp(&a.similarity_score)
                    .then_with(|| a.badge_id.cmp(&b.badge_id))
            })
            .take(NO_OF_RECOMMENDATIONS)
            .collect();

        Ok(Recommendations { recommendations })
    }
}

fn score_badge(profile: &UserProfile, badge: &BadgeDetails) -> BadgeRecommendation {
    let user_skills: HashSet<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();
    let badge_skills: HashSet<String> = badge.skills.iter().map(|s| s.to_lowercase()).collect();

    let overlapping: Vec<String> = badge_skills
        .intersection(&user_skills)
        .sorted()
        .cloned()
        .collect();
    let union_size = badge_skills.union(&user_skills).count();
    let skill_score = if union_size == 0 {
        0.0
    } else {
        overlapping.len() as f64 / union_size as f64
    };

    let goal_score = goal_match_score(&profile.goal, badge);

    let level_score = if profile
        .competency_level
        .eq_ignore_ascii_case(&badge.competency)
    {
        1.0
    } else {
        0.0
    };

    let similarity_score =
        (SKILL_WEIGHT * skill_score + GOAL_WEIGHT * goal_score + LEVEL_WEIGHT * level_score)
            .clamp(0.0, 1.0);

    let recommendation_reason = if overlapping.is_empty() {
        format!("Broadens your profile towards: {}", profile.goal)
    } else {
        format!("Builds on your existing skills: {}", overlapping.join(", "))
    };

    BadgeRecommendation {
        badge_id: badge.badge_id.clone(),
        name: badge.name.clone(),
        issuer: badge.issuer.clone(),
        skills: badge.skills.clone(),
        competency: badge.competency.clone(),
        similarity_score,
        recommendation_reason,
        preparation_steps: badge.criteria.clone(),
        expected_benefits: format!(
            "Demonstrates {} level competency in {}",
            badge.competency,
            badge.skills.join(", ")
        ),
    }
}

/// Fraction of goal keywords that appear anywhere in the badge metadata.
/// Short filler words are ignored.
fn goal_match_score(goal: &str, badge: &BadgeDetails) -> f64 {
    let haystack = format!(
        "{} {} {} {}",
        badge.name,
        badge.competency,
        badge.skills.join(" "),
        badge.tags.join(" ")
    )
    .to_lowercase();

    let keywords = goal
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|word| word.len() >= 3)
        .collect_vec();

    if keywords.is_empty() {
        return 0.0;
    }

    let matched = keywords
        .iter()
        .filter(|word| haystack.contains(word.as_str()))
        .count();

    matched as f64 / keywords.len() as f64
}
