use std::collections::HashMap;

use crate::api::{BadgeDetails, BadgeId, UserId, UserProfile};
use crate::badge_store::{BadgeCatalog, BadgeStore, BadgeStoreError};

#[derive(Default)]
pub struct InMemoryBadgeStore {
    badges: parking_lot::RwLock<HashMap<BadgeId, BadgeDetails>>,
    profiles: parking_lot::RwLock<HashMap<UserId, UserProfile>>,
}

impl InMemoryBadgeStore {
    pub fn from_catalog(catalog: BadgeCatalog) -> Self {
        let store = Self::default();
        for badge in catalog.badges {
            store.add_badge(badge);
        }
        for profile in catalog.profiles {
            store.add_profile(profile);
        }
        store
    }

    pub fn from_json(catalog_json: &str) -> Result<Self, BadgeStoreError> {
        let catalog: BadgeCatalog = serde_json::from_str(catalog_json)?;
        Ok(Self::from_catalog(catalog))
    }

    pub fn add_badge(&self, details: BadgeDetails) {
        self.badges
            .write()
            .insert(details.badge_id.clone(), details);
    }

    pub fn add_profile(&self, profile: UserProfile) {
        self.profiles
            .write()
            .insert(profile.user_id.clone(), profile);
    }

    /// Small built-in catalog used when no catalog file is configured
    pub fn with_sample_catalog() -> Self {
        Self::from_catalog(sample_catalog())
    }
}

#[async_trait::async_trait]
impl BadgeStore for InMemoryBadgeStore {
    async fn get_badge(&self, badge_id: &str) -> Result<BadgeDetails, BadgeStoreError> {
        self.badges
            .read()
            .get(badge_id)
            .cloned()
            .ok_or_else(|| BadgeStoreError::BadgeNotFound(badge_id.to_string()))
    }

    async fn list_badges(&self) -> Result<Vec<BadgeDetails>, BadgeStoreError> {
        Ok(self.badges.read().values().cloned().collect())
    }

    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, BadgeStoreError> {
        self.profiles
            .read()
            .get(user_id)
            .cloned()
            .ok_or_else(|| BadgeStoreError::UserNotFound(user_id.to_string()))
    }
}

fn badge(
    badge_id: &str,
    name: &str,
    issuer: &str,
    skills: &[&str],
    competency: &str,
    tags: &[&str],
) -> BadgeDetails {
    BadgeDetails {
        badge_id: badge_id.to_string(),
        name: name.to_string(),
        issuer: issuer.to_string(),
        description: format!("Open badge certifying {}", name),
        criteria: format!("Complete the {} assessment", name),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        competency: competency.to_string(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        image_url: format!("/static/badges/{}.png", badge_id),
    }
}

pub fn sample_catalog() -> BadgeCatalog {
    BadgeCatalog {
        badges: vec![
            badge(
                "b-python-data",
                "Python Data Analysis",
                "Open Data Institute",
                &["python", "pandas", "data analysis"],
                "intermediate",
                &["data", "python"],
            ),
            badge(
                "b-ml-foundations",
                "Machine Learning Foundations",
                "AI Academy",
                &["python", "machine learning", "statistics"],
                "intermediate",
                &["ai", "machine learning"],
            ),
            badge(
                "b-deep-learning",
                "Deep Learning Specialist",
                "AI Academy",
                &["machine learning", "neural networks", "python"],
                "advanced",
                &["ai", "deep learning"],
            ),
            badge(
                "b-web-frontend",
                "Frontend Web Development",
                "Web Guild",
                &["javascript", "react", "css"],
                "beginner",
                &["web", "frontend"],
            ),
            badge(
                "b-web-backend",
                "Backend API Development",
                "Web Guild",
                &["rest", "databases", "javascript"],
                "intermediate",
                &["web", "backend"],
            ),
            badge(
                "b-cloud-arch",
                "Cloud Architecture",
                "Cloud Council",
                &["aws", "networking", "databases"],
                "advanced",
                &["cloud"],
            ),
            badge(
                "b-sec-essentials",
                "Security Essentials",
                "CyberSec Org",
                &["networking", "cryptography", "linux"],
                "beginner",
                &["security"],
            ),
            badge(
                "b-sql-analyst",
                "SQL for Analysts",
                "Open Data Institute",
                &["sql", "databases", "data analysis"],
                "beginner",
                &["data", "sql"],
            ),
        ],
        profiles: vec![
            UserProfile {
                user_id: "user1".to_string(),
                name: "Kim Jiwoo".to_string(),
                goal: "Become a machine learning engineer".to_string(),
                skills: vec!["python".to_string(), "statistics".to_string()],
                competency_level: "intermediate".to_string(),
                education_level: "bachelor".to_string(),
                acquired_badges: vec!["b-python-data".to_string()],
            },
            UserProfile {
                user_id: "user2".to_string(),
                name: "Lee Minseo".to_string(),
                goal: "Full stack web developer".to_string(),
                skills: vec!["javascript".to_string(), "css".to_string()],
                competency_level: "beginner".to_string(),
                education_level: "highschool".to_string(),
                acquired_badges: vec![],
            },
        ],
    }
}

#[cfg(test)]
mod in_memory_badge_store_tests {
    use crate::api::UserProfile;
    use crate::badge_store::{BadgeStore, BadgeStoreError, InMemoryBadgeStore};

    use super::{badge, sample_catalog};

    #[tokio::test]
    /// Tests if add_badge, get_badge and list_badges work correctly
    async fn test_add_badge_and_get_it() {
        let store = InMemoryBadgeStore::default();

        let badge_not_found = store.get_badge("no-such-badge").await;
        assert!(matches!(
            badge_not_found,
            Err(BadgeStoreError::BadgeNotFound(..))
        ));

        let details = badge(
            "b-test",
            "Test Badge",
            "Test Issuer",
            &["skill1"],
            "beginner",
            &["tag1"],
        );
        store.add_badge(details.clone());

        let returned = store.get_badge("b-test").await.expect("Failed to get badge");
        assert_eq!(returned, details);

        let list = store.list_badges().await.expect("Failed to list badges");
        assert_eq!(list, vec![details]);
    }

    #[tokio::test]
    /// Tests if add_profile and get_profile work correctly
    async fn test_add_profile_and_get_it() {
        let store = InMemoryBadgeStore::default();

        let profile_not_found = store.get_profile("nobody").await;
        assert!(matches!(
            profile_not_found,
            Err(BadgeStoreError::UserNotFound(..))
        ));

        let profile = UserProfile {
            user_id: "u1".to_string(),
            name: "Name".to_string(),
            goal: "goal".to_string(),
            skills: vec!["python".to_string()],
            competency_level: "beginner".to_string(),
            education_level: "bachelor".to_string(),
            acquired_badges: vec![],
        };
        store.add_profile(profile.clone());

        let returned = store.get_profile("u1").await.expect("Failed to get profile");
        assert_eq!(returned, profile);
    }

    #[tokio::test]
    async fn test_catalog_roundtrip_through_json() {
        let catalog = sample_catalog();
        let serialized = serde_json::to_string(&catalog).expect("Failed to serialize catalog");
        let store = InMemoryBadgeStore::from_json(&serialized).expect("Failed to parse catalog");

        let list = store.list_badges().await.expect("Failed to list badges");
        assert_eq!(list.len(), catalog.badges.len());

        let profile = store
            .get_profile("user1")
            .await
            .expect("Failed to get seeded profile");
        assert_eq!(profile.acquired_badges, vec!["b-python-data".to_string()]);
    }

    #[tokio::test]
    async fn test_invalid_catalog_json_is_rejected() {
        let result = InMemoryBadgeStore::from_json("{\"badges\": 42}");
        assert!(matches!(
            result,
            Err(BadgeStoreError::DeserializationError(..))
        ));
    }
}
