use anyhow::{bail, Context};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::api::{BadgeDetails, ErrorDetail, Recommendations, ServiceInfo, UserProfile};

pub struct BadgeServiceClient {
    url: String,
    client: ClientWithMiddleware,
}

impl BadgeServiceClient {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let reqwest_client = reqwest::Client::builder()
            .build()
            .context("Failed to build reqwest client")?;
        let client = ClientBuilder::new(reqwest_client)
            // Insert the tracing middleware
            .with(TracingMiddleware::default())
            .build();

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }

    /// Calls GET / endpoint
    pub async fn get_service_info(&self) -> anyhow::Result<ServiceInfo> {
        let response = self.client.get(format!("{}/", self.url)).send().await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            bail!("Failed to get service info {}", response.status())
        }
    }

    /// Calls POST /api/recommendations/{user_id} endpoint
    /// Returns the recommendations computed for the user,
    /// and an error carrying the server's detail message on any failure
    pub async fn recommend_badges(&self, user_id: &str) -> anyhow::Result<Recommendations> {
        let response = self
            .client
            .post(format!("{}/api/recommendations/{}", self.url, user_id))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let error: ErrorDetail = response.json().await.unwrap_or(ErrorDetail {
                detail: String::new(),
            });
            bail!("Failed to get recommendations {}", error.detail)
        }
    }

    /// Calls GET /api/badges/{badge_id} endpoint
    /// Returns badge details if the badge is in the catalog
    /// None if it is not
    /// and an error in case of any other failure
    pub async fn get_badge(&self, badge_id: &str) -> anyhow::Result<Option<BadgeDetails>> {
        let response = self
            .client
            .get(format!("{}/api/badges/{}", self.url, badge_id))
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            Ok(None)
        } else if response.status().is_success() {
            Ok(Some(response.json().await?))
        } else {
            let error: ErrorDetail = response.json().await.unwrap_or(ErrorDetail {
                detail: String::new(),
            });
            bail!("Failed to get badge {}", error.detail)
        }
    }

    /// Calls GET /api/recommendations/user/{user_id} endpoint
    /// Returns the user profile if the user is known, None otherwise
    pub async fn get_user_profile(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>> {
        let response = self
            .client
            .get(format!("{}/api/recommendations/user/{}", self.url, user_id))
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            Ok(None)
        } else if response.status().is_success() {
            Ok(Some(response.json().await?))
        } else {
            let error: ErrorDetail = response.json().await.unwrap_or(ErrorDetail {
                detail: String::new(),
            });
            bail!("Failed to get user profile {}", error.detail)
        }
    }
}
