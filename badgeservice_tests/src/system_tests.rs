use badgeservice_recommendations::client::BadgeServiceClient;

const BADGESERVICE_URL: &str = "http://127.0.0.1:8080";

#[tokio::test]
/// Simple test for a running badgeservice instance
/// Checks the service descriptor
/// Fetches a user profile and resolves each acquired badge
/// Requests recommendations and cross-checks them against the catalog
async fn badgeservice_recommendations_e2e_test() {
    let client = BadgeServiceClient::new(BADGESERVICE_URL).expect("Failed to create client");

    let info = client
        .get_service_info()
        .await
        .expect("Failed to get service info");
    assert_eq!(info.message, "OpenBadge Recommendation API");
    assert_eq!(info.docs_url, "/apispec/v2");

    let profile = client
        .get_user_profile("user1")
        .await
        .expect("Failed to get user profile")
        .expect("User not found");

    for badge_id in &profile.acquired_badges {
        let badge = client
            .get_badge(badge_id)
            .await
            .expect("Failed to get badge")
            .expect("Acquired badge not in catalog");
        assert_eq!(&badge.badge_id, badge_id);
    }

    let recommendations = client
        .recommend_badges("user1")
        .await
        .expect("Failed to get recommendations");
    assert!(!recommendations.recommendations.is_empty());

    for recommendation in &recommendations.recommendations {
        assert!(!profile.acquired_badges.contains(&recommendation.badge_id));

        let badge = client
            .get_badge(&recommendation.badge_id)
            .await
            .expect("Failed to get badge")
            .expect("Recommended badge not in catalog");
        assert_eq!(badge.name, recommendation.name);
        assert_eq!(badge.issuer, recommendation.issuer);
    }
}

#[tokio::test]
/// Unknown users surface as a uniform server error carrying a detail message
async fn badgeservice_unknown_user_error_test() {
    let client = BadgeServiceClient::new(BADGESERVICE_URL).expect("Failed to create client");

    let error = client
        .recommend_badges("definitely-not-a-user")
        .await
        .expect_err("Expected recommendation to fail");
    assert!(error.to_string().contains("not found"));

    let profile = client
        .get_user_profile("definitely-not-a-user")
        .await
        .expect("Failed to call profile endpoint");
    assert!(profile.is_none());
}

#[tokio::test]
/// Concurrent requests for different users must not leak state into each other
async fn badgeservice_concurrent_requests_test() {
    let client = BadgeServiceClient::new(BADGESERVICE_URL).expect("Failed to create client");

    let (first, second) = tokio::join!(
        client.recommend_badges("user1"),
        client.recommend_badges("user2")
    );
    let first = first.expect("Failed to get recommendations for user1");
    let second = second.expect("Failed to get recommendations for user2");

    assert_ne!(first, second);

    let first_again = client
        .recommend_badges("user1")
        .await
        .expect("Failed to get recommendations for user1");
    assert_eq!(first, first_again);
}
