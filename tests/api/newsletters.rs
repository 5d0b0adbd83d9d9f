use nss_portal::routes::ApiResponse;
use nss_portal::services::newsletters::publish_newsletter;
use nss_portal::services::ServiceError;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

fn newsletter(title: &str, category: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "Monthly round-up",
        "content": "# Highlights\n- Blood donation drive\n\nSee you next month.",
        "category": category
    })
}

fn published(title: &str, category: &str, published_at: &str) -> serde_json::Value {
    let mut body = newsletter(title, category);
    body["isPublished"] = json!(true);
    body["publishedAt"] = json!(published_at);
    body
}

fn titles(newsletters: &[serde_json::Value]) -> Vec<&str> {
    newsletters
        .iter()
        .map(|newsletter| newsletter["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn only_published_newsletters_are_listed_most_recent_first() {
    let test_app = TestApp::spawn_app().await;
    test_app
        .seed_newsletter(published("January", "general", "2024-01-01T00:00:00Z"))
        .await;
    test_app
        .seed_newsletter(published("March", "events", "2024-03-01T00:00:00Z"))
        .await;
    test_app.seed_newsletter(newsletter("Draft", "general")).await;

    let newsletters = test_app.get_newsletters(None).await;

    assert_eq!(titles(&newsletters), vec!["March", "January"]);
}

#[tokio::test]
async fn category_filter_returns_only_matching_newsletters() {
    let test_app = TestApp::spawn_app().await;
    test_app
        .seed_newsletter(published("Camp", "events", "2024-01-01T00:00:00Z"))
        .await;
    test_app
        .seed_newsletter(published("Award", "achievements", "2024-02-01T00:00:00Z"))
        .await;
    test_app
        .seed_newsletter(published("Drive", "events", "2024-03-01T00:00:00Z"))
        .await;

    let newsletters = test_app.get_newsletters(Some("events")).await;

    assert_eq!(titles(&newsletters), vec!["Drive", "Camp"]);
    assert!(newsletters
        .iter()
        .all(|newsletter| newsletter["category"] == "events"));
}

#[tokio::test]
async fn unknown_category_lists_nothing() {
    let test_app = TestApp::spawn_app().await;
    test_app
        .seed_newsletter(published("Camp", "events", "2024-01-01T00:00:00Z"))
        .await;

    let newsletters = test_app.get_newsletters(Some("sports")).await;

    assert!(newsletters.is_empty());
}

#[tokio::test]
async fn equal_dates_are_ordered_by_id() {
    let test_app = TestApp::spawn_app().await;
    let mut ids = Vec::new();
    for title in ["One", "Two", "Three"] {
        let seeded = test_app
            .seed_newsletter(published(title, "general", "2024-05-01T00:00:00Z"))
            .await;
        ids.push(seeded.id.to_string());
    }
    ids.sort();

    let newsletters = test_app.get_newsletters(None).await;
    let listed: Vec<&str> = newsletters
        .iter()
        .map(|newsletter| newsletter["id"].as_str().unwrap())
        .collect();

    assert_eq!(listed, ids);
}

#[tokio::test]
async fn listed_newsletters_carry_every_attribute() {
    let test_app = TestApp::spawn_app().await;
    test_app
        .seed_newsletter(published("Camp", "events", "2024-01-01T00:00:00Z"))
        .await;

    let newsletters = test_app.get_newsletters(None).await;

    for attribute in [
        "id",
        "title",
        "description",
        "content",
        "category",
        "featuredImage",
        "isPublished",
        "publishedAt",
        "createdAt",
        "updatedAt",
    ] {
        assert!(
            newsletters[0].get(attribute).is_some(),
            "{} is missing",
            attribute
        );
    }
}

#[tokio::test]
async fn publishing_a_draft_makes_it_visible() {
    let test_app = TestApp::spawn_app().await;
    let draft = test_app.seed_newsletter(newsletter("Draft", "general")).await;
    assert!(draft.published_at.is_none());

    let published = publish_newsletter(&test_app.db_pool, draft.id)
        .await
        .unwrap();

    assert!(published.is_published);
    assert!(published.published_at.is_some());
    assert!(published.updated_at >= draft.updated_at);
    assert_eq!(titles(&test_app.get_newsletters(None).await), vec!["Draft"]);
}

#[tokio::test]
async fn a_published_newsletter_is_served_with_its_content_blocks() {
    let test_app = TestApp::spawn_app().await;
    let seeded = test_app
        .seed_newsletter(published("Camp", "events", "2024-01-01T00:00:00Z"))
        .await;

    let response = test_app.get(&format!("/newsletters/{}", seeded.id)).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["title"], "Camp");
    assert_eq!(
        body["blocks"],
        json!([
            { "kind": "heading", "text": "Highlights" },
            { "kind": "list_item", "text": "Blood donation drive" },
            { "kind": "break" },
            { "kind": "paragraph", "text": "See you next month." }
        ])
    );
}

#[tokio::test]
async fn drafts_and_unknown_ids_are_not_found() {
    let test_app = TestApp::spawn_app().await;
    let draft = test_app.seed_newsletter(newsletter("Draft", "general")).await;

    let draft_response = test_app.get(&format!("/newsletters/{}", draft.id)).await;
    let unknown_response = test_app
        .get(&format!("/newsletters/{}", Uuid::new_v4()))
        .await;

    assert_eq!(404, draft_response.status().as_u16());
    assert_eq!(404, unknown_response.status().as_u16());
}

#[tokio::test]
async fn a_malformed_newsletter_id_gets_a_not_found_envelope() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app.get("/newsletters/not-a-uuid").await;

    assert_eq!(404, response.status().as_u16());
    let body: ApiResponse = response.json().await.unwrap();
    assert!(!body.success);
    assert!(body.message.is_some());
}

#[tokio::test]
async fn publishing_an_unknown_newsletter_is_not_found() {
    let test_app = TestApp::spawn_app().await;

    let result = publish_newsletter(&test_app.db_pool, Uuid::new_v4()).await;

    assert!(matches!(
        result,
        Err(ServiceError::NotFound(_))
    ));
}
