use nss_portal::domain::subscriber_status::SubscriberStatus;
use nss_portal::routes::ApiResponse;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn unsubscribe_marks_the_subscriber_without_deleting_it() {
    let test_app = TestApp::spawn_app().await;
    test_app
        .post_subscribe(&json!({ "email": "a@x.com", "preferences": ["general"] }))
        .await;

    let response = test_app.post_unsubscribe(&json!({ "email": "a@x.com" })).await;

    assert_eq!(200, response.status().as_u16());
    let subscriber = test_app.find_subscriber("a@x.com").await.unwrap();
    assert_eq!(subscriber.status, SubscriberStatus::Unsubscribed);
    assert!(subscriber.unsubscribed_at.is_some());
    assert_eq!(subscriber.preferences.to_tags(), vec!["general"]);
    assert_eq!(1, test_app.count_subscribers().await);
}

#[tokio::test]
async fn subscribe_after_unsubscribe_reactivates_the_same_record() {
    let test_app = TestApp::spawn_app().await;
    test_app
        .post_subscribe(&json!({ "email": "a@x.com", "preferences": ["general"] }))
        .await;
    let original = test_app.find_subscriber("a@x.com").await.unwrap();
    test_app.post_unsubscribe(&json!({ "email": "a@x.com" })).await;

    let response = test_app
        .post_subscribe(&json!({ "email": "a@x.com", "preferences": ["events"] }))
        .await;

    assert_eq!(200, response.status().as_u16());
    let subscriber = test_app.find_subscriber("a@x.com").await.unwrap();
    assert_eq!(subscriber.id, original.id);
    assert_eq!(subscriber.status, SubscriberStatus::Active);
    assert!(subscriber.unsubscribed_at.is_none());
    assert_eq!(subscriber.preferences.to_tags(), vec!["events"]);
    assert_eq!(subscriber.subscribed_at, original.subscribed_at);
    assert_eq!(1, test_app.count_subscribers().await);
}

#[tokio::test]
async fn unsubscribing_an_unknown_email_succeeds_and_stores_nothing() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app
        .post_unsubscribe(&json!({ "email": "never@x.com" }))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: ApiResponse = response.json().await.unwrap();
    assert!(body.success);
    assert_eq!(0, test_app.count_subscribers().await);
}

#[tokio::test]
async fn known_and_unknown_emails_get_the_same_answer() {
    let test_app = TestApp::spawn_app().await;
    test_app
        .post_subscribe(&json!({ "email": "a@x.com", "preferences": ["general"] }))
        .await;

    let known: ApiResponse = test_app
        .post_unsubscribe(&json!({ "email": "a@x.com" }))
        .await
        .json()
        .await
        .unwrap();
    let unknown: ApiResponse = test_app
        .post_unsubscribe(&json!({ "email": "never@x.com" }))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(known.success, unknown.success);
    assert_eq!(known.message, unknown.message);
}

#[tokio::test]
async fn unsubscribing_twice_keeps_the_first_timestamp() {
    let test_app = TestApp::spawn_app().await;
    test_app
        .post_subscribe(&json!({ "email": "a@x.com", "preferences": ["general"] }))
        .await;
    test_app.post_unsubscribe(&json!({ "email": "a@x.com" })).await;
    let first = test_app.find_subscriber("a@x.com").await.unwrap();

    let response = test_app.post_unsubscribe(&json!({ "email": "a@x.com" })).await;

    assert_eq!(200, response.status().as_u16());
    let second = test_app.find_subscriber("a@x.com").await.unwrap();
    assert_eq!(first.unsubscribed_at, second.unsubscribed_at);
}

#[tokio::test]
async fn unsubscribe_returns_400_for_missing_or_invalid_email() {
    let test_app = TestApp::spawn_app().await;
    let test_cases = vec![
        (json!({}), "missing email"),
        (json!({ "email": "a.x.com" }), "invalid email"),
        (json!({ "email": 42 }), "email that is not a string"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = test_app.post_unsubscribe(&invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 status when payload was {}",
            error_message
        );
    }
}
