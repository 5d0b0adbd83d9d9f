use nss_portal::services::listings::{
    set_event_active, set_professor_active, set_team_member_active,
};
use nss_portal::services::ServiceError;
use serde_json::json;

use crate::helpers::TestApp;

async fn list(test_app: &TestApp, path: &str) -> Vec<serde_json::Value> {
    test_app
        .get(path)
        .await
        .error_for_status()
        .expect("Listing failed.")
        .json()
        .await
        .expect("Response was not a JSON list.")
}

fn names<'a>(records: &'a [serde_json::Value], key: &str) -> Vec<&'a str> {
    records
        .iter()
        .map(|record| record[key].as_str().unwrap())
        .collect()
}

fn team_member(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "position": "Coordinator",
        "description": "Leads the weekend teaching drive"
    })
}

fn event(title: &str, date: &str, category: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "Open to all volunteers",
        "date": date,
        "location": "Main auditorium",
        "category": category
    })
}

#[tokio::test]
async fn team_lists_only_active_members() {
    let test_app = TestApp::spawn_app().await;
    test_app.seed_team_member(team_member("Ishaan")).await;
    let retired = test_app.seed_team_member(team_member("Zoya")).await;
    test_app.seed_team_member(team_member("Aditi")).await;

    set_team_member_active(&test_app.db_pool, retired.id, false)
        .await
        .unwrap();
    let members = list(&test_app, "/team").await;

    assert_eq!(names(&members, "name"), vec!["Aditi", "Ishaan"]);
}

#[tokio::test]
async fn professors_can_be_filtered_by_role() {
    let test_app = TestApp::spawn_app().await;
    test_app
        .seed_professor(json!({ "name": "Dr. Rao", "role": "faculty_incharge" }))
        .await;
    test_app
        .seed_professor(json!({ "name": "Dr. Sen", "role": "programme_officer" }))
        .await;
    let inactive = test_app
        .seed_professor(json!({ "name": "Dr. Bose", "role": "programme_officer" }))
        .await;
    set_professor_active(&test_app.db_pool, inactive.id, false)
        .await
        .unwrap();

    let all = list(&test_app, "/professors").await;
    let officers = list(&test_app, "/professors?role=programme_officer").await;

    assert_eq!(names(&all, "name"), vec!["Dr. Rao", "Dr. Sen"]);
    assert_eq!(names(&officers, "name"), vec!["Dr. Sen"]);
    assert_eq!(officers[0]["role"], "programme_officer");
}

#[tokio::test]
async fn events_are_active_only_and_in_calendar_order() {
    let test_app = TestApp::spawn_app().await;
    test_app
        .seed_event(event("Tree plantation", "2024-08-15T07:00:00Z", "general"))
        .await;
    test_app
        .seed_event(event("Blood drive", "2024-06-14T09:00:00Z", "health"))
        .await;
    let cancelled = test_app
        .seed_event(event("Cancelled camp", "2024-07-01T09:00:00Z", "general"))
        .await;
    set_event_active(&test_app.db_pool, cancelled.id, false)
        .await
        .unwrap();

    let events = list(&test_app, "/events").await;
    let general = list(&test_app, "/events?category=general").await;

    assert_eq!(names(&events, "title"), vec!["Blood drive", "Tree plantation"]);
    assert_eq!(names(&general, "title"), vec!["Tree plantation"]);
}

#[tokio::test]
async fn media_lists_published_items_by_sort_order() {
    let test_app = TestApp::spawn_app().await;
    for (title, sort_order, is_published) in
        [("Second", 2, true), ("First", 1, true), ("Hidden", 0, false)]
    {
        test_app
            .seed_media_item(json!({
                "title": title,
                "mediaType": "image",
                "mediaUrl": "https://cdn.example.org/photo.jpg",
                "category": "events",
                "uploadedBy": "media team",
                "isPublished": is_published,
                "sortOrder": sort_order
            }))
            .await;
    }

    let items = list(&test_app, "/media").await;
    let activities = list(&test_app, "/media?category=activities").await;

    assert_eq!(names(&items, "title"), vec!["First", "Second"]);
    assert!(activities.is_empty());
}

#[tokio::test]
async fn toggling_an_unknown_record_is_not_found() {
    let test_app = TestApp::spawn_app().await;

    let result = set_event_active(&test_app.db_pool, uuid::Uuid::new_v4(), false).await;

    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}
