use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_camel_case_fields() {
    let raw = r#"{"id":7,"username":"alex","email":"a@b.c","createdAt":"2025-01-01","profileCompleted":true}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "alex");
    assert_eq!(user.created_at.as_deref(), Some("2025-01-01"));
    assert!(user.profile_completed);
}

#[test]
fn user_optional_fields_default() {
    let user: User = serde_json::from_str(r#"{"id":1,"username":"sam"}"#).unwrap();
    assert_eq!(user.email, None);
    assert!(!user.profile_completed);
}

// =============================================================
// Feedback
// =============================================================

#[test]
fn feedback_item_decodes_snake_case_row() {
    let raw = r#"{
        "id": 3,
        "title": "Dark mode",
        "description": "please",
        "category": "feature",
        "created_at": "2025-02-02T10:00:00Z",
        "user": {"username": "kim"}
    }"#;
    let item: FeedbackItem = serde_json::from_str(raw).unwrap();
    assert_eq!(item.user.username, "kim");
    assert_eq!(item.screenshot_url, None);
}

#[test]
fn feedback_submission_serializes_plain_fields() {
    let body = FeedbackSubmission {
        title: "t".to_owned(),
        description: "d".to_owned(),
        category: "bug".to_owned(),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"title": "t", "description": "d", "category": "bug"}));
}

#[test]
fn feedback_submission_form_carries_text_parts() {
    let body = FeedbackSubmission {
        title: "Grades".to_owned(),
        description: "Add V-scale".to_owned(),
        category: "Feature Request".to_owned(),
    };
    let form = body.to_form();
    let names: Vec<&str> = form.fields().iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["title", "description", "category"]);
    assert_eq!(form.field("category"), Some("Feature Request"));
    assert_eq!(form.field(FeedbackSubmission::SCREENSHOT_FIELD), None);
}

#[test]
fn feedback_item_keeps_screenshot_url() {
    let raw = r#"{
        "id": 9,
        "title": "Crash",
        "description": "on save",
        "category": "Bug Report",
        "screenshot_url": "/uploads/9.png",
        "created_at": "2025-02-02T10:00:00Z",
        "user": {"username": "kim"}
    }"#;
    let item: FeedbackItem = serde_json::from_str(raw).unwrap();
    assert_eq!(item.screenshot_url.as_deref(), Some("/uploads/9.png"));
}

#[test]
fn feedback_sort_query_values() {
    assert_eq!(FeedbackSort::default().as_query(), "new");
    assert_eq!(FeedbackSort::Top.as_query(), "top");
}
