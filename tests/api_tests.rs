//! Wire-level tests for the single-course operations.

mod common;

use easel::error::ErrorKind;
use easel::response::Outcome;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{mock_api, mount_json, mount_status, TEST_TOKEN};

#[tokio::test]
async fn list_courses_sends_bearer_token_and_repeated_includes() {
    let server = MockServer::start().await;
    let api = mock_api(&server);

    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}")))
        .and(query_param("enrollment_state", "active"))
        .and(query_param("include[]", "term"))
        .and(query_param("include[]", "total_students"))
        .and(query_param("include[]", "teachers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Algorithms", "course_code": "ALG101",
             "enrollment_term": {"name": "Fall 2024"}, "total_students": 120,
             "workflow_state": "available", "ignored_upstream_field": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let value = api.list_courses().await.into_value();
    let courses = value.as_array().unwrap();

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["course_code"], "ALG101");
    assert_eq!(courses[0]["enrollment_term"]["name"], "Fall 2024");
    // Projection drops fields the agent has no use for.
    assert!(courses[0].get("ignored_upstream_field").is_none());
}

#[tokio::test]
async fn course_details_are_annotated_with_the_routing_hint() {
    let server = MockServer::start().await;
    let api = mock_api(&server);

    mount_json(
        &server,
        "/courses/7",
        json!({
            "id": 7, "name": "Databases", "course_code": "DB200",
            "default_view": "wiki",
            "teachers": [{"id": 3, "display_name": "Prof. Codd"}]
        }),
    )
    .await;

    let value = api.get_course_details(7).await.into_value();
    assert_eq!(value["suggested_tool"], "get_course_home_page");
    assert_eq!(value["teachers"][0]["display_name"], "Prof. Codd");
}

#[tokio::test]
async fn syllabus_is_projected_out_of_the_course_detail() {
    let server = MockServer::start().await;
    let api = mock_api(&server);

    mount_json(
        &server,
        "/courses/7",
        json!({"id": 7, "name": "Databases", "syllabus_body": "<p>Week 1: relational model</p>"}),
    )
    .await;

    let value = api.get_course_syllabus(7).await.into_value();
    assert_eq!(value["course_id"], 7);
    assert!(value["syllabus_body"]
        .as_str()
        .unwrap()
        .contains("relational model"));
}

#[tokio::test]
async fn blank_syllabus_is_empty_with_fallback_suggestions() {
    let server = MockServer::start().await;
    let api = mock_api(&server);

    mount_json(
        &server,
        "/courses/7",
        json!({"id": 7, "name": "Databases", "syllabus_body": null}),
    )
    .await;

    match api.get_course_syllabus(7).await {
        Outcome::Empty { suggestions, .. } => {
            assert_eq!(suggestions, vec!["get_course_home_page", "get_course_modules"]);
        }
        other => panic!("expected empty, got {other:?}"),
    }
}

#[tokio::test]
async fn modules_request_includes_items() {
    let server = MockServer::start().await;
    let api = mock_api(&server);

    Mock::given(method("GET"))
        .and(path("/courses/7/modules"))
        .and(query_param("include[]", "items"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Week 1", "position": 1,
             "items": [{"id": 10, "title": "Intro slides", "type": "File"}]}
        ])))
        .mount(&server)
        .await;

    let value = api.get_course_modules(7).await.into_value();
    assert_eq!(value[0]["items"][0]["type"], "File");
}

#[tokio::test]
async fn files_map_the_header_style_content_type_field() {
    let server = MockServer::start().await;
    let api = mock_api(&server);

    mount_json(
        &server,
        "/courses/7/files",
        json!([{
            "id": 5, "display_name": "notes.pdf", "filename": "notes.pdf",
            "url": "https://files.example.com/5", "size": 12345,
            "content-type": "application/pdf", "folder_id": 2
        }]),
    )
    .await;

    let value = api.get_course_files(7).await.into_value();
    assert_eq!(value[0]["content-type"], "application/pdf");
    assert_eq!(value[0]["size"], 12345);
}

#[tokio::test]
async fn missing_front_page_is_not_found_with_modules_fallback() {
    let server = MockServer::start().await;
    let api = mock_api(&server);

    mount_status(&server, "/courses/7/front_page", 404).await;

    match api.get_course_home_page(7).await {
        Outcome::Failure {
            kind, suggestions, ..
        } => {
            assert_eq!(kind, ErrorKind::NotFound);
            assert_eq!(suggestions, vec!["get_course_modules"]);
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn forbidden_files_report_the_disabled_resource() {
    let server = MockServer::start().await;
    let api = mock_api(&server);

    mount_status(&server, "/courses/7/files", 403).await;

    match api.get_course_files(7).await {
        Outcome::Failure { kind, message, .. } => {
            assert_eq!(kind, ErrorKind::Forbidden);
            assert_eq!(message, "Files is disabled for this course.");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn submissions_ask_for_the_callers_own_records() {
    let server = MockServer::start().await;
    let api = mock_api(&server);

    Mock::given(method("GET"))
        .and(path("/courses/7/students/submissions"))
        .and(query_param("student_ids[]", "self"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "assignment_id": 11, "score": 9.0, "grade": "A"}
        ])))
        .mount(&server)
        .await;

    let value = api.get_submissions(7).await.into_value();
    assert_eq!(value[0]["grade"], "A");
}

#[tokio::test]
async fn discussion_entries_hit_the_nested_topic_path() {
    let server = MockServer::start().await;
    let api = mock_api(&server);

    mount_json(
        &server,
        "/courses/7/discussion_topics/42/entries",
        json!([{"id": 1, "user_name": "sam", "message": "See you at the lab"}]),
    )
    .await;

    let value = api.get_discussion_entries(7, 42).await.into_value();
    assert_eq!(value[0]["user_name"], "sam");
}

#[tokio::test]
async fn unauthorized_is_classified_with_a_credential_message() {
    let server = MockServer::start().await;
    let api = mock_api(&server);

    mount_status(&server, "/courses", 401).await;

    match api.list_courses().await {
        Outcome::Failure { kind, message, .. } => {
            assert_eq!(kind, ErrorKind::Unauthorized);
            assert!(message.contains("Authentication failed"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn no_active_courses_is_empty() {
    let server = MockServer::start().await;
    let api = mock_api(&server);

    mount_json(&server, "/courses", json!([])).await;

    match api.list_courses().await {
        Outcome::Empty { context, .. } => {
            assert_eq!(context, "No active courses found.");
        }
        other => panic!("expected empty, got {other:?}"),
    }
}
