//! Tests for the tool registry and the dispatch boundary.

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use easel::api::CanvasApi;
use easel::tools::{all_tools, dispatch, ToolArguments};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::MockServer;

use common::{mock_api, mount_json, mount_status};

fn tools_for(api: CanvasApi) -> Vec<Arc<dyn easel::tools::Tool>> {
    all_tools(Arc::new(api))
}

#[tokio::test]
async fn registry_exposes_every_operation_exactly_once() {
    let server = MockServer::start().await;
    let tools = tools_for(mock_api(&server));

    let names: Vec<&str> = tools.iter().map(|tool| tool.name()).collect();
    let unique: HashSet<&str> = names.iter().copied().collect();

    assert_eq!(names.len(), 15);
    assert_eq!(unique.len(), names.len(), "duplicate tool names");
    for op in [
        "list_courses",
        "get_course_details",
        "get_course_syllabus",
        "get_course_modules",
        "get_course_pages",
        "get_course_home_page",
        "get_course_files",
        "get_assignments",
        "get_submissions",
        "get_discussion_topics",
        "get_discussion_entries",
        "get_calendar_events",
        "get_recent_announcements",
        "get_upcoming_deadlines",
        "get_all_grades",
    ] {
        assert!(unique.contains(op), "missing tool {op}");
    }
}

#[tokio::test]
async fn every_tool_has_an_object_schema_and_a_description() {
    let server = MockServer::start().await;
    let tools = tools_for(mock_api(&server));

    for tool in &tools {
        let schema = &tool.parameters().schema;
        assert_eq!(schema["type"], "object", "{}", tool.name());
        assert!(schema["properties"].is_object(), "{}", tool.name());
        assert!(!tool.description().is_empty(), "{}", tool.name());
    }
}

#[tokio::test]
async fn dispatch_runs_a_tool_end_to_end() {
    let server = MockServer::start().await;
    let tools = tools_for(mock_api(&server));

    mount_json(
        &server,
        "/courses",
        json!([{"id": 1, "name": "Algorithms", "course_code": "ALG101"}]),
    )
    .await;

    let value = dispatch(&tools, "list_courses", ToolArguments::empty()).await;
    assert_eq!(value[0]["name"], "Algorithms");
}

#[tokio::test]
async fn missing_required_argument_becomes_a_structured_error() {
    let server = MockServer::start().await;
    let tools = tools_for(mock_api(&server));

    let value = dispatch(&tools, "get_assignments", ToolArguments::empty()).await;

    assert_eq!(value["error"], "unknown");
    assert!(value["message"]
        .as_str()
        .unwrap()
        .contains("missing required argument 'course_id'"));
}

#[tokio::test]
async fn mistyped_optional_argument_becomes_a_structured_error() {
    let server = MockServer::start().await;
    let tools = tools_for(mock_api(&server));

    let args = ToolArguments::new(json!({"days_ahead": "next week"}));
    let value = dispatch(&tools, "get_upcoming_deadlines", args).await;

    assert_eq!(value["error"], "unknown");
    assert!(value["message"].as_str().unwrap().contains("days_ahead"));
}

#[tokio::test]
async fn unknown_tool_name_becomes_a_structured_error() {
    let server = MockServer::start().await;
    let tools = tools_for(mock_api(&server));

    let value = dispatch(&tools, "post_grades", ToolArguments::empty()).await;

    assert_eq!(value["error"], "unknown");
    assert!(value["message"].as_str().unwrap().contains("post_grades"));
}

#[tokio::test]
async fn upstream_failures_come_back_as_error_objects_not_panics() {
    let server = MockServer::start().await;
    let tools = tools_for(mock_api(&server));

    mount_status(&server, "/courses/9/files", 403).await;

    let args = ToolArguments::new(json!({"course_id": 9}));
    let value = dispatch(&tools, "get_course_files", args).await;

    assert_eq!(value["error"], "forbidden");
    assert_eq!(value["message"], "Files is disabled for this course.");
    assert_eq!(
        value["suggestions"],
        json!(["get_course_modules", "get_course_pages"])
    );
}
