//! Course listing and detail operations.

use serde::Serialize;

use super::{CanvasApi, PAGE_SIZE};
use crate::client::Query;
use crate::error::Result;
use crate::ops;
use crate::response::Outcome;
use crate::routing;
use crate::types::{Course, CourseDetail};

/// Course detail annotated with the retrieval operation to try next,
/// per the navigation heuristic.
#[derive(Debug, Serialize)]
struct AnnotatedCourse {
    #[serde(flatten)]
    course: CourseDetail,
    suggested_tool: &'static str,
}

impl CanvasApi {
    /// All active courses for the authenticated user.
    pub async fn list_courses(&self) -> Outcome {
        let query = Query::new()
            .pair("enrollment_state", "active")
            .list("include[]", &["term", "total_students", "teachers"]);
        self.run(ops::LIST_COURSES, "/courses", &query)
            .await
            .and_then_data(ops::LIST_COURSES, |courses: Vec<Course>| {
                Outcome::data(ops::LIST_COURSES, &courses)
            })
    }

    /// Full course detail, including the syllabus body and a
    /// `suggested_tool` hint derived from the course's `default_view`.
    pub async fn get_course_details(&self, course_id: i64) -> Outcome {
        let query = Query::new().list(
            "include[]",
            &["syllabus_body", "term", "teachers", "total_students"],
        );
        self.run(
            ops::GET_COURSE_DETAILS,
            &format!("/courses/{course_id}"),
            &query,
        )
        .await
        .and_then_data(ops::GET_COURSE_DETAILS, |course: CourseDetail| {
            let suggested_tool = routing::route_default_view(course.default_view.as_deref());
            Outcome::data(
                ops::GET_COURSE_DETAILS,
                &AnnotatedCourse {
                    course,
                    suggested_tool,
                },
            )
        })
    }

    /// Syllabus content for one course. Canvas serves the syllabus as a
    /// field of the course detail, not as its own endpoint.
    pub async fn get_course_syllabus(&self, course_id: i64) -> Outcome {
        let query = Query::new().list("include[]", &["syllabus_body"]);
        self.run(
            ops::GET_COURSE_SYLLABUS,
            &format!("/courses/{course_id}"),
            &query,
        )
        .await
        .and_then_data(ops::GET_COURSE_SYLLABUS, |course: CourseDetail| {
            match course.syllabus_body {
                Some(body) if !body.trim().is_empty() => Outcome::data(
                    ops::GET_COURSE_SYLLABUS,
                    &serde_json::json!({
                        "course_id": course.id,
                        "course_name": course.name,
                        "syllabus_body": body,
                    }),
                ),
                _ => Outcome::empty(ops::GET_COURSE_SYLLABUS),
            }
        })
    }

    /// Typed active-course list feeding the aggregation fan-out.
    pub(crate) async fn active_courses(&self) -> Result<Vec<Course>> {
        let query = Query::new()
            .pair("enrollment_state", "active")
            .pair("per_page", PAGE_SIZE);
        self.fetch_list(ops::LIST_COURSES, "/courses", &query).await
    }
}
