//! Assignment, submission, and grade records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::course::Course;

/// An assignment from `GET /courses/:id/assignments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_possible: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submission_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_submitted_submissions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Present only when requested with `include[]=submission`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission: Option<Submission>,
}

/// The caller's own submission for an assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<bool>,
}

/// Aggregated item: one deadline with its course attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deadline {
    pub course_id: i64,
    pub course_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    pub assignment_id: i64,
    pub assignment_name: String,
    pub due_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_possible: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

impl Deadline {
    pub fn from_assignment(course: &Course, assignment: Assignment) -> Self {
        Self {
            course_id: course.id,
            course_name: course.display_name(),
            course_code: course.course_code.clone(),
            assignment_id: assignment.id,
            assignment_name: assignment.name.unwrap_or_else(|| "(untitled)".to_string()),
            due_at: assignment.due_at,
            points_possible: assignment.points_possible,
            html_url: assignment.html_url,
        }
    }
}

/// Aggregated item: one assignment's grade standing within a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEntry {
    pub course_id: i64,
    pub course_name: String,
    pub assignment_id: i64,
    pub assignment_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_possible: Option<f64>,
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_state: Option<String>,
}

impl GradeEntry {
    pub fn from_assignment(course: &Course, assignment: Assignment) -> Self {
        let submission = assignment.submission.unwrap_or_default();
        Self {
            course_id: course.id,
            course_name: course.display_name(),
            assignment_id: assignment.id,
            assignment_name: assignment.name.unwrap_or_else(|| "(untitled)".to_string()),
            points_possible: assignment.points_possible,
            score: submission.score,
            grade: submission.grade,
            submitted_at: submission.submitted_at,
            workflow_state: submission.workflow_state,
        }
    }
}
