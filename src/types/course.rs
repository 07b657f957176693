//! Course records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The enrollment term a course belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Term {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A course summary row from `GET /courses`.
///
/// Also serves as the fan-out input for aggregation: an immutable snapshot
/// of id, name, code, and presentation mode, one instance per course per
/// call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_term: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_students: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_view: Option<String>,
}

impl Course {
    /// Display name, falling back to the course code for access-restricted
    /// courses that omit `name`.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.course_code.clone())
            .unwrap_or_else(|| format!("course {}", self.id))
    }
}

/// A teacher attached to a course detail response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Full course detail from `GET /courses/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDetail {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_term: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_students: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_view: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_syllabus: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllabus_body: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teachers: Vec<Teacher>,
}
