//! Calendar, announcement, and discussion records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::course::Course;

/// A calendar event from `GET /calendar_events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// An announcement from `GET /announcements` (discussion-topic shaped).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// A discussion topic from `GET /courses/:id/discussion_topics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionTopic {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discussion_subentry_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// A reply inside a discussion topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionEntry {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Aggregated item: one calendar event with its course attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    pub course_id: i64,
    pub course_name: String,
    pub event_id: i64,
    pub title: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

impl EventItem {
    pub fn from_event(course: &Course, event: CalendarEvent) -> Self {
        Self {
            course_id: course.id,
            course_name: course.display_name(),
            event_id: event.id,
            title: event.title,
            start_at: event.start_at,
            end_at: event.end_at,
            location_name: event.location_name,
            html_url: event.html_url,
        }
    }
}

/// Aggregated item: one announcement with its course attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementItem {
    pub course_id: i64,
    pub course_name: String,
    pub announcement_id: i64,
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

impl AnnouncementItem {
    pub fn from_announcement(course: &Course, announcement: Announcement) -> Self {
        Self {
            course_id: course.id,
            course_name: course.display_name(),
            announcement_id: announcement.id,
            title: announcement.title,
            message: announcement.message,
            posted_at: announcement.posted_at,
            html_url: announcement.html_url,
        }
    }
}
