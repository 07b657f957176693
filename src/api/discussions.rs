//! Discussion and announcement operations.

use chrono::{Duration, Utc};

use super::assignments::aggregate_empty_context;
use super::{CanvasApi, PAGE_SIZE};
use crate::aggregate::{self, Aggregated};
use crate::client::Query;
use crate::error::Result;
use crate::ops;
use crate::response::Outcome;
use crate::types::{Announcement, AnnouncementItem, DiscussionEntry, DiscussionTopic};

/// Default look-back window for the announcement aggregate.
pub(crate) const ANNOUNCEMENT_WINDOW_DAYS: i64 = 14;

impl CanvasApi {
    /// Discussion topics for one course.
    pub async fn get_discussion_topics(&self, course_id: i64) -> Outcome {
        let query = Query::new().pair("per_page", PAGE_SIZE);
        self.run(
            ops::GET_DISCUSSION_TOPICS,
            &format!("/courses/{course_id}/discussion_topics"),
            &query,
        )
        .await
        .and_then_data(ops::GET_DISCUSSION_TOPICS, |topics: Vec<DiscussionTopic>| {
            Outcome::data(ops::GET_DISCUSSION_TOPICS, &topics)
        })
    }

    /// Replies inside one discussion topic.
    pub async fn get_discussion_entries(&self, course_id: i64, topic_id: i64) -> Outcome {
        let query = Query::new().pair("per_page", PAGE_SIZE);
        self.run(
            ops::GET_DISCUSSION_ENTRIES,
            &format!("/courses/{course_id}/discussion_topics/{topic_id}/entries"),
            &query,
        )
        .await
        .and_then_data(
            ops::GET_DISCUSSION_ENTRIES,
            |entries: Vec<DiscussionEntry>| Outcome::data(ops::GET_DISCUSSION_ENTRIES, &entries),
        )
    }

    /// Announcements across all active courses, newest first.
    pub async fn get_recent_announcements(&self, days_back: Option<i64>) -> Outcome {
        let days = days_back.unwrap_or(ANNOUNCEMENT_WINDOW_DAYS);
        match self.recent_announcements(days).await {
            Ok(agg) if agg.items.is_empty() => Outcome::empty_with_context(
                ops::GET_RECENT_ANNOUNCEMENTS,
                aggregate_empty_context(
                    &format!("No announcements in the last {days} days"),
                    agg.failed_courses,
                ),
            ),
            Ok(agg) => Outcome::data(
                ops::GET_RECENT_ANNOUNCEMENTS,
                &serde_json::json!({
                    "announcements": agg.items,
                    "failed_courses": agg.failed_courses,
                }),
            ),
            Err(err) => Outcome::from_error(ops::GET_RECENT_ANNOUNCEMENTS, err),
        }
    }

    pub(crate) async fn recent_announcements(
        &self,
        days_back: i64,
    ) -> Result<Aggregated<AnnouncementItem>> {
        let courses = self.active_courses().await?;
        let end = Utc::now();
        let start = end - Duration::days(days_back);
        let start_date = start.format("%Y-%m-%d").to_string();
        let end_date = end.format("%Y-%m-%d").to_string();

        let mut agg = aggregate::fan_out(&courses, |course| {
            let start_date = start_date.clone();
            let end_date = end_date.clone();
            async move {
                let query = Query::new()
                    .pair("context_codes[]", format!("course_{}", course.id))
                    .pair("start_date", start_date)
                    .pair("end_date", end_date)
                    .pair("per_page", PAGE_SIZE);
                let announcements: Vec<Announcement> = self
                    .fetch_list(ops::GET_RECENT_ANNOUNCEMENTS, "/announcements", &query)
                    .await?;
                Ok(announcements
                    .into_iter()
                    .map(|announcement| AnnouncementItem::from_announcement(&course, announcement))
                    .collect())
            }
        })
        .await?;

        aggregate::sort_by_date_desc(&mut agg.items, |announcement| announcement.posted_at);
        Ok(agg)
    }
}
