//! Cross-course calendar aggregation.

use chrono::{Duration, Utc};

use super::assignments::aggregate_empty_context;
use super::{CanvasApi, PAGE_SIZE};
use crate::aggregate::{self, Aggregated};
use crate::client::Query;
use crate::error::Result;
use crate::ops;
use crate::response::Outcome;
use crate::types::{CalendarEvent, EventItem};

/// Default look-ahead window for the calendar aggregate.
pub(crate) const EVENT_WINDOW_DAYS: i64 = 7;

impl CanvasApi {
    /// Calendar events across all active courses, earliest first.
    pub async fn get_calendar_events(&self, days_ahead: Option<i64>) -> Outcome {
        let days = days_ahead.unwrap_or(EVENT_WINDOW_DAYS);
        match self.calendar_events(days).await {
            Ok(agg) if agg.items.is_empty() => Outcome::empty_with_context(
                ops::GET_CALENDAR_EVENTS,
                aggregate_empty_context(
                    &format!("No calendar events in the next {days} days"),
                    agg.failed_courses,
                ),
            ),
            Ok(agg) => Outcome::data(
                ops::GET_CALENDAR_EVENTS,
                &serde_json::json!({
                    "events": agg.items,
                    "failed_courses": agg.failed_courses,
                }),
            ),
            Err(err) => Outcome::from_error(ops::GET_CALENDAR_EVENTS, err),
        }
    }

    pub(crate) async fn calendar_events(&self, days_ahead: i64) -> Result<Aggregated<EventItem>> {
        let courses = self.active_courses().await?;
        let start = Utc::now();
        let end = start + Duration::days(days_ahead);
        let start_date = start.format("%Y-%m-%d").to_string();
        let end_date = end.format("%Y-%m-%d").to_string();

        let mut agg = aggregate::fan_out(&courses, |course| {
            let start_date = start_date.clone();
            let end_date = end_date.clone();
            async move {
                let query = Query::new()
                    .pair("type", "event")
                    .pair("context_codes[]", format!("course_{}", course.id))
                    .pair("start_date", start_date)
                    .pair("end_date", end_date)
                    .pair("per_page", PAGE_SIZE);
                let events: Vec<CalendarEvent> = self
                    .fetch_list(ops::GET_CALENDAR_EVENTS, "/calendar_events", &query)
                    .await?;
                Ok(events
                    .into_iter()
                    .map(|event| EventItem::from_event(&course, event))
                    .collect())
            }
        })
        .await?;

        aggregate::sort_by_date(&mut agg.items, |event| event.start_at);
        Ok(agg)
    }
}
