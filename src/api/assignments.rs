//! Assignment, submission, and cross-course deadline/grade operations.

use chrono::{Duration, Utc};

use super::{CanvasApi, PAGE_SIZE};
use crate::aggregate::{self, Aggregated};
use crate::client::Query;
use crate::error::Result;
use crate::ops;
use crate::response::Outcome;
use crate::types::{Assignment, Deadline, GradeEntry, Submission};

/// Default look-ahead window for the deadline aggregate.
pub(crate) const DEADLINE_WINDOW_DAYS: i64 = 7;

impl CanvasApi {
    /// Assignments for one course.
    pub async fn get_assignments(&self, course_id: i64) -> Outcome {
        let query = Query::new().pair("per_page", PAGE_SIZE);
        self.run(
            ops::GET_ASSIGNMENTS,
            &format!("/courses/{course_id}/assignments"),
            &query,
        )
        .await
        .and_then_data(ops::GET_ASSIGNMENTS, |assignments: Vec<Assignment>| {
            Outcome::data(ops::GET_ASSIGNMENTS, &assignments)
        })
    }

    /// The caller's own submissions across all assignments of one course.
    pub async fn get_submissions(&self, course_id: i64) -> Outcome {
        let query = Query::new()
            .list("student_ids[]", &["self"])
            .pair("per_page", PAGE_SIZE);
        self.run(
            ops::GET_SUBMISSIONS,
            &format!("/courses/{course_id}/students/submissions"),
            &query,
        )
        .await
        .and_then_data(ops::GET_SUBMISSIONS, |submissions: Vec<Submission>| {
            Outcome::data(ops::GET_SUBMISSIONS, &submissions)
        })
    }

    /// Deadlines across all active courses, soonest first.
    ///
    /// Dated assignments are kept when due within `days_ahead` (default 7)
    /// of now; undated ones are always kept and sort last, since they can
    /// never be ruled out of the window.
    pub async fn get_upcoming_deadlines(&self, days_ahead: Option<i64>) -> Outcome {
        let days = days_ahead.unwrap_or(DEADLINE_WINDOW_DAYS);
        match self.upcoming_deadlines(days).await {
            Ok(agg) if agg.items.is_empty() => Outcome::empty_with_context(
                ops::GET_UPCOMING_DEADLINES,
                aggregate_empty_context(
                    &format!("No deadlines due in the next {days} days"),
                    agg.failed_courses,
                ),
            ),
            Ok(agg) => Outcome::data(
                ops::GET_UPCOMING_DEADLINES,
                &serde_json::json!({
                    "deadlines": agg.items,
                    "failed_courses": agg.failed_courses,
                }),
            ),
            Err(err) => Outcome::from_error(ops::GET_UPCOMING_DEADLINES, err),
        }
    }

    /// Grade standing for every assignment across all active courses.
    pub async fn get_all_grades(&self) -> Outcome {
        match self.all_grades().await {
            Ok(agg) if agg.items.is_empty() => Outcome::empty_with_context(
                ops::GET_ALL_GRADES,
                aggregate_empty_context("No grades posted yet", agg.failed_courses),
            ),
            Ok(agg) => Outcome::data(
                ops::GET_ALL_GRADES,
                &serde_json::json!({
                    "grades": agg.items,
                    "failed_courses": agg.failed_courses,
                }),
            ),
            Err(err) => Outcome::from_error(ops::GET_ALL_GRADES, err),
        }
    }

    pub(crate) async fn upcoming_deadlines(&self, days_ahead: i64) -> Result<Aggregated<Deadline>> {
        let courses = self.active_courses().await?;
        let now = Utc::now();
        let horizon = now + Duration::days(days_ahead);

        let mut agg = aggregate::fan_out(&courses, |course| async move {
            let path = format!("/courses/{}/assignments", course.id);
            let query = Query::new().pair("per_page", PAGE_SIZE);
            let assignments: Vec<Assignment> = self
                .fetch_list(ops::GET_UPCOMING_DEADLINES, &path, &query)
                .await?;
            Ok(assignments
                .into_iter()
                .filter(|assignment| match assignment.due_at {
                    Some(due) => due > now && due <= horizon,
                    None => true,
                })
                .map(|assignment| Deadline::from_assignment(&course, assignment))
                .collect())
        })
        .await?;

        aggregate::sort_by_date(&mut agg.items, |deadline| deadline.due_at);
        Ok(agg)
    }

    pub(crate) async fn all_grades(&self) -> Result<Aggregated<GradeEntry>> {
        let courses = self.active_courses().await?;

        // No sort: upstream assignment order per course, courses in
        // fan-out input order. Stable under re-sort by construction.
        aggregate::fan_out(&courses, |course| async move {
            let path = format!("/courses/{}/assignments", course.id);
            let query = Query::new()
                .list("include[]", &["submission"])
                .pair("per_page", PAGE_SIZE);
            let assignments: Vec<Assignment> = self
                .fetch_list(ops::GET_ALL_GRADES, &path, &query)
                .await?;
            Ok(assignments
                .into_iter()
                .map(|assignment| GradeEntry::from_assignment(&course, assignment))
                .collect())
        })
        .await
    }
}

/// Context line for an aggregate that found nothing, noting skipped
/// courses so a partial outage is never silent.
pub(crate) fn aggregate_empty_context(base: &str, failed_courses: usize) -> String {
    if failed_courses > 0 {
        format!("{base} ({failed_courses} courses could not be checked).")
    } else {
        format!("{base}.")
    }
}
