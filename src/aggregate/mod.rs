//! Cross-course aggregation engine.
//!
//! Multi-course operations issue one request per course, absorb individual
//! course failures, and merge the survivors into a single sorted view. An
//! aggregate fails as a whole only when every course in scope fails, so an
//! all-failure is never mistaken for "no items exist".

use std::future::Future;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::{EaselError, Result};
use crate::types::Course;

/// Merged result of a fan-out: the items plus how many courses were
/// skipped on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregated<T> {
    pub items: Vec<T>,
    pub failed_courses: usize,
}

/// Run `fetch` once per course and merge the results.
///
/// All requests are launched together and awaited together; a slow or
/// failing course cannot block or poison the others. Per-course buffers
/// come back in input order (`join_all` preserves it), so the caller's
/// stable sort never depends on completion timing for tie-breaking.
pub async fn fan_out<T, F, Fut>(courses: &[Course], fetch: F) -> Result<Aggregated<T>>
where
    F: Fn(Course) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let results =
        futures::future::join_all(courses.iter().map(|course| fetch(course.clone()))).await;

    let mut items = Vec::new();
    let mut failed = 0usize;
    for (course, result) in courses.iter().zip(results) {
        match result {
            Ok(mut batch) => items.append(&mut batch),
            Err(err) => {
                warn!(course_id = course.id, error = %err, "skipping course in aggregation");
                failed += 1;
            }
        }
    }

    if !courses.is_empty() && failed == courses.len() {
        return Err(EaselError::AllCoursesFailed(failed));
    }

    Ok(Aggregated {
        items,
        failed_courses: failed,
    })
}

/// Stable ascending sort by an optional date key, dateless items last.
pub fn sort_by_date<T, K>(items: &mut [T], key: K)
where
    K: Fn(&T) -> Option<DateTime<Utc>>,
{
    items.sort_by_key(|item| (key(item).is_none(), key(item)));
}

/// Stable descending sort by an optional date key, dateless items still
/// last.
pub fn sort_by_date_desc<T, K>(items: &mut [T], key: K)
where
    K: Fn(&T) -> Option<DateTime<Utc>>,
{
    items.sort_by_key(|item| (key(item).is_none(), key(item).map(std::cmp::Reverse)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Option<DateTime<Utc>> {
        Some(s.parse().unwrap())
    }

    #[test]
    fn sort_by_date_puts_dateless_items_last() {
        let mut items = vec![
            ("b", date("2024-09-10T00:00:00Z")),
            ("none", None),
            ("a", date("2024-09-01T00:00:00Z")),
        ];
        sort_by_date(&mut items, |item| item.1);
        let order: Vec<&str> = items.iter().map(|item| item.0).collect();
        assert_eq!(order, ["a", "b", "none"]);
    }

    #[test]
    fn sort_by_date_is_idempotent() {
        let mut items = vec![
            ("a", date("2024-09-01T00:00:00Z")),
            ("b", date("2024-09-01T00:00:00Z")),
            ("c", date("2024-09-10T00:00:00Z")),
            ("none", None),
        ];
        sort_by_date(&mut items, |item| item.1);
        let first_pass = items.clone();
        sort_by_date(&mut items, |item| item.1);
        assert_eq!(items, first_pass);
    }

    #[test]
    fn sort_by_date_desc_orders_newest_first() {
        let mut items = vec![
            ("old", date("2024-09-01T00:00:00Z")),
            ("none", None),
            ("new", date("2024-09-10T00:00:00Z")),
        ];
        sort_by_date_desc(&mut items, |item| item.1);
        let order: Vec<&str> = items.iter().map(|item| item.0).collect();
        assert_eq!(order, ["new", "old", "none"]);
    }
}
