//! Per-operation suggestion policy.
//!
//! Static data consulted by the classifier when a retrieval operation comes
//! back empty, forbidden, or missing: each operation maps to the alternate
//! operations an agent should try next, so a dead end always points at a
//! working path. Data, not behavior.

use crate::ops;

/// Alternate operations worth trying when `op` yields nothing.
pub fn alternates(op: &str) -> &'static [&'static str] {
    match op {
        ops::GET_COURSE_FILES => &[ops::GET_COURSE_MODULES, ops::GET_COURSE_PAGES],
        ops::GET_COURSE_MODULES => &[ops::GET_COURSE_FILES, ops::GET_ASSIGNMENTS],
        ops::GET_COURSE_PAGES => &[ops::GET_COURSE_MODULES, ops::GET_COURSE_HOME_PAGE],
        ops::GET_COURSE_HOME_PAGE => &[ops::GET_COURSE_MODULES],
        ops::GET_COURSE_SYLLABUS => &[ops::GET_COURSE_HOME_PAGE, ops::GET_COURSE_MODULES],
        ops::GET_ASSIGNMENTS => &[ops::GET_COURSE_MODULES],
        ops::GET_SUBMISSIONS => &[ops::GET_ASSIGNMENTS],
        ops::GET_DISCUSSION_TOPICS => &[ops::GET_RECENT_ANNOUNCEMENTS],
        ops::GET_DISCUSSION_ENTRIES => &[ops::GET_DISCUSSION_TOPICS],
        ops::GET_RECENT_ANNOUNCEMENTS => &[ops::GET_DISCUSSION_TOPICS],
        ops::GET_CALENDAR_EVENTS => &[ops::GET_UPCOMING_DEADLINES],
        ops::GET_UPCOMING_DEADLINES => &[ops::GET_ASSIGNMENTS],
        ops::GET_ALL_GRADES => &[ops::GET_ASSIGNMENTS],
        _ => &[],
    }
}

/// Human-readable resource name used in failure messages.
pub fn resource_name(op: &str) -> &'static str {
    match op {
        ops::LIST_COURSES => "Course list",
        ops::GET_COURSE_DETAILS | ops::GET_COURSE_SYLLABUS => "Course",
        ops::GET_COURSE_MODULES => "Modules",
        ops::GET_COURSE_PAGES => "Pages",
        ops::GET_COURSE_HOME_PAGE => "Home page",
        ops::GET_COURSE_FILES => "Files",
        ops::GET_ASSIGNMENTS => "Assignments",
        ops::GET_SUBMISSIONS => "Submissions",
        ops::GET_DISCUSSION_TOPICS => "Discussions",
        ops::GET_DISCUSSION_ENTRIES => "Discussion entries",
        ops::GET_CALENDAR_EVENTS => "Calendar events",
        ops::GET_RECENT_ANNOUNCEMENTS => "Announcements",
        ops::GET_UPCOMING_DEADLINES => "Deadlines",
        ops::GET_ALL_GRADES => "Grades",
        _ => "Resource",
    }
}

/// Context line attached to an `Empty` outcome.
pub fn empty_context(op: &str) -> String {
    match op {
        ops::LIST_COURSES => "No active courses found.".to_string(),
        ops::GET_COURSE_SYLLABUS => "This course has no syllabus content.".to_string(),
        _ => format!(
            "No {} found for this course.",
            resource_name(op).to_lowercase()
        ),
    }
}
