//! Operation identifiers shared by the classifier, suggestion policy,
//! navigation heuristic, and tool registry.

pub const LIST_COURSES: &str = "list_courses";
pub const GET_COURSE_DETAILS: &str = "get_course_details";
pub const GET_COURSE_SYLLABUS: &str = "get_course_syllabus";
pub const GET_COURSE_MODULES: &str = "get_course_modules";
pub const GET_COURSE_PAGES: &str = "get_course_pages";
pub const GET_COURSE_HOME_PAGE: &str = "get_course_home_page";
pub const GET_COURSE_FILES: &str = "get_course_files";
pub const GET_ASSIGNMENTS: &str = "get_assignments";
pub const GET_SUBMISSIONS: &str = "get_submissions";
pub const GET_DISCUSSION_TOPICS: &str = "get_discussion_topics";
pub const GET_DISCUSSION_ENTRIES: &str = "get_discussion_entries";
pub const GET_CALENDAR_EVENTS: &str = "get_calendar_events";
pub const GET_RECENT_ANNOUNCEMENTS: &str = "get_recent_announcements";
pub const GET_UPCOMING_DEADLINES: &str = "get_upcoming_deadlines";
pub const GET_ALL_GRADES: &str = "get_all_grades";
