//! Serde models of Canvas entities and the aggregated cross-course items.
//!
//! Deserializing an upstream response through these types and serializing
//! it back out is what trims Canvas's sprawling records down to the fields
//! an agent needs. Unknown upstream fields are dropped on the floor.

pub mod activity;
pub mod assignment;
pub mod content;
pub mod course;

pub use activity::{
    Announcement, AnnouncementItem, CalendarEvent, DiscussionEntry, DiscussionTopic, EventItem,
};
pub use assignment::{Assignment, Deadline, GradeEntry, Submission};
pub use content::{FileEntry, Module, ModuleItem, Page};
pub use course::{Course, CourseDetail, Teacher, Term};
