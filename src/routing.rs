//! Course navigation heuristic.
//!
//! Every Canvas course declares a `default_view` saying how its landing
//! page is organized. The heuristic maps that mode to the retrieval
//! operation that will actually return the course content, so an agent
//! looking at a course knows which tool to call next. Pure, no network.

use strum::{Display, EnumString};

use crate::ops;

/// A course's configured landing-page mode.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PresentationMode {
    Modules,
    Wiki,
    Syllabus,
    Assignments,
    /// Any mode we do not special-case (e.g. "feed").
    #[strum(default)]
    Other(String),
}

/// Pick the retrieval operation for a presentation mode.
///
/// Total over the domain: unrecognized modes fall back to modules, which
/// every course has.
pub fn route(mode: &PresentationMode) -> &'static str {
    match mode {
        PresentationMode::Modules => ops::GET_COURSE_MODULES,
        PresentationMode::Wiki => ops::GET_COURSE_HOME_PAGE,
        PresentationMode::Syllabus => ops::GET_COURSE_SYLLABUS,
        PresentationMode::Assignments => ops::GET_ASSIGNMENTS,
        PresentationMode::Other(_) => ops::GET_COURSE_MODULES,
    }
}

/// Route directly from the raw `default_view` field of a course record.
pub fn route_default_view(default_view: Option<&str>) -> &'static str {
    let mode = default_view
        .map(|view| {
            view.parse::<PresentationMode>()
                .unwrap_or_else(|_| PresentationMode::Other(view.to_string()))
        })
        .unwrap_or(PresentationMode::Other(String::new()));
    route(&mode)
}
