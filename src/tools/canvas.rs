//! The Canvas tool registry.
//!
//! One tool per retrieval operation, each constructed via [`AgentTool::new`]
//! and returned as `Arc<dyn Tool>`. Handlers convert every outcome into its
//! caller-facing JSON, so a dispatcher never sees a raw error.

use std::sync::Arc;

use crate::api::CanvasApi;
use crate::error::EaselError;
use crate::ops;
use crate::response::Outcome;
use crate::tools::arguments::ToolArguments;
use crate::tools::tool::{AgentTool, Tool};
use crate::tools::types::ToolParameters;

fn course_id_params() -> ToolParameters {
    ToolParameters::object()
        .integer("course_id", "The Canvas course ID", true)
        .build()
}

/// Create the full tool set backed by `api`.
pub fn all_tools(api: Arc<CanvasApi>) -> Vec<Arc<dyn Tool>> {
    vec![
        list_courses(api.clone()),
        get_course_details(api.clone()),
        get_course_syllabus(api.clone()),
        get_course_modules(api.clone()),
        get_course_pages(api.clone()),
        get_course_home_page(api.clone()),
        get_course_files(api.clone()),
        get_assignments(api.clone()),
        get_submissions(api.clone()),
        get_discussion_topics(api.clone()),
        get_discussion_entries(api.clone()),
        get_calendar_events(api.clone()),
        get_recent_announcements(api.clone()),
        get_upcoming_deadlines(api.clone()),
        get_all_grades(api),
    ]
}

/// Execute a named tool from the registry, folding every failure into the
/// structured error object. Nothing crosses this boundary unclassified.
pub async fn dispatch(
    tools: &[Arc<dyn Tool>],
    name: &str,
    args: ToolArguments,
) -> serde_json::Value {
    let Some(tool) = tools.iter().find(|tool| tool.name() == name) else {
        return Outcome::from_error(
            name,
            EaselError::InvalidArgument(format!("unknown tool '{name}'")),
        )
        .into_value();
    };
    match tool.execute(&args).await {
        Ok(value) => value,
        Err(err) => Outcome::from_error(name, err).into_value(),
    }
}

fn list_courses(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::LIST_COURSES,
        "List all active courses for the authenticated user, with the IDs used by every other tool",
        ToolParameters::empty(),
        move |_args| {
            let api = api.clone();
            async move { Ok(api.list_courses().await.into_value()) }
        },
    ))
}

fn get_course_details(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_COURSE_DETAILS,
        "Detailed information about one course, including its syllabus, teachers, term, and a \
         suggested_tool hint for where its content lives",
        course_id_params(),
        move |args| {
            let api = api.clone();
            async move {
                let course_id = args.get_i64("course_id")?;
                Ok(api.get_course_details(course_id).await.into_value())
            }
        },
    ))
}

fn get_course_syllabus(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_COURSE_SYLLABUS,
        "The syllabus content of one course",
        course_id_params(),
        move |args| {
            let api = api.clone();
            async move {
                let course_id = args.get_i64("course_id")?;
                Ok(api.get_course_syllabus(course_id).await.into_value())
            }
        },
    ))
}

fn get_course_modules(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_COURSE_MODULES,
        "Content modules of one course, with the items inside each module",
        course_id_params(),
        move |args| {
            let api = api.clone();
            async move {
                let course_id = args.get_i64("course_id")?;
                Ok(api.get_course_modules(course_id).await.into_value())
            }
        },
    ))
}

fn get_course_pages(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_COURSE_PAGES,
        "Wiki pages of one course (titles and URLs)",
        course_id_params(),
        move |args| {
            let api = api.clone();
            async move {
                let course_id = args.get_i64("course_id")?;
                Ok(api.get_course_pages(course_id).await.into_value())
            }
        },
    ))
}

fn get_course_home_page(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_COURSE_HOME_PAGE,
        "The designated front page of one course, body included",
        course_id_params(),
        move |args| {
            let api = api.clone();
            async move {
                let course_id = args.get_i64("course_id")?;
                Ok(api.get_course_home_page(course_id).await.into_value())
            }
        },
    ))
}

fn get_course_files(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_COURSE_FILES,
        "Files uploaded to one course, with download URLs",
        course_id_params(),
        move |args| {
            let api = api.clone();
            async move {
                let course_id = args.get_i64("course_id")?;
                Ok(api.get_course_files(course_id).await.into_value())
            }
        },
    ))
}

fn get_assignments(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_ASSIGNMENTS,
        "Assignments of one course, with due dates, points, and submission status",
        course_id_params(),
        move |args| {
            let api = api.clone();
            async move {
                let course_id = args.get_i64("course_id")?;
                Ok(api.get_assignments(course_id).await.into_value())
            }
        },
    ))
}

fn get_submissions(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_SUBMISSIONS,
        "Your own submissions across all assignments of one course",
        course_id_params(),
        move |args| {
            let api = api.clone();
            async move {
                let course_id = args.get_i64("course_id")?;
                Ok(api.get_submissions(course_id).await.into_value())
            }
        },
    ))
}

fn get_discussion_topics(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_DISCUSSION_TOPICS,
        "Discussion topics of one course",
        course_id_params(),
        move |args| {
            let api = api.clone();
            async move {
                let course_id = args.get_i64("course_id")?;
                Ok(api.get_discussion_topics(course_id).await.into_value())
            }
        },
    ))
}

fn get_discussion_entries(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_DISCUSSION_ENTRIES,
        "Replies inside one discussion topic",
        ToolParameters::object()
            .integer("course_id", "The Canvas course ID", true)
            .integer("topic_id", "The discussion topic ID", true)
            .build(),
        move |args| {
            let api = api.clone();
            async move {
                let course_id = args.get_i64("course_id")?;
                let topic_id = args.get_i64("topic_id")?;
                Ok(api
                    .get_discussion_entries(course_id, topic_id)
                    .await
                    .into_value())
            }
        },
    ))
}

fn get_calendar_events(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_CALENDAR_EVENTS,
        "Calendar events across all active courses, earliest first",
        ToolParameters::object()
            .integer(
                "days_ahead",
                "How many days ahead to look (default: 7)",
                false,
            )
            .build(),
        move |args| {
            let api = api.clone();
            async move {
                let days_ahead = args.get_i64_opt("days_ahead")?;
                Ok(api.get_calendar_events(days_ahead).await.into_value())
            }
        },
    ))
}

fn get_recent_announcements(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_RECENT_ANNOUNCEMENTS,
        "Announcements across all active courses, newest first",
        ToolParameters::object()
            .integer(
                "days_back",
                "How many days back to look (default: 14)",
                false,
            )
            .build(),
        move |args| {
            let api = api.clone();
            async move {
                let days_back = args.get_i64_opt("days_back")?;
                Ok(api.get_recent_announcements(days_back).await.into_value())
            }
        },
    ))
}

fn get_upcoming_deadlines(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_UPCOMING_DEADLINES,
        "Upcoming assignment deadlines across all active courses, soonest first",
        ToolParameters::object()
            .integer(
                "days_ahead",
                "How many days ahead to look (default: 7)",
                false,
            )
            .build(),
        move |args| {
            let api = api.clone();
            async move {
                let days_ahead = args.get_i64_opt("days_ahead")?;
                Ok(api.get_upcoming_deadlines(days_ahead).await.into_value())
            }
        },
    ))
}

fn get_all_grades(api: Arc<CanvasApi>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        ops::GET_ALL_GRADES,
        "Grade standing for every assignment across all active courses",
        ToolParameters::empty(),
        move |_args| {
            let api = api.clone();
            async move { Ok(api.get_all_grades().await.into_value()) }
        },
    ))
}
