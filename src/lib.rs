//! Easel: Canvas LMS API toolkit for conversational agents.
//!
//! Wraps the Canvas REST API in a resilient access layer: a bearer-token
//! transport client, a response normalizer that classifies every failure
//! into a closed taxonomy with actionable suggestions, cross-course
//! aggregation (deadlines, grades, calendar, announcements) that tolerates
//! partial failure, and a navigation heuristic that routes an agent to the
//! right retrieval operation for each course.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use easel::api::CanvasApi;
//! use easel::tools::{all_tools, dispatch, ToolArguments};
//!
//! # async fn example() -> easel::error::Result<()> {
//! let api = Arc::new(CanvasApi::from_env()?);
//! let tools = all_tools(api);
//! let courses = dispatch(&tools, "list_courses", ToolArguments::empty()).await;
//! println!("{courses}");
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod ops;
pub mod prelude;
pub mod response;
pub mod routing;
pub mod suggest;
pub mod tools;
pub mod types;
