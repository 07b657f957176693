//! Convenience re-exports for common use.

pub use crate::api::CanvasApi;
pub use crate::client::{CanvasClient, Query, RawResponse};
pub use crate::config::CanvasConfig;
pub use crate::error::{EaselError, ErrorKind, Result};
pub use crate::response::Outcome;
pub use crate::routing::PresentationMode;
pub use crate::tools::{all_tools, dispatch, AgentTool, Tool, ToolArguments, ToolParameters};
