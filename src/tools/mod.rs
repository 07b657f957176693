//! Caller-facing tool surface.
//!
//! Thin adapters around the API layer: each Canvas operation becomes a
//! named tool with a JSON-Schema parameter definition, ready for whatever
//! dispatch mechanism (MCP server, agent loop) the embedding process uses.

pub mod arguments;
pub mod canvas;
pub mod tool;
pub mod types;

pub use arguments::ToolArguments;
pub use canvas::{all_tools, dispatch};
pub use tool::{AgentTool, Tool};
pub use types::ToolParameters;
