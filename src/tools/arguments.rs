//! Typed access to tool-call arguments.

use crate::error::{EaselError, Result};

/// Arguments passed to a tool invocation: a JSON object, with typed
/// accessors that turn missing or mistyped fields into classified errors
/// instead of panics.
#[derive(Debug, Clone)]
pub struct ToolArguments(serde_json::Value);

impl Default for ToolArguments {
    fn default() -> Self {
        Self::empty()
    }
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn empty() -> Self {
        Self(serde_json::json!({}))
    }

    /// Required integer argument.
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        match self.0.get(key) {
            Some(value) => value.as_i64().ok_or_else(|| {
                EaselError::InvalidArgument(format!("'{key}' must be an integer"))
            }),
            None => Err(EaselError::InvalidArgument(format!(
                "missing required argument '{key}'"
            ))),
        }
    }

    /// Optional integer argument; absent means `None`, mistyped is still
    /// an error.
    pub fn get_i64_opt(&self, key: &str) -> Result<Option<i64>> {
        match self.0.get(key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => value.as_i64().map(Some).ok_or_else(|| {
                EaselError::InvalidArgument(format!("'{key}' must be an integer"))
            }),
        }
    }

    /// Required string argument.
    pub fn get_str(&self, key: &str) -> Result<&str> {
        match self.0.get(key) {
            Some(value) => value
                .as_str()
                .ok_or_else(|| EaselError::InvalidArgument(format!("'{key}' must be a string"))),
            None => Err(EaselError::InvalidArgument(format!(
                "missing required argument '{key}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_required_integer_is_an_invalid_argument() {
        let args = ToolArguments::empty();
        let err = args.get_i64("course_id").unwrap_err();
        assert!(matches!(err, EaselError::InvalidArgument(_)));
        assert!(err.to_string().contains("course_id"));
    }

    #[test]
    fn mistyped_optional_integer_is_rejected() {
        let args = ToolArguments::new(json!({"days_ahead": "seven"}));
        assert!(args.get_i64_opt("days_ahead").is_err());
    }

    #[test]
    fn absent_optional_integer_is_none() {
        let args = ToolArguments::empty();
        assert_eq!(args.get_i64_opt("days_ahead").unwrap(), None);
    }

    #[test]
    fn present_values_come_back_typed() {
        let args = ToolArguments::new(json!({"course_id": 42, "days_ahead": 3}));
        assert_eq!(args.get_i64("course_id").unwrap(), 42);
        assert_eq!(args.get_i64_opt("days_ahead").unwrap(), Some(3));
    }
}
