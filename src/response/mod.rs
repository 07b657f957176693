//! Response normalization and error classification.
//!
//! Canvas is loose about emptiness (`null` vs `[]` vs missing) and every
//! operation needs the same failure vocabulary, so all status and payload
//! interpretation is centralized here: one pure mapping from a raw
//! response to a closed [`Outcome`]. No truthiness checks leak into the
//! individual operations.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::RawResponse;
use crate::error::{EaselError, ErrorKind, Result};
use crate::suggest;

/// Classified result of one Canvas request. Exactly one variant holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 2xx with a usable payload.
    Data(Value),
    /// 2xx but nothing there (`null` body or empty collection).
    Empty {
        context: String,
        suggestions: Vec<String>,
    },
    /// Classified failure with agent-facing guidance.
    Failure {
        kind: ErrorKind,
        message: String,
        suggestions: Vec<String>,
    },
}

/// Map a non-success status to its typed error. `None` for 2xx.
pub fn status_error(op: &str, raw: &RawResponse) -> Option<EaselError> {
    match raw.status {
        200..=299 => None,
        401 => Some(EaselError::Unauthorized),
        403 => Some(EaselError::Forbidden {
            resource: suggest::resource_name(op).to_string(),
        }),
        404 => Some(EaselError::NotFound {
            resource: suggest::resource_name(op).to_string(),
        }),
        429 => Some(EaselError::RateLimited),
        status => Some(EaselError::Api {
            status,
            message: upstream_message(raw)
                .unwrap_or_else(|| format!("request failed with status {status}")),
        }),
    }
}

/// Classify a raw response into an [`Outcome`]. Pure: operates only on the
/// already-received status and body.
pub fn classify(op: &str, raw: &RawResponse) -> Outcome {
    if let Some(err) = status_error(op, raw) {
        return Outcome::from_error(op, err);
    }
    match &raw.body {
        Some(body) if !is_empty_payload(body) => Outcome::Data(body.clone()),
        _ => Outcome::empty(op),
    }
}

/// `null` and `[]` both mean "nothing here" upstream. A `{}` object is
/// still data (some endpoints legitimately return bare objects).
fn is_empty_payload(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Best-effort extraction of the error text Canvas puts in failure bodies.
fn upstream_message(raw: &RawResponse) -> Option<String> {
    let body = raw.body.as_ref()?;
    body.get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|first| first.get("message"))
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn owned(suggestions: &[&str]) -> Vec<String> {
    suggestions.iter().map(|s| s.to_string()).collect()
}

impl Outcome {
    /// Success payload from any serializable value.
    pub fn data<T: Serialize>(op: &str, payload: &T) -> Outcome {
        match serde_json::to_value(payload) {
            Ok(value) => Outcome::Data(value),
            Err(err) => Outcome::from_error(op, err.into()),
        }
    }

    /// Empty outcome with the operation's policy context and suggestions.
    pub fn empty(op: &str) -> Outcome {
        Outcome::Empty {
            context: suggest::empty_context(op),
            suggestions: owned(suggest::alternates(op)),
        }
    }

    /// Empty outcome with a caller-supplied context line.
    pub fn empty_with_context(op: &str, context: impl Into<String>) -> Outcome {
        Outcome::Empty {
            context: context.into(),
            suggestions: owned(suggest::alternates(op)),
        }
    }

    /// Terminate an error into a classified failure. Alternate operations
    /// are attached only where they help (forbidden or missing resources).
    pub fn from_error(op: &str, err: EaselError) -> Outcome {
        let kind = err.kind();
        let suggestions = match kind {
            ErrorKind::Forbidden | ErrorKind::NotFound => owned(suggest::alternates(op)),
            _ => Vec::new(),
        };
        Outcome::Failure {
            kind,
            message: err.to_string(),
            suggestions,
        }
    }

    /// Deserialize a `Data` payload and rebuild the outcome from the typed
    /// value. `Empty` and `Failure` pass through untouched; a payload that
    /// does not match the expected shape becomes a failure, never a panic.
    pub fn and_then_data<T, F>(self, op: &str, f: F) -> Outcome
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> Outcome,
    {
        match self {
            Outcome::Data(value) => match serde_json::from_value::<T>(value) {
                Ok(typed) => f(typed),
                Err(err) => Outcome::from_error(op, err.into()),
            },
            other => other,
        }
    }

    /// The caller-facing JSON: the payload itself on success, a structured
    /// `{error, message, suggestions}` object otherwise.
    pub fn into_value(self) -> Value {
        match self {
            Outcome::Data(value) => value,
            Outcome::Empty {
                context,
                suggestions,
            } => serde_json::json!({
                "message": context,
                "suggestions": suggestions,
            }),
            Outcome::Failure {
                kind,
                message,
                suggestions,
            } => serde_json::json!({
                "error": kind,
                "message": message,
                "suggestions": suggestions,
            }),
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Outcome::Data(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure { .. })
    }
}

/// Interpret a raw response as a typed list for aggregation: empty bodies
/// become an empty vec, failure statuses become errors the engine can
/// count.
pub fn into_list<T: DeserializeOwned>(op: &str, raw: RawResponse) -> Result<Vec<T>> {
    if let Some(err) = status_error(op, &raw) {
        return Err(err);
    }
    match raw.body {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(body) => Ok(serde_json::from_value(body)?),
    }
}
