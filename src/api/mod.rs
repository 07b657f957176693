//! Canvas retrieval operations.
//!
//! One method per operation, every one returning a classified [`Outcome`].
//! Single-course operations go straight through the transport + classifier
//! stack; cross-course operations fan out via [`crate::aggregate`].

mod assignments;
mod calendar;
mod courses;
mod discussions;
mod files;
mod modules;
mod pages;

use serde::de::DeserializeOwned;

use crate::client::{CanvasClient, Query};
use crate::config::CanvasConfig;
use crate::error::Result;
use crate::response::{self, Outcome};

/// Single-page size for list endpoints. Pagination past one page is
/// deliberately not implemented.
pub(crate) const PAGE_SIZE: u32 = 100;

/// Entry point for all Canvas operations.
#[derive(Debug, Clone)]
pub struct CanvasApi {
    client: CanvasClient,
}

impl CanvasApi {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            client: CanvasClient::new(config),
        }
    }

    /// Build from `CANVAS_BASE_URL` / `CANVAS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(CanvasConfig::from_env()?))
    }

    /// One classified request. Transport errors and failure statuses both
    /// terminate in an `Outcome` variant; nothing escapes raw.
    pub(crate) async fn run(&self, op: &str, path: &str, query: &Query) -> Outcome {
        match self.client.get(path, query).await {
            Ok(raw) => response::classify(op, &raw),
            Err(err) => Outcome::from_error(op, err),
        }
    }

    /// Typed list fetch for aggregation fan-out.
    pub(crate) async fn fetch_list<T: DeserializeOwned>(
        &self,
        op: &str,
        path: &str,
        query: &Query,
    ) -> Result<Vec<T>> {
        let raw = self.client.get(path, query).await?;
        response::into_list(op, raw)
    }
}
