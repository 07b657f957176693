//! Module listing.

use super::{CanvasApi, PAGE_SIZE};
use crate::client::Query;
use crate::ops;
use crate::response::Outcome;
use crate::types::Module;

impl CanvasApi {
    /// Content modules for one course, with their item sequences.
    pub async fn get_course_modules(&self, course_id: i64) -> Outcome {
        let query = Query::new()
            .list("include[]", &["items"])
            .pair("per_page", PAGE_SIZE);
        self.run(
            ops::GET_COURSE_MODULES,
            &format!("/courses/{course_id}/modules"),
            &query,
        )
        .await
        .and_then_data(ops::GET_COURSE_MODULES, |modules: Vec<Module>| {
            Outcome::data(ops::GET_COURSE_MODULES, &modules)
        })
    }
}
