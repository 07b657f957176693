//! File listing.

use super::{CanvasApi, PAGE_SIZE};
use crate::client::Query;
use crate::ops;
use crate::response::Outcome;
use crate::types::FileEntry;

impl CanvasApi {
    /// Files uploaded to one course (first page only).
    pub async fn get_course_files(&self, course_id: i64) -> Outcome {
        let query = Query::new().pair("per_page", PAGE_SIZE);
        self.run(
            ops::GET_COURSE_FILES,
            &format!("/courses/{course_id}/files"),
            &query,
        )
        .await
        .and_then_data(ops::GET_COURSE_FILES, |files: Vec<FileEntry>| {
            Outcome::data(ops::GET_COURSE_FILES, &files)
        })
    }
}
