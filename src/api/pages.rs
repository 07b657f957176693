//! Wiki page operations.

use super::{CanvasApi, PAGE_SIZE};
use crate::client::Query;
use crate::ops;
use crate::response::Outcome;
use crate::types::Page;

impl CanvasApi {
    /// Page listing for one course (titles and URLs, no bodies).
    pub async fn get_course_pages(&self, course_id: i64) -> Outcome {
        let query = Query::new()
            .pair("sort", "title")
            .pair("per_page", PAGE_SIZE);
        self.run(
            ops::GET_COURSE_PAGES,
            &format!("/courses/{course_id}/pages"),
            &query,
        )
        .await
        .and_then_data(ops::GET_COURSE_PAGES, |pages: Vec<Page>| {
            Outcome::data(ops::GET_COURSE_PAGES, &pages)
        })
    }

    /// The course's designated front page, body included. Courses without
    /// one return 404, which classifies with a fallback suggestion.
    pub async fn get_course_home_page(&self, course_id: i64) -> Outcome {
        self.run(
            ops::GET_COURSE_HOME_PAGE,
            &format!("/courses/{course_id}/front_page"),
            &Query::new(),
        )
        .await
        .and_then_data(ops::GET_COURSE_HOME_PAGE, |page: Page| {
            Outcome::data(ops::GET_COURSE_HOME_PAGE, &page)
        })
    }
}
