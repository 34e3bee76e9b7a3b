use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tera::Context;
use tracing::{debug, error, warn};

use crate::errors::AppError;
use crate::models::blog::BlogListResult;
use crate::state::AppState;

/// Accepted search input: plain alphanumeric/whitespace phrases only.
/// Anything else is rejected at the boundary, never passed to the store.
const SEARCH_PATTERN: &str = r"^[\w\d\s]*$";

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

/// Payload for the 400 page when input is rejected at the boundary.
#[derive(Debug, Serialize)]
pub struct ErrPayload {
    pub code: u16,
    pub status: String,
    pub msg: String,
    pub goback: String,
}

fn valid_search_phrase(phrase: &str) -> bool {
    Regex::new(SEARCH_PATTERN)
        .expect("search pattern is a valid expression")
        .is_match(phrase)
}

/// GET /blogs/
/// The list of all the blogs, or the subset whose titles match the
/// `search` query parameter case-insensitively; the clear-search flag is
/// set whenever the list is a search result.
pub async fn render_blog_list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let phrase = params.search.unwrap_or_default();
    if !valid_search_phrase(&phrase) {
        warn!(phrase = %phrase, "suspicious search phrase");
        let payload = ErrPayload {
            code: 400,
            status: "Bad Request".to_string(),
            msg: "Invalid search phrase,Search phrases are simple alphanumeric for searching the blogs by the title. Check the search phrase and try all over again".to_string(),
            goback: "/blogs/".to_string(),
        };
        let page = state.render("400.html", &Context::from_serialize(&payload)?)?;
        return Ok((StatusCode::BAD_REQUEST, page).into_response());
    }

    let search = (!phrase.is_empty()).then_some(phrase.as_str());
    let list = state.blogs().list(search).await.map_err(|err| {
        error!(phrase = %phrase, error = %err, "failed to list blogs");
        err
    })?;
    let result = BlogListResult {
        clear_search: search.is_some(),
        list,
    };

    debug!(count_blogs = result.list.len(), "requested for the list of all the blogs");
    let page = state.render("blog-list.html", &Context::from_serialize(&result)?)?;
    Ok(page.into_response())
}

/// GET /blogs/:blogid
/// Each blog has its own page; the document is rendered through the
/// template named after its own slug.
pub async fn render_blog(
    State(state): State<AppState>,
    Path(blogid): Path<String>,
) -> Result<Html<String>, AppError> {
    debug!(blog = %blogid, "rendering blog");
    let blog = state.blogs().find_by_slug(&blogid).await.map_err(|err| {
        error!(id = %blogid, error = %err, "failed to get blog of slug");
        err
    })?;

    debug!(title = %blog.title, "found blog in database");
    let template = format!("{}.html", blog.slug);
    state.render(&template, &Context::from_serialize(&blog)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_phrases_accepted() {
        assert!(valid_search_phrase(""));
        assert!(valid_search_phrase("docker"));
        assert!(valid_search_phrase("angular directives"));
        assert!(valid_search_phrase("lm35 2016"));
    }

    #[test]
    fn test_metacharacters_rejected() {
        assert!(!valid_search_phrase("docker; drop collection"));
        assert!(!valid_search_phrase(".*"));
        assert!(!valid_search_phrase("title$regex"));
        assert!(!valid_search_phrase("a|b"));
    }
}
