//! Movie list and detail handlers.

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use marquee_core::{MovieId, PageRequest, PageStore};
use serde::Deserialize;

use crate::error::HttpError;
use crate::state::AppState;
use crate::views;

/// Query string of the list view.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Raw page value; parsed by the handler so bad input gets an HTML error
    pub page: Option<String>,
}

/// Parse the `page` query value. Missing or blank means page 1.
fn requested_page(raw: Option<&str>) -> Result<u32, HttpError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(1),
        Some(value) => value
            .parse::<u32>()
            .map_err(|_| HttpError::BadRequest(format!("'{value}' is not a page number"))),
    }
}

fn page_location(page: u32) -> String {
    format!("/?page={page}")
}

/// Paginated movie list.
///
/// Page 0 redirects to page 1 and pages past the end redirect to the last
/// page. The page store is seeded from the freshly fetched page, so the
/// rendered controls never disagree with the data.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, HttpError> {
    let page = requested_page(query.page.as_deref())?;
    if page == 0 {
        return Ok(Redirect::to(&page_location(1)).into_response());
    }

    let request = PageRequest::new(page, state.page_size)?;
    let catalog_page = state.catalog.fetch_page(request).await?;
    let total_pages = catalog_page.total_pages();

    if catalog_page.is_past_end() {
        tracing::debug!(page, total_pages, "Redirecting past-end page request");
        return Ok(Redirect::to(&page_location(total_pages)).into_response());
    }

    let store = PageStore::seeded(catalog_page.page_number, total_pages, state.neighbor_window)?;
    let html = views::render_list(&catalog_page, &store.controls());
    Ok(Html(html).into_response())
}

/// Movie detail page.
pub async fn detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, HttpError> {
    let movie_id: MovieId = raw_id
        .parse()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| HttpError::NotFound(format!("'{raw_id}' is not a movie id")))?;

    let movie = state.catalog.fetch_detail(movie_id).await?;
    Ok(Html(views::render_detail(&movie)))
}

/// Fallback for unknown paths.
pub async fn not_found() -> HttpError {
    HttpError::NotFound("Page not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_page() {
        assert_eq!(requested_page(None).unwrap(), 1);
        assert_eq!(requested_page(Some("")).unwrap(), 1);
        assert_eq!(requested_page(Some(" 7 ")).unwrap(), 7);
        assert_eq!(requested_page(Some("0")).unwrap(), 0);
        assert!(requested_page(Some("abc")).is_err());
        assert!(requested_page(Some("-3")).is_err());
    }
}
