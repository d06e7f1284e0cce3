//! Projection of YTS JSON into catalog view models.
//!
//! Pure functions: no I/O, no clock. Upstream records are loosely typed, so
//! each field is read individually. Required fields fail the projection with
//! the field path; optional fields degrade to `None` or empty.

use std::collections::BTreeSet;

use marquee_core::{CatalogPage, DownloadOption, MovieDetail, MovieSummary};
use serde_json::Value;
use url::Url;

use crate::error::{YtsError, YtsResult};
use crate::models::ListMoviesData;

/// Highest rating YTS uses.
const MAX_RATING: f32 = 10.0;

// ============================================================================
// Field Helpers
// ============================================================================

fn required_id(json: &Value, path: &str) -> YtsResult<u64> {
    json.get("id")
        .and_then(Value::as_u64)
        .filter(|id| *id > 0)
        .ok_or_else(|| YtsError::field(&format!("{path}.id"), "a positive integer"))
}

fn required_str(json: &Value, path: &str, field: &str) -> YtsResult<String> {
    json.get(field)
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| YtsError::field(&format!("{path}.{field}"), "a string"))
}

fn required_rating(json: &Value, path: &str) -> YtsResult<f32> {
    let rating = json
        .get("rating")
        .and_then(Value::as_f64)
        .ok_or_else(|| YtsError::field(&format!("{path}.rating"), "a number"))?;
    #[allow(clippy::cast_possible_truncation)] // Ratings are single-digit decimals
    let rating = rating as f32;
    Ok(rating.clamp(0.0, MAX_RATING))
}

fn required_year(json: &Value, path: &str) -> YtsResult<i32> {
    json.get("year")
        .and_then(Value::as_i64)
        .and_then(|year| i32::try_from(year).ok())
        .ok_or_else(|| YtsError::field(&format!("{path}.year"), "an integer"))
}

/// A non-empty string field, or `None`.
fn optional_str(json: &Value, field: &str) -> Option<String> {
    json.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn optional_u32(json: &Value, field: &str) -> u32 {
    json.get(field)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

/// Keep a cover URL only if it is `https` on an allowed host.
fn allowed_cover(json: &Value, field: &str, allowed_hosts: &[String]) -> String {
    let Some(raw) = optional_str(json, field) else {
        return String::new();
    };

    let allowed = Url::parse(&raw).is_ok_and(|url| {
        url.scheme() == "https"
            && url
                .host_str()
                .is_some_and(|host| allowed_hosts.iter().any(|allowed| allowed == host))
    });

    if allowed {
        raw
    } else {
        tracing::warn!(url = %raw, "Dropping cover image from disallowed source");
        String::new()
    }
}

// ============================================================================
// Summary / Detail Projection
// ============================================================================

fn summary_at(json: &Value, path: &str, allowed_hosts: &[String]) -> YtsResult<MovieSummary> {
    if !json.is_object() {
        return Err(YtsError::field(path, "an object"));
    }
    Ok(MovieSummary {
        id: required_id(json, path)?,
        title: required_str(json, path, "title")?,
        cover_image_url: allowed_cover(json, "medium_cover_image", allowed_hosts),
        rating: required_rating(json, path)?,
        year: required_year(json, path)?,
    })
}

/// Project one upstream movie record into a list-view summary.
pub fn project_summary(json: &Value, allowed_hosts: &[String]) -> YtsResult<MovieSummary> {
    summary_at(json, "movie", allowed_hosts)
}

fn parse_genres(json: &Value) -> BTreeSet<String> {
    json.get("genres")
        .and_then(Value::as_array)
        .map(|genres| {
            genres
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|genre| !genre.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_download(json: &Value) -> Option<DownloadOption> {
    // An option without a URL cannot be offered
    let url = optional_str(json, "url")?;
    Some(DownloadOption {
        quality: optional_str(json, "quality").unwrap_or_default(),
        kind: optional_str(json, "type").unwrap_or_default(),
        size_label: optional_str(json, "size").unwrap_or_default(),
        seeds: optional_u32(json, "seeds"),
        peers: optional_u32(json, "peers"),
        url,
        hash: optional_str(json, "hash"),
    })
}

fn parse_downloads(json: &Value) -> Vec<DownloadOption> {
    json.get("torrents")
        .and_then(Value::as_array)
        .map(|torrents| torrents.iter().filter_map(parse_download).collect())
        .unwrap_or_default()
}

/// Project one upstream movie record into a detail view model.
pub fn project_detail(json: &Value, allowed_hosts: &[String]) -> YtsResult<MovieDetail> {
    let path = "data.movie";
    Ok(MovieDetail {
        summary: summary_at(json, path, allowed_hosts)?,
        large_cover_image_url: allowed_cover(json, "large_cover_image", allowed_hosts),
        runtime_minutes: optional_u32(json, "runtime"),
        language: optional_str(json, "language"),
        mpa_rating: optional_str(json, "mpa_rating"),
        genres: parse_genres(json),
        synopsis: optional_str(json, "description_full"),
        trailer_code: optional_str(json, "yt_trailer_code"),
        downloads: parse_downloads(json),
    })
}

// ============================================================================
// Page Projection
// ============================================================================

/// Project a `list_movies` payload into a catalog page.
///
/// `page_size` is the limit the page was requested with; it drives the
/// total page computation. A missing `movies` array is an empty page.
pub fn project_page(
    data: &ListMoviesData,
    page_size: u32,
    allowed_hosts: &[String],
) -> YtsResult<CatalogPage> {
    let items = data
        .movies
        .as_deref()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, movie)| summary_at(movie, &format!("data.movies[{index}]"), allowed_hosts))
        .collect::<YtsResult<Vec<_>>>()?;

    Ok(CatalogPage {
        page_number: data.page_number.max(1),
        page_size: page_size.max(1),
        items,
        total_item_count: data.movie_count,
    })
}
