//! URL construction helpers for the YTS API.

use url::Url;

use crate::models::YtsConfig;

/// Append an endpoint file name to the configured API root.
fn endpoint(config: &YtsConfig, file: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{file}"));
    url
}

/// Build the URL for one page of the movie list.
pub fn build_list_url(config: &YtsConfig, page: u32, limit: u32) -> Url {
    let mut url = endpoint(config, "list_movies.json");
    url.query_pairs_mut()
        .append_pair("page", &page.to_string())
        .append_pair("limit", &limit.to_string());
    url
}

/// Build the URL for a single movie's details.
pub fn build_detail_url(config: &YtsConfig, movie_id: u64) -> Url {
    let mut url = endpoint(config, "movie_details.json");
    url.query_pairs_mut()
        .append_pair("movie_id", &movie_id.to_string());
    url
}
