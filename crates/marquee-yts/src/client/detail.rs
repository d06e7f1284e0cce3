//! Movie detail lookup for the YTS client.

use marquee_core::{MovieDetail, MovieId};
use serde_json::Value;

use crate::error::{YtsError, YtsResult};
use crate::http::HttpBackend;
use crate::models::{MovieDetailsData, YtsEnvelope};
use crate::parsing::project_detail;
use crate::url::build_detail_url;

use super::YtsClient;

impl<B: HttpBackend> YtsClient<B> {
    /// Fetch the full record for one movie.
    ///
    /// YTS answers unknown ids with an empty movie record (`id` 0) rather
    /// than a 404; both are reported as `MovieNotFound`.
    pub(crate) async fn movie_details(&self, movie_id: MovieId) -> YtsResult<MovieDetail> {
        let url = build_detail_url(&self.config, movie_id);

        let hosts = &self.config.allowed_image_hosts;
        let projected = self
            .fetch_projected(&url, |body| {
                let movie = YtsEnvelope::decode::<MovieDetailsData>(body)?
                    .and_then(|data| data.movie)
                    .filter(|movie| !movie.is_null())
                    .ok_or(YtsError::MovieNotFound { movie_id })?;
                if movie.get("id").and_then(Value::as_u64) == Some(0) {
                    return Err(YtsError::MovieNotFound { movie_id });
                }
                project_detail(&movie, hosts)
            })
            .await;

        let detail = match projected {
            Err(YtsError::ApiRequestFailed { status: 404, .. }) => {
                return Err(YtsError::MovieNotFound { movie_id });
            }
            other => other?,
        };
        tracing::info!(movie_id, title = %detail.summary.title, "Fetched movie details");
        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{fake_movie_json, test_config};
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;
    use std::sync::atomic::Ordering;

    fn detail_body(movie: &Value) -> Value {
        json!({
            "status": "ok",
            "status_message": "Query was successful",
            "data": { "movie": movie }
        })
    }

    #[tokio::test]
    async fn test_movie_details() {
        let backend = FakeBackend::new().with_response(
            "movie_id=42",
            CannedResponse::ok(detail_body(&fake_movie_json(42))),
        );
        let client = YtsClient::with_backend(&test_config(), backend).unwrap();

        let detail = client.movie_details(42).await.unwrap();
        assert_eq!(detail.id(), 42);
        assert_eq!(detail.summary.title, "Movie 42");
    }

    #[tokio::test]
    async fn test_zero_id_record_is_not_found() {
        let backend = FakeBackend::new().with_default(CannedResponse::ok(detail_body(&json!({
            "id": 0,
            "url": "https://yts.mx/movies/",
            "title": null
        }))));
        let client = YtsClient::with_backend(&test_config(), backend).unwrap();

        assert!(matches!(
            client.movie_details(99_999_999).await,
            Err(YtsError::MovieNotFound { movie_id: 99_999_999 })
        ));
    }

    #[tokio::test]
    async fn test_null_movie_is_not_found() {
        let backend = FakeBackend::new()
            .with_default(CannedResponse::ok(detail_body(&Value::Null)));
        let client = YtsClient::with_backend(&test_config(), backend).unwrap();

        assert!(matches!(
            client.movie_details(5).await,
            Err(YtsError::MovieNotFound { movie_id: 5 })
        ));
    }

    #[tokio::test]
    async fn test_not_found_is_not_cached() {
        let backend = FakeBackend::new()
            .with_default(CannedResponse::ok(detail_body(&json!({ "id": 0 }))));
        let requests = backend.request_counter();
        let client = YtsClient::with_backend(&test_config(), backend).unwrap();

        assert!(client.movie_details(7).await.is_err());
        assert!(client.movie_details(7).await.is_err());
        assert_eq!(requests.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_http_404_is_not_found() {
        let backend = FakeBackend::new().with_default(CannedResponse::failure(404));
        let client = YtsClient::with_backend(&test_config(), backend).unwrap();

        assert!(matches!(
            client.movie_details(5).await,
            Err(YtsError::MovieNotFound { movie_id: 5 })
        ));
    }

    #[tokio::test]
    async fn test_server_error_is_passed_through() {
        let backend = FakeBackend::new().with_default(CannedResponse::failure(502));
        let client = YtsClient::with_backend(&test_config(), backend).unwrap();

        assert!(matches!(
            client.movie_details(5).await,
            Err(YtsError::ApiRequestFailed { status: 502, .. })
        ));
    }
}
