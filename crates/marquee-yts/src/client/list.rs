//! Movie list paging for the YTS client.

use marquee_core::CatalogPage;

use crate::config::MAX_PAGE_SIZE;
use crate::error::{YtsError, YtsResult};
use crate::http::HttpBackend;
use crate::models::{ListMoviesData, YtsEnvelope};
use crate::parsing::project_page;
use crate::url::build_list_url;

use super::YtsClient;

impl<B: HttpBackend> YtsClient<B> {
    /// Fetch one page of the movie list.
    ///
    /// `limit` is capped at the largest page size YTS honours so the total
    /// page count matches what the server actually returns.
    pub(crate) async fn list_movies(&self, page: u32, limit: u32) -> YtsResult<CatalogPage> {
        let limit = limit.clamp(1, MAX_PAGE_SIZE);
        let url = build_list_url(&self.config, page, limit);

        let hosts = &self.config.allowed_image_hosts;
        let catalog_page = self
            .fetch_projected(&url, |body| {
                let data = YtsEnvelope::decode::<ListMoviesData>(body)?.ok_or_else(|| {
                    YtsError::InvalidResponse {
                        message: "field 'data' is missing".to_string(),
                    }
                })?;
                project_page(&data, limit, hosts)
            })
            .await?;
        tracing::info!(
            page = catalog_page.page_number,
            items = catalog_page.len(),
            total_pages = catalog_page.total_pages(),
            "Fetched movie list page"
        );
        Ok(catalog_page)
    }
}
