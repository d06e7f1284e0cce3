//! Integration tests driving the page store and the incremental loader
//! through the public API only, against an in-memory catalog.

use async_trait::async_trait;
use marquee_core::{
    CatalogError, CatalogPage, CatalogPort, CatalogResult, IncrementalLoader, LoadDecision,
    LoadTrigger, LoaderState, MovieDetail, MovieId, MovieSummary, PageLinkKind, PageRequest,
    PageStore, parse_page_jump,
};

struct InMemoryCatalog {
    total: u64,
}

#[async_trait]
impl CatalogPort for InMemoryCatalog {
    async fn fetch_page(&self, request: PageRequest) -> CatalogResult<CatalogPage> {
        let size = u64::from(request.page_size());
        let start = u64::from(request.page() - 1) * size + 1;
        let end = (start + size - 1).min(self.total);
        let items = (start..=end)
            .map(|id| MovieSummary {
                id,
                title: format!("Movie {id}"),
                cover_image_url: String::new(),
                rating: 5.0,
                year: 2010,
            })
            .collect();

        Ok(CatalogPage {
            page_number: request.page(),
            page_size: request.page_size(),
            items,
            total_item_count: self.total,
        })
    }

    async fn fetch_detail(&self, movie_id: MovieId) -> CatalogResult<MovieDetail> {
        Err(CatalogError::NotFound { movie_id })
    }
}

#[tokio::test]
async fn test_following_next_links_visits_every_page() {
    let catalog = InMemoryCatalog { total: 50 };
    let mut store = PageStore::new(2);

    let first = catalog
        .fetch_page(PageRequest::new(1, 16).unwrap())
        .await
        .unwrap();
    assert!(store.reconcile_initial(first.page_number, first.total_pages()));

    let mut visited = vec![store.current_page()];
    loop {
        let next = store.controls().next;
        if next.disabled {
            break;
        }
        assert_eq!(next.kind, PageLinkKind::Next);
        let page = catalog
            .fetch_page(PageRequest::new(next.page, 16).unwrap())
            .await
            .unwrap();
        // Every page reports the same total
        assert_eq!(page.total_pages(), 4);
        store.record_fetch(&page);
        visited.push(store.current_page());
    }

    assert_eq!(visited, vec![1, 2, 3, 4]);
    assert!(store.controls().last.disabled);
}

#[tokio::test]
async fn test_page_jump_then_window() {
    let catalog = InMemoryCatalog { total: 320 };
    let mut store = PageStore::new(2);

    let target = parse_page_jump(" 10 ", 20).unwrap();
    let page = catalog
        .fetch_page(PageRequest::new(target, 16).unwrap())
        .await
        .unwrap();
    store.record_fetch(&page);

    assert_eq!(store.visible_page_window(), vec![8, 9, 10, 11, 12]);
    assert_eq!(parse_page_jump("21", store.total_pages()), None);
}

#[tokio::test]
async fn test_incremental_session_loads_whole_catalog() {
    let catalog = InMemoryCatalog { total: 35 };
    let mut loader = IncrementalLoader::new(16);

    let mut trigger = Some(LoadTrigger::Start);
    while let Some(next) = trigger {
        assert!(matches!(
            loader.load_next(&catalog, next).await,
            LoadDecision::Fetch(_)
        ));
        trigger = loader.sentinel().item_id().map(LoadTrigger::SentinelVisible);
    }

    assert_eq!(loader.state(), &LoaderState::Exhausted);
    assert_eq!(loader.pages().len(), 3);
    let ids: Vec<MovieId> = loader.pages().items().map(|movie| movie.id).collect();
    assert_eq!(ids, (1..=35).collect::<Vec<_>>());
}
