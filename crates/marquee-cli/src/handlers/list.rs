//! List command handler.
//!
//! Prints one catalog page as a table with its pagination controls, and
//! optionally keeps prompting for pages to jump to.

use anyhow::Result;
use console::{Term, style};
use marquee_core::{CatalogPage, PageRequest, PageStore, parse_page_jump};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_page;

/// Fetch `page` and fold it into `store`.
///
/// A page past the end of the catalog is replaced by the last page. The first
/// fetch of a session seeds the store from the response; later fetches go
/// through [`PageStore::record_fetch`].
///
/// # Errors
///
/// Returns a [`CliError`] when the catalog cannot be read.
pub async fn load_page(ctx: &CliContext, store: &mut PageStore, page: u32) -> Result<CatalogPage> {
    let mut fetched = fetch(ctx, page).await?;

    if fetched.is_past_end() {
        let last = fetched.total_pages();
        tracing::info!(requested = page, last, "Requested page is past the end, showing last page");
        fetched = fetch(ctx, last).await?;
    }

    if !store.reconcile_initial(fetched.page_number, fetched.total_pages()) {
        store.record_fetch(&fetched);
    }
    Ok(fetched)
}

async fn fetch(ctx: &CliContext, page: u32) -> Result<CatalogPage> {
    let request = PageRequest::new(page, ctx.page_size()).map_err(CliError::from)?;
    let fetched = ctx
        .catalog()
        .fetch_page(request)
        .await
        .map_err(CliError::from)?;
    Ok(fetched)
}

/// Execute the list command.
///
/// With `jump`, prompts for page numbers until an empty line is entered.
/// Jumping needs a terminal; without one only the first page is printed.
pub async fn execute(ctx: &CliContext, page: u32, jump: bool) -> Result<()> {
    let mut store = PageStore::new(ctx.neighbor_window());
    let fetched = load_page(ctx, &mut store, page).await?;
    print_page(&fetched, &store.controls());

    if !jump {
        return Ok(());
    }

    let term = Term::stdout();
    if !term.is_term() {
        tracing::warn!("--jump needs an interactive terminal; ignoring");
        return Ok(());
    }

    loop {
        term.write_line(&format!(
            "\nJump to page (1-{}, empty to quit):",
            store.total_pages()
        ))
        .map_err(CliError::from)?;
        let input = term.read_line().map_err(CliError::from)?;
        if input.trim().is_empty() {
            break;
        }

        match parse_page_jump(&input, store.total_pages()) {
            Some(target) => {
                let fetched = load_page(ctx, &mut store, target).await?;
                print_page(&fetched, &store.controls());
            }
            None => {
                println!(
                    "{}",
                    style(format!(
                        "'{}' is not a page between 1 and {}",
                        input.trim(),
                        store.total_pages()
                    ))
                    .yellow()
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::FakeCatalog;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_load_page_seeds_store() {
        let ctx = FakeCatalog::with_movies(40).into_context(16);
        let mut store = PageStore::new(ctx.neighbor_window());

        let page = load_page(&ctx, &mut store, 2).await.unwrap();
        assert_eq!(page.page_number, 2);
        assert_eq!(page.len(), 16);
        assert_eq!(store.current_page(), 2);
        assert_eq!(store.total_pages(), 3);
        assert_eq!(store.visible_page_window(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_load_page_past_end_shows_last_page() {
        let catalog = FakeCatalog::with_movies(40);
        let calls = catalog.calls();
        let ctx = catalog.into_context(16);
        let mut store = PageStore::new(2);

        let page = load_page(&ctx, &mut store, 9).await.unwrap();
        assert_eq!(page.page_number, 3);
        assert_eq!(page.len(), 8);
        assert_eq!(store.current_page(), 3);
        assert!(store.is_last_page());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_later_loads_update_same_store() {
        let ctx = FakeCatalog::with_movies(200).into_context(10);
        let mut store = PageStore::new(2);

        load_page(&ctx, &mut store, 1).await.unwrap();
        assert!(store.is_first_page());

        load_page(&ctx, &mut store, 15).await.unwrap();
        assert_eq!(store.current_page(), 15);
        assert_eq!(store.total_pages(), 20);
        assert_eq!(store.visible_page_window(), vec![13, 14, 15, 16, 17]);
    }

    #[tokio::test]
    async fn test_empty_catalog_has_one_page() {
        let ctx = FakeCatalog::with_movies(0).into_context(16);
        let mut store = PageStore::new(2);

        let page = load_page(&ctx, &mut store, 1).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(store.total_pages(), 1);
        assert!(store.is_first_page() && store.is_last_page());
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_cli_error() {
        let ctx = FakeCatalog::with_movies(40).failing_on(1).into_context(16);
        let mut store = PageStore::new(2);

        let err = load_page(&ctx, &mut store, 1).await.unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli_err, CliError::Upstream(_)));
        assert_eq!(store.current_page(), 1);
    }

    #[tokio::test]
    async fn test_execute_without_jump() {
        let ctx = FakeCatalog::with_movies(5).into_context(16);
        assert!(execute(&ctx, 1, false).await.is_ok());
    }
}
