//! Show command handler.
//!
//! Prints the detail view for one movie.

use anyhow::Result;
use marquee_core::{MovieDetail, MovieId};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_detail;

/// Fetch one movie's details.
///
/// # Errors
///
/// Returns [`CliError::NotFound`] for unknown ids and
/// [`CliError::Upstream`] when the catalog cannot be read.
pub async fn fetch(ctx: &CliContext, id: MovieId) -> Result<MovieDetail> {
    let detail = ctx
        .catalog()
        .fetch_detail(id)
        .await
        .map_err(CliError::from)?;
    Ok(detail)
}

/// Execute the show command.
pub async fn execute(ctx: &CliContext, id: MovieId) -> Result<()> {
    let detail = fetch(ctx, id).await?;
    print_detail(&detail);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::FakeCatalog;

    #[tokio::test]
    async fn test_fetch_known_movie() {
        let ctx = FakeCatalog::with_movies(10).into_context(4);
        let detail = fetch(&ctx, 3).await.unwrap();
        assert_eq!(detail.id(), 3);
        assert_eq!(detail.language_label().as_deref(), Some("FR"));
    }

    #[tokio::test]
    async fn test_fetch_unknown_movie_is_not_found() {
        let ctx = FakeCatalog::with_movies(10).into_context(4);
        let err = fetch(&ctx, 11).await.unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli_err, CliError::NotFound(_)));
        assert_eq!(cli_err.exit_code(), 1);
    }
}
