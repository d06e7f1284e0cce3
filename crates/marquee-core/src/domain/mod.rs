//! Domain types for the movie catalog.
//!
//! Pure data with no infrastructure dependencies. Adapters project upstream
//! JSON into these types; views render them.

mod movie;
mod page;

pub use movie::{DownloadOption, MovieDetail, MovieId, MovieSummary};
pub use page::{CatalogPage, PageRequest, total_pages};
