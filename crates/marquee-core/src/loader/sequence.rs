//! Pages loaded so far and the sentinel marker.

use crate::domain::{CatalogPage, MovieId, MovieSummary};

/// Append-only sequence of fetched pages, in fetch order.
#[derive(Debug, Clone, Default)]
pub struct LoadedPageSequence {
    pages: Vec<CatalogPage>,
}

impl LoadedPageSequence {
    pub(crate) fn push(&mut self, page: CatalogPage) {
        self.pages.push(page);
    }

    /// Loaded pages.
    #[must_use]
    pub fn pages(&self) -> &[CatalogPage] {
        &self.pages
    }

    /// All loaded movies, flattened across pages.
    pub fn items(&self) -> impl Iterator<Item = &MovieSummary> {
        self.pages.iter().flat_map(|page| page.items.iter())
    }

    /// Total number of loaded movies.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(CatalogPage::len).sum()
    }

    /// Most recently appended page.
    #[must_use]
    pub fn last_page(&self) -> Option<&CatalogPage> {
        self.pages.last()
    }

    /// Page number the next fetch should request.
    #[must_use]
    pub fn next_page_number(&self) -> u32 {
        self.last_page()
            .map_or(1, |page| page.page_number.saturating_add(1))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Marker on the last rendered item whose visibility triggers the next fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sentinel {
    item_id: Option<MovieId>,
}

impl Sentinel {
    pub(crate) const fn attach(&mut self, item_id: MovieId) {
        self.item_id = Some(item_id);
    }

    pub(crate) const fn detach(&mut self) {
        self.item_id = None;
    }

    /// Item the sentinel is attached to, if any.
    #[must_use]
    pub const fn item_id(&self) -> Option<MovieId> {
        self.item_id
    }

    /// Whether the sentinel is attached to `item_id`.
    #[must_use]
    pub fn is_on(&self, item_id: MovieId) -> bool {
        self.item_id == Some(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page_number: u32, ids: &[MovieId]) -> CatalogPage {
        CatalogPage {
            page_number,
            page_size: 2,
            items: ids
                .iter()
                .map(|&id| MovieSummary {
                    id,
                    title: format!("Movie {id}"),
                    cover_image_url: String::new(),
                    rating: 6.0,
                    year: 2010,
                })
                .collect(),
            total_item_count: 10,
        }
    }

    #[test]
    fn test_items_flatten_in_order() {
        let mut sequence = LoadedPageSequence::default();
        sequence.push(page(1, &[1, 2]));
        sequence.push(page(2, &[3, 4]));

        let ids: Vec<MovieId> = sequence.items().map(|movie| movie.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(sequence.item_count(), 4);
        assert_eq!(sequence.len(), 2);
    }

    #[test]
    fn test_next_page_number() {
        let mut sequence = LoadedPageSequence::default();
        assert_eq!(sequence.next_page_number(), 1);
        sequence.push(page(1, &[1, 2]));
        assert_eq!(sequence.next_page_number(), 2);
    }

    #[test]
    fn test_sentinel_attach_detach() {
        let mut sentinel = Sentinel::default();
        assert!(!sentinel.is_on(5));
        sentinel.attach(5);
        assert!(sentinel.is_on(5));
        assert!(!sentinel.is_on(6));
        sentinel.detach();
        assert_eq!(sentinel.item_id(), None);
    }
}
