//! Parsing for the "go to page" input.

/// Parse user input from a page-jump field.
///
/// Accepts a trimmed integer in `1..=total_pages`; anything else is `None`
/// and the caller leaves the current page unchanged.
pub fn parse_page_jump(input: &str, total_pages: u32) -> Option<u32> {
    let page: u32 = input.trim().parse().ok()?;
    (1..=total_pages).contains(&page).then_some(page)
}
