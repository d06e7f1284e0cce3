//! Pagination controls and the page-jump form.

use std::fmt::Write as _;

use marquee_core::{PageLink, PaginationControls};

use super::escape;

fn render_link(html: &mut String, link: &PageLink) {
    let label = escape(&link.label);
    if link.current {
        let _ = write!(html, "<span class=\"current\" aria-current=\"page\">{label}</span>");
    } else if link.disabled {
        let _ = write!(html, "<span class=\"disabled\" aria-disabled=\"true\">{label}</span>");
    } else {
        let _ = write!(html, "<a href=\"/?page={}\">{label}</a>", link.page);
    }
}

/// Render `« ‹ [window] › »` plus a form for jumping to any page.
pub fn render_controls(controls: &PaginationControls) -> String {
    let mut html = String::from("<nav class=\"pagination\" aria-label=\"Pagination\">");
    for link in controls.iter() {
        render_link(&mut html, link);
    }
    let _ = write!(
        html,
        "<form method=\"get\" action=\"/\">\
         <input type=\"number\" name=\"page\" min=\"1\" max=\"{total}\" placeholder=\"1-{total}\" required>\
         <button type=\"submit\">Go</button></form></nav>",
        total = controls.last.page
    );
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::PageStore;

    #[test]
    fn test_render_controls_middle() {
        let controls = PageStore::seeded(10, 20, 2).unwrap().controls();
        let html = render_controls(&controls);

        assert!(html.contains("<a href=\"/?page=1\">«</a>"));
        assert!(html.contains("<a href=\"/?page=9\">‹</a>"));
        assert!(html.contains("<span class=\"current\" aria-current=\"page\">10</span>"));
        assert!(html.contains("<a href=\"/?page=12\">12</a>"));
        assert!(!html.contains("?page=13\">13"));
        assert!(html.contains("<a href=\"/?page=11\">›</a>"));
        assert!(html.contains("<a href=\"/?page=20\">»</a>"));
        assert!(html.contains("max=\"20\""));
    }

    #[test]
    fn test_render_controls_first_page_disables_back_links() {
        let controls = PageStore::seeded(1, 20, 2).unwrap().controls();
        let html = render_controls(&controls);

        assert!(html.contains("<span class=\"disabled\" aria-disabled=\"true\">«</span>"));
        assert!(html.contains("<span class=\"disabled\" aria-disabled=\"true\">‹</span>"));
        assert!(html.contains("<a href=\"/?page=3\">3</a>"));
    }
}
