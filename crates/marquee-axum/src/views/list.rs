//! The movie grid.

use std::fmt::Write as _;

use marquee_core::{CatalogPage, MovieSummary, PaginationControls};

use super::{escape, layout, render_controls};

fn render_card(html: &mut String, movie: &MovieSummary) {
    let title = escape(&movie.title);
    let _ = write!(html, "<a class=\"card\" href=\"/movie/{}\">", movie.id);
    if movie.has_cover() {
        let _ = write!(
            html,
            "<img src=\"{}\" alt=\"{title}\" loading=\"lazy\">",
            escape(&movie.cover_image_url)
        );
    } else {
        html.push_str("<div class=\"placeholder\" aria-hidden=\"true\"></div>");
    }
    let _ = write!(
        html,
        "<div class=\"info\"><h2>{title}</h2><p>★ {:.1} · {}</p></div></a>",
        movie.rating, movie.year
    );
}

/// Render one catalog page with its pagination controls.
pub fn render_list(page: &CatalogPage, controls: &PaginationControls) -> String {
    let mut body = String::from("<h1>Movies</h1>");
    if page.is_empty() {
        body.push_str("<p>No movies found.</p>");
    } else {
        body.push_str("<div class=\"grid\">");
        for movie in &page.items {
            render_card(&mut body, movie);
        }
        body.push_str("</div>");
    }
    body.push_str(&render_controls(controls));

    layout(&format!("Movies - page {}", page.page_number), &body)
}
