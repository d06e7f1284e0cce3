//! The movie detail page.

use std::fmt::Write as _;

use marquee_core::MovieDetail;

use super::{escape, layout};

/// Render the detail page. Sections whose data is absent are omitted.
pub fn render_detail(movie: &MovieDetail) -> String {
    let title = escape(&movie.summary.title);
    let mut body = String::from("<a href=\"/\">&larr; Back to Movies</a><article>");

    if movie.large_cover_image_url.is_empty() {
        body.push_str("<div class=\"placeholder\" aria-hidden=\"true\"></div>");
    } else {
        let _ = write!(
            body,
            "<img src=\"{}\" alt=\"{title}\">",
            escape(&movie.large_cover_image_url)
        );
    }

    let _ = write!(
        body,
        "<h1>{title}</h1><ul><li>Rating: {}</li><li>Year: {}</li><li>Runtime: {} minutes</li>",
        movie.summary.rating, movie.summary.year, movie.runtime_minutes
    );
    if let Some(language) = movie.language_label() {
        let _ = write!(body, "<li>Language: {}</li>", escape(&language));
    }
    if let Some(mpa) = &movie.mpa_rating {
        let _ = write!(body, "<li>MPA Rating: {}</li>", escape(mpa));
    }
    body.push_str("</ul>");

    if !movie.genres.is_empty() {
        body.push_str("<section><h2>Genres</h2>");
        for genre in &movie.genres {
            let _ = write!(body, "<span class=\"genre\">{}</span>", escape(genre));
        }
        body.push_str("</section>");
    }

    if let Some(synopsis) = &movie.synopsis {
        let _ = write!(body, "<section><h2>Synopsis</h2><p>{}</p></section>", escape(synopsis));
    }

    if let Some(trailer) = movie.trailer_url() {
        let _ = write!(
            body,
            "<section><h2>Trailer</h2><iframe src=\"{}\" title=\"Trailer\" \
             allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" \
             allowfullscreen></iframe></section>",
            escape(&trailer)
        );
    }

    if !movie.downloads.is_empty() {
        body.push_str("<section><h2>Download Options</h2>");
        for option in &movie.downloads {
            let _ = write!(
                body,
                "<a class=\"download\" data-key=\"{}\" href=\"{}\"><div><strong>{}</strong><div>{}</div></div>\
                 <div><div>Size: {}</div><div>Seeds: {} | Peers: {}</div></div></a>",
                escape(option.list_key()),
                escape(&option.url),
                escape(&option.quality),
                escape(&option.kind),
                escape(&option.size_label),
                option.seeds,
                option.peers
            );
        }
        body.push_str("</section>");
    }

    body.push_str("</article>");
    layout(&movie.summary.title, &body)
}
