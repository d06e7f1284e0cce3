//! Catalog display utilities for CLI output.

use marquee_core::{CatalogPage, MovieDetail, MovieSummary, PaginationControls};

use super::tables::{print_separator, truncate_string};

const TITLE_WIDTH: usize = 40;
const TABLE_WIDTH: usize = 64;

/// Column headings matching [`movie_row`].
pub fn table_header() -> String {
    format!(
        "{:<8} {:<width$} {:>6} {:>6}",
        "ID",
        "Title",
        "Rating",
        "Year",
        width = TITLE_WIDTH
    )
}

/// One table row for a movie.
pub fn movie_row(movie: &MovieSummary) -> String {
    format!(
        "{:<8} {:<width$} {:>6} {:>6}",
        movie.id,
        truncate_string(&movie.title, TITLE_WIDTH),
        format!("{:.1}", movie.rating),
        movie.year,
        width = TITLE_WIDTH
    )
}

/// The control bar as plain text, e.g. `« ‹ 8 9 [10] 11 12 › »`.
///
/// Disabled edge links are shown as `·` so the bar keeps its shape.
pub fn controls_line(controls: &PaginationControls) -> String {
    controls
        .iter()
        .map(|link| {
            if link.current {
                format!("[{}]", link.label)
            } else if link.disabled {
                "·".to_string()
            } else {
                link.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print a page as a table followed by its pagination controls.
pub fn print_page(page: &CatalogPage, controls: &PaginationControls) {
    println!("{}", table_header());
    print_separator(TABLE_WIDTH);

    if page.is_empty() {
        println!("No movies found.");
    }
    for movie in &page.items {
        println!("{}", movie_row(movie));
    }

    print_separator(TABLE_WIDTH);
    println!("{}", controls_line(controls));
    println!(
        "Page {} of {} ({} movies)",
        page.page_number,
        page.total_pages(),
        page.total_item_count
    );
}

/// Detail view as lines of text. Absent optional sections are omitted.
pub fn detail_lines(detail: &MovieDetail) -> Vec<String> {
    let summary = &detail.summary;
    let mut lines = vec![format!("{} ({})", summary.title, summary.year)];

    let mut facts = vec![format!("★ {:.1}", summary.rating)];
    if detail.runtime_minutes > 0 {
        facts.push(format!("{} min", detail.runtime_minutes));
    }
    if let Some(language) = detail.language_label() {
        facts.push(language);
    }
    if let Some(mpa) = &detail.mpa_rating {
        facts.push(mpa.clone());
    }
    lines.push(facts.join(" · "));

    if !detail.genres.is_empty() {
        let genres: Vec<&str> = detail.genres.iter().map(String::as_str).collect();
        lines.push(format!("Genres: {}", genres.join(", ")));
    }
    if !detail.large_cover_image_url.is_empty() {
        lines.push(format!("Cover: {}", detail.large_cover_image_url));
    }
    if let Some(synopsis) = &detail.synopsis {
        lines.push(String::new());
        lines.push(synopsis.clone());
    }
    if let Some(trailer) = detail.trailer_url() {
        lines.push(String::new());
        lines.push(format!("Trailer: {trailer}"));
    }
    if !detail.downloads.is_empty() {
        lines.push(String::new());
        lines.push("Downloads:".to_string());
        for option in &detail.downloads {
            lines.push(format!(
                "  {:<6} {:<8} {:<10} seeds {:<5} peers {:<5} {}",
                option.quality, option.kind, option.size_label, option.seeds, option.peers, option.url
            ));
        }
    }

    lines
}

/// Print the detail view.
pub fn print_detail(detail: &MovieDetail) {
    for line in detail_lines(detail) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{DownloadOption, PageStore};

    fn summary(id: u64, title: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            cover_image_url: String::new(),
            rating: 7.5,
            year: 1999,
        }
    }

    fn bare_detail() -> MovieDetail {
        MovieDetail {
            summary: summary(42, "The Answer"),
            large_cover_image_url: String::new(),
            runtime_minutes: 0,
            language: None,
            mpa_rating: None,
            genres: Default::default(),
            synopsis: None,
            trailer_code: None,
            downloads: Vec::new(),
        }
    }

    #[test]
    fn test_movie_row_columns() {
        let row = movie_row(&summary(42, "The Answer"));
        assert!(row.starts_with("42 "));
        assert!(row.contains("The Answer"));
        assert!(row.contains("7.5"));
        assert!(row.ends_with("1999"));
        assert_eq!(row.chars().count(), table_header().chars().count());
    }

    #[test]
    fn test_movie_row_truncates_long_titles() {
        let title = "A".repeat(60);
        let row = movie_row(&summary(1, &title));
        assert!(row.contains("..."));
        assert!(!row.contains(&title));
    }

    #[test]
    fn test_controls_line_middle() {
        let controls = PageStore::seeded(10, 20, 2).unwrap().controls();
        assert_eq!(controls_line(&controls), "« ‹ 8 9 [10] 11 12 › »");
    }

    #[test]
    fn test_controls_line_first_page() {
        let controls = PageStore::seeded(1, 20, 2).unwrap().controls();
        assert_eq!(controls_line(&controls), "· · [1] 2 3 › »");
    }

    #[test]
    fn test_controls_line_single_page() {
        let controls = PageStore::seeded(1, 1, 2).unwrap().controls();
        assert_eq!(controls_line(&controls), "· · [1] · ·");
    }

    #[test]
    fn test_detail_lines_omit_absent_sections() {
        let lines = detail_lines(&bare_detail());
        assert_eq!(lines, vec!["The Answer (1999)".to_string(), "★ 7.5".to_string()]);
    }

    #[test]
    fn test_detail_lines_full() {
        let mut detail = bare_detail();
        detail.runtime_minutes = 136;
        detail.language = Some("en".to_string());
        detail.mpa_rating = Some("R".to_string());
        detail.genres = ["Sci-Fi".to_string(), "Action".to_string()]
            .into_iter()
            .collect();
        detail.synopsis = Some("A hacker learns the truth.".to_string());
        detail.trailer_code = Some("m8e-FF8MsqU".to_string());
        detail.downloads = vec![DownloadOption {
            quality: "1080p".to_string(),
            kind: "bluray".to_string(),
            size_label: "1.95 GB".to_string(),
            seeds: 100,
            peers: 20,
            url: "https://yts.mx/torrent/download/ABC".to_string(),
            hash: Some("ABC".to_string()),
        }];

        let lines = detail_lines(&detail);
        assert_eq!(lines[1], "★ 7.5 · 136 min · EN · R");
        assert!(lines.contains(&"Genres: Action, Sci-Fi".to_string()));
        assert!(lines.contains(&"A hacker learns the truth.".to_string()));
        assert!(lines.contains(&"Trailer: https://www.youtube.com/embed/m8e-FF8MsqU".to_string()));
        assert!(lines.contains(&"Downloads:".to_string()));
        assert!(
            lines
                .iter()
                .any(|line| line.contains("1080p") && line.contains("seeds 100"))
        );
    }
}
