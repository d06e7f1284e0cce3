//! Subcommands of the `marquee` binary.

use clap::Subcommand;
use marquee_axum::bootstrap::DEFAULT_PORT;
use marquee_core::DEFAULT_NEIGHBOR_WINDOW;

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the web front end
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Page links shown on each side of the current page
        #[arg(long, default_value_t = DEFAULT_NEIGHBOR_WINDOW)]
        neighbor_window: u32,
    },

    /// Print one page of the catalog
    List {
        /// Page number to show
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Prompt for more page numbers after printing
        #[arg(short, long)]
        jump: bool,
    },

    /// Show the details of one movie
    Show {
        /// Catalog id of the movie
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        id: u64,
    },

    /// Load the catalog page by page
    Browse {
        /// Pages to load when stdin is not a terminal
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        max_pages: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::Parser;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::parse_from(["marquee", "serve"]);
        match cli.command {
            Some(Commands::Serve {
                port,
                neighbor_window,
            }) => {
                assert_eq!(port, DEFAULT_PORT);
                assert_eq!(neighbor_window, DEFAULT_NEIGHBOR_WINDOW);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_list_defaults_to_first_page() {
        let cli = Cli::parse_from(["marquee", "list"]);
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                page: 1,
                jump: false
            })
        ));
    }

    #[test]
    fn test_list_with_page_and_jump() {
        let cli = Cli::parse_from(["marquee", "list", "--page", "4", "--jump"]);
        assert!(matches!(
            cli.command,
            Some(Commands::List { page: 4, jump: true })
        ));
    }

    #[test]
    fn test_list_rejects_page_zero() {
        assert!(Cli::try_parse_from(["marquee", "list", "--page", "0"]).is_err());
    }

    #[test]
    fn test_show_rejects_zero_and_text() {
        assert!(Cli::try_parse_from(["marquee", "show", "0"]).is_err());
        assert!(Cli::try_parse_from(["marquee", "show", "abc"]).is_err());
    }

    #[test]
    fn test_browse_max_pages() {
        let cli = Cli::parse_from(["marquee", "browse", "--max-pages", "3"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Browse { max_pages: 3 })
        ));
    }
}
