//! Browse command handler.
//!
//! Incremental loading in the terminal. Each page is appended below the
//! previous one. Pressing Enter or Space plays the role of the last row
//! scrolling into view; `q` quits and tears the session down.

use anyhow::Result;
use console::{Key, Term, style};
use marquee_core::{
    CatalogPort, IncrementalLoader, LoadDecision, LoadTrigger, LoaderState,
};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{movie_row, print_separator, table_header};

/// What a keystroke asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    LoadMore,
    Retry,
    Quit,
    Ignore,
}

/// Map a keystroke to a session action.
pub const fn key_action(key: &Key) -> KeyAction {
    match key {
        Key::Enter | Key::Char(' ') => KeyAction::LoadMore,
        Key::Char('r' | 'R') => KeyAction::Retry,
        Key::Char('q' | 'Q') | Key::Escape => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}

/// A loader bound to a catalog, printing rows as pages arrive.
pub struct BrowseSession<'a> {
    loader: IncrementalLoader,
    catalog: &'a dyn CatalogPort,
    printed: usize,
}

impl<'a> BrowseSession<'a> {
    /// Create a session for `catalog` loading `page_size` movies at a time.
    pub fn new(catalog: &'a dyn CatalogPort, page_size: u32) -> Self {
        Self {
            loader: IncrementalLoader::new(page_size),
            catalog,
            printed: 0,
        }
    }

    /// The underlying loader.
    pub const fn loader(&self) -> &IncrementalLoader {
        &self.loader
    }

    /// Run one trigger through the loader and print any new rows.
    pub async fn step(&mut self, trigger: LoadTrigger) -> LoadDecision {
        let decision = self.loader.load_next(self.catalog, trigger).await;
        if let LoadDecision::Ignored(reason) = decision {
            tracing::debug!(?reason, "Load request ignored");
        }
        self.flush();
        decision
    }

    /// The trigger the sentinel row would fire if it became visible now.
    pub fn sentinel_trigger(&self) -> Option<LoadTrigger> {
        self.loader
            .sentinel()
            .item_id()
            .map(LoadTrigger::SentinelVisible)
    }

    /// Load up to `max_pages` pages without user input.
    pub async fn load_pages(&mut self, max_pages: u32) {
        let mut trigger = Some(LoadTrigger::Start);
        while let Some(next) = trigger {
            if self.loader.pages().len() >= max_pages as usize {
                break;
            }
            if let LoadDecision::Ignored(_) = self.step(next).await {
                break;
            }
            trigger = self.sentinel_trigger();
        }
    }

    /// Detach the sentinel so no further loads happen.
    pub fn teardown(&mut self) {
        self.loader.teardown();
    }

    fn flush(&mut self) {
        for movie in self.loader.pages().items().skip(self.printed) {
            println!("{}", movie_row(movie));
        }
        self.printed = self.loader.pages().item_count();
    }
}

fn print_status(state: &LoaderState, loaded: usize) {
    match state {
        LoaderState::Exhausted => {
            println!("{}", style(format!("End of catalog ({loaded} movies).")).dim());
        }
        LoaderState::Failed { error, .. } => {
            println!(
                "{}",
                style(format!("Failed to fetch movies: {error}")).red()
            );
        }
        LoaderState::Idle | LoaderState::FetchingNext { .. } => {}
    }
}

async fn interactive(session: &mut BrowseSession<'_>, term: &Term) -> Result<()> {
    session.step(LoadTrigger::Start).await;

    loop {
        let state = session.loader().state().clone();
        print_status(&state, session.loader().pages().item_count());
        let hint = match state {
            LoaderState::Exhausted => break,
            LoaderState::Failed { .. } => "r: retry, q: quit",
            _ => "Enter/Space: load more, q: quit",
        };
        println!("{}", style(hint).dim());

        let key = term.read_key().map_err(CliError::from)?;
        let trigger = match key_action(&key) {
            KeyAction::Quit => break,
            KeyAction::Retry => LoadTrigger::Retry,
            KeyAction::LoadMore => match session.sentinel_trigger() {
                Some(trigger) => trigger,
                None => continue,
            },
            KeyAction::Ignore => continue,
        };
        session.step(trigger).await;
    }

    Ok(())
}

/// Execute the browse command.
///
/// On a terminal, waits for keystrokes between pages. Otherwise loads up to
/// `max_pages` pages and exits, failing if a fetch fails.
pub async fn execute(ctx: &CliContext, max_pages: u32) -> Result<()> {
    let mut session = BrowseSession::new(ctx.catalog(), ctx.page_size());
    let term = Term::stdout();

    println!("{}", table_header());
    print_separator(64);

    let outcome = if term.is_term() {
        interactive(&mut session, &term).await
    } else {
        session.load_pages(max_pages).await;
        let state = session.loader().state();
        match state.error() {
            Some(error) => Err(CliError::from(error.clone()).into()),
            None => {
                print_status(state, session.loader().pages().item_count());
                Ok(())
            }
        }
    };

    session.teardown();
    outcome
}
