//! Incremental ("load more") list loading.
//!
//! The loader is a small state machine driven by two inputs: a visibility
//! event for the sentinel item and the completion of a page fetch. It never
//! has more than one fetch in flight and drops completions that arrive after
//! the view it belongs to has been torn down.
//!
//! # Structure
//!
//! - `state` - `LoaderState`, `LoadDecision`, `FetchTicket`, `IgnoreReason`
//! - `sequence` - `LoadedPageSequence` and the `Sentinel` marker
//! - `incremental` - `IncrementalLoader`, the state machine and its async driver

mod incremental;
mod sequence;
mod state;

pub use incremental::{IncrementalLoader, LoadTrigger};
pub use sequence::{LoadedPageSequence, Sentinel};
pub use state::{FetchTicket, IgnoreReason, LoadDecision, LoaderState};
