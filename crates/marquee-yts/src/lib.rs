#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultYtsClient is meant to be used through the CatalogPort trait, not its
// internal generic structure
#![allow(private_interfaces)]

mod cache;
mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultYtsClient;

// Configuration
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_CAPACITY, DEFAULT_FRESHNESS, DEFAULT_IMAGE_HOSTS,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, YtsClientConfig,
};

// Errors
pub use error::{YtsError, YtsResult};

// Projection
pub use parsing::{project_detail, project_summary};
