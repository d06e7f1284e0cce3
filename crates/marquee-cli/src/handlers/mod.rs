//! Command handlers.
//!
//! Each submodule exposes an `execute` entry point called from `main.rs`.

pub mod browse;
pub mod list;
pub mod serve;
pub mod show;
