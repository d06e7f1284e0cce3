//! Shared fixtures for marquee-axum tests.

pub mod catalog;
