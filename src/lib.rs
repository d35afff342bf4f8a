//! API Nexus - Terminal dashboard for browsing public web APIs
//!
//! This library crate exposes internal modules for integration testing.

pub mod bindings;
pub mod catalog;
pub mod config;
pub mod fetch;
pub mod panel;
pub mod resource;
pub mod tui;
pub mod util;
