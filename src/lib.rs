//! Armory TUI - a terminal client for a security tool catalog
//!
//! This library exposes modules for use in integration tests.

pub mod api;
pub mod app;
pub mod config;
pub mod models;
pub mod state;
pub mod ui;
