//! # hotentry
//!
//! A viewer for the Hatena Bookmark "hot entry" feed with a personal block list.
//!
//! ## Architecture
//!
//! Every run goes through the same pipeline:
//!
//! ```text
//! Fetcher → Normalizer → Pipeline (block list, widths, sort) → Presenter
//! ```
//!
//! Two front ends share it:
//!
//! - `chv`: prints a colored table, or with `--linkmode` lets you pick an
//!   entry and opens it in the browser
//! - `hotentry`: serves the list as an HTML page with a form for adding
//!   blocked domains and words
//!
//! ## Quick Start
//!
//! ```bash
//! # Table, most bookmarked first
//! chv --popular
//!
//! # Pick an entry to open
//! chv -l
//!
//! # Hide a domain / a word everywhere
//! chv block domain togetter.com
//! chv block word 驚愕
//!
//! # Web page on $PORT (default 8080)
//! hotentry
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config,
/// store, fetcher and normalizer.
pub mod app;

/// Command-line interface of `chv` using clap.
pub mod cli;

/// Configuration loaded from `~/.config/hotentry/config.toml`.
pub mod config;

/// Core domain models: [`Entry`](domain::Entry), [`BlockList`](domain::BlockList).
pub mod domain;

/// HTTP fetching of the feed body.
pub mod fetcher;

/// RSS parsing into [`Entry`](domain::Entry) values.
pub mod normalizer;

/// Block list filtering, column widths, truncation and sorting.
pub mod pipeline;

/// SQLite persistence of registered block rules.
pub mod store;

/// Interactive link picker built with ratatui.
pub mod tui;

/// HTML page and block rule form served with axum.
pub mod web;
