//! A terminal dashboard that fetches posts from a JSON API and shows them in
//! a paginated, searchable, sortable table.
//!
//! The list pipeline in [`pipeline`] is usable on its own: it is a pure
//! filter → sort → paginate transformation over a caller-owned
//! [`pipeline::ListState`].

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod pipeline;
pub mod state;
pub mod ui;
pub mod utils;
