//! Application state management module.
//!
//! This module contains the state behind the dashboard, including:
//! - Main `State` struct that owns the list pipeline state and UI flags
//! - Navigation types (Mode, RowAction)

mod navigation;

pub use navigation::{Mode, RowAction};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
