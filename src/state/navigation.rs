//! Navigation-related state types.
//!
//! This module contains enums for the input modes of the dashboard and the
//! actions available on a table row.

use crate::api::PostId;

/// Specifying where key presses are routed.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    Normal,
    Search,
    PageSizeMenu,
}

/// Specifying the actions offered on each table row.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RowAction {
    Edit,
    Delete,
    View,
}

impl RowAction {
    /// Placeholder text shown for actions that do not change any data.
    ///
    pub fn alert_text(&self, post_id: &PostId) -> Option<String> {
        match self {
            RowAction::Edit => Some(format!("Edit post with ID: {}", post_id)),
            RowAction::View => Some(format!("View post with ID: {}", post_id)),
            RowAction::Delete => None,
        }
    }
}
