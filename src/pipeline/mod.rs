//! List-view data pipeline.
//!
//! This module owns the view state of the post table and derives the
//! render-ready page from it:
//! - `ListState`: the caller-owned bundle of posts, search term, sort field
//!   and pagination settings
//! - `view`: the pure filter → sort → paginate → summarize functions

mod view;

pub use view::{derive_view, filter, locale_cmp, paginate, sort, summarize, ListView, Summary};

use crate::api::{Post, PostId};
use log::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Specifying the sortable columns.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SortField {
    Title,
    Body,
}

impl SortField {
    /// Parse a column name, returning `None` for anything but `title` or `body`.
    ///
    pub fn parse(name: &str) -> Option<SortField> {
        match name {
            "title" => Some(SortField::Title),
            "body" => Some(SortField::Body),
            _ => None,
        }
    }

    /// Return the text of the post this field sorts on.
    ///
    pub fn value<'a>(&self, post: &'a Post) -> &'a str {
        match self {
            SortField::Title => &post.title,
            SortField::Body => &post.body,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Title => write!(f, "title"),
            SortField::Body => write!(f, "body"),
        }
    }
}

/// Rows per page, restricted to the sizes offered by the page size menu.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    TwentyFive,
    Thirty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::TwentyFive,
        PageSize::Thirty,
    ];

    pub fn get(&self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::TwentyFive => 25,
            PageSize::Thirty => 30,
        }
    }

    /// Position of this size within `PageSize::ALL`.
    ///
    pub fn index(&self) -> usize {
        PageSize::ALL
            .iter()
            .position(|size| size == self)
            .unwrap_or_default()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| format!("unsupported page size {} (expected 10, 20, 25 or 30)", value))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// What happens to the current page when the search term, sort field or page
/// size changes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum PagePolicy {
    /// Keep the current page, even if it is now past the last page.
    #[default]
    Preserve,
    /// Go back to the first page.
    ResetToFirst,
}

/// Enabled state of the previous/next page controls.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Navigation {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl Navigation {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Navigation {
            previous_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
        }
    }
}

/// Houses the view state driving the pipeline.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    items: Vec<Post>,
    search_term: String,
    sort_field: Option<SortField>,
    current_page: usize,
    page_size: PageSize,
    page_policy: PagePolicy,
}

impl Default for ListState {
    fn default() -> Self {
        ListState {
            items: vec![],
            search_term: String::new(),
            sort_field: None,
            current_page: 1,
            page_size: PageSize::default(),
            page_policy: PagePolicy::default(),
        }
    }
}

impl ListState {
    /// Return a new empty instance with the given page settings.
    ///
    pub fn new(page_size: PageSize, page_policy: PagePolicy) -> Self {
        ListState {
            page_size,
            page_policy,
            ..ListState::default()
        }
    }

    pub fn items(&self) -> &[Post] {
        &self.items
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_field(&self) -> Option<SortField> {
        self.sort_field
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn page_policy(&self) -> PagePolicy {
        self.page_policy
    }

    /// Replace the working set of posts.
    ///
    pub fn set_items(&mut self, items: Vec<Post>) -> &mut Self {
        debug!("Replacing list items with {} posts.", items.len());
        self.items = items;
        self
    }

    /// Replace the search term.
    ///
    pub fn set_search_term(&mut self, text: &str) -> &mut Self {
        self.search_term = text.to_owned();
        self.apply_page_policy();
        self
    }

    /// Sort ascending on the given field.
    ///
    pub fn set_sort_field(&mut self, field: SortField) -> &mut Self {
        debug!("Sorting posts by {}.", field);
        self.sort_field = Some(field);
        self.apply_page_policy();
        self
    }

    /// Sort on the column with the given name. Unknown names leave the
    /// ordering untouched.
    ///
    pub fn set_sort_field_named(&mut self, name: &str) -> &mut Self {
        match SortField::parse(name) {
            Some(field) => self.set_sort_field(field),
            None => {
                warn!("Ignoring sort request for unknown field '{}'.", name);
                self
            }
        }
    }

    /// Set the 1-indexed current page without bounds checks.
    ///
    pub fn set_page(&mut self, page: usize) -> &mut Self {
        self.current_page = page;
        self
    }

    pub fn set_page_size(&mut self, page_size: PageSize) -> &mut Self {
        self.page_size = page_size;
        self.apply_page_policy();
        self
    }

    /// Remove the post with the given id. Returns whether a post was removed.
    ///
    pub fn remove_item(&mut self, id: &PostId) -> bool {
        let before = self.items.len();
        self.items.retain(|post| &post.id != id);
        let removed = self.items.len() < before;
        if removed {
            info!("Removed post {}.", id);
        } else {
            debug!("No post {} to remove.", id);
        }
        removed
    }

    /// Recompute the derived page and summary.
    ///
    pub fn view(&self) -> ListView {
        derive_view(
            &self.items,
            &self.search_term,
            self.sort_field,
            self.current_page,
            self.page_size.get(),
        )
    }

    /// Return which page controls should be enabled.
    ///
    pub fn navigation(&self) -> Navigation {
        let filtered_count = filter(&self.items, &self.search_term).len();
        let total_pages = summarize(
            self.items.len(),
            filtered_count,
            self.current_page,
            self.page_size.get(),
        )
        .total_pages;
        Navigation::new(self.current_page, total_pages)
    }

    pub fn next_page(&mut self) -> &mut Self {
        if self.navigation().next_enabled {
            self.current_page += 1;
        }
        self
    }

    pub fn previous_page(&mut self) -> &mut Self {
        if self.navigation().previous_enabled {
            self.current_page -= 1;
        }
        self
    }

    fn apply_page_policy(&mut self) {
        if self.page_policy == PagePolicy::ResetToFirst {
            self.current_page = 1;
        }
    }
}
