//! Listing screen state: filters, fetched collections, loading tracking.

use crate::models::{SortBy, Stats, ToolFilter, ToolSummary};

/// Number of concurrent fetches a listing reload issues
/// (tools, categories, stats).
const RELOAD_FETCHES: u8 = 3;

/// Which filter-bar control (or the grid) has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingFocus {
    Search,
    Category,
    Language,
    Sort,
    #[default]
    Grid,
}

impl ListingFocus {
    pub fn next(self) -> Self {
        match self {
            ListingFocus::Search => ListingFocus::Category,
            ListingFocus::Category => ListingFocus::Language,
            ListingFocus::Language => ListingFocus::Sort,
            ListingFocus::Sort => ListingFocus::Grid,
            ListingFocus::Grid => ListingFocus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ListingFocus::Search => ListingFocus::Grid,
            ListingFocus::Category => ListingFocus::Search,
            ListingFocus::Language => ListingFocus::Category,
            ListingFocus::Sort => ListingFocus::Language,
            ListingFocus::Grid => ListingFocus::Sort,
        }
    }
}

/// Raw filter input as the user typed it. Empty strings mean "unset"
/// and are dropped when building the outgoing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub category: String,
    pub language: String,
    pub sort_by: SortBy,
}

impl FilterState {
    /// Build the request filter, omitting blank fields entirely.
    pub fn to_request(&self) -> ToolFilter {
        fn non_blank(s: &str) -> Option<String> {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        ToolFilter {
            skip: None,
            limit: None,
            category: non_blank(&self.category),
            language: non_blank(&self.language),
            search: non_blank(&self.search),
            sort_by: self.sort_by,
        }
    }
}

/// State for the listing screen.
#[derive(Debug, Default)]
pub struct ListingState {
    pub filters: FilterState,
    pub focus: ListingFocus,
    pub tools: Vec<ToolSummary>,
    pub categories: Vec<String>,
    pub stats: Option<Stats>,
    /// Index into the grid, clamped to the current tools
    pub selected: usize,
    /// Outstanding fetches from the current reload; loading while > 0
    pending: u8,
    /// At least one reload has fully settled
    settled_once: bool,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a reload (three concurrent fetches).
    pub fn begin_reload(&mut self) {
        self.pending = RELOAD_FETCHES;
    }

    /// Record one fetch settling, success or failure.
    pub fn settle_fetch(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        if self.pending == 0 {
            self.settled_once = true;
        }
    }

    /// True while any fetch from the current reload is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// True when a completed (non-loading) fetch produced no tools.
    /// Distinct from the initial loading state.
    pub fn is_empty_result(&self) -> bool {
        self.settled_once && !self.is_loading() && self.tools.is_empty()
    }

    pub fn set_tools(&mut self, tools: Vec<ToolSummary>) {
        self.tools = tools;
        self.clamp_selection();
    }

    /// Currently selected tool, if the grid is non-empty.
    pub fn selected_tool(&self) -> Option<&ToolSummary> {
        self.tools.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.tools.is_empty() && self.selected + 1 < self.tools.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.tools.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.tools.len() {
            self.selected = self.tools.len() - 1;
        }
    }

    /// Cycle the category filter through "" (all) and the known
    /// categories. Returns true when the filter changed.
    pub fn cycle_category(&mut self, forward: bool) -> bool {
        if self.categories.is_empty() {
            return false;
        }
        // Position 0 is "all categories" (empty filter).
        let count = self.categories.len() + 1;
        let current = self
            .categories
            .iter()
            .position(|c| *c == self.filters.category)
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.filters.category = if next == 0 {
            String::new()
        } else {
            self.categories[next - 1].clone()
        };
        true
    }

    /// Apply a typed character to the focused text filter.
    /// Returns true when a filter value changed.
    pub fn type_char(&mut self, c: char) -> bool {
        match self.focus {
            ListingFocus::Search => {
                self.filters.search.push(c);
                true
            }
            ListingFocus::Language => {
                self.filters.language.push(c);
                true
            }
            _ => false,
        }
    }

    /// Apply backspace to the focused text filter.
    /// Returns true when a filter value changed.
    pub fn backspace(&mut self) -> bool {
        match self.focus {
            ListingFocus::Search => self.filters.search.pop().is_some(),
            ListingFocus::Language => self.filters.language.pop().is_some(),
            _ => false,
        }
    }
}
