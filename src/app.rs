//! Application state machine.
//!
//! `App` owns the per-screen state and the catalog client. Network work is
//! spawned onto the runtime; results come back as [`AppMessage`]s over an
//! unbounded channel and are applied by [`App::handle_message`]. All
//! consistency (rating aggregates in particular) is delegated to the
//! backend: after a rating is accepted the whole tool is re-fetched rather
//! than patched locally.

use crate::api::{ApiError, CatalogClient};
use crate::models::{Stats, Tool, ToolSummary};
use crate::state::{DetailState, DetailStatus, ListingFocus, ListingState, RatingField, SubmitState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Which screen is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Listing,
    Detail,
    Submit,
}

/// Results of async operations, sent back to the event loop.
#[derive(Debug)]
pub enum AppMessage {
    /// Tool listing resolved
    ToolsLoaded(Vec<ToolSummary>),
    /// Tool listing failed
    ToolsFailed(String),
    /// Category listing resolved
    CategoriesLoaded(Vec<String>),
    /// Category listing failed
    CategoriesFailed(String),
    /// Stats snapshot resolved
    StatsLoaded(Stats),
    /// Stats snapshot failed
    StatsFailed(String),
    /// Single-tool fetch resolved
    ToolLoaded(Box<Tool>),
    /// The server does not know this tool id
    ToolMissing(i64),
    /// Single-tool fetch failed for another reason
    ToolFailed { id: i64, error: String },
    /// Rating accepted by the server; the tool must be re-fetched
    RatingAccepted { tool_id: i64 },
    /// Rating rejected; the form keeps its entered values
    RatingRejected { message: String },
    /// Tool created; navigate to its detail view
    ToolCreated { id: i64 },
    /// Tool creation failed; the form keeps its entered values
    ToolCreateFailed { message: String },
}

/// Top-level application state.
pub struct App {
    client: Arc<CatalogClient>,
    pub screen: Screen,
    pub listing: ListingState,
    pub detail: DetailState,
    pub submit: SubmitState,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop (it needs ownership for `select!`)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(client: CatalogClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            client: Arc::new(client),
            screen: Screen::default(),
            listing: ListingState::new(),
            detail: DetailState::default(),
            submit: SubmitState::new(),
            message_tx,
            message_rx: Some(message_rx),
            needs_redraw: true,
            should_quit: false,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Async commands
    // ------------------------------------------------------------------

    /// Re-issue the three listing fetches (tools, categories, stats) as
    /// independent tasks. They settle in any order; the loading state
    /// clears once all three have reported back. A failure in one never
    /// blocks the others' results — that slice of the view just keeps
    /// its previous value.
    ///
    /// There is no cancellation of in-flight fetches: a superseded
    /// response may still land and overwrite newer state.
    pub fn reload_listing(&mut self) {
        self.listing.begin_reload();
        let filter = self.listing.filters.to_request();

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match client.list_tools(&filter).await {
                Ok(tools) => AppMessage::ToolsLoaded(tools),
                Err(e) => AppMessage::ToolsFailed(e.to_string()),
            };
            let _ = tx.send(msg);
        });

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match client.list_categories().await {
                Ok(categories) => AppMessage::CategoriesLoaded(categories),
                Err(e) => AppMessage::CategoriesFailed(e.to_string()),
            };
            let _ = tx.send(msg);
        });

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match client.get_stats().await {
                Ok(stats) => AppMessage::StatsLoaded(stats),
                Err(e) => AppMessage::StatsFailed(e.to_string()),
            };
            let _ = tx.send(msg);
        });
    }

    /// Navigate to the detail screen and fetch the tool.
    pub fn open_detail(&mut self, id: i64) {
        self.screen = Screen::Detail;
        self.detail.open(id);
        self.fetch_tool(id);
    }

    fn fetch_tool(&self, id: i64) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match client.get_tool(id).await {
                Ok(tool) => AppMessage::ToolLoaded(Box::new(tool)),
                Err(ApiError::NotFound) => AppMessage::ToolMissing(id),
                Err(e) => AppMessage::ToolFailed {
                    id,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    /// Submit the rating form for the currently shown tool. Does nothing
    /// when user_name is blank or a submission is already in flight.
    pub fn submit_rating(&mut self) {
        if self.detail.form.submitting {
            return;
        }
        let Some(tool_id) = self.detail.tool_id else {
            return;
        };
        let Some(draft) = self.detail.form.to_draft() else {
            self.detail.form.error = Some("Your name is required".to_string());
            return;
        };
        self.detail.form.submitting = true;
        self.detail.form.error = None;

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match client.create_rating(tool_id, &draft).await {
                Ok(_) => AppMessage::RatingAccepted { tool_id },
                Err(e) => AppMessage::RatingRejected {
                    message: e.user_message(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    /// Submit the new-tool form. Blank required fields block the request
    /// client-side with a field error.
    pub fn submit_tool(&mut self) {
        if self.submit.submitting {
            return;
        }
        let draft = match self.submit.to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                self.submit.error = Some(message);
                return;
            }
        };
        self.submit.submitting = true;
        self.submit.error = None;

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match client.create_tool(&draft).await {
                Ok(tool) => AppMessage::ToolCreated { id: tool.id },
                Err(e) => AppMessage::ToolCreateFailed {
                    message: e.user_message(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn back_to_listing(&mut self) {
        self.screen = Screen::Listing;
        self.reload_listing();
    }

    pub fn open_submit(&mut self) {
        self.screen = Screen::Submit;
        self.submit.clear();
    }

    // ------------------------------------------------------------------
    // Message handling
    // ------------------------------------------------------------------

    /// Apply an async result to the state. Failures are logged and leave
    /// the affected slice of the view at its previous value.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::ToolsLoaded(tools) => {
                self.listing.set_tools(tools);
                self.listing.settle_fetch();
            }
            AppMessage::ToolsFailed(e) => {
                error!(error = %e, "tool listing failed");
                self.listing.settle_fetch();
            }
            AppMessage::CategoriesLoaded(categories) => {
                self.listing.categories = categories;
                self.listing.settle_fetch();
            }
            AppMessage::CategoriesFailed(e) => {
                error!(error = %e, "category listing failed");
                self.listing.settle_fetch();
            }
            AppMessage::StatsLoaded(stats) => {
                self.listing.stats = Some(stats);
                self.listing.settle_fetch();
            }
            AppMessage::StatsFailed(e) => {
                error!(error = %e, "stats fetch failed");
                self.listing.settle_fetch();
            }
            AppMessage::ToolLoaded(tool) => {
                // Ignore a stale response for a tool we've navigated away from.
                if self.detail.tool_id == Some(tool.id) {
                    self.detail.set_tool(*tool);
                }
            }
            AppMessage::ToolMissing(id) => {
                info!(id, "tool not found");
                if self.detail.tool_id == Some(id) {
                    self.detail.set_not_found();
                }
            }
            AppMessage::ToolFailed { id, error: e } => {
                error!(id, error = %e, "tool fetch failed");
                if self.detail.tool_id == Some(id) {
                    self.detail.status = DetailStatus::Failed(e);
                }
            }
            AppMessage::RatingAccepted { tool_id } => {
                // Pessimistic refresh: the server owns the aggregate, so
                // re-fetch the whole tool instead of appending locally.
                self.detail.form.clear();
                if self.detail.tool_id == Some(tool_id) {
                    self.detail.begin_refresh();
                    self.fetch_tool(tool_id);
                }
            }
            AppMessage::RatingRejected { message } => {
                error!(error = %message, "rating submission rejected");
                self.detail.form.submitting = false;
                self.detail.form.error = Some(message);
            }
            AppMessage::ToolCreated { id } => {
                info!(id, "tool created");
                self.submit.submitting = false;
                self.submit.clear();
                self.open_detail(id);
            }
            AppMessage::ToolCreateFailed { message } => {
                error!(error = %message, "tool submission rejected");
                self.submit.submitting = false;
                self.submit.error = Some(message);
            }
        }
    }

    // ------------------------------------------------------------------
    // Key handling
    // ------------------------------------------------------------------

    /// Dispatch a key press to the active screen.
    pub fn on_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        // Global binds
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Listing => self.on_listing_key(key),
            Screen::Detail => self.on_detail_key(key),
            Screen::Submit => self.on_submit_key(key),
        }
    }

    fn on_listing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.listing.focus = self.listing.focus.next(),
            KeyCode::BackTab => self.listing.focus = self.listing.focus.prev(),
            KeyCode::Esc => {
                // Esc clears the focused text filter, or quits from the grid.
                match self.listing.focus {
                    ListingFocus::Search if !self.listing.filters.search.is_empty() => {
                        self.listing.filters.search.clear();
                        self.reload_listing();
                    }
                    ListingFocus::Language if !self.listing.filters.language.is_empty() => {
                        self.listing.filters.language.clear();
                        self.reload_listing();
                    }
                    ListingFocus::Grid => self.quit(),
                    _ => self.listing.focus = ListingFocus::Grid,
                }
            }
            KeyCode::Up => {
                if self.listing.focus == ListingFocus::Grid {
                    self.listing.select_prev();
                }
            }
            KeyCode::Down => {
                if self.listing.focus == ListingFocus::Grid {
                    self.listing.select_next();
                }
            }
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                let changed = match self.listing.focus {
                    ListingFocus::Category => self.listing.cycle_category(forward),
                    ListingFocus::Sort => {
                        self.listing.filters.sort_by = self.listing.filters.sort_by.next();
                        true
                    }
                    _ => false,
                };
                if changed {
                    self.reload_listing();
                }
            }
            KeyCode::Enter => {
                if self.listing.focus == ListingFocus::Grid {
                    if let Some(tool) = self.listing.selected_tool() {
                        self.open_detail(tool.id);
                    }
                } else {
                    self.listing.focus = ListingFocus::Grid;
                }
            }
            KeyCode::Char('q') if self.listing.focus == ListingFocus::Grid => self.quit(),
            KeyCode::Char('n') if self.listing.focus == ListingFocus::Grid => self.open_submit(),
            KeyCode::Char('r') if self.listing.focus == ListingFocus::Grid => {
                self.reload_listing();
            }
            KeyCode::Char(c) => {
                if self.listing.type_char(c) {
                    self.reload_listing();
                }
            }
            KeyCode::Backspace => {
                if self.listing.backspace() {
                    self.reload_listing();
                }
            }
            _ => {}
        }
    }

    fn on_detail_key(&mut self, key: KeyEvent) {
        // The not-found state is terminal: any of these just goes back.
        if self.detail.status == DetailStatus::NotFound {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.back_to_listing();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.back_to_listing(),
            KeyCode::Tab => self.detail.form.focus = self.detail.form.focus.next(),
            KeyCode::BackTab => self.detail.form.focus = self.detail.form.focus.prev(),
            KeyCode::Up | KeyCode::Right if self.detail.form.focus == RatingField::Score => {
                self.detail.form.step_rating(true);
            }
            KeyCode::Down | KeyCode::Left if self.detail.form.focus == RatingField::Score => {
                self.detail.form.step_rating(false);
            }
            KeyCode::Enter => self.submit_rating(),
            KeyCode::Char(c) => self.detail.form.type_char(c),
            KeyCode::Backspace => self.detail.form.backspace(),
            _ => {}
        }
    }

    fn on_submit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.back_to_listing(),
            KeyCode::Tab | KeyCode::Down => self.submit.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.submit.focus_prev(),
            KeyCode::Enter => self.submit_tool(),
            KeyCode::Char(c) => self.submit.type_char(c),
            KeyCode::Backspace => self.submit.backspace(),
            _ => {}
        }
    }
}
