//! Debounced search-as-you-type state machine.
//!
//! [`DebouncedSearch`] does no I/O and keeps no clock. Each input change arms a
//! new [`TimerHandle`] (invalidating the previous one); the driver reports
//! when a handle's delay elapsed, and receives a [`FetchTicket`] when a fetch
//! must be issued. Settled fetches are applied only when their ticket is still
//! the current one, so a late result for a stale query can never overwrite
//! newer state.
//!
//! In the gallery the driver is [`crate::ui::core::TaskManager`], which runs
//! timers and fetches as tokio tasks and aborts superseded ones.

use crate::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_QUERY_LENGTH, DEFAULT_MOCK_LATENCY_MS};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;

/// Anything that can be offered as a search option.
pub trait OptionItem {
    fn display(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteOption {
    pub id: String,
    pub label: String,
}

impl RemoteOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl OptionItem for RemoteOption {
    fn display(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("remote fetch rejected: {0}")]
    Rejected(String),
}

/// Remote option source.
#[async_trait]
pub trait OptionFetcher<T>: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<Vec<T>, FetchError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub debounce: Duration,
    pub min_query_length: usize,
    /// Accept free-form text as the field value, not only picked options
    pub free_solo: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            free_solo: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Debouncing,
    Loading,
    Success,
    Errored,
}

/// Identifies one armed debounce timer. Only the most recently armed handle is
/// live; older handles are ignored when they fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Proof that a fetch was requested for a given query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    query: String,
    generation: u64,
}

impl FetchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<T> {
    pub raw_query: Option<String>,
    pub debounced_query: Option<String>,
    pub options: Vec<T>,
    pub loading: bool,
    pub errored: bool,
    pub phase: SearchPhase,
}

impl<T> Default for SearchState<T> {
    fn default() -> Self {
        Self {
            raw_query: None,
            debounced_query: None,
            options: Vec::new(),
            loading: false,
            errored: false,
            phase: SearchPhase::Idle,
        }
    }
}

pub struct DebouncedSearch<T: Clone> {
    config: SearchConfig,
    state: SearchState<T>,
    armed_timer: Option<TimerHandle>,
    timer_generation: u64,
    in_flight: Option<FetchTicket>,
    fetch_generation: u64,
    state_tx: watch::Sender<SearchState<T>>,
}

impl<T: Clone> DebouncedSearch<T> {
    pub fn new(config: SearchConfig) -> Self {
        let (state_tx, _) = watch::channel(SearchState::default());
        Self {
            config,
            state: SearchState::default(),
            armed_timer: None,
            timer_generation: 0,
            in_flight: None,
            fetch_generation: 0,
            state_tx,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn state(&self) -> &SearchState<T> {
        &self.state
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState<T>> {
        self.state_tx.subscribe()
    }

    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.armed_timer
    }

    pub fn in_flight(&self) -> Option<&FetchTicket> {
        self.in_flight.as_ref()
    }

    /// Record a new query and arm a fresh debounce timer.
    pub fn input_changed(&mut self, value: Option<String>) -> TimerHandle {
        self.timer_generation += 1;
        let handle = TimerHandle(self.timer_generation);
        self.armed_timer = Some(handle);
        self.state.raw_query = value;
        self.state.phase = SearchPhase::Debouncing;
        self.publish();
        handle
    }

    /// Typing in the input box. Returns the handle to arm, plus the value to
    /// commit to the form when free-form input is accepted.
    pub fn text_edited(&mut self, text: &str) -> (TimerHandle, Option<String>) {
        let handle = self.input_changed(Some(text.to_string()));
        let committed = self.config.free_solo.then(|| text.to_string());
        (handle, committed)
    }

    /// A debounce timer fired. Returns a ticket when a fetch must be issued.
    pub fn timer_elapsed(&mut self, handle: TimerHandle) -> Option<FetchTicket> {
        if self.armed_timer != Some(handle) {
            log::trace!("Search: ignoring stale timer {}", handle.generation());
            return None;
        }
        self.armed_timer = None;
        self.state.debounced_query = self.state.raw_query.clone();

        let query = match &self.state.debounced_query {
            Some(q) if q.chars().count() >= self.config.min_query_length => q.clone(),
            _ => {
                // Nothing to fetch; anything still in flight is now stale
                self.fetch_generation += 1;
                self.in_flight = None;
                self.state.options.clear();
                self.state.loading = false;
                self.state.phase = SearchPhase::Idle;
                self.publish();
                return None;
            }
        };

        self.fetch_generation += 1;
        let ticket = FetchTicket {
            query,
            generation: self.fetch_generation,
        };
        self.in_flight = Some(ticket.clone());
        self.state.options.clear();
        self.state.loading = true;
        self.state.phase = SearchPhase::Loading;
        self.publish();
        log::debug!("Search: fetching options for '{}'", ticket.query);
        Some(ticket)
    }

    /// Apply a settled fetch. Returns false when the result was stale and
    /// discarded.
    pub fn fetch_settled(&mut self, ticket: &FetchTicket, result: Result<Vec<T>, FetchError>) -> bool {
        let is_current = self.in_flight.as_ref() == Some(ticket)
            && self.state.debounced_query.as_deref() == Some(ticket.query());
        if !is_current {
            log::debug!("Search: discarding stale result for '{}'", ticket.query);
            return false;
        }

        self.in_flight = None;
        self.state.loading = false;
        let settled_phase = match result {
            Ok(options) => {
                self.state.options = options;
                self.state.errored = false;
                SearchPhase::Success
            }
            Err(e) => {
                log::warn!("Search: fetch for '{}' failed: {}", ticket.query, e);
                self.state.options.clear();
                self.state.errored = true;
                SearchPhase::Errored
            }
        };
        // A keystroke during the fetch keeps the field debouncing
        self.state.phase = if self.armed_timer.is_some() {
            SearchPhase::Debouncing
        } else {
            settled_phase
        };
        self.publish();
        true
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.state.clone());
    }
}

impl<T: Clone + OptionItem> DebouncedSearch<T> {
    /// An option was picked (or the selection cleared). The option's display
    /// label becomes the query; the returned value is what the form stores.
    pub fn select_option(&mut self, option: Option<&T>) -> (TimerHandle, Option<String>) {
        let label = option.map(|o| o.display().to_string());
        let handle = self.input_changed(label.clone());
        (handle, label)
    }
}

/// Option source used by the gallery's form story.
///
/// The query `"error"` is rejected immediately; anything else resolves after
/// the configured latency with three options derived from the query.
#[derive(Clone)]
pub struct MockOptionApi {
    latency: Duration,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockOptionApi {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every query received so far, oldest first
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

impl Default for MockOptionApi {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_MOCK_LATENCY_MS))
    }
}

#[async_trait]
impl OptionFetcher<RemoteOption> for MockOptionApi {
    async fn fetch(&self, query: &str) -> Result<Vec<RemoteOption>, FetchError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }

        if query == "error" {
            return Err(FetchError::Rejected("ERROR".to_string()));
        }

        tokio::time::sleep(self.latency).await;
        Ok(vec![
            RemoteOption::new("1", format!("{}-one", query)),
            RemoteOption::new("2", format!("{}-two", query)),
            RemoteOption::new("3", format!("{}-three", query)),
        ])
    }
}
