pub mod render;

pub use render::render;

use crate::api::error::USER_FACING_ERROR;
use crate::api::traits::SearchApi;
use crate::api::types::{ParamField, SearchParams};
use crate::models::InsertItem;
use tracing::{debug, error, info};

/// Outcome-driven display state of the search view.
///
/// Exactly one variant is active at a time; a single tagged state rules out
/// the inconsistent flag combinations a loading bool plus a separate error
/// string would allow (loading with a stale error still set, and so on).
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// No fetch has been issued yet.
    Idle,
    /// A fetch is in flight. `stale` holds the previous result list when the
    /// view is configured to keep it visible while loading.
    Loading { stale: Vec<InsertItem> },
    /// The last fetch succeeded with these items.
    Success(Vec<InsertItem>),
    /// The last fetch failed; only this message is shown, never stale items.
    Error(String),
}

/// What happens to previously displayed results when a new fetch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StalePolicy {
    /// Keep showing the previous result list until the new outcome lands.
    /// Matches the original form behavior, where results were cleared only
    /// on error.
    KeepStaleResults,
    /// Blank the display as soon as loading starts.
    ClearOnLoading,
}

/// Ticket identifying one fetch invocation. Completions are applied only if
/// their ticket is still the latest issued, so when fetches overlap the
/// display always reflects the most recently submitted search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// The search view: parameter store, fetch state and the submission cycle.
pub struct SearchView<A: SearchApi> {
    api: A,
    params: SearchParams,
    state: FetchState,
    policy: StalePolicy,
    latest_seq: u64,
}

impl<A: SearchApi> SearchView<A> {
    pub fn new(api: A, params: SearchParams, policy: StalePolicy) -> Self {
        Self {
            api,
            params,
            state: FetchState::Idle,
            policy,
            latest_seq: 0,
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Update one parameter field from raw user input. Only mutates the
    /// store; a fetch happens on explicit submission, never on edits.
    pub fn set_param(&mut self, field: ParamField, raw: &str) -> Result<(), String> {
        self.params.set(field, raw)
    }

    /// Start a fetch: bump the sequence, enter Loading per the stale policy
    /// and hand back the ticket plus a snapshot of the current parameters.
    pub fn begin_search(&mut self) -> (FetchTicket, SearchParams) {
        self.latest_seq += 1;
        let stale = match (&self.state, self.policy) {
            (FetchState::Success(items), StalePolicy::KeepStaleResults) => items.clone(),
            (FetchState::Loading { stale }, StalePolicy::KeepStaleResults) => stale.clone(),
            _ => Vec::new(),
        };
        self.state = FetchState::Loading { stale };
        (FetchTicket(self.latest_seq), self.params.clone())
    }

    /// Apply a fetch outcome. Outcomes from superseded tickets are discarded
    /// silently. Failures collapse to the fixed user-facing message; the
    /// technical cause only goes to the log.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<InsertItem>, crate::api::ApiError>,
    ) {
        if ticket.0 != self.latest_seq {
            debug!(
                "Discarding stale fetch result (ticket {} superseded by {})",
                ticket.0, self.latest_seq
            );
            return;
        }
        match outcome {
            Ok(items) => {
                info!("Search returned {} items", items.len());
                self.state = FetchState::Success(items);
            }
            Err(e) => {
                error!("Error fetching items: {e}");
                self.state = FetchState::Error(USER_FACING_ERROR.to_string());
            }
        }
    }

    /// One full submission cycle: exactly one outbound request, awaited to
    /// completion.
    pub async fn submit(&mut self) {
        let (ticket, params) = self.begin_search();
        let outcome = self.api.search(&params).await;
        self.complete(ticket, outcome);
    }
}
