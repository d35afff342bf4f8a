//! A mounted Resource Panel: one integration's lifecycle plus its local view
//! state (query text, punchline reveal).
//!
//! The panel never performs I/O itself. Operations that start a fetch return a
//! [`FetchRequest`]; the caller executes it and hands the resulting
//! [`FetchCompletion`] back to [`Panel::apply`].

use crate::bindings::{DecodeFn, Payload, Trigger};
use crate::catalog::IntegrationDescriptor;
use crate::resource::{FetchError, ResourceState, Ticket};
use chrono::Utc;

/// A fetch the panel wants performed.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub ticket: Ticket,
    pub integration: &'static str,
    pub url: String,
    pub decode: DecodeFn,
}

/// Outcome of a [`FetchRequest`], routed back to the panel that issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCompletion {
    pub ticket: Ticket,
    pub integration: &'static str,
    pub outcome: Result<Payload, FetchError>,
}

impl FetchRequest {
    /// Pair this request with its outcome.
    pub fn complete(&self, outcome: Result<Payload, FetchError>) -> FetchCompletion {
        FetchCompletion {
            ticket: self.ticket,
            integration: self.integration,
            outcome,
        }
    }
}

#[derive(Debug)]
pub struct Panel {
    descriptor: &'static IntegrationDescriptor,
    pub state: ResourceState<Payload>,
    /// Editable query text (query-driven panels only)
    pub query: String,
    /// Query of the most recent submitted fetch, reused by refresh
    last_query: Option<String>,
    pub punchline_revealed: bool,
}

impl Panel {
    /// Mount a fresh panel instance. `default_query` overrides the binding's
    /// prefilled query when given.
    pub fn mount(
        descriptor: &'static IntegrationDescriptor,
        mount_id: u64,
        default_query: Option<&str>,
    ) -> Self {
        let query = match descriptor.binding.trigger {
            Trigger::Query { default, .. } => default_query.unwrap_or(default).to_string(),
            Trigger::Auto => String::new(),
        };

        Self {
            descriptor,
            state: ResourceState::new(mount_id),
            query,
            last_query: None,
            punchline_revealed: false,
        }
    }

    pub fn descriptor(&self) -> &'static IntegrationDescriptor {
        self.descriptor
    }

    pub fn mount_id(&self) -> u64 {
        self.state.mount()
    }

    pub fn is_query(&self) -> bool {
        self.descriptor.binding.is_query()
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self.descriptor.binding.trigger {
            Trigger::Query { placeholder, .. } => Some(placeholder),
            Trigger::Auto => None,
        }
    }

    /// First display. Auto panels start fetching; query panels wait for input.
    pub fn activate(&mut self) -> Option<FetchRequest> {
        if self.is_query() || !self.state.is_idle() {
            return None;
        }
        Some(self.start(String::new()))
    }

    /// Whether the refresh control is actionable.
    pub fn can_refresh(&self) -> bool {
        !self.state.loading && (!self.is_query() || self.last_query.is_some())
    }

    /// Re-run the last fetch with the same parameters.
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        if !self.can_refresh() {
            return None;
        }
        let query = self.last_query.clone().unwrap_or_default();
        Some(self.start(query))
    }

    /// Submit `value` as the query. Blank values issue nothing.
    pub fn submit_query(&mut self, value: &str) -> Option<FetchRequest> {
        if !self.is_query() {
            return None;
        }
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some(self.start(value.to_string()))
    }

    /// Submit whatever is in the query line.
    pub fn submit(&mut self) -> Option<FetchRequest> {
        let value = self.query.clone();
        self.submit_query(&value)
    }

    /// Apply a completion. Returns `false` for stale or foreign completions.
    pub fn apply(&mut self, completion: FetchCompletion) -> bool {
        if completion.integration != self.descriptor.id {
            return false;
        }
        self.state.complete(
            completion.ticket,
            completion.outcome,
            &self.descriptor.binding.messages,
        )
    }

    pub fn reveal_punchline(&mut self) {
        if matches!(self.state.data, Some(Payload::Joke(_))) {
            self.punchline_revealed = true;
        }
    }

    /// Show a spinner in place of content: loading with nothing to dim.
    pub fn shows_spinner(&self) -> bool {
        self.state.loading && self.state.data.is_none()
    }

    /// Show the integration's empty-state text.
    pub fn shows_empty_state(&self) -> bool {
        !self.state.loading && self.state.data.is_none()
    }

    fn start(&mut self, query: String) -> FetchRequest {
        let binding = &self.descriptor.binding;
        let url = (binding.endpoint)(&query, Utc::now().timestamp_millis());
        let ticket = self.state.begin(binding.is_query());
        self.punchline_revealed = false;
        if binding.is_query() {
            self.last_query = Some(query);
        }

        tracing::debug!(
            integration = self.descriptor.id,
            generation = ticket.generation,
            "Starting fetch: {}",
            url
        );

        FetchRequest {
            ticket,
            integration: self.descriptor.id,
            url,
            decode: binding.decode,
        }
    }
}
