//! Fetch lifecycle for a single remote JSON resource.
//!
//! A [`ResourceState`] moves idle → loading → (data | error) for every attempt.
//! Each attempt is identified by a [`Ticket`]; completions carrying a ticket
//! other than the live one are ignored, so a superseded or unmounted attempt
//! can never overwrite newer state.

use thiserror::Error;

/// Identifies one fetch attempt: the panel instance it belongs to and the
/// attempt's generation within that instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub mount: u64,
    pub generation: u64,
}

/// Why a fetch attempt did not produce usable data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// DNS, connect, timeout or read failure
    #[error("network error: {0}")]
    Transport(String),
    /// The service answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),
    /// The body did not match the expected shape
    #[error("unexpected response: {0}")]
    Malformed(String),
    /// Success-shaped response that carries no answer
    #[error("{0}")]
    Empty(&'static str),
}

/// Per-binding labels used to turn a [`FetchError`] into the banner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessagePolicy {
    /// Generic failure text, suffixed with the specific reason
    pub failure: &'static str,
    /// Text used verbatim when the service rejects the request with a status
    pub rejected: Option<&'static str>,
}

impl MessagePolicy {
    pub const fn new(failure: &'static str) -> Self {
        Self {
            failure,
            rejected: None,
        }
    }

    pub const fn with_rejected(mut self, rejected: &'static str) -> Self {
        self.rejected = Some(rejected);
        self
    }
}

impl FetchError {
    /// Human-readable message for the error banner. Never empty.
    pub fn user_message(&self, policy: &MessagePolicy) -> String {
        let message = match (self, policy.rejected) {
            (FetchError::Empty(label), _) => label.to_string(),
            (FetchError::Status(_), Some(rejected)) => rejected.to_string(),
            (other, _) => format!("{} ({})", policy.failure, other),
        };

        if message.trim().is_empty() {
            policy.failure.to_string()
        } else {
            message
        }
    }
}

/// View state of one mounted panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    mount: u64,
    generation: u64,
}

impl<T> ResourceState<T> {
    pub fn new(mount: u64) -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            mount,
            generation: 0,
        }
    }

    pub fn mount(&self) -> u64 {
        self.mount
    }

    /// Nothing fetched, nothing failed, nothing in flight.
    pub fn is_idle(&self) -> bool {
        self.data.is_none() && self.error.is_none() && !self.loading
    }

    /// Start a new attempt, superseding any attempt still in flight.
    pub fn begin(&mut self, clear_data: bool) -> Ticket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        if clear_data {
            self.data = None;
        }
        Ticket {
            mount: self.mount,
            generation: self.generation,
        }
    }

    /// Whether `ticket` names the attempt currently in flight.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.loading && ticket.mount == self.mount && ticket.generation == self.generation
    }

    /// Apply the outcome of an attempt. Returns `false` (and leaves the state
    /// untouched) when the ticket is stale.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<T, FetchError>,
        policy: &MessagePolicy,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.user_message(policy));
            }
        }
        self.loading = false;
        true
    }
}
