//! Endpoint bindings: one module per third-party service.
//!
//! A [`Binding`] is plain configuration - how to build the URL, how to decode
//! the body (including the service's "no answer" sentinel) and which labels to
//! show. The generic lifecycle in [`crate::resource`] does the rest.

pub mod advice;
pub mod agify;
pub mod cat;
pub mod dog;
pub mod genderize;
pub mod ip;
pub mod joke;
pub mod zip;

use crate::resource::{FetchError, MessagePolicy};
use serde::de::DeserializeOwned;

pub use advice::Advice;
pub use agify::AgePrediction;
pub use cat::CatFact;
pub use dog::DogImage;
pub use genderize::{Gender, GenderPrediction};
pub use ip::PublicIp;
pub use joke::Joke;
pub use zip::{Place, PostalLookup};

/// How a panel starts fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fetch as soon as the panel is shown
    Auto,
    /// Fetch only when the user submits a non-blank query
    Query {
        default: &'static str,
        placeholder: &'static str,
    },
}

/// Builds the request URL from the submitted query (empty for auto bindings)
/// and the current time in epoch milliseconds.
pub type EndpointFn = fn(query: &str, now_ms: i64) -> String;

/// Decodes a success body into a payload or a classified error.
pub type DecodeFn = fn(body: &[u8]) -> Result<Payload, FetchError>;

#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub trigger: Trigger,
    pub endpoint: EndpointFn,
    pub decode: DecodeFn,
    pub messages: MessagePolicy,
    /// Shown when there is no data and nothing is loading
    pub empty_state: &'static str,
}

impl Binding {
    pub fn is_query(&self) -> bool {
        matches!(self.trigger, Trigger::Query { .. })
    }
}

/// Parsed result of any binding.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    CatFact(CatFact),
    DogImage(DogImage),
    Joke(Joke),
    Advice(Advice),
    PublicIp(PublicIp),
    Age(AgePrediction),
    Gender(GenderPrediction),
    Postal(PostalLookup),
}

impl Payload {
    /// One-line plain text rendering, used by the command-line fetcher and logs.
    pub fn summary(&self) -> String {
        match self {
            Payload::CatFact(f) => format!("\"{}\" ({} chars)", f.fact, f.length),
            Payload::DogImage(d) => match &d.breed {
                Some(breed) => format!("{} ({})", d.url, breed),
                None => d.url.clone(),
            },
            Payload::Joke(j) => format!("{} / {}", j.setup, j.punchline),
            Payload::Advice(a) => a.text.clone(),
            Payload::PublicIp(ip) => ip.ip.clone(),
            Payload::Age(a) => format!("age {} from {} records", a.age, a.count),
            Payload::Gender(g) => format!("{} ({}%)", g.gender.label(), g.probability_percent()),
            Payload::Postal(p) => format!(
                "{} {}: {} place(s)",
                p.post_code,
                p.country,
                p.places.len()
            ),
        }
    }

    /// External URL the payload points at, if any.
    pub fn link(&self) -> Option<&str> {
        match self {
            Payload::DogImage(d) => Some(d.url.as_str()),
            _ => None,
        }
    }
}

/// Deserialize a JSON body, classifying failures as malformed.
pub(crate) fn decode_json<W: DeserializeOwned>(body: &[u8]) -> Result<W, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Malformed(e.to_string()))
}
