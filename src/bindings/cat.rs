use super::{decode_json, Binding, Payload, Trigger};
use crate::resource::{FetchError, MessagePolicy};
use serde::Deserialize;

const CAT_FACT_URL: &str = "https://catfact.ninja/fact";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatFact {
    pub fact: String,
    pub length: u32,
}

pub const BINDING: Binding = Binding {
    trigger: Trigger::Auto,
    endpoint,
    decode,
    messages: MessagePolicy::new("Could not load a cat fact."),
    empty_state: "No cat fact loaded yet.",
};

fn endpoint(_query: &str, _now_ms: i64) -> String {
    CAT_FACT_URL.to_string()
}

fn decode(body: &[u8]) -> Result<Payload, FetchError> {
    decode_json::<CatFact>(body).map(Payload::CatFact)
}
