use super::{decode_json, Binding, Payload, Trigger};
use crate::resource::{FetchError, MessagePolicy};
use serde::Deserialize;

const RANDOM_JOKE_URL: &str = "https://official-joke-api.appspot.com/random_joke";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

pub const BINDING: Binding = Binding {
    trigger: Trigger::Auto,
    endpoint,
    decode,
    messages: MessagePolicy::new("Failed to load joke service."),
    empty_state: "No joke loaded yet.",
};

fn endpoint(_query: &str, _now_ms: i64) -> String {
    RANDOM_JOKE_URL.to_string()
}

fn decode(body: &[u8]) -> Result<Payload, FetchError> {
    decode_json::<Joke>(body).map(Payload::Joke)
}
