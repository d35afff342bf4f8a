use super::{decode_json, Binding, Payload, Trigger};
use crate::resource::{FetchError, MessagePolicy};
use serde::Deserialize;

const IPIFY_URL: &str = "https://api.ipify.org?format=json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PublicIp {
    pub ip: String,
}

pub const BINDING: Binding = Binding {
    trigger: Trigger::Auto,
    endpoint,
    decode,
    messages: MessagePolicy::new("Could not retrieve IP address."),
    empty_state: "No address loaded yet.",
};

fn endpoint(_query: &str, _now_ms: i64) -> String {
    IPIFY_URL.to_string()
}

fn decode(body: &[u8]) -> Result<Payload, FetchError> {
    decode_json::<PublicIp>(body).map(Payload::PublicIp)
}
