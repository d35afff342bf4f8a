use super::{decode_json, Binding, Payload, Trigger};
use crate::resource::{FetchError, MessagePolicy};
use serde::Deserialize;

const AGIFY_URL: &str = "https://api.agify.io";

#[derive(Debug, Clone, PartialEq)]
pub struct AgePrediction {
    pub name: Option<String>,
    pub age: u32,
    /// Number of records the prediction is based on
    pub count: u64,
}

#[derive(Deserialize)]
struct AgifyResponse {
    #[serde(default)]
    name: Option<String>,
    age: Option<u32>,
    #[serde(default)]
    count: u64,
}

pub const BINDING: Binding = Binding {
    trigger: Trigger::Query {
        default: "",
        placeholder: "Enter a first name...",
    },
    endpoint,
    decode,
    messages: MessagePolicy::new("Could not fetch an age prediction."),
    empty_state: "Enter a name above to predict the age.",
};

fn endpoint(query: &str, _now_ms: i64) -> String {
    format!("{}?name={}", AGIFY_URL, urlencoding::encode(query))
}

fn decode(body: &[u8]) -> Result<Payload, FetchError> {
    let response: AgifyResponse = decode_json(body)?;
    let age = response
        .age
        .ok_or(FetchError::Empty("No data found for this name"))?;
    Ok(Payload::Age(AgePrediction {
        name: response.name,
        age,
        count: response.count,
    }))
}
