use super::{decode_json, Binding, Payload, Trigger};
use crate::resource::{FetchError, MessagePolicy};
use serde::Deserialize;

const GENDERIZE_URL: &str = "https://api.genderize.io";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenderPrediction {
    pub name: Option<String>,
    pub gender: Gender,
    /// Confidence as a 0-1 fraction
    pub probability: f64,
}

impl GenderPrediction {
    /// Probability as a whole percentage, rounded.
    pub fn probability_percent(&self) -> u16 {
        (self.probability.clamp(0.0, 1.0) * 100.0).round() as u16
    }

    /// Filled cells of a bar `width` cells wide.
    pub fn bar_fill(&self, width: u16) -> u16 {
        let filled = (self.probability.clamp(0.0, 1.0) * f64::from(width)).round() as u16;
        filled.min(width)
    }
}

#[derive(Deserialize)]
struct GenderizeResponse {
    #[serde(default)]
    name: Option<String>,
    gender: Option<Gender>,
    #[serde(default)]
    probability: f64,
}

pub const BINDING: Binding = Binding {
    trigger: Trigger::Query {
        default: "",
        placeholder: "Enter a first name...",
    },
    endpoint,
    decode,
    messages: MessagePolicy::new("Could not fetch a gender prediction."),
    empty_state: "Enter a name to predict gender.",
};

fn endpoint(query: &str, _now_ms: i64) -> String {
    format!("{}?name={}", GENDERIZE_URL, urlencoding::encode(query))
}

fn decode(body: &[u8]) -> Result<Payload, FetchError> {
    let response: GenderizeResponse = decode_json(body)?;
    let gender = response
        .gender
        .ok_or(FetchError::Empty("No prediction available"))?;
    Ok(Payload::Gender(GenderPrediction {
        name: response.name,
        gender,
        probability: response.probability,
    }))
}
