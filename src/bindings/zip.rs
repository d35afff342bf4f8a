use super::{decode_json, Binding, Payload, Trigger};
use crate::resource::{FetchError, MessagePolicy};
use serde::Deserialize;

const ZIPPOPOTAM_US_URL: &str = "https://api.zippopotam.us/us";

const NOT_FOUND: &str = "Could not find zip code information. Ensure it is a valid US Zip.";
const UNREACHABLE: &str = "Could not reach the zip lookup service.";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostalLookup {
    #[serde(rename = "post code")]
    pub post_code: String,
    pub country: String,
    #[serde(rename = "country abbreviation", default)]
    pub country_abbreviation: Option<String>,
    #[serde(default)]
    pub places: Vec<Place>,
}

/// Coordinates are kept as the service sends them (decimal strings).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    #[serde(rename = "place name")]
    pub place_name: String,
    pub state: String,
    #[serde(rename = "state abbreviation")]
    pub state_abbreviation: String,
    pub latitude: String,
    pub longitude: String,
}

/// The service answers unknown codes with 404 and `{}`.
pub const BINDING: Binding = Binding {
    trigger: Trigger::Query {
        default: "90210",
        placeholder: "Enter US Zip (e.g. 10001)",
    },
    endpoint,
    decode,
    messages: MessagePolicy::new(UNREACHABLE).with_rejected(NOT_FOUND),
    empty_state: "Enter a US Zip code to find location details.",
};

fn endpoint(query: &str, _now_ms: i64) -> String {
    format!("{}/{}", ZIPPOPOTAM_US_URL, urlencoding::encode(query))
}

fn decode(body: &[u8]) -> Result<Payload, FetchError> {
    decode_json::<PostalLookup>(body).map(Payload::Postal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        assert_eq!(endpoint("90210", 0), "https://api.zippopotam.us/us/90210");
        assert_eq!(endpoint("a/b", 0), "https://api.zippopotam.us/us/a%2Fb");
    }

    #[test]
    fn test_decode_places() {
        let body = br#"{
            "post code": "90210",
            "country": "United States",
            "country abbreviation": "US",
            "places": [{
                "place name": "Beverly Hills",
                "longitude": "-118.4065",
                "state": "California",
                "state abbreviation": "CA",
                "latitude": "34.0901"
            }]
        }"#;
        let Ok(Payload::Postal(lookup)) = decode(body) else {
            panic!("expected postal lookup");
        };
        assert_eq!(lookup.post_code, "90210");
        assert_eq!(lookup.country_abbreviation.as_deref(), Some("US"));
        assert_eq!(
            lookup.places,
            vec![Place {
                place_name: "Beverly Hills".into(),
                state: "California".into(),
                state_abbreviation: "CA".into(),
                latitude: "34.0901".into(),
                longitude: "-118.4065".into(),
            }]
        );
    }

    #[test]
    fn test_rejected_status_reads_as_not_found() {
        assert_eq!(FetchError::Status(404).user_message(&BINDING.messages), NOT_FOUND);
    }

    #[test]
    fn test_network_failure_does_not_blame_the_zip() {
        let message = FetchError::Transport("request timed out".into()).user_message(&BINDING.messages);
        assert_eq!(
            message,
            "Could not reach the zip lookup service. (network error: request timed out)"
        );
        assert!(!message.contains(NOT_FOUND));
    }

    #[test]
    fn test_malformed_body_uses_service_label() {
        let message = decode(b"{}").unwrap_err().user_message(&BINDING.messages);
        assert!(message.starts_with(UNREACHABLE));
    }
}
