use super::{decode_json, Binding, Payload, Trigger};
use crate::resource::{FetchError, MessagePolicy};
use serde::Deserialize;

const ADVICE_URL: &str = "https://api.adviceslip.com/advice";

#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub id: Option<u64>,
    pub text: String,
}

#[derive(Deserialize)]
struct AdviceResponse {
    slip: Slip,
}

#[derive(Deserialize)]
struct Slip {
    #[serde(default)]
    id: Option<u64>,
    advice: String,
}

pub const BINDING: Binding = Binding {
    trigger: Trigger::Auto,
    endpoint,
    decode,
    messages: MessagePolicy::new("Advice service unavailable."),
    empty_state: "No advice loaded yet.",
};

/// The service replays its cached slip on rapid repeat calls unless the URL
/// changes, hence the timestamp.
fn endpoint(_query: &str, now_ms: i64) -> String {
    format!("{}?t={}", ADVICE_URL, now_ms)
}

fn decode(body: &[u8]) -> Result<Payload, FetchError> {
    let response: AdviceResponse = decode_json(body)?;
    Ok(Payload::Advice(Advice {
        id: response.slip.id,
        text: response.slip.advice,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_carries_timestamp() {
        assert_eq!(
            endpoint("", 1_700_000_000_123),
            "https://api.adviceslip.com/advice?t=1700000000123"
        );
    }

    #[test]
    fn test_decode_slip() {
        let body = br#"{"slip": {"id": 117, "advice": "Never cut your own fringe."}}"#;
        assert_eq!(
            decode(body),
            Ok(Payload::Advice(Advice {
                id: Some(117),
                text: "Never cut your own fringe.".into(),
            }))
        );
    }

    #[test]
    fn test_missing_slip_is_malformed() {
        let body = br#"{"message": {"type": "notice", "text": "No advice slips found."}}"#;
        assert!(matches!(decode(body), Err(FetchError::Malformed(_))));
    }
}
