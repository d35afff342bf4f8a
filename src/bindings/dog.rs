use super::{decode_json, Binding, Payload, Trigger};
use crate::resource::{FetchError, MessagePolicy};
use serde::Deserialize;

const DOG_IMAGE_URL: &str = "https://dog.ceo/api/breeds/image/random";

#[derive(Debug, Clone, PartialEq)]
pub struct DogImage {
    pub url: String,
    /// Breed parsed from the image path, e.g. "afghan hound"
    pub breed: Option<String>,
}

#[derive(Deserialize)]
struct DogResponse {
    message: String,
}

pub const BINDING: Binding = Binding {
    trigger: Trigger::Auto,
    endpoint,
    decode,
    messages: MessagePolicy::new("Could not load a dog image."),
    empty_state: "No dog image loaded yet.",
};

fn endpoint(_query: &str, _now_ms: i64) -> String {
    DOG_IMAGE_URL.to_string()
}

fn decode(body: &[u8]) -> Result<Payload, FetchError> {
    let response: DogResponse = decode_json(body)?;
    if !response.message.starts_with("http") {
        return Err(FetchError::Malformed(format!(
            "expected an image URL, got {:?}",
            response.message
        )));
    }
    let breed = breed_from_url(&response.message);
    Ok(Payload::DogImage(DogImage {
        url: response.message,
        breed,
    }))
}

/// Image URLs look like `.../breeds/<breed>[-<sub>]/<file>.jpg`; sub-breeds
/// read naturally when put first ("hound-afghan" -> "afghan hound").
pub fn breed_from_url(url: &str) -> Option<String> {
    let mut segments = url.split('/');
    segments.find(|s| *s == "breeds")?;
    let slug = segments.next().filter(|s| !s.is_empty())?;

    let words: Vec<&str> = slug.split('-').filter(|w| !w.is_empty()).rev().collect();
    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}
