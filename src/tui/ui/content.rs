//! Integration-specific content of the panel body.

use crate::bindings::{
    Advice, AgePrediction, CatFact, DogImage, Gender, GenderPrediction, Joke, Payload,
    PostalLookup, PublicIp,
};
use crate::panel::Panel;
use crate::util::group_thousands;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const MAX_BAR_WIDTH: u16 = 40;

const IP_NOTE: &str = "Note: This is your public-facing IP address as seen by external servers.";

/// Lines for the panel body, given the usable `width`.
///
/// Empty when the panel is loading without data; the caller draws a spinner.
pub fn content_lines(panel: &Panel, width: u16) -> Vec<Line<'static>> {
    match &panel.state.data {
        Some(payload) => payload_lines(payload, panel.punchline_revealed, width),
        None if panel.shows_empty_state() => vec![muted(panel.descriptor().binding.empty_state)],
        None => Vec::new(),
    }
}

fn payload_lines(payload: &Payload, punchline_revealed: bool, width: u16) -> Vec<Line<'static>> {
    match payload {
        Payload::CatFact(fact) => cat_fact_lines(fact),
        Payload::DogImage(image) => dog_image_lines(image),
        Payload::Joke(joke) => joke_lines(joke, punchline_revealed),
        Payload::Advice(advice) => advice_lines(advice),
        Payload::PublicIp(ip) => ip_lines(ip),
        Payload::Age(age) => age_lines(age),
        Payload::Gender(gender) => gender_lines(gender, width),
        Payload::Postal(lookup) => postal_lines(lookup),
    }
}

fn centered(spans: Vec<Span<'static>>) -> Line<'static> {
    Line::from(spans).alignment(Alignment::Center)
}

fn muted(text: impl Into<String>) -> Line<'static> {
    centered(vec![Span::styled(
        text.into(),
        Style::default().fg(Color::DarkGray),
    )])
}

fn cat_fact_lines(fact: &CatFact) -> Vec<Line<'static>> {
    vec![
        centered(vec![Span::styled(
            format!("\"{}\"", fact.fact),
            Style::default().add_modifier(Modifier::ITALIC),
        )]),
        Line::from(""),
        muted(format!("Length: {} chars", fact.length)),
    ]
}

fn dog_image_lines(image: &DogImage) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(breed) = &image.breed {
        lines.push(centered(vec![Span::styled(
            breed.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));
    }
    lines.push(centered(vec![Span::styled(
        image.url.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
    )]));
    lines.push(Line::from(""));
    lines.push(muted("Press o to open the image in your browser"));
    lines
}

fn joke_lines(joke: &Joke, punchline_revealed: bool) -> Vec<Line<'static>> {
    let punchline = if punchline_revealed {
        Span::styled(
            joke.punchline.clone(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "[space] Show Punchline",
            Style::default().fg(Color::DarkGray),
        )
    };

    vec![
        centered(vec![Span::raw(joke.setup.clone())]),
        Line::from(""),
        centered(vec![punchline]),
    ]
}

fn advice_lines(advice: &Advice) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(id) = advice.id {
        lines.push(muted(format!("Advice #{}", id)));
        lines.push(Line::from(""));
    }
    lines.push(centered(vec![Span::styled(
        advice.text.clone(),
        Style::default().fg(Color::White),
    )]));
    lines
}

fn ip_lines(ip: &PublicIp) -> Vec<Line<'static>> {
    vec![
        muted("YOUR PUBLIC IP ADDRESS"),
        Line::from(""),
        centered(vec![Span::styled(
            ip.ip.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        centered(vec![Span::styled(
            IP_NOTE,
            Style::default().fg(Color::Yellow),
        )]),
    ]
}

fn age_lines(age: &AgePrediction) -> Vec<Line<'static>> {
    vec![
        centered(vec![Span::styled(
            age.age.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )]),
        muted("PREDICTED AGE"),
        Line::from(""),
        muted(format!("Based on {} records", group_thousands(age.count))),
    ]
}

fn gender_color(gender: Gender) -> Color {
    match gender {
        Gender::Male => Color::Blue,
        Gender::Female => Color::Magenta,
    }
}

/// Filled/empty cells of the probability bar.
pub fn probability_bar(prediction: &GenderPrediction, width: u16) -> (String, String) {
    let filled = prediction.bar_fill(width);
    (
        "█".repeat(filled as usize),
        "░".repeat(width.saturating_sub(filled) as usize),
    )
}

fn gender_lines(prediction: &GenderPrediction, width: u16) -> Vec<Line<'static>> {
    let color = gender_color(prediction.gender);
    let bar_width = width.saturating_sub(4).min(MAX_BAR_WIDTH);
    let (filled, empty) = probability_bar(prediction, bar_width);

    vec![
        centered(vec![Span::styled(
            prediction.gender.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        centered(vec![
            Span::styled(filled, Style::default().fg(color)),
            Span::styled(empty, Style::default().fg(Color::DarkGray)),
        ]),
        muted(format!("{}% Probability", prediction.probability_percent())),
    ]
}

fn postal_lines(lookup: &PostalLookup) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                lookup.post_code.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", lookup.country),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ];

    for place in &lookup.places {
        lines.push(Line::from(Span::styled(
            place.place_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!(
            "State: {} ({})",
            place.state, place.state_abbreviation
        )));
        lines.push(Line::from(Span::styled(
            format!("Lat: {} | Lon: {}", place.latitude, place.longitude),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::Place;
    use crate::catalog;
    use crate::panel::FetchRequest;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn loaded(id: &str, payload: Payload) -> Panel {
        let mut panel = Panel::mount(catalog::find(id).unwrap(), 1, None);
        let request: FetchRequest = panel
            .activate()
            .or_else(|| panel.submit_query("x"))
            .unwrap();
        panel.apply(request.complete(Ok(payload)));
        panel
    }

    #[test]
    fn test_cat_fact_quote_and_length() {
        let panel = loaded(
            "cat",
            Payload::CatFact(CatFact {
                fact: "Cats sleep 70% of their lives.".into(),
                length: 30,
            }),
        );
        let lines = text(&content_lines(&panel, 80));
        assert_eq!(lines[0], "\"Cats sleep 70% of their lives.\"");
        assert!(lines.contains(&"Length: 30 chars".to_string()));
    }

    #[test]
    fn test_empty_state_for_query_panel() {
        let panel = Panel::mount(catalog::find("agify").unwrap(), 1, None);
        assert_eq!(
            text(&content_lines(&panel, 80)),
            vec!["Enter a name above to predict the age."]
        );
    }

    #[test]
    fn test_loading_without_data_renders_nothing() {
        let mut panel = Panel::mount(catalog::find("ip").unwrap(), 1, None);
        panel.activate();
        assert!(content_lines(&panel, 80).is_empty());
    }

    #[test]
    fn test_punchline_hidden_until_revealed() {
        let mut panel = loaded(
            "joke",
            Payload::Joke(Joke {
                setup: "Why do programmers prefer dark mode?".into(),
                punchline: "Because light attracts bugs.".into(),
            }),
        );
        let hidden = text(&content_lines(&panel, 80)).join("\n");
        assert!(!hidden.contains("Because light attracts bugs."));
        assert!(hidden.contains("Show Punchline"));

        panel.reveal_punchline();
        let shown = text(&content_lines(&panel, 80)).join("\n");
        assert!(shown.contains("Because light attracts bugs."));
    }

    #[test]
    fn test_age_count_grouped() {
        let panel = loaded(
            "agify",
            Payload::Age(AgePrediction {
                name: Some("michael".into()),
                age: 62,
                count: 21302,
            }),
        );
        let lines = text(&content_lines(&panel, 80));
        assert_eq!(lines[0], "62");
        assert!(lines.contains(&"Based on 21,302 records".to_string()));
    }

    #[test]
    fn test_gender_probability_bar() {
        let prediction = GenderPrediction {
            name: None,
            gender: Gender::Male,
            probability: 0.73,
        };
        let (filled, empty) = probability_bar(&prediction, 100);
        assert_eq!(filled.chars().count(), 73);
        assert_eq!(empty.chars().count(), 27);

        let panel = loaded("genderize", Payload::Gender(prediction));
        let lines = text(&content_lines(&panel, 80));
        assert_eq!(lines[0], "Male");
        assert!(lines.contains(&"73% Probability".to_string()));
    }

    #[test]
    fn test_postal_renders_every_place() {
        let place = |name: &str| Place {
            place_name: name.into(),
            state: "New York".into(),
            state_abbreviation: "NY".into(),
            latitude: "40.75".into(),
            longitude: "-73.99".into(),
        };
        let panel = loaded(
            "zip",
            Payload::Postal(PostalLookup {
                post_code: "10001".into(),
                country: "United States".into(),
                country_abbreviation: Some("US".into()),
                places: vec![place("New York"), place("Chelsea"), place("Midtown")],
            }),
        );
        let lines = text(&content_lines(&panel, 80));

        let states: Vec<_> = lines.iter().filter(|l| l.starts_with("State: ")).collect();
        assert_eq!(states.len(), 3);
        assert!(states.iter().all(|l| *l == "State: New York (NY)"));

        let coords = lines.iter().filter(|l| *l == "Lat: 40.75 | Lon: -73.99").count();
        assert_eq!(coords, 3);

        for name in ["New York", "Chelsea", "Midtown"] {
            assert!(lines.contains(&name.to_string()));
        }
    }
}
