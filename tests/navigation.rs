//! Tests for catalog navigation and how the app routes fetch completions.
//!
//! Requests are taken from the app's queue instead of being spawned, and
//! completions are fed back through the same channel the fetch tasks use.

use apinexus::bindings::{CatFact, Payload};
use apinexus::config::Config;
use apinexus::panel::FetchRequest;
use apinexus::resource::FetchError;
use apinexus::tui::{App, InputMode, Message};

// ============================================================================
// Test Helpers
// ============================================================================

fn app_on(id: &str) -> App {
    let mut config = Config::default();
    config.ui.initial = Some(id.to_string());
    App::new(config)
}

fn take_one(app: &mut App) -> FetchRequest {
    let mut pending = app.take_pending();
    assert_eq!(pending.len(), 1, "expected exactly one queued request");
    pending.remove(0)
}

fn cat_fact() -> Payload {
    Payload::CatFact(CatFact {
        fact: "Cats sleep 70% of their lives.".into(),
        length: 30,
    })
}

/// Deliver a completion through the channel and drain it.
fn deliver(app: &mut App, request: &FetchRequest, outcome: Result<Payload, FetchError>) -> bool {
    app.completion_sender()
        .try_send(request.complete(outcome))
        .expect("channel has capacity");
    app.poll_fetches()
}

// ============================================================================
// Selection
// ============================================================================

mod selection {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_on_first_entry_without_initial() {
        let app = App::new(Config::default());
        assert_eq!(app.selection.selected_id(), "cat");
    }

    #[test]
    fn test_unknown_initial_falls_back_to_first() {
        let app = app_on("weather");
        assert_eq!(app.selection.selected_id(), "cat");
    }

    #[test]
    fn test_initial_auto_panel_queues_fetch() {
        let mut app = app_on("ip");
        assert!(app.panel.state.loading);
        let request = take_one(&mut app);
        assert_eq!(request.integration, "ip");
    }

    #[test]
    fn test_initial_query_panel_waits() {
        let app = app_on("agify");
        assert!(!app.panel.state.loading);
        assert!(app.pending_requests().is_empty());
    }

    #[test]
    fn test_reselection_refetches_from_fresh_idle() {
        let mut app = app_on("cat");
        let first = take_one(&mut app);
        assert!(deliver(&mut app, &first, Ok(cat_fact())));
        assert!(app.panel.state.data.is_some());

        app.update(Message::MoveDown).unwrap();
        assert_eq!(app.selection.selected_id(), "dog");
        app.take_pending();

        app.select("cat");
        assert_eq!(app.selection.selected_id(), "cat");
        assert!(app.panel.state.data.is_none());
        assert!(app.panel.state.error.is_none());
        assert!(app.panel.state.loading);

        let second = take_one(&mut app);
        assert_ne!(second.ticket.mount, first.ticket.mount);
    }

    #[test]
    fn test_select_index_out_of_range_is_ignored() {
        let mut app = app_on("cat");
        app.take_pending();
        app.update(Message::SelectIndex(42)).unwrap();
        assert_eq!(app.selection.selected_id(), "cat");
        assert!(app.pending_requests().is_empty());
    }

    #[test]
    fn test_goto_top_and_bottom() {
        let mut app = app_on("cat");
        app.update(Message::GotoTop).unwrap();
        assert_eq!(app.selection.selected_id(), "agify");
        app.update(Message::GotoBottom).unwrap();
        assert_eq!(app.selection.selected_id(), "advice");
    }

    #[test]
    fn test_selection_change_leaves_editing_mode() {
        let mut app = app_on("agify");
        app.update(Message::StartEditing).unwrap();
        assert_eq!(app.mode, InputMode::Editing);

        app.update(Message::MoveDown).unwrap();
        assert_eq!(app.mode, InputMode::Browse);
    }
}

// ============================================================================
// Completion routing
// ============================================================================

mod completions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_completion_for_unmounted_panel_is_dropped() {
        let mut app = app_on("cat");
        let stale = take_one(&mut app);

        app.update(Message::MoveDown).unwrap();
        assert_eq!(app.selection.selected_id(), "dog");

        assert!(!deliver(&mut app, &stale, Ok(cat_fact())));
        assert!(app.panel.state.data.is_none());
        assert!(app.panel.state.loading);
    }

    #[test]
    fn test_superseded_generation_is_dropped() {
        let mut app = app_on("cat");
        let first = take_one(&mut app);
        deliver(&mut app, &first, Err(FetchError::Status(500)));
        assert!(app.panel.state.error.is_some());

        app.update(Message::Refresh).unwrap();
        let _second = take_one(&mut app);

        // The first ticket is no longer live on this panel
        assert!(!deliver(&mut app, &first, Ok(cat_fact())));
        assert!(app.panel.state.loading);
    }

    #[test]
    fn test_refresh_refused_while_loading() {
        let mut app = app_on("joke");
        let _inflight = take_one(&mut app);
        assert!(app.panel.state.loading);

        app.update(Message::Refresh).unwrap();
        assert!(app.pending_requests().is_empty());
    }

    #[test]
    fn test_failure_only_affects_its_panel() {
        let mut app = app_on("cat");
        let request = take_one(&mut app);
        deliver(&mut app, &request, Err(FetchError::Transport("dns".into())));

        assert_eq!(
            app.panel.state.error.as_deref(),
            Some("Could not load a cat fact. (network error: dns)")
        );

        app.update(Message::MoveDown).unwrap();
        assert!(app.panel.state.error.is_none());
    }
}

// ============================================================================
// Query editing
// ============================================================================

mod query_editing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_typed_query_is_submitted() {
        let mut app = app_on("agify");
        app.update(Message::StartEditing).unwrap();
        for c in "  Paul ".chars() {
            app.update(Message::QueryInput(c)).unwrap();
        }
        app.update(Message::SubmitQuery).unwrap();

        let request = take_one(&mut app);
        assert_eq!(request.url, "https://api.agify.io?name=Paul");
        assert_eq!(app.mode, InputMode::Browse);
        assert!(app.panel.state.loading);
    }

    #[test]
    fn test_blank_submit_stays_in_editing() {
        let mut app = app_on("genderize");
        app.update(Message::StartEditing).unwrap();
        app.update(Message::QueryInput(' ')).unwrap();
        app.update(Message::SubmitQuery).unwrap();

        assert!(app.pending_requests().is_empty());
        assert_eq!(app.mode, InputMode::Editing);
        assert!(!app.panel.state.loading);
    }

    #[test]
    fn test_zip_prefilled_from_config() {
        let mut config = Config::default();
        config.ui.initial = Some("zip".into());
        config.defaults.set("zip", "10001");
        let mut app = App::new(config);

        assert_eq!(app.panel.query, "10001");
        app.update(Message::SubmitQuery).unwrap();
        let request = take_one(&mut app);
        assert_eq!(request.url, "https://api.zippopotam.us/us/10001");
    }

    #[test]
    fn test_zip_keeps_builtin_default_without_config() {
        let app = app_on("zip");
        assert_eq!(app.panel.query, "90210");
    }

    #[test]
    fn test_name_panel_prefilled_from_config() {
        let mut config = Config::default();
        config.ui.initial = Some("agify".into());
        config.defaults.set("agify", "Anna");
        config.defaults.set("zip", "10001");
        let mut app = App::new(config);

        assert_eq!(app.panel.query, "Anna");
        app.update(Message::SubmitQuery).unwrap();
        let request = take_one(&mut app);
        assert_eq!(request.url, "https://api.agify.io?name=Anna");

        // Moving to another query panel picks up its own entry
        app.select("genderize");
        assert_eq!(app.panel.query, "");
        app.select("zip");
        assert_eq!(app.panel.query, "10001");
    }

    #[test]
    fn test_clear_and_backspace() {
        let mut app = app_on("agify");
        for c in "Anna".chars() {
            app.update(Message::QueryInput(c)).unwrap();
        }
        app.update(Message::QueryBackspace).unwrap();
        assert_eq!(app.panel.query, "Ann");
        app.update(Message::ClearQuery).unwrap();
        assert_eq!(app.panel.query, "");
    }
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn test_quit_message() {
    let mut app = app_on("cat");
    assert!(app.update(Message::Quit).unwrap());
    assert!(!app.update(Message::ToggleHelp).unwrap());
    assert!(app.show_help());
}

#[test]
fn test_punchline_reveal_through_app() {
    let mut app = app_on("joke");
    let request = take_one(&mut app);
    let joke = Payload::Joke(apinexus::bindings::Joke {
        setup: "Setup".into(),
        punchline: "Punch".into(),
    });
    deliver(&mut app, &request, Ok(joke));

    assert!(!app.panel.punchline_revealed);
    app.update(Message::RevealPunchline).unwrap();
    assert!(app.panel.punchline_revealed);
}
