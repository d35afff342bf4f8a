//! Message enum for Elm Architecture (TEA) pattern.
//!
//! All possible user actions in the application are represented as messages.
//! This enables unidirectional data flow and testable update logic.

/// All possible user actions in the application.
///
/// Messages are dispatched from key events and processed by `App::update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────────────────────
    // App lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Select the previous integration in the sidebar
    MoveUp,
    /// Select the next integration in the sidebar
    MoveDown,
    /// Select the first integration in the sidebar
    GotoTop,
    /// Select the last integration in the sidebar
    GotoBottom,
    /// Select by sidebar position (0-indexed)
    SelectIndex(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Panel actions
    // ─────────────────────────────────────────────────────────────────────────
    /// Re-run the panel's fetch
    Refresh,
    /// Reveal the joke punchline
    RevealPunchline,
    /// Open the panel's link (dog image) in the browser
    OpenLink,

    // ─────────────────────────────────────────────────────────────────────────
    // Query editing
    // ─────────────────────────────────────────────────────────────────────────
    /// Start editing the query line
    StartEditing,
    /// Stop editing without submitting
    StopEditing,
    /// Add a character to the query
    QueryInput(char),
    /// Remove last character from the query
    QueryBackspace,
    /// Clear the query
    ClearQuery,
    /// Submit the query
    SubmitQuery,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle help modal
    ToggleHelp,
    /// Close current modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // No-op
    // ─────────────────────────────────────────────────────────────────────────
    /// No operation (for unhandled keys or pending chords)
    None,
}
