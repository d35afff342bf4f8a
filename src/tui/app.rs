use crate::catalog::{self, Selection};
use crate::config::Config;
use crate::fetch;
use crate::panel::{FetchCompletion, FetchRequest, Panel};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Braille spinner frames for loading animation
pub const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Active modal state - only one modal can be active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    None,
    Help,
}

/// Whether keys drive navigation or go into the query line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Editing,
}

pub struct App {
    pub config: Arc<Config>,
    pub selection: Selection,
    /// The one mounted panel; replaced wholesale on selection change
    pub panel: Panel,

    pub modal: ModalState,
    pub mode: InputMode,
    pub spinner_frame: usize,
    /// Transient notice in the status bar (e.g. failing to open a browser)
    pub status_message: Option<String>,

    next_mount: u64,
    /// Requests produced by updates, waiting to be spawned
    pending: Vec<FetchRequest>,
    /// Task of the fetch currently in flight
    in_flight: Option<JoinHandle<()>>,
    fetch_tx: mpsc::Sender<FetchCompletion>,
    fetch_rx: mpsc::Receiver<FetchCompletion>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let selection = Selection::new(config.ui.initial.as_deref());
        let (fetch_tx, fetch_rx) = mpsc::channel(16);
        let panel = Panel::mount(selection.selected(), 0, None);

        let mut app = Self {
            config: Arc::new(config),
            selection,
            panel,
            modal: ModalState::None,
            mode: InputMode::Browse,
            spinner_frame: 0,
            status_message: None,
            next_mount: 0,
            pending: Vec::new(),
            in_flight: None,
            fetch_tx,
            fetch_rx,
        };
        app.mount_selected();
        app
    }

    pub fn show_help(&self) -> bool {
        matches!(self.modal, ModalState::Help)
    }

    /// Process a message and update app state (Elm Architecture update function).
    ///
    /// Returns `Ok(true)` if the app should quit, `Ok(false)` to continue.
    pub fn update(&mut self, msg: super::Message) -> Result<bool> {
        use super::Message;

        if msg != Message::None {
            self.status_message = None;
        }

        match msg {
            Message::Quit => return Ok(true),

            Message::MoveUp => self.step_selection(-1),
            Message::MoveDown => self.step_selection(1),
            Message::GotoTop => {
                if self.selection.select_index(0) {
                    self.mount_selected();
                }
            }
            Message::GotoBottom => {
                let last = catalog::all().len().saturating_sub(1);
                if self.selection.select_index(last) {
                    self.mount_selected();
                }
            }
            Message::SelectIndex(idx) => {
                if self.selection.select_index(idx) {
                    self.mount_selected();
                }
            }

            Message::Refresh => {
                if let Some(request) = self.panel.refresh() {
                    self.pending.push(request);
                }
            }
            Message::RevealPunchline => self.panel.reveal_punchline(),
            Message::OpenLink => self.open_link(),

            Message::StartEditing => {
                if self.panel.is_query() {
                    self.mode = InputMode::Editing;
                }
            }
            Message::StopEditing => self.mode = InputMode::Browse,
            Message::QueryInput(c) => self.panel.query.push(c),
            Message::QueryBackspace => {
                self.panel.query.pop();
            }
            Message::ClearQuery => self.panel.query.clear(),
            Message::SubmitQuery => {
                if let Some(request) = self.panel.submit() {
                    self.pending.push(request);
                    self.mode = InputMode::Browse;
                }
            }

            Message::ToggleHelp => {
                self.modal = if self.show_help() {
                    ModalState::None
                } else {
                    ModalState::Help
                };
            }
            Message::CloseModal => self.modal = ModalState::None,

            Message::None => {}
        }
        Ok(false)
    }

    /// Select an integration by id (unknown ids fall back to the first entry).
    pub fn select(&mut self, id: &str) {
        if self.selection.select(id) {
            self.mount_selected();
        }
    }

    fn step_selection(&mut self, delta: i32) {
        if self.selection.step(delta) {
            self.mount_selected();
        }
    }

    /// Discard the current panel and mount a fresh one for the selection.
    fn mount_selected(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.pending.clear();
        self.mode = InputMode::Browse;

        self.next_mount += 1;
        let descriptor = self.selection.selected();
        let default_query = self.config.defaults.query_for(descriptor.id);
        self.panel = Panel::mount(descriptor, self.next_mount, default_query);

        tracing::debug!(
            integration = descriptor.id,
            mount = self.next_mount,
            "Mounted panel"
        );

        if let Some(request) = self.panel.activate() {
            self.pending.push(request);
        }
    }

    /// Requests queued by updates, not yet spawned.
    pub fn pending_requests(&self) -> &[FetchRequest] {
        &self.pending
    }

    /// Take queued requests without spawning them.
    pub fn take_pending(&mut self) -> Vec<FetchRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Spawn queued requests. A newer request supersedes the task in flight.
    pub fn dispatch_pending(&mut self, client: &reqwest::Client) {
        for request in self.pending.drain(..) {
            if let Some(handle) = self.in_flight.take() {
                handle.abort();
            }
            tracing::debug!("Dispatching {} -> {}", request.integration, request.url);
            self.in_flight = Some(fetch::spawn(
                client.clone(),
                request,
                self.fetch_tx.clone(),
            ));
        }
    }

    /// Sender that feeds [`App::poll_fetches`].
    pub fn completion_sender(&self) -> mpsc::Sender<FetchCompletion> {
        self.fetch_tx.clone()
    }

    /// Poll for fetch completions (non-blocking, call from event loop).
    ///
    /// Returns `true` if any completion was applied.
    pub fn poll_fetches(&mut self) -> bool {
        let mut applied = false;
        while let Ok(completion) = self.fetch_rx.try_recv() {
            applied |= self.apply_completion(completion);
        }
        applied
    }

    /// Route a completion to the mounted panel, dropping stale ones.
    pub fn apply_completion(&mut self, completion: FetchCompletion) -> bool {
        let ticket = completion.ticket;
        let integration = completion.integration;

        if ticket.mount != self.panel.mount_id() {
            tracing::debug!(
                "Dropping completion for unmounted panel {} (mount {})",
                integration,
                ticket.mount
            );
            return false;
        }

        let applied = self.panel.apply(completion);
        if applied {
            self.in_flight = None;
        } else {
            tracing::debug!(
                "Dropping superseded completion for {} (generation {})",
                integration,
                ticket.generation
            );
        }
        applied
    }

    /// Advance spinner frame (call on tick while loading)
    pub fn tick_spinner(&mut self) {
        if self.panel.state.loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Get current spinner character
    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }

    fn open_link(&mut self) {
        let Some(url) = self.panel.state.data.as_ref().and_then(|d| d.link()) else {
            return;
        };
        match open_url(url) {
            Ok(()) => self.status_message = Some(format!("Opened {}", url)),
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", url, e);
                self.status_message = Some(format!("Could not open browser: {}", e));
            }
        }
    }
}

fn open_url(url: &str) -> Result<()> {
    // Use xdg-open on Linux, which works in WSL
    std::process::Command::new("xdg-open")
        .arg(url)
        .spawn()
        .or_else(|_| {
            // Fallback to wslview for WSL
            std::process::Command::new("wslview").arg(url).spawn()
        })?;
    Ok(())
}
