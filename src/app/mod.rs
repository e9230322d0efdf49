//! Application state and event handling.
//!
//! `App` is the page controller: it owns the id input field, the current
//! session and its derived chart spec, and wires key events to session
//! loads. Loads run as independent spawned tasks reporting back over a
//! message channel; there is no cancellation, so when several loads are in
//! flight the last completed one wins.

mod messages;

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::chart::{build_chart_spec, ChartSpec, PlotOptions};
use crate::grouping::{resolve_groups, GroupingStrategy};
use crate::models::SessionData;
use crate::storage::SessionStore;
use crate::traits::SessionSource;

pub use messages::AppMessage;

/// Which view the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// No session loaded yet
    AwaitingInput,
    /// A session is loaded and charted
    Loaded,
}

/// Application state.
pub struct App {
    /// Current view
    pub screen: Screen,
    /// Contents of the session id input field
    pub input: String,
    /// Whether the manual-entry toolbar is shown; hidden in shared-link mode
    pub toolbar_visible: bool,
    /// The currently displayed session, replaced wholesale on each load
    pub session: Option<SessionData>,
    /// Chart spec derived from `session`; recomputed on every load
    pub chart: Option<ChartSpec>,
    /// Fallback grouping applied to payloads that arrive without groups
    pub grouping: GroupingStrategy,
    /// Options handed to the plot backend
    pub plot_options: PlotOptions,
    /// Loads spawned but not yet reported back
    pub pending_loads: usize,
    /// Redraw flag
    pub needs_redraw: bool,
    /// Exit flag
    pub should_quit: bool,
    /// Sender side of the load-result channel (cloned into spawned loads)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver side; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    source: Arc<dyn SessionSource>,
    store: Option<SessionStore>,
}

impl App {
    /// Create the app, pre-filling the id field from the store.
    ///
    /// Restoring the persisted id does not trigger a load; only an explicit
    /// user action or shared-link startup does.
    pub fn new(source: Arc<dyn SessionSource>, store: Option<SessionStore>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let input = store
            .as_ref()
            .and_then(|s| s.load())
            .unwrap_or_default();

        Self {
            screen: Screen::AwaitingInput,
            input,
            toolbar_visible: true,
            session: None,
            chart: None,
            grouping: GroupingStrategy::default(),
            plot_options: PlotOptions::default(),
            pending_loads: 0,
            needs_redraw: true,
            should_quit: false,
            message_tx,
            message_rx: Some(message_rx),
            source,
            store,
        }
    }

    /// Enter read-only shared-link mode: pre-fill the field with the given
    /// id, hide the toolbar and load without persisting.
    pub fn open_shared_link(&mut self, session_id: &str) {
        self.input = session_id.to_string();
        self.toolbar_visible = false;
        self.spawn_load(session_id.to_string(), false);
    }

    /// Load the session named in the input field, persisting on success.
    ///
    /// An empty id is still sent; the server owns rejection semantics.
    pub fn submit_load(&mut self) {
        self.spawn_load(self.input.clone(), true);
    }

    /// Start an independent load task. Multiple loads may be in flight; each
    /// reports exactly one message.
    fn spawn_load(&mut self, session_id: String, persist: bool) {
        info!(session_id = %session_id, persist, "Starting session load");
        self.pending_loads += 1;
        self.mark_dirty();

        let source = self.source.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match source.fetch(&session_id).await {
                Ok(session) => AppMessage::SessionLoaded {
                    session_id,
                    session,
                    persist,
                },
                Err(e) => AppMessage::SessionLoadFailed {
                    session_id,
                    error: e.to_string(),
                },
            };
            // The receiver only goes away on shutdown
            let _ = tx.send(msg);
        });
    }

    /// Apply a load result: persist, resolve groups, transform, display.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.pending_loads = self.pending_loads.saturating_sub(1);
        self.mark_dirty();

        match msg {
            AppMessage::SessionLoaded {
                session_id,
                mut session,
                persist,
            } => {
                if persist {
                    if let Some(store) = &self.store {
                        if let Err(e) = store.save(&session_id) {
                            warn!(session_id = %session_id, "Failed to persist session id: {e}");
                        }
                    }
                }

                resolve_groups(&mut session, &self.grouping);
                match build_chart_spec(&session) {
                    Ok(spec) => {
                        info!(
                            session_id = %session_id,
                            traces = spec.traces.len(),
                            "Session charted"
                        );
                        self.session = Some(session);
                        self.chart = Some(spec);
                        self.screen = Screen::Loaded;
                    }
                    Err(e) => {
                        // Keep the previous view; the failure is only
                        // visible in the diagnostics log
                        error!(session_id = %session_id, "Transform failed: {e}");
                    }
                }
            }
            AppMessage::SessionLoadFailed { session_id, error } => {
                warn!(session_id = %session_id, "Session load failed: {error}");
            }
        }
    }

    /// Handle a key press.
    ///
    /// With the toolbar visible, typing edits the id field and Enter loads.
    /// `Esc` and `Ctrl-C` always quit; `q` quits only in shared-link mode
    /// where the field cannot be typed into.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Enter if self.toolbar_visible => self.submit_load(),
            KeyCode::Backspace if self.toolbar_visible => {
                self.input.pop();
            }
            KeyCode::Char(c)
                if self.toolbar_visible
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.push(c);
            }
            KeyCode::Char('q') if !self.toolbar_visible => self.quit(),
            _ => {}
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Request application exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether at least one load has not reported back yet.
    pub fn is_loading(&self) -> bool {
        self.pending_loads > 0
    }
}
