//! Event loop - TUI entry point and event handling.
//!
//! The diagnosis call is the only suspending operation; it runs on a
//! blocking task and reports back over a channel, so the screen keeps
//! animating while the request is in flight.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;

use autodiag_common::config::AutodiagConfig;
use autodiag_common::diagnosis::{DiagnosisClient, DiagnosisError, HttpDiagnosisClient};
use autodiag_common::types::DiagnosisRecord;

use super::render::draw_ui;
use crate::commands::resolve_language;
use crate::form::FocusField;
use crate::session::{Phase, Session};

/// Messages from the diagnosis task back to the UI thread.
#[derive(Debug)]
pub enum TuiMessage {
    DiagnosisReady(Vec<DiagnosisRecord>),
    DiagnosisFailed(String),
}

/// UI state on top of the session: focus, scrolling, spinner animation.
pub struct TuiState {
    pub session: Session,
    pub focus: FocusField,
    pub scroll: u16,
    pub spinner_frame: usize,
}

impl TuiState {
    fn new(session: Session) -> Self {
        Self {
            session,
            focus: FocusField::Make,
            scroll: 0,
            spinner_frame: 0,
        }
    }
}

/// Run the TUI.
pub async fn run(lang: Option<String>) -> Result<()> {
    let config = AutodiagConfig::load()?;
    let lang = resolve_language(lang.as_deref(), &config)?;

    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!(
            "Failed to enable raw mode: {}. Ensure you're running in a real terminal (TTY).",
            e
        )
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to initialize terminal: {}", e)
    })?;

    let backend = CrosstermBackend::new(stdout);
    // Past this point the alternate screen is active, so every failure
    // path must unwind both it and raw mode.
    let mut terminal = Terminal::new(backend).map_err(|e| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        anyhow::anyhow!("Failed to initialize terminal: {}", e)
    })?;

    let mut state = TuiState::new(Session::new(lang));
    let (tx, mut rx) = mpsc::channel(8);

    let result = run_event_loop(&mut terminal, &mut state, &config, tx, &mut rx).await;

    // Restore terminal (always attempt cleanup)
    let cleanup_result = restore_terminal(&mut terminal);

    result.and(cleanup_result)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Main event loop
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    config: &AutodiagConfig,
    tx: mpsc::Sender<TuiMessage>,
    rx: &mut mpsc::Receiver<TuiMessage>,
) -> Result<()> {
    loop {
        if state.session.is_loading() {
            state.spinner_frame = (state.spinner_frame + 1) % 8;
        }

        // Collect results from the diagnosis task
        while let Ok(msg) = rx.try_recv() {
            match msg {
                TuiMessage::DiagnosisReady(records) => {
                    state.session.resolve_success(records);
                }
                TuiMessage::DiagnosisFailed(detail) => {
                    state.session.resolve_failure(detail);
                }
            }
        }

        terminal.draw(|f| draw_ui(f, state))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match (key.code, key.modifiers) {
                // Ctrl+C / Esc - exit
                (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                    break;
                }
                // F2 - cycle language
                (KeyCode::F(2), _) => {
                    let next = state.session.lang.next();
                    state.session.set_language(next);
                }
                // Ctrl+R - reset form, results, and error
                (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
                    if !state.session.is_loading() {
                        state.session.reset();
                        state.focus = FocusField::Make;
                        state.scroll = 0;
                    }
                }
                // Enter - submit from the form, dismiss from the error page
                (KeyCode::Enter, _) => {
                    if matches!(state.session.phase, Phase::Idle) {
                        dispatch_diagnosis(state, config, &tx);
                    } else if matches!(state.session.phase, Phase::Failed(_)) {
                        state.session.reset();
                        state.focus = FocusField::Make;
                    }
                }
                // Tab / Shift-Tab - cycle form focus
                (KeyCode::Tab, _) | (KeyCode::Down, _) => {
                    if matches!(state.session.phase, Phase::Idle) {
                        state.focus = state.focus.next();
                    } else {
                        state.scroll = state.scroll.saturating_add(1);
                    }
                }
                (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
                    if matches!(state.session.phase, Phase::Idle) {
                        state.focus = state.focus.prev();
                    } else {
                        state.scroll = state.scroll.saturating_sub(1);
                    }
                }
                // PageUp / PageDown - scroll results
                (KeyCode::PageUp, _) => {
                    state.scroll = state.scroll.saturating_sub(10);
                }
                (KeyCode::PageDown, _) => {
                    state.scroll = state.scroll.saturating_add(10);
                }
                // Ctrl+U - clear focused field
                (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                    if matches!(state.session.phase, Phase::Idle) {
                        state.focus.value_mut(&mut state.session.form).clear();
                    }
                }
                // Backspace
                (KeyCode::Backspace, _) => {
                    if matches!(state.session.phase, Phase::Idle) {
                        state.focus.value_mut(&mut state.session.form).pop();
                    }
                }
                // Character input into the focused field
                (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                    if matches!(state.session.phase, Phase::Idle) {
                        state.focus.value_mut(&mut state.session.form).push(c);
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Submit the form if it passes the required-field gate, and run the HTTP
/// call off the UI thread. The Loading phase gates re-entry, so at most
/// one request is in flight.
fn dispatch_diagnosis(state: &mut TuiState, config: &AutodiagConfig, tx: &mpsc::Sender<TuiMessage>) {
    let Some(query) = state.session.submit() else {
        return;
    };
    state.scroll = 0;

    let llm = config.llm.clone();
    let lang = state.session.lang;
    let tx = tx.clone();

    tokio::spawn(async move {
        let outcome = tokio::task::spawn_blocking(move || -> Result<_, DiagnosisError> {
            let client =
                HttpDiagnosisClient::new(llm).map_err(|e| DiagnosisError::Http(e.to_string()))?;
            client.diagnose(&query, lang)
        })
        .await;

        let msg = match outcome {
            Ok(Ok(records)) => TuiMessage::DiagnosisReady(records),
            Ok(Err(e)) => TuiMessage::DiagnosisFailed(e.to_string()),
            Err(e) => TuiMessage::DiagnosisFailed(e.to_string()),
        };
        let _ = tx.send(msg).await;
    });
}
