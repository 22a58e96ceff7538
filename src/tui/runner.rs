//! TUI main loop: terminal lifecycle, file polling, and render tick.
//!
//! [`run_tui`] is the entry point for `watch` mode. It loads the transcript
//! once, initializes the terminal, and runs a `tokio::select!` loop that
//! multiplexes keyboard input, transcript polling, and render ticks.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::Utc;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use crate::config::AppConfig;
use crate::dashboard::Snapshot;
use crate::dashboard::health::HealthSettings;
use crate::transcript::load_transcript;
use crate::tui::app_state::AppState;
use crate::tui::input::handle_key_event;
use crate::tui::ui::render_ui;

/// Render tick (~20fps).
const TICK_RATE: Duration = Duration::from_millis(50);

/// Detects changes to the watched transcript by modification time and size.
pub struct TranscriptWatcher {
    path: PathBuf,
    /// `None` when the file could not be stat'ed.
    last_seen: Option<(SystemTime, u64)>,
    polled: bool,
}

impl TranscriptWatcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_seen: None,
            polled: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True on the first poll and whenever the file's signature changed
    /// since the previous poll (including appearing or disappearing).
    pub fn poll_changed(&mut self) -> bool {
        let current = std::fs::metadata(&self.path)
            .ok()
            .and_then(|meta| Some((meta.modified().ok()?, meta.len())));

        let changed = !self.polled || current != self.last_seen;
        self.polled = true;
        self.last_seen = current;
        changed
    }
}

/// Reload the transcript into `state` if it changed, or unconditionally when `force`.
///
/// A failed load keeps the previous snapshot and surfaces the error in the
/// status bar.
pub fn refresh(
    watcher: &mut TranscriptWatcher,
    state: &mut AppState,
    settings: &HealthSettings,
    force: bool,
) {
    if !watcher.poll_changed() && !force {
        return;
    }

    match load_transcript(watcher.path()) {
        Ok(messages) => {
            let now = Utc::now();
            let snapshot = Snapshot::derive(&messages, settings, now);
            tracing::info!(
                path = %watcher.path().display(),
                messages = messages.len(),
                agents = snapshot.state.total_agents,
                "Transcript reloaded"
            );
            state.apply_snapshot(snapshot, now);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Transcript reload failed");
            state.record_load_error(e.to_string());
        }
    }
}

/// Run the dashboard against `transcript` until the user quits.
///
/// The terminal is restored on both normal exit and draw errors.
pub async fn run_tui(config: &AppConfig, transcript: &Path) -> anyhow::Result<()> {
    let settings = HealthSettings {
        assumed_response_time_ms: config.assumed_response_time_ms,
    };

    let mut app_state = AppState::new(transcript.display().to_string());
    let mut watcher = TranscriptWatcher::new(transcript);
    refresh(&mut watcher, &mut app_state, &settings, true);

    let mut terminal = ratatui::init();
    let mut key_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(TICK_RATE);
    let mut poll_interval = tokio::time::interval(Duration::from_millis(config.refresh_ms));

    tracing::info!(
        path = %transcript.display(),
        refresh_ms = config.refresh_ms,
        "Watching transcript"
    );

    let result: anyhow::Result<()> = loop {
        tokio::select! {
            Some(Ok(crossterm_event)) = key_stream.next() => {
                if let Event::Key(key) = crossterm_event {
                    if handle_key_event(key, &mut app_state) {
                        break Ok(());
                    }
                    if app_state.refresh_requested {
                        app_state.refresh_requested = false;
                        refresh(&mut watcher, &mut app_state, &settings, true);
                    }
                }
                // Resize events are handled automatically by ratatui on next draw.
            }

            _ = poll_interval.tick() => {
                refresh(&mut watcher, &mut app_state, &settings, false);
            }

            _ = tick_interval.tick() => {
                app_state.now = Utc::now();
                if let Err(e) = terminal.draw(|frame| render_ui(&app_state, frame)) {
                    break Err(e.into());
                }
            }
        }
    };

    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const INIT_LINE: &str =
        r#"{"role":"assistant","content":[{"type":"tool_use","id":"t1","name":"swarm_init","input":{}}]}"#;
    const SPAWN_LINE: &str = r#"{"role":"assistant","content":[{"type":"tool_use","id":"a1","name":"agent_spawn","input":{"agent_type":"coder"}}]}"#;

    #[test]
    fn watcher_reports_first_poll_then_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.jsonl");
        std::fs::write(&path, format!("{INIT_LINE}\n")).unwrap();

        let mut watcher = TranscriptWatcher::new(&path);
        assert!(watcher.poll_changed());
        assert!(!watcher.poll_changed());

        let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "{SPAWN_LINE}").unwrap();
        drop(file);

        assert!(watcher.poll_changed());
        assert!(!watcher.poll_changed());
    }

    #[test]
    fn watcher_notices_file_disappearing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.jsonl");
        std::fs::write(&path, "[]").unwrap();

        let mut watcher = TranscriptWatcher::new(&path);
        watcher.poll_changed();
        std::fs::remove_file(&path).unwrap();
        assert!(watcher.poll_changed());
        assert!(!watcher.poll_changed());
    }

    #[test]
    fn refresh_applies_new_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.jsonl");
        std::fs::write(&path, format!("{INIT_LINE}\n")).unwrap();

        let settings = HealthSettings::default();
        let mut watcher = TranscriptWatcher::new(&path);
        let mut state = AppState::new("t.jsonl");

        refresh(&mut watcher, &mut state, &settings, false);
        assert!(state.snapshot.state.is_active);
        assert_eq!(state.snapshot.state.total_agents, 0);

        std::fs::write(&path, format!("{INIT_LINE}\n{SPAWN_LINE}\n")).unwrap();
        refresh(&mut watcher, &mut state, &settings, false);
        assert_eq!(state.snapshot.state.total_agents, 1);
        assert_eq!(state.snapshot.message_count, 2);
    }

    #[test]
    fn failed_refresh_keeps_last_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.jsonl");
        std::fs::write(&path, format!("{INIT_LINE}\n{SPAWN_LINE}\n")).unwrap();

        let settings = HealthSettings::default();
        let mut watcher = TranscriptWatcher::new(&path);
        let mut state = AppState::new("t.jsonl");
        refresh(&mut watcher, &mut state, &settings, false);

        std::fs::write(&path, "{not json\n").unwrap();
        refresh(&mut watcher, &mut state, &settings, true);

        assert_eq!(state.snapshot.state.total_agents, 1);
        let err = state.load_error.as_deref().unwrap();
        assert!(err.contains("line 1"), "unexpected error: {err}");
    }
}
