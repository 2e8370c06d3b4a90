pub mod actions;
pub mod events;
pub mod state;

use crate::ai::AiClient;
use crate::color::Hex;
use crate::config::Config;
use crate::error::GenerationError;
use crate::export;
use crate::input;
use crate::storage::{SavedPalette, Storage};
use crate::swatches::{MAX_SLOTS, MIN_SLOTS, Palette};
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, NetworkEvent};
use rand::Rng;
use state::{AppState, ChatMessage, Focus, Toast};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};

pub struct App {
    cfg: Config,
    state: AppState,
    storage: Storage,
    ai: AiClient,
}

impl App {
    pub fn new(cfg: Config) -> anyhow::Result<Self> {
        let storage = Storage::open(&cfg.paths.database())?;
        let ai = AiClient::from_config(&cfg.ai)?;

        let palette = Palette::random(cfg.palette.initial_size, &mut rand::rng());
        let mut state = AppState::new(palette);

        match storage.load_saved_palettes() {
            Ok(saved) => state.saved = saved,
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "saved palettes unreadable");
                state.toast = Some(Toast::error("Saved palettes unreadable; starting empty"));
            }
        }

        Ok(Self {
            cfg,
            state,
            storage,
            ai,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);
        // Only animate while something is on screen that changes by itself.
        let mut ticker = spinner_ticker();

        tui::draw(terminal, &mut self.state)?;

        loop {
            let animating = self.state.generating || self.state.toast.is_some();
            let ev = tokio::select! {
                ev = rx.recv() => match ev {
                    Some(ev) => ev,
                    None => break,
                },
                _ = ticker.tick(), if animating => Event::Tick,
            };

            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx).await;
                    }
                }
                Event::Network(ne) => apply_network(&mut self.state, ne),
                Event::Tick => self.state.tick = self.state.tick.wrapping_add(1),
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state)?;
        }

        Ok(())
    }

    async fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::SubmitPrompt => self.spawn_ai_request(tx),
            Action::CopySelected => self.copy_selected(),
            Action::SavePalette => self.save_palette(),
            Action::DeleteSaved => self.delete_saved(),
            Action::ExportPalette => self.export_palette(),
            _ => reduce(&mut self.state, action, &mut rand::rng()),
        }
    }

    fn spawn_ai_request(&mut self, tx: &mpsc::Sender<Event>) {
        let Some((prompt, count)) = begin_submission(&mut self.state) else {
            return;
        };

        let ai = self.ai.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = ai.generate_colors(&prompt, count).await;
            let _ = tx.send(Event::Network(ai_event(prompt, result))).await;
        });
    }

    fn copy_selected(&mut self) {
        let Some(hex) = self.state.selected_swatch().map(|s| s.hex) else {
            return;
        };
        match export::copy_to_clipboard(hex) {
            Ok(text) => {
                self.state.copied = Some(hex);
                self.state.toast = Some(Toast::success(format!("Copied {text}")));
            }
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "copy failed");
                self.state.toast = Some(Toast::error(format!("{e:#}")));
            }
        }
    }

    fn save_palette(&mut self) {
        let mut snapshot = match SavedPalette::snapshot(self.state.palette.hexes()) {
            Ok(s) => s,
            Err(e) => {
                self.state.toast = Some(Toast::error(format!("{e:#}")));
                return;
            }
        };
        // Ids double as delete keys; two saves in the same millisecond must differ.
        if let Some(newest) = self.state.saved.iter().map(|s| s.id).max() {
            snapshot.id = snapshot.id.max(newest + 1);
        }
        self.state.saved.insert(0, snapshot);
        self.state.library_selected = 0;
        match self.storage.store_saved_palettes(&self.state.saved) {
            Ok(()) => {
                tracing::info!(count = self.state.saved.len(), "saved palette");
                self.state.toast = Some(Toast::success("Palette saved"));
            }
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), "persist saved palettes");
                self.state.toast = Some(Toast::error(format!("Save failed: {e:#}")));
            }
        }
    }

    fn delete_saved(&mut self) {
        let Some(id) = self.state.selected_saved().map(|s| s.id) else {
            return;
        };
        self.state.saved.retain(|s| s.id != id);
        self.state.clamp_cursors();
        match self.storage.store_saved_palettes(&self.state.saved) {
            Ok(()) => self.state.toast = Some(Toast::success("Palette deleted")),
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), "persist saved palettes");
                self.state.toast = Some(Toast::error(format!("Delete failed: {e:#}")));
            }
        }
    }

    fn export_palette(&mut self) {
        match export::write_export(&self.cfg.paths.export_dir, &self.state.palette.hexes()) {
            Ok(path) => {
                self.state.status = format!("Exported to {}", path.display());
                self.state.toast = Some(Toast::success("Palette exported"));
            }
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), "export failed");
                self.state.toast = Some(Toast::error(format!("Export failed: {e:#}")));
            }
        }
    }
}

/// Spinner and toast clock. The loop only polls it while animating, so
/// ticks missed while idle are skipped rather than replayed.
fn spinner_ticker() -> Interval {
    let mut ticker = tokio::time::interval(Duration::from_millis(120));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

/// State transitions that need nothing outside `AppState`.
pub fn reduce<R: Rng + ?Sized>(state: &mut AppState, action: Action, rng: &mut R) {
    match action {
        Action::Quit => state.should_quit = true,
        Action::ToggleHelp => state.show_help = !state.show_help,
        Action::Redraw => {}

        Action::Regenerate => {
            state.palette.regenerate(rng);
            state.status = "Regenerated".into();
        }
        Action::CursorLeft => state.cursor = state.cursor.saturating_sub(1),
        Action::CursorRight => {
            state.cursor = (state.cursor + 1).min(state.palette.len().saturating_sub(1));
        }
        Action::ToggleLock => {
            if let Some(id) = state.selected_swatch().map(|s| s.id) {
                state.palette.toggle_lock(id);
            }
        }
        Action::AddColor => {
            if state.palette.add_after(state.cursor, rng) {
                state.cursor += 1;
            } else {
                tracing::debug!(len = state.palette.len(), "add ignored at maximum");
                state.status = format!("A palette holds at most {MAX_SLOTS} colors");
            }
        }
        Action::RemoveColor => {
            let removed = state
                .selected_swatch()
                .map(|s| s.id)
                .is_some_and(|id| state.palette.remove(id));
            if !removed {
                tracing::debug!(len = state.palette.len(), "remove ignored at minimum");
                state.status = format!("A palette needs at least {MIN_SLOTS} colors");
            }
            state.clamp_cursors();
        }
        Action::Grow | Action::Shrink => {
            let len = state.palette.len();
            let target = if action == Action::Grow {
                len + 1
            } else {
                len.saturating_sub(1)
            };
            if !state.palette.resize(target, rng) {
                tracing::debug!(len, target, "resize ignored outside bounds");
            }
            state.clamp_cursors();
        }

        Action::FocusPalette => state.focus = Focus::Palette,
        Action::FocusPrompt => state.focus = Focus::Prompt,
        Action::FocusLibrary => {
            state.focus = Focus::Library;
            state.clamp_cursors();
        }

        Action::InputChar(c) => state.prompt.push(c),
        Action::Backspace => {
            state.prompt.pop();
        }
        Action::ClearInput => state.prompt.clear(),

        Action::LibraryUp => state.library_selected = state.library_selected.saturating_sub(1),
        Action::LibraryDown => {
            state.library_selected =
                (state.library_selected + 1).min(state.saved.len().saturating_sub(1));
        }
        Action::ApplySaved => {
            let Some(colors) = state.selected_saved().map(|s| s.colors.clone()) else {
                return;
            };
            if state.palette.replace_all(&colors) {
                state.cursor = 0;
                state.focus = Focus::Palette;
                state.toast = Some(Toast::success("Palette applied"));
            } else {
                state.toast = Some(Toast::error("Saved palette has too few colors"));
            }
        }

        Action::SubmitPrompt => {} // handled in handle_action
        Action::CopySelected => {}
        Action::SavePalette => {}
        Action::ExportPalette => {}
        Action::DeleteSaved => {}
    }
}

/// Start an AI request: echo the prompt into the chat and clear the input.
/// Returns the prompt and the color count to ask for, or `None` when the
/// prompt is blank or a request is already running.
pub fn begin_submission(state: &mut AppState) -> Option<(String, usize)> {
    if state.generating {
        return None;
    }
    let prompt = state.prompt.trim().to_string();
    if prompt.is_empty() {
        return None;
    }

    state.chat.push(ChatMessage::user(prompt.clone()));
    state.prompt.clear();
    state.generating = true;
    state.status = "Generating palette...".into();

    let count = state.palette.len().clamp(MIN_SLOTS, MAX_SLOTS);
    Some((prompt, count))
}

pub fn ai_event(prompt: String, result: Result<Vec<Hex>, GenerationError>) -> NetworkEvent {
    match result {
        Ok(colors) => NetworkEvent::AiPalette { prompt, colors },
        Err(e) => {
            tracing::warn!(error = %e, "AI palette request failed");
            NetworkEvent::AiFailed {
                reply: e.assistant_reply().to_string(),
                detail: e.to_string(),
            }
        }
    }
}

pub fn apply_network(state: &mut AppState, ev: NetworkEvent) {
    state.generating = false;
    match ev {
        NetworkEvent::AiPalette { prompt, colors } => {
            if state.palette.replace_all(&colors) {
                state.cursor = 0;
                state.chat.push(ChatMessage::assistant(format!(
                    "I've generated a palette based on \"{prompt}\". How does it look?"
                )));
                state.status = format!("AI palette: {} colors", state.palette.len());
            } else {
                state.chat.push(ChatMessage::assistant(
                    GenerationError::Unusable(String::new()).assistant_reply(),
                ));
            }
        }
        NetworkEvent::AiFailed { reply, detail } => {
            state.chat.push(ChatMessage::assistant(reply));
            state.toast = Some(Toast::error(detail));
            state.status.clear();
        }
    }
}
