pub mod actions;
pub mod events;
pub mod state;

use crate::clipboard::ClipboardHandle;
use crate::config::Config;
use crate::input;
use crate::palette::{Generator, Rgb, RngSource};
use crate::sound::{self, Cue};
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{ClipboardEvent, Event};
use rand::rngs::StdRng;
use state::{AppState, Toast};
use std::time::Duration;
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    state: AppState,
    generator: Generator,
    rng: RngSource<StdRng>,
}

/// Side effects requested by the reducer, run by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    Cue(Cue),
    Copy(Rgb),
}

impl App {
    pub fn new(cfg: Config, rng: StdRng) -> Self {
        let mut rng = RngSource(rng);
        let generator = cfg.palette.generator();
        let selection = cfg.palette.selection();
        let palette = generator.generate(&selection, &mut rng);

        Self {
            cfg,
            state: AppState::new(selection, palette),
            generator,
            rng,
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.ui.mouse);
        let clipboard = ClipboardHandle::spawn(tx.clone());
        tracing::info!(mode = ?self.state.mode(), "palette ready");

        tui::draw(terminal, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        for effect in self.reduce(action) {
                            self.run_effect(effect, &clipboard);
                        }
                    }
                }
                Event::Clipboard(ce) => {
                    if let Some(effect) = self.handle_clipboard(ce) {
                        self.run_effect(effect, &clipboard);
                    }
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state)?;
        }

        Ok(())
    }

    fn run_effect(&self, effect: Effect, clipboard: &ClipboardHandle) {
        match effect {
            Effect::Cue(cue) => {
                if self.cfg.ui.sound {
                    sound::play(cue);
                }
            }
            Effect::Copy(color) => clipboard.copy(color),
        }
    }

    fn regenerate(&mut self) {
        self.state.palette = self.generator.generate(&self.state.selection, &mut self.rng);
        self.state.generation += 1;
        tracing::debug!(
            mode = ?self.state.mode(),
            colors = ?self.state.palette.hex_codes(),
            "regenerated palette"
        );
    }

    fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::CloseHelp => self.state.show_help = false,
            Action::ToggleTone(tone) => {
                let selected = self.state.selection.toggle(tone);
                tracing::debug!(%tone, selected, "toggled tone");
                self.regenerate();
            }
            Action::ClearTones => {
                self.state.selection.clear();
                self.regenerate();
            }
            Action::Regenerate => {
                self.regenerate();
                return vec![Effect::Cue(Cue::Generate)];
            }
            Action::FocusPrev => self.state.focus_prev(),
            Action::FocusNext => self.state.focus_next(),
            Action::FocusSwatch(index) => self.state.focus(index),
            Action::CopyFocused => {
                if let Some(color) = self.state.palette.get(self.state.focused) {
                    return vec![Effect::Copy(color)];
                }
            }
            Action::CopySwatch(index) => {
                self.state.focus(index);
                if let Some(color) = self.state.palette.get(index) {
                    return vec![Effect::Copy(color)];
                }
            }
            Action::Resize => {
                // Resize is handled by terminal
            }
            Action::Tick => {}
        }
        Vec::new()
    }

    fn handle_clipboard(&mut self, ce: ClipboardEvent) -> Option<Effect> {
        match ce {
            ClipboardEvent::Copied { color } => {
                tracing::info!(%color, "copied to clipboard");
                let ttl = Duration::from_millis(self.cfg.ui.toast_millis);
                self.state.toast = Some(Toast::new(format!("Copied {color}!"), ttl));
                Some(Effect::Cue(Cue::Copy))
            }
            ClipboardEvent::Failed { color, error } => {
                tracing::error!(%color, "could not copy text: {error}");
                None
            }
        }
    }
}
