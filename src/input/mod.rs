use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::AppState;
use crate::palette::Tone;
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};
use std::time::Duration;
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            let ev = match event::poll(POLL_INTERVAL) {
                Ok(true) => match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => InputEvent::Mouse(m),
                    Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::warn!("read terminal event: {e}");
                        continue;
                    }
                },
                Ok(false) => InputEvent::Tick,
                Err(e) => {
                    tracing::error!("poll terminal events: {e}");
                    break;
                }
            };
            if tx.blocking_send(Event::Input(ev)).is_err() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Tick => Some(Action::Tick),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::Down(MouseButton::Left) if !state.show_help => {
                if let Some(tone) = state.hit_areas.tone_at(m.column, m.row) {
                    Some(Action::ToggleTone(tone))
                } else {
                    state
                        .hit_areas
                        .swatch_at(m.column, m.row)
                        .map(Action::CopySwatch)
                }
            }
            MouseEventKind::ScrollUp => Some(Action::FocusPrev),
            MouseEventKind::ScrollDown => Some(Action::FocusNext),
            _ => None,
        },
        InputEvent::Key(k) if state.show_help => handle_help_overlay(k),
        InputEvent::Key(k) => handle_normal_mode(k),
    }
}

fn handle_normal_mode(k: KeyEvent) -> Option<Action> {
    match k.code {
        // Quit
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),

        // Tones
        KeyCode::Char(c @ '1'..='7') => Tone::from_key(c).map(Action::ToggleTone),
        KeyCode::Char('0') => Some(Action::ClearTones),

        // Palette
        KeyCode::Char(' ') | KeyCode::Char('g') | KeyCode::F(5) => Some(Action::Regenerate),
        KeyCode::Char('r') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Regenerate)
        }

        // Swatch focus - vim style
        KeyCode::Left | KeyCode::Char('h') => Some(Action::FocusPrev),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::FocusNext),
        KeyCode::Home => Some(Action::FocusSwatch(0)),
        KeyCode::End => Some(Action::FocusSwatch(crate::palette::PALETTE_SIZE - 1)),

        // Copy
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::CopyFocused),

        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),

        _ => None,
    }
}

fn handle_help_overlay(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => Some(Action::CloseHelp),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::HitAreas;
    use crate::palette::{Generator, RngSource, Selection};
    use crossterm::event::{KeyEventState, MouseEvent};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::layout::Rect;

    fn make_state() -> AppState {
        let selection = Selection::new();
        let palette = Generator::default().generate(&selection, &mut RngSource(StdRng::seed_from_u64(5)));
        AppState::new(selection, palette)
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> InputEvent {
        InputEvent::Key(KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click(column: u16, row: u16) -> InputEvent {
        InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_number_keys_toggle_tones() {
        let state = make_state();
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('1'))),
            Some(Action::ToggleTone(Tone::Red))
        );
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('7'))),
            Some(Action::ToggleTone(Tone::Pink))
        );
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('0'))),
            Some(Action::ClearTones)
        );
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('8'))), None);
    }

    #[test]
    fn test_regenerate_and_copy_keys() {
        let state = make_state();
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char(' '))), Some(Action::Regenerate));
        assert_eq!(map_input_to_action(&state, ctrl('r')), Some(Action::Regenerate));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::CopyFocused));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('c'))), Some(Action::CopyFocused));
        assert_eq!(map_input_to_action(&state, ctrl('c')), Some(Action::Quit));
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut state = make_state();
        state.show_help = true;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('1'))), None);
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), Some(Action::CloseHelp));
        assert_eq!(map_input_to_action(&state, click(1, 1)), None);
    }

    #[test]
    fn test_mouse_clicks_hit_tones_and_swatches() {
        let mut state = make_state();
        state.hit_areas = HitAreas {
            tones: vec![(Tone::Green, Rect::new(0, 0, 10, 3))],
            swatches: vec![Rect::new(0, 4, 10, 5), Rect::new(10, 4, 10, 5)],
        };
        assert_eq!(map_input_to_action(&state, click(2, 1)), Some(Action::ToggleTone(Tone::Green)));
        assert_eq!(map_input_to_action(&state, click(12, 6)), Some(Action::CopySwatch(1)));
        assert_eq!(map_input_to_action(&state, click(40, 40)), None);
    }

    #[test]
    fn test_tick_and_resize() {
        let state = make_state();
        assert_eq!(map_input_to_action(&state, InputEvent::Tick), Some(Action::Tick));
        assert_eq!(map_input_to_action(&state, InputEvent::Resize), Some(Action::Resize));
    }
}
