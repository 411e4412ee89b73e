//! Root layout widget - orchestrates main layout structure

use crate::app::state::AppState;
use crate::palette::{Mode, Selection};
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{help, swatches, tones};

/// Main layout structure:
/// ┌─────────────────────────────────────────────┐
/// │ 1 Red  2 Orange  3 Yellow  ...   (tones)    │
/// ├─────────────────────────────────────────────┤
/// │ ┌──────┐┌──────┐┌──────┐┌──────┐┌──────┐    │
/// │ │      ││      ││      ││      ││      │    │
/// │ │#RRGGB││      ││      ││      ││      │    │
/// │ └──────┘└──────┘└──────┘└──────┘└──────┘    │
/// ├─────────────────────────────────────────────┤
/// │ mode / toast                                │
/// │ key hints                                   │
/// └─────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let root = frame.area();
    let theme = get_theme();

    let outer = Block::default().style(Style::default().bg(theme.colors.bg_primary));
    frame.render_widget(outer, root);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tone bar
            Constraint::Min(6),    // Swatches
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key hints
        ])
        .split(root);

    tones::render(frame, state, rows[0]);
    swatches::render(frame, state, rows[1]);
    render_status(frame, state, rows[2]);
    render_hints(frame, rows[3]);

    if state.show_help {
        help::render(frame, root);
    }
}

fn render_status(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.colors.border))
        .title(format!(" {} Palette #{} ", icons.palette, state.generation))
        .title_style(Style::default().fg(theme.colors.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::styled(
        mode_label(&state.selection),
        Style::default().fg(theme.colors.fg_primary),
    )];
    if let Some(toast) = &state.toast {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{} {}", icons.success, toast.message),
            Style::default()
                .fg(theme.colors.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let bullet = theme.icons.bullet;
    let hints = [
        ("1-7", "tones"),
        ("0", "clear"),
        ("Space", "regenerate"),
        ("h/l", "focus"),
        ("Enter", "copy"),
        ("?", "help"),
        ("q", "quit"),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                format!(" {bullet} "),
                Style::default().fg(theme.colors.border),
            ));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme.colors.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.colors.fg_secondary),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Human-readable description of the generation mode for a selection.
pub fn mode_label(selection: &Selection) -> String {
    let arrow = get_theme().icons.arrow;
    match Mode::of(selection) {
        Mode::Random => "Random colors (no tone selected)".to_string(),
        Mode::Tone(tone) => format!("Shades of {}", tone.label()),
        Mode::Gradient(_) => {
            let stops: Vec<&str> = selection.tones().iter().map(|t| t.label()).collect();
            format!("Gradient {}", stops.join(&format!(" {arrow} ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Tone;

    #[test]
    fn test_mode_label() {
        assert_eq!(mode_label(&Selection::new()), "Random colors (no tone selected)");

        let single: Selection = [Tone::Purple].into_iter().collect();
        assert_eq!(mode_label(&single), "Shades of Purple");

        let multi: Selection = [Tone::Red, Tone::Yellow, Tone::Blue].into_iter().collect();
        assert_eq!(mode_label(&multi), "Gradient Red → Yellow → Blue");
    }
}
