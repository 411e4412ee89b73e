//! Tone bar: one chip per tone, active ones filled with their base color

use crate::app::state::AppState;
use crate::palette::{Selection, Tone};
use crate::tui::theme::{get_theme, to_color};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.colors.border))
        .title(title(icons.tones, &state.selection))
        .title_style(Style::default().fg(theme.colors.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chips = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Tone::ALL.map(|_| Constraint::Ratio(1, Tone::ALL.len() as u32)))
        .split(inner);

    state.hit_areas.tones.clear();
    for (tone, chip) in Tone::ALL.into_iter().zip(chips.iter().copied()) {
        let active = state.selection.contains(tone);
        let base = tone.base();

        let style = if active {
            Style::default()
                .bg(to_color(base))
                .fg(theme.colors.label_for(base))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(to_color(base))
        };
        let marker = if active { icons.active } else { icons.inactive };

        // Selection order, shown so the gradient direction is visible
        let order = state
            .selection
            .tones()
            .iter()
            .position(|&t| t == tone)
            .map(|i| format!(" {}", i + 1))
            .unwrap_or_default();

        let line = Line::from(vec![
            Span::styled(format!("{} ", tone.key()), Style::default().fg(theme.colors.fg_secondary)),
            Span::styled(format!("{marker} {}{order}", tone.label()), style),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), chip);
        state.hit_areas.tones.push((tone, chip));
    }
}

fn title(icon: &str, selection: &Selection) -> String {
    if selection.is_empty() {
        format!(" {icon} Tones (none: random) ")
    } else {
        format!(" {icon} Tones ({}) ", selection.len())
    }
}
