//! Swatch row: the current palette, one block per color

use crate::app::state::AppState;
use crate::palette::PALETTE_SIZE;
use crate::tui::theme::{get_theme, to_color};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Layout structure of each swatch:
/// ┌────────────┐
/// │            │
/// │  (color)   │
/// │            │
/// │  #RRGGBB   │
/// └─────▲──────┘
pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, PALETTE_SIZE as u32); PALETTE_SIZE])
        .split(area);

    state.hit_areas.swatches.clear();
    for (i, (color, cell)) in state.palette.iter().zip(cols.iter().copied()).enumerate() {
        let focused = i == state.focused;
        let fill = to_color(color);
        let label = theme.colors.label_for(color);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(fill));
        block = if focused {
            block
                .border_set(theme.focused_border_set())
                .border_style(Style::default().fg(theme.colors.border_focus).bg(fill))
                .title_bottom(Line::from(format!(" {} ", icons.focus)).centered())
        } else {
            block
                .border_set(theme.border_set())
                .border_style(Style::default().fg(fill).bg(fill))
        };

        let inner = block.inner(cell);
        frame.render_widget(block, cell);

        // Hex code sits at the bottom of the swatch
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
            .split(inner);
        let text = Paragraph::new(color.to_hex())
            .alignment(Alignment::Center)
            .style(Style::default().fg(label).bg(fill).add_modifier(Modifier::BOLD));
        frame.render_widget(text, rows[1]);

        state.hit_areas.swatches.push(cell);
    }
}
