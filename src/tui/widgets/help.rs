//! Help overlay showing keybindings

use crate::palette::Tone;
use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered over `area`
pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let popup = centered(area, 64, 20);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.colors.accent))
        .style(Style::default().bg(theme.colors.bg_primary))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.colors.accent));

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let mut left_content = vec![section_header("Tones", &theme)];
    left_content.extend(
        Tone::ALL
            .iter()
            .map(|t| keybind(&t.key().to_string(), &format!("Toggle {}", t.label()), &theme)),
    );
    left_content.push(keybind("0", "Clear tones", &theme));

    let left_para = Paragraph::new(left_content).wrap(Wrap { trim: false });
    frame.render_widget(left_para, cols[0]);

    let right_content = vec![
        section_header("Palette", &theme),
        keybind("Space / g", "Regenerate", &theme),
        keybind("h / Left", "Previous swatch", &theme),
        keybind("l / Right", "Next swatch", &theme),
        keybind("Enter / c", "Copy hex code", &theme),
        keybind("Click", "Toggle tone / copy", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("?", "Toggle help", &theme),
        keybind("q / Esc", "Quit", &theme),
    ];

    let right_para = Paragraph::new(right_content).wrap(Wrap { trim: false });
    frame.render_widget(right_para, cols[1]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.colors.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:12}", key),
            Style::default()
                .fg(theme.colors.fg_secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.colors.fg_primary)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered(area, 64, 20);
        assert_eq!(popup, Rect::new(18, 10, 64, 20));

        let small = Rect::new(5, 5, 30, 10);
        assert_eq!(centered(small, 64, 20), small);
    }
}
