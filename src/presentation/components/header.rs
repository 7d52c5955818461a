use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::super::view::PageContext;

pub fn render_header(frame: &mut Frame<'_>, area: Rect, ctx: &PageContext<'_>) {
    let theme = ctx.theme;
    let line = Line::from(vec![
        Span::styled(
            ctx.title,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{} mode]", theme.mode.label()),
            Style::default().fg(theme.muted),
        ),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(theme.page()),
    );
    frame.render_widget(header, area);
}
