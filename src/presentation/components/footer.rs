use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::super::view::PageContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &PageContext<'_>) {
    let theme = ctx.theme;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let actions = ctx.help.unwrap_or(" ");
    let actions_widget = Paragraph::new(format!("Actions: {actions}"))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.accent).bg(theme.background));
    frame.render_widget(actions_widget, rows[0]);

    let mut status = ctx.status_message.to_string();
    if let Some(item) = ctx.items.get(ctx.focused) {
        status.push_str(" • focus: ");
        status.push_str(item.title);
    }
    if status.trim().is_empty() {
        status = "Ready".to_string();
    }

    let status_widget = Paragraph::new(Line::from(vec![Span::raw("Status: "), Span::raw(status)]))
        .style(theme.page());
    frame.render_widget(status_widget, rows[1]);
}
