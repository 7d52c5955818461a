use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::super::field::{FieldLayout, FieldView, field_height};
use super::super::view::{GalleryItem, PageContext};

const FIELD_MAX_WIDTH: u16 = 60;
const INDENT: u16 = 2;

pub fn render_gallery(
    frame: &mut Frame<'_>,
    area: Rect,
    ctx: &PageContext<'_>,
) -> Vec<(usize, FieldLayout)> {
    let theme = ctx.theme;
    let block = Block::default()
        .title(format!("{} ({})", ctx.title, ctx.items.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(theme.page());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if ctx.items.is_empty() {
        let placeholder =
            Paragraph::new("No stories to show").style(Style::default().fg(theme.muted));
        frame.render_widget(placeholder, inner);
        return Vec::new();
    }

    let field_width = field_width(inner.width);
    let mut layouts = Vec::new();
    let mut y = inner.y;
    for (index, item) in ctx.items.iter().enumerate().skip(ctx.scroll) {
        let height = item_height(item, field_width);
        if y >= inner.bottom()
            || (y.saturating_add(height) > inner.bottom() && index != ctx.scroll)
        {
            break;
        }
        let focused = index == ctx.focused;
        let marker = if focused { "» " } else { "  " };
        let title_style = if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, title_style),
                Span::styled(item.title, title_style),
            ])),
            Rect::new(inner.x, y, inner.width, 1),
        );
        y += 1;

        if let Some(description) = item.description
            && y < inner.bottom()
        {
            frame.render_widget(
                Paragraph::new(description).style(Style::default().fg(theme.muted)),
                Rect::new(inner.x + INDENT, y, inner.width.saturating_sub(INDENT), 1),
            );
            y += 1;
        }

        let view = FieldView::new(&item.tree, theme)
            .focused(focused)
            .tick(ctx.tick);
        let field_height = view.height(field_width);
        let field_area = Rect::new(
            inner.x + INDENT,
            y,
            field_width,
            field_height.min(inner.bottom().saturating_sub(y)),
        );
        let layout = view.layout(field_area);
        if focused && let Some(cursor) = view.cursor(field_area) {
            frame.set_cursor_position(cursor);
        }
        frame.render_widget(view, field_area);
        layouts.push((index, layout));
        y = y.saturating_add(field_height + 1);
    }
    layouts
}

pub fn field_width(inner_width: u16) -> u16 {
    inner_width.saturating_sub(INDENT).min(FIELD_MAX_WIDTH)
}

/// Rows one gallery entry needs: title, description, field, spacer.
pub fn item_height(item: &GalleryItem<'_>, field_width: u16) -> u16 {
    let field = field_height(&item.tree, field_width);
    1 + u16::from(item.description.is_some()) + field + 1
}

/// Scroll offset that keeps `focused` inside a window of `height` rows.
pub fn adjust_scroll(heights: &[u16], focused: usize, scroll: usize, height: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let focused = focused.min(heights.len() - 1);
    let mut scroll = scroll.min(focused);
    while scroll < focused {
        let used: u32 = heights[scroll..=focused].iter().map(|h| u32::from(*h)).sum();
        if used <= u32::from(height) {
            break;
        }
        scroll += 1;
    }
    scroll
}
