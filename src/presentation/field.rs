use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};
use textwrap::wrap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::Variant;
use crate::form::{FieldIcon, MessageNode, RenderTree, TrailingSlot};

use super::icons;
use super::theme::{SizeMetrics, Theme};

/// Screen areas a field occupies once laid out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldLayout {
    pub label: Option<Rect>,
    pub control: Rect,
    pub input: Rect,
    pub spinner: Option<Rect>,
    pub toggle: Option<Rect>,
    pub clear: Option<Rect>,
    pub message: Option<Rect>,
}

impl FieldLayout {
    /// Icon under the given cell, if any.
    pub fn icon_at(&self, position: Position) -> Option<FieldIcon> {
        if self.clear.is_some_and(|rect| rect.contains(position)) {
            return Some(FieldIcon::Clear);
        }
        if self.toggle.is_some_and(|rect| rect.contains(position)) {
            return Some(FieldIcon::Toggle);
        }
        None
    }

    pub fn contains(&self, position: Position) -> bool {
        self.control.contains(position)
            || self.label.is_some_and(|rect| rect.contains(position))
            || self.message.is_some_and(|rect| rect.contains(position))
    }
}

/// Draws a [`RenderTree`] into a terminal buffer.
pub struct FieldView<'a> {
    tree: &'a RenderTree,
    theme: &'a Theme,
    focused: bool,
    tick: usize,
}

impl<'a> FieldView<'a> {
    pub fn new(tree: &'a RenderTree, theme: &'a Theme) -> Self {
        Self {
            tree,
            theme,
            focused: false,
            tick: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }

    pub fn height(&self, width: u16) -> u16 {
        field_height(self.tree, width)
    }

    pub fn layout(&self, area: Rect) -> FieldLayout {
        let control_node = &self.tree.control;
        let metrics = SizeMetrics::for_size(control_node.size);
        let mut y = area.y;
        let bottom = area.bottom();

        let label = self.tree.label.as_ref().map(|_| {
            let rect = Rect::new(area.x, y, area.width, 1.min(bottom.saturating_sub(y)));
            y = y.saturating_add(1);
            rect
        });

        let control_height = control_height(self.tree).min(bottom.saturating_sub(y));
        let control = Rect::new(area.x, y, area.width, control_height);
        y = y.saturating_add(control_height);

        let border = u16::from(control_node.variant == Variant::Outlined);
        let content_x = control.x + border + metrics.pad_x;
        let content_right = control.right().saturating_sub(border + metrics.pad_x);
        // The text row disappears once clipping eats into the padding or border.
        let content_y = control.y + border + metrics.pad_y;
        let content = Rect::new(
            content_x,
            content_y,
            content_right.saturating_sub(content_x),
            u16::from(content_y < control.bottom()),
        );

        let slot = 1 + metrics.icon_gap;
        let icon_rect = |offset: usize| {
            let shift = 1 + offset as u16 * slot;
            (content.height > 0 && content.width >= shift)
                .then(|| Rect::new(content.right() - shift, content.y, 1, 1))
        };
        let (spinner, toggle, clear) = match control_node.trailing {
            TrailingSlot::Empty => (None, None, None),
            TrailingSlot::Spinner => (icon_rect(0), None, None),
            TrailingSlot::Icons { toggle, clear } => (
                None,
                toggle.and_then(|icon| icon_rect(icon.offset)),
                clear.and_then(|icon| icon_rect(icon.offset)),
            ),
        };

        let reserved = control_node.trailing.width_in_slots() as u16 * slot;
        let input = Rect::new(
            content.x,
            content.y,
            content.width.saturating_sub(reserved),
            content.height,
        );

        let message = self.tree.message.as_ref().map(|message| {
            let lines = message_lines(message.text(), area.width).len() as u16;
            Rect::new(area.x, y, area.width, lines.min(bottom.saturating_sub(y)))
        });

        FieldLayout {
            label,
            control,
            input,
            spinner,
            toggle,
            clear,
            message,
        }
    }

    /// Cursor cell for a focused, enabled field.
    pub fn cursor(&self, area: Rect) -> Option<Position> {
        if !self.focused || self.tree.control.disabled {
            return None;
        }
        let input = self.layout(area).input;
        if input.width == 0 || input.height == 0 {
            return None;
        }
        let shown = visible_value(&display_value(self.tree), input.width);
        let offset = (shown.width() as u16).min(input.width - 1);
        Some(Position::new(input.x + offset, input.y))
    }
}

impl Widget for FieldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);
        let theme = self.theme;
        let control = &self.tree.control;

        if let (Some(label), Some(rect)) = (&self.tree.label, layout.label)
            && rect.height > 0
        {
            let base = Style::default()
                .fg(if control.disabled {
                    theme.disabled
                } else {
                    theme.text
                })
                .add_modifier(Modifier::BOLD);
            let mut spans = vec![Span::styled(label.text.clone(), base)];
            if label.required {
                spans.push(Span::styled(" *", Style::default().fg(theme.error)));
            }
            buf.set_line(rect.x, rect.y, &Line::from(spans), rect.width);
        }

        buf.set_style(layout.control, theme.control_surface(control.variant));
        if control.variant == Variant::Outlined {
            Block::bordered()
                .border_style(theme.control_border(
                    control.has_error,
                    self.focused,
                    control.disabled,
                ))
                .render(layout.control, buf);
        }

        let input = layout.input;
        if input.width > 0 && input.height > 0 {
            if control.value.is_empty() {
                if let Some(placeholder) = &control.placeholder {
                    buf.set_stringn(
                        input.x,
                        input.y,
                        placeholder,
                        input.width as usize,
                        Style::default().fg(theme.muted),
                    );
                }
            } else {
                let shown = visible_value(&display_value(self.tree), input.width);
                buf.set_stringn(
                    input.x,
                    input.y,
                    shown,
                    input.width as usize,
                    theme.value_text(control.size, control.disabled),
                );
            }
        }

        let icon_style = |disabled: bool| {
            Style::default().fg(if disabled { theme.disabled } else { theme.muted })
        };
        if let Some(rect) = layout.spinner {
            buf.set_string(
                rect.x,
                rect.y,
                icons::spinner_frame(self.tick),
                Style::default().fg(theme.accent),
            );
        }
        if let (Some(rect), Some(icon)) = (layout.toggle, control.trailing.toggle()) {
            buf.set_string(
                rect.x,
                rect.y,
                icons::toggle_glyph(icon.visible),
                icon_style(icon.disabled),
            );
        }
        if let (Some(rect), Some(icon)) = (layout.clear, control.trailing.clear()) {
            buf.set_string(rect.x, rect.y, icons::CLEAR, icon_style(icon.disabled));
        }

        if let (Some(message), Some(rect)) = (&self.tree.message, layout.message) {
            let style = match message {
                MessageNode::Error { .. } => Style::default().fg(theme.error),
                MessageNode::Helper { .. } => Style::default().fg(theme.muted),
            };
            for (row, line) in message_lines(message.text(), rect.width)
                .into_iter()
                .take(rect.height as usize)
                .enumerate()
            {
                buf.set_stringn(rect.x, rect.y + row as u16, line, rect.width as usize, style);
            }
        }
    }
}

/// Rows a field needs at the given width.
pub fn field_height(tree: &RenderTree, width: u16) -> u16 {
    let label = u16::from(tree.label.is_some());
    let message = tree
        .message
        .as_ref()
        .map(|message| message_lines(message.text(), width).len() as u16)
        .unwrap_or(0);
    label + control_height(tree) + message
}

fn control_height(tree: &RenderTree) -> u16 {
    let metrics = SizeMetrics::for_size(tree.control.size);
    let border = if tree.control.variant == Variant::Outlined {
        2
    } else {
        0
    };
    1 + metrics.pad_y * 2 + border
}

/// Value as shown on screen: passwords are masked unless revealed.
pub fn display_value(tree: &RenderTree) -> String {
    let control = &tree.control;
    if control.is_masked() {
        icons::MASK.to_string().repeat(control.value.chars().count())
    } else {
        control.value.clone()
    }
}

/// Tail of `text` that fits in `width` columns, leaving one cell for the cursor.
fn visible_value(text: &str, width: u16) -> String {
    let budget = (width as usize).saturating_sub(1);
    let mut used = 0usize;
    let mut tail = Vec::new();
    for ch in text.chars().rev() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        tail.push(ch);
    }
    tail.into_iter().rev().collect()
}

fn message_lines(text: &str, width: u16) -> Vec<String> {
    let lines: Vec<String> = wrap(text, width.max(1) as usize)
        .into_iter()
        .map(|segment| segment.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
