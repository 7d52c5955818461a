use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    widgets::Block,
};

use crate::form::{FieldIcon, RenderTree};

use super::components::{render_footer, render_gallery, render_header};
use super::field::FieldLayout;
use super::theme::Theme;

/// One story as the demo page shows it.
pub struct GalleryItem<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub tree: RenderTree,
}

pub struct PageContext<'a> {
    pub title: &'a str,
    pub theme: &'a Theme,
    pub items: &'a [GalleryItem<'a>],
    pub focused: usize,
    pub scroll: usize,
    pub tick: usize,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
}

/// Where each visible field ended up; used to route mouse clicks.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub body: Rect,
    pub fields: Vec<(usize, FieldLayout)>,
}

/// What a click at some cell lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageHit {
    Field(usize),
    Icon(usize, FieldIcon),
}

impl PageLayout {
    pub fn hit(&self, position: Position) -> Option<PageHit> {
        self.fields.iter().find_map(|(index, layout)| {
            if let Some(icon) = layout.icon_at(position) {
                Some(PageHit::Icon(*index, icon))
            } else if layout.contains(position) {
                Some(PageHit::Field(*index))
            } else {
                None
            }
        })
    }
}

/// Body rows available to the gallery for a frame of the given size.
pub fn body_area(area: Rect) -> Rect {
    page_chunks(area)[1]
}

fn page_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area)
}

pub fn draw(frame: &mut Frame<'_>, ctx: PageContext<'_>) -> PageLayout {
    frame.render_widget(Block::default().style(ctx.theme.page()), frame.area());
    let chunks = page_chunks(frame.area());

    render_header(frame, chunks[0], &ctx);
    let fields = render_gallery(frame, chunks[1], &ctx);
    render_footer(frame, chunks[2], &ctx);

    PageLayout {
        body: chunks[1],
        fields,
    }
}
