use std::{cell::RefCell, rc::Rc};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Frame, layout::Position};
use tracing::{debug, info};

use crate::{
    form::{ChangeSource, FieldIcon, InputField},
    presentation::{
        self, GalleryItem, PageContext, PageHit, PageLayout, Theme, ThemeMode, adjust_scroll,
        body_area, field_width, item_height,
    },
    stories::StoryCatalog,
};

use super::{
    input::KeyAction,
    keymap::{self, KeymapContext},
    options::DemoOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

struct StoryEntry {
    name: String,
    description: Option<String>,
    field: InputField,
}

#[derive(Debug, Clone, Copy)]
enum FieldNotice {
    Changed {
        index: usize,
        chars: usize,
        source: ChangeSource,
    },
    Cleared {
        index: usize,
    },
}

/// The demo page: every story of a catalog as a live field.
pub struct DemoApp {
    title: String,
    entries: Vec<StoryEntry>,
    notices: Rc<RefCell<Vec<FieldNotice>>>,
    focused: usize,
    scroll: usize,
    tick: usize,
    theme: ThemeMode,
    options: DemoOptions,
    status: StatusLine,
    help: Option<String>,
    should_quit: bool,
    layout: PageLayout,
}

impl DemoApp {
    pub fn new(catalog: StoryCatalog, options: DemoOptions) -> Self {
        let notices = Rc::new(RefCell::new(Vec::new()));
        let entries = catalog
            .stories
            .into_iter()
            .enumerate()
            .map(|(index, story)| {
                let on_change = Rc::clone(&notices);
                let on_clear = Rc::clone(&notices);
                let field = InputField::new(story.props)
                    .on_change(move |event| {
                        on_change.borrow_mut().push(FieldNotice::Changed {
                            index,
                            chars: event.value.chars().count(),
                            source: event.source,
                        });
                    })
                    .on_clear(move || {
                        on_clear.borrow_mut().push(FieldNotice::Cleared { index });
                    });
                StoryEntry {
                    name: story.name,
                    description: story.description,
                    field,
                }
            })
            .collect();
        let help = if options.show_help {
            keymap::help_text(&[KeymapContext::Page, KeymapContext::Field])
        } else {
            None
        };
        Self {
            title: options.title.clone().unwrap_or(catalog.title),
            entries,
            notices,
            focused: 0,
            scroll: 0,
            tick: 0,
            theme: options.theme,
            options,
            status: StatusLine::new(),
            help,
            should_quit: false,
            layout: PageLayout::default(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::new()?;
        info!(stories = self.entries.len(), "demo page started");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                self.on_tick();
                continue;
            }
            self.handle_event(event::read()?);
        }
        info!("demo page closed");
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn field(&self, index: usize) -> Option<&InputField> {
        self.entries.get(index).map(|entry| &entry.field)
    }

    pub fn story_name(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.name.as_str())
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme
    }

    pub fn status_message(&self) -> &str {
        self.status.message()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(_, _) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match keymap::classify_key(&key) {
            Some(KeyAction::Quit) => self.should_quit = true,
            Some(KeyAction::FieldStep(delta)) => self.focus_step(delta),
            Some(KeyAction::ToggleTheme) => {
                self.theme = self.theme.toggled();
                self.status.theme(self.theme);
            }
            Some(KeyAction::ClearField) => self.activate(self.focused, FieldIcon::Clear),
            Some(KeyAction::TogglePassword) => self.activate(self.focused, FieldIcon::Toggle),
            Some(KeyAction::ResetStatus) => self.status.ready(),
            None => {
                if let Some(entry) = self.entries.get_mut(self.focused) {
                    entry.field.handle_key(&key);
                }
            }
        }
        self.drain_notices();
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.layout.hit(Position::new(mouse.column, mouse.row)) {
                    Some(PageHit::Field(index)) => self.focused = index,
                    Some(PageHit::Icon(index, icon)) => {
                        self.focused = index;
                        self.activate(index, icon);
                    }
                    None => {}
                }
            }
            MouseEventKind::ScrollDown => self.focus_step(1),
            MouseEventKind::ScrollUp => self.focus_step(-1),
            _ => {}
        }
        self.drain_notices();
    }

    pub fn draw(&mut self, frame: &mut Frame<'_>) {
        let theme = Theme::for_mode(self.theme);
        let body = body_area(frame.area());
        let width = field_width(body.width.saturating_sub(2));

        let items: Vec<GalleryItem<'_>> = self
            .entries
            .iter()
            .map(|entry| GalleryItem {
                title: entry.name.as_str(),
                description: entry.description.as_deref(),
                tree: entry.field.render(),
            })
            .collect();
        let heights: Vec<u16> = items.iter().map(|item| item_height(item, width)).collect();
        self.scroll = adjust_scroll(
            &heights,
            self.focused,
            self.scroll,
            body.height.saturating_sub(2),
        );

        self.layout = presentation::draw(
            frame,
            PageContext {
                title: &self.title,
                theme: &theme,
                items: &items,
                focused: self.focused,
                scroll: self.scroll,
                tick: self.tick,
                status_message: self.status.message(),
                help: self.help.as_deref(),
            },
        );
    }

    fn focus_step(&mut self, delta: i32) {
        if self.entries.is_empty() {
            return;
        }
        let len = self.entries.len() as i64;
        self.focused = (self.focused as i64 + i64::from(delta)).rem_euclid(len) as usize;
    }

    fn activate(&mut self, index: usize, icon: FieldIcon) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        if entry.field.activate(icon) {
            if icon == FieldIcon::Toggle {
                self.status
                    .visibility(&entry.name, entry.field.password_visible());
            }
        } else {
            let action = match icon {
                FieldIcon::Clear => "clear",
                FieldIcon::Toggle => "password toggle",
            };
            debug!(story = %entry.name, action, "icon action ignored");
            self.status.unavailable(&entry.name, action);
        }
    }

    fn drain_notices(&mut self) {
        let notices = std::mem::take(&mut *self.notices.borrow_mut());
        for notice in notices {
            match notice {
                FieldNotice::Changed {
                    index,
                    chars,
                    source: ChangeSource::Input,
                } => {
                    if let Some(entry) = self.entries.get(index) {
                        self.status.editing(&entry.name, chars);
                    }
                }
                FieldNotice::Changed { .. } => {}
                FieldNotice::Cleared { index } => {
                    if let Some(entry) = self.entries.get(index) {
                        self.status.cleared(&entry.name);
                    }
                }
            }
        }
    }
}
