use std::time::Duration;

use crate::presentation::ThemeMode;

#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub tick_rate: Duration,
    pub theme: ThemeMode,
    pub show_help: bool,
    pub title: Option<String>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(120),
            theme: ThemeMode::Light,
            show_help: true,
            title: None,
        }
    }
}

impl DemoOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_dark_mode(self, dark: bool) -> Self {
        self.with_theme(if dark { ThemeMode::Dark } else { ThemeMode::Light })
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
