use ratatui::style::{Color, Modifier, Style};

use crate::domain::{Size, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Colour palette used to draw fields and the demo page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub border: Color,
    pub fill: Color,
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Color::White,
            text: Color::Black,
            muted: Color::DarkGray,
            accent: Color::Blue,
            error: Color::Red,
            border: Color::Gray,
            fill: Color::Rgb(235, 235, 240),
            disabled: Color::Gray,
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Color::Rgb(24, 24, 27),
            text: Color::White,
            muted: Color::Gray,
            accent: Color::Cyan,
            error: Color::LightRed,
            border: Color::DarkGray,
            fill: Color::Rgb(45, 45, 52),
            disabled: Color::DarkGray,
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn page(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Border colour of a control: error wins over focus, disabled mutes both.
    pub fn control_border(&self, has_error: bool, focused: bool, disabled: bool) -> Style {
        let color = if disabled {
            self.disabled
        } else if has_error {
            self.error
        } else if focused {
            self.accent
        } else {
            self.border
        };
        Style::default().fg(color)
    }

    /// Background treatment of a control for its variant.
    pub fn control_surface(&self, variant: Variant) -> Style {
        match variant {
            Variant::Filled => Style::default().bg(self.fill),
            Variant::Outlined | Variant::Ghost => Style::default(),
        }
    }

    pub fn value_text(&self, size: Size, disabled: bool) -> Style {
        let style = Style::default().fg(if disabled { self.disabled } else { self.text });
        if size == Size::Lg {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

/// Spacing a size applies inside the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMetrics {
    pub pad_x: u16,
    pub pad_y: u16,
    pub icon_gap: u16,
}

impl SizeMetrics {
    pub fn for_size(size: Size) -> Self {
        match size {
            Size::Sm => Self {
                pad_x: 0,
                pad_y: 0,
                icon_gap: 1,
            },
            Size::Md => Self {
                pad_x: 1,
                pad_y: 0,
                icon_gap: 1,
            },
            Size::Lg => Self {
                pad_x: 2,
                pad_y: 1,
                icon_gap: 2,
            },
        }
    }
}
