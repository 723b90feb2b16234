use iced::{
    Background, Border, Color, Shadow, Theme, Vector, theme,
    widget::{button, container, text_input},
};

/// Warm cream and rose palette
#[derive(Debug, Clone, Copy)]
pub struct LumenTheme;

impl LumenTheme {
    // Core colors
    pub const BACKGROUND: Color = Color::from_rgb(0.992, 0.976, 0.965); // #FDF9F6
    pub const SURFACE: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const SURFACE_ALT: Color = Color::from_rgb(0.969, 0.937, 0.918); // #F7EFEA
    pub const ACCENT: Color = Color::from_rgb(0.745, 0.475, 0.490); // #BE797D
    pub const ACCENT_DARK: Color = Color::from_rgb(0.576, 0.333, 0.357); // #93555B
    pub const ACCENT_SOFT: Color = Color::from_rgba(0.745, 0.475, 0.490, 0.25);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.906, 0.863, 0.839); // #E7DCD6

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.184, 0.153, 0.149); // #2F2726
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.420, 0.380, 0.373); // #6B615F
    pub const TEXT_ON_ACCENT: Color = Color::WHITE;

    // Status colors
    pub const SUCCESS: Color = Color::from_rgb(0.263, 0.612, 0.435); // #439C6F
    pub const ERROR: Color = Color::from_rgb(0.808, 0.282, 0.282); // #CE4848

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Lumen Light", palette)
    }
}

pub fn header_style(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_| container::Style {
        background: Some(Background::Color(if scrolled {
            LumenTheme::SURFACE
        } else {
            Color::TRANSPARENT
        })),
        shadow: if scrolled {
            Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 12.0,
            }
        } else {
            Shadow::default()
        },
        ..container::Style::default()
    }
}

pub fn section_style(alternate: bool) -> impl Fn(&Theme) -> container::Style {
    move |_| container::Style {
        background: Some(Background::Color(if alternate {
            LumenTheme::SURFACE_ALT
        } else {
            LumenTheme::BACKGROUND
        })),
        ..container::Style::default()
    }
}

pub fn card_style(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(LumenTheme::SURFACE)),
        border: Border {
            color: LumenTheme::BORDER_COLOR,
            width: 1.0,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..container::Style::default()
    }
}

pub fn notice_style(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.12,
            ..LumenTheme::SUCCESS
        })),
        border: Border {
            color: LumenTheme::SUCCESS,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = button::primary(theme, status);
    style.background = Some(Background::Color(match status {
        button::Status::Hovered | button::Status::Pressed => {
            LumenTheme::ACCENT_DARK
        }
        button::Status::Disabled => LumenTheme::ACCENT_SOFT,
        _ => LumenTheme::ACCENT,
    }));
    style.text_color = LumenTheme::TEXT_ON_ACCENT;
    style.border.radius = 24.0.into();
    style
}

pub fn ghost_button(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = button::text(theme, status);
    style.text_color = match status {
        button::Status::Hovered | button::Status::Pressed => {
            LumenTheme::ACCENT_DARK
        }
        _ => LumenTheme::TEXT_PRIMARY,
    };
    style
}

pub fn round_button(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = button::secondary(theme, status);
    style.background = Some(Background::Color(match status {
        button::Status::Hovered | button::Status::Pressed => {
            LumenTheme::ACCENT_SOFT
        }
        _ => LumenTheme::SURFACE,
    }));
    style.text_color = LumenTheme::ACCENT_DARK;
    style.border = Border {
        color: LumenTheme::BORDER_COLOR,
        width: 1.0,
        radius: 24.0.into(),
    };
    style
}

pub fn indicator_style(
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, _| button::Style {
        background: Some(Background::Color(if active {
            LumenTheme::ACCENT
        } else {
            LumenTheme::BORDER_COLOR
        })),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

pub fn input_style(
    invalid: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme, status| {
        let mut style = text_input::default(theme, status);
        style.border.radius = 8.0.into();
        if invalid {
            style.border.color = LumenTheme::ERROR;
        }
        style
    }
}
