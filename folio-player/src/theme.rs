use iced::{
    Background, Border, Color, Gradient, Radians, Shadow, Theme, Vector,
    gradient, theme, widget::container,
};

/// Dark theme with warm accent highlights
#[derive(Debug, Clone, Copy)]
pub struct ShowcaseTheme;

impl ShowcaseTheme {
    // Core colors
    pub const BACKGROUND: Color = Color::from_rgb(0.04, 0.04, 0.05);
    pub const ACCENT: Color = Color::from_rgb(0.96, 0.62, 0.18); // #F59E2E
    pub const ERROR: Color = Color::from_rgb(1.0, 0.3, 0.3);

    // Surfaces
    pub const CARD_BG: Color = Color::from_rgb(0.1, 0.1, 0.11);
    pub const CARD_BORDER: Color = Color::from_rgb(0.2, 0.2, 0.22);
    pub const CHIP_BG: Color = Color::from_rgb(0.16, 0.16, 0.18);

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.72);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.5, 0.52);

    pub const CARD_RADIUS: f32 = 16.0;

    /// Activity tile gradients, cycled by item index.
    pub const ACTIVITY_GRADIENTS: [(Color, Color); 5] = [
        (
            Color::from_rgb(0.49, 0.23, 0.93),
            Color::from_rgb(0.86, 0.15, 0.47),
        ),
        (
            Color::from_rgb(0.05, 0.58, 0.53),
            Color::from_rgb(0.15, 0.39, 0.92),
        ),
        (
            Color::from_rgb(0.92, 0.35, 0.05),
            Color::from_rgb(0.86, 0.15, 0.15),
        ),
        (
            Color::from_rgb(0.31, 0.27, 0.9),
            Color::from_rgb(0.02, 0.71, 0.83),
        ),
        (
            Color::from_rgb(0.4, 0.64, 0.05),
            Color::from_rgb(0.05, 0.58, 0.53),
        ),
    ];

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.danger = Self::ERROR;

        Theme::custom("Folio Dark", palette)
    }

    pub fn activity_gradient(index: usize) -> (Color, Color) {
        Self::ACTIVITY_GRADIENTS[index % Self::ACTIVITY_GRADIENTS.len()]
    }
}

fn card_border(color: Color) -> Border {
    Border {
        color,
        width: 1.0,
        radius: ShowcaseTheme::CARD_RADIUS.into(),
    }
}

pub fn card(_: &Theme) -> container::Style {
    container::Style {
        text_color: Some(ShowcaseTheme::TEXT_PRIMARY),
        background: Some(Background::Color(ShowcaseTheme::CARD_BG)),
        border: card_border(ShowcaseTheme::CARD_BORDER),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 18.0,
        },
        snap: false,
    }
}

pub fn chip(_: &Theme) -> container::Style {
    container::Style {
        text_color: Some(ShowcaseTheme::TEXT_SECONDARY),
        background: Some(Background::Color(ShowcaseTheme::CHIP_BG)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 999.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Style closure for the activity tile at `index`.
pub fn activity_tile(index: usize) -> impl Fn(&Theme) -> container::Style {
    let (start, end) = ShowcaseTheme::activity_gradient(index);
    move |_| container::Style {
        text_color: Some(ShowcaseTheme::TEXT_PRIMARY),
        background: Some(Background::Gradient(Gradient::Linear(
            gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_4))
                .add_stop(0.0, start)
                .add_stop(1.0, end),
        ))),
        border: card_border(Color::TRANSPARENT),
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn photo_frame(_: &Theme) -> container::Style {
    container::Style {
        text_color: Some(ShowcaseTheme::TEXT_DIMMED),
        background: Some(Background::Color(ShowcaseTheme::CARD_BG)),
        border: card_border(Color::TRANSPARENT),
        shadow: Shadow::default(),
        snap: true,
    }
}

pub fn avatar(_: &Theme) -> container::Style {
    container::Style {
        text_color: None,
        background: Some(Background::Color(ShowcaseTheme::CHIP_BG)),
        border: Border {
            color: ShowcaseTheme::CARD_BG,
            width: 1.0,
            radius: 999.0.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

pub fn placeholder(_: &Theme) -> container::Style {
    container::Style {
        text_color: Some(ShowcaseTheme::TEXT_DIMMED),
        background: None,
        border: Border {
            color: ShowcaseTheme::CARD_BORDER,
            width: 1.0,
            radius: ShowcaseTheme::CARD_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}
