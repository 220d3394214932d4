//! Frame layout and responsive presets for a carousel instance.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::error::CarouselError;
use super::sequence::COPIES;

pub const DEFAULT_CARD_WIDTH: f32 = 360.0;
pub const DEFAULT_CARD_SPACING: f32 = 32.0;
pub const DEFAULT_AUTO_SCROLL_SPEED: f32 = 2.0;

/// Viewport widths below this are laid out with the mobile preset.
pub const MOBILE_MAX_WIDTH: f32 = 600.0;

/// Height of the carousel viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawHeight", into = "RawHeight")]
pub enum CarouselHeight {
    /// Size to the tallest item.
    #[default]
    Auto,
    /// Fixed height in px.
    Fixed(f32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawHeight {
    Px(f32),
    Keyword(String),
}

impl TryFrom<RawHeight> for CarouselHeight {
    type Error = String;

    fn try_from(raw: RawHeight) -> Result<Self, Self::Error> {
        match raw {
            RawHeight::Px(px) => Ok(CarouselHeight::Fixed(px)),
            RawHeight::Keyword(word) if word.eq_ignore_ascii_case("auto") => {
                Ok(CarouselHeight::Auto)
            }
            RawHeight::Keyword(word) => {
                Err(format!("expected \"auto\" or a pixel height, got {word:?}"))
            }
        }
    }
}

impl From<CarouselHeight> for RawHeight {
    fn from(height: CarouselHeight) -> Self {
        match height {
            CarouselHeight::Auto => RawHeight::Keyword("auto".to_string()),
            CarouselHeight::Fixed(px) => RawHeight::Px(px),
        }
    }
}

/// Geometry and baseline speed of one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselLayout {
    /// Width of each item frame in px.
    pub card_width: f32,
    /// Gap between item frames in px.
    pub card_spacing: f32,
    pub height: CarouselHeight,
    /// Signed px/frame; positive advances toward later items.
    pub auto_scroll_speed: f32,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            card_width: DEFAULT_CARD_WIDTH,
            card_spacing: DEFAULT_CARD_SPACING,
            height: CarouselHeight::Auto,
            auto_scroll_speed: DEFAULT_AUTO_SCROLL_SPEED,
        }
    }
}

impl CarouselLayout {
    pub fn new(card_width: f32, card_spacing: f32) -> Self {
        Self {
            card_width,
            card_spacing,
            ..Default::default()
        }
    }

    pub fn with_height(mut self, height: CarouselHeight) -> Self {
        self.height = height;
        self
    }

    pub fn with_auto_scroll_speed(mut self, speed: f32) -> Self {
        self.auto_scroll_speed = speed;
        self
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        let invalid =
            |field, value| CarouselError::InvalidLayout { field, value };

        if !(self.card_width.is_finite() && self.card_width > 0.0) {
            return Err(invalid("card_width", self.card_width));
        }
        if !(self.card_spacing.is_finite() && self.card_spacing >= 0.0) {
            return Err(invalid("card_spacing", self.card_spacing));
        }
        if !self.auto_scroll_speed.is_finite() {
            return Err(invalid("auto_scroll_speed", self.auto_scroll_speed));
        }
        if let CarouselHeight::Fixed(px) = self.height
            && !(px.is_finite() && px > 0.0)
        {
            return Err(invalid("height", px));
        }
        Ok(())
    }

    /// Distance between the starts of adjacent frames.
    #[inline]
    pub fn stride(&self) -> f32 {
        self.card_width + self.card_spacing
    }

    /// Span of one copy of the item list: `N * (card_width + card_spacing)`.
    #[inline]
    pub fn total_width(&self, item_count: usize) -> f32 {
        item_count as f32 * self.stride()
    }

    /// Width of the rendered tripled row, without trailing spacing.
    pub fn content_width(&self, item_count: usize) -> f32 {
        let slots = item_count * COPIES;
        if slots == 0 {
            return 0.0;
        }
        slots as f32 * self.card_width
            + (slots - 1) as f32 * self.card_spacing
    }

    /// Display indices whose frames intersect `[offset, offset + viewport)`,
    /// widened by `overscan` frames on each side.
    pub fn visible_range(
        &self,
        item_count: usize,
        offset: f32,
        viewport_width: f32,
        overscan: usize,
    ) -> Range<usize> {
        let slots = item_count * COPIES;
        let stride = self.stride();
        if slots == 0 || stride <= 0.0 || !offset.is_finite() {
            return 0..0;
        }
        let offset = offset.max(0.0);
        let viewport_end = offset + viewport_width.max(0.0);
        let first = (offset / stride).floor() as usize;
        // Frames are included if their start < viewport_end
        let last =
            ((viewport_end - 1e-3).max(offset) / stride).floor() as usize;
        let start = first.saturating_sub(overscan).min(slots);
        let end = last
            .saturating_add(1)
            .saturating_add(overscan)
            .min(slots);
        start..end.max(start)
    }
}

/// Coarse viewport class used to pick layout presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Breakpoint {
    Mobile,
    #[default]
    Desktop,
}

impl Breakpoint {
    pub fn for_viewport_width(width: f32) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }
}

/// Layouts for each breakpoint. The engine never listens to resizes; hosts
/// pick a layout here and hand it to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveLayout {
    pub mobile: CarouselLayout,
    pub desktop: CarouselLayout,
}

impl ResponsiveLayout {
    pub fn new(mobile: CarouselLayout, desktop: CarouselLayout) -> Self {
        Self { mobile, desktop }
    }

    /// Same layout at every breakpoint.
    pub fn uniform(layout: CarouselLayout) -> Self {
        Self::new(layout, layout)
    }

    pub fn for_breakpoint(&self, breakpoint: Breakpoint) -> CarouselLayout {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Desktop => self.desktop,
        }
    }

    pub fn for_viewport_width(&self, width: f32) -> CarouselLayout {
        self.for_breakpoint(Breakpoint::for_viewport_width(width))
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        self.mobile.validate()?;
        self.desktop.validate()
    }
}
