use anyhow::Context;
use folio_core::carousel::{
    CarouselHeight, CarouselLayout, MotionTuning, ResponsiveLayout,
};
use folio_model::Collection;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_content_root() -> PathBuf {
    PathBuf::from("content")
}

/// Top-level showcase settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Directory holding one sub-directory per content collection.
    #[serde(default = "default_content_root")]
    pub content_root: PathBuf,
    /// Momentum model shared by every shelf. The defaults reproduce the
    /// reference feel; lower `friction` for shorter flings.
    pub motion: MotionTuning,
    pub shelves: ShelvesConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            content_root: default_content_root(),
            motion: MotionTuning::default(),
            shelves: ShelvesConfig::default(),
        }
    }
}

impl ShowcaseConfig {
    /// Check every layout and the motion tuning.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.motion.validate().context("invalid [motion] settings")?;
        for collection in Collection::ALL {
            self.shelves
                .shelf(collection)
                .layout
                .validate()
                .with_context(|| {
                    format!("invalid layout for shelf {collection}")
                })?;
        }
        Ok(())
    }
}

/// Per-shelf settings, one entry per home page collection.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShelvesConfig {
    pub projects: ShelfConfig,
    pub extra_curricular: ShelfConfig,
    pub co_curricular: ShelfConfig,
}

impl Default for ShelvesConfig {
    fn default() -> Self {
        Self {
            projects: ShelfConfig::projects(),
            extra_curricular: ShelfConfig::extra_curricular(),
            co_curricular: ShelfConfig::co_curricular(),
        }
    }
}

impl ShelvesConfig {
    pub fn shelf(&self, collection: Collection) -> &ShelfConfig {
        match collection {
            Collection::Projects => &self.projects,
            Collection::ExtraCurricular => &self.extra_curricular,
            Collection::CoCurricular => &self.co_curricular,
        }
    }
}

/// A titled carousel shelf.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShelfConfig {
    pub title: String,
    /// Hidden shelves are not rendered and never animate.
    pub enabled: bool,
    pub layout: ResponsiveLayout,
}

impl ShelfConfig {
    /// Project cards: wide frames, forward scroll.
    pub fn projects() -> Self {
        Self {
            title: "Projects".to_string(),
            enabled: true,
            layout: ResponsiveLayout::new(
                CarouselLayout::new(300.0, 16.0)
                    .with_height(CarouselHeight::Fixed(360.0)),
                CarouselLayout::new(440.0, 48.0)
                    .with_height(CarouselHeight::Fixed(440.0)),
            ),
        }
    }

    /// Activity tiles scroll the other way so adjacent shelves counter-move.
    pub fn extra_curricular() -> Self {
        Self {
            title: "Extra-curricular".to_string(),
            enabled: true,
            layout: ResponsiveLayout::new(
                CarouselLayout::new(180.0, 8.0)
                    .with_height(CarouselHeight::Fixed(260.0))
                    .with_auto_scroll_speed(-2.0),
                CarouselLayout::new(300.0, 28.0)
                    .with_height(CarouselHeight::Fixed(260.0))
                    .with_auto_scroll_speed(-2.0),
            ),
        }
    }

    pub fn co_curricular() -> Self {
        Self {
            title: "Co-curricular".to_string(),
            enabled: true,
            layout: ResponsiveLayout::new(
                CarouselLayout::new(300.0, 8.0)
                    .with_height(CarouselHeight::Fixed(260.0)),
                CarouselLayout::new(440.0, 24.0)
                    .with_height(CarouselHeight::Fixed(260.0)),
            ),
        }
    }
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            enabled: true,
            layout: ResponsiveLayout::default(),
        }
    }
}
