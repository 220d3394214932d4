//! One home page shelf: a titled carousel over a content collection.

use std::path::{Path, PathBuf};
use std::time::Instant;

use folio_config::ShelfConfig;
use folio_core::carousel::{
    Breakpoint, CarouselError, CarouselHeight, CarouselLayout,
    InfiniteCarousel, MotionTuning, PointerEvent, ResponsiveLayout,
};
use folio_core::content::ContentLibrary;
use folio_model::{ActivityIcon, Collection, PostRecord};
use iced::Task;
use iced::widget::{
    Id as ScrollableId, operation::scroll_to, scrollable::AbsoluteOffset,
};

use crate::messages::{Message, ShelfMessage};

/// Height used for `auto` layouts; iced needs a concrete row height.
pub const AUTO_SHELF_HEIGHT: f32 = 320.0;

/// A single frame's content.
#[derive(Debug, Clone, PartialEq)]
pub enum ShelfItem {
    Project {
        record: PostRecord,
        cover: Option<PathBuf>,
        avatars: Vec<PathBuf>,
    },
    Activity { record: PostRecord, icon: ActivityIcon },
    Photo(PathBuf),
}

impl ShelfItem {
    /// Items for `collection`, in load order. Image sources are site paths,
    /// resolved against `content_root`.
    pub fn for_collection(
        library: &ContentLibrary,
        collection: Collection,
        content_root: &Path,
    ) -> Vec<Self> {
        match collection {
            Collection::Projects => library
                .projects
                .iter()
                .map(|record| ShelfItem::project(record.clone(), content_root))
                .collect(),
            Collection::ExtraCurricular => library
                .extra_curricular
                .iter()
                .map(|record| ShelfItem::Activity {
                    icon: ActivityIcon::for_title(&record.metadata.title),
                    record: record.clone(),
                })
                .collect(),
            Collection::CoCurricular => library
                .co_curricular_images()
                .into_iter()
                .map(|src| {
                    ShelfItem::Photo(resolve_site_path(content_root, &src))
                })
                .collect(),
        }
    }

    pub fn project(record: PostRecord, content_root: &Path) -> Self {
        let cover = record
            .metadata
            .cover_image()
            .map(|src| resolve_site_path(content_root, src));
        let avatars = record
            .metadata
            .avatars()
            .map(|src| resolve_site_path(content_root, src))
            .collect();
        ShelfItem::Project {
            record,
            cover,
            avatars,
        }
    }
}

fn resolve_site_path(content_root: &Path, src: &str) -> PathBuf {
    content_root.join(src.trim_start_matches('/'))
}

#[derive(Debug)]
pub struct Shelf {
    pub collection: Collection,
    pub title: String,
    pub scrollable_id: ScrollableId,
    layouts: ResponsiveLayout,
    /// `None` when the collection is empty; such shelves render a static
    /// placeholder and never animate.
    carousel: Option<InfiniteCarousel<ShelfItem>>,
    /// Last pointer position inside the shelf, in shelf coordinates.
    cursor_x: Option<f32>,
}

impl Shelf {
    pub fn new(
        collection: Collection,
        config: &ShelfConfig,
        items: Vec<ShelfItem>,
        tuning: MotionTuning,
        breakpoint: Breakpoint,
    ) -> Result<Self, CarouselError> {
        let layouts = config.layout;
        let carousel = if items.is_empty() {
            log::info!("{collection} shelf has no items");
            None
        } else {
            Some(InfiniteCarousel::new(
                items,
                layouts.for_breakpoint(breakpoint),
                tuning,
            )?)
        };

        Ok(Self {
            collection,
            title: config.title.clone(),
            scrollable_id: ScrollableId::unique(),
            layouts,
            carousel,
            cursor_x: None,
        })
    }

    pub fn carousel(&self) -> Option<&InfiniteCarousel<ShelfItem>> {
        self.carousel.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.carousel.is_none()
    }

    pub fn is_mounted(&self) -> bool {
        self.carousel.as_ref().is_some_and(InfiniteCarousel::is_mounted)
    }

    pub fn layout(&self, breakpoint: Breakpoint) -> CarouselLayout {
        self.layouts.for_breakpoint(breakpoint)
    }

    /// Row height in px for the active layout.
    pub fn height(&self, breakpoint: Breakpoint) -> f32 {
        match self.layout(breakpoint).height {
            CarouselHeight::Fixed(px) => px,
            CarouselHeight::Auto => AUTO_SHELF_HEIGHT,
        }
    }

    /// Start the carousel; returns the offset to apply before first paint.
    pub fn mount(&mut self) -> Option<f32> {
        self.carousel.as_mut().map(InfiniteCarousel::mount)
    }

    pub fn unmount(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.unmount();
        }
        self.cursor_x = None;
    }

    pub fn tick(&mut self) -> Option<f32> {
        self.carousel.as_mut()?.tick()
    }

    /// Translate a `mouse_area` event into engine input.
    pub fn pointer(
        &mut self,
        message: ShelfMessage,
        at: Instant,
    ) -> Option<f32> {
        let event = match message {
            ShelfMessage::PointerMoved(point) => {
                self.cursor_x = Some(point.x);
                PointerEvent::Move { x: point.x, at }
            }
            // mouse_area presses carry no position; the last move does
            ShelfMessage::PointerPressed => PointerEvent::Down {
                x: self.cursor_x?,
                at,
            },
            ShelfMessage::PointerReleased => PointerEvent::Up,
            ShelfMessage::PointerExited => {
                self.cursor_x = None;
                PointerEvent::Leave
            }
        };
        self.carousel.as_mut()?.handle_pointer(event)
    }

    /// Switch to the layout for `breakpoint`. Returns the re-centred offset
    /// when the layout changed.
    pub fn apply_breakpoint(
        &mut self,
        breakpoint: Breakpoint,
    ) -> Result<Option<f32>, CarouselError> {
        let layout = self.layouts.for_breakpoint(breakpoint);
        let Some(carousel) = self.carousel.as_mut() else {
            return Ok(None);
        };
        if *carousel.layout() == layout {
            return Ok(None);
        }
        carousel.set_layout(layout)?;
        Ok(Some(carousel.offset()))
    }

    pub fn scroll_to(&self, offset: f32) -> Task<Message> {
        scroll_to::<Message>(
            self.scrollable_id.clone(),
            AbsoluteOffset { x: offset, y: 0.0 },
        )
    }
}
