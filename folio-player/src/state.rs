use std::sync::Arc;

use folio_config::ShowcaseConfig;
use folio_core::carousel::Breakpoint;
use folio_core::content::ContentLibrary;
use folio_model::Collection;
use iced::Task;

use crate::messages::Message;
use crate::shelf::{Shelf, ShelfItem};

#[derive(Debug)]
pub struct State {
    pub config: Arc<ShowcaseConfig>,
    pub shelves: Vec<Shelf>,
    pub viewport_width: f32,
    pub breakpoint: Breakpoint,
    /// Set when content could not be loaded; shown above the shelves.
    pub load_error: Option<String>,
}

impl State {
    /// Build one shelf per enabled collection. Shelves whose layout the
    /// engine rejects are skipped and reported.
    pub fn new(
        config: Arc<ShowcaseConfig>,
        library: &ContentLibrary,
        viewport_width: f32,
    ) -> Self {
        let breakpoint = Breakpoint::for_viewport_width(viewport_width);
        let mut shelves = Vec::with_capacity(Collection::ALL.len());
        let mut load_error = None;

        for collection in Collection::ALL {
            let shelf_config = config.shelves.shelf(collection);
            if !shelf_config.enabled {
                continue;
            }
            let items = ShelfItem::for_collection(
                library,
                collection,
                &config.content_root,
            );
            match Shelf::new(
                collection,
                shelf_config,
                items,
                config.motion,
                breakpoint,
            ) {
                Ok(shelf) => shelves.push(shelf),
                Err(err) => {
                    log::error!("cannot build {collection} shelf: {err}");
                    load_error = Some(format!("{collection}: {err}"));
                }
            }
        }

        Self {
            config,
            shelves,
            viewport_width,
            breakpoint,
            load_error,
        }
    }

    pub fn shelf_mut(&mut self, collection: Collection) -> Option<&mut Shelf> {
        self.shelves
            .iter_mut()
            .find(|shelf| shelf.collection == collection)
    }

    /// Whether any shelf needs frame ticks.
    pub fn any_mounted(&self) -> bool {
        self.shelves.iter().any(Shelf::is_mounted)
    }

    /// Mount every shelf, returning the scroll operations that place them on
    /// their starting offsets.
    pub fn mount_all(&mut self) -> Task<Message> {
        let tasks: Vec<_> = self
            .shelves
            .iter_mut()
            .filter_map(|shelf| {
                shelf.mount().map(|offset| shelf.scroll_to(offset))
            })
            .collect();
        Task::batch(tasks)
    }

    pub fn unmount_all(&mut self) {
        for shelf in &mut self.shelves {
            shelf.unmount();
        }
    }
}
