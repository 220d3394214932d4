use std::sync::Arc;

use anyhow::Context;
use folio_config::{ConfigSource, ShowcaseConfig};
use folio_core::ContentLoader;
use folio_core::content::ContentLibrary;
use iced::Task;

use crate::messages::Message;
use crate::state::State;

/// Width assumed until the first resize event arrives.
pub const INITIAL_VIEWPORT_WIDTH: f32 = 1280.0;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub showcase: Arc<ShowcaseConfig>,
    pub source: ConfigSource,
}

impl AppConfig {
    pub fn new(showcase: ShowcaseConfig) -> Self {
        Self {
            showcase: Arc::new(showcase),
            source: ConfigSource::Default,
        }
    }

    pub fn from_environment() -> anyhow::Result<Self> {
        let (showcase, source) = ShowcaseConfig::load_from_env()
            .context("showcase configuration")?;
        log::info!(
            "using content root {} ({source:?})",
            showcase.content_root.display()
        );
        Ok(Self {
            showcase: Arc::new(showcase),
            source,
        })
    }
}

/// Load content and build shelves. Content failures leave every shelf empty
/// and surface the error in the view instead of aborting.
pub fn base_state(config: &AppConfig) -> State {
    let loader = ContentLoader::new(&config.showcase.content_root);
    match loader.load_library() {
        Ok(library) => State::new(
            Arc::clone(&config.showcase),
            &library,
            INITIAL_VIEWPORT_WIDTH,
        ),
        Err(err) => {
            log::error!("failed to load content: {err}");
            let mut state = State::new(
                Arc::clone(&config.showcase),
                &ContentLibrary::default(),
                INITIAL_VIEWPORT_WIDTH,
            );
            state.load_error = Some(err.to_string());
            state
        }
    }
}

/// Boot logic for the running application: mount every shelf and place each
/// scrollable on its starting offset before the first frame.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let mut state = base_state(config);
    let task = state.mount_all();
    (state, task)
}
