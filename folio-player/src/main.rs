use folio_player::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("folio_player", LevelFilter::Debug)
        .filter_module("folio_core", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = match AppConfig::from_environment() {
        Ok(config) => config,
        Err(err) => {
            log::error!("failed to load showcase config: {err:#}");
            std::process::exit(2);
        }
    };

    app::application(config).run()
}
