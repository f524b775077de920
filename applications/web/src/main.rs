//! Podcastr web player entry point

mod app;
mod components;
mod config;
mod content;
mod context;
mod logging;
mod media;
mod pages;
mod route;

use app::{App, AppProps};
use config::AppConfig;
use podcastr_core::Catalog;
use std::rc::Rc;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    logging::init(&config.log_level);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "invalid embedded config, using defaults");
    }

    let catalog = content::load_catalog().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load episode catalog");
        Catalog::default()
    });

    tracing::info!(episodes = catalog.len(), "starting {}", config.title);

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
        catalog: Rc::new(catalog),
    })
    .render();
}
