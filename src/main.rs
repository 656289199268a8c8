//! Portfolio Frontend Entry Point

mod models;
mod error;
mod catalog;
mod config;
mod view_state;
mod query;
mod scroll;
mod logger;
mod context;
mod components;
mod app;

use app::App;
use catalog::Catalog;
use components::LoadFailure;
use config::SiteConfig;
use error::LoadError;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logger::init() {
        web_sys::console::error_1(&format!("[MAIN] console logger not installed: {}", err).into());
    }
    logger::set_level(LevelFilter::Info);

    match load() {
        Ok((catalog, site)) => {
            logger::set_level(site.log_level());
            log::info!("mounting portfolio with {} items", catalog.items().len());
            mount_to_body(move || view! { <App catalog=catalog.clone() site=site.clone() /> });
        }
        Err(err) => {
            log::error!("{}", err);
            let message = err.to_string();
            mount_to_body(move || view! { <LoadFailure message=message.clone() /> });
        }
    }
}

fn load() -> Result<(Catalog, SiteConfig), LoadError> {
    Ok((Catalog::embedded()?, SiteConfig::embedded()?))
}
