//! An interactive, animated model of the solar system.
//!
//! [`sim`] holds the rendering-independent state and rules. Everything else
//! turns that state into a window, a scene and a control overlay.

pub mod cfg;
mod gfx;
mod gui;
mod keybinds;
pub mod logging;
mod program;
pub mod sim;
#[cfg(target_family = "wasm")]
mod web;

use tracing::debug;

pub use cfg::{Config, ConfigError};
use program::Program;

/// Opens the window and runs the simulation until it is closed.
pub fn run(config: Config) {
    Program::new(&config).run();
}

/// Sets up logging, loads the configuration and runs the simulation.
pub fn start() {
    run(configure(Config::try_load));
}

/// Installs logging before loading so that load warnings are reported, then
/// applies the configured log filter.
fn configure(load: impl FnOnce() -> Result<Option<Config>, ConfigError>) -> Config {
    let filter_handle = logging::init(logging::FALLBACK_FILTER);

    let config = Config::or_default(load());
    if let Some(handle) = filter_handle {
        handle.set_filter(&config.log_filter);
    }
    debug!(?config, "configuration loaded");
    config
}

#[cfg(target_family = "wasm")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
fn wasm_start() {
    web::panic_handler::init_panic_handler();
    start();
}
