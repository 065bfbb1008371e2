//! # resume-prefs-client
//!
//! WASM shell that binds the `resume-prefs` core to the live page. Each
//! feature module looks up the elements it needs, builds the core state
//! object over DOM-backed surfaces and attaches listeners. A feature whose
//! elements are missing is skipped; the rest of the page is unaffected.

pub mod avatar;
pub mod dom;
pub mod menu;
pub mod scroll;
pub mod store;
pub mod style;
pub mod surface;
pub mod theme;
pub mod tooltip;

use std::cell::RefCell;
use std::rc::Rc;

use resume_prefs::config::PageConfig;
use resume_prefs::events::Listeners;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, Window};

use crate::store::LocalStore;

/// Fan-out of the single document-level click listener.
pub type Clicks = Rc<RefCell<Listeners<Event>>>;

/// Module entry point, run by the generated JS glue once the WASM loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    dom::on_ready(|| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        mount(&window, &document);
    });
}

/// Attach every feature to `document`.
pub fn mount(window: &Window, document: &Document) {
    let config = load_config(window);

    let store = LocalStore::new(window);
    theme::mount(window, document, &store);
    style::mount(document, &store, config.style_fonts);
    avatar::mount(document);
    scroll::mount(window, document);

    let clicks = Clicks::default();
    menu::mount(document, &clicks);
    tooltip::mount(document, &clicks);
    let fanout = Rc::clone(&clicks);
    dom::listen(document, "click", move |event| {
        fanout.borrow_mut().emit(&event);
    });

    log::info!("page preferences mounted ({} click listeners)", clicks.borrow().len());
}

/// Read page config and install the console logger at its level.
fn load_config(window: &Window) -> PageConfig {
    let (config, errors) = PageConfig::from_lookup(|name| dom::global(window, name));
    let level = config.log_level.as_str().parse::<log::Level>().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);

    for e in &errors {
        log::error!("page config field rejected, using its default: {e}");
    }
    config
}
