//! Browser bindings, compiled with the `client` feature.
//!
//! [`start`] runs once when the wasm module is instantiated: it installs
//! the console logger, picks the auth backend from the page's
//! `firebase-config` element, renders the page and wires its listeners.
mod console;
mod document;
mod firebase;
mod storage;
mod wiring;

pub use console::*;
pub use document::*;
pub use firebase::*;
pub use storage::*;
pub use wiring::dismiss_loader;

use crate::auth::Backend;
use crate::auth::RemoteConfig;
use crate::store::SessionStore;
use crate::ui::Controller;
use crate::ui::PageError;
use chrono::DateTime;
use chrono::Local;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// The controller as wired into a browser page.
pub type Portal = Controller<Backend<LocalStorage, Firebase>, Document>;

/// Id of the JSON script element holding the remote provider config.
const CONFIG_ELEMENT: &str = "firebase-config";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    Console::install(log::LevelFilter::Info);
    if let Err(e) = launch() {
        log::error!("init error: {}", e);
    }
    dismiss_loader();
}

fn launch() -> Result<(), PageError> {
    let window = web_sys::window().ok_or_else(|| PageError("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| PageError("no document".into()))?;
    let storage = LocalStorage::open().map_err(|e| PageError(e.to_string()))?;
    let backend = Backend::select(
        config(&document),
        SessionStore::new(storage),
        Firebase::connect,
    );
    let portal = Rc::new(Controller::new(backend, Document::new(document), &now()));
    if let Backend::Remote(remote) = portal.auth() {
        let weak = Rc::downgrade(&portal);
        remote.watch(move |user| {
            if let Some(portal) = weak.upgrade() {
                portal.observe(user);
            }
        });
    }
    portal.boot(&now());
    wiring::install(portal)
}

fn config(document: &web_sys::Document) -> Option<RemoteConfig> {
    let text = document.get_element_by_id(CONFIG_ELEMENT)?.text_content()?;
    RemoteConfig::parse(&text)
}

/// Current instant in the browser's time zone.
pub(crate) fn now() -> DateTime<Local> {
    Local::now()
}

/// Best-effort message out of a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
