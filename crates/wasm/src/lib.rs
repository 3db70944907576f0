//! Rankr web client
//!
//! Mounts the catalog page once the DOM is ready and tears it down on
//! `pagehide`, unless the browser keeps the page in its back/forward cache.

pub mod dom;
pub mod http_client;
pub mod loader;
pub mod menu;
pub mod page;
pub mod render;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, PageTransitionEvent};

use crate::page::PageController;

thread_local! {
    static PAGE: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let ready_document = document.clone();
        let on_ready = Closure::once_into_js(move || mount(ready_document));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        mount(document);
    }

    let on_pagehide = Closure::<dyn FnMut(Event)>::new(|event: Event| handle_pagehide(&event));
    window.add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref())?;
    on_pagehide.forget();

    Ok(())
}

/// Mount the catalog page on `document`, replacing any mounted page
pub fn mount(document: Document) {
    match PageController::mount(document) {
        Ok(page) => PAGE.with(|slot| *slot.borrow_mut() = Some(page)),
        Err(e) => tracing::error!("Failed to mount catalog page: {:?}", e),
    }
}

pub fn is_mounted() -> bool {
    PAGE.with(|slot| slot.borrow().is_some())
}

/// `pagehide` handler. A persisted page is restored from the back/forward
/// cache with its DOM intact, so its listeners must survive.
pub fn handle_pagehide(event: &Event) {
    let persisted = event
        .dyn_ref::<PageTransitionEvent>()
        .is_some_and(|e| e.persisted());
    if persisted {
        tracing::debug!("page entering back/forward cache, keeping listeners");
        return;
    }
    unmount();
}

fn unmount() {
    if PAGE.with(|slot| slot.borrow_mut().take()).is_some() {
        tracing::debug!("catalog page unmounted");
    }
}
