#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod core;
mod dom;
mod events;
mod flip;
mod frame;
mod input;
mod panels;
mod render;
mod reveal;
mod scroll;
mod showcase;
mod visibility;

use config::ShowcaseConfig;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let ready = Closure::once(move || boot_page(&doc));
        document
            .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ready.forget();
    } else {
        boot_page(&document);
    }
    Ok(())
}

/// Bind every feature present on the page; a missing section is skipped and a
/// failing one is logged without affecting the others.
fn boot_page(document: &web::Document) {
    reveal::init(document);
    flip::init_flip_clocks(document);
    flip::init_scrambles(document);

    let pointer = input::track_pointer(document);
    for preset in ShowcaseConfig::presets() {
        let name = preset.name;
        if let Err(e) = showcase::boot(document, preset, &pointer) {
            log::error!("[showcase] {}: {:?}", name, e);
        }
    }
}
