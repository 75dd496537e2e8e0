use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::VISIBILITY_THRESHOLD;

/// Watch `target` with an IntersectionObserver and call `handler` for every
/// entry it reports. The observer is handed back so handlers can unobserve.
pub fn observe(
    target: &web::Element,
    threshold: f64,
    root_margin: Option<&str>,
    mut handler: impl FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: web::IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                handler(&entry, &observer);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    observer.observe(target);
    callback.forget();
    Ok(observer)
}

/// Visibility flag for a render loop. Without IntersectionObserver the flag
/// stays on so the scene still animates.
pub fn gate(target: &web::Element) -> Rc<Cell<bool>> {
    let visible = Rc::new(Cell::new(false));
    let flag = visible.clone();
    if let Err(e) = observe(target, VISIBILITY_THRESHOLD, None, move |entry, _| {
        flag.set(entry.is_intersecting());
    }) {
        log::warn!("[visibility] {}; rendering unconditionally", e);
        visible.set(true);
    }
    visible
}
