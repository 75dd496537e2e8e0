use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::core::{parse_step_attribute, parse_step_value, STEP_ATTRIBUTE, STEP_DETAIL_KEY};
use crate::dom;

/// Fire `event_name` on `target` with `detail = { step }`.
pub fn dispatch_step(target: &web::Element, event_name: &str, step: usize) -> anyhow::Result<()> {
    let detail = js_sys::Object::new();
    js_sys::Reflect::set(
        &detail,
        &JsValue::from_str(STEP_DETAIL_KEY),
        &JsValue::from_f64(step as f64),
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let init = web::CustomEventInit::new();
    init.set_detail(&detail);
    let event = web::CustomEvent::new_with_event_init_dict(event_name, &init)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    target
        .dispatch_event(&event)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Fire a detail-less signal such as the scene ready event.
pub fn dispatch_signal(target: &web::Element, event_name: &str) -> anyhow::Result<()> {
    let event = web::CustomEvent::new(event_name).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    target
        .dispatch_event(&event)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn step_from_event(event: &web::Event) -> Option<usize> {
    let custom = event.dyn_ref::<web::CustomEvent>()?;
    let raw = js_sys::Reflect::get(&custom.detail(), &JsValue::from_str(STEP_DETAIL_KEY)).ok()?;
    parse_step_value(raw.as_f64()?)
}

/// Call `handler` with the step of every `event_name` fired on `target`.
/// Events without a valid non-negative integer step are dropped.
pub fn subscribe_step(target: &web::Element, event_name: &str, mut handler: impl FnMut(usize) + 'static) {
    let name = event_name.to_string();
    dom::add_listener(target, event_name, move |event| match step_from_event(&event) {
        Some(step) => handler(step),
        None => log::warn!("[events] '{}' without a usable detail.step", name),
    });
}

/// Mirror the current step on the root so late subscribers can read it.
#[inline]
pub fn mirror_step(target: &web::Element, step: usize) {
    _ = target.set_attribute(STEP_ATTRIBUTE, &step.to_string());
}

#[inline]
pub fn read_step(target: &web::Element) -> Option<usize> {
    target
        .get_attribute(STEP_ATTRIBUTE)
        .as_deref()
        .and_then(parse_step_attribute)
}
