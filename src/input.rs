use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::pointer_offset;
use crate::dom;

/// Pointer offset from the viewport centre, updated on every `mousemove` on
/// the document. Scenes read it once per frame.
pub fn track_pointer(document: &web::Document) -> Rc<Cell<Vec2>> {
    let pointer = Rc::new(Cell::new(Vec2::ZERO));
    let out = pointer.clone();
    dom::add_listener(document, "mousemove", move |event| {
        if let Some(ev) = event.dyn_ref::<web::MouseEvent>() {
            let (w, h) = dom::viewport_size();
            out.set(pointer_offset(ev.client_x() as f32, ev.client_y() as f32, w as f32, h as f32));
        }
    });
    pointer
}
