use std::rc::Rc;

use web_sys as web;

use crate::core::{pinned_distance, pinned_progress};
use crate::dom;

/// Scroll progress through one pinned section, read from layout on demand.
pub struct ScrollSource {
    root: web::HtmlElement,
    pin_viewports: f64,
}

impl ScrollSource {
    pub fn new(root: web::HtmlElement, pin_viewports: f64) -> Self {
        Self { root, pin_viewports }
    }

    pub fn progress(&self) -> f32 {
        let rect = self.root.get_bounding_client_rect();
        let (_, vh) = dom::viewport_size();
        let distance = pinned_distance(rect.height(), vh, self.pin_viewports);
        pinned_progress(rect.top(), distance)
    }
}

/// Report progress on every scroll and resize, plus once immediately.
pub fn watch(source: Rc<ScrollSource>, handler: impl FnMut(f32) + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let handler = Rc::new(std::cell::RefCell::new(handler));
    (&mut *handler.borrow_mut())(source.progress());
    for event in ["scroll", "resize"] {
        let source = source.clone();
        let handler = handler.clone();
        dom::add_listener(&window, event, move |_| {
            (&mut *handler.borrow_mut())(source.progress());
        });
    }
}
