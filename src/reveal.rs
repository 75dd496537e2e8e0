use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{
    scrub_progress, split_lines, split_words, staggered_progress, AnimatedProps, Playback,
    RevealEffect, RevealSpec, ScrubRange, Split, StyleState, ANIMATE_ATTRIBUTE,
};
use crate::{dom, visibility};

fn write_style(el: &web::HtmlElement, props: &AnimatedProps, state: &StyleState) {
    if props.opacity {
        dom::set_style(el, "opacity", &state.opacity_css());
    }
    if props.transform {
        dom::set_style(el, "transform", &state.transform_css());
    }
    if props.filter {
        dom::set_style(el, "filter", &state.filter_css());
    }
    if props.clip {
        dom::set_style(el, "clip-path", &state.clip_css());
    }
}

fn span(document: &web::Document, class: &str, text: &str) -> Option<web::HtmlElement> {
    let el = document.create_element("span").ok()?;
    el.set_class_name(class);
    el.set_text_content(Some(text));
    let el = el.dyn_into::<web::HtmlElement>().ok()?;
    dom::set_style(&el, "display", "inline-block");
    Some(el)
}

fn append_text(document: &web::Document, parent: &web::Element, text: &str) {
    _ = parent.append_child(&document.create_text_node(text));
}

/// Replace the element's text with one inline-block span per word.
fn split_into_words(document: &web::Document, el: &web::HtmlElement) -> Vec<web::HtmlElement> {
    let text = el.text_content().unwrap_or_default();
    el.set_text_content(None);
    let mut out = Vec::new();
    for (i, word) in split_words(&text).into_iter().enumerate() {
        if i > 0 {
            append_text(document, el, " ");
        }
        if let Some(s) = span(document, "word", word) {
            _ = el.append_child(&s);
            out.push(s);
        }
    }
    out
}

/// One span per visible character; whitespace stays a plain text node and
/// words never break across lines.
fn split_into_chars(document: &web::Document, el: &web::HtmlElement) -> Vec<web::HtmlElement> {
    let text = el.text_content().unwrap_or_default();
    el.set_text_content(None);
    let mut out = Vec::new();
    for (i, word) in split_words(&text).into_iter().enumerate() {
        if i > 0 {
            append_text(document, el, " ");
        }
        let Some(wrap) = span(document, "word", "") else {
            continue;
        };
        dom::set_style(&wrap, "white-space", "nowrap");
        dom::set_style(&wrap, "display", "inline");
        for c in word.chars() {
            if let Some(s) = span(document, "char", &c.to_string()) {
                _ = wrap.append_child(&s);
                out.push(s);
            }
        }
        _ = el.append_child(&wrap);
    }
    out
}

/// Existing `.line` children, or lines rebuilt from `<br>`-separated HTML.
fn split_into_lines(document: &web::Document, el: &web::HtmlElement) -> Vec<web::HtmlElement> {
    let existing = dom::query_all(el, ".line");
    if !existing.is_empty() {
        return existing;
    }
    let html = el.inner_html();
    let lines = if html.to_ascii_lowercase().contains("<br") {
        split_lines(&html)
    } else {
        vec![el.text_content().unwrap_or_default().trim().to_string()]
    };
    el.set_text_content(None);
    let mut out = Vec::new();
    for line in lines {
        if let Some(s) = span(document, "line", &line) {
            dom::set_style(&s, "display", "block");
            _ = el.append_child(&s);
            out.push(s);
        }
    }
    out
}

fn targets_for(document: &web::Document, el: &web::HtmlElement, split: Split) -> Vec<web::HtmlElement> {
    match split {
        Split::None => vec![el.clone()],
        Split::Children => dom::query_all(el, ":scope > *"),
        Split::Words => split_into_words(document, el),
        Split::Chars => split_into_chars(document, el),
        Split::Lines => split_into_lines(document, el),
    }
}

struct Scrubbed {
    trigger: web::HtmlElement,
    targets: Vec<web::HtmlElement>,
    spec: RevealSpec,
    range: ScrubRange,
    props: AnimatedProps,
}

impl Scrubbed {
    fn update(&self, viewport_h: f32) {
        let rect = self.trigger.get_bounding_client_rect();
        let (top, height) = (rect.top() as f32, rect.height() as f32);
        let count = self.targets.len();
        match self.range {
            ScrubRange::Lines { .. } => {
                for (i, t) in self.targets.iter().enumerate() {
                    let p = scrub_progress(&self.range, top, height, viewport_h, i);
                    write_style(t, &self.props, &self.spec.from.lerp(&self.spec.to, p));
                }
            }
            _ => {
                let p = scrub_progress(&self.range, top, height, viewport_h, 0);
                for (i, t) in self.targets.iter().enumerate() {
                    let local = staggered_progress(p, i, count, self.spec.stagger_sec);
                    write_style(t, &self.props, &self.spec.from.lerp(&self.spec.to, local));
                }
            }
        }
    }
}

fn play(targets: &[web::HtmlElement], spec: &RevealSpec, props: &AnimatedProps, forward: bool) {
    let (state, easing) = if forward {
        (&spec.to, spec.easing)
    } else {
        (&spec.from, "ease-in")
    };
    for (i, t) in targets.iter().enumerate() {
        let delay = if forward { spec.delay_for(i) } else { 0.0 };
        dom::set_style(t, "transition", &props.transition_css(spec.duration_sec, easing, delay));
        write_style(t, props, state);
    }
}

fn bind_triggered(el: &web::HtmlElement, targets: Vec<web::HtmlElement>, spec: RevealSpec, props: AnimatedProps) {
    let margin = spec.root_margin();
    let fallback = targets.clone();
    let played = Cell::new(false);
    let result = visibility::observe(el, 0.0, Some(&margin), move |entry, observer| {
        if entry.is_intersecting() {
            if !played.get() {
                play(&targets, &spec, &props, true);
                played.set(true);
            }
            if spec.playback == Playback::Once {
                observer.unobserve(&entry.target());
            }
            return;
        }
        if !played.get() {
            return;
        }
        // below the trigger line means the user scrolled back up past it
        let below = entry.bounding_client_rect().top() > 0.0;
        let reverse = match spec.playback {
            Playback::Toggle => below,
            Playback::Mirror => true,
            _ => false,
        };
        if reverse {
            play(&targets, &spec, &props, false);
            played.set(false);
        }
    });
    if let Err(e) = result {
        log::warn!("[reveal] {}; showing final state", e);
        play(&fallback, &spec, &props, true);
    }
}

/// Scan the page for every style-driven `data-animate` effect and bind it.
/// The attribute is removed from each bound element, so calling this again
/// only picks up elements added since.
pub fn init(document: &web::Document) {
    let scrubbed: Rc<RefCell<Vec<Scrubbed>>> = Rc::new(RefCell::new(Vec::new()));
    let mut bound = 0usize;
    for effect in RevealEffect::ALL {
        let Some(spec) = effect.spec() else {
            continue;
        };
        for el in dom::query_all_document(document, &effect.selector()) {
            _ = el.remove_attribute(ANIMATE_ATTRIBUTE);
            let targets = targets_for(document, &el, spec.split);
            if targets.is_empty() {
                continue;
            }
            let props = spec.from.animated_properties(&spec.to);
            for t in &targets {
                dom::set_style(t, "transition", "none");
                write_style(t, &props, &spec.from);
            }
            bound += 1;
            match spec.playback {
                Playback::Scrub(range) => {
                    let trigger = match range {
                        ScrubRange::Traverse => el
                            .closest("section")
                            .ok()
                            .flatten()
                            .or_else(|| el.parent_element())
                            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok())
                            .unwrap_or_else(|| el.clone()),
                        _ => el.clone(),
                    };
                    scrubbed.borrow_mut().push(Scrubbed {
                        trigger,
                        targets,
                        spec,
                        range,
                        props,
                    });
                }
                _ => bind_triggered(&el, targets, spec, props),
            }
        }
    }
    if !scrubbed.borrow().is_empty() {
        let update = {
            let scrubbed = scrubbed.clone();
            move || {
                let (_, vh) = dom::viewport_size();
                for s in scrubbed.borrow().iter() {
                    s.update(vh as f32);
                }
            }
        };
        update();
        if let Some(window) = web::window() {
            for event in ["scroll", "resize"] {
                let update = update.clone();
                dom::add_listener(&window, event, move |_| update());
            }
        }
    }
    log::info!("[reveal] {} elements bound", bound);
}
