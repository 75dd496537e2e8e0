use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{
    flip_clock_plan, parse_digit, ClockCue, RevealEffect, ScrambleDecode, ANIMATE_ATTRIBUTE,
    FLIP_DURATION_SEC, SCRAMBLE_FRAME_MS,
};
use crate::{dom, frame, visibility};

// stats section trigger: top of the section at 70% of the viewport
const FLIP_TRIGGER_MARGIN: &str = "0px 0px -30% 0px";
const FADE_IN_SEC: f32 = 0.4;

struct FlipCard {
    inner: web::HtmlElement,
    top: Option<web::HtmlElement>,
    bottom: Option<web::HtmlElement>,
}

struct FlipItem {
    cards: Vec<FlipCard>,
    digits: Vec<u8>,
    separator: Option<web::HtmlElement>,
    suffix: Option<web::HtmlElement>,
    label: Option<web::HtmlElement>,
}

fn bind_item(el: &web::HtmlElement) -> FlipItem {
    let mut cards = Vec::new();
    let mut digits = Vec::new();
    for card in dom::query_all(el, ".flip-card") {
        let digit = card
            .get_attribute("data-digit")
            .as_deref()
            .and_then(parse_digit)
            .unwrap_or(0);
        digits.push(digit);
        cards.push(FlipCard {
            inner: dom::query(&card, ".flip-card-inner").unwrap_or_else(|| card.clone()),
            top: dom::query(&card, ".flip-card-top span"),
            bottom: dom::query(&card, ".flip-card-bottom span"),
        });
    }
    let label = dom::query(el, &RevealEffect::Scramble.selector());
    if let Some(l) = &label {
        _ = l.remove_attribute(ANIMATE_ATTRIBUTE);
    }
    for hidden in [".stat-separator", ".stat-suffix"] {
        if let Some(h) = dom::query(el, hidden) {
            dom::set_style(&h, "opacity", "0");
        }
    }
    FlipItem {
        cards,
        digits,
        separator: dom::query(el, ".stat-separator"),
        suffix: dom::query(el, ".stat-suffix"),
        label,
    }
}

fn fade_in(el: &web::HtmlElement) {
    dom::set_style(el, "transition", &format!("opacity {}s ease-out", FADE_IN_SEC));
    dom::set_style(el, "opacity", "1");
}

/// The folding upper half showing the outgoing digit.
fn spawn_leaf(document: &web::Document, card: &FlipCard, from: u8) -> Option<web::HtmlElement> {
    let leaf = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    leaf.set_class_name("flip-card-flip-top");
    leaf.set_inner_html(&format!("<span>{}</span>", from));
    _ = leaf.style().set_css_text(
        "position:absolute;top:0;left:0;width:100%;height:50%;overflow:hidden;\
         transform-origin:bottom center;z-index:4;transform:perspective(400px) rotateX(0deg);",
    );
    _ = card.inner.append_child(&leaf);
    let folding = leaf.clone();
    // next task, so the start transform is committed before the transition
    _ = dom::set_timeout(16, move || {
        dom::set_style(
            &folding,
            "transition",
            &format!("transform {}s cubic-bezier(0.55, 0.085, 0.68, 0.53)", FLIP_DURATION_SEC),
        );
        dom::set_style(&folding, "transform", "perspective(400px) rotateX(-90deg)");
    });
    Some(leaf)
}

fn run_clock(document: web::Document, items: Vec<FlipItem>) {
    let plan_digits: Vec<Vec<u8>> = items.iter().map(|i| i.digits.clone()).collect();
    let mut timeline = flip_clock_plan(&plan_digits);
    let mut leaves: HashMap<(usize, usize), web::HtmlElement> = HashMap::new();
    let started = Instant::now();
    log::info!(
        "[flip] {} items, {:.2}s schedule",
        items.len(),
        timeline.duration()
    );
    frame::run_frames(move || {
        let elapsed = started.elapsed().as_secs_f32();
        for (_, cue) in timeline.drain_due(elapsed) {
            match *cue {
                ClockCue::FlipStart { item, card, from, to } => {
                    let Some(c) = items.get(item).and_then(|i| i.cards.get(card)) else {
                        continue;
                    };
                    if let Some(top) = &c.top {
                        dom::set_text(top, &to.to_string());
                    }
                    if let Some(leaf) = spawn_leaf(&document, c, from) {
                        leaves.insert((item, card), leaf);
                    }
                }
                ClockCue::FlipEnd { item, card, to } => {
                    if let Some(leaf) = leaves.remove(&(item, card)) {
                        leaf.remove();
                    }
                    if let Some(bottom) = items
                        .get(item)
                        .and_then(|i| i.cards.get(card))
                        .and_then(|c| c.bottom.as_ref())
                    {
                        dom::set_text(bottom, &to.to_string());
                    }
                }
                ClockCue::ShowSeparator { item } => {
                    if let Some(el) = items.get(item).and_then(|i| i.separator.as_ref()) {
                        fade_in(el);
                    }
                }
                ClockCue::ShowSuffix { item } => {
                    if let Some(el) = items.get(item).and_then(|i| i.suffix.as_ref()) {
                        fade_in(el);
                    }
                }
                ClockCue::ScrambleLabel { item } => {
                    if let Some(el) = items.get(item).and_then(|i| i.label.as_ref()) {
                        scramble(el.clone());
                    }
                }
            }
        }
        !timeline.is_finished()
    });
}

/// Bind every flip-clock on the page to a single play-once trigger.
pub fn init_flip_clocks(document: &web::Document) {
    let elements = dom::query_all_document(document, &RevealEffect::FlipClock.selector());
    if elements.is_empty() {
        return;
    }
    let items: Vec<FlipItem> = elements
        .iter()
        .map(|el| {
            _ = el.remove_attribute(ANIMATE_ATTRIBUTE);
            bind_item(el)
        })
        .collect();
    let trigger = dom::query_document(document, ".stats").unwrap_or_else(|| elements[0].clone());

    let doc = document.clone();
    let pending = std::cell::RefCell::new(Some(items));
    let result = visibility::observe(&trigger, 0.0, Some(FLIP_TRIGGER_MARGIN), move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        observer.unobserve(&entry.target());
        if let Some(items) = pending.borrow_mut().take() {
            run_clock(doc.clone(), items);
        }
    });
    if let Err(e) = result {
        log::warn!("[flip] {}; flip clocks left static", e);
    }
}

/// Decode `el`'s text in place, one frame every `SCRAMBLE_FRAME_MS`.
pub fn scramble(el: web::HtmlElement) {
    let Some(window) = web::window() else {
        return;
    };
    let text = el.text_content().unwrap_or_default();
    let mut decode = ScrambleDecode::new(&text);
    let mut rng = StdRng::seed_from_u64((js_sys::Math::random() * u32::MAX as f64) as u64);
    let interval_id = Rc::new(Cell::new(None::<i32>));
    let id_in = interval_id.clone();
    let tick = Closure::wrap(Box::new(move || match decode.next_frame(&mut rng) {
        Some(frame_text) => dom::set_text(&el, &frame_text),
        None => {
            if let (Some(w), Some(id)) = (web::window(), id_in.take()) {
                w.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        SCRAMBLE_FRAME_MS,
    ) {
        Ok(id) => interval_id.set(Some(id)),
        Err(e) => log::warn!("[flip] setInterval: {:?}", e),
    }
    tick.forget();
}

/// Standalone scramble labels play once when they scroll into view.
pub fn init_scrambles(document: &web::Document) {
    for el in dom::query_all_document(document, &RevealEffect::Scramble.selector()) {
        _ = el.remove_attribute(ANIMATE_ATTRIBUTE);
        let target = el.clone();
        let played = Cell::new(false);
        let result = visibility::observe(&el, 0.0, Some("0px 0px -15% 0px"), move |entry, observer| {
            if entry.is_intersecting() && !played.replace(true) {
                observer.unobserve(&entry.target());
                scramble(target.clone());
            }
        });
        if let Err(e) = result {
            log::warn!("[flip] {}", e);
        }
    }
}
