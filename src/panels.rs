use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys as web;

use crate::config::ShowcaseConfig;
use crate::constants::PANEL_FADE_SEC;
use crate::core::{
    bar_fill, counter_crossfade, counter_label, render, FillMode, PanelLayout, StepBus,
    StepChange, StepMapper,
};
use crate::dom;
use crate::events;
use crate::scroll::{self, ScrollSource};

struct PanelDom {
    root: web::HtmlElement,
    panels: Vec<web::HtmlElement>,
    dots: Vec<web::HtmlElement>,
    fill: Option<web::HtmlElement>,
    counter: Option<web::HtmlElement>,
}

/// Drives the panels, dots, progress bar and counter of one section from
/// scroll progress, and publishes step changes.
pub struct PanelController {
    dom: PanelDom,
    layout: PanelLayout,
    mapper: StepMapper,
    bus: StepBus,
    panel_class: &'static str,
    dot_class: &'static str,
    // bumped on every counter change; stale timers check it and bail
    counter_generation: Rc<Cell<u32>>,
}

impl PanelController {
    /// Bind to the section's DOM. `None` when the section has no panels.
    pub fn bind(root: &web::HtmlElement, config: &ShowcaseConfig) -> Option<Self> {
        let panels = dom::query_all(root, config.panels);
        if panels.is_empty() {
            log::warn!("[panels] {}: no '{}' under root", config.name, config.panels);
            return None;
        }
        let dots = dom::query_all(root, config.dots);
        let fill = dom::query(root, config.fill);
        let counter = config.counter.and_then(|sel| dom::query(root, sel));
        let layout = config.panel_layout(panels.len());

        let transition = format!(
            "opacity {s}s ease-out, transform {s}s ease-out",
            s = PANEL_FADE_SEC
        );
        for panel in &panels {
            dom::set_style(panel, "transition", &transition);
        }

        let mut controller = Self {
            dom: PanelDom {
                root: root.clone(),
                panels,
                dots,
                fill,
                counter,
            },
            layout,
            mapper: StepMapper::new(layout.total),
            bus: StepBus::new(),
            panel_class: config.panel_active_class,
            dot_class: config.dot_active_class,
            counter_generation: Rc::new(Cell::new(0)),
        };
        controller.apply(0);
        if let Some(counter) = &controller.dom.counter {
            dom::set_text(counter, &counter_label(0));
        }
        controller.write_fill(0, 0.0);
        log::info!("[panels] {}: {} panels bound", config.name, layout.total);
        Some(controller)
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(StepChange) + 'static) {
        self.bus.subscribe(subscriber);
    }

    pub fn current(&self) -> usize {
        self.mapper.current()
    }

    /// Feed one scroll reading.
    pub fn on_progress(&mut self, progress: f32) {
        let changed = self.mapper.update(progress);
        self.write_fill(self.mapper.current(), progress);
        if let Some(step) = changed {
            self.apply(step);
            self.animate_counter(step);
            self.bus.publish(StepChange { step });
        }
    }

    fn apply(&self, step: usize) {
        let frame = render(&self.layout, step);
        for (el, visual) in self.dom.panels.iter().zip(frame.panels.iter()) {
            dom::toggle_class(el, self.panel_class, visual.active);
            dom::set_style(el, "opacity", &format!("{}", visual.opacity));
            dom::set_style(
                el,
                "pointer-events",
                if visual.interactive { "auto" } else { "none" },
            );
            if let Some(offset) = visual.offset_percent {
                dom::set_style(el, "transform", &format!("translateY({}%)", offset));
            }
        }
        for (dot, passed) in self.dom.dots.iter().zip(frame.dots_passed.iter()) {
            dom::toggle_class(dot, self.dot_class, *passed);
        }
        events::mirror_step(&self.dom.root, frame.step);
    }

    fn write_fill(&self, step: usize, progress: f32) {
        let Some(fill) = &self.dom.fill else {
            return;
        };
        let amount = bar_fill(&self.layout, step, progress);
        match self.layout.fill {
            FillMode::Progress => dom::set_style(
                fill,
                "transform",
                &format!("translateY(-50%) scaleX({:.4})", amount),
            ),
            FillMode::Step => dom::set_style(fill, "width", &format!("{:.2}%", amount * 100.0)),
        }
    }

    fn animate_counter(&self, step: usize) {
        let Some(counter) = &self.dom.counter else {
            return;
        };
        let generation = self.counter_generation.get().wrapping_add(1);
        self.counter_generation.set(generation);
        let timeline = counter_crossfade(&counter_label(step));
        for (at, key) in timeline.cues().iter().cloned() {
            let counter = counter.clone();
            let current = self.counter_generation.clone();
            let play = move || {
                if current.get() != generation {
                    return;
                }
                if let Some(text) = &key.text {
                    dom::set_text(&counter, text);
                }
                dom::set_style(
                    &counter,
                    "transition",
                    &format!(
                        "opacity {d}s {e}, transform {d}s {e}",
                        d = key.duration_sec,
                        e = key.easing
                    ),
                );
                dom::set_style(&counter, "opacity", &format!("{}", key.opacity));
                dom::set_style(
                    &counter,
                    "transform",
                    &format!("translateY({}px)", key.offset_y_px),
                );
            };
            if at <= 0.0 {
                play();
            } else {
                _ = dom::set_timeout((at * 1000.0).round() as i32, play);
            }
        }
    }
}

/// Bind a section's panels to its scroll progress and the DOM event bridge.
pub fn boot(root: &web::HtmlElement, config: &ShowcaseConfig) -> Option<Rc<RefCell<PanelController>>> {
    let mut controller = PanelController::bind(root, config)?;
    let target: web::Element = root.clone().into();
    let event_name = config.step_event.clone();
    controller.subscribe(move |change| {
        if let Err(e) = events::dispatch_step(&target, &event_name, change.step) {
            log::error!("[panels] dispatch {}: {:?}", event_name, e);
        }
    });
    let controller = Rc::new(RefCell::new(controller));
    let source = Rc::new(ScrollSource::new(root.clone(), config.pin_viewports));
    let driven = controller.clone();
    scroll::watch(source, move |p| driven.borrow_mut().on_progress(p));
    Some(controller)
}
