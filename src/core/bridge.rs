// Step-change coupling between the panel controller and the renderer.

/// Event fired on the services showcase root.
pub const SERVICES_STEP_EVENT: &str = "sv-service-change";
/// Event fired on the ADU types section.
pub const TYPES_STEP_EVENT: &str = "type-change";
/// Attribute the controller mirrors the current step into, so a renderer that
/// boots after an event was fired can read the state synchronously.
pub const STEP_ATTRIBUTE: &str = "data-step";
/// Key of the step inside the event's `detail` object.
pub const STEP_DETAIL_KEY: &str = "step";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepChange {
    pub step: usize,
}

/// Validate a step read back from JS (`detail.step` or `data-step`).
#[inline]
pub fn parse_step_value(raw: f64) -> Option<usize> {
    if raw.is_finite() && raw >= 0.0 && raw.fract() == 0.0 && raw <= u32::MAX as f64 {
        Some(raw as usize)
    } else {
        None
    }
}

#[inline]
pub fn parse_step_attribute(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}

/// Typed, in-process subscriber list for step changes.
///
/// Fire-and-forget: publishing calls every subscriber once, in registration
/// order, and keeps nothing. A subscriber added later never sees earlier
/// changes.
#[derive(Default)]
pub struct StepBus {
    subscribers: Vec<Box<dyn FnMut(StepChange)>>,
}

impl StepBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(StepChange) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Deliver to every subscriber; returns how many were called.
    pub fn publish(&mut self, change: StepChange) -> usize {
        for s in self.subscribers.iter_mut() {
            s(change);
        }
        self.subscribers.len()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
