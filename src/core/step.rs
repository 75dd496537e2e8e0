/// Map a normalized scroll fraction onto one of `total` discrete steps.
///
/// The result is always in `[0, total - 1]`: progress is clamped into
/// `[0, 1]` first and `floor(p * total)` is clamped again so that `p == 1.0`
/// lands on the last step instead of one past it. `total == 0` maps to 0.
#[inline]
pub fn step_for_progress(progress: f32, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let raw = (p * total as f32).floor() as usize;
    raw.min(total - 1)
}

/// Progress through a pinned section given the section's top edge relative to
/// the viewport (negative once scrolled past) and the scroll distance the
/// section stays pinned for.
#[inline]
pub fn pinned_progress(top_px: f64, pinned_distance_px: f64) -> f32 {
    if pinned_distance_px <= 0.0 || !top_px.is_finite() {
        return if top_px < 0.0 { 1.0 } else { 0.0 };
    }
    ((-top_px) / pinned_distance_px).clamp(0.0, 1.0) as f32
}

/// Scroll distance a section stays pinned for.
///
/// A section laid out taller than the viewport (sticky inner content) pins for
/// its overflow; otherwise it pins for `pin_viewports` viewport heights.
#[inline]
pub fn pinned_distance(section_height_px: f64, viewport_height_px: f64, pin_viewports: f64) -> f64 {
    if section_height_px > viewport_height_px {
        section_height_px - viewport_height_px
    } else {
        (pin_viewports * viewport_height_px).max(0.0)
    }
}

/// Turns a stream of scroll progress readings into step-change notifications.
///
/// Only the last emitted step is remembered, so feeding the same progress (or
/// any progress inside the current step's range) any number of times emits
/// nothing. The initial step is 0 and is considered already shown.
#[derive(Clone, Debug)]
pub struct StepMapper {
    total: usize,
    current: usize,
}

impl StepMapper {
    pub fn new(total: usize) -> Self {
        Self {
            total: total.max(1),
            current: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Feed a progress reading; returns the new step only when it differs from
    /// the previously emitted one.
    pub fn update(&mut self, progress: f32) -> Option<usize> {
        let step = step_for_progress(progress, self.total);
        if step == self.current {
            return None;
        }
        log::debug!("[step] {} -> {} (p={:.3})", self.current, step, progress);
        self.current = step;
        Some(step)
    }
}
