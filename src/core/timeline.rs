use smallvec::SmallVec;

use super::constants::{
    COUNTER_FADE_IN_SEC, COUNTER_FADE_OUT_SEC, COUNTER_LIFT_PX, COUNTER_REST_OPACITY,
    FLIP_CARD_STAGGER_SEC, FLIP_DURATION_SEC, FLIP_ITEM_STAGGER_SEC, FLIP_LABEL_AFTER_SUFFIX_SEC,
    FLIP_SEPARATOR_DELAY_SEC, FLIP_SUFFIX_TAIL_SEC,
};

/// A list of cues ordered by start time, drained by a single driver loop.
///
/// The whole animation is plain data: it can be inspected before it plays and
/// replayed by building it again.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<T> {
    cues: Vec<(f32, T)>,
    next: usize,
}

impl<T> Timeline<T> {
    pub fn new(mut cues: Vec<(f32, T)>) -> Self {
        // stable: cues with equal times keep their insertion order
        cues.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { cues, next: 0 }
    }

    pub fn cues(&self) -> &[(f32, T)] {
        &self.cues
    }

    /// Cues whose start time is `<= elapsed_sec` and that have not been
    /// returned before.
    pub fn drain_due(&mut self, elapsed_sec: f32) -> &[(f32, T)] {
        let start = self.next;
        while self.next < self.cues.len() && self.cues[self.next].0 <= elapsed_sec {
            self.next += 1;
        }
        &self.cues[start..self.next]
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.cues.len()
    }

    pub fn duration(&self) -> f32 {
        self.cues.last().map(|c| c.0).unwrap_or(0.0)
    }
}

// ---------------- Flip clock ----------------

/// Intermediate digits a flip card shows on its way to `target`.
///
/// Zero flips through 8 and 4; small targets count up one at a time; larger
/// targets stride by a third of the value and always end on the target.
pub fn flip_sequence(target: u8) -> SmallVec<[u8; 8]> {
    let mut steps = SmallVec::new();
    if target == 0 {
        steps.extend_from_slice(&[8, 4, 0]);
    } else if target <= 3 {
        steps.extend(1..=target);
    } else {
        let stride = (target / 3).max(1);
        let mut v = stride;
        while v < target {
            steps.push(v);
            v += stride;
        }
        if steps.last() != Some(&target) {
            steps.push(target);
        }
    }
    steps
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockCue {
    /// Card starts turning: the top half shows `to`, a leaf with `from` folds down.
    FlipStart { item: usize, card: usize, from: u8, to: u8 },
    /// Leaf has folded: the bottom half shows `to`.
    FlipEnd { item: usize, card: usize, to: u8 },
    ShowSeparator { item: usize },
    ShowSuffix { item: usize },
    ScrambleLabel { item: usize },
}

/// Schedule every flip of a group of stat items, `items[i][j]` being the target
/// digit of card `j` in item `i`.
pub fn flip_clock_plan(items: &[Vec<u8>]) -> Timeline<ClockCue> {
    let mut cues = Vec::new();
    for (item, digits) in items.iter().enumerate() {
        let item_delay = item as f32 * FLIP_ITEM_STAGGER_SEC;
        for (card, &target) in digits.iter().enumerate() {
            let mut at = item_delay + card as f32 * FLIP_CARD_STAGGER_SEC;
            let mut from = 0u8;
            for to in flip_sequence(target) {
                cues.push((at, ClockCue::FlipStart { item, card, from, to }));
                at += FLIP_DURATION_SEC;
                cues.push((at, ClockCue::FlipEnd { item, card, to }));
                from = to;
            }
        }
        let suffix_at = item_delay + digits.len() as f32 * FLIP_CARD_STAGGER_SEC + FLIP_SUFFIX_TAIL_SEC;
        cues.push((item_delay + FLIP_SEPARATOR_DELAY_SEC, ClockCue::ShowSeparator { item }));
        cues.push((suffix_at, ClockCue::ShowSuffix { item }));
        cues.push((suffix_at + FLIP_LABEL_AFTER_SUFFIX_SEC, ClockCue::ScrambleLabel { item }));
    }
    Timeline::new(cues)
}

/// Parse the digits of a `data-digit` attribute; anything that is not a
/// single decimal digit is rejected.
#[inline]
pub fn parse_digit(raw: &str) -> Option<u8> {
    let raw = raw.trim();
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

// ---------------- Counter crossfade ----------------

/// One keyframe of the counter text transition.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterKeyframe {
    pub opacity: f32,
    pub offset_y_px: f32,
    pub duration_sec: f32,
    /// CSS timing function for this leg.
    pub easing: &'static str,
    /// Text to swap in before this leg starts.
    pub text: Option<String>,
}

/// Fade out and lift, then swap the text, then fade back in to rest.
pub fn counter_crossfade(label: &str) -> Timeline<CounterKeyframe> {
    Timeline::new(vec![
        (
            0.0,
            CounterKeyframe {
                opacity: 0.0,
                offset_y_px: COUNTER_LIFT_PX,
                duration_sec: COUNTER_FADE_OUT_SEC,
                easing: "cubic-bezier(0.55, 0.085, 0.68, 0.53)",
                text: None,
            },
        ),
        (
            COUNTER_FADE_OUT_SEC,
            CounterKeyframe {
                opacity: COUNTER_REST_OPACITY,
                offset_y_px: 0.0,
                duration_sec: COUNTER_FADE_IN_SEC,
                easing: "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
                text: Some(label.to_string()),
            },
        ),
    ])
}
