use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Attribute that selects a scroll-reveal behaviour.
pub const ANIMATE_ATTRIBUTE: &str = "data-animate";

/// Closed vocabulary of `data-animate` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealEffect {
    FadeUp,
    FadeUpStagger,
    WordStaggerElastic,
    SplitTextReveal,
    CharCascade,
    BlurFocus,
    LineWipe,
    ParallaxDepth,
    OpacitySweep,
    FlipClock,
    Scramble,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown data-animate effect '{0}'")]
pub struct RevealParseError(pub String);

impl RevealEffect {
    pub const ALL: [RevealEffect; 11] = [
        RevealEffect::FadeUp,
        RevealEffect::FadeUpStagger,
        RevealEffect::WordStaggerElastic,
        RevealEffect::SplitTextReveal,
        RevealEffect::CharCascade,
        RevealEffect::BlurFocus,
        RevealEffect::LineWipe,
        RevealEffect::ParallaxDepth,
        RevealEffect::OpacitySweep,
        RevealEffect::FlipClock,
        RevealEffect::Scramble,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RevealEffect::FadeUp => "fade-up",
            RevealEffect::FadeUpStagger => "fade-up-stagger",
            RevealEffect::WordStaggerElastic => "word-stagger-elastic",
            RevealEffect::SplitTextReveal => "split-text-reveal",
            RevealEffect::CharCascade => "char-cascade",
            RevealEffect::BlurFocus => "blur-focus",
            RevealEffect::LineWipe => "line-wipe",
            RevealEffect::ParallaxDepth => "parallax-depth",
            RevealEffect::OpacitySweep => "opacity-sweep",
            RevealEffect::FlipClock => "flip-clock",
            RevealEffect::Scramble => "scramble",
        }
    }

    /// `[data-animate="<name>"]`
    pub fn selector(self) -> String {
        format!("[{}=\"{}\"]", ANIMATE_ATTRIBUTE, self.as_str())
    }

    /// Style-driven effects; flip-clock and scramble are text drivers instead.
    pub fn spec(self) -> Option<RevealSpec> {
        let hidden = StyleState::default();
        let shown = StyleState::VISIBLE;
        let spec = match self {
            RevealEffect::FadeUp => RevealSpec {
                from: StyleState { translate_y_px: 50.0, blur_px: 4.0, ..hidden },
                to: shown,
                duration_sec: 1.2,
                stagger_sec: 0.0,
                easing: EASE_POWER3_OUT,
                start: 0.88,
                playback: Playback::Toggle,
                split: Split::None,
            },
            RevealEffect::FadeUpStagger => RevealSpec {
                from: StyleState { translate_y_px: 60.0, scale: 0.96, blur_px: 3.0, ..hidden },
                to: shown,
                duration_sec: 0.9,
                stagger_sec: 0.12,
                easing: EASE_POWER3_OUT,
                start: 0.85,
                playback: Playback::Once,
                split: Split::Children,
            },
            RevealEffect::WordStaggerElastic => RevealSpec {
                from: StyleState { translate_y_percent: 120.0, ..shown },
                to: shown,
                duration_sec: 1.4,
                stagger_sec: 0.06,
                easing: EASE_ELASTIC_OUT,
                start: 0.82,
                playback: Playback::Once,
                split: Split::Words,
            },
            RevealEffect::SplitTextReveal => RevealSpec {
                from: StyleState { translate_y_percent: 105.0, ..hidden },
                to: shown,
                duration_sec: 1.2,
                stagger_sec: 0.04,
                easing: EASE_POWER4_OUT,
                start: 0.85,
                playback: Playback::Toggle,
                split: Split::Words,
            },
            RevealEffect::CharCascade => RevealSpec {
                from: StyleState {
                    translate_y_percent: 120.0,
                    rotate_x_deg: -90.0,
                    blur_px: 8.0,
                    ..hidden
                },
                to: shown,
                duration_sec: 1.2,
                stagger_sec: 0.03,
                easing: EASE_ELASTIC_OUT,
                start: 0.82,
                playback: Playback::Once,
                split: Split::Chars,
            },
            RevealEffect::BlurFocus => RevealSpec {
                from: StyleState { opacity: 0.08, translate_y_px: 20.0, blur_px: 14.0, ..hidden },
                to: shown,
                duration_sec: 1.0,
                stagger_sec: 0.0,
                easing: EASE_POWER3_OUT,
                start: 0.85,
                playback: Playback::Mirror,
                split: Split::None,
            },
            RevealEffect::LineWipe => RevealSpec {
                from: StyleState { clip_right_percent: 100.0, ..shown },
                to: shown,
                duration_sec: 0.0,
                stagger_sec: 0.0,
                easing: "linear",
                start: 0.85,
                playback: Playback::Scrub(ScrubRange::Lines {
                    start: 0.85,
                    end: 0.65,
                    per_line: 0.12,
                }),
                split: Split::Lines,
            },
            RevealEffect::ParallaxDepth => RevealSpec {
                from: shown,
                to: StyleState { translate_y_percent: -15.0, ..shown },
                duration_sec: 0.0,
                stagger_sec: 0.0,
                easing: "linear",
                start: 1.0,
                playback: Playback::Scrub(ScrubRange::Traverse),
                split: Split::None,
            },
            RevealEffect::OpacitySweep => RevealSpec {
                from: StyleState { opacity: 0.05, ..shown },
                to: StyleState { opacity: 0.8, ..shown },
                duration_sec: 0.0,
                stagger_sec: 0.005,
                easing: "linear",
                start: 0.85,
                playback: Playback::Scrub(ScrubRange::Top { start: 0.85, end: 0.40 }),
                split: Split::Chars,
            },
            RevealEffect::FlipClock | RevealEffect::Scramble => return None,
        };
        Some(spec)
    }
}

impl fmt::Display for RevealEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RevealEffect {
    type Err = RevealParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RevealEffect::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == s.trim())
            .ok_or_else(|| RevealParseError(s.to_string()))
    }
}

pub const EASE_POWER3_OUT: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)";
pub const EASE_POWER4_OUT: &str = "cubic-bezier(0.165, 0.84, 0.44, 1)";
// CSS has no elastic curve; an overshooting back-out stands in for it.
pub const EASE_ELASTIC_OUT: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";

/// When a reveal plays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Playback {
    /// Play on first entry, never reverse.
    Once,
    /// Play on entry, reverse when scrolled back above the trigger.
    Toggle,
    /// Play on entry, reverse on leaving in either direction.
    Mirror,
    /// Follow scroll position continuously.
    Scrub(ScrubRange),
}

/// Scroll window over which a scrubbed effect runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrubRange {
    /// Element top moves from `start` to `end` (fractions of viewport height).
    Top { start: f32, end: f32 },
    /// Like `Top`, shifted up by `per_line` for each successive line.
    Lines { start: f32, end: f32, per_line: f32 },
    /// From the element entering at the bottom to leaving at the top.
    Traverse,
}

/// Which nodes receive the style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    None,
    Children,
    Words,
    Chars,
    Lines,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub from: StyleState,
    pub to: StyleState,
    pub duration_sec: f32,
    pub stagger_sec: f32,
    pub easing: &'static str,
    /// Trigger line as a fraction of viewport height from the top.
    pub start: f32,
    pub playback: Playback,
    pub split: Split,
}

impl RevealSpec {
    /// `rootMargin` that moves the viewport's bottom edge up to the trigger line.
    pub fn root_margin(&self) -> String {
        let bottom = ((1.0 - self.start) * 100.0).clamp(0.0, 100.0);
        format!("0px 0px -{:.0}% 0px", bottom)
    }

    pub fn delay_for(&self, index: usize) -> f32 {
        index as f32 * self.stagger_sec
    }
}

/// Animatable style properties used by reveals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleState {
    pub opacity: f32,
    pub translate_y_px: f32,
    pub translate_y_percent: f32,
    pub scale: f32,
    pub rotate_x_deg: f32,
    pub blur_px: f32,
    pub clip_right_percent: f32,
}

impl Default for StyleState {
    /// Fully transparent, otherwise at rest.
    fn default() -> Self {
        Self {
            opacity: 0.0,
            ..Self::VISIBLE
        }
    }
}

impl StyleState {
    pub const VISIBLE: StyleState = StyleState {
        opacity: 1.0,
        translate_y_px: 0.0,
        translate_y_percent: 0.0,
        scale: 1.0,
        rotate_x_deg: 0.0,
        blur_px: 0.0,
        clip_right_percent: 0.0,
    };

    pub fn lerp(&self, to: &StyleState, t: f32) -> StyleState {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        StyleState {
            opacity: mix(self.opacity, to.opacity),
            translate_y_px: mix(self.translate_y_px, to.translate_y_px),
            translate_y_percent: mix(self.translate_y_percent, to.translate_y_percent),
            scale: mix(self.scale, to.scale),
            rotate_x_deg: mix(self.rotate_x_deg, to.rotate_x_deg),
            blur_px: mix(self.blur_px, to.blur_px),
            clip_right_percent: mix(self.clip_right_percent, to.clip_right_percent),
        }
    }

    /// CSS properties that differ between two states; only these are written
    /// so untouched properties keep whatever the stylesheet sets.
    pub fn animated_properties(&self, other: &StyleState) -> AnimatedProps {
        AnimatedProps {
            opacity: self.opacity != other.opacity,
            transform: self.translate_y_px != other.translate_y_px
                || self.translate_y_percent != other.translate_y_percent
                || self.scale != other.scale
                || self.rotate_x_deg != other.rotate_x_deg,
            filter: self.blur_px != other.blur_px,
            clip: self.clip_right_percent != other.clip_right_percent,
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translateY(calc({:.3}% + {:.3}px)) scale({:.4}) rotateX({:.3}deg)",
            self.translate_y_percent, self.translate_y_px, self.scale, self.rotate_x_deg
        )
    }

    pub fn filter_css(&self) -> String {
        format!("blur({:.2}px)", self.blur_px)
    }

    pub fn clip_css(&self) -> String {
        format!("inset(0 {:.2}% 0 0)", self.clip_right_percent)
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.3}", self.opacity)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimatedProps {
    pub opacity: bool,
    pub transform: bool,
    pub filter: bool,
    pub clip: bool,
}

impl AnimatedProps {
    /// Value for the CSS `transition` property.
    pub fn transition_css(&self, duration_sec: f32, easing: &str, delay_sec: f32) -> String {
        let mut parts = Vec::new();
        for (on, name) in [
            (self.opacity, "opacity"),
            (self.transform, "transform"),
            (self.filter, "filter"),
            (self.clip, "clip-path"),
        ] {
            if on {
                parts.push(format!("{} {:.3}s {} {:.3}s", name, duration_sec, easing, delay_sec));
            }
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Progress of a scrubbed effect, `[0, 1]`.
///
/// `top_px`/`height_px` describe the element (or trigger) relative to the
/// viewport; `line` offsets the window for `ScrubRange::Lines`.
pub fn scrub_progress(range: &ScrubRange, top_px: f32, height_px: f32, viewport_px: f32, line: usize) -> f32 {
    if viewport_px <= 0.0 {
        return 0.0;
    }
    let (start_px, end_px) = match *range {
        ScrubRange::Top { start, end } => (start * viewport_px, end * viewport_px),
        ScrubRange::Lines { start, end, per_line } => {
            let shift = per_line * line as f32;
            ((start - shift) * viewport_px, (end - shift) * viewport_px)
        }
        ScrubRange::Traverse => (viewport_px, -height_px.max(0.0)),
    };
    let span = start_px - end_px;
    if span.abs() < f32::EPSILON {
        return if top_px <= end_px { 1.0 } else { 0.0 };
    }
    ((start_px - top_px) / span).clamp(0.0, 1.0)
}

/// Local progress of target `index` out of `count` when a scrubbed tween is
/// staggered by `stagger` (in units of one target's own duration).
pub fn staggered_progress(progress: f32, index: usize, count: usize, stagger: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let span = 1.0 + stagger.max(0.0) * (count.saturating_sub(1)) as f32;
    (progress.clamp(0.0, 1.0) * span - index as f32 * stagger.max(0.0)).clamp(0.0, 1.0)
}

/// Whitespace-separated words.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Lines of an element's HTML, split on `<br>` variants with tags stripped.
pub fn split_lines(html: &str) -> Vec<String> {
    let lower = html.to_ascii_lowercase();
    let mut lines = Vec::new();
    let mut last = 0;
    let mut search = 0;
    while let Some(pos) = lower[search..].find("<br") {
        let at = search + pos;
        let end = lower[at..].find('>').map(|e| at + e + 1).unwrap_or(lower.len());
        lines.push(strip_tags(&html[last..at]));
        last = end;
        search = end;
    }
    lines.push(strip_tags(&html[last..]));
    lines.retain(|l| !l.is_empty());
    lines
}

fn strip_tags(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}
