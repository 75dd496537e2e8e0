use smallvec::SmallVec;

/// How the progress bar fill tracks the section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillMode {
    /// Proportional to raw scroll progress.
    Progress,
    /// Proportional to the current step, `step / (N - 1)`.
    Step,
}

/// How inactive panels are moved out of the way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelMotion {
    /// Opacity only.
    Fade,
    /// Opacity plus a vertical offset: earlier panels above, later below.
    Slide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelLayout {
    pub total: usize,
    pub fill: FillMode,
    pub motion: PanelMotion,
}

/// Visual state of one panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelVisual {
    pub active: bool,
    pub opacity: f32,
    /// Whether the panel receives pointer input.
    pub interactive: bool,
    /// Vertical translate in percent of own height, for sliding layouts.
    pub offset_percent: Option<f32>,
}

/// Full presentation of the panel group for one step.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelFrame {
    pub step: usize,
    pub panels: SmallVec<[PanelVisual; 8]>,
    /// One flag per step indicator; set for every index `<= step`.
    pub dots_passed: SmallVec<[bool; 8]>,
    pub counter: String,
}

impl PanelFrame {
    pub fn interactive_count(&self) -> usize {
        self.panels.iter().filter(|p| p.interactive).count()
    }
}

const SLIDE_ACTIVE: f32 = -50.0;
const SLIDE_BEFORE: f32 = -80.0;
const SLIDE_AFTER: f32 = -20.0;

/// Pure projection of a step onto panel visuals; the DOM layer only copies
/// these values out. Exactly one panel is visible and interactive.
pub fn render(layout: &PanelLayout, step: usize) -> PanelFrame {
    let total = layout.total.max(1);
    let step = step.min(total - 1);
    let panels = (0..layout.total)
        .map(|i| {
            let active = i == step;
            let offset_percent = match layout.motion {
                PanelMotion::Fade => None,
                PanelMotion::Slide => Some(match i.cmp(&step) {
                    std::cmp::Ordering::Equal => SLIDE_ACTIVE,
                    std::cmp::Ordering::Less => SLIDE_BEFORE,
                    std::cmp::Ordering::Greater => SLIDE_AFTER,
                }),
            };
            PanelVisual {
                active,
                opacity: if active { 1.0 } else { 0.0 },
                interactive: active,
                offset_percent,
            }
        })
        .collect();
    let dots_passed = (0..layout.total).map(|i| i <= step).collect();
    PanelFrame {
        step,
        panels,
        dots_passed,
        counter: counter_label(step),
    }
}

/// Fill fraction `[0, 1]` of the progress bar.
pub fn bar_fill(layout: &PanelLayout, step: usize, progress: f32) -> f32 {
    match layout.fill {
        FillMode::Progress => {
            if progress.is_nan() {
                0.0
            } else {
                progress.clamp(0.0, 1.0)
            }
        }
        FillMode::Step => {
            if layout.total <= 1 {
                1.0
            } else {
                (step.min(layout.total - 1) as f32 / (layout.total - 1) as f32).clamp(0.0, 1.0)
            }
        }
    }
}

/// One-based, zero-padded counter text: step 0 -> "01".
#[inline]
pub fn counter_label(step: usize) -> String {
    format!("{:02}", step + 1)
}
