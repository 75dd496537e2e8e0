use rand::Rng;

use super::constants::SCRAMBLE_FRAMES;

pub const SCRAMBLE_GLYPHS: &[char] = &[
    '\u{2588}', '\u{2593}', '\u{2591}', '\u{2592}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Frame-stepped "decode" of a text: a growing prefix shows the real
/// characters, the rest cycles through random glyphs. Spaces never scramble.
#[derive(Clone, Debug)]
pub struct ScrambleDecode {
    original: Vec<char>,
    total_frames: u32,
    frame: u32,
}

impl ScrambleDecode {
    pub fn new(text: &str) -> Self {
        Self::with_frames(text, SCRAMBLE_FRAMES)
    }

    pub fn with_frames(text: &str, total_frames: u32) -> Self {
        Self {
            original: text.chars().collect(),
            total_frames: total_frames.max(1),
            frame: 0,
        }
    }

    pub fn original(&self) -> String {
        self.original.iter().collect()
    }

    /// Number of leading characters shown verbatim at `frame`.
    pub fn revealed_at(&self, frame: u32) -> usize {
        let len = self.original.len();
        let frame = frame.min(self.total_frames);
        // i is revealed while i < frame / total * len
        let exact = frame as f64 / self.total_frames as f64 * len as f64;
        (exact.ceil() as usize).min(len)
    }

    /// Advance one frame and return the text to display, or `None` once the
    /// decode has finished. The last frame is always the original text.
    pub fn next_frame<R: Rng>(&mut self, rng: &mut R) -> Option<String> {
        if self.frame >= self.total_frames {
            return None;
        }
        self.frame += 1;
        if self.frame >= self.total_frames {
            return Some(self.original());
        }
        let revealed = self.revealed_at(self.frame);
        let text = self
            .original
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if c == ' ' || i < revealed {
                    c
                } else {
                    SCRAMBLE_GLYPHS[rng.gen_range(0..SCRAMBLE_GLYPHS.len())]
                }
            })
            .collect();
        Some(text)
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= self.total_frames
    }
}
