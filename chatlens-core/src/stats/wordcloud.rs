use crate::conf::types::WordCloudConfig;
use crate::stats::request::StatsRequest;
use crate::stats::rules::TextRules;
use crate::stats::stopwords::StopWords;
use crate::stats::words::word_frequencies;
use serde::Serialize;

/// Advance of one glyph relative to the font size (monospace estimate).
const GLYPH_ADVANCE: f64 = 0.6;
const LINE_HEIGHT: f64 = 1.2;

const SPIRAL_STEP_RADIANS: f64 = 0.1;
/// Radius gained per radian along the spiral, in pixels.
const SPIRAL_SPACING: f64 = 2.0;
const FONT_SHRINK_STEP: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    pub text: String,
    pub count: u64,
    pub font_size: u32,
    /// Top-left corner of the bounding box.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlacedWord {
    fn overlaps(&self, other: &PlacedWord) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub words: Vec<PlacedWord>,
}

impl WordCloud {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Word cloud of the same vocabulary [`most_common_words`] ranks.
///
/// [`most_common_words`]: crate::stats::most_common_words
pub fn word_cloud(
    req: &StatsRequest<'_>,
    rules: &TextRules,
    stop_words: &StopWords,
    settings: &WordCloudConfig,
) -> WordCloud {
    let ranked = word_frequencies(req, rules, stop_words).into_top(settings.max_words);
    layout_word_cloud(&ranked, settings)
}

/// Places ranked `(word, count)` pairs on the canvas.
///
/// Words are laid out in the given order. Each one walks an Archimedean
/// spiral out from the centre and takes the first spot where its box is on
/// the canvas and clear of every earlier box. If the spiral leaves the
/// canvas the font shrinks and the walk restarts; below the minimum font
/// size the word is skipped. No randomness is involved.
///
/// A word never starts larger than the size the previous word ended up
/// at, so font sizes are non-increasing in rank order and a crowded canvas
/// is not retried at sizes that already failed.
pub fn layout_word_cloud(ranked: &[(String, u64)], settings: &WordCloudConfig) -> WordCloud {
    let max_count = ranked.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let mut placed: Vec<PlacedWord> = Vec::new();
    let mut ceiling = settings.max_font_size;

    for (text, count) in ranked.iter().take(settings.max_words) {
        let mut font_size = scaled_font_size(*count, max_count, settings).min(ceiling);

        loop {
            if let Some(word) = try_place(text, *count, font_size, &placed, settings) {
                placed.push(word);
                break;
            }
            if font_size <= settings.min_font_size {
                tracing::trace!(word = %text, "word cloud has no room left for word");
                break;
            }
            font_size = font_size
                .saturating_sub(FONT_SHRINK_STEP)
                .max(settings.min_font_size);
        }

        ceiling = font_size;
    }

    WordCloud {
        width: settings.width,
        height: settings.height,
        background: settings.background.clone(),
        words: placed,
    }
}

fn scaled_font_size(count: u64, max_count: u64, settings: &WordCloudConfig) -> u32 {
    if max_count == 0 {
        return settings.min_font_size;
    }
    let span = settings.max_font_size.saturating_sub(settings.min_font_size) as f64;
    let scaled = span * count as f64 / max_count as f64;
    settings.min_font_size + scaled.round() as u32
}

fn try_place(
    text: &str,
    count: u64,
    font_size: u32,
    placed: &[PlacedWord],
    settings: &WordCloudConfig,
) -> Option<PlacedWord> {
    let width = text.chars().count() as f64 * font_size as f64 * GLYPH_ADVANCE;
    let height = font_size as f64 * LINE_HEIGHT;

    let canvas_w = settings.width as f64;
    let canvas_h = settings.height as f64;
    if width > canvas_w || height > canvas_h {
        return None;
    }

    let (cx, cy) = (canvas_w / 2.0, canvas_h / 2.0);
    let max_radius = cx.hypot(cy);

    let mut candidate = PlacedWord {
        text: text.to_string(),
        count,
        font_size,
        x: 0.0,
        y: 0.0,
        width,
        height,
    };

    let mut theta: f64 = 0.0;
    loop {
        let radius = SPIRAL_SPACING * theta;
        if radius > max_radius {
            return None;
        }

        candidate.x = (cx + radius * theta.cos() - width / 2.0).round();
        candidate.y = (cy + radius * theta.sin() - height / 2.0).round();

        let on_canvas = candidate.x >= 0.0
            && candidate.y >= 0.0
            && candidate.x + width <= canvas_w
            && candidate.y + height <= canvas_h;

        if on_canvas && !placed.iter().any(|p| p.overlaps(&candidate)) {
            return Some(candidate);
        }

        theta += SPIRAL_STEP_RADIANS;
    }
}
