//! Text measurement and line breaking for text-run boxes.
//!
//! [CSS Text Module Level 3](https://www.w3.org/TR/css-text-3/)
//!
//! [§ 10.8 Line height calculations](https://www.w3.org/TR/CSS2/visudet.html#line-height)
//!
//! "CSS assumes that every font has font metrics that specify a
//! characteristic height above the baseline and a depth below it."

use crate::style::{FontDescriptor, TextWrap};

/// The result of measuring a string in a font.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextMetrics {
    /// Advance width of every `char` in the measured string, in order.
    pub advances: Vec<f32>,
    /// Distance from the top of a line to its baseline.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the glyph box.
    pub descent: f32,
    /// Distance between the tops of consecutive lines.
    pub line_height: f32,
}

/// Font metrics interface for text measurement during layout.
///
/// Implementors provide per-glyph advance widths and vertical metrics. The
/// layout engine never rasterizes text; it only measures.
pub trait FontMetrics {
    /// Measure `text` set in `font`.
    ///
    /// `advances` must contain exactly one entry per `char` of `text`.
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextMetrics;
}

/// Approximate font metrics using fixed ratios of the font size.
///
/// Implementation note: without font data the average advance of Latin
/// glyphs in a proportional face is close to 0.6× the font size, and line
/// height uses 1.2×, the upper end of the recommended range for
/// `line-height: normal`. Ascent and descent split the em box 0.8 / 0.2.
///
/// Used as a fallback when no font is available, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateFontMetrics;

impl ApproximateFontMetrics {
    /// Advance width per character, as a multiple of the font size.
    pub const CHAR_WIDTH_RATIO: f32 = 0.6;
    /// Line height, as a multiple of the font size.
    pub const LINE_HEIGHT_RATIO: f32 = 1.2;
    /// Ascent, as a multiple of the font size.
    pub const ASCENT_RATIO: f32 = 0.8;
    /// Descent, as a multiple of the font size.
    pub const DESCENT_RATIO: f32 = 0.2;
}

impl FontMetrics for ApproximateFontMetrics {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextMetrics {
        let advance = font.size * Self::CHAR_WIDTH_RATIO;
        TextMetrics {
            advances: text.chars().map(|_| advance).collect(),
            ascent: font.size * Self::ASCENT_RATIO,
            descent: font.size * Self::DESCENT_RATIO,
            line_height: font.size * Self::LINE_HEIGHT_RATIO,
        }
    }
}

/// A measured text run: the string plus cumulative advances so any
/// substring can be measured without calling back into the font.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    text: String,
    /// Byte offset of every char, plus `text.len()` at the end.
    offsets: Vec<usize>,
    /// `prefix[i]` is the advance of the first `i` chars.
    prefix: Vec<f32>,
    /// Distance from line top to baseline.
    pub ascent: f32,
    /// Distance from baseline to line bottom of the glyph box.
    pub descent: f32,
    /// Height of one line.
    pub line_height: f32,
}

/// One laid-out line of a [`TextRun`], as a char range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpan {
    /// First char of the line.
    pub start: usize,
    /// One past the last char of the line (trailing whitespace excluded).
    pub end: usize,
    /// Advance width of the line.
    pub width: f32,
}

/// A maximal run of non-whitespace chars, as a char range.
#[derive(Debug, Clone, Copy)]
struct Word {
    start: usize,
    end: usize,
}

impl TextRun {
    /// Measure `text` in `font`.
    pub fn shape(text: &str, font: &FontDescriptor, metrics: &dyn FontMetrics) -> Self {
        let measured = metrics.measure(text, font);
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());

        let mut prefix = Vec::with_capacity(offsets.len());
        prefix.push(0.0);
        let mut total = 0.0_f32;
        for (i, _) in text.chars().enumerate() {
            // A metrics source that returns too few advances measures the
            // remainder as zero-width rather than panicking.
            total += measured.advances.get(i).copied().unwrap_or(0.0);
            prefix.push(total);
        }

        Self {
            text: text.to_owned(),
            offsets,
            prefix,
            ascent: measured.ascent,
            descent: measured.descent,
            line_height: measured.line_height,
        }
    }

    /// Number of chars in the run.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Advance width of chars `start..end`.
    #[must_use]
    pub fn width(&self, start: usize, end: usize) -> f32 {
        self.prefix[end] - self.prefix[start]
    }

    /// The substring covering chars `start..end`.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &str {
        &self.text[self.offsets[start]..self.offsets[end]]
    }

    /// The substring covered by `line`.
    #[must_use]
    pub fn line_text(&self, line: &LineSpan) -> &str {
        self.slice(line.start, line.end)
    }

    /// [§ 5.1 Line Breaking Details](https://www.w3.org/TR/css-text-3/#line-break-details)
    ///
    /// Split at forced breaks (`'\n'`) into paragraphs, each a list of
    /// words. A paragraph with no words is an empty line.
    fn paragraphs(&self) -> Vec<(usize, Vec<Word>)> {
        let mut paragraphs = Vec::new();
        let mut words = Vec::new();
        let mut paragraph_start = 0;
        let mut word_start: Option<usize> = None;

        for (i, ch) in self.text.chars().enumerate() {
            if ch == '\n' || is_break_space(ch) {
                if let Some(start) = word_start.take() {
                    words.push(Word { start, end: i });
                }
                if ch == '\n' {
                    paragraphs.push((paragraph_start, std::mem::take(&mut words)));
                    paragraph_start = i + 1;
                }
            } else if word_start.is_none() {
                word_start = Some(i);
            }
        }
        if let Some(start) = word_start {
            words.push(Word {
                start,
                end: self.char_count(),
            });
        }
        paragraphs.push((paragraph_start, words));
        paragraphs
    }

    /// [§ 5.5.2 Breaking Rules](https://www.w3.org/TR/css-text-3/#word-breaking)
    ///
    /// "A soft wrap opportunity exists at the boundary of whitespace."
    ///
    /// Greedy line breaking. Each line takes as many whole words as fit in
    /// `max_width`; a word wider than `max_width` gets a line of its own and
    /// overflows. Leading and trailing whitespace of a line is not measured.
    /// With `max_width == None` or [`TextWrap::NoWrap`] only forced breaks
    /// split lines.
    ///
    /// An empty string produces no lines.
    #[must_use]
    pub fn break_lines(&self, max_width: Option<f32>, wrap: TextWrap) -> Vec<LineSpan> {
        if self.text.is_empty() {
            return Vec::new();
        }
        let limit = match wrap {
            TextWrap::Wrap => max_width,
            TextWrap::NoWrap => None,
        };

        let mut lines = Vec::new();
        for (paragraph_start, words) in self.paragraphs() {
            let Some(first) = words.first() else {
                lines.push(LineSpan {
                    start: paragraph_start,
                    end: paragraph_start,
                    width: 0.0,
                });
                continue;
            };

            let mut line_start = first.start;
            let mut line_end = first.end;
            for word in &words[1..] {
                let candidate = self.width(line_start, word.end);
                let fits = limit.is_none_or(|max| candidate <= max + FIT_EPSILON);
                if fits {
                    line_end = word.end;
                } else {
                    lines.push(self.span(line_start, line_end));
                    line_start = word.start;
                    line_end = word.end;
                }
            }
            lines.push(self.span(line_start, line_end));
        }
        lines
    }

    fn span(&self, start: usize, end: usize) -> LineSpan {
        LineSpan {
            start,
            end,
            width: self.width(start, end),
        }
    }

    /// [§ 5.1 Intrinsic Sizes](https://www.w3.org/TR/css-sizing-3/#intrinsic)
    ///
    /// "min-content inline size: the width of the longest unbreakable
    /// segment."
    #[must_use]
    pub fn min_content_width(&self) -> f32 {
        self.paragraphs()
            .iter()
            .flat_map(|(_, words)| words.iter())
            .map(|word| self.width(word.start, word.end))
            .fold(0.0, f32::max)
    }

    /// "max-content inline size: the width of the content laid out with no
    /// soft wraps."
    ///
    /// Returns the widest unwrapped line and the number of lines (one per
    /// forced-break paragraph).
    #[must_use]
    pub fn max_content(&self) -> (f32, usize) {
        let lines = self.break_lines(None, TextWrap::NoWrap);
        let width = lines.iter().map(|line| line.width).fold(0.0, f32::max);
        (width, lines.len())
    }
}

/// Slack when comparing a line against its limit, so a run laid out at
/// exactly its measured width never wraps from rounding.
const FIT_EPSILON: f32 = 0.01;

/// [§ 4.1.1 Phase I: Collapsing and Transformation](https://www.w3.org/TR/css-text-3/#white-space-phase-1)
///
/// Spaces and tabs are soft wrap opportunities; `'\n'` is handled as a
/// forced break by the caller.
const fn is_break_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r')
}
