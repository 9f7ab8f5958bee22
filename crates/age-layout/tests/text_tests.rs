//! Integration tests for text measurement and line breaking.

use age_layout::layout::TextRun;
use age_layout::style::FontDescriptor;
use age_layout::{ApproximateFontMetrics, FontMetrics, TextMetrics, TextWrap};

fn run(text: &str) -> TextRun {
    TextRun::shape(text, &FontDescriptor::default(), &ApproximateFontMetrics)
}

fn line_texts(run: &TextRun, max_width: Option<f32>) -> Vec<&str> {
    run.break_lines(max_width, TextWrap::Wrap)
        .iter()
        .map(|line| run.line_text(line))
        .collect()
}

#[test]
fn test_approximate_metrics() {
    let metrics = ApproximateFontMetrics.measure("abc", &FontDescriptor::new("serif", 10.0));
    assert_eq!(metrics.advances.len(), 3);
    for (actual, expected) in [
        (metrics.advances[0], 6.0),
        (metrics.line_height, 12.0),
        (metrics.ascent, 8.0),
        (metrics.descent, 2.0),
    ] {
        assert!((actual - expected).abs() < 0.001, "expected {expected}, got {actual}");
    }
}

#[test]
fn test_greedy_breaking() {
    let text = run("the quick brown fox");
    // "the quick" is 9 chars (86.4px).
    assert_eq!(line_texts(&text, Some(90.0)), ["the quick", "brown fox"]);
    assert_eq!(line_texts(&text, Some(50.0)), ["the", "quick", "brown", "fox"]);
    assert_eq!(line_texts(&text, None), ["the quick brown fox"]);
}

/// A line exactly as wide as its limit does not wrap.
#[test]
fn test_exact_fit() {
    let text = run("ab cd");
    let (width, lines) = text.max_content();
    assert_eq!(lines, 1);
    assert_eq!(line_texts(&text, Some(width)), ["ab cd"]);
}

#[test]
fn test_whitespace_is_not_measured_at_line_edges() {
    let text = run("  ab   cd  ");
    let lines = text.break_lines(Some(30.0), TextWrap::Wrap);
    assert_eq!(lines.len(), 2);
    assert_eq!(text.line_text(&lines[0]), "ab");
    assert!((lines[0].width - 19.2).abs() < 0.01);
    assert_eq!(text.line_text(&lines[1]), "cd");
}

#[test]
fn test_no_wrap_only_breaks_at_newlines() {
    let text = run("one two\nthree");
    let lines = text.break_lines(Some(1.0), TextWrap::NoWrap);
    let texts: Vec<&str> = lines.iter().map(|line| text.line_text(line)).collect();
    assert_eq!(texts, ["one two", "three"]);
}

#[test]
fn test_intrinsic_widths() {
    let text = run("a bbbb cc\nddddddd");
    assert!((text.min_content_width() - 7.0 * 9.6).abs() < 0.01);
    let (width, lines) = text.max_content();
    assert!((width - 9.0 * 9.6).abs() < 0.01);
    assert_eq!(lines, 2);
}

#[test]
fn test_empty_text() {
    let text = run("");
    assert!(text.break_lines(Some(100.0), TextWrap::Wrap).is_empty());
    assert_eq!(text.max_content(), (0.0, 0));
    assert_eq!(text.min_content_width(), 0.0);
}

#[test]
fn test_multibyte_slicing() {
    let text = run("héllo wörld");
    assert_eq!(text.char_count(), 11);
    assert_eq!(line_texts(&text, Some(60.0)), ["héllo", "wörld"]);
    assert_eq!(text.slice(6, 11), "wörld");
}

/// Advances come from the metrics, so proportional fonts break correctly.
#[test]
fn test_custom_metrics() {
    struct WideM;
    impl FontMetrics for WideM {
        fn measure(&self, text: &str, font: &FontDescriptor) -> TextMetrics {
            TextMetrics {
                advances: text
                    .chars()
                    .map(|ch| if ch == 'm' { font.size } else { font.size / 2.0 })
                    .collect(),
                ascent: font.size,
                descent: 0.0,
                line_height: font.size,
            }
        }
    }

    let text = TextRun::shape("mm ii", &FontDescriptor::new("test", 10.0), &WideM);
    assert_eq!(text.width(0, 2), 20.0);
    assert_eq!(text.width(3, 5), 10.0);
    let lines = text.break_lines(Some(30.0), TextWrap::Wrap);
    assert_eq!(lines.len(), 2);
    assert_eq!(text.line_height, 10.0);
}
