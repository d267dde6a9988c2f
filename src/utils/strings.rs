use unicode_ellipsis::truncate_str;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Truncates a label if it is too long, and adds an ellipsis at the end if needed.
#[inline]
pub(crate) fn truncate_label(content: &str, width: usize) -> String {
    truncate_str(content, width).to_string()
}

/// Returns the width of a str `s`. This takes into account some things like
/// joiners when calculating width.
pub(crate) fn str_width(s: &str) -> usize {
    UnicodeSegmentation::graphemes(s, true)
        .map(|g| {
            if g.contains('\u{200d}') {
                2
            } else {
                UnicodeWidthStr::width(g)
            }
        })
        .sum()
}

/// Formats a bar value for display. Whole numbers drop their fractional part,
/// everything else is shown with up to two decimals.
pub(crate) fn format_value(value: f64) -> String {
    if !value.is_finite() {
        "-".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.2}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
