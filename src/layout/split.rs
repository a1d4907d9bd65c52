use std::borrow::Cow;

use crate::layout::{wrap_line, Measurer};
use crate::units::Px;

/// Normalizes line endings and substitutes a single space for empty content, so
/// that an empty string still produces a canvas with a size
fn normalize(content: &str) -> Cow<'_, str> {
    if content.is_empty() {
        Cow::Borrowed(" ")
    } else if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Splits on newlines, dropping empty lines at the end of the content. Content
/// made only of newlines leaves a single space behind, the same as empty content.
fn logical_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        lines.push(" ");
    }
    lines
}

/// The most lines that fit into `max_height`, or [None] if unconstrained
pub fn max_lines<M: Measurer + ?Sized>(max_height: Option<Px>, measurer: &M) -> Option<usize> {
    let line_height = measurer.font_metrics().line_height();
    max_height.map(|height| (height.0 / line_height.0) as usize)
}

/// Splits `content` into the lines that will be drawn onto the canvas.
///
/// Content is first split on newlines, keeping empty lines everywhere but at
/// the end. When `max_width` is
/// given, each line wider than it is word-wrapped with [wrap_line]. When
/// `max_height` is given, only as many lines as fit in it are kept and no
/// further input is measured once that many have been produced.
///
/// With neither constraint, the newline-separated lines are returned as they are,
/// no matter how large the resulting canvas would be.
pub fn split_lines<M: Measurer + ?Sized>(
    content: &str,
    max_width: Option<Px>,
    max_height: Option<Px>,
    measurer: &M,
) -> Vec<String> {
    let content = normalize(content);
    let logical = logical_lines(&content);
    let max_lines = max_lines(max_height, measurer);

    let Some(max_width) = max_width else {
        let mut lines: Vec<String> = logical.into_iter().map(String::from).collect();
        if let Some(max_lines) = max_lines.filter(|&m| lines.len() > m) {
            tracing::debug!(total = lines.len(), max_lines, "truncating lines to fit height");
            lines.truncate(max_lines);
        }
        return lines;
    };

    let mut lines: Vec<String> = Vec::new();
    for line in logical {
        if max_lines.is_some_and(|m| lines.len() >= m) {
            tracing::debug!(max_lines, "height exhausted, skipping remaining content");
            break;
        }

        if measurer.measure_px(line) > max_width {
            let wrapped = wrap_line(line, max_width, measurer);
            tracing::debug!(%max_width, sub_lines = wrapped.len(), "wrapped line");
            lines.extend(wrapped);
        } else {
            lines.push(line.to_string());
        }
    }

    // the last wrapped line may have produced more lines than fit
    if let Some(max_lines) = max_lines {
        lines.truncate(max_lines);
    }

    lines
}
