use crate::alignment::Alignment;
use crate::layout::Measurer;
use crate::units::Px;

/// A single line of text, ready to be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaidOutLine {
    pub text: String,
    /// Horizontal anchor of the line within the canvas. Together with the
    /// alignment, this is where the line is drawn from: the left edge for
    /// [Alignment::Left], the middle for [Alignment::Center] and the right edge
    /// for [Alignment::Right]
    pub x_offset: Px,
}

/// The outcome of laying out a string: the lines to draw and the size of the
/// canvas they are to be drawn into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutResult {
    pub lines: Vec<LaidOutLine>,
    pub alignment: Alignment,
    pub canvas_width: Px,
    pub canvas_height: Px,
    pub line_height: Px,
}

impl LayoutResult {
    /// Iterate over the line texts in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }
}

/// The x anchor of every line for a given alignment and canvas width. Offsets do
/// not depend on the line itself: the painter anchors text according to the same
/// alignment, so applying the line width here as well would shift it twice.
pub fn x_offset(alignment: Alignment, canvas_width: Px) -> Px {
    match alignment {
        Alignment::Left => Px::ZERO,
        Alignment::Center => canvas_width.half(),
        Alignment::Right => canvas_width,
    }
}

/// Computes the canvas size and per-line offsets for a set of split lines.
///
/// The canvas is exactly `max_width` wide if one was given, otherwise as wide as
/// the widest line. It is always exactly tall enough for all of the lines.
pub fn resolve<M: Measurer + ?Sized>(
    lines: Vec<String>,
    alignment: Alignment,
    max_width: Option<Px>,
    measurer: &M,
) -> LayoutResult {
    let line_height = measurer.font_metrics().line_height();
    let canvas_width = max_width.unwrap_or_else(|| {
        lines
            .iter()
            .map(|line| measurer.measure_px(line))
            .max()
            .unwrap_or_default()
    });
    let canvas_height = line_height.times(lines.len());
    let x_offset = x_offset(alignment, canvas_width);

    LayoutResult {
        lines: lines
            .into_iter()
            .map(|text| LaidOutLine { text, x_offset })
            .collect(),
        alignment,
        canvas_width,
        canvas_height,
        line_height,
    }
}
