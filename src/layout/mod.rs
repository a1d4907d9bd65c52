//! The text layout engine.
//!
//! Laying out a string happens in three steps, each available on its own:
//!
//! - [`split_lines`](crate::layout::split_lines) splits content on newlines, wrapping
//!   lines that are too wide and dropping lines that don't fit vertically
//! - [`wrap_line`](crate::layout::wrap_line) breaks one overly wide line into
//!   several, preferring to break at spaces
//! - [`resolve`](crate::layout::resolve) sizes the canvas and computes where each
//!   line is anchored horizontally
//!
//! All of them measure text through a [`Measurer`](crate::layout::Measurer), so
//! they can be driven by a real font ([`FontMeasurer`](crate::FontMeasurer)) or
//! anything else that knows how wide a string is.
//!
//! # Example
//!
//! ```
//! use text_bitmap::layout::{layout, LayoutRequest, MonospaceMeasurer};
//! use text_bitmap::{Alignment, Px};
//!
//! let measurer = MonospaceMeasurer::new(1.0, -8, 2);
//! let request = LayoutRequest::new("The quick brown fox")
//!     .aligned(Alignment::Center)
//!     .max_width(Px(9));
//!
//! let result = layout(&request, &measurer);
//! assert_eq!(result.texts().collect::<Vec<_>>(), vec!["The quick", "brown fox"]);
//! assert_eq!(result.canvas_width, Px(9));
//! assert_eq!(result.canvas_height, Px(20));
//! ```

mod measure;
mod request;
mod resolve;
mod split;
mod wrap;

pub use measure::*;
pub use request::*;
pub use resolve::*;
pub use split::*;
pub use wrap::*;

use crate::{FontBook, TextBitmapError};

/// Lays out a request in full: splits the content into lines, then resolves
/// their offsets and the canvas size. Layout never fails; parameters were
/// already validated when the request was built.
pub fn layout<M: Measurer + ?Sized>(request: &LayoutRequest, measurer: &M) -> LayoutResult {
    let lines = split_lines(
        &request.content,
        request.max_width,
        request.max_height,
        measurer,
    );
    resolve(lines, request.alignment, request.max_width, measurer)
}

/// Lays out `content` with a font from `book`, taking parameters the way the
/// calling engine passes them: the alignment as a numeric code (see
/// [Alignment::from_code](crate::Alignment::from_code)) and maximum dimensions as
/// integers where `0` means unconstrained.
///
/// The font is resolved before anything else, so an unknown family is reported
/// as [TextBitmapError::FontResolution] regardless of the other parameters.
/// Negative dimensions and non-positive font sizes are
/// [TextBitmapError::InvalidParameter]s.
pub fn layout_text(
    book: &FontBook,
    content: &str,
    family: &str,
    size: i32,
    alignment: i32,
    max_width: i32,
    max_height: i32,
) -> Result<LayoutResult, TextBitmapError> {
    let measurer = book.measurer(family, size)?;
    let request = LayoutRequest::from_wire(content, alignment, max_width, max_height)?;
    Ok(layout(&request, &measurer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Alignment, Px};

    fn mono() -> MonospaceMeasurer {
        MonospaceMeasurer::new(1.0, -8, 2)
    }

    #[test]
    fn single_line_is_measured() {
        let result = layout(&LayoutRequest::new("Hello"), &mono());
        assert_eq!(result.texts().collect::<Vec<_>>(), vec!["Hello"]);
        assert_eq!(result.canvas_width, Px(5));
        assert_eq!(result.canvas_height, Px(10));
    }

    #[test]
    fn empty_content_is_one_space_wide() {
        let result = layout(&LayoutRequest::new(""), &mono());
        assert_eq!(result.texts().collect::<Vec<_>>(), vec![" "]);
        assert_eq!(result.canvas_width, Px(1));
    }

    #[test]
    fn height_limits_the_number_of_lines() {
        let request = LayoutRequest::new("first\nsecond\nthird").max_height(Px(20));
        let result = layout(&request, &mono());
        assert_eq!(result.texts().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(result.canvas_height, Px(20));
        assert_eq!(result.canvas_width, Px(6));
    }

    #[test]
    fn right_alignment_anchors_at_the_canvas_edge() {
        let request = LayoutRequest::new("ab\nabcd").aligned(Alignment::Right);
        let result = layout(&request, &mono());
        assert!(result.lines.iter().all(|line| line.x_offset == Px(4)));
    }

    #[test]
    fn font_is_resolved_before_parameters_are_checked() {
        let book = FontBook::default();
        let err = layout_text(&book, "hi", "Missing", 12, 0x33, -1, 0).unwrap_err();
        assert!(matches!(err, TextBitmapError::FontResolution { .. }));
    }

    #[test]
    fn layout_is_deterministic() {
        let request = LayoutRequest::new("lorem ipsum dolor sit amet\nconsectetur")
            .max_width(Px(11))
            .max_height(Px(40));
        assert_eq!(layout(&request, &mono()), layout(&request, &mono()));
    }
}
