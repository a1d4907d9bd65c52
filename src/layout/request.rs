use crate::alignment::Alignment;
use crate::units::Px;
use crate::TextBitmapError;

/// Everything that determines how a string is laid out, apart from the font.
///
/// Constraints are optional: without a maximum width lines are never wrapped,
/// and without a maximum height lines are never dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LayoutRequest {
    pub content: String,
    pub alignment: Alignment,
    pub max_width: Option<Px>,
    pub max_height: Option<Px>,
}

impl LayoutRequest {
    /// An unconstrained, left-aligned request for `content`
    pub fn new<S: Into<String>>(content: S) -> LayoutRequest {
        LayoutRequest {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Build a request from the integers used at the engine boundary, where a
    /// maximum of `0` means "unconstrained" and alignments are numeric codes
    /// (see [Alignment::from_code]). Negative maximums are rejected.
    pub fn from_wire<S: Into<String>>(
        content: S,
        alignment: i32,
        max_width: i32,
        max_height: i32,
    ) -> Result<LayoutRequest, TextBitmapError> {
        Ok(LayoutRequest {
            content: content.into(),
            alignment: Alignment::from_code(alignment),
            max_width: Px::constraint("max_width", max_width)?,
            max_height: Px::constraint("max_height", max_height)?,
        })
    }

    pub fn aligned(mut self, alignment: Alignment) -> LayoutRequest {
        self.alignment = alignment;
        self
    }

    /// Wrap lines wider than `width`. A width of zero removes the constraint.
    pub fn max_width(mut self, width: Px) -> LayoutRequest {
        self.max_width = Some(width).filter(|w| *w > Px::ZERO);
        self
    }

    /// Drop lines that would not fit into `height`. A height of zero removes the
    /// constraint.
    pub fn max_height(mut self, height: Px) -> LayoutRequest {
        self.max_height = Some(height).filter(|h| *h > Px::ZERO);
        self
    }
}
