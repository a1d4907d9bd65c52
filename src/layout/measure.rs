use crate::units::Px;

/// Vertical font metrics in whole pixels, relative to the baseline. Following
/// the usual typographic convention, `ascent` is negative (above the baseline)
/// and `descent` is positive (below it).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FontMetrics {
    pub ascent: i32,
    pub descent: i32,
}

impl FontMetrics {
    /// The distance between two consecutive baselines. Never less than one
    /// pixel, so that line counts derived from it stay well defined.
    pub fn line_height(&self) -> Px {
        let height = (self.descent as i64 - self.ascent as i64).clamp(1, u32::MAX as i64);
        Px(height as u32)
    }

    /// Distance from the top of a line to its baseline
    pub fn baseline(&self) -> i32 {
        -self.ascent
    }
}

/// The text measurement capability that the layout engine is built on. The
/// rasterization backend that will eventually paint the text provides it.
///
/// Implementations must be deterministic: measuring the same text twice with
/// the same font state yields the same width. Widths need not be strictly
/// additive (kerning is allowed), but should not shrink as text is appended.
pub trait Measurer {
    /// The horizontal advance of `text`, in (possibly fractional) pixels
    fn measure_width(&self, text: &str) -> f32;

    /// Ascent and descent of the font being measured
    fn font_metrics(&self) -> FontMetrics;

    /// Width of `text` rounded up to the next whole pixel
    fn measure_px(&self, text: &str) -> Px {
        Px::ceil(self.measure_width(text))
    }
}

impl<M: Measurer + ?Sized> Measurer for &M {
    fn measure_width(&self, text: &str) -> f32 {
        (**self).measure_width(text)
    }

    fn font_metrics(&self) -> FontMetrics {
        (**self).font_metrics()
    }
}

/// A measurer where every character has the same advance. Handy for terminal-like
/// bitmap fonts and for testing layouts without a real font.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance: f32,
    pub metrics: FontMetrics,
}

impl MonospaceMeasurer {
    pub fn new(advance: f32, ascent: i32, descent: i32) -> MonospaceMeasurer {
        MonospaceMeasurer {
            advance,
            metrics: FontMetrics { ascent, descent },
        }
    }
}

impl Measurer for MonospaceMeasurer {
    fn measure_width(&self, text: &str) -> f32 {
        self.advance * text.chars().count() as f32
    }

    fn font_metrics(&self) -> FontMetrics {
        self.metrics
    }
}
