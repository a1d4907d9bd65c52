use crate::alignment::Alignment;
use crate::layout::{layout, FontMetrics, LayoutRequest, LayoutResult, Measurer};
use crate::units::Px;
use crate::{FontBook, TextBitmapError};
use image::RgbaImage;

/// The backend that actually paints glyphs onto a canvas.
///
/// `x` is the horizontal anchor of the line and is interpreted according to
/// `alignment`: the start of the text for [Alignment::Left], its middle for
/// [Alignment::Center] and its end for [Alignment::Right]. `baseline` is the y
/// coordinate of the line's baseline, measured down from the top of the canvas.
pub trait GlyphPainter {
    fn draw_text(
        &mut self,
        canvas: &mut RgbaImage,
        text: &str,
        x: Px,
        baseline: i32,
        alignment: Alignment,
    );
}

/// A rendered block of text, sized exactly to its layout
#[derive(Debug, Clone, PartialEq)]
pub struct TextBitmap {
    pub image: RgbaImage,
}

impl TextBitmap {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The pixel buffer in row-major order, 4 bytes per pixel in R, G, B, A order
    pub fn into_raw(self) -> Vec<u8> {
        self.image.into_raw()
    }

    /// The pixel buffer in row-major order, each pixel packed as a `0xAARRGGBB`
    /// word and written in native byte order
    pub fn to_native_argb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.image.as_raw().len());
        for pixel in self.image.pixels() {
            let [r, g, b, a] = pixel.0;
            let argb = u32::from_be_bytes([a, r, g, b]);
            bytes.extend_from_slice(&argb.to_ne_bytes());
        }
        bytes
    }
}

/// Allocates a transparent canvas the size of the layout and has `painter` draw
/// each line onto it, top to bottom. The first baseline sits `-ascent` pixels
/// from the top and every following one a further line height down.
pub fn render<P: GlyphPainter + ?Sized>(
    layout: &LayoutResult,
    metrics: FontMetrics,
    painter: &mut P,
) -> TextBitmap {
    let mut image = RgbaImage::new(layout.canvas_width.0, layout.canvas_height.0);

    let line_height = i32::try_from(layout.line_height.0).unwrap_or(i32::MAX);
    let mut baseline = metrics.baseline();
    for line in layout.lines.iter() {
        painter.draw_text(
            &mut image,
            &line.text,
            line.x_offset,
            baseline,
            layout.alignment,
        );
        baseline = baseline.saturating_add(line_height);
    }

    TextBitmap { image }
}

/// Lays out and renders `content` in one go, using the integer parameters of the
/// engine boundary (see [layout_text](crate::layout::layout_text)).
#[allow(clippy::too_many_arguments)]
pub fn create_text_bitmap<P: GlyphPainter + ?Sized>(
    book: &FontBook,
    content: &str,
    family: &str,
    size: i32,
    alignment: i32,
    max_width: i32,
    max_height: i32,
    painter: &mut P,
) -> Result<TextBitmap, TextBitmapError> {
    let measurer = book.measurer(family, size)?;
    let request = LayoutRequest::from_wire(content, alignment, max_width, max_height)?;
    let result = layout(&request, &measurer);
    Ok(render(&result, measurer.font_metrics(), painter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MonospaceMeasurer;
    use image::Rgba;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, Px, i32, Alignment)>,
    }

    impl GlyphPainter for Recorder {
        fn draw_text(
            &mut self,
            canvas: &mut RgbaImage,
            text: &str,
            x: Px,
            baseline: i32,
            alignment: Alignment,
        ) {
            canvas.put_pixel(0, 0, Rgba([0x11, 0x22, 0x33, 0x44]));
            self.calls.push((text.to_string(), x, baseline, alignment));
        }
    }

    #[test]
    fn draws_each_line_one_line_height_apart() {
        let measurer = MonospaceMeasurer::new(1.0, -8, 2);
        let request = LayoutRequest::new("one\ntwo\nthree").aligned(Alignment::Center);
        let result = layout(&request, &measurer);

        let mut painter = Recorder::default();
        let bitmap = render(&result, measurer.font_metrics(), &mut painter);

        assert_eq!(bitmap.width(), 5);
        assert_eq!(bitmap.height(), 30);
        assert_eq!(
            painter.calls,
            vec![
                ("one".to_string(), Px(2), 8, Alignment::Center),
                ("two".to_string(), Px(2), 18, Alignment::Center),
                ("three".to_string(), Px(2), 28, Alignment::Center),
            ]
        );
    }

    #[test]
    fn exports_four_bytes_per_pixel() {
        let measurer = MonospaceMeasurer::new(1.0, -8, 2);
        let result = layout(&LayoutRequest::new("ab"), &measurer);
        let bitmap = render(&result, measurer.font_metrics(), &mut Recorder::default());

        let argb = bitmap.to_native_argb();
        assert_eq!(argb.len(), 2 * 10 * 4);
        assert_eq!(argb[..4], 0x44112233u32.to_ne_bytes());

        let rgba = bitmap.into_raw();
        assert_eq!(rgba.len(), 2 * 10 * 4);
        assert_eq!(rgba[..4], [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn unknown_family_fails_before_anything_is_drawn() {
        let book = FontBook::default();
        let mut painter = Recorder::default();
        let err = create_text_bitmap(&book, "hi", "Nope", 12, 0x31, 0, 0, &mut painter)
            .unwrap_err();
        assert!(matches!(err, TextBitmapError::FontResolution { .. }));
        assert!(painter.calls.is_empty());
    }
}
