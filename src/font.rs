use crate::layout::{FontMetrics, Measurer};
use crate::TextBitmapError;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed font object. Fonts can be TTF or OTF fonts.
///
/// Typically, fonts are referred to throughout user applications by their _family name_
/// within a [FontBook](crate::FontBook), and not by any typed references
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, TextBitmapError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse a font file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Font, TextBitmapError> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes)
    }

    fn find_name(&self, name_id: u16) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.find_name(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.find_name(owned_ttf_parser::name_id::FAMILY)
    }

    fn scaling(&self, size: f32) -> f32 {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the
    /// given font size in pixels. Note: this is positive, the font's own convention
    pub fn ascent(&self, size: f32) -> f32 {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for
    /// the given font size in pixels. Note: this is usually negative
    pub fn descent(&self, size: f32) -> f32 {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face
            .as_face_ref()
            .glyph_index('\u{FFFD}')
            .or_else(|| self.face.as_face_ref().glyph_index('?'))
            .map(|i| i.0)
    }

    /// Horizontal advance of a single character. Characters the font has no glyph
    /// for are measured as the replacement glyph, or not at all if there isn't one
    pub fn advance(&self, ch: char, size: f32) -> f32 {
        self.glyph_id(ch)
            .or_else(|| self.replacement_glyph_id())
            .and_then(|gid| self.face.as_face_ref().glyph_hor_advance(GlyphId(gid)))
            .map(|advance| self.scaling(size) * advance as f32)
            .unwrap_or_default()
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|ch| self.advance(ch, size)).sum()
    }

    /// Bind this font to a pixel size so it can be used to lay out text
    pub fn measurer(&self, size: f32) -> FontMeasurer<'_> {
        FontMeasurer { font: self, size }
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.family())
            .field("units_per_em", &self.face.as_face_ref().units_per_em())
            .finish()
    }
}

/// A [Font] at a particular pixel size, measuring text by summing glyph advances
#[derive(Debug, Copy, Clone)]
pub struct FontMeasurer<'f> {
    pub font: &'f Font,
    pub size: f32,
}

impl Measurer for FontMeasurer<'_> {
    fn measure_width(&self, text: &str) -> f32 {
        self.font.width_of_text(text, self.size)
    }

    fn font_metrics(&self) -> FontMetrics {
        FontMetrics {
            ascent: -(self.font.ascent(self.size).ceil() as i32),
            descent: (-self.font.descent(self.size)).ceil() as i32,
        }
    }
}
