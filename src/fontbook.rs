use crate::{font::Font, FontMeasurer, TextBitmapError};
use id_arena::{Arena, Id};
use std::collections::HashMap;

/// A font book stores every font that text can be laid out with, and resolves
/// family names to them.
///
/// Family names are matched case-insensitively. Registering a second font under
/// a family that is already known replaces the earlier association; the earlier
/// font stays in the book and is still reachable by its [Id].
#[derive(Default)]
pub struct FontBook {
    pub fonts: Arena<Font>,
    families: HashMap<String, Id<Font>>,
}

fn family_key(family: &str) -> String {
    family.trim().to_lowercase()
}

impl FontBook {
    /// Add a font to the book under the family name embedded in the font itself.
    /// Fonts without a family name can only be looked up by the returned [Id], or
    /// registered under a name with [FontBook::add_font_as].
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        let family = font.family();
        let id = self.fonts.alloc(font);
        if let Some(family) = family {
            tracing::debug!(%family, "registered font");
            self.families.insert(family_key(&family), id);
        }
        id
    }

    /// Add a font to the book under an explicit family name, e.g. an alias that the
    /// calling engine uses
    pub fn add_font_as<S: AsRef<str>>(&mut self, family: S, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        tracing::debug!(family = family.as_ref(), "registered font");
        self.families.insert(family_key(family.as_ref()), id);
        id
    }

    /// Register an additional family name for a font that is already in the book
    pub fn alias<S: AsRef<str>>(&mut self, family: S, id: Id<Font>) {
        self.families.insert(family_key(family.as_ref()), id);
    }

    /// The id of the font registered for `family`, if any
    pub fn id_of_family(&self, family: &str) -> Option<Id<Font>> {
        self.families.get(&family_key(family)).copied()
    }

    /// Look up the font registered for `family`
    pub fn resolve(&self, family: &str) -> Result<&Font, TextBitmapError> {
        match self.id_of_family(family) {
            Some(id) => Ok(&self.fonts[id]),
            None => {
                tracing::warn!(family, "font family could not be resolved");
                Err(TextBitmapError::FontResolution {
                    family: family.to_string(),
                })
            }
        }
    }

    /// Resolve `family` and bind it to a pixel size, ready for layout. Sizes must be
    /// positive.
    pub fn measurer(&self, family: &str, size: i32) -> Result<FontMeasurer<'_>, TextBitmapError> {
        let font = self.resolve(family)?;
        if size <= 0 {
            return Err(TextBitmapError::InvalidParameter {
                name: "font_size",
                value: size as i64,
            });
        }
        Ok(font.measurer(size as f32))
    }

    /// Every family name known to the book, in no particular order
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Measurer;
    use crate::Px;

    fn serif() -> Font {
        let font_data = include_bytes!("../assets/DejaVuSerif.ttf");
        Font::load(font_data.to_vec()).expect("can load font")
    }

    #[test]
    fn families_are_matched_case_insensitively() {
        let mut book = FontBook::default();
        let id = book.add_font(serif());
        assert_eq!(book.id_of_family("DejaVu Serif"), Some(id));
        assert_eq!(book.families().collect::<Vec<_>>(), vec!["dejavu serif"]);

        let measurer = book.measurer("dejavu SERIF", 16).expect("family resolves");
        assert_eq!(measurer.size, 16.0);
    }

    #[test]
    fn fonts_can_be_registered_under_other_names() {
        let mut book = FontBook::default();
        let id = book.add_font_as("Body", serif());
        assert!(book.resolve("body").is_ok());
        assert!(book.resolve("DejaVu Serif").is_err());

        book.alias("  Headline ", id);
        assert_eq!(book.id_of_family("headline"), Some(id));
    }

    #[test]
    fn font_size_must_be_positive() {
        let mut book = FontBook::default();
        book.add_font(serif());
        for size in [0, -12] {
            assert!(matches!(
                book.measurer("DejaVu Serif", size),
                Err(TextBitmapError::InvalidParameter {
                    name: "font_size",
                    ..
                })
            ));
        }
    }

    #[test]
    fn resolved_measurer_lays_out_text() {
        let mut book = FontBook::default();
        book.add_font(serif());
        let result = crate::layout::layout_text(&book, "Hello", "DejaVu Serif", 16, 0x33, 0, 0)
            .expect("can lay out");
        let measurer = book.measurer("DejaVu Serif", 16).unwrap();
        assert_eq!(result.canvas_width, measurer.measure_px("Hello"));
        assert!(result.canvas_width > Px::ZERO);
        assert_eq!(result.line_height, measurer.font_metrics().line_height());
    }

    #[test]
    fn unknown_family_is_a_resolution_error() {
        let book = FontBook::default();
        let err = book.resolve("Helvetica").unwrap_err();
        assert!(matches!(
            err,
            TextBitmapError::FontResolution { ref family } if family == "Helvetica"
        ));
        assert!(book.measurer("Helvetica", 12).is_err());
        assert_eq!(book.families().count(), 0);
    }
}
