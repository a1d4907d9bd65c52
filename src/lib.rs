mod alignment;
pub use alignment::*;

/// Rendering laid-out text onto a pixel canvas through a [GlyphPainter]
pub mod bitmap;
pub use bitmap::{GlyphPainter, TextBitmap};

mod font;
pub use font::*;

mod fontbook;
pub use fontbook::*;

/// Splitting, wrapping and positioning text within a canvas
pub mod layout;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export image functionality, mostly for implementing a [GlyphPainter]
pub use image;
