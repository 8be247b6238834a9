//! Error types for sprite sheet conversion.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The image could not be opened or decoded.
    #[error("Failed to load image: {0}")]
    Image(#[from] image::ImageError),

    /// The image does not cover every frame of the sheet.
    #[error("Image is {width}x{height}, but the sheet needs at least {need_width}x{need_height}")]
    ImageTooSmall {
        width: u32,
        height: u32,
        need_width: u32,
        need_height: u32,
    },

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A sampled cell had a flag outside of `0..=1`.
    #[error("No glyph for block pattern {0:?}")]
    UnmappedPattern([u8; 4]),

    /// Two block patterns share a glyph.
    #[error("Glyph {glyph:?} is used by both {first:?} and {second:?}")]
    DuplicateGlyph {
        glyph: char,
        first: [u8; 4],
        second: [u8; 4],
    },
}
