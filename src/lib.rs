//! Converts the alpha silhouette of a sprite sheet into frames of Unicode
//! quadrant-block text.
//!
//! Each output glyph covers a 2x2 block of pixels. A pixel counts as filled
//! only when it is fully opaque, and the four fill flags select one of the 16
//! quadrant glyphs in [`glyph::BLOCKS`].
//!
//! ### Basic Usage
//!
//! ```rust
//! use image::{
//!     Rgba,
//!     RgbaImage,
//! };
//! use quadrant_frames::SpriteSheetEncoder;
//!
//! let sheet = RgbaImage::from_pixel(128, 16, Rgba([0, 0, 0, 255]));
//! let frames = SpriteSheetEncoder::encode(&sheet)?;
//!
//! assert_eq!(frames.frames().len(), 4);
//! print!("{frames}");
//! # Ok::<(), quadrant_frames::Error>(())
//! ```
//!
//! ## Sheet layout
//! Frames sit side by side, left to right, each `FRAME_WIDTH` x
//! `FRAME_HEIGHT` pixels. Glyph rows are sampled from 2px bands starting one
//! pixel into the frame (rows 1-2, 3-4, ...), so the first pixel row of a frame
//! is never read and the last band reaches one row past the frame. That extra
//! row is read from the image when it exists, and clamps to the image's last
//! row when the image is exactly one frame tall.

pub mod error;
pub mod glyph;
pub mod literal;

use std::path::Path;

use image::RgbaImage;
use log::{
    debug,
    info,
};
use strum::IntoEnumIterator;

pub use crate::{
    error::{
        Error,
        Result,
    },
    glyph::Corner,
    literal::{
        Frame,
        Frames,
    },
};

/// The sheet layout this tool was built for: four 32x16 frames in a 128x16
/// image.
pub type SpriteSheetEncoder = FrameEncoder<32, 16, 4>;

/// Splits a sprite sheet into `FRAMES` frames of `FRAME_WIDTH` x
/// `FRAME_HEIGHT` pixels and converts each to quadrant-block text.
///
/// The geometry is fixed at compile time. Each frame produces
/// `FRAME_HEIGHT / 2` rows of `FRAME_WIDTH / 2` glyphs.
pub struct FrameEncoder<
    const FRAME_WIDTH: u32 = 32,
    const FRAME_HEIGHT: u32 = 16,
    const FRAMES: u32 = 4,
>;

impl<const FRAME_WIDTH: u32, const FRAME_HEIGHT: u32, const FRAMES: u32>
    FrameEncoder<FRAME_WIDTH, FRAME_HEIGHT, FRAMES>
{
    /// Minimum image width covering every frame.
    pub const SHEET_WIDTH: u32 = FRAME_WIDTH * FRAMES;

    /// Opens and decodes the image at `path`, then encodes it.
    pub fn encode_path(path: impl AsRef<Path>) -> Result<Frames> {
        let path = path.as_ref();
        let image = image::open(path)?.to_rgba8();

        info!(
            "Loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        Self::encode(&image)
    }

    /// Encodes every frame of the sheet. Either all frames are produced or an
    /// error is returned; there is no partial result.
    pub fn encode(image: &RgbaImage) -> Result<Frames> {
        Self::check_bounds(image)?;

        let mut frames = Vec::with_capacity(FRAMES as usize);
        for frame in 0..FRAMES {
            let left = frame * FRAME_WIDTH;

            let rows = (1..1 + FRAME_HEIGHT)
                .step_by(2)
                .map(|row| {
                    (left..left + FRAME_WIDTH)
                        .step_by(2)
                        .map(|col| glyph::glyph(Self::sample_cell(image, col, row)?))
                        .collect::<Result<String>>()
                })
                .collect::<Result<Vec<_>>>()?;

            debug!("Frame {frame}: {} rows from x={left}", rows.len());
            frames.push(Frame::new(rows));
        }

        Ok(Frames::new(frames))
    }

    /// Samples the opacity flags of the 2x2 cell whose top-left pixel is
    /// `(col, row)`, in [`Corner`] order.
    pub fn sample_cell(image: &RgbaImage, col: u32, row: u32) -> Result<[u8; 4]> {
        let mut flags = [0; 4];

        for (flag, corner) in flags.iter_mut().zip(Corner::iter()) {
            let (dx, dy) = corner.offset();
            let x = col + dx;
            let mut y = row + dy;

            // The last band overhangs the frame by one row.
            if y == FRAME_HEIGHT && image.height() == FRAME_HEIGHT {
                y -= 1;
            }

            let pixel = image
                .get_pixel_checked(x, y)
                .ok_or(Error::OutOfBounds {
                    x,
                    y,
                    width: image.width(),
                    height: image.height(),
                })?;

            *flag = glyph::alpha_flag(pixel[3]);
        }

        Ok(flags)
    }

    fn check_bounds(image: &RgbaImage) -> Result<()> {
        if image.width() < Self::SHEET_WIDTH || image.height() < FRAME_HEIGHT {
            return Err(Error::ImageTooSmall {
                width: image.width(),
                height: image.height(),
                need_width: Self::SHEET_WIDTH,
                need_height: FRAME_HEIGHT,
            });
        }

        Ok(())
    }
}
