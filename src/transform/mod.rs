//! Image transforms over a decoded [`Bitmap`].
//!
//! Tonal and spatial transforms read the image and build a replacement
//! buffer of the same size. Geometric transforms rework the buffer in place
//! and are the only ones that touch header fields (width, height, raw size).

pub mod geometry;
pub mod spatial;
pub mod tonal;

use core::fmt;

use log::debug;

use crate::bitmap::Bitmap;
use crate::error::BitmapError;

/// One transform, selected by a command-line style flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
    Identity,
    CellShade,
    Grayscale,
    Pixelate,
    Blur,
    Rotate90,
    Rotate180,
    Rotate270,
    FlipVertical,
    FlipHorizontal,
    FlipDiagonal1,
    FlipDiagonal2,
    ScaleUp,
    ScaleDown,
}

impl Transform {
    pub const ALL: [Transform; 14] = [
        Self::Identity,
        Self::CellShade,
        Self::Grayscale,
        Self::Pixelate,
        Self::Blur,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
        Self::FlipVertical,
        Self::FlipHorizontal,
        Self::FlipDiagonal1,
        Self::FlipDiagonal2,
        Self::ScaleUp,
        Self::ScaleDown,
    ];

    /// Look up a transform by its flag (`-c`, `-r90`, `-grow`, ...).
    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.flag() == flag)
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::Identity => "-i",
            Self::CellShade => "-c",
            Self::Grayscale => "-g",
            Self::Pixelate => "-p",
            Self::Blur => "-b",
            Self::Rotate90 => "-r90",
            Self::Rotate180 => "-r180",
            Self::Rotate270 => "-r270",
            Self::FlipVertical => "-v",
            Self::FlipHorizontal => "-h",
            Self::FlipDiagonal1 => "-d1",
            Self::FlipDiagonal2 => "-d2",
            Self::ScaleUp => "-grow",
            Self::ScaleDown => "-shrink",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::CellShade => "cell shade",
            Self::Grayscale => "gray scale",
            Self::Pixelate => "pixelate",
            Self::Blur => "blur",
            Self::Rotate90 => "rotate 90",
            Self::Rotate180 => "rotate 180",
            Self::Rotate270 => "rotate 270",
            Self::FlipVertical => "flip vertically",
            Self::FlipHorizontal => "flip horizontally",
            Self::FlipDiagonal1 => "flip diagonally 1",
            Self::FlipDiagonal2 => "flip diagonally 2",
            Self::ScaleUp => "scale the image by 2",
            Self::ScaleDown => "scale the image by .5",
        }
    }

    /// Apply the transform in place.
    ///
    /// On error the image is left as it was.
    pub fn apply(self, image: &mut Bitmap) -> Result<(), BitmapError> {
        match self {
            Self::Identity => {}
            Self::CellShade => {
                let pixels = tonal::cell_shade(image);
                image.replace_pixels(pixels);
            }
            Self::Grayscale => {
                let pixels = tonal::grayscale(image);
                image.replace_pixels(pixels);
            }
            Self::Pixelate => {
                let pixels = spatial::pixelate(image)?;
                image.replace_pixels(pixels);
            }
            Self::Blur => {
                let pixels = spatial::blur(image)?;
                image.replace_pixels(pixels);
            }
            Self::Rotate180 => {
                let (info, pixels) = image.geometry_mut();
                geometry::rotate_180(info, pixels)?;
            }
            Self::FlipVertical => {
                let width = image.width();
                geometry::flip_vertical(width, image.geometry_mut().1);
            }
            Self::FlipHorizontal => {
                let width = image.width();
                geometry::flip_horizontal(width, image.geometry_mut().1);
            }
            Self::Rotate90
            | Self::Rotate270
            | Self::FlipDiagonal1
            | Self::FlipDiagonal2
            | Self::ScaleUp
            | Self::ScaleDown => {
                let (info, pixels) = image.geometry_mut();
                let resize = match self {
                    Self::Rotate90 => geometry::rotate_90,
                    Self::Rotate270 => geometry::rotate_270,
                    Self::FlipDiagonal1 => geometry::flip_diagonal_1,
                    Self::FlipDiagonal2 => geometry::flip_diagonal_2,
                    Self::ScaleUp => geometry::scale_up,
                    _ => geometry::scale_down,
                };
                resize(info, pixels)?;
            }
        }
        debug!(
            "applied {self}: image is now {}x{}",
            image.width(),
            image.height()
        );
        Ok(())
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
