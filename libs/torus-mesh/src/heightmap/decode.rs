//! Heightmap construction from `image` buffers.

use super::Heightmap;
use crate::error::{MeshError, MeshResult};
use image::{GrayImage, RgbaImage};

impl<'a> Heightmap<'a> {
    /// Borrows the pixels of a decoded RGBA image; heights come from red.
    ///
    /// # Example
    ///
    /// ```rust
    /// use image::{Rgba, RgbaImage};
    /// use torus_mesh::Heightmap;
    ///
    /// let image = RgbaImage::from_pixel(3, 2, Rgba([64, 0, 0, 255]));
    /// let heightmap = Heightmap::from_rgba_image(&image).unwrap();
    /// assert_eq!(heightmap.sample(2, 1), 64);
    /// ```
    pub fn from_rgba_image(image: &'a RgbaImage) -> MeshResult<Self> {
        Self::new(image.as_raw(), image.width(), image.height())
    }

    /// Borrows the pixels of a single-channel grayscale image.
    pub fn from_luma_image(image: &'a GrayImage) -> MeshResult<Self> {
        Self::with_stride(image.as_raw(), image.width(), image.height(), 1)
    }
}

/// Decodes an encoded image (PNG) into an owned RGBA buffer.
///
/// The result outlives this call so a [`Heightmap`] can borrow it:
///
/// ```rust,ignore
/// let image = torus_mesh::heightmap::decode_rgba(&png_bytes)?;
/// let heightmap = torus_mesh::Heightmap::from_rgba_image(&image)?;
/// ```
///
/// # Errors
///
/// Returns [`MeshError::ImageDecode`] when the bytes are not a supported
/// image format.
pub fn decode_rgba(bytes: &[u8]) -> MeshResult<RgbaImage> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|err| MeshError::image_decode(err.to_string()))?;
    log::debug!(
        "decoded heightmap image {}x{}",
        decoded.width(),
        decoded.height()
    );
    Ok(decoded.to_rgba8())
}
