//! # Heightmap
//!
//! Typed, read-only view over a row-major pixel buffer. The mesher only needs
//! `width`, `height` and a wrapped [`Heightmap::sample`]; how the pixels were
//! decoded is the caller's business.

#[cfg(feature = "image")]
mod decode;

#[cfg(feature = "image")]
pub use self::decode::decode_rgba;

use crate::error::{MeshError, MeshResult};
use config::constants::{HEIGHT_CHANNEL, RGBA_CHANNEL_STRIDE};

/// Borrowed pixel buffer with validated dimensions.
///
/// Each pixel occupies `stride` consecutive bytes; the height is read from
/// channel 0 (red for RGBA data, the only channel for grayscale).
///
/// # Example
///
/// ```rust
/// use torus_mesh::Heightmap;
///
/// // 2x1 RGBA image: a black pixel followed by a white one.
/// let pixels = [0, 0, 0, 255, 255, 255, 255, 255];
/// let heightmap = Heightmap::new(&pixels, 2, 1).unwrap();
/// assert_eq!(heightmap.sample(1, 0), 255);
/// // Coordinates wrap around.
/// assert_eq!(heightmap.sample(2, 0), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Heightmap<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride: usize,
}

impl<'a> Heightmap<'a> {
    /// Wraps an interleaved RGBA buffer (4 bytes per pixel).
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidHeightmap`] when either dimension is zero
    /// or the buffer holds fewer than `width * height * 4` bytes.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> MeshResult<Self> {
        Self::with_stride(data, width, height, RGBA_CHANNEL_STRIDE)
    }

    /// Wraps a buffer with an arbitrary number of bytes per pixel.
    ///
    /// Use a stride of 1 for single-channel grayscale data.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidHeightmap`] when a dimension or the stride
    /// is zero, or the buffer is shorter than `width * height * stride`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use torus_mesh::Heightmap;
    ///
    /// let gray = [10u8, 20, 30, 40];
    /// let heightmap = Heightmap::with_stride(&gray, 2, 2, 1).unwrap();
    /// assert_eq!(heightmap.sample(1, 1), 40);
    /// assert!(Heightmap::with_stride(&gray, 3, 2, 1).is_err());
    /// ```
    pub fn with_stride(data: &'a [u8], width: u32, height: u32, stride: usize) -> MeshResult<Self> {
        if width == 0 || height == 0 {
            return Err(MeshError::invalid_heightmap(format!(
                "dimensions must be positive: {width}x{height}"
            )));
        }
        if stride == 0 {
            return Err(MeshError::invalid_heightmap("channel stride must be positive"));
        }

        let required = (width as usize)
            .checked_mul(height as usize)
            .and_then(|cells| cells.checked_mul(stride))
            .ok_or_else(|| {
                MeshError::invalid_heightmap(format!(
                    "dimensions {width}x{height} with stride {stride} overflow the address space"
                ))
            })?;

        if data.len() < required {
            return Err(MeshError::invalid_heightmap(format!(
                "heightmap dimensions {width}x{height} (stride {stride}) need {required} bytes \
                 but the pixel buffer holds {}",
                data.len()
            )));
        }

        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of bytes per pixel.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Reads the height channel at `(x, y)`, wrapping both coordinates.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        let x = (x % self.width) as usize;
        let y = (y % self.height) as usize;
        let base = (y * self.width as usize + x) * self.stride;
        self.data[base + HEIGHT_CHANNEL]
    }

    /// Projects torus grid cell `(j, i)` onto pixel coordinates.
    ///
    /// `j` runs over the radial segments and selects the column,
    /// `i` runs over the tubular segments and selects the row:
    ///
    /// ```text
    /// x = floor(j * width  / radial_segments)  mod width
    /// y = floor(i * height / tubular_segments) mod height
    /// ```
    ///
    /// The last ring and column alias back onto pixel 0, so the seam samples
    /// the same heights as the first ring and column.
    ///
    /// # Example
    ///
    /// ```rust
    /// use torus_mesh::Heightmap;
    ///
    /// let pixels = vec![0u8; 96 * 64 * 4];
    /// let heightmap = Heightmap::new(&pixels, 96, 64).unwrap();
    /// assert_eq!(heightmap.pixel_for_cell(32, 50, 64, 100), (48, 32));
    /// assert_eq!(heightmap.pixel_for_cell(64, 100, 64, 100), (0, 0));
    /// ```
    #[inline]
    pub fn pixel_for_cell(
        &self,
        j: u32,
        i: u32,
        radial_segments: u32,
        tubular_segments: u32,
    ) -> (u32, u32) {
        let x = u64::from(j) * u64::from(self.width) / u64::from(radial_segments.max(1));
        let y = u64::from(i) * u64::from(self.height) / u64::from(tubular_segments.max(1));
        (
            (x % u64::from(self.width)) as u32,
            (y % u64::from(self.height)) as u32,
        )
    }

    /// Samples the height for torus grid cell `(j, i)`.
    ///
    /// Shorthand for [`Heightmap::pixel_for_cell`] followed by
    /// [`Heightmap::sample`].
    #[inline]
    pub fn sample_cell(&self, j: u32, i: u32, radial_segments: u32, tubular_segments: u32) -> u8 {
        let (x, y) = self.pixel_for_cell(j, i, radial_segments, tubular_segments);
        self.sample(x, y)
    }
}
