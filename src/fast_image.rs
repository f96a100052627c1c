use image::{Rgba, RgbaImage};
use std::ops::Range;

/// Bitmap structure optimized for speed of access.
///
/// Rows are laid out `width_stride` elements apart. Shrinking `width` never moves data,
/// so a carved image keeps its original stride and simply ignores the trailing columns.
#[derive(Clone, Debug, PartialEq)]
pub struct FastImage<T> {
    data: Vec<T>,
    width_stride: usize,
    width: usize,
    height: usize,
}

impl<T> FastImage<T>
where
    T: Copy,
{
    pub fn new(width: usize, height: usize, fill: T) -> FastImage<T> {
        FastImage {
            data: vec![fill; height * width],
            width,
            height,
            width_stride: width,
        }
    }

    /// Wraps a row-major buffer of exactly `width * height` elements.
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    pub fn from_data(width: usize, height: usize, data: Vec<T>) -> Option<FastImage<T>> {
        if data.len() != width * height {
            return None;
        }

        Some(FastImage {
            data,
            width,
            height,
            width_stride: width,
        })
    }

    /// Updates the width of the image, but does not update its contents. (Cropping)
    pub(crate) fn minimize(&mut self, width: usize) {
        debug_assert!(width <= self.width);
        self.width = width;
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn get_row_unchecked_mut(&mut self, mut x: Range<usize>, row: usize) -> &mut [T] {
        let rowoffs = row * self.width_stride;
        x.end += rowoffs;
        x.start += rowoffs;
        &mut self.data[x]
    }

    pub(crate) fn get_row_unchecked(&self, mut x: Range<usize>, row: usize) -> &[T] {
        let rowoffs = row * self.width_stride;
        x.end += rowoffs;
        x.start += rowoffs;
        &self.data[x]
    }

    /// Logical contents of row `y`.
    pub fn row(&self, y: usize) -> &[T] {
        self.get_row_unchecked(0..self.width, y)
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> T {
        self.data[x + y * self.width_stride]
    }

    /// Copies the logical image into a freshly packed row-major vector.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            out.extend_from_slice(self.row(y));
        }
        out
    }
}

impl FastImage<f32> {
    /// Mutable access to the densely packed buffer. Scalar grids are always built with
    /// `width_stride == width`, which the parallel stages rely on when chunking by row.
    pub(crate) fn data_mut(&mut self) -> &mut [f32] {
        debug_assert_eq!(self.width, self.width_stride);
        &mut self.data
    }
}

/// Packs an RGBA pixel into the `0xAARRGGBB` layout used by the pixel grid.
pub fn pack_argb(pixel: &Rgba<u8>) -> u32 {
    let [r, g, b, a] = pixel.0;
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

pub fn unpack_argb(argb: u32) -> Rgba<u8> {
    Rgba([
        (argb >> 16 & 0xFF) as u8,
        (argb >> 8 & 0xFF) as u8,
        (argb & 0xFF) as u8,
        (argb >> 24 & 0xFF) as u8,
    ])
}

impl FastImage<u32> {
    /// Creates an ARGB pixel grid from an `image::RgbaImage`.
    pub fn from_image(image: &RgbaImage) -> FastImage<u32> {
        let w = image.width() as usize;
        let h = image.height() as usize;

        FastImage {
            data: image.pixels().map(pack_argb).collect(),
            width: w,
            height: h,
            width_stride: w,
        }
    }

    /// Converts the logical (possibly carved) grid back into an `image::RgbaImage`.
    pub fn into_image(self) -> RgbaImage {
        RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            unpack_argb(self.get_pixel(x as usize, y as usize))
        })
    }
}
