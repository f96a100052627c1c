//! Sobel edge detection over a luminance grid.
//!
//! Neighbours outside the image contribute zero (true zero padding, no border clamping),
//! so a flat image still reports edges along its outer frame.
use super::for_each_row;
use crate::fast_image::FastImage;

type Kernel3 = [[f32; 3]; 3];

pub const SOBEL_KERNEL_X: Kernel3 = [[1.0, 0.0, -1.0], [2.0, 0.0, -2.0], [1.0, 0.0, -1.0]];
pub const SOBEL_KERNEL_Y: Kernel3 = [[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]];

/// Magnitudes at or below this are snapped to exactly zero.
pub const MAGNITUDE_EPSILON: f32 = 1e-6;

#[inline]
fn magnitude_at(luma: &FastImage<f32>, x: usize, y: usize) -> f32 {
    let (width, height) = luma.dimensions();

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for (ky, dy) in (-1isize..=1).enumerate() {
        for (kx, dx) in (-1isize..=1).enumerate() {
            let xx = x as isize + dx;
            let yy = y as isize + dy;
            let value = if xx >= 0 && yy >= 0 && (xx as usize) < width && (yy as usize) < height {
                luma.get_pixel(xx as usize, yy as usize)
            } else {
                0.0
            };
            sum_x += value * SOBEL_KERNEL_X[ky][kx];
            sum_y += value * SOBEL_KERNEL_Y[ky][kx];
        }
    }

    let magnitude = (sum_x * sum_x + sum_y * sum_y).sqrt();
    if magnitude > MAGNITUDE_EPSILON {
        magnitude
    } else {
        0.0
    }
}

/// Computes `sqrt(gx^2 + gy^2)` for every cell of `luma`.
pub fn gradient_magnitude(luma: &FastImage<f32>, parallel: bool) -> FastImage<f32> {
    let (width, height) = luma.dimensions();
    let mut gradient = FastImage::new(width, height, 0.0);

    for_each_row(&mut gradient, parallel, |y, row| {
        for (x, g) in row.iter_mut().enumerate() {
            *g = magnitude_at(luma, x, y);
        }
    });

    gradient
}
