use crate::fast_image::FastImage;
use rayon::prelude::*;

/// Cheapest of the (up to) three cells above `x`. Columns outside the row are unavailable.
#[inline]
fn min_above(above: &[f32], x: usize) -> f32 {
    let start = x.saturating_sub(1);
    let end = (x + 2).min(above.len());
    above[start..end]
        .iter()
        .fold(f32::INFINITY, |min, &value| if value < min { value } else { min })
}

/// Iterates over every line from top to bottom. Each pixel in a line adds the value of the lowest of the three pixels above to itself.
///
/// Row 0 is left untouched, so it stays identical to the gradient it was built from.
///
/// ## Example
/// ```rust
/// use seam_carver::FastImage;
/// use seam_carver::seam_carving::waterfall::add_waterfall;
///
/// //  1  2  3
/// // 10 10 10
/// let mut image = FastImage::from_data(3, 2, vec![1.0f32, 2.0, 3.0, 10.0, 10.0, 10.0]).unwrap();
/// add_waterfall(&mut image, false);
/// // we check for the pixel in the center of the second line
/// assert_eq!(image.get_pixel(1, 1), 10.0 + 1.0);
/// ```
pub fn add_waterfall(image: &mut FastImage<f32>, parallel: bool) {
    let (width, height) = image.dimensions();
    if width == 0 {
        return;
    }

    let data = image.data_mut();
    for y in 1..height {
        // P1P2P3
        //   CP
        let (done, rest) = data.split_at_mut(y * width);
        let above = &done[(y - 1) * width..];
        let current = &mut rest[..width];

        let accumulate = |(x, cell): (usize, &mut f32)| *cell += min_above(above, x);
        if parallel {
            current.par_iter_mut().enumerate().for_each(accumulate);
        } else {
            current.iter_mut().enumerate().for_each(accumulate);
        }
    }
}
