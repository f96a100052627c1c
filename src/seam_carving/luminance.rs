use super::for_each_row;
use crate::fast_image::FastImage;

/// Converts a packed `0xAARRGGBB` pixel to normalized Rec. 709 luminance in `[0, 1]`.
///
/// Alpha is ignored.
#[inline]
pub fn rgb_to_luminance(argb: u32) -> f32 {
    let r = (argb >> 16 & 0xFF) as f32 / 255.0;
    let g = (argb >> 8 & 0xFF) as f32 / 255.0;
    let b = (argb & 0xFF) as f32 / 255.0;

    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Maps every pixel of the logical image to its luminance.
pub fn luminance(image: &FastImage<u32>, parallel: bool) -> FastImage<f32> {
    let (width, height) = image.dimensions();
    let mut luma = FastImage::new(width, height, 0.0);

    for_each_row(&mut luma, parallel, |y, row| {
        row.iter_mut()
            .zip(image.row(y))
            .for_each(|(l, &argb)| *l = rgb_to_luminance(argb));
    });

    luma
}
