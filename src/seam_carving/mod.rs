use crate::error::{CarveError, Result};
use crate::fast_image::FastImage;
use image::{DynamicImage, RgbaImage};
use log::{debug, info};
use rayon::prelude::*;

pub mod luminance;
pub mod seam;
pub mod sobel;
pub mod waterfall;

use luminance::luminance;
use seam::{seam_path, shift_minimize};
use sobel::gradient_magnitude;
use waterfall::add_waterfall;

/// Tuning knobs for [`carve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarveOptions {
    /// Run the per-row stages on the rayon thread pool. Output is identical either way.
    pub parallel: bool,
}

impl Default for CarveOptions {
    fn default() -> Self {
        CarveOptions { parallel: true }
    }
}

/// Runs `f(y, row)` over every row of a densely packed scalar grid.
pub(crate) fn for_each_row<F>(grid: &mut FastImage<f32>, parallel: bool, f: F)
where
    F: Fn(usize, &mut [f32]) + Send + Sync,
{
    let width = grid.width();
    if width == 0 {
        return;
    }

    let data = grid.data_mut();
    if parallel {
        data.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    } else {
        data.chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
}

/// Checks that `seams` can be removed from an image of the given size.
///
/// At least one column must survive, so the count has to be in `1..width`.
pub fn validate(width: usize, height: usize, seams: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(CarveError::EmptyImage { width, height });
    }
    if seams == 0 || seams >= width {
        return Err(CarveError::InvalidSeamCount { seams, width });
    }
    Ok(())
}

/// Cumulative seam energy of the current logical image: luminance, then Sobel magnitude,
/// then the top-to-bottom minimum path sum.
pub fn energy_map(image: &FastImage<u32>, options: &CarveOptions) -> FastImage<f32> {
    let luma = luminance(image, options.parallel);
    let mut energy = gradient_magnitude(&luma, options.parallel);
    add_waterfall(&mut energy, options.parallel);
    energy
}

/// Removes `seams` vertical seams from `image`, logging progress after each one.
pub fn carve(image: &mut FastImage<u32>, seams: usize, options: &CarveOptions) -> Result<()> {
    carve_with_progress(image, seams, options, |removed| {
        info!("removed seam {}/{}", removed, seams)
    })
}

/// Removes `seams` vertical seams from `image`.
///
/// `progress` is called with the 1-based number of the seam just removed. The request is
/// validated up front; on error the image is left untouched.
pub fn carve_with_progress<P>(
    image: &mut FastImage<u32>,
    seams: usize,
    options: &CarveOptions,
    mut progress: P,
) -> Result<()>
where
    P: FnMut(usize),
{
    let (width, height) = image.dimensions();
    validate(width, height, seams)?;

    let mut last_seam_path = vec![0; height];

    for removed in 1..=seams {
        let energy = energy_map(image, options);
        seam_path(&energy, &mut last_seam_path);
        debug!("seam {} starts at column {}", removed, last_seam_path[height - 1]);

        shift_minimize(image, &last_seam_path);
        image.minimize(image.width() - 1);

        progress(removed);
    }

    Ok(())
}

/// Easy to use function to take a dynamic image, convert it to `Rgba`, and carve `seams` columns out of it.
pub fn easy_carve(image: &DynamicImage, seams: usize) -> Result<RgbaImage> {
    let mut image = FastImage::from_image(&image.to_rgba8());
    carve(&mut image, seams, &CarveOptions::default())?;
    Ok(image.into_image())
}
