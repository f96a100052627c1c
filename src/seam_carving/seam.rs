use crate::fast_image::FastImage;

/// Leftmost column holding the strictly smallest value of `row`.
pub fn cheapest_seam_start(row: &[f32]) -> usize {
    let mut column = 0;
    for x in 1..row.len() {
        if row[x] < row[column] {
            column = x;
        }
    }
    column
}

/// Traverses the accumulated energy from bottom to top to find the least energetic seam.
///
/// `seam[y]` receives the column removed from row `y`. Moving up a row, the neighbours of
/// the current column are probed left, center, right; each probe is taken relative to the
/// column chosen so far and only a strictly smaller value moves the seam. Once the seam
/// steps left the last probe lands back on the old column, so a cheaper right neighbour
/// is only followed when the left one did not win.
///
/// `seam` must hold exactly one slot per row; otherwise it is left untouched.
pub fn seam_path(energy: &FastImage<f32>, seam: &mut [usize]) {
    let (width, height) = energy.dimensions();
    if width == 0 || height == 0 || seam.len() != height {
        return;
    }

    let mut column = cheapest_seam_start(energy.row(height - 1));
    seam[height - 1] = column;

    for y in (0..height - 1).rev() {
        let row = energy.row(y);
        for dx in [-1isize, 0, 1] {
            let x = column as isize + dx;
            if x >= 0 && (x as usize) < width && row[x as usize] < row[column] {
                column = x as usize;
            }
        }

        seam[y] = column;
    }
}

/// Deletes `seam[y]` from every row by shifting the remainder of the row one slot left.
///
/// The removed pixel is rotated past the logical end of the row; the caller shrinks the
/// width once all rows are shifted.
pub fn shift_minimize<T>(image: &mut FastImage<T>, seam: &[usize])
where
    T: Copy,
{
    let (width, height) = image.dimensions();

    for (row_idx, &seam_pos) in (0..height).zip(seam.iter()) {
        if seam_pos < width {
            image
                .get_row_unchecked_mut(seam_pos..width, row_idx)
                .rotate_left(1);
        }
    }
}
