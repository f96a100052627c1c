use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::path::Path;
use seam_carver::io::{open_argb, output_format, save_argb};
use seam_carver::seam_carving::seam::seam_path;
use seam_carver::seam_carving::{energy_map, luminance::luminance, sobel::gradient_magnitude};
use seam_carver::{carve, easy_carve, CarveError, CarveOptions, FastImage};

fn create_scene(width: u32, height: u32) -> RgbaImage {
    // flat sky with a bright vertical post at x = width / 2
    RgbaImage::from_fn(width, height, |x, y| {
        if x == width / 2 {
            Rgba([250, 250, 240, 255])
        } else {
            Rgba([40, 60 + (y % 3) as u8, 120, 255])
        }
    })
}

#[test]
fn test_gray_square_scenario() {
    let mut grid = FastImage::new(3, 3, 0xFF80_8080u32);

    let mut seam = vec![usize::MAX; 3];
    seam_path(&energy_map(&grid, &CarveOptions { parallel: false }), &mut seam);
    assert_eq!(seam, vec![1, 1, 1]);

    carve(&mut grid, 1, &CarveOptions::default()).unwrap();

    assert_eq!(grid.dimensions(), (2, 3));
    assert_eq!(grid.to_vec(), vec![0xFF80_8080; 6]);
}

#[test]
fn test_single_row_takes_leftmost_tie() {
    let energy = FastImage::from_data(5, 1, vec![5.0f32, 1.0, 3.0, 1.0, 4.0]).unwrap();
    let mut seam = vec![0; 1];
    seam_path(&energy, &mut seam);
    assert_eq!(seam, vec![1]);

    let mut pixels = FastImage::from_data(5, 1, vec![10u32, 11, 12, 13, 14]).unwrap();
    seam_carver::seam_carving::seam::shift_minimize(&mut pixels, &seam);
    assert_eq!(&pixels.row(0)[..4], &[10, 12, 13, 14]);
}

#[test]
fn test_height_is_preserved_and_width_drops() {
    let scene = create_scene(17, 9);
    let carved = easy_carve(&DynamicImage::ImageRgba8(scene), 6).unwrap();
    assert_eq!(carved.dimensions(), (11, 9));
}

#[test]
fn test_uniform_black_has_zero_gradient() {
    let grid = FastImage::new(6, 4, 0xFF00_0000u32);
    let gradient = gradient_magnitude(&luminance(&grid, true), true);
    assert!(gradient.to_vec().iter().all(|&g| g == 0.0));
}

#[test]
fn test_energy_first_row_matches_gradient() {
    let grid = FastImage::from_image(&create_scene(8, 5));
    let options = CarveOptions::default();
    let gradient = gradient_magnitude(&luminance(&grid, options.parallel), options.parallel);
    let energy = energy_map(&grid, &options);
    assert_eq!(energy.row(0), gradient.row(0));
}

#[test]
fn test_staging_is_repeatable() {
    let grid = FastImage::from_image(&create_scene(10, 6));
    for parallel in [false, true] {
        let options = CarveOptions { parallel };
        assert_eq!(energy_map(&grid, &options), energy_map(&grid, &options));
    }
}

#[test]
fn test_carve_to_single_column_then_reject() {
    let mut grid = FastImage::from_image(&create_scene(5, 4));
    carve(&mut grid, 4, &CarveOptions::default()).unwrap();
    assert_eq!(grid.dimensions(), (1, 4));

    match carve(&mut grid, 1, &CarveOptions::default()) {
        Err(CarveError::InvalidSeamCount { seams, width }) => {
            assert_eq!((seams, width), (1, 1));
        }
        other => panic!("expected InvalidSeamCount, got {:?}", other),
    }
}

#[test]
fn test_post_survives_carving() {
    let mut grid = FastImage::from_image(&create_scene(9, 6));
    carve(&mut grid, 4, &CarveOptions::default()).unwrap();

    let post = 0xFFFA_FAF0u32;
    for y in 0..grid.height() {
        assert!(grid.row(y).contains(&post), "row {} lost the post", y);
    }
}

#[test]
fn test_png_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("output.png");
    create_scene(12, 7).save(&input).unwrap();

    let mut grid = open_argb(&input).unwrap();
    assert_eq!(grid.dimensions(), (12, 7));
    carve(&mut grid, 3, &CarveOptions { parallel: false }).unwrap();
    save_argb(grid, &output).unwrap();

    let written = image::open(&output).unwrap();
    assert_eq!((written.width(), written.height()), (9, 7));
}

#[test]
fn test_missing_input_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = open_argb(&dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, CarveError::Decode { .. }));
}

#[test]
fn test_unwritable_output_is_an_encode_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing-dir").join("out.png");
    let grid = FastImage::new(2, 2, 0xFF00_0000u32);

    let err = save_argb(grid, &output).unwrap_err();
    assert!(matches!(err, CarveError::Encode { .. }));
    assert!(!output.exists());
}

#[test]
fn test_failed_save_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("keep.xyz");
    std::fs::write(&output, "user data").unwrap();

    let err = save_argb(FastImage::new(2, 2, 0xFF00_0000u32), &output).unwrap_err();
    assert!(matches!(err, CarveError::UnsupportedFormat { .. }));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "user data");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_successful_save_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");
    std::fs::write(&output, "stale").unwrap();

    save_argb(FastImage::from_image(&create_scene(6, 4)), &output).unwrap();
    let written = image::open(&output).unwrap();
    assert_eq!((written.width(), written.height()), (6, 4));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_jpeg_output_drops_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.jpg");

    let mut grid = FastImage::from_image(&create_scene(10, 6));
    carve(&mut grid, 2, &CarveOptions::default()).unwrap();
    save_argb(grid, &output).unwrap();

    let written = image::open(&output).unwrap();
    assert_eq!((written.width(), written.height()), (8, 6));
    assert!(!written.color().has_alpha());
}

#[test]
fn test_output_format_follows_extension() {
    assert_eq!(output_format(Path::new("a.png")).unwrap(), ImageFormat::Png);
    assert_eq!(output_format(Path::new("dir/b.JPG")).unwrap(), ImageFormat::Jpeg);
    assert!(matches!(
        output_format(Path::new("c.xyz")),
        Err(CarveError::UnsupportedFormat { .. })
    ));
    assert!(matches!(
        output_format(Path::new("no_extension")),
        Err(CarveError::UnsupportedFormat { .. })
    ));
}
