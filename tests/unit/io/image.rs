//! Validates image loading, artifact writing and raster post-processing

use hexmosaic::MosaicError;
use hexmosaic::io::image::{crop_and_sharpen, load_image, write_text};
use image::{Rgb, RgbImage};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn test_load_missing_image_fails() {
    let result = load_image(std::path::Path::new("/nonexistent/missing.png"));
    assert!(matches!(result, Err(MosaicError::ImageLoad { .. })));
}

#[test]
fn test_load_image_converts_to_rgb() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("source.png");
    RgbImage::from_pixel(6, 4, Rgb([9, 8, 7])).save(&path)?;

    let loaded = load_image(&path)?;
    assert_eq!(loaded.dimensions(), (6, 4));
    assert_eq!(*loaded.get_pixel(0, 0), Rgb([9, 8, 7]));
    Ok(())
}

#[test]
fn test_write_text_creates_parent_directories() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("out").join("artifact.svg");

    write_text(&path, "<svg></svg>")?;

    assert_eq!(std::fs::read_to_string(&path)?, "<svg></svg>");
    Ok(())
}

#[test]
fn test_crop_and_sharpen_trims_bottom_margin() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("raster.png");
    let output = dir.path().join("cropped.png");
    RgbImage::from_pixel(16, 16, Rgb([120, 130, 140])).save(&input)?;

    crop_and_sharpen(&input, &output, 4)?;

    let cropped = load_image(&output)?;
    assert_eq!(cropped.dimensions(), (16, 12));
    Ok(())
}

#[test]
fn test_crop_margin_never_removes_every_row() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("raster.png");
    let output = dir.path().join("cropped.png");
    RgbImage::from_pixel(8, 8, Rgb([50, 60, 70])).save(&input)?;

    crop_and_sharpen(&input, &output, 100)?;

    let cropped = load_image(&output)?;
    assert_eq!(cropped.dimensions(), (8, 1));
    Ok(())
}

#[test]
fn test_sharpen_preserves_uniform_areas() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("raster.png");
    let output = dir.path().join("cropped.png");
    RgbImage::from_pixel(12, 12, Rgb([100, 100, 100])).save(&input)?;

    crop_and_sharpen(&input, &output, 2)?;

    // The kernel sums to one, so flat regions keep their value away from
    // the image border
    let sharpened = load_image(&output)?;
    assert_eq!(*sharpened.get_pixel(6, 5), Rgb([100, 100, 100]));
    Ok(())
}
