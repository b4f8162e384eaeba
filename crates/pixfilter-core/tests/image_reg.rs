//! Image container regression test
//!
//! Tests the shared/mutable image model:
//!   (1) clones share pixels, deep clones do not
//!   (2) try_into_mut succeeds only for a unique owner
//!   (3) fill_rect writes whole blocks or nothing

use pixfilter_core::{Error, Image, Pixel};
use pixfilter_test::{RegParams, gradient_image, noise_image, solid_image};

#[test]
fn image_reg_sharing() {
    let mut rp = RegParams::new("image_sharing");

    let image = noise_image(12, 8, 21).unwrap();
    let shared = image.clone();
    rp.compare_values(2.0, image.ref_count() as f64, 0.0);

    let deep = image.deep_clone();
    rp.compare_values(1.0, deep.ref_count() as f64, 0.0);
    rp.compare_images(&image, &deep);

    // shared owner blocks in-place mutation
    let image = match image.try_into_mut() {
        Ok(_) => panic!("try_into_mut must fail while shared"),
        Err(image) => image,
    };
    drop(shared);
    let mut owned = image.try_into_mut().unwrap();
    owned.set_pixel(0, 0, Pixel::WHITE).unwrap();
    let modified: Image = owned.into();
    rp.check(modified != deep, "modified image differs from the deep clone");

    assert!(rp.cleanup(), "image_sharing regression test failed");
}

#[test]
fn image_reg_fill_rect() {
    let mut rp = RegParams::new("image_fill_rect");

    let base = gradient_image(10, 6).unwrap();
    let mut image = base.to_mut();
    image.fill_rect(2, 1, 3, 4, Pixel::new(1, 2, 3)).unwrap();
    let image: Image = image.into();

    let inside = |x: u32, y: u32| (2..5).contains(&x) && (1..5).contains(&y);
    let ok = (0..6).all(|y| {
        (0..10).all(|x| {
            let expected = if inside(x, y) {
                Pixel::new(1, 2, 3)
            } else {
                base.get_pixel_unchecked(x, y)
            };
            image.get_pixel(x, y) == Some(expected)
        })
    });
    rp.check(ok, "block written, rest untouched");
    rp.compare_values(12.0, image.count_pixel_diffs(&base).unwrap() as f64, 0.0);

    // a block crossing the border writes nothing
    let mut clipped = base.to_mut();
    assert!(matches!(
        clipped.fill_rect(8, 0, 3, 2, Pixel::WHITE),
        Err(Error::IndexOutOfBounds { .. })
    ));
    let clipped: Image = clipped.into();
    rp.compare_images(&clipped, &base);

    assert!(rp.cleanup(), "image_fill_rect regression test failed");
}

#[test]
fn image_reg_compare_mismatch() {
    let a = solid_image(4, 4, Pixel::BLACK).unwrap();
    let b = solid_image(4, 5, Pixel::BLACK).unwrap();
    assert!(matches!(a.compare(&b), Err(Error::DimensionMismatch { .. })));
    assert!(matches!(
        Image::from_pixels(2, 2, vec![Pixel::BLACK; 3]),
        Err(Error::DimensionMismatch { .. })
    ));
    assert!(matches!(Image::new(0, 3), Err(Error::InvalidDimension { .. })));
}
