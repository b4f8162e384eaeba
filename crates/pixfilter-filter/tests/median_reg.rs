//! Block median regression test
//!
//! Tests median_filter() over W x W windows, ordered by packed 0xRRGGBB:
//!   (1) the 5x5, W=4 scan writes exactly [0,4) x [0,4)
//!   (2) every written pixel is one of the input pixels
//!   (3) black input stays black under both edge policies
//!   (4) results match a direct per-window computation

use pixfilter_core::{Image, ImageMut, Pixel};
use pixfilter_filter::{EdgePolicy, WindowOptions, median_filter, median_filter_with};
use pixfilter_test::{RegParams, noise_image, solid_image};
use std::collections::HashSet;

#[test]
fn median_reg_written_region() {
    let mut rp = RegParams::new("median_region");

    let image = solid_image(5, 5, Pixel::WHITE).unwrap();
    let out = median_filter(&image, 4).unwrap();

    let written: Vec<(u32, u32)> = (0..5)
        .flat_map(|y| (0..5).map(move |x| (x, y)))
        .filter(|&(x, y)| out.get_pixel(x, y) == Some(Pixel::WHITE))
        .collect();
    let expected: Vec<(u32, u32)> = (0..4)
        .flat_map(|y| (0..4).map(move |x| (x, y)))
        .collect();
    rp.check(written == expected, "written set is [0,4) x [0,4)");
    rp.compare_values(9.0, (25 - written.len()) as f64, 0.0);

    let clamped = median_filter_with(&image, 4, &WindowOptions::with_edge(EdgePolicy::Clamped)).unwrap();
    rp.compare_images(&clamped, &image);

    assert!(rp.cleanup(), "median_region regression test failed");
}

#[test]
fn median_reg_values_come_from_input() {
    let mut rp = RegParams::new("median_values");

    let image = noise_image(23, 19, 17).unwrap();
    let inputs: HashSet<u32> = image.pixels().iter().map(|p| p.packed()).collect();

    for window in [1, 2, 3, 4, 7] {
        let clamped =
            median_filter_with(&image, window, &WindowOptions::with_edge(EdgePolicy::Clamped))
                .unwrap();
        rp.check(
            clamped.pixels().iter().all(|p| inputs.contains(&p.packed())),
            &format!("clamped W={window} picks input pixels"),
        );

        // the unfilled scan writes x < width - 1 and y < height - 1
        let unfilled = median_filter(&image, window).unwrap();
        let inside = (0..18u32)
            .flat_map(|y| (0..22u32).map(move |x| (x, y)))
            .all(|(x, y)| inputs.contains(&unfilled.get_pixel_unchecked(x, y).packed()));
        rp.check(inside, &format!("unfilled W={window} picks input pixels"));
    }

    assert!(rp.cleanup(), "median_values regression test failed");
}

#[test]
fn median_reg_black() {
    let mut rp = RegParams::new("median_black");

    let black = solid_image(3, 3, Pixel::BLACK).unwrap();
    rp.compare_images(&median_filter(&black, 3).unwrap(), &black);
    let clamped = median_filter_with(&black, 3, &WindowOptions::with_edge(EdgePolicy::Clamped)).unwrap();
    rp.compare_images(&clamped, &black);

    assert!(rp.cleanup(), "median_black regression test failed");
}

/// Straightforward block median by packed value: every origin in
/// row-major order, each window sorted and its median written over the
/// footprint.
fn reference_median(image: &Image, window: u32, inclusive: bool) -> Image {
    let (w, h) = image.dimensions();
    let extra = if inclusive { 1 } else { 0 };
    let mut out = ImageMut::new(w, h).unwrap();
    for oy in 0..(h - window + extra) {
        for ox in 0..(w - window + extra) {
            let mut packed = Vec::new();
            for y in oy..oy + window {
                for x in ox..ox + window {
                    packed.push(image.get_pixel(x, y).unwrap().packed());
                }
            }
            packed.sort();
            let n = packed.len();
            let index = if n % 2 == 0 { n / 2 - 1 } else { n / 2 };
            let value = Pixel::from_packed(packed[index]);
            for y in oy..oy + window {
                for x in ox..ox + window {
                    out.set_pixel(x, y, value).unwrap();
                }
            }
        }
    }
    out.into()
}

#[test]
fn median_reg_matches_reference() {
    let mut rp = RegParams::new("median_reference");

    let image = noise_image(40, 30, 9).unwrap();
    let clamped = WindowOptions::with_edge(EdgePolicy::Clamped);
    for window in [1, 2, 3, 6] {
        let out = median_filter(&image, window).unwrap();
        rp.compare_images(&out, &reference_median(&image, window as u32, false));

        let out = median_filter_with(&image, window, &clamped).unwrap();
        rp.compare_images(&out, &reference_median(&image, window as u32, true));
    }

    assert!(rp.cleanup(), "median_reference regression test failed");
}
