mod common;

use common::*;
use image::{GrayImage, Luma, Rgb, RgbImage};
use portsight::detection::preprocessing::{BlurParams, BlurType, blur};
use portsight::detection::threshold::{ChannelRange, RgbThreshold, rgb_threshold};
use portsight::extract_contours;

fn uniform_band() -> RgbThreshold {
    let range = ChannelRange::new(100.0, 110.0);
    RgbThreshold {
        red: range,
        green: range,
        blue: range,
    }
}

#[test]
fn threshold_bounds_are_inclusive() {
    let mut img = RgbImage::new(4, 1);
    img.put_pixel(0, 0, Rgb([99, 99, 99]));
    img.put_pixel(1, 0, Rgb([100, 100, 100]));
    img.put_pixel(2, 0, Rgb([110, 110, 110]));
    img.put_pixel(3, 0, Rgb([111, 111, 111]));

    let mask = rgb_threshold(&img, &uniform_band());
    assert_eq!(mask.get_pixel(0, 0)[0], 0);
    assert_eq!(mask.get_pixel(1, 0)[0], 255);
    assert_eq!(mask.get_pixel(2, 0)[0], 255);
    assert_eq!(mask.get_pixel(3, 0)[0], 0);
}

#[test]
fn threshold_requires_every_channel_in_range() {
    let mut img = RgbImage::new(1, 1);
    img.put_pixel(0, 0, Rgb([105, 99, 105])); // Green channel misses

    let mask = rgb_threshold(&img, &uniform_band());
    assert_eq!(mask.get_pixel(0, 0)[0], 0);
}

#[test]
fn zero_radius_blur_is_identity() {
    let frame = target_frame(100, 100, 50, 50);

    for kind in [
        BlurType::Box,
        BlurType::Gaussian,
        BlurType::Median,
        BlurType::Bilateral,
    ] {
        let out = blur(&frame, &BlurParams { kind, radius: 0.0 });
        assert_eq!(out, frame, "{kind:?} with radius 0 must not change the frame");
    }
}

#[test]
fn blurring_a_uniform_frame_keeps_it_uniform() {
    let frame = RgbImage::from_pixel(32, 32, Rgb([120, 90, 60]));

    for kind in [
        BlurType::Box,
        BlurType::Gaussian,
        BlurType::Median,
        BlurType::Bilateral,
    ] {
        let out = blur(&frame, &BlurParams { kind, radius: 2.0 });
        for (x, y, px) in out.enumerate_pixels() {
            for c in 0..3 {
                let want = frame.get_pixel(x, y)[c] as i32;
                let got = px[c] as i32;
                assert!(
                    (want - got).abs() <= 1,
                    "{kind:?} drifted at ({x}, {y}): {got} vs {want}"
                );
            }
        }
    }
}

fn ring_mask() -> GrayImage {
    // White square with a square hole punched through it.
    GrayImage::from_fn(40, 40, |x, y| {
        let in_outer = (5..30).contains(&x) && (5..30).contains(&y);
        let in_hole = (12..20).contains(&x) && (12..20).contains(&y);
        if in_outer && !in_hole {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

#[test]
fn external_only_drops_hole_borders() {
    let mask = ring_mask();

    let all = extract_contours(&mask, false);
    let external = extract_contours(&mask, true);

    assert_eq!(all.len(), 2);
    assert_eq!(external.len(), 1);

    // The surviving border is the outer one.
    let bb = external[0].bounding_box();
    assert!(bb.width > 20 && bb.height > 20);
}

#[test]
fn separate_blobs_each_get_an_outer_border() {
    let mask = GrayImage::from_fn(60, 20, |x, y| {
        let left = (2..12).contains(&x) && (5..15).contains(&y);
        let right = (40..55).contains(&x) && (5..15).contains(&y);
        if left || right { Luma([255]) } else { Luma([0]) }
    });

    let external = extract_contours(&mask, true);
    assert_eq!(external.len(), 2);
}

#[test]
fn blank_mask_has_no_contours() {
    let mask = GrayImage::new(32, 32);
    assert!(extract_contours(&mask, false).is_empty());
    assert!(extract_contours(&mask, true).is_empty());
}
