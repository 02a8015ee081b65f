//! Median filter regression test
//!
//! Filters a 64x48 ramp with salt-and-pepper impulses (speckle16.tif):
//!   (1) mask 3, 5 and 31 remove every saturated and zero impulse
//!   (2) sample sums and selected samples match precomputed values
//!   (3) sliding-histogram and sort-based outputs are identical
//!   (4) the fixed-mask legacy entry point equals mask 31
//!   (5) filtered outputs match the golden TIFFs

use fastmedian_core::Gray16Image;
use fastmedian_filter::{
    Execution, MedianFilterOptions, MedianMethod, median_filter, median_filter_naive,
    median_filter_sliding,
};
use fastmedian_test::{RegParams, load_test_image};

fn count_value(img: &Gray16Image, value: u16) -> usize {
    img.data().iter().filter(|&&v| v == value).count()
}

fn sample_sum(img: &Gray16Image) -> u64 {
    img.data().iter().map(|&v| u64::from(v)).sum()
}

/// Expected (mask, sum, centre, first, last) for speckle16.tif
const SPECKLE_EXPECTED: [(u32, u64, u16, u16, u16); 3] = [
    (3, 98_776_030, 32_800, 257, 64_319),
    (5, 98_754_418, 32_800, 514, 64_319),
    (31, 98_423_701, 32_812, 3_072, 61_247),
];

#[test]
fn median_reg_speckle_values() {
    let mut rp = RegParams::new("median_values");

    let img = load_test_image("speckle16.tif").expect("load speckle16.tif");
    rp.compare_values(48.0, img.rows() as f64, 0.0);
    rp.compare_values(64.0, img.cols() as f64, 0.0);
    rp.compare_values(71.0, count_value(&img, u16::MAX) as f64, 0.0);
    rp.compare_values(84.0, count_value(&img, 0) as f64, 0.0);

    for (mask, sum, centre, first, last) in SPECKLE_EXPECTED {
        let out = median_filter_sliding(&img.view(), mask).expect("sliding median");
        rp.compare_values(img.rows() as f64, out.rows() as f64, 0.0);
        rp.compare_values(img.cols() as f64, out.cols() as f64, 0.0);
        rp.compare_values(0.0, count_value(&out, u16::MAX) as f64, 0.0);
        rp.compare_values(0.0, count_value(&out, 0) as f64, 0.0);
        rp.compare_values(sum as f64, sample_sum(&out) as f64, 0.0);
        rp.compare_values(centre as f64, out.get(24, 32).unwrap_or(0) as f64, 0.0);
        rp.compare_values(first as f64, out.data()[0] as f64, 0.0);
        rp.compare_values(last as f64, out.data()[out.len() - 1] as f64, 0.0);
    }

    assert!(rp.cleanup(), "median_values regression test failed");
}

#[test]
fn median_reg_methods_agree() {
    let mut rp = RegParams::new("median_methods");

    let img = load_test_image("speckle16.tif").expect("load speckle16.tif");
    for mask in [1u32, 3, 7, 15, 31, 95] {
        let sliding = median_filter_sliding(&img.view(), mask).expect("sliding");
        let naive = median_filter_naive(&img.view(), mask).expect("naive");
        rp.compare_images(&naive, &sliding);

        let serial = median_filter(
            &img.view(),
            mask,
            &MedianFilterOptions::with_execution(Execution::Serial),
        )
        .expect("serial sliding");
        rp.compare_images(&sliding, &serial);
    }

    assert!(rp.cleanup(), "median_methods regression test failed");
}

#[test]
#[allow(deprecated)]
fn median_reg_legacy_mask() {
    let mut rp = RegParams::new("median_legacy");

    let img = load_test_image("speckle16.tif").expect("load speckle16.tif");
    let legacy = fastmedian_filter::median_filter_31(&img.view()).expect("median_filter_31");
    let explicit = median_filter(
        &img.view(),
        31,
        &MedianFilterOptions::with_method(MedianMethod::Naive),
    )
    .expect("naive mask 31");
    rp.compare_images(&explicit, &legacy);
    rp.compare_values(98_423_701.0, sample_sum(&legacy) as f64, 0.0);

    assert!(rp.cleanup(), "median_legacy regression test failed");
}

#[test]
fn median_reg_golden() {
    let mut rp = RegParams::new("median_speckle");

    let img = load_test_image("speckle16.tif").expect("load speckle16.tif");
    for mask in [3u32, 5, 31] {
        let out = median_filter_sliding(&img.view(), mask).expect("sliding median");
        rp.write_image_and_check(&out).expect("write filtered image");
    }

    assert!(rp.cleanup(), "median_speckle regression test failed");
}
