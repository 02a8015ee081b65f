//! Sliding-histogram equivalence regression test
//!
//! Checks the histogram filter against the sort-based reference on
//! seeded random images:
//!   (1) identical output for every odd mask up to 2 * min(rows, cols) - 1
//!   (2) constant images are fixed points
//!   (3) output dimensions always equal input dimensions
//!   (4) serial and row-parallel execution agree
//!   (5) zero and even masks are rejected by both filters

use fastmedian_core::Gray16Image;
use fastmedian_filter::{
    ErrorKind, Execution, MedianFilter, NaiveMedianFilter, SlidingHistogramMedianFilter,
};
use fastmedian_test::RegParams;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_image(rng: &mut StdRng, rows: u32, cols: u32, levels: u16) -> Gray16Image {
    Gray16Image::from_fn(rows, cols, |_, _| rng.random_range(0..=levels)).expect("random image")
}

fn filters() -> [Box<dyn MedianFilter>; 2] {
    [
        Box::new(NaiveMedianFilter::with_execution(Execution::Serial)),
        Box::new(SlidingHistogramMedianFilter::with_execution(Execution::Serial)),
    ]
}

#[test]
fn sliding_equivalence_reg_random() {
    let mut rp = RegParams::new("sliding_equivalence");
    let mut rng = StdRng::seed_from_u64(0x5eed_0001);

    let naive = NaiveMedianFilter::new();
    let sliding = SlidingHistogramMedianFilter::new();

    for (rows, cols, levels) in [
        (1, 1, u16::MAX),
        (1, 9, 7),
        (9, 1, u16::MAX),
        (4, 7, 3),
        (8, 8, u16::MAX),
        (13, 5, 255),
        (16, 21, u16::MAX),
    ] {
        let img = random_image(&mut rng, rows, cols, levels);
        let max_mask = 2 * rows.min(cols) - 1;
        for mask in (1..=max_mask).step_by(2) {
            let a = naive.filter(&img.view(), mask).expect("naive");
            let b = sliding.filter(&img.view(), mask).expect("sliding");
            rp.compare_values(rows as f64, b.rows() as f64, 0.0);
            rp.compare_values(cols as f64, b.cols() as f64, 0.0);
            if !rp.compare_images(&a, &b) {
                eprintln!("  mismatch: {}x{} levels {} mask {}", rows, cols, levels, mask);
            }
        }
    }

    assert!(rp.cleanup(), "sliding_equivalence regression test failed");
}

#[test]
fn sliding_equivalence_reg_constant() {
    let mut rp = RegParams::new("sliding_constant");

    for value in [0u16, 1, 32_768, u16::MAX] {
        let img = Gray16Image::from_fn(11, 6, |_, _| value).expect("constant image");
        for filter in filters() {
            for mask in [1u32, 3, 5, 9, 21] {
                let out = filter.filter(&img.view(), mask).expect(filter.name());
                rp.compare_images(&img, &out);
            }
        }
    }

    assert!(rp.cleanup(), "sliding_constant regression test failed");
}

#[test]
fn sliding_equivalence_reg_execution() {
    let mut rp = RegParams::new("sliding_execution");
    let mut rng = StdRng::seed_from_u64(0x5eed_0002);

    let img = random_image(&mut rng, 37, 29, u16::MAX);
    for mask in [3u32, 7, 15] {
        let serial = SlidingHistogramMedianFilter::with_execution(Execution::Serial)
            .filter(&img.view(), mask)
            .expect("serial");
        let parallel = SlidingHistogramMedianFilter::with_execution(Execution::RowParallel)
            .filter(&img.view(), mask)
            .expect("parallel");
        rp.compare_images(&serial, &parallel);
    }

    assert!(rp.cleanup(), "sliding_execution regression test failed");
}

#[test]
fn sliding_equivalence_reg_invalid_masks() {
    let mut rp = RegParams::new("sliding_invalid");

    let img = Gray16Image::from_vec(3, 3, (1..=9).collect()).expect("ramp");
    for filter in filters() {
        for mask in [0u32, 2, 4, 64] {
            let kind = filter.filter(&img.view(), mask).err().map(|e| e.kind());
            rp.compare_values(
                1.0,
                if kind == Some(ErrorKind::InvalidMask) { 1.0 } else { 0.0 },
                0.0,
            );
        }
    }

    assert!(rp.cleanup(), "sliding_invalid regression test failed");
}
