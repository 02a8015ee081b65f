//! fastmedian-test - Regression test framework for fastmedian
//!
//! Tracks a numbered sequence of checks per test and compares written
//! images against golden files. Three modes are supported:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use fastmedian_test::RegParams;
//!
//! let mut rp = RegParams::new("median");
//! rp.compare_values(5.0, out.get(1, 1).unwrap_or(0) as f64, 0.0);
//! rp.compare_images(&sliding, &naive);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use fastmedian_core::Gray16Image;

/// Load a 16-bit grayscale test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "ramp16.tif")
pub fn load_test_image(name: &str) -> TestResult<Gray16Image> {
    let path = test_data_path(name);
    fastmedian_io::read_tiff_gray16_file(&path).map_err(|source| TestError::ImageLoad {
        path: path.clone(),
        source,
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // fastmedian-test is at crates/fastmedian-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
