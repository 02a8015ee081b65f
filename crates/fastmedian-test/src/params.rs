//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use fastmedian_core::Gray16Image;
use fastmedian_io::TiffCompression;
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from environment variable or string
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "median")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode comes from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Create regression test parameters with an explicit mode
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        // Ensure directories exist
        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value (typically from golden/reference)
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two images for exact equality
    ///
    /// On mismatch the failure message names the number of differing
    /// samples, the largest difference and the first mismatch position.
    pub fn compare_images(&mut self, expected: &Gray16Image, actual: &Gray16Image) -> bool {
        self.index += 1;

        let diff = match expected.count_sample_diffs(actual) {
            Ok(diff) => diff,
            Err(e) => {
                let msg = format!(
                    "Failure in {}_reg: image comparison for index {} - {}",
                    self.test_name, self.index, e
                );
                self.fail(msg);
                return false;
            }
        };

        if diff.is_identical() {
            return true;
        }

        let err = TestError::ImageMismatch {
            index: self.index,
            n_diff: diff.n_diff,
            max_diff: diff.max_diff,
            first_mismatch: diff.first_mismatch,
        };
        let msg = format!("Failure in {}_reg: {}", self.test_name, err);
        self.fail(msg);
        false
    }

    /// Write an image to an uncompressed TIFF and check it against the
    /// golden file
    pub fn write_image_and_check(&mut self, image: &Gray16Image) -> TestResult<()> {
        self.index += 1;

        let dir = regout_dir();
        fs::create_dir_all(&dir)?;

        let local_path = format!("{}/{}.{:02}.tif", dir, self.test_name, self.index);

        fastmedian_io::write_tiff_gray16_file(image, &local_path, TiffCompression::None)
            .map_err(|source| TestError::ImageWrite {
                path: local_path.clone(),
                source,
            })?;

        self.check_file(&local_path)
    }

    /// Check a file against its golden counterpart
    ///
    /// In generate mode, copies the file to golden.
    /// In compare mode, compares with golden file.
    /// In display mode, does nothing.
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    let err = TestError::GoldenNotFound {
                        index: self.index,
                        path: golden_path,
                    };
                    let msg = format!("Failure in {}_reg: {}", self.test_name, err);
                    self.fail(msg);
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                // Fall back to a sample comparison when bytes differ
                if local_data != golden_data && !compare_image_files(local_path, &golden_path) {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name, self.index, local_path, golden_path
                    );
                    self.fail(msg);
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Compare two TIFF files sample by sample
fn compare_image_files(path1: &str, path2: &str) -> bool {
    match (
        fastmedian_io::read_tiff_gray16_file(path1),
        fastmedian_io::read_tiff_gray16_file(path2),
    ) {
        (Ok(a), Ok(b)) => a.equals(&b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image(seed: u32) -> Gray16Image {
        Gray16Image::from_fn(6, 9, |r, k| ((r * 9 + k) * 613 + seed) as u16).unwrap()
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse("generate"), RegTestMode::Generate);
        assert_eq!(RegTestMode::parse("DISPLAY"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse("compare"), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
    }

    #[test]
    fn test_mode_from_env() {
        // The variable may be set by the caller; only check it parses.
        let mode = RegTestMode::from_env();
        assert!(matches!(
            mode,
            RegTestMode::Compare | RegTestMode::Generate | RegTestMode::Display
        ));
    }

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_images() {
        let mut rp = RegParams::new("test_images");
        let a = sample_image(0);
        assert!(rp.compare_images(&a, &a.clone()));
        assert!(rp.is_success());

        let b = sample_image(1);
        assert!(!rp.compare_images(&a, &b));
        let c = Gray16Image::new(9, 6).unwrap();
        assert!(!rp.compare_images(&a, &c));
        assert_eq!(rp.index(), 3);
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_compare_images_reports_first_mismatch() {
        let mut rp = RegParams::with_mode("test_mismatch_detail", RegTestMode::Display);
        let a = sample_image(0);
        let mut b = a.clone();
        b.set(2, 5, a.get(2, 5).unwrap() ^ 0x0100).unwrap();
        b.set(4, 1, a.get(4, 1).unwrap() ^ 0x0001).unwrap();

        assert!(!rp.compare_images(&a, &b));
        let failure = &rp.failures()[0];
        assert!(failure.contains("check 1"), "{}", failure);
        assert!(failure.contains("2 samples differ"), "{}", failure);
        assert!(failure.contains("largest difference 256"), "{}", failure);
        assert!(failure.contains("first at row 2 col 5"), "{}", failure);
    }

    #[test]
    fn test_generate_then_compare() {
        let name = "params_unit_golden";
        let img = sample_image(7);

        let mut rp = RegParams::with_mode(name, RegTestMode::Generate);
        rp.write_image_and_check(&img).unwrap();
        assert!(rp.cleanup());

        let mut rp = RegParams::with_mode(name, RegTestMode::Compare);
        rp.write_image_and_check(&img).unwrap();
        assert!(rp.cleanup());

        let mut rp = RegParams::with_mode(name, RegTestMode::Compare);
        rp.write_image_and_check(&sample_image(8)).unwrap();
        assert!(!rp.is_success());

        let _ = fs::remove_file(format!("{}/{}_golden.01.tif", golden_dir(), name));
    }

    #[test]
    fn test_missing_golden() {
        let mut rp = RegParams::with_mode("params_unit_no_golden", RegTestMode::Compare);
        rp.write_image_and_check(&sample_image(3)).unwrap();
        assert!(!rp.is_success());
        assert!(rp.failures()[0].contains("golden file not found"));
    }

    #[test]
    fn test_display_mode_skips_golden() {
        let mut rp = RegParams::with_mode("params_unit_display", RegTestMode::Display);
        assert!(rp.display());
        rp.write_image_and_check(&sample_image(4)).unwrap();
        assert!(rp.cleanup());
    }
}
