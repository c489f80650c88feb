//! Regression test parameters and operations

use regrow_core::Mask;

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the index of the
/// current check, and every failure seen so far.
pub struct RegParams {
    /// Name of the test (e.g., "grower")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Print passing checks too
    verbose: bool,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    ///
    /// Verbosity is taken from the `REGTEST_VERBOSE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let verbose = std::env::var("REGTEST_VERBOSE").is_ok_and(|v| v == "1");

        eprintln!();
        eprintln!("////////////////   {}_reg   ///////////////", test_name);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            verbose,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    fn record_pass(&self, what: &str) {
        if self.verbose {
            eprintln!("{}_reg: {} {} ok", self.test_name, what, self.index);
        }
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if values match within `delta`, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        // NaN never compares within delta
        if diff <= delta {
            self.record_pass("value");
            true
        } else {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        }
    }

    /// Compare two masks for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the masks are identical, `false` otherwise.
    pub fn compare_masks(&mut self, mask1: &Mask, mask2: &Mask) -> bool {
        self.index += 1;

        if mask1.width() != mask2.width() || mask1.height() != mask2.height() {
            let msg = format!(
                "Failure in {}_reg: mask comparison for index {} - dimension mismatch ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                mask1.width(),
                mask1.height(),
                mask2.width(),
                mask2.height()
            );
            self.record_failure(msg);
            return false;
        }

        for y in 0..mask1.height() {
            for x in 0..mask1.width() {
                let v1 = mask1.get(x, y);
                let v2 = mask2.get(x, y);
                if v1 != v2 {
                    let msg = format!(
                        "Failure in {}_reg: mask comparison for index {} - cell mismatch at ({}, {}): {:?} vs {:?}",
                        self.test_name, self.index, x, y, v1, v2
                    );
                    self.record_failure(msg);
                    return false;
                }
            }
        }

        self.record_pass("mask");
        true
    }

    /// Compare two binary data arrays
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let first_diff = data1
                .iter()
                .zip(data2)
                .position(|(a, b)| a != b)
                .unwrap_or(data1.len().min(data2.len()));
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}, first difference at byte {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len(),
                first_diff
            );
            self.record_failure(msg);
            false
        } else {
            self.record_pass("string");
            true
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
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

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
