//! Test execution engine.

use crate::diff::render_diff;
use crate::evaluate::evaluate_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::report::{UNSUPPORTED_PREFIX, VerificationResult};

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Evaluate every case in order.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set.cases.iter().map(run_case).collect()
    }
}

fn run_case(case: &FixtureCase) -> VerificationResult {
    let actual = match evaluate_case(case) {
        Ok(actual) => actual,
        Err(err) => format!("{UNSUPPORTED_PREFIX}{err}"),
    };
    let passed = actual == case.expected_output;
    VerificationResult {
        case_name: case.name.clone(),
        check: case.check.as_str().to_string(),
        constant: case.constant.clone(),
        passed,
        diff: (!passed).then(|| render_diff(&case.expected_output, &actual)),
        expected: case.expected_output.clone(),
        actual,
    }
}
