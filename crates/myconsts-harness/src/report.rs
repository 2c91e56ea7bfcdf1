//! Verification results and report rendering.

use serde::{Deserialize, Serialize};

/// Prefix of the actual output for cases whose evaluation failed.
pub const UNSUPPORTED_PREFIX: &str = "unsupported:";

/// Result of verifying a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub case_name: String,
    /// Check kind (`value`, `negation`, `alias`).
    pub check: String,
    pub constant: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
    /// Diff if the case failed.
    pub diff: Option<String>,
}

impl VerificationResult {
    /// True when the case could not be evaluated at all.
    #[must_use]
    pub fn errored(&self) -> bool {
        !self.passed && self.actual.starts_with(UNSUPPORTED_PREFIX)
    }
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// A conformance report for one fixture run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub title: String,
    /// Fixture family and version, e.g. `constants@v1`.
    pub fixture: String,
    pub timestamp: String,
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Fixture: {}\n", self.fixture));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!(
            "- Passed: {}/{}\n\n",
            self.summary.passed, self.summary.total
        ));

        out.push_str("| Case | Check | Constant | Expected | Actual | Status |\n");
        out.push_str("|------|-------|----------|----------|--------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                r.case_name, r.check, r.constant, r.expected, r.actual, status
            ));
        }

        let failures: Vec<_> = self
            .summary
            .results
            .iter()
            .filter_map(|r| r.diff.as_ref().map(|d| (&r.case_name, d)))
            .collect();
        if !failures.is_empty() {
            out.push_str("\n## Diffs\n");
            for (name, diff) in failures {
                out.push_str(&format!("\n### {name}\n\n```diff\n{diff}```\n"));
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> VerificationResult {
        VerificationResult {
            case_name: name.to_string(),
            check: "value".to_string(),
            constant: "GARBAGE".to_string(),
            passed,
            expected: "163".to_string(),
            actual: if passed { "163" } else { "0" }.to_string(),
            diff: (!passed).then(|| "-163\n+0\n".to_string()),
        }
    }

    #[test]
    fn summary_counts() {
        let summary =
            VerificationSummary::from_results(vec![result("a", true), result("b", false)]);
        assert_eq!((summary.total, summary.passed, summary.failed), (2, 1, 1));
        assert!(!summary.all_passed());
        assert!(VerificationSummary::from_results(Vec::new()).all_passed());
    }

    #[test]
    fn markdown_lists_cases_and_diffs() {
        let report = ConformanceReport {
            title: "myconsts conformance".to_string(),
            fixture: "constants@v1".to_string(),
            timestamp: "2026-10-19T00:00:00Z".to_string(),
            summary: VerificationSummary::from_results(vec![
                result("ok", true),
                result("broken", false),
            ]),
        };
        let md = report.to_markdown();
        assert!(md.starts_with("# myconsts conformance\n"));
        assert!(md.contains("- Passed: 1/2"));
        assert!(md.contains("| ok | value | GARBAGE | 163 | 163 | PASS |"));
        assert!(md.contains("| broken | value | GARBAGE | 163 | 0 | FAIL |"));
        assert!(md.contains("### broken"));
        assert!(!md.contains("### ok"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["summary"]["failed"], 1);
    }
}
