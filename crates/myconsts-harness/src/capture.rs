//! Fixture capture from the constant catalog.

use myconsts_core::CATALOG;

use crate::error::HarnessError;
use crate::fixtures::{CheckKind, FixtureCase, FixtureSet};

pub const FIXTURE_VERSION: &str = "v1";
pub const FIXTURE_FAMILY: &str = "constants";

// (constant, operand) pairs that must hold identical values.
const ALIAS_RELATIONS: [(&str, &str); 4] = [
    ("ERROR", "FALSE"),
    ("FAILURE", "FALSE"),
    ("SUCCESS", "TRUE"),
    ("ERROR", "FAILURE"),
];

/// Build the canonical fixture set from the current catalog, digest included.
pub fn capture_catalog(captured_at: impl Into<String>) -> Result<FixtureSet, HarnessError> {
    let mut cases: Vec<FixtureCase> = CATALOG
        .iter()
        .map(|entry| FixtureCase {
            name: format!("{}_value", entry.name.to_ascii_lowercase()),
            check: CheckKind::Value,
            constant: entry.name.to_string(),
            operand: None,
            expected_output: entry.value.to_string(),
        })
        .collect();

    cases.push(FixtureCase {
        name: "false_negates_true".to_string(),
        check: CheckKind::Negation,
        constant: "FALSE".to_string(),
        operand: Some("TRUE".to_string()),
        expected_output: "1".to_string(),
    });

    cases.extend(ALIAS_RELATIONS.iter().map(|(constant, operand)| FixtureCase {
        name: format!(
            "{}_aliases_{}",
            constant.to_ascii_lowercase(),
            operand.to_ascii_lowercase()
        ),
        check: CheckKind::Alias,
        constant: (*constant).to_string(),
        operand: Some((*operand).to_string()),
        expected_output: "1".to_string(),
    }));

    let mut set = FixtureSet {
        version: FIXTURE_VERSION.to_string(),
        family: FIXTURE_FAMILY.to_string(),
        captured_at: captured_at.into(),
        digest: None,
        cases,
    };
    set.seal()?;
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_value_case_per_constant_plus_relations() {
        let set = capture_catalog("2026-10-19T00:00:00Z").unwrap();
        assert_eq!(set.cases.len(), CATALOG.len() + 1 + ALIAS_RELATIONS.len());
        assert_eq!(set.family, "constants");
        assert_eq!(set.version, "v1");
        set.verify_digest().unwrap();
    }

    #[test]
    fn value_cases_render_c_ints() {
        let set = capture_catalog("t").unwrap();
        let expected: Vec<(&str, &str)> = set
            .cases
            .iter()
            .filter(|c| c.check == CheckKind::Value)
            .map(|c| (c.constant.as_str(), c.expected_output.as_str()))
            .collect();
        assert_eq!(
            expected,
            [
                ("TRUE", "1"),
                ("FALSE", "0"),
                ("ERROR", "0"),
                ("SUCCESS", "1"),
                ("FAILURE", "0"),
                ("GARBAGE", "163"),
            ]
        );
    }

    #[test]
    fn digest_ignores_capture_timestamp() {
        let a = capture_catalog("2026-01-01T00:00:00Z").unwrap();
        let b = capture_catalog("2026-10-19T12:00:00Z").unwrap();
        assert_eq!(a.digest, b.digest);
    }
}
