//! Evaluate fixture cases against the compiled-in constants.

use myconsts_core::{ConstEntry, lookup};

use crate::error::HarnessError;
use crate::fixtures::{CheckKind, FixtureCase};

fn resolve(name: &str) -> Result<&'static ConstEntry, HarnessError> {
    lookup(name).ok_or_else(|| HarnessError::UnknownConstant(name.to_string()))
}

fn resolve_bool(name: &str) -> Result<bool, HarnessError> {
    resolve(name)?
        .value
        .as_bool()
        .ok_or_else(|| HarnessError::NotBoolean(name.to_string()))
}

fn operand(case: &FixtureCase) -> Result<&str, HarnessError> {
    case.operand
        .as_deref()
        .ok_or_else(|| HarnessError::MissingOperand(case.name.clone()))
}

fn flag(holds: bool) -> String {
    i32::from(holds).to_string()
}

/// Produce the actual output for `case`.
///
/// `value` renders the constant as a C int; relation checks render `1` when
/// the relation holds and `0` otherwise.
pub fn evaluate_case(case: &FixtureCase) -> Result<String, HarnessError> {
    match case.check {
        CheckKind::Value => Ok(resolve(&case.constant)?.value.to_string()),
        CheckKind::Alias => {
            let left = resolve(&case.constant)?;
            let right = resolve(operand(case)?)?;
            Ok(flag(left.value == right.value))
        }
        CheckKind::Negation => {
            let left = resolve_bool(&case.constant)?;
            let right = resolve_bool(operand(case)?)?;
            Ok(flag(left == !right))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(check: CheckKind, constant: &str, operand: Option<&str>) -> FixtureCase {
        FixtureCase {
            name: "t".to_string(),
            check,
            constant: constant.to_string(),
            operand: operand.map(str::to_string),
            expected_output: String::new(),
        }
    }

    #[test]
    fn values() {
        assert_eq!(evaluate_case(&case(CheckKind::Value, "TRUE", None)).unwrap(), "1");
        assert_eq!(evaluate_case(&case(CheckKind::Value, "FAILURE", None)).unwrap(), "0");
        assert_eq!(evaluate_case(&case(CheckKind::Value, "GARBAGE", None)).unwrap(), "163");
    }

    #[test]
    fn relations() {
        let neg = case(CheckKind::Negation, "FALSE", Some("TRUE"));
        assert_eq!(evaluate_case(&neg).unwrap(), "1");
        let not_neg = case(CheckKind::Negation, "SUCCESS", Some("TRUE"));
        assert_eq!(evaluate_case(&not_neg).unwrap(), "0");
        let alias = case(CheckKind::Alias, "ERROR", Some("FAILURE"));
        assert_eq!(evaluate_case(&alias).unwrap(), "1");
        let not_alias = case(CheckKind::Alias, "SUCCESS", Some("ERROR"));
        assert_eq!(evaluate_case(&not_alias).unwrap(), "0");
    }

    #[test]
    fn garbage_is_never_an_alias_of_true() {
        let c = case(CheckKind::Alias, "GARBAGE", Some("TRUE"));
        assert_eq!(evaluate_case(&c).unwrap(), "0");
    }

    #[test]
    fn errors() {
        assert!(matches!(
            evaluate_case(&case(CheckKind::Value, "MAYBE", None)),
            Err(HarnessError::UnknownConstant(name)) if name == "MAYBE"
        ));
        assert!(matches!(
            evaluate_case(&case(CheckKind::Alias, "ERROR", None)),
            Err(HarnessError::MissingOperand(_))
        ));
        assert!(matches!(
            evaluate_case(&case(CheckKind::Negation, "GARBAGE", Some("TRUE"))),
            Err(HarnessError::NotBoolean(name)) if name == "GARBAGE"
        ));
    }
}
