//! Request fields read from arbitrary JSON values.
//!
//! A field of the wrong JSON type becomes a [`Violations`] entry, reported
//! with the rest of the body's problems as a 422.

use serde_json::Value;
use yori::validation::Violations;

/// A string field. Absent and `null` read as `None`.
pub(crate) fn text(
    violations: &mut Violations,
    field: &'static str,
    value: Option<Value>,
    message: &'static str,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(_) => {
            violations.push(field, message);
            None
        }
    }
}

/// A boolean field. Absent and `null` read as `None`.
pub(crate) fn flag(
    violations: &mut Violations,
    field: &'static str,
    value: Option<Value>,
    message: &'static str,
) -> Option<bool> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Bool(flag)) => Some(flag),
        Some(_) => {
            violations.push(field, message);
            None
        }
    }
}

/// A number sent either as a JSON number or as numeric text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Numeric {
    Missing,
    Invalid,
    Value(f64),
}

pub(crate) fn numeric(value: Option<Value>) -> Numeric {
    let parsed = match value {
        None | Some(Value::Null) => return Numeric::Missing,
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => {
            let text = text.trim();

            if text.is_empty() {
                return Numeric::Missing;
            }

            text.parse::<f64>().ok()
        }
        Some(_) => None,
    };

    parsed
        .filter(|number| number.is_finite())
        .map_or(Numeric::Invalid, Numeric::Value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numbers_may_be_sent_as_text() {
        assert_eq!(numeric(Some(json!(2))), Numeric::Value(2.0));
        assert_eq!(numeric(Some(json!(" 3 "))), Numeric::Value(3.0));
        assert_eq!(numeric(Some(json!("1.5"))), Numeric::Value(1.5));
    }

    #[test]
    fn blank_numbers_are_missing() {
        assert_eq!(numeric(None), Numeric::Missing);
        assert_eq!(numeric(Some(Value::Null)), Numeric::Missing);
        assert_eq!(numeric(Some(json!("  "))), Numeric::Missing);
    }

    #[test]
    fn other_values_are_not_numbers() {
        for value in [json!("abc"), json!("inf"), json!(true), json!([1]), json!({})] {
            assert_eq!(numeric(Some(value.clone())), Numeric::Invalid, "{value}");
        }
    }

    #[test]
    fn mistyped_text_and_flags_are_reported() {
        let mut violations = Violations::new();

        assert_eq!(text(&mut violations, "note", Some(json!(12)), "Note must be a string"), None);
        assert_eq!(
            flag(&mut violations, "same", Some(json!("yes")), "same must be a boolean"),
            None
        );
        assert_eq!(text(&mut violations, "name", Some(json!("Lan")), "unused"), Some("Lan".into()));
        assert_eq!(flag(&mut violations, "other", None, "unused"), None);

        let fields: Vec<_> = violations.iter().map(|violation| violation.field).collect();

        assert_eq!(fields, ["note", "same"]);
    }
}
