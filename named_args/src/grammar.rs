//! The `Key1=Value1,Key2=Value2,...` argument string.
//!
//! Literals carry no type annotation. [`infer`] tries, in order: integer,
//! real, the boolean literals `true`/`false`, and finally keeps the raw text
//! as a string. Neither `,` nor `=` can appear inside a key or a literal.

use crate::{Error, Result, Store, Value};
use once_cell::sync::Lazy;
use regex::Regex;

pub const SEPARATOR: char = ',';
pub const ASSIGN: char = '=';

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());
static REAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$").unwrap());

/// Infers the scalar type of a literal.
///
/// An integer literal outside the `i64` range, or a real literal too large
/// for `f64`, is rejected rather than converted.
pub fn infer(literal: &str) -> Result<Value> {
    if INTEGER.is_match(literal) {
        return literal.parse::<i64>().map(Value::Int).map_err(|_| {
            Error::malformed(format!("integer {literal:?} is out of range"))
        });
    }
    if REAL.is_match(literal) {
        return match literal.parse::<f64>() {
            Ok(r) if r.is_finite() => Ok(Value::Real(r)),
            _ => Err(Error::malformed(format!("real {literal:?} is out of range"))),
        };
    }
    Ok(match literal {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Str(literal.to_string()),
    })
}

pub(crate) fn parse(s: &str) -> Result<Store> {
    let mut store = Store::new();
    if s.is_empty() {
        return Ok(store);
    }
    for (index, segment) in s.split(SEPARATOR).enumerate() {
        let (key, literal) = assignment(index, segment)?;
        let value = infer(literal)?;
        log::trace!("Parsed argument {key} = {value:?}");
        store.add(key, value);
    }
    Ok(store)
}

fn assignment(index: usize, segment: &str) -> Result<(&str, &str)> {
    let mut parts = segment.split(ASSIGN);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(""), Some(_), None) => Err(Error::malformed(format!(
            "segment {index} ({segment:?}) has an empty key"
        ))),
        (Some(key), Some(literal), None) => Ok((key, literal)),
        _ => Err(Error::malformed(format!(
            "segment {index} ({segment:?}) must contain exactly one '{ASSIGN}'"
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn value(literal: &str) -> Value {
        infer(literal).unwrap()
    }

    #[test]
    fn infers_integers() {
        assert_eq!(value("200"), Value::Int(200));
        assert_eq!(value("-17"), Value::Int(-17));
        assert_eq!(value("+3"), Value::Int(3));
        assert_eq!(value("007"), Value::Int(7));
        assert_eq!(value("9223372036854775807"), Value::Int(i64::MAX));
    }

    #[test]
    fn infers_reals() {
        assert_eq!(value("1E-10"), Value::Real(1E-10));
        assert_eq!(value("0.5"), Value::Real(0.5));
        assert_eq!(value(".25"), Value::Real(0.25));
        assert_eq!(value("3."), Value::Real(3.0));
        assert_eq!(value("-2.5e3"), Value::Real(-2500.0));
    }

    #[test]
    fn infers_booleans_case_sensitively() {
        assert_eq!(value("true"), Value::Bool(true));
        assert_eq!(value("false"), Value::Bool(false));
        assert_eq!(value("True"), Value::Str("True".to_string()));
        assert_eq!(value("FALSE"), Value::Str("FALSE".to_string()));
    }

    #[test]
    fn falls_back_to_strings() {
        assert_eq!(value("some_string"), Value::Str("some_string".to_string()));
        assert_eq!(value("inf"), Value::Str("inf".to_string()));
        assert_eq!(value("NaN"), Value::Str("NaN".to_string()));
        assert_eq!(value("1e"), Value::Str("1e".to_string()));
        assert_eq!(value("0x10"), Value::Str("0x10".to_string()));
        assert_eq!(value(" 200"), Value::Str(" 200".to_string()));
        assert_eq!(value(""), Value::Str(String::new()));
    }

    #[test]
    fn rejects_integers_out_of_range() {
        for literal in ["99999999999999999999", "9223372036854775808", "-9223372036854775809"] {
            assert!(
                matches!(infer(literal), Err(Error::MalformedConstruction { .. })),
                "{literal:?} should be rejected"
            );
        }
        assert!(matches!(
            parse("Size=9223372036854775809"),
            Err(Error::MalformedConstruction { .. })
        ));
    }

    #[test]
    fn rejects_infinite_reals() {
        for literal in ["1E400", "-1e309", "1.5e99999"] {
            assert!(
                matches!(infer(literal), Err(Error::MalformedConstruction { .. })),
                "{literal:?} should be rejected"
            );
        }
        assert!(matches!(
            parse("Cutoff=1E400"),
            Err(Error::MalformedConstruction { .. })
        ));
    }

    #[test]
    fn parses_example() {
        let store = parse("Name=some_string,Size=200,Threshold=1E-10").unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("Name"), Some(&Value::Str("some_string".to_string())));
        assert_eq!(store.get("Size"), Some(&Value::Int(200)));
        assert_eq!(store.get("Threshold"), Some(&Value::Real(1E-10)));
    }

    #[test]
    fn keeps_whitespace() {
        let store = parse("Name= psi ,Size=200").unwrap();
        assert_eq!(store.get("Name"), Some(&Value::Str(" psi ".to_string())));
        assert_eq!(store.get("Size"), Some(&Value::Int(200)));

        let store = parse("Name =x").unwrap();
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["Name "]);
        assert!(!store.defined("Name"));

        let store = parse(" =5").unwrap();
        assert_eq!(store.get(" "), Some(&Value::Int(5)));
    }

    #[test]
    fn empty_input_is_empty_store() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn later_assignments_win() {
        let store = parse("Maxm=10,Maxm=20").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Maxm"), Some(&Value::Int(20)));
    }

    #[test]
    fn empty_literal_is_empty_string() {
        let store = parse("Name=").unwrap();
        assert_eq!(store.get("Name"), Some(&Value::Str(String::new())));
    }

    #[test]
    fn rejects_malformed_segments() {
        for s in ["Name", "Name=a=b", "=5", "   ", "A=1,", "A=1,,B=2", "A=1,B"] {
            assert!(
                matches!(parse(s), Err(Error::MalformedConstruction { .. })),
                "{s:?} should be rejected"
            );
        }
    }
}
