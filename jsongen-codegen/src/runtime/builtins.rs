//! Decoders provided by the support library.

use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::Value;

use super::{Decoded, DecodeError, Decoder};

/// Wrap a closure as a [`Decoder`].
pub(crate) fn decoder(f: impl Fn(&Value) -> Option<Decoded> + 'static) -> Decoder {
    Rc::new(f)
}

fn leaf(check: fn(&Value) -> bool) -> Decoder {
    decoder(move |value| check(value).then(|| Decoded::Json(value.clone())))
}

fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

/// Number of decoder arguments a builtin takes, or `None` if `name` is not
/// a builtin.
pub(crate) fn arity(name: &str) -> Option<usize> {
    match name {
        "String" | "Int" | "Double" | "Float" | "Bool" => Some(0),
        "Optional" | "Array" => Some(1),
        "Dictionary" => Some(2),
        _ => None,
    }
}

/// Instantiate the builtin `name` with its decoder arguments.
///
/// Returns `Ok(None)` when `name` is not a builtin.
pub(crate) fn instantiate(name: &str, args: &[Decoder]) -> Result<Option<Decoder>, DecodeError> {
    let Some(expected) = arity(name) else {
        return Ok(None);
    };
    if args.len() != expected {
        return Err(DecodeError::ArityMismatch {
            name: name.to_string(),
            expected,
            found: args.len(),
        });
    }

    let built = match (name, args) {
        ("String", []) => leaf(Value::is_string),
        ("Int", []) => leaf(is_integer),
        ("Double" | "Float", []) => leaf(Value::is_number),
        ("Bool", []) => leaf(Value::is_boolean),
        ("Optional", [wrapped]) => {
            let wrapped = Rc::clone(wrapped);
            decoder(move |value| {
                if value.is_null() {
                    Some(Decoded::none())
                } else {
                    wrapped(value).map(Decoded::some)
                }
            })
        }
        ("Array", [element]) => {
            let element = Rc::clone(element);
            decoder(move |value| {
                value
                    .as_array()?
                    .iter()
                    .map(|item| element(item))
                    .collect::<Option<Vec<_>>>()
                    .map(Decoded::Array)
            })
        }
        ("Dictionary", [key, entry]) => {
            let key = Rc::clone(key);
            let entry = Rc::clone(entry);
            decoder(move |value| {
                let mut out = IndexMap::new();
                for (k, v) in value.as_object()? {
                    key(&Value::String(k.clone()))?;
                    out.insert(k.clone(), entry(v)?);
                }
                Some(Decoded::Dictionary(out))
            })
        }
        _ => return Ok(None),
    };
    Ok(Some(built))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn get(name: &str, args: &[Decoder]) -> Decoder {
        instantiate(name, args).unwrap().unwrap()
    }

    #[test]
    fn test_leaves() {
        assert!(get("Int", &[])(&json!(3)).is_some());
        assert!(get("Int", &[])(&json!(3.5)).is_none());
        assert!(get("Double", &[])(&json!(3)).is_some());
        assert!(get("String", &[])(&json!(3)).is_none());
        assert!(get("Bool", &[])(&json!(false)).is_some());
    }

    #[test]
    fn test_optional_maps_null_to_none() {
        let optional = get("Optional", &[get("Int", &[])]);
        assert_eq!(optional(&json!(null)), Some(Decoded::none()));
        assert_eq!(
            optional(&json!(1)),
            Some(Decoded::some(Decoded::json(1)))
        );
        assert_eq!(optional(&json!("1")), None);
    }

    #[test]
    fn test_array_fails_on_any_element() {
        let array = get("Array", &[get("Int", &[])]);
        assert_eq!(
            array(&json!([1, 2])),
            Some(Decoded::Array(vec![Decoded::json(1), Decoded::json(2)]))
        );
        assert_eq!(array(&json!([1, "2"])), None);
        assert_eq!(array(&json!({})), None);
    }

    #[test]
    fn test_dictionary_keeps_key_order() {
        let dict = get("Dictionary", &[get("String", &[]), get("Int", &[])]);
        let decoded = dict(&json!({ "b": 2, "a": 1 })).unwrap();
        let Decoded::Dictionary(map) = decoded else {
            panic!("expected dictionary");
        };
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn test_dictionary_rejects_keys_failing_key_decoder() {
        let dict = get("Dictionary", &[get("Int", &[]), get("Int", &[])]);
        assert_eq!(dict(&json!({ "a": 1 })), None);
    }

    #[test]
    fn test_arity_mismatch() {
        let err = instantiate("Array", &[]).err().unwrap();
        assert_eq!(
            err,
            DecodeError::ArityMismatch {
                name: "Array".into(),
                expected: 1,
                found: 0
            }
        );
    }

    #[test]
    fn test_unknown_name() {
        assert!(instantiate("Point", &[]).unwrap().is_none());
    }
}
