use serde_json::Value;

/// Truthiness of a JSON value: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values() {
        for v in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&v), "{v} should be falsy");
        }
    }

    #[test]
    fn test_truthy_values() {
        for v in [json!(true), json!(1), json!(-2.5), json!("x"), json!([0]), json!({"a": null})] {
            assert!(is_truthy(&v), "{v} should be truthy");
        }
    }
}
