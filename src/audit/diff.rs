//! Diff generation for audit logging
//!
//! Summarizes what changed between two JSON snapshots of a contact.

use serde_json::Value;

/// Arrays longer than this are summarized by length instead of listed
const MAX_LISTED_ITEMS: usize = 5;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level fields are compared. Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                format!("\"{}...\"", s.chars().take(47).collect::<String>())
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => {
            let scalar = arr.iter().all(|v| !v.is_array() && !v.is_object());
            if scalar && arr.len() <= MAX_LISTED_ITEMS {
                let items: Vec<_> = arr.iter().map(format_value).collect();
                format!("[{}]", items.join(", "))
            } else {
                format!("[{} items]", arr.len())
            }
        }
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phone_list_change() {
        let before = json!({"name": "John", "phones": ["1111111111"]});
        let after = json!({"name": "John", "phones": ["2222222222"]});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "phones: [\"1111111111\"] -> [\"2222222222\"]");
    }

    #[test]
    fn test_birthday_added() {
        let before = json!({"name": "John", "phones": []});
        let after = json!({"name": "John", "phones": [], "birthday": "2000-06-15"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "birthday: (added) -> \"2000-06-15\"");
    }

    #[test]
    fn test_field_removed() {
        let before = json!({"name": "Test", "birthday": "2000-06-15"});
        let after = json!({"name": "Test"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("birthday: \"2000-06-15\" -> (removed)"));
    }

    #[test]
    fn test_no_changes() {
        let before = json!({"name": "Test", "phones": ["1111111111"]});
        assert!(generate_diff(&before, &before.clone()).is_none());
    }

    #[test]
    fn test_non_object_values() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)),
            Some("1 -> 2".to_string())
        );
        assert!(generate_diff(&json!("a"), &json!("a")).is_none());
    }

    #[test]
    fn test_long_array_summarized() {
        let before = json!({"phones": []});
        let after = json!({"phones": ["1", "2", "3", "4", "5", "6"]});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "phones: [] -> [6 items]");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!("test")), "\"test\"");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
        assert!(format_value(&json!("a".repeat(100))).ends_with("...\""));
    }
}
