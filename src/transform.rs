use serde_json::Value;

/// Rewrites every object key in a JSON value from hyphen/underscore-delimited
/// casing to camelCase, recursing through objects and arrays. Scalars pass
/// through unchanged, so the result is structurally isomorphic to the input.
pub fn camelize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (camelize_key(&key), camelize(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(camelize).collect()),
        scalar => scalar,
    }
}

/// Replaces each "delimiter + letter" pair with the uppercased letter. A
/// delimiter not followed by a letter is kept as-is.
fn camelize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' || c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_alphabetic() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rewrites_keys_at_every_nesting_level() {
        let input = json!({
            "site_admin": true,
            "avatar-url": "x",
            "nested_obj": { "gravatar_id": "y" }
        });
        let expected = json!({
            "siteAdmin": true,
            "avatarUrl": "x",
            "nestedObj": { "gravatarId": "y" }
        });
        assert_eq!(camelize(input), expected);
    }

    #[test]
    fn rewrites_keys_inside_arrays() {
        let input = json!([{ "node_id": "1" }, { "node_id": "2" }]);
        let expected = json!([{ "nodeId": "1" }, { "nodeId": "2" }]);
        assert_eq!(camelize(input), expected);
    }

    #[test]
    fn scalars_are_identity() {
        assert_eq!(camelize(json!(null)), json!(null));
        assert_eq!(camelize(json!(42)), json!(42));
        assert_eq!(camelize(json!("snake_case value")), json!("snake_case value"));
        assert_eq!(camelize(json!(true)), json!(true));
    }

    #[test]
    fn empty_containers_stay_empty() {
        assert_eq!(camelize(json!({})), json!({}));
        assert_eq!(camelize(json!([])), json!([]));
    }

    #[test]
    fn preserves_shape() {
        let input = json!({
            "a_b": [1, 2, 3],
            "c": { "d_e": null, "f": [{ "g_h": 1 }] }
        });
        let out = camelize(input.clone());
        assert_eq!(out.as_object().unwrap().len(), input.as_object().unwrap().len());
        assert_eq!(out["aB"].as_array().unwrap().len(), 3);
        assert_eq!(out["c"]["f"][0]["gH"], json!(1));
    }

    #[test]
    fn only_delimiter_followed_by_letter_is_rewritten() {
        assert_eq!(camelize_key("plain"), "plain");
        assert_eq!(camelize_key("node_id"), "nodeId");
        assert_eq!(camelize_key("avatar-url"), "avatarUrl");
        assert_eq!(camelize_key("a__b"), "a_B");
        assert_eq!(camelize_key("trailing_"), "trailing_");
        assert_eq!(camelize_key("a_1"), "a_1");
        assert_eq!(camelize_key("_leading"), "Leading");
    }

    #[test]
    fn idempotent_on_camelized_input() {
        let input = json!({ "siteAdmin": true, "nested": { "avatarUrl": "x" } });
        assert_eq!(camelize(input.clone()), input);
    }
}
