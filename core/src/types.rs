//! Wire constants and the request payload for the save-string endpoint.

use serde_json::json;

/// The single endpoint this SDK talks to.
pub const ENDPOINT: &str = "https://us-central1-mobilesdklogging.cloudfunctions.net/saveString";

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// JSON key carrying the submitted value.
pub const BODY_KEY: &str = "myString";

/// Render `{"myString": value}`.
///
/// The value is passed through verbatim; only standard JSON string escaping
/// is applied. Rendering a `serde_json::Value` cannot fail.
pub fn save_string_body(value: &str) -> String {
    json!({ BODY_KEY: value }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_has_exactly_one_key() {
        let body: serde_json::Value = serde_json::from_str(&save_string_body("hello")).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["myString"], "hello");
    }

    #[test]
    fn body_is_compact() {
        assert_eq!(save_string_body("hello"), r#"{"myString":"hello"}"#);
    }

    #[test]
    fn body_escapes_json_specials() {
        assert_eq!(
            save_string_body("a\"b\\c\nd"),
            r#"{"myString":"a\"b\\c\nd"}"#
        );
    }
}
