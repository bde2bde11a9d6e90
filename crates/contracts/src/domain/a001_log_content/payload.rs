//! Normalization, parsing and the presence rule for stored payloads.
//!
//! A payload is whatever the content endpoint returned for one side of the
//! exchange: nothing, a string (often JSON-encoded), or an already
//! structured value.

use serde_json::Value;

/// Request/response pair currently shown by the modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentData {
    pub request: Option<Value>,
    pub response: Option<Value>,
}

impl ContentData {
    /// Builds the pair from the endpoint's `data` object.
    ///
    /// `request_body` wins over `request`, `response_body` over `response`.
    /// A key holding JSON `null` counts as missing.
    pub fn from_api_data(data: Option<&Value>) -> Self {
        let Some(data) = data else {
            return Self::default();
        };
        Self {
            request: pick(data, "request_body", "request"),
            response: pick(data, "response_body", "response"),
        }
    }

    pub fn has_request(&self) -> bool {
        is_present(self.request.as_ref())
    }

    pub fn has_response(&self) -> bool {
        is_present(self.response.as_ref())
    }
}

fn pick(data: &Value, primary: &str, fallback: &str) -> Option<Value> {
    [primary, fallback]
        .into_iter()
        .filter_map(|key| data.get(key))
        .find(|value| !value.is_null())
        .cloned()
}

/// Result of trying to read a payload as JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedContent {
    /// Structured value: either passed through or decoded from a string
    Parsed(Value),
    /// Text that is not JSON (or no payload at all, as an empty string)
    Raw(String),
}

impl ParsedContent {
    /// Objects and arrays get pretty-printed. JSON `null` is included: the
    /// log viewer always rendered a decoded `null` as the literal `null`.
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            ParsedContent::Parsed(Value::Object(_) | Value::Array(_) | Value::Null)
        )
    }
}

/// Strings are decoded with serde_json's default nesting limit of 128
/// levels. Deeper bodies stay `Raw` and are shown verbatim; decoding them
/// recursively would risk overflowing the wasm stack.
pub fn parse_content(payload: Option<&Value>) -> ParsedContent {
    match payload {
        None | Some(Value::Null) => ParsedContent::Raw(String::new()),
        Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
            Ok(value) => ParsedContent::Parsed(value),
            Err(_) => ParsedContent::Raw(text.clone()),
        },
        Some(other) => ParsedContent::Parsed(other.clone()),
    }
}

/// Presence rule: null, blank strings and empty objects carry no content.
/// Arrays are always present, even when empty.
pub fn is_present(payload: Option<&Value>) -> bool {
    match payload {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.trim_matches(is_blank_char).is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        Some(_) => true,
    }
}

/// Characters a browser's `String.prototype.trim` strips: ASCII blanks,
/// line/paragraph separators, the BOM and the space separators (Zs).
/// Unlike `char::is_whitespace`, U+0085 is kept.
fn is_blank_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Text placed inside the monospace block for one payload.
pub fn display_text(payload: Option<&Value>) -> String {
    let parsed = parse_content(payload);
    if parsed.is_structured() {
        if let ParsedContent::Parsed(value) = &parsed {
            return serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        }
    }
    match payload {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_prefers_body_keys() {
        let data = json!({
            "request_body": "a",
            "request": "b",
            "response": "c"
        });
        let content = ContentData::from_api_data(Some(&data));
        assert_eq!(content.request, Some(json!("a")));
        assert_eq!(content.response, Some(json!("c")));
    }

    #[test]
    fn test_normalize_skips_null_keys() {
        let data = json!({ "request_body": null, "request": "fallback" });
        let content = ContentData::from_api_data(Some(&data));
        assert_eq!(content.request, Some(json!("fallback")));
        assert_eq!(content.response, None);

        assert_eq!(ContentData::from_api_data(None), ContentData::default());
        assert_eq!(
            ContentData::from_api_data(Some(&json!("not an object"))),
            ContentData::default()
        );
    }

    #[test]
    fn test_parse_content() {
        assert_eq!(parse_content(None), ParsedContent::Raw(String::new()));
        assert_eq!(
            parse_content(Some(&json!("hello"))),
            ParsedContent::Raw("hello".to_string())
        );
        assert_eq!(
            parse_content(Some(&json!("{\"a\":1}"))),
            ParsedContent::Parsed(json!({ "a": 1 }))
        );
        assert_eq!(
            parse_content(Some(&json!("42"))),
            ParsedContent::Parsed(json!(42))
        );
        assert_eq!(
            parse_content(Some(&json!([1, 2]))),
            ParsedContent::Parsed(json!([1, 2]))
        );
    }

    #[test]
    fn test_parse_content_is_repeatable() {
        let raw = json!("{\"model\":\"x\",\"stream\":true}");
        let first = parse_content(Some(&raw));
        let second = parse_content(Some(&raw));
        assert_eq!(first, second);
        assert_eq!(raw, json!("{\"model\":\"x\",\"stream\":true}"));
    }

    #[test]
    fn test_presence_rule() {
        assert!(!is_present(None));
        assert!(!is_present(Some(&Value::Null)));
        assert!(!is_present(Some(&json!(""))));
        assert!(!is_present(Some(&json!("  \n\t"))));
        assert!(!is_present(Some(&json!({}))));
        assert!(is_present(Some(&json!({ "x": 1 }))));
        assert!(is_present(Some(&json!([]))));
        assert!(is_present(Some(&json!(0))));
        assert!(is_present(Some(&json!("{}"))));
    }

    #[test]
    fn test_presence_rule_blank_like_browser_trim() {
        assert!(!is_present(Some(&json!("\u{FEFF}"))));
        assert!(!is_present(Some(&json!("\u{FEFF} \u{00A0}\u{3000}\u{2028}"))));
        assert!(is_present(Some(&json!("\u{0085}"))));
        assert!(is_present(Some(&json!("\u{FEFF}x"))));
    }

    #[test]
    fn test_parse_content_nesting_limit() {
        let shallow = format!("{}{}", "[".repeat(100), "]".repeat(100));
        assert!(parse_content(Some(&json!(shallow))).is_structured());

        let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
        assert_eq!(
            parse_content(Some(&json!(deep.clone()))),
            ParsedContent::Raw(deep.clone())
        );
        assert_eq!(display_text(Some(&json!(deep.clone()))), deep);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(display_text(Some(&json!("hello"))), "hello");
        assert_eq!(display_text(Some(&json!("{\"a\":1}"))), "{\n  \"a\": 1\n}");
        assert_eq!(display_text(Some(&json!({ "b": [1] }))), "{\n  \"b\": [\n    1\n  ]\n}");
        // decoded scalars keep the stored text
        assert_eq!(display_text(Some(&json!("\"quoted\""))), "\"quoted\"");
        assert_eq!(display_text(Some(&json!(" 7 "))), " 7 ");
        assert_eq!(display_text(Some(&json!(7))), "7");
        assert_eq!(display_text(Some(&json!("null"))), "null");
    }

    #[test]
    fn test_display_text_keeps_key_order() {
        let text = display_text(Some(&json!("{\"z\":1,\"a\":2}")));
        assert_eq!(text, "{\n  \"z\": 1,\n  \"a\": 2\n}");
    }
}
