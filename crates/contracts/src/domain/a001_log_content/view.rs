use super::payload::{display_text, ContentData};

/// The three mutually exclusive states of the modal body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    Loading,
    /// At least one side is present; absent sides are `None` and not rendered
    Sections {
        request: Option<String>,
        response: Option<String>,
    },
    Empty,
}

pub fn content_view(loading: bool, content: &ContentData) -> ContentView {
    if loading {
        return ContentView::Loading;
    }
    let request = content
        .has_request()
        .then(|| display_text(content.request.as_ref()));
    let response = content
        .has_response()
        .then(|| display_text(content.response.as_ref()));
    if request.is_none() && response.is_none() {
        ContentView::Empty
    } else {
        ContentView::Sections { request, response }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loading_hides_everything() {
        let content = ContentData {
            request: Some(json!("hello")),
            response: None,
        };
        assert_eq!(content_view(true, &content), ContentView::Loading);
    }

    #[test]
    fn test_request_only() {
        let content = ContentData::from_api_data(Some(&json!({ "request_body": "hello" })));
        assert_eq!(
            content_view(false, &content),
            ContentView::Sections {
                request: Some("hello".to_string()),
                response: None,
            }
        );
    }

    #[test]
    fn test_response_pretty_printed() {
        let content =
            ContentData::from_api_data(Some(&json!({ "response_body": "{\"a\":1}" })));
        assert_eq!(
            content_view(false, &content),
            ContentView::Sections {
                request: None,
                response: Some("{\n  \"a\": 1\n}".to_string()),
            }
        );
    }

    #[test]
    fn test_blank_fields_render_empty_state() {
        let content = ContentData::from_api_data(Some(&json!({
            "request_body": "",
            "response_body": null
        })));
        assert_eq!(content_view(false, &content), ContentView::Empty);
        assert_eq!(content_view(false, &ContentData::default()), ContentView::Empty);
    }
}
