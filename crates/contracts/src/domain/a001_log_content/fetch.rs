//! Outcome handling for one content request.

use serde_json::Value;
use thiserror::Error;

use super::payload::ContentData;
use crate::shared::api_response::ApiResponse;
use crate::shared::i18n::keys;

/// Why the modal could not show content. Both variants end with the modal
/// closed and a notification shown; neither is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    /// The endpoint answered with `success: false`
    #[error("log content request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Logical { message: Option<String> },
    /// The request itself failed: network, status or body decoding
    #[error("log content request failed: {description}")]
    Transport { description: String },
}

impl LoadFailure {
    pub fn transport(description: impl Into<String>) -> Self {
        LoadFailure::Transport {
            description: description.into(),
        }
    }

    /// Localized text for the error notification.
    pub fn notification(&self, t: impl Fn(&str) -> String) -> String {
        match self {
            LoadFailure::Logical { message } => match message.as_deref() {
                Some(message) if !message.is_empty() => message.to_string(),
                _ => t(keys::LOAD_FAILED),
            },
            LoadFailure::Transport { description } => {
                format!("{}{}", t(keys::LOAD_FAILED_PREFIX), description)
            }
        }
    }
}

pub fn resolve_response(response: ApiResponse<Value>) -> Result<ContentData, LoadFailure> {
    if response.success {
        Ok(ContentData::from_api_data(response.data.as_ref()))
    } else {
        Err(LoadFailure::Logical {
            message: response.message,
        })
    }
}

/// Identifier to fetch for the current props, if any. `0` is not a log id.
pub fn fetch_target(visible: bool, log_id: Option<i64>) -> Option<i64> {
    if !visible {
        return None;
    }
    log_id.filter(|id| *id != 0)
}

/// What a change of `(visible, log_id)` asks the modal to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
    Fetch(i64),
    /// The modal lost its target; outstanding requests are abandoned
    Cancel,
    Unchanged,
}

/// Remembers the last fetch target so that re-setting the same props
/// does not refetch, while hiding and showing again does.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTrigger {
    last: Option<i64>,
}

impl FetchTrigger {
    pub fn observe(&mut self, visible: bool, log_id: Option<i64>) -> TriggerAction {
        let target = fetch_target(visible, log_id);
        if target == self.last {
            return TriggerAction::Unchanged;
        }
        self.last = target;
        match target {
            Some(id) => TriggerAction::Fetch(id),
            None => TriggerAction::Cancel,
        }
    }
}

/// Tokens for in-flight requests. Only the most recently started request
/// may update state when it completes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSequence {
    current: u64,
}

impl RequestSequence {
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current == token
    }

    /// Makes every outstanding token stale, e.g. when the modal closes.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }
}

/// Per-modal fetch state: spinner flag, shown content, request tokens.
#[derive(Debug, Clone, Default)]
pub struct LoadState {
    pub loading: bool,
    pub content: ContentData,
    sequence: RequestSequence,
}

/// Side effects the caller performs after a request completes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Text for the error notification
    pub notify: Option<String>,
    /// Whether the owner must be asked to close the modal
    pub close: bool,
}

impl LoadState {
    /// Marks a request as started and returns its token
    pub fn start(&mut self) -> u64 {
        self.loading = true;
        self.sequence.begin()
    }

    pub fn cancel(&mut self) {
        self.sequence.invalidate();
        self.loading = false;
    }

    /// Applies the result of request `token`.
    ///
    /// A superseded token changes nothing and asks for nothing. Otherwise
    /// the loading flag is cleared; success replaces the content, failure
    /// keeps it and asks for a notification and a close.
    pub fn complete(
        &mut self,
        token: u64,
        result: Result<ContentData, LoadFailure>,
        t: impl Fn(&str) -> String,
    ) -> Completion {
        if !self.sequence.is_current(token) {
            return Completion::default();
        }
        self.loading = false;
        match result {
            Ok(content) => {
                self.content = content;
                Completion::default()
            }
            Err(failure) => Completion {
                notify: Some(failure.notification(t)),
                close: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn english(key: &str) -> String {
        key.to_string()
    }

    #[test]
    fn test_resolve_success() {
        let response: ApiResponse<Value> = serde_json::from_value(json!({
            "success": true,
            "data": { "request_body": "hello" }
        }))
        .unwrap();
        let content = resolve_response(response).unwrap();
        assert_eq!(content.request, Some(json!("hello")));
        assert_eq!(content.response, None);
    }

    #[test]
    fn test_resolve_logical_failure() {
        let response: ApiResponse<Value> =
            serde_json::from_value(json!({ "success": false, "message": "not found" })).unwrap();
        let failure = resolve_response(response).unwrap_err();
        assert_eq!(failure.notification(english), "not found");

        let bare: ApiResponse<Value> =
            serde_json::from_value(json!({ "success": false })).unwrap();
        let failure = resolve_response(bare).unwrap_err();
        assert_eq!(failure.notification(english), "Load failed");
    }

    #[test]
    fn test_transport_notification_has_prefix() {
        let failure = LoadFailure::transport("timeout");
        let text = failure.notification(english);
        assert!(text.starts_with("Load failed: "));
        assert!(text.ends_with("timeout"));
    }

    #[test]
    fn test_fetch_target() {
        assert_eq!(fetch_target(true, Some(12)), Some(12));
        assert_eq!(fetch_target(false, Some(12)), None);
        assert_eq!(fetch_target(true, None), None);
        assert_eq!(fetch_target(true, Some(0)), None);
    }

    #[test]
    fn test_request_sequence_last_wins() {
        let mut sequence = RequestSequence::default();
        let first = sequence.begin();
        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));

        sequence.invalidate();
        assert!(!sequence.is_current(second));
    }

    fn loaded_state() -> LoadState {
        let mut state = LoadState::default();
        let token = state.start();
        let content = ContentData::from_api_data(Some(&json!({ "request_body": "before" })));
        state.complete(token, Ok(content), english);
        state
    }

    #[test]
    fn test_complete_success_replaces_content() {
        let mut state = loaded_state();
        let token = state.start();
        assert!(state.loading);

        let content = ContentData::from_api_data(Some(&json!({ "response_body": "{\"a\":1}" })));
        let completion = state.complete(token, Ok(content.clone()), english);
        assert_eq!(completion, Completion::default());
        assert!(!state.loading);
        assert_eq!(state.content, content);
    }

    #[test]
    fn test_complete_logical_failure_keeps_content() {
        let mut state = loaded_state();
        let before = state.content.clone();
        let token = state.start();

        let completion = state.complete(
            token,
            Err(LoadFailure::Logical {
                message: Some("not found".to_string()),
            }),
            english,
        );
        assert_eq!(completion.notify.as_deref(), Some("not found"));
        assert!(completion.close);
        assert!(!state.loading);
        assert_eq!(state.content, before);
    }

    #[test]
    fn test_complete_transport_failure_keeps_content() {
        let mut state = loaded_state();
        let before = state.content.clone();
        let token = state.start();

        let completion = state.complete(token, Err(LoadFailure::transport("timeout")), english);
        assert_eq!(completion.notify.as_deref(), Some("Load failed: timeout"));
        assert!(completion.close);
        assert!(!state.loading);
        assert_eq!(state.content, before);
    }

    #[test]
    fn test_complete_stale_results_are_dropped() {
        let mut state = loaded_state();
        let before = state.content.clone();
        let first = state.start();
        let second = state.start();

        let stale_failure = state.complete(first, Err(LoadFailure::transport("timeout")), english);
        assert_eq!(stale_failure, Completion::default());
        assert!(state.loading);

        let stale_success = state.complete(first, Ok(ContentData::default()), english);
        assert_eq!(stale_success, Completion::default());
        assert_eq!(state.content, before);

        let current = state.complete(second, Ok(ContentData::default()), english);
        assert_eq!(current, Completion::default());
        assert!(!state.loading);
        assert_eq!(state.content, ContentData::default());
    }

    #[test]
    fn test_cancel_drops_in_flight_request() {
        let mut state = loaded_state();
        let token = state.start();
        state.cancel();
        assert!(!state.loading);

        let completion = state.complete(token, Err(LoadFailure::transport("timeout")), english);
        assert_eq!(completion, Completion::default());
    }

    #[test]
    fn test_trigger_fetches_once_per_transition() {
        let mut trigger = FetchTrigger::default();
        let changes = [
            (false, Some(5)),
            (true, Some(5)),
            (true, Some(5)),
            (true, Some(5)),
            (true, Some(6)),
            (false, Some(6)),
            (false, None),
            (true, Some(6)),
            (true, None),
            (true, Some(0)),
        ];
        let actions: Vec<TriggerAction> = changes
            .into_iter()
            .map(|(visible, log_id)| trigger.observe(visible, log_id))
            .collect();
        assert_eq!(
            actions,
            vec![
                TriggerAction::Unchanged,
                TriggerAction::Fetch(5),
                TriggerAction::Unchanged,
                TriggerAction::Unchanged,
                TriggerAction::Fetch(6),
                TriggerAction::Cancel,
                TriggerAction::Unchanged,
                TriggerAction::Fetch(6),
                TriggerAction::Cancel,
                TriggerAction::Unchanged,
            ]
        );
    }
}
