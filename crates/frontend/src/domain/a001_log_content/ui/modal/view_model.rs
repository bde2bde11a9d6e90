//! ViewModel for the log content modal

use contracts::domain::a001_log_content::{content_view, resolve_response, ContentView, LoadState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_log_content::api;
use crate::shared::notifications::NotificationService;

/// State owned by one modal instance
#[derive(Clone, Copy)]
pub struct LogContentModalVm {
    /// Loading flag, last loaded content and request tokens
    pub state: RwSignal<LoadState>,
}

impl LogContentModalVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(LoadState::default()),
        }
    }

    /// Current body of the modal
    pub fn view(&self) -> ContentView {
        self.state
            .with(|state| content_view(state.loading, &state.content))
    }

    /// Fetch content for `log_id`.
    ///
    /// On success the content is replaced wholesale. On any failure the
    /// previous content stays, an error toast is shown and `on_close` runs.
    /// Completions of superseded requests are dropped.
    pub fn load(
        &self,
        log_id: i64,
        translate: Callback<String, String>,
        on_close: Callback<()>,
        notifications: NotificationService,
    ) {
        let mut token = 0;
        self.state.update(|state| token = state.start());

        let state = self.state;
        spawn_local(async move {
            let result = api::fetch_log_content(log_id)
                .await
                .and_then(resolve_response);
            if let Err(failure) = &result {
                log::warn!("Failed to load log content {}: {}", log_id, failure);
            }

            let Some(completion) = state.try_update(|state| {
                state.complete(token, result, |key| translate.run(key.to_string()))
            }) else {
                return;
            };

            if let Some(text) = completion.notify {
                notifications.error(text);
            }
            if completion.close {
                on_close.run(());
            }
        });
    }

    /// Forget any in-flight request, e.g. when the modal is hidden
    pub fn cancel(&self) {
        self.state.update(|state| state.cancel());
    }
}
