//! Request/response viewer for a single log entry.

mod view_model;

pub use view_model::LogContentModalVm;

use contracts::domain::a001_log_content::{ContentView, FetchTrigger, TriggerAction};
use contracts::shared::i18n::{keys, Locale};
use leptos::prelude::*;
use thaw::Spinner;

use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;

const CONTENT_BOX_STYLE: &str = "background: #f7f7f7; padding: 16px; border-radius: 4px; max-height: 300px; overflow: auto;";
const CONTENT_PRE_STYLE: &str = "margin: 0; font-family: ui-monospace, SFMono-Regular, SF Mono, Menlo, Consolas, monospace; font-size: 13px; line-height: 1.45; white-space: pre-wrap; word-break: break-word;";

/// Modal with the recorded request and response bodies of one log entry.
///
/// Content is fetched whenever the modal becomes visible with a log id, or
/// the id changes while visible. Load failures close the modal through
/// `on_close` after showing an error toast.
#[component]
pub fn LogContentModal(
    /// Whether the modal is shown
    #[prop(into)]
    visible: Signal<bool>,
    /// Asks the owner to hide the modal
    #[prop(into)]
    on_close: Callback<()>,
    /// Log entry to show; `None` (or 0) means nothing to fetch
    #[prop(into)]
    log_id: Signal<Option<i64>>,
    /// Translation function; untranslated keys are shown as is
    #[prop(optional, into)]
    t: Option<Callback<String, String>>,
) -> impl IntoView {
    let translate = t.unwrap_or_else(|| Callback::new(|key: String| Locale::En.translate(&key)));
    let notifications = use_notifications();
    let vm = LogContentModalVm::new();

    let trigger = StoredValue::new(FetchTrigger::default());
    Effect::new(move |_| {
        let (visible, log_id) = (visible.get(), log_id.get());
        let mut current = trigger.get_value();
        let action = current.observe(visible, log_id);
        trigger.set_value(current);
        match action {
            TriggerAction::Fetch(id) => vm.load(id, translate, on_close, notifications),
            TriggerAction::Cancel => vm.cancel(),
            TriggerAction::Unchanged => {}
        }
    });

    let tr = move |key: &str| translate.run(key.to_string());

    view! {
        <Show when=move || visible.get()>
            <Modal title=tr(keys::LOG_DETAILS) on_close=on_close>
                {move || match vm.view() {
                    ContentView::Loading => {
                        view! {
                            <div class="log-content__loading" style="text-align: center; padding: 50px 0;">
                                <Spinner />
                            </div>
                        }
                            .into_any()
                    }
                    ContentView::Sections { request, response } => {
                        view! {
                            <div class="log-content">
                                {request
                                    .map(|text| {
                                        view! {
                                            <ContentSection
                                                title=tr(keys::REQUEST_CONTENT)
                                                text=text
                                                spaced=true
                                            />
                                        }
                                    })}
                                {response
                                    .map(|text| {
                                        view! {
                                            <ContentSection
                                                title=tr(keys::RESPONSE_CONTENT)
                                                text=text
                                                spaced=false
                                            />
                                        }
                                    })}
                            </div>
                        }
                            .into_any()
                    }
                    ContentView::Empty => {
                        view! {
                            <div class="log-content__empty" style="padding: 32px 0; text-align: center; color: var(--color-text-secondary, #888);">
                                {icon("inbox")}
                                <p>{tr(keys::NO_CONTENT_RECORDED)}</p>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Modal>
        </Show>
    }
}

/// One titled, scrollable monospace block
#[component]
fn ContentSection(title: String, text: String, spaced: bool) -> impl IntoView {
    let style = if spaced { "margin-bottom: 24px;" } else { "" };
    view! {
        <div class="log-content__section" style=style>
            <h5 class="log-content__title">{title}</h5>
            <div class="log-content__box" style=CONTENT_BOX_STYLE>
                <pre class="log-content__pre" style=CONTENT_PRE_STYLE>
                    {text}
                </pre>
            </div>
        </div>
    }
}
