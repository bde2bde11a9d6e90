//! Log content lookup: open the content modal for a log id typed by hand.

use contracts::shared::i18n::{keys, Locale};
use leptos::prelude::*;
use thaw::*;

use super::modal::LogContentModal;
use crate::shared::notifications::use_notifications;

fn browser_locale() -> Locale {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map(|tag| Locale::from_tag(&tag))
        .unwrap_or_default()
}

/// Accepts positive integer ids only
fn parse_log_id(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[component]
pub fn LogContentLookup() -> impl IntoView {
    let notifications = use_notifications();
    let locale = browser_locale();
    let translate = Callback::new(move |key: String| locale.translate(&key));
    let tr = move |key: &str| translate.run(key.to_string());

    let input = RwSignal::new(String::new());
    let visible = RwSignal::new(false);
    let log_id = RwSignal::new(None::<i64>);

    let open = move |_| match parse_log_id(&input.get_untracked()) {
        Some(id) => {
            log_id.set(Some(id));
            visible.set(true);
        }
        None => notifications.info(tr(keys::ENTER_LOG_ID)),
    };

    let on_close = Callback::new(move |_: ()| visible.set(false));

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">{tr(keys::LOG_DETAILS)}</h1>
            </div>
            <div class="page__content">
                <Flex gap=FlexGap::Small style="align-items: center; max-width: 480px;">
                    <Input value=input placeholder=tr(keys::LOG_ID) />
                    <Button appearance=ButtonAppearance::Primary on_click=open>
                        {tr(keys::SHOW_CONTENT)}
                    </Button>
                </Flex>
            </div>
            <LogContentModal visible=visible on_close=on_close log_id=log_id t=translate />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_id() {
        assert_eq!(parse_log_id("42"), Some(42));
        assert_eq!(parse_log_id(" 7 "), Some(7));
        assert_eq!(parse_log_id("0"), None);
        assert_eq!(parse_log_id("-3"), None);
        assert_eq!(parse_log_id("abc"), None);
        assert_eq!(parse_log_id(""), None);
    }
}
