use crate::domain::a001_log_content::ui::LogContentLookup;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Error toasts raised anywhere below (e.g. failed log content loads)
    provide_context(NotificationService::new());

    view! {
        <LogContentLookup />
        <NotificationHost />
    }
}
