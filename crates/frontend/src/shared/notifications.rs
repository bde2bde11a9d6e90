//! Transient error/info toasts.
//!
//! Components push through [`NotificationService`] (provided at the app
//! root); [`NotificationHost`] renders the stack. Each toast removes itself
//! after [`DISMISS_AFTER_MS`].

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

/// Ordered toast stack, oldest first
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, text: String) -> u64 {
        self.next_id += 1;
        self.items.push(Notification {
            id: self.next_id,
            kind,
            text,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NotificationKind::Error, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(NotificationKind::Info, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }

    fn show(&self, kind: NotificationKind, text: String) {
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(kind, text));

        let queue = self.queue;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            queue.try_update(|queue| queue.dismiss(id));
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div
            class="notification-host"
            style="position: fixed; top: 16px; right: 16px; z-index: 2000; display: flex; flex-direction: column; gap: 8px;"
        >
            <For
                each=move || service.queue.with(|queue| queue.items().to_vec())
                key=|item| item.id
                children=move |item: Notification| {
                    let id = item.id;
                    let (class, background) = match item.kind {
                        NotificationKind::Error => ("notification notification--error", "var(--color-error-50, #fdecea)"),
                        NotificationKind::Info => ("notification notification--info", "var(--color-info-50, #e8f1fd)"),
                    };
                    view! {
                        <div
                            class=class
                            role="alert"
                            style=format!("display: flex; align-items: center; gap: 8px; padding: 10px 14px; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,.15); background: {};", background)
                            on:click=move |_| service.dismiss(id)
                        >
                            {icon("alert")}
                            <span>{item.text}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
