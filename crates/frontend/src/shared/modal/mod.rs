use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Dialog frame: overlay, header with title and close button, scrollable body.
///
/// Escape, a click on the overlay and the close button all go through
/// `on_close`; the frame never hides itself.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Max width of the dialog in px
    #[prop(default = 900)]
    width: u32,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Handle Escape key
    let escape = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    let dialog_style = format!(
        "width: {}px; max-width: 95vw; max-height: 80vh; display: flex; flex-direction: column;",
        width
    );

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" style=dialog_style on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <div class="modal-header-actions">
                        <button class="button button--icon modal__close" on:click=handle_close>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body" style="max-height: calc(80vh - 100px); overflow: auto;">
                    {children()}
                </div>
            </div>
        </div>
    }
}
