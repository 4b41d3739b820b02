//! Shared modal frame: backdrop, title block, Escape handling.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use leptos::prelude::*;

/// Keys that dismiss an open dialog.
fn closes_dialog(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Backdrop click and Escape both request close; clicks inside the dialog
/// body do not propagate to the backdrop. The dialog takes focus when it
/// opens so Escape works before anything inside is clicked.
#[component]
pub fn Dialog(
    title: &'static str,
    description: &'static str,
    on_close: Callback<()>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let on_backdrop = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if closes_dialog(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = node.get() {
            let _ = el.focus();
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                node_ref=node
                class=format!("dialog {class}")
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <button class="dialog__close" title="Закрыть" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                <h2 class="dialog__title">{title}</h2>
                <p class="dialog__description">{description}</p>
                {children()}
            </div>
        </div>
    }
}
