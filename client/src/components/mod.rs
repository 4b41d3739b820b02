//! Reusable UI components (header, cards, filters, dialogs).

pub mod add_property_modal;
pub mod auth_modal;
pub mod dialog;
pub mod header;
pub mod hero;
pub mod profile_modal;
pub mod property_card;
pub mod property_filters;

use leptos::prelude::*;

/// `on:input` handler writing the input's value into one field of `form`.
pub(crate) fn on_field<T>(form: RwSignal<T>, apply: fn(&mut T, String)) -> impl Fn(leptos::ev::Event) + Copy + 'static
where
    T: Send + Sync + 'static,
{
    move |ev| {
        let value = event_target_value(&ev);
        form.update(|f| apply(f, value));
    }
}
