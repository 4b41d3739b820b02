//! Filter selectors for the catalog and map pages.
//!
//! Selections are recorded in the signal but do not narrow any listing.

use leptos::prelude::*;

use crate::state::filters::{AreaFilter, CatalogFilters, PriceFilter, TypeFilter};

#[component]
pub fn PropertyFilters(
    filters: RwSignal<CatalogFilters>,
    /// Adds the floor-area selector and the apply button (map toolbar).
    #[prop(optional)]
    extended: bool,
) -> impl IntoView {
    let type_options = TypeFilter::ALL
        .into_iter()
        .map(|f| view! { <option value=f.value()>{f.label()}</option> })
        .collect_view();
    let price_options = PriceFilter::ALL
        .into_iter()
        .map(|f| view! { <option value=f.value()>{f.label()}</option> })
        .collect_view();

    view! {
        <div class="filters">
            <select
                class="filters__select"
                prop:value=move || filters.with(|f| f.property_type.value())
                on:change=move |ev| {
                    let value = TypeFilter::from_value(&event_target_value(&ev));
                    filters.update(|f| f.property_type = value);
                }
            >
                {type_options}
            </select>
            <select
                class="filters__select"
                prop:value=move || filters.with(|f| f.price.value())
                on:change=move |ev| {
                    let value = PriceFilter::from_value(&event_target_value(&ev));
                    filters.update(|f| f.price = value);
                }
            >
                {price_options}
            </select>
            <Show when=move || extended>
                <select
                    class="filters__select"
                    prop:value=move || filters.with(|f| f.area.value())
                    on:change=move |ev| {
                        let value = AreaFilter::from_value(&event_target_value(&ev));
                        filters.update(|f| f.area = value);
                    }
                >
                    {AreaFilter::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.value()>{f.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn--gold">"Применить"</button>
            </Show>
        </div>
    }
}
