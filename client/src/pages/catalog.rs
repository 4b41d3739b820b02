//! Landing page: hero, filters, listing grid.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::property_card::PropertyCard;
use crate::components::property_filters::PropertyFilters;
use crate::mock::catalog_properties;
use crate::state::filters::CatalogFilters;
use crate::state::modal::{ModalKind, ModalState};

/// `/`. The grid always lists every property; filters are display-only.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let modals = expect_context::<RwSignal<ModalState>>();
    let filters = RwSignal::new(CatalogFilters::default());
    let on_get_started = Callback::new(move |()| modals.update(|m| m.open(ModalKind::Auth)));

    let properties = catalog_properties();
    let cards = move || {
        filters
            .with(|f| f.visible(&properties))
            .into_iter()
            .map(|property| view! { <PropertyCard property=property/> })
            .collect_view()
    };

    view! {
        <Hero on_get_started=on_get_started/>
        <section class="catalog container">
            <div class="catalog__head">
                <h2 class="text-gold">"Премиальная недвижимость"</h2>
                <PropertyFilters filters=filters/>
            </div>
            <div class="catalog__grid">{cards}</div>
        </section>
    }
}
