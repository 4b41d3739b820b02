//! Map page: provider map with one marker per listing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The map itself only exists in the browser. On the server the page
//! renders the container and the loading notice; after hydration an effect
//! mounts the provider into the container (`util::map::mount`) and the
//! mount is dropped on cleanup, which removes the script and destroys the
//! map.

use leptos::prelude::*;

use crate::components::property_card::PropertyCard;
use crate::components::property_filters::PropertyFilters;
use crate::state::filters::CatalogFilters;
use crate::state::map::{MapStatus, MapView};

/// `/map`.
#[component]
pub fn MapPage() -> impl IntoView {
    let map_view = RwSignal::new(MapView::default());
    let filters = RwSignal::new(CatalogFilters::default());
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    mount_provider(container, map_view);

    let status = move || {
        map_view.with(|v| match &v.status {
            MapStatus::Loading => Some(view! { <p class="map-page__status">"Загрузка карты…"</p> }.into_any()),
            MapStatus::Ready => None,
            MapStatus::Failed(reason) => Some(
                view! {
                    <div class="map-page__status map-page__status--error" role="alert">
                        <p>"Не удалось загрузить карту"</p>
                        <p class="text-muted">{reason.clone()}</p>
                    </div>
                }
                .into_any(),
            ),
        })
    };

    let overlay = move || {
        map_view.with(|v| v.selected.clone()).map(|property| {
            view! {
                <div class="map-page__overlay">
                    <button
                        class="map-page__overlay-close"
                        title="Закрыть"
                        on:click=move |_| map_view.update(MapView::clear_selection)
                    >
                        "×"
                    </button>
                    <PropertyCard property=property/>
                </div>
            }
        })
    };

    view! {
        <div class="map-page">
            <div class="map-page__canvas" node_ref=container></div>
            <div class="map-page__toolbar">
                <PropertyFilters filters=filters extended=true/>
            </div>
            {status}
            {overlay}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn mount_provider(container: NodeRef<leptos::html::Div>, map_view: RwSignal<MapView>) {
    use leptos::logging::warn;

    use crate::mock::catalog_properties;
    use crate::util::map::MapSettings;
    use crate::util::map::mount::{MapMount, mount};

    let slot = StoredValue::new_local(None::<MapMount>);

    Effect::new(move || {
        let Some(div) = container.get() else {
            return;
        };
        if slot.with_value(Option::is_some) {
            return;
        }
        let element = web_sys::HtmlElement::from(div);
        match mount(element, MapSettings::default(), catalog_properties(), map_view) {
            Ok(mounted) => slot.set_value(Some(mounted)),
            Err(e) => {
                warn!("map mount failed: {e}");
                map_view.update(|v| v.mark_failed(e.to_string()));
            }
        }
    });

    // Dropping the mount removes the script and destroys the map.
    on_cleanup(move || {
        slot.try_update_value(Option::take);
    });
}
