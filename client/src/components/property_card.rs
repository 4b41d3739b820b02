//! Listing card used by the catalog grid and the map overlay.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::types::Property;
use crate::util::format::{format_area, format_rub};

#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let href = format!("/property/{}", property.id);
    let image = property.primary_image().unwrap_or_default().to_owned();

    view! {
        <article class="property-card">
            <div class="property-card__media">
                <img src=image alt=property.title.clone()/>
                <span class="badge badge--gold property-card__badge">{property.property_type.label()}</span>
                <button class="property-card__favorite" title="В избранное">"♡"</button>
            </div>
            <div class="property-card__body">
                <h3 class="property-card__title">{property.title.clone()}</h3>
                <p class="property-card__address">{property.address.clone()}</p>
                <div class="property-card__facts">
                    <span>{format!("{} м²", format_area(property.area))}</span>
                    <span>{format!("{} комн.", property.rooms)}</span>
                </div>
                <div class="property-card__footer">
                    <span class="property-card__price">{format_rub(property.price)}</span>
                    <A href=href attr:class="btn btn--gold">"Подробнее"</A>
                </div>
            </div>
        </article>
    }
}
