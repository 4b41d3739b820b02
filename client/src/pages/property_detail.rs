//! Listing detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::mock::{parse_property_id, property_detail};
use crate::state::gallery::Gallery;
use crate::util::format::{format_area, format_rub};

/// `/property/:id`. Unknown or malformed ids show listing 1.
#[component]
pub fn PropertyDetailPage() -> impl IntoView {
    let params = use_params_map();
    let detail = Memo::new(move |_| property_detail(parse_property_id(params.read().get("id").as_deref())));
    // Thumbnail pick, keyed by listing so a new id starts on the first image.
    let picked = RwSignal::new(None::<(u32, usize)>);
    let gallery = Memo::new(move |_| {
        detail.with(|d| {
            let index = picked
                .get()
                .filter(|(id, _)| *id == d.property.id)
                .map_or(0, |(_, index)| index);
            Gallery::at(d.property.images.len(), index)
        })
    });

    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                let _ = history.back();
            }
        }
    };

    let main_image = move || {
        detail.with(|d| {
            gallery
                .with(|g| g.current(&d.property.images).map(str::to_owned))
                .unwrap_or_default()
        })
    };

    let thumbnails = move || {
        detail.with(|d| {
            d.property
                .images
                .iter()
                .enumerate()
                .map(|(index, src)| {
                    let src = src.clone();
                    view! {
                        <button
                            class="gallery__thumb"
                            class=("gallery__thumb--active", move || gallery.with(|g| g.selected() == index))
                            on:click=move |_| picked.set(Some((detail.with_untracked(|d| d.property.id), index)))
                        >
                            <img src=src alt=format!("Фото {}", index + 1)/>
                        </button>
                    }
                })
                .collect_view()
        })
    };

    let features = move || {
        detail.with(|d| {
            d.features
                .iter()
                .map(|feature| view! { <li class="features__item">{feature.clone()}</li> })
                .collect_view()
        })
    };

    let property = move || detail.with(|d| d.property.clone());
    let owner = move || detail.with(|d| d.owner.clone());

    view! {
        <div class="detail container">
            <button class="btn btn--ghost detail__back" on:click=on_back>"← Назад к списку"</button>

            <div class="detail__layout">
                <div class="detail__main">
                    <div class="gallery">
                        <div class="gallery__main">
                            <img src=main_image alt=move || property().title/>
                            <span class="badge badge--gold gallery__badge">
                                {move || property().property_type.label()}
                            </span>
                        </div>
                        <div class="gallery__thumbs">{thumbnails}</div>
                    </div>

                    <section class="panel">
                        <h1 class="detail__title">{move || property().title}</h1>
                        <p class="detail__address">{move || property().address}</p>
                        <dl class="detail__facts">
                            <div>
                                <dt>"Площадь"</dt>
                                <dd>{move || format!("{} м²", format_area(property().area))}</dd>
                            </div>
                            <div>
                                <dt>"Комнат"</dt>
                                <dd>{move || property().rooms}</dd>
                            </div>
                            <div>
                                <dt>"Этаж"</dt>
                                <dd>{move || property().floor_label().unwrap_or_else(|| "—".to_owned())}</dd>
                            </div>
                            <div>
                                <dt>"Тип"</dt>
                                <dd>{move || property().property_type.label()}</dd>
                            </div>
                        </dl>
                        <div class="panel__section">
                            <h2>"Описание"</h2>
                            <p class="text-muted">{move || property().description}</p>
                        </div>
                        <div class="panel__section">
                            <h2>"Особенности"</h2>
                            <ul class="features">{features}</ul>
                        </div>
                    </section>
                </div>

                <aside class="detail__side panel">
                    <div>
                        <div class="text-muted">"Цена"</div>
                        <div class="detail__price">{move || format_rub(property().price)}</div>
                        <div class="text-muted">
                            {move || {
                                property()
                                    .price_per_square_meter()
                                    .map(|per_meter| format!("{} за м²", format_rub(per_meter)))
                            }}
                        </div>
                    </div>

                    <div class="panel__section">
                        <h3>"Продавец"</h3>
                        <div class="owner">
                            <span class="avatar avatar--md">{move || owner().initials()}</span>
                            <div>
                                <div class="owner__name">{move || owner().full_name()}</div>
                                <div class="text-muted">"Собственник"</div>
                            </div>
                        </div>
                        <a class="btn btn--gold btn--block" href=move || format!("tel:{}", owner().phone)>
                            {move || owner().phone}
                        </a>
                        <button class="btn btn--outline btn--block">"Написать сообщение"</button>
                    </div>

                    <div class="panel__section">
                        <button class="btn btn--ghost btn--block">"♡ Добавить в избранное"</button>
                        <button class="btn btn--ghost btn--block">"Поделиться"</button>
                    </div>
                </aside>
            </div>
        </div>
    }
}
