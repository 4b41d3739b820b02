//! Landing banner.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::mock::HERO_IMAGE;

#[component]
pub fn Hero(on_get_started: Callback<()>) -> impl IntoView {
    view! {
        <section class="hero" style=format!("background-image: url({HERO_IMAGE})")>
            <div class="hero__shade"></div>
            <div class="hero__content container">
                <h1 class="hero__title">
                    "Премиальная недвижимость"
                    <br/>
                    <span class="text-gold">"вашей мечты"</span>
                </h1>
                <p class="hero__lead">
                    "Эксклюзивные объекты в лучших локациях города. Найдите идеальное пространство для жизни и инвестиций."
                </p>
                <div class="hero__actions">
                    <button class="btn btn--gold btn--lg" on:click=move |_| on_get_started.run(())>
                        "Начать поиск"
                    </button>
                    <A href="/map" attr:class="btn btn--outline btn--lg">"Открыть карту"</A>
                </div>
                <dl class="hero__stats">
                    <div><dt>"500+"</dt><dd>"Объектов"</dd></div>
                    <div><dt>"1000+"</dt><dd>"Клиентов"</dd></div>
                    <div><dt>"15+"</dt><dd>"Лет опыта"</dd></div>
                </dl>
            </div>
        </section>
    }
}
