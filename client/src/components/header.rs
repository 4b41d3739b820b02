//! Site header with navigation and the account menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionState;

/// Top bar. Anonymous visitors get a sign-in button; signed-in users get
/// the add-listing button and an account dropdown. All actions are
/// reported through the callbacks.
#[component]
pub fn Header(
    on_auth: Callback<()>,
    on_profile: Callback<()>,
    on_logout: Callback<()>,
    on_add_property: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let menu_open = RwSignal::new(false);

    let run_and_close = move |action: Callback<()>| {
        menu_open.set(false);
        action.run(());
    };

    view! {
        <header class="site-header">
            <div class="site-header__inner container">
                <A href="/" attr:class="site-header__brand">
                    <span class="site-header__logo" aria-hidden="true">"▦"</span>
                    <span class="site-header__name">"Движ.Ок"</span>
                </A>

                <nav class="site-header__nav">
                    <A href="/" exact=true>"Каталог"</A>
                    <A href="/map">"Карта"</A>
                    <a href="#">"О нас"</a>
                </nav>

                <div class="site-header__actions">
                    <Show
                        when=move || session.with(SessionState::is_authenticated)
                        fallback=move || view! {
                            <button class="btn btn--gold" on:click=move |_| on_auth.run(())>"Войти"</button>
                        }
                    >
                        <button class="btn btn--gold" on:click=move |_| on_add_property.run(())>
                            "+ Добавить объект"
                        </button>
                        <div class="account-menu">
                            <button
                                class="btn btn--ghost account-menu__trigger"
                                on:click=move |_| menu_open.update(|open| *open = !*open)
                            >
                                {move || {
                                    let user = session.with(|s| s.user.clone());
                                    match user.as_ref().and_then(|u| u.avatar_url.clone()) {
                                        Some(src) => view! {
                                            <img class="avatar avatar--sm" src=src alt="Avatar"/>
                                        }.into_any(),
                                        None => view! {
                                            <span class="avatar avatar--sm">
                                                {user.as_ref().map(crate::types::User::initials)}
                                            </span>
                                        }.into_any(),
                                    }
                                }}
                                <span class="account-menu__name">
                                    {move || {
                                        session.with(|s| {
                                            s.user.as_ref().map(|u| u.short_name().to_owned())
                                        })
                                    }}
                                </span>
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="account-menu__list">
                                    <button class="account-menu__item" on:click=move |_| run_and_close(on_profile)>
                                        "Личный кабинет"
                                    </button>
                                    <button class="account-menu__item" on:click=move |_| menu_open.set(false)>
                                        "Мои объекты"
                                    </button>
                                    <button
                                        class="account-menu__item account-menu__item--danger"
                                        on:click=move |_| run_and_close(on_logout)
                                    >
                                        "Выйти"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
