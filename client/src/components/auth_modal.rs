//! Login / registration dialog.

use leptos::prelude::*;

use super::dialog::Dialog;
use super::on_field;
use crate::forms::auth::{AuthAttempt, AuthForm, AuthTab};
use crate::forms::submit_modal;
use crate::types::User;
use crate::util::auth::AuthService;

/// Two-tab auth dialog. Credentials go to the `AuthService` in context;
/// the resulting user is handed to `on_login`.
#[component]
pub fn AuthModal(on_close: Callback<()>, on_login: Callback<User>) -> impl IntoView {
    let service = expect_context::<AuthService>();
    let form = RwSignal::new(AuthForm::default());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let attempt = AuthAttempt {
            form: &current,
            service: &service,
        };
        if let Err(e) = submit_modal(&attempt, |user| on_login.run(user), || on_close.run(())) {
            error.set(Some(e.to_string()));
        }
    };

    let select_tab = move |tab: AuthTab| {
        error.set(None);
        form.update(|f| f.tab = tab);
    };
    let is_tab = move |tab: AuthTab| form.with(|f| f.tab == tab);
    let tab_button = move |tab: AuthTab| {
        view! {
            <button
                type="button"
                class="tabs__trigger"
                class=("tabs__trigger--active", move || is_tab(tab))
                on:click=move |_| select_tab(tab)
            >
                {tab.label()}
            </button>
        }
    };

    view! {
        <Dialog
            title="Движ.Ок"
            description="Войдите или зарегистрируйтесь для доступа к платформе"
            on_close=on_close
            class="dialog--auth"
        >
            <div class="tabs">
                {tab_button(AuthTab::Login)}
                {tab_button(AuthTab::Register)}
            </div>
            <form class="form" on:submit=on_submit novalidate=true>
                <Show
                    when=move || is_tab(AuthTab::Login)
                    fallback=move || view! {
                        <div class="form__row form__row--2">
                            <label class="form__field">
                                "Имя"
                                <input
                                    placeholder="Иван"
                                    prop:value=move || form.with(|f| f.register.first_name.clone())
                                    on:input=on_field(form, |f, v| f.register.first_name = v)
                                />
                            </label>
                            <label class="form__field">
                                "Фамилия"
                                <input
                                    placeholder="Петров"
                                    prop:value=move || form.with(|f| f.register.last_name.clone())
                                    on:input=on_field(form, |f, v| f.register.last_name = v)
                                />
                            </label>
                        </div>
                        <label class="form__field">
                            "Email"
                            <input
                                type="email"
                                placeholder="your@email.com"
                                prop:value=move || form.with(|f| f.register.email.clone())
                                on:input=on_field(form, |f, v| f.register.email = v)
                            />
                        </label>
                        <label class="form__field">
                            "Пароль"
                            <input
                                type="password"
                                placeholder="••••••••"
                                prop:value=move || form.with(|f| f.register.password.clone())
                                on:input=on_field(form, |f, v| f.register.password = v)
                            />
                        </label>
                    }
                >
                    <label class="form__field">
                        "Email"
                        <input
                            type="email"
                            placeholder="your@email.com"
                            prop:value=move || form.with(|f| f.login.email.clone())
                            on:input=on_field(form, |f, v| f.login.email = v)
                        />
                    </label>
                    <label class="form__field">
                        "Пароль"
                        <input
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || form.with(|f| f.login.password.clone())
                            on:input=on_field(form, |f, v| f.login.password = v)
                        />
                    </label>
                </Show>

                <Show when=move || error.with(Option::is_some)>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button type="submit" class="btn btn--gold btn--block">
                    {move || if is_tab(AuthTab::Login) { "Войти" } else { "Зарегистрироваться" }}
                </button>
            </form>
        </Dialog>
    }
}
