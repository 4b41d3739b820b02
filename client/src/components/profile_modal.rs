//! Profile editing dialog.

use leptos::prelude::*;

use super::dialog::Dialog;
use super::on_field;
use crate::forms::profile::ProfileForm;
use crate::forms::submit_modal;
use crate::state::session::SessionState;
use crate::types::User;

/// Edits the signed-in user's names and phone. Fields follow the session
/// user whenever it changes; renders nothing while signed out.
#[component]
pub fn ProfileModal(on_close: Callback<()>, on_update: Callback<User>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let form = RwSignal::new(ProfileForm::from_user(
        session.with_untracked(|s| s.user.clone()).as_ref(),
    ));
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let user = session.with(|s| s.user.clone());
        form.set(ProfileForm::from_user(user.as_ref()));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Err(e) = submit_modal(&current, |user| on_update.run(user), || on_close.run(())) {
            error.set(Some(e.to_string()));
        }
    };

    let avatar = move || {
        form.with(|f| {
            let user = f.user()?;
            Some(match &user.avatar_url {
                Some(src) => view! { <img class="avatar avatar--lg" src=src.clone() alt="Avatar"/> }.into_any(),
                None => view! { <span class="avatar avatar--lg">{user.initials()}</span> }.into_any(),
            })
        })
    };
    let email = move || form.with(|f| f.user().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <Show when=move || session.with(SessionState::is_authenticated)>
            <Dialog
                title="Личный кабинет"
                description="Управляйте своим профилем и объектами недвижимости"
                on_close=on_close
                class="dialog--profile"
            >
                <div class="profile__head">
                    {avatar}
                    <button type="button" class="btn btn--outline">"Изменить фото"</button>
                </div>
                <form class="form" on:submit=on_submit>
                    <div class="form__row form__row--3">
                        <label class="form__field">
                            "Фамилия"
                            <input
                                placeholder="Петров"
                                prop:value=move || form.with(|f| f.last_name.clone())
                                on:input=on_field(form, |f, v| f.last_name = v)
                            />
                        </label>
                        <label class="form__field">
                            "Имя"
                            <input
                                placeholder="Иван"
                                prop:value=move || form.with(|f| f.first_name.clone())
                                on:input=on_field(form, |f, v| f.first_name = v)
                            />
                        </label>
                        <label class="form__field">
                            "Отчество"
                            <input
                                placeholder="Иванович"
                                prop:value=move || form.with(|f| f.middle_name.clone())
                                on:input=on_field(form, |f, v| f.middle_name = v)
                            />
                        </label>
                    </div>
                    <label class="form__field">
                        "Телефон"
                        <input
                            type="tel"
                            placeholder="+7 (900) 000-00-00"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=on_field(form, |f, v| f.phone = v)
                        />
                    </label>
                    <label class="form__field">
                        "Email"
                        <input type="email" prop:value=email disabled=true/>
                    </label>

                    <Show when=move || error.with(Option::is_some)>
                        <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <div class="form__actions">
                        <button type="submit" class="btn btn--gold">"Сохранить изменения"</button>
                        <button type="button" class="btn btn--outline" on:click=move |_| on_close.run(())>
                            "Отмена"
                        </button>
                    </div>
                </form>
                <section class="profile__listings">
                    <h3>"Мои объекты"</h3>
                    <p class="text-muted">"У вас пока нет добавленных объектов"</p>
                </section>
            </Dialog>
        </Show>
    }
}
