//! Listing submission dialog.

use leptos::prelude::*;

use super::dialog::Dialog;
use super::on_field;
use crate::forms::property::AddPropertyForm;
use crate::forms::submit_modal;
use crate::state::session::SessionState;
use crate::types::{PropertyDraft, PropertyType};

#[component]
pub fn AddPropertyModal(on_close: Callback<()>, on_submit: Callback<PropertyDraft>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let form = RwSignal::new(AddPropertyForm::default());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = AddPropertyForm {
            owner_id: session.with_untracked(|s| s.user.as_ref().map(|u| u.id)),
            ..form.get_untracked()
        };
        if let Err(e) = submit_modal(&current, |draft| on_submit.run(draft), || on_close.run(())) {
            error.set(Some(e.to_string()));
        }
    };

    let type_options = PropertyType::ALL
        .into_iter()
        .map(|t| view! { <option value=t.value()>{t.label()}</option> })
        .collect_view();

    view! {
        <Dialog
            title="Добавить объект"
            description="Заполните информацию о вашем объекте недвижимости"
            on_close=on_close
            class="dialog--wide"
        >
            <form class="form" on:submit=submit novalidate=true>
                <label class="form__field">
                    "Название объекта *"
                    <input
                        placeholder="Элитная квартира с видом на город"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=on_field(form, |f, v| f.title = v)
                    />
                </label>
                <label class="form__field">
                    "Описание"
                    <textarea
                        rows="4"
                        placeholder="Подробное описание объекта..."
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=on_field(form, |f, v| f.description = v)
                    ></textarea>
                </label>
                <div class="form__row form__row--2">
                    <label class="form__field">
                        "Тип недвижимости *"
                        <select
                            prop:value=move || form.with(|f| f.property_type.clone())
                            on:change=on_field(form, |f, v| f.property_type = v)
                        >
                            <option value="">"Выберите тип"</option>
                            {type_options}
                        </select>
                    </label>
                    <label class="form__field">
                        "Цена (₽) *"
                        <input
                            inputmode="numeric"
                            placeholder="25000000"
                            prop:value=move || form.with(|f| f.price.clone())
                            on:input=on_field(form, |f, v| f.price = v)
                        />
                    </label>
                </div>
                <div class="form__row form__row--4">
                    <label class="form__field">
                        "Площадь (м²) *"
                        <input
                            inputmode="decimal"
                            placeholder="120"
                            prop:value=move || form.with(|f| f.area.clone())
                            on:input=on_field(form, |f, v| f.area = v)
                        />
                    </label>
                    <label class="form__field">
                        "Комнат"
                        <input
                            inputmode="numeric"
                            placeholder="3"
                            prop:value=move || form.with(|f| f.rooms.clone())
                            on:input=on_field(form, |f, v| f.rooms = v)
                        />
                    </label>
                    <label class="form__field">
                        "Этаж"
                        <input
                            inputmode="numeric"
                            placeholder="5"
                            prop:value=move || form.with(|f| f.floor.clone())
                            on:input=on_field(form, |f, v| f.floor = v)
                        />
                    </label>
                    <label class="form__field">
                        "Всего этажей"
                        <input
                            inputmode="numeric"
                            placeholder="10"
                            prop:value=move || form.with(|f| f.total_floors.clone())
                            on:input=on_field(form, |f, v| f.total_floors = v)
                        />
                    </label>
                </div>
                <label class="form__field">
                    "Адрес *"
                    <input
                        placeholder="Москва, Пресненская набережная"
                        prop:value=move || form.with(|f| f.address.clone())
                        on:input=on_field(form, |f, v| f.address = v)
                    />
                </label>

                <div class="dropzone">
                    <p>"Загрузите фотографии объекта"</p>
                    <p class="text-muted">"Перетащите файлы или нажмите для выбора"</p>
                </div>

                <Show when=move || error.with(Option::is_some)>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="form__actions">
                    <button type="submit" class="btn btn--gold">"+ Добавить объект"</button>
                    <button type="button" class="btn btn--outline" on:click=move |_| on_close.run(())>
                        "Отмена"
                    </button>
                </div>
            </form>
        </Dialog>
    }
}
