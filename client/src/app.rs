//! Root application component with routing and context providers.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::add_property_modal::AddPropertyModal;
use crate::components::auth_modal::AuthModal;
use crate::components::header::Header;
use crate::components::profile_modal::ProfileModal;
use crate::pages::{catalog::CatalogPage, map::MapPage, property_detail::PropertyDetailPage};
use crate::state::modal::{ModalKind, ModalState};
use crate::state::session::SessionState;
use crate::types::{PropertyDraft, User};
use crate::util::auth::AuthService;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session and modal flags so they survive route changes, and
/// renders the header and the three dialogs once for every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let modals = RwSignal::new(ModalState::default());
    provide_context(session);
    provide_context(modals);
    provide_context(AuthService::default());

    let open = move |kind: ModalKind| Callback::new(move |()| modals.update(|m| m.open(kind)));
    let close = move |kind: ModalKind| Callback::new(move |()| modals.update(|m| m.close(kind)));

    let on_login = Callback::new(move |user: User| {
        log!("signed in as {}", user.email);
        session.update(|s| s.login(user));
        modals.update(|m| m.close(ModalKind::Auth));
    });
    let on_logout = Callback::new(move |()| {
        log!("signed out");
        session.update(SessionState::logout);
        modals.update(|m| m.close(ModalKind::Profile));
    });
    let on_update_user = Callback::new(move |user: User| {
        log!("profile updated for {}", user.email);
        session.update(|s| s.update_user(user));
    });
    // Drafts have nowhere to go yet; they are logged and dropped.
    let on_add_property = Callback::new(move |draft: PropertyDraft| match serde_json::to_string(&draft) {
        Ok(json) => log!("property draft submitted: {json}"),
        Err(e) => warn!("property draft not serializable: {e}"),
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/estate.css"/>
        <Title text="Движ.Ок"/>

        <Router>
            <Header
                on_auth=open(ModalKind::Auth)
                on_profile=open(ModalKind::Profile)
                on_logout=on_logout
                on_add_property=open(ModalKind::AddProperty)
            />
            <main class="page">
                <Routes fallback=|| view! { <p class="container">"Страница не найдена."</p> }>
                    <Route path=StaticSegment("") view=CatalogPage/>
                    <Route path=StaticSegment("map") view=MapPage/>
                    <Route path=(StaticSegment("property"), ParamSegment("id")) view=PropertyDetailPage/>
                </Routes>
            </main>

            <Show when=move || modals.with(|m| m.is_open(ModalKind::Auth))>
                <AuthModal on_close=close(ModalKind::Auth) on_login=on_login/>
            </Show>
            <Show when=move || modals.with(|m| m.is_open(ModalKind::Profile))>
                <ProfileModal on_close=close(ModalKind::Profile) on_update=on_update_user/>
            </Show>
            <Show when=move || modals.with(|m| m.is_open(ModalKind::AddProperty))>
                <AddPropertyModal on_close=close(ModalKind::AddProperty) on_submit=on_add_property/>
            </Show>
        </Router>
    }
}
