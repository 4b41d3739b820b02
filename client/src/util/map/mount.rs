//! Map page lifecycle: load the provider, build the map, place markers.
//!
//! DESIGN
//! ======
//! `MapMount` owns everything the map page acquires (script element, map
//! instance, JS callbacks, load timer). Dropping it releases all of them, so
//! the page only has to drop the mount on cleanup. The `ymaps.ready`
//! callback is handed to JS as a one-shot function that frees itself after
//! running, so it stays valid however late the provider calls it. Callbacks
//! that outlive the page check the `MountGate` and write through
//! `try_update`, since the view signal may already be disposed.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

use super::script::ScriptGuard;
use super::yandex::{YandexMap, YandexMaps};
use super::{MapError, MapProvider, MapSettings, MountGate, place_markers};
use crate::state::map::{MapStatus, MapView};
use crate::types::Property;

/// Resources held while the map page is mounted.
pub struct MapMount {
    shared: Rc<RefCell<Shared>>,
    _script: Option<ScriptGuard>,
    _timeout: Timeout,
}

struct Shared {
    gate: MountGate,
    map: Option<(YandexMaps, YandexMap)>,
}

struct Target {
    container: HtmlElement,
    settings: MapSettings,
    properties: Vec<Property>,
    view: RwSignal<MapView>,
}

/// Starts loading the map into `container`. Status and marker clicks are
/// reported through `view`.
///
/// # Errors
///
/// Fails only when the script element cannot be created; later failures
/// land in `view` as `MapStatus::Failed`.
pub fn mount(
    container: HtmlElement,
    settings: MapSettings,
    properties: Vec<Property>,
    view: RwSignal<MapView>,
) -> Result<MapMount, MapError> {
    let shared = Rc::new(RefCell::new(Shared {
        gate: MountGate::default(),
        map: None,
    }));
    let timeout_ms = settings.load_timeout_ms;
    let url = settings.script_url();
    let target = Rc::new(Target {
        container,
        settings,
        properties,
        view,
    });

    let timeout = Timeout::new(timeout_ms, move || {
        view.try_update(|v| {
            if v.status == MapStatus::Loading {
                fail(v, &MapError::Timeout { timeout_ms });
            }
        });
    });

    // Returning to the page after a visit: the global is already defined.
    let script = if YandexMaps::from_global().is_ok() {
        start(&shared, &target);
        None
    } else {
        let on_load = {
            let shared = Rc::clone(&shared);
            let target = Rc::clone(&target);
            move || start(&shared, &target)
        };
        let on_error = {
            let shared = Rc::clone(&shared);
            let url = url.clone();
            move || {
                if shared.borrow().gate.is_alive() {
                    view.try_update(|v| fail(v, &MapError::ScriptLoad { url: url.clone() }));
                }
            }
        };
        Some(ScriptGuard::inject(&url, on_load, on_error)?)
    };

    Ok(MapMount {
        shared,
        _script: script,
        _timeout: timeout,
    })
}

/// Waits for `ymaps.ready`, then builds the map.
fn start(shared: &Rc<RefCell<Shared>>, target: &Rc<Target>) {
    let provider = match YandexMaps::from_global() {
        Ok(provider) => provider,
        Err(e) => {
            target.view.try_update(|v| fail(v, &e));
            return;
        }
    };

    let ready = {
        let shared = Rc::clone(shared);
        let target = Rc::clone(target);
        Closure::once_into_js(move || build(&shared, &target))
    };
    if let Err(e) = provider.ready(&ready) {
        target.view.try_update(|v| fail(v, &e));
    }
}

fn build(shared: &Rc<RefCell<Shared>>, target: &Target) {
    if !shared.borrow_mut().gate.begin_build() {
        return;
    }
    let view = target.view;
    let result = YandexMaps::from_global().and_then(|provider| {
        let handle = provider.initialize_map(
            &target.container,
            target.settings.center,
            target.settings.zoom,
        )?;
        let placed = place_markers(&provider, &handle, &target.properties, move |property| {
            view.try_update(|v| v.select(property));
        });
        match placed {
            Ok(count) => {
                log!("map ready with {count} markers");
                Ok((provider, handle))
            }
            Err(e) => {
                provider.destroy(&handle);
                Err(e)
            }
        }
    });

    match result {
        Ok(map) => {
            shared.borrow_mut().map = Some(map);
            view.try_update(MapView::mark_ready);
        }
        Err(e) => {
            view.try_update(|v| fail(v, &e));
        }
    }
}

fn fail(view: &mut MapView, error: &MapError) {
    warn!("map unavailable: {error}");
    view.mark_failed(error.to_string());
}

impl Drop for MapMount {
    fn drop(&mut self) {
        let mut shared = self.shared.borrow_mut();
        shared.gate.close();
        if let Some((provider, handle)) = shared.map.take() {
            provider.destroy(&handle);
        }
    }
}
