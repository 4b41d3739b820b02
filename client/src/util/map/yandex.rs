//! `MapProvider` over the Yandex Maps 2.1 `ymaps` global.

use std::cell::RefCell;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

use super::script::js_error;
use super::{MapError, MapProvider, Marker};
use crate::types::Coordinates;

const GLOBAL_NAME: &str = "ymaps";

/// Handle to the `ymaps` namespace object.
pub struct YandexMaps {
    ymaps: JsValue,
}

/// A live `ymaps.Map` and the click listeners bound to its placemarks.
pub struct YandexMap {
    map: JsValue,
    listeners: RefCell<Vec<Closure<dyn Fn()>>>,
}

impl YandexMaps {
    /// # Errors
    ///
    /// `ProviderMissing` when the script has not defined `ymaps`.
    pub fn from_global() -> Result<Self, MapError> {
        let ymaps = Reflect::get(&js_sys::global(), &JsValue::from_str(GLOBAL_NAME)).map_err(js_error)?;
        if ymaps.is_undefined() || ymaps.is_null() {
            return Err(MapError::ProviderMissing {
                name: GLOBAL_NAME.to_owned(),
            });
        }
        Ok(Self { ymaps })
    }

    /// Runs `callback` once the API modules are loaded (`ymaps.ready`).
    ///
    /// # Errors
    ///
    /// Fails when `ready` is missing or throws.
    pub fn ready(&self, callback: &JsValue) -> Result<(), MapError> {
        method(&self.ymaps, "ready")?
            .call1(&self.ymaps, callback)
            .map_err(js_error)?;
        Ok(())
    }

    fn construct(&self, class: &str, args: &Array) -> Result<JsValue, MapError> {
        let ctor = method(&self.ymaps, class)?;
        Reflect::construct(&ctor, args).map_err(js_error)
    }
}

impl MapProvider for YandexMaps {
    type Container = HtmlElement;
    type Handle = YandexMap;

    fn initialize_map(
        &self,
        container: &HtmlElement,
        center: Coordinates,
        zoom: u8,
    ) -> Result<YandexMap, MapError> {
        let state = Object::new();
        set(&state, "center", &lat_lon(center))?;
        set(&state, "zoom", &JsValue::from(zoom))?;
        let map = self.construct("Map", &Array::of2(container.as_ref(), &state))?;
        Ok(YandexMap {
            map,
            listeners: RefCell::new(Vec::new()),
        })
    }

    fn add_marker(
        &self,
        handle: &YandexMap,
        marker: &Marker,
        on_click: Box<dyn Fn()>,
    ) -> Result<(), MapError> {
        let properties = Object::new();
        set(&properties, "hintContent", &JsValue::from_str(&marker.hint))?;
        set(&properties, "balloonContent", &JsValue::from_str(&marker.balloon_html))?;
        let placemark = self.construct(
            "Placemark",
            &Array::of3(&lat_lon(marker.coordinates), &properties, &Object::new()),
        )?;

        let listener = Closure::wrap(on_click);
        let events = get(&placemark, "events")?;
        method(&events, "add")?
            .call2(&events, &JsValue::from_str("click"), listener.as_ref())
            .map_err(js_error)?;

        let geo_objects = get(&handle.map, "geoObjects")?;
        method(&geo_objects, "add")?
            .call1(&geo_objects, &placemark)
            .map_err(js_error)?;

        handle.listeners.borrow_mut().push(listener);
        Ok(())
    }

    fn destroy(&self, handle: &YandexMap) {
        let result = method(&handle.map, "destroy").and_then(|destroy| destroy.call0(&handle.map).map_err(js_error));
        if let Err(e) = result {
            leptos::logging::warn!("map destroy failed: {e}");
        }
        handle.listeners.borrow_mut().clear();
    }
}

fn lat_lon(coordinates: Coordinates) -> JsValue {
    Array::of2(
        &JsValue::from(coordinates.latitude),
        &JsValue::from(coordinates.longitude),
    )
    .into()
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, MapError> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(js_error)
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), MapError> {
    Reflect::set(target, &JsValue::from_str(key), value).map_err(js_error)?;
    Ok(())
}

fn method(target: &JsValue, name: &str) -> Result<Function, MapError> {
    get(target, name)?
        .dyn_into::<Function>()
        .map_err(|_| MapError::Js(format!("`{name}` is not a function")))
}
