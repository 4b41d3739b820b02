//! Scoped `<script>` injection.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlScriptElement;

use super::MapError;

/// An async `<script>` appended to `<head>`. Dropping it detaches the
/// handlers and removes the element.
pub struct ScriptGuard {
    element: HtmlScriptElement,
    _on_load: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

impl ScriptGuard {
    /// # Errors
    ///
    /// Fails when there is no document or `<head>`, or the DOM rejects the
    /// element.
    pub fn inject(
        src: &str,
        on_load: impl FnMut() + 'static,
        on_error: impl FnMut() + 'static,
    ) -> Result<Self, MapError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| MapError::Js("документ недоступен".to_owned()))?;
        let head = document
            .head()
            .ok_or_else(|| MapError::Js("в документе нет <head>".to_owned()))?;
        let element: HtmlScriptElement = document
            .create_element("script")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| MapError::Js("созданный элемент не является <script>".to_owned()))?;

        element.set_src(src);
        element.set_async(true);
        let on_load = Closure::<dyn FnMut()>::new(on_load);
        let on_error = Closure::<dyn FnMut()>::new(on_error);
        element.set_onload(Some(on_load.as_ref().unchecked_ref()));
        element.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        head.append_child(&element).map_err(js_error)?;

        Ok(Self {
            element,
            _on_load: on_load,
            _on_error: on_error,
        })
    }
}

impl Drop for ScriptGuard {
    fn drop(&mut self) {
        self.element.set_onload(None);
        self.element.set_onerror(None);
        self.element.remove();
    }
}

pub(super) fn js_error(err: JsValue) -> MapError {
    MapError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
