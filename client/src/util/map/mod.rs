//! Mapping provider seam.
//!
//! ARCHITECTURE
//! ============
//! `MapProvider` is the only surface the map page needs from a mapping
//! vendor: build a map in a container, add clickable markers, tear down.
//! Marker content and click routing (`place_markers`) are vendor-neutral
//! and tested natively; the browser-only pieces live behind `hydrate`:
//!
//! - `script`: scoped `<script>` injection into `<head>`.
//! - `yandex`: `MapProvider` over the `ymaps` global.
//! - `mount`: load -> ready -> init -> markers, with failure/timeout
//!   reporting and deterministic teardown.


#[cfg(feature = "hydrate")]
pub mod mount;
#[cfg(feature = "hydrate")]
pub mod script;
#[cfg(feature = "hydrate")]
pub mod yandex;

use crate::types::{Coordinates, Property};
use crate::util::format::{format_area, format_rub};

pub const DEFAULT_CENTER: Coordinates = Coordinates::new(55.7522, 37.6156);
pub const DEFAULT_ZOOM: u8 = 11;
pub const DEFAULT_LOAD_TIMEOUT_MS: u32 = 10_000;
const PLACEHOLDER_API_KEY: &str = "your-api-key";
const SCRIPT_BASE_URL: &str = "https://api-maps.yandex.ru/2.1/";

/// Errors surfaced by map loading and provider calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The provider script element fired `error`.
    #[error("не удалось загрузить скрипт карты ({url})")]
    ScriptLoad { url: String },

    /// The provider script never became ready.
    #[error("скрипт карты не загрузился за {timeout_ms} мс")]
    Timeout { timeout_ms: u32 },

    /// The script loaded but the expected global is absent.
    #[error("объект карты `{name}` недоступен")]
    ProviderMissing { name: String },

    /// A provider call threw.
    #[error("ошибка API карты: {0}")]
    Js(String),
}

/// Map page configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct MapSettings {
    pub api_key: String,
    pub center: Coordinates,
    pub zoom: u8,
    pub load_timeout_ms: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            api_key: option_env!("ESTATE_MAPS_API_KEY")
                .unwrap_or(PLACEHOLDER_API_KEY)
                .to_owned(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            load_timeout_ms: DEFAULT_LOAD_TIMEOUT_MS,
        }
    }
}

impl MapSettings {
    /// Provider script URL for this key.
    #[must_use]
    pub fn script_url(&self) -> String {
        format!("{SCRIPT_BASE_URL}?apikey={}&lang=ru_RU", self.api_key)
    }
}

/// Vendor-neutral marker description.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub coordinates: Coordinates,
    pub hint: String,
    pub balloon_html: String,
}

/// Marker for a listing, or `None` when it has no coordinates.
pub fn marker_for(property: &Property) -> Option<Marker> {
    let coordinates = property.coordinates?;
    let balloon_html = format!(
        "<div class=\"map-balloon\">\
         <h3 class=\"map-balloon__title\">{title}</h3>\
         <p class=\"map-balloon__price\">{price}</p>\
         <p class=\"map-balloon__meta\">{area} м² • {rooms} комн.</p>\
         </div>",
        title = escape_html(&property.title),
        price = format_rub(property.price),
        area = format_area(property.area),
        rooms = property.rooms,
    );
    Some(Marker {
        coordinates,
        hint: property.title.clone(),
        balloon_html,
    })
}

/// Tracks whether a mount may still build its map. Provider callbacks can
/// fire after the page is gone, or more than once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountGate {
    alive: bool,
    built: bool,
}

impl Default for MountGate {
    fn default() -> Self {
        Self {
            alive: true,
            built: false,
        }
    }
}

impl MountGate {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Page teardown. Later `begin_build` calls are refused.
    pub fn close(&mut self) {
        self.alive = false;
    }

    /// True exactly once, and only while the mount is alive.
    pub fn begin_build(&mut self) -> bool {
        if !self.alive || self.built {
            return false;
        }
        self.built = true;
        true
    }
}

/// Capabilities the map page needs from a mapping vendor.
pub trait MapProvider {
    /// DOM node (or stand-in) the map renders into.
    type Container;
    /// Live map instance.
    type Handle;

    fn initialize_map(
        &self,
        container: &Self::Container,
        center: Coordinates,
        zoom: u8,
    ) -> Result<Self::Handle, MapError>;

    fn add_marker(
        &self,
        handle: &Self::Handle,
        marker: &Marker,
        on_click: Box<dyn Fn()>,
    ) -> Result<(), MapError>;

    fn destroy(&self, handle: &Self::Handle);
}

/// Adds one marker per located listing; a click hands that listing to
/// `on_select`. Returns the number of markers placed.
///
/// # Errors
///
/// Stops at the first marker the provider refuses.
pub fn place_markers<P, F>(
    provider: &P,
    handle: &P::Handle,
    properties: &[Property],
    on_select: F,
) -> Result<usize, MapError>
where
    P: MapProvider,
    F: Fn(Property) + Clone + 'static,
{
    let mut placed = 0;
    for property in properties {
        let Some(marker) = marker_for(property) else {
            continue;
        };
        let selected = property.clone();
        let on_select = on_select.clone();
        provider.add_marker(handle, &marker, Box::new(move || on_select(selected.clone())))?;
        placed += 1;
    }
    Ok(placed)
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
