//! Catalog filter selections.
//!
//! The controls are display-only: choices are tracked but the catalog grid
//! always lists every property.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use crate::types::Property;

/// Property-type selector options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Apartment,
    Penthouse,
    Studio,
}

impl TypeFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Apartment, Self::Penthouse, Self::Studio];

    pub const fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Apartment => "apartment",
            Self::Penthouse => "penthouse",
            Self::Studio => "studio",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Все типы",
            Self::Apartment => "Квартира",
            Self::Penthouse => "Пентхаус",
            Self::Studio => "Студия",
        }
    }

    /// Unknown values select `All`.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.value() == value)
            .unwrap_or_default()
    }
}

/// Price-band selector options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceFilter {
    #[default]
    Any,
    Under15M,
    From15To30M,
    Over30M,
}

impl PriceFilter {
    pub const ALL: [Self; 4] = [Self::Any, Self::Under15M, Self::From15To30M, Self::Over30M];

    pub const fn value(self) -> &'static str {
        match self {
            Self::Any => "all",
            Self::Under15M => "0-15",
            Self::From15To30M => "15-30",
            Self::Over30M => "30+",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "Цена: любая",
            Self::Under15M => "До 15 млн",
            Self::From15To30M => "15-30 млн",
            Self::Over30M => "Свыше 30 млн",
        }
    }

    /// Unknown values select `Any`.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.value() == value)
            .unwrap_or_default()
    }
}

/// Floor-area selector options (map page only).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AreaFilter {
    #[default]
    Any,
    Under50,
    From50To100,
    Over100,
}

impl AreaFilter {
    pub const ALL: [Self; 4] = [Self::Any, Self::Under50, Self::From50To100, Self::Over100];

    pub const fn value(self) -> &'static str {
        match self {
            Self::Any => "all",
            Self::Under50 => "0-50",
            Self::From50To100 => "50-100",
            Self::Over100 => "100+",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "Площадь: любая",
            Self::Under50 => "До 50 м²",
            Self::From50To100 => "50-100 м²",
            Self::Over100 => "Свыше 100 м²",
        }
    }

    /// Unknown values select `Any`.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogFilters {
    pub property_type: TypeFilter,
    pub price: PriceFilter,
    pub area: AreaFilter,
}

impl CatalogFilters {
    /// Listings shown under these selections. The controls are
    /// display-only, so this is always every listing in order.
    pub fn visible(&self, properties: &[Property]) -> Vec<Property> {
        properties.to_vec()
    }
}
