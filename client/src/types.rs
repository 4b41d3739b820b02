//! Listing and account value types.
//!
//! DESIGN
//! ======
//! Plain serde values with camelCase field names. They are the payload shape
//! a backend would receive at every submit seam, even though today nothing
//! leaves the browser.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in visitor. Never authenticated against a backing store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    /// User with only the required fields set.
    pub fn new(id: u32, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            first_name: None,
            last_name: None,
            middle_name: None,
            phone: None,
            avatar_url: None,
        }
    }

    /// Header label: the first name, or the email when it is blank.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.first_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }

    /// Avatar fallback letters.
    #[must_use]
    pub fn initials(&self) -> String {
        let from_names = initials_of(self.first_name.as_deref(), self.last_name.as_deref());
        if from_names.is_empty() {
            self.email.chars().next().map(|c| c.to_uppercase().collect::<String>()).unwrap_or_default()
        } else {
            from_names
        }
    }
}

fn initials_of(first: Option<&str>, last: Option<&str>) -> String {
    [first, last]
        .into_iter()
        .flatten()
        .filter_map(|part| part.trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Fixed set of listing categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Penthouse,
    Studio,
    House,
    Townhouse,
}

impl PropertyType {
    pub const ALL: [Self; 5] = [
        Self::Apartment,
        Self::Penthouse,
        Self::Studio,
        Self::House,
        Self::Townhouse,
    ];

    /// Form/`<select>` value.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::Penthouse => "penthouse",
            Self::Studio => "studio",
            Self::House => "house",
            Self::Townhouse => "townhouse",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Квартира",
            Self::Penthouse => "Пентхаус",
            Self::Studio => "Студия",
            Self::House => "Дом",
            Self::Townhouse => "Таунхаус",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A real-estate listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Whole rubles.
    pub price: u64,
    /// Square meters.
    pub area: f64,
    pub rooms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_floors: Option<u32>,
    pub address: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Property {
    /// Card / thumbnail image.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Rounded price of one square meter; `None` for a non-positive area.
    #[must_use]
    pub fn price_per_square_meter(&self) -> Option<u64> {
        if self.area <= 0.0 || !self.area.is_finite() {
            return None;
        }
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let per_meter = (self.price as f64 / self.area).round() as u64;
        Some(per_meter)
    }

    /// `"15/25"`, `"15"` or `None` depending on which floor fields are known.
    #[must_use]
    pub fn floor_label(&self) -> Option<String> {
        match (self.floor, self.total_floors) {
            (Some(floor), Some(total)) => Some(format!("{floor}/{total}")),
            (Some(floor), None) => Some(floor.to_string()),
            _ => None,
        }
    }
}

/// Listing owner shown on the detail page contact card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Owner {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn initials(&self) -> String {
        initials_of(Some(&self.first_name), Some(&self.last_name))
    }
}

/// Everything the detail page renders for one listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    pub property: Property,
    pub owner: Owner,
    pub features: Vec<String>,
}

/// Candidate listing built by the add-property dialog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub price: u64,
    pub area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_floors: Option<u32>,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u32>,
}
