//! Add-property form.

#[cfg(test)]
#[path = "property_test.rs"]
mod property_test;

use std::str::FromStr;

use super::{FormError, ModalForm, optional, required};
use crate::types::{PropertyDraft, PropertyType};

/// Listing fields as typed. `property_type` holds the `<select>` value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddPropertyForm {
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub price: String,
    pub area: String,
    pub rooms: String,
    pub floor: String,
    pub total_floors: String,
    pub address: String,
    /// Signed-in submitter, filled in by the dialog.
    pub owner_id: Option<u32>,
}

impl ModalForm for AddPropertyForm {
    type Output = PropertyDraft;

    fn validate(&self) -> Result<PropertyDraft, FormError> {
        let title = required(&self.title, "Название")?;
        let property_type = PropertyType::from_value(self.property_type.trim()).ok_or(
            FormError::MissingField {
                field: "Тип недвижимости",
            },
        )?;
        let price = parse_number(&required(&self.price, "Цена")?, "Цена")?;
        let area = parse_area(&required(&self.area, "Площадь")?)?;
        let rooms = optional_number(&self.rooms, "Количество комнат")?;
        let floor = optional_number(&self.floor, "Этаж")?;
        let total_floors = optional_number(&self.total_floors, "Этажей в доме")?;
        let address = required(&self.address, "Адрес")?;

        Ok(PropertyDraft {
            title,
            description: self.description.trim().to_owned(),
            property_type,
            price,
            area,
            rooms,
            floor,
            total_floors,
            address,
            owner_id: self.owner_id,
        })
    }
}

/// Unsigned integer; digit-group spaces (`25 000 000`) are allowed.
fn parse_number<T: FromStr>(value: &str, field: &'static str) -> Result<T, FormError> {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    digits.parse().map_err(|_| FormError::InvalidNumber { field })
}

fn optional_number<T: FromStr>(value: &str, field: &'static str) -> Result<Option<T>, FormError> {
    optional(value)
        .map(|v| parse_number(&v, field))
        .transpose()
}

/// Decimal with either `.` or `,` as separator.
fn parse_area(value: &str) -> Result<f64, FormError> {
    let invalid = FormError::InvalidNumber { field: "Площадь" };
    let area: f64 = value.replace(',', ".").parse().map_err(|_| invalid.clone())?;
    if !area.is_finite() {
        return Err(invalid);
    }
    Ok(area)
}
