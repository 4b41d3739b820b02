//! Hard-coded listings standing in for a real data source.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use crate::types::{Coordinates, Owner, Property, PropertyDetail, PropertyType};

const LISTING_IMAGE: &str = "https://cdn.poehali.dev/projects/4ed4a55e-970c-413e-aa2a-5a141835f027/files/53ddbc4c-6730-4528-be8d-eebabefbe5a2.jpg";

/// Hero banner background.
pub const HERO_IMAGE: &str = "https://cdn.poehali.dev/projects/4ed4a55e-970c-413e-aa2a-5a141835f027/files/74bf1291-3c49-4785-9cff-aabfd6f54030.jpg";

/// Listings shown in the catalog grid and on the map.
pub fn catalog_properties() -> Vec<Property> {
    vec![
        listing(
            1,
            "Элитная квартира с видом на город",
            25_000_000,
            120.0,
            3,
            "Москва, Пресненская набережная",
            PropertyType::Apartment,
            Coordinates::new(55.7489, 37.5386),
        ),
        listing(
            2,
            "Пентхаус в центре",
            45_000_000,
            200.0,
            4,
            "Москва, Тверская улица",
            PropertyType::Penthouse,
            Coordinates::new(55.7644, 37.6054),
        ),
        listing(
            3,
            "Современная студия",
            12_000_000,
            45.0,
            1,
            "Москва, Кутузовский проспект",
            PropertyType::Studio,
            Coordinates::new(55.7407, 37.5365),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    price: u64,
    area: f64,
    rooms: u32,
    address: &str,
    property_type: PropertyType,
    coordinates: Coordinates,
) -> Property {
    Property {
        id,
        title: title.to_owned(),
        description: String::new(),
        price,
        area,
        rooms,
        floor: None,
        total_floors: None,
        address: address.to_owned(),
        images: vec![LISTING_IMAGE.to_owned()],
        property_type,
        coordinates: Some(coordinates),
    }
}

/// Route parameter to listing id; anything unusable resolves to `1`.
pub fn parse_property_id(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|id| *id != 0)
        .unwrap_or(1)
}

/// Detail record for any id. Only the id varies.
pub fn property_detail(id: u32) -> PropertyDetail {
    PropertyDetail {
        property: Property {
            id,
            title: "Элитная квартира с видом на город".to_owned(),
            description: "Роскошная квартира в престижном жилом комплексе с панорамными окнами \
                          и потрясающим видом на Москву-Сити. Современный ремонт, дизайнерская \
                          мебель, высокие потолки. Развитая инфраструктура района, парковка, \
                          консьерж-сервис."
                .to_owned(),
            price: 25_000_000,
            area: 120.0,
            rooms: 3,
            floor: Some(15),
            total_floors: Some(25),
            address: "Москва, Пресненская набережная, д. 12".to_owned(),
            images: vec![LISTING_IMAGE.to_owned(); 3],
            property_type: PropertyType::Apartment,
            coordinates: Some(Coordinates::new(55.7489, 37.5386)),
        },
        owner: Owner {
            first_name: "Иван".to_owned(),
            last_name: "Петров".to_owned(),
            phone: "+7 (900) 123-45-67".to_owned(),
            avatar_url: None,
        },
        features: [
            "Панорамные окна",
            "Высокие потолки 3.2м",
            "Дизайнерский ремонт",
            "Встроенная кухня",
            "Кондиционеры",
            "Теплый пол",
            "Видеодомофон",
            "Подземная парковка",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect(),
    }
}
