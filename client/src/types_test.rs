use super::*;

fn sample_property() -> Property {
    Property {
        id: 7,
        title: "Loft".to_owned(),
        description: String::new(),
        price: 25_000_000,
        area: 120.0,
        rooms: 3,
        floor: Some(15),
        total_floors: Some(25),
        address: "Москва".to_owned(),
        images: vec!["a.jpg".to_owned(), "b.jpg".to_owned()],
        property_type: PropertyType::Apartment,
        coordinates: None,
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn short_name_is_first_name() {
    let mut user = User::new(1, "a@b.com");
    user.first_name = Some(" Иван ".to_owned());
    user.last_name = Some("Петров".to_owned());
    assert_eq!(user.short_name(), "Иван");
}

#[test]
fn short_name_falls_back_to_email() {
    let mut user = User::new(1, "a@b.com");
    assert_eq!(user.short_name(), "a@b.com");

    user.first_name = Some("   ".to_owned());
    assert_eq!(user.short_name(), "a@b.com");
}

#[test]
fn initials_use_cyrillic_names() {
    let mut user = User::new(1, "a@b.com");
    user.first_name = Some("иван".to_owned());
    user.last_name = Some("петров".to_owned());
    assert_eq!(user.initials(), "ИП");
}

#[test]
fn initials_fall_back_to_email_letter() {
    assert_eq!(User::new(1, "zoe@b.com").initials(), "Z");
    assert_eq!(User::new(1, "").initials(), "");
}

#[test]
fn user_serializes_camel_case_and_skips_absent_fields() {
    let mut user = User::new(2, "a@b.com");
    user.first_name = Some("A".to_owned());
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json, serde_json::json!({ "id": 2, "email": "a@b.com", "firstName": "A" }));
}

// =============================================================
// PropertyType
// =============================================================

#[test]
fn property_type_value_lookup() {
    for ty in PropertyType::ALL {
        assert_eq!(PropertyType::from_value(ty.value()), Some(ty));
    }
    assert_eq!(PropertyType::from_value(""), None);
    assert_eq!(PropertyType::from_value("castle"), None);
}

#[test]
fn property_type_labels() {
    assert_eq!(PropertyType::Apartment.label(), "Квартира");
    assert_eq!(PropertyType::Townhouse.label(), "Таунхаус");
}

#[test]
fn property_type_serde_uses_form_values() {
    let json = serde_json::to_string(&PropertyType::Penthouse).unwrap();
    assert_eq!(json, "\"penthouse\"");
}

// =============================================================
// Property helpers
// =============================================================

#[test]
fn price_per_square_meter_rounds() {
    let property = sample_property();
    assert_eq!(property.price_per_square_meter(), Some(208_333));
}

#[test]
fn price_per_square_meter_absent_for_zero_area() {
    let mut property = sample_property();
    property.area = 0.0;
    assert_eq!(property.price_per_square_meter(), None);
}

#[test]
fn floor_label_variants() {
    let mut property = sample_property();
    assert_eq!(property.floor_label().as_deref(), Some("15/25"));
    property.total_floors = None;
    assert_eq!(property.floor_label().as_deref(), Some("15"));
    property.floor = None;
    assert_eq!(property.floor_label(), None);
}

#[test]
fn primary_image_is_first() {
    let mut property = sample_property();
    assert_eq!(property.primary_image(), Some("a.jpg"));
    property.images.clear();
    assert_eq!(property.primary_image(), None);
}

#[test]
fn owner_initials() {
    let owner = Owner {
        first_name: "Иван".to_owned(),
        last_name: "Петров".to_owned(),
        phone: "+7".to_owned(),
        avatar_url: None,
    };
    assert_eq!(owner.initials(), "ИП");
    assert_eq!(owner.full_name(), "Иван Петров");
}
