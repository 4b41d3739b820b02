use super::*;

#[test]
fn catalog_has_three_listings_with_coordinates() {
    let properties = catalog_properties();
    assert_eq!(properties.len(), 3);
    assert!(properties.iter().all(|p| p.coordinates.is_some()));
    let ids: Vec<u32> = properties.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn catalog_prices_and_types() {
    let properties = catalog_properties();
    assert_eq!(properties[0].price, 25_000_000);
    assert_eq!(properties[1].property_type, PropertyType::Penthouse);
    assert_eq!(properties[2].rooms, 1);
}

#[test]
fn parse_property_id_accepts_numbers() {
    assert_eq!(parse_property_id(Some("2")), 2);
    assert_eq!(parse_property_id(Some(" 42 ")), 42);
}

#[test]
fn parse_property_id_falls_back_to_one() {
    assert_eq!(parse_property_id(None), 1);
    assert_eq!(parse_property_id(Some("")), 1);
    assert_eq!(parse_property_id(Some("abc")), 1);
    assert_eq!(parse_property_id(Some("0")), 1);
    assert_eq!(parse_property_id(Some("-3")), 1);
}

#[test]
fn property_detail_keeps_requested_id() {
    let detail = property_detail(9);
    assert_eq!(detail.property.id, 9);
    assert_eq!(detail.property.images.len(), 3);
    assert_eq!(detail.features.len(), 8);
    assert_eq!(detail.property.floor_label().as_deref(), Some("15/25"));
    assert_eq!(detail.owner.phone, "+7 (900) 123-45-67");
}
