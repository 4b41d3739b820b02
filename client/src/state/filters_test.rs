use super::*;
use crate::mock::catalog_properties;

#[test]
fn defaults_are_unfiltered() {
    let filters = CatalogFilters::default();
    assert_eq!(filters.property_type, TypeFilter::All);
    assert_eq!(filters.price, PriceFilter::Any);
    assert_eq!(filters.area, AreaFilter::Any);
}

#[test]
fn type_filter_values_parse_back() {
    for filter in TypeFilter::ALL {
        assert_eq!(TypeFilter::from_value(filter.value()), filter);
    }
    assert_eq!(TypeFilter::from_value("castle"), TypeFilter::All);
}

#[test]
fn price_filter_values_parse_back() {
    for filter in PriceFilter::ALL {
        assert_eq!(PriceFilter::from_value(filter.value()), filter);
    }
    assert_eq!(PriceFilter::from_value(""), PriceFilter::Any);
}

#[test]
fn labels_are_russian() {
    assert_eq!(TypeFilter::All.label(), "Все типы");
    assert_eq!(TypeFilter::Studio.label(), "Студия");
    assert_eq!(PriceFilter::Any.label(), "Цена: любая");
    assert_eq!(PriceFilter::Over30M.label(), "Свыше 30 млн");
}

#[test]
fn area_filter_values_parse_back() {
    for filter in AreaFilter::ALL {
        assert_eq!(AreaFilter::from_value(filter.value()), filter);
    }
    assert_eq!(AreaFilter::Under50.label(), "До 50 м²");
}

#[test]
fn every_selection_keeps_every_listing_visible() {
    let properties = catalog_properties();
    for property_type in TypeFilter::ALL {
        for price in PriceFilter::ALL {
            for area in AreaFilter::ALL {
                let filters = CatalogFilters {
                    property_type,
                    price,
                    area,
                };
                assert_eq!(filters.visible(&properties), properties);
            }
        }
    }
}
