use super::*;

#[test]
fn format_rub_groups_millions() {
    assert_eq!(format_rub(25_000_000), "25\u{a0}000\u{a0}000\u{a0}₽");
}

#[test]
fn format_rub_small_amounts_have_no_groups() {
    assert_eq!(format_rub(0), "0\u{a0}₽");
    assert_eq!(format_rub(999), "999\u{a0}₽");
}

#[test]
fn format_rub_group_boundaries() {
    assert_eq!(format_rub(1_000), "1\u{a0}000\u{a0}₽");
    assert_eq!(format_rub(208_333), "208\u{a0}333\u{a0}₽");
    assert_eq!(format_rub(1_234_567), "1\u{a0}234\u{a0}567\u{a0}₽");
}

#[test]
fn format_area_drops_whole_fraction() {
    assert_eq!(format_area(120.0), "120");
    assert_eq!(format_area(45.0), "45");
}

#[test]
fn format_area_uses_decimal_comma() {
    assert_eq!(format_area(45.5), "45,5");
    assert_eq!(format_area(33.25), "33,3");
}
