use super::*;
use crate::mock::catalog_properties;

#[test]
fn view_starts_loading_with_nothing_selected() {
    let view = MapView::default();
    assert_eq!(view.status, MapStatus::Loading);
    assert!(view.selected.is_none());
}

#[test]
fn select_replaces_previous_selection() {
    let properties = catalog_properties();
    let mut view = MapView::default();
    view.select(properties[0].clone());
    view.select(properties[2].clone());
    assert_eq!(view.selected.as_ref().map(|p| p.id), Some(3));
}

#[test]
fn clear_selection_closes_overlay() {
    let mut view = MapView::default();
    view.select(catalog_properties()[0].clone());
    view.clear_selection();
    assert!(view.selected.is_none());
}

#[test]
fn status_transitions() {
    let mut view = MapView::default();
    view.mark_ready();
    assert_eq!(view.status, MapStatus::Ready);
    view.mark_failed("script blocked");
    assert_eq!(view.status, MapStatus::Failed("script blocked".to_owned()));
}
