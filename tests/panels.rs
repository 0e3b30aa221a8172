use gallerist::panels::PanelSelection;

fn ids() -> Vec<String> {
    ["one", "two", "three"].iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_initial_panel() {
    let selection = PanelSelection::new(ids(), Some("two"), 1, None);
    assert_eq!(selection.active(), ["two".to_string()]);
    assert_eq!(selection.maximum(), 3);

    let unknown = PanelSelection::new(ids(), Some("four"), 0, None);
    assert!(unknown.active().is_empty());

    let none = PanelSelection::new(ids(), None, 0, None);
    assert!(none.active().is_empty());
}

#[test]
fn test_toggle_keeps_declaration_order() {
    let mut selection = PanelSelection::new(ids(), Some("three"), 1, None);
    assert!(selection.toggle("one"));
    assert_eq!(selection.active(), ["one".to_string(), "three".to_string()]);

    assert!(selection.toggle("two"));
    assert_eq!(selection.active(), ids());
}

#[test]
fn test_minimum_rejects_last_removal() {
    let mut selection = PanelSelection::new(ids(), Some("one"), 1, None);
    assert!(!selection.toggle("one"));
    assert!(selection.is_active("one"));

    assert!(selection.toggle("two"));
    assert!(selection.toggle("one"));
    assert_eq!(selection.active(), ["two".to_string()]);
}

#[test]
fn test_maximum_rejects_extra_panel() {
    let mut selection = PanelSelection::new(ids(), Some("one"), 1, Some(2));
    assert!(selection.toggle("two"));
    assert!(!selection.toggle("three"));
    assert_eq!(selection.active(), ["one".to_string(), "two".to_string()]);
}

#[test]
fn test_set_active_rejections_leave_selection_unchanged() {
    let mut selection = PanelSelection::new(ids(), Some("one"), 1, Some(2));
    let before = selection.clone();

    assert!(!selection.set_active(vec!["one".to_string(), "nope".to_string()]));
    assert_eq!(selection, before);

    assert!(!selection.set_active(vec![]));
    assert_eq!(selection, before);

    assert!(!selection.set_active(ids()));
    assert_eq!(selection, before);
}

#[test]
fn test_set_active_sorts_and_dedupes() {
    let mut selection = PanelSelection::new(ids(), None, 0, None);
    let candidate = ["three", "one", "three"].iter().map(|s| s.to_string()).collect();
    assert!(selection.set_active(candidate));
    assert_eq!(selection.active(), ["one".to_string(), "three".to_string()]);
}

#[test]
fn test_zero_minimum_allows_empty() {
    let mut selection = PanelSelection::new(ids(), Some("one"), 0, None);
    assert!(selection.toggle("one"));
    assert!(selection.active().is_empty());
}
