use gallerist::ui::core::actions::{Action, FieldKey, StoryKind};

#[test]
fn test_story_catalogue_order() {
    let titles: Vec<&str> = StoryKind::all().iter().map(StoryKind::title).collect();
    assert_eq!(titles, vec!["Breadcrumb", "Form", "MultiForm", "NavBar", "ToggleSplitLayout"]);
    assert_eq!(StoryKind::SplitLayout.index(), 4);
    assert_eq!(StoryKind::default(), StoryKind::Form);
}

#[test]
fn test_story_lookup_accepts_slug_or_title() {
    assert_eq!(StoryKind::from_slug("multi-form"), Some(StoryKind::MultiForm));
    assert_eq!(StoryKind::from_slug(" ToggleSplitLayout "), Some(StoryKind::SplitLayout));
    assert_eq!(StoryKind::from_slug("NAVBAR"), Some(StoryKind::NavBar));
    assert_eq!(StoryKind::from_slug("carousel"), None);
}

#[test]
fn test_field_key_display() {
    let field = FieldKey::new(StoryKind::Form, "externalCombobox");
    assert_eq!(field.to_string(), "form.externalCombobox");
}

#[test]
fn test_target_story() {
    let field = FieldKey::new(StoryKind::MultiForm, "city");
    let label = Action::OptionSelected { field, label: None };
    assert_eq!(label.target_story(), Some(StoryKind::MultiForm));

    let submitted = Action::FormSubmitted {
        story: StoryKind::Form,
        payload: "{}".to_string(),
    };
    assert_eq!(submitted.target_story(), Some(StoryKind::Form));
    assert_eq!(Action::WizardNext.target_story(), None);
}

#[test]
fn test_is_none() {
    assert!(Action::None.is_none());
    assert!(!Action::Quit.is_none());
}
