use std::collections::HashSet;

use fieldui::form::MessageNode;
use fieldui::{InputField, InputType, StoryCatalog};

#[test]
fn builtin_catalog_has_unique_names() {
    let catalog = StoryCatalog::builtin().unwrap();
    let names: HashSet<_> = catalog
        .stories
        .iter()
        .map(|story| story.name.to_lowercase())
        .collect();
    assert_eq!(names.len(), catalog.stories.len());
    assert_eq!(catalog.title, "Forms/InputField");
}

#[test]
fn builtin_invalid_email_story_matches_scenario() {
    let catalog = StoryCatalog::builtin().unwrap();
    let story = catalog.find("InvalidEmail").expect("InvalidEmail story");
    assert_eq!(story.props.input_type, InputType::Email);
    let tree = InputField::new(story.props.clone()).render();
    assert!(matches!(
        tree.message,
        Some(MessageNode::Error { ref text, .. }) if text == "Please enter a valid email address"
    ));
}

#[test]
fn builtin_clearable_story_clears() {
    let catalog = StoryCatalog::builtin().unwrap();
    let story = catalog.find("clearable").expect("Clearable story");
    let mut field = InputField::new(story.props.clone());
    assert_eq!(field.value(), "abc");
    assert!(field.activate_clear());
    assert_eq!(field.value(), "");
}

#[test]
fn every_builtin_story_renders() {
    let catalog = StoryCatalog::builtin().unwrap();
    for story in &catalog.stories {
        let tree = InputField::new(story.props.clone()).render();
        assert!(tree.label.is_some(), "story {} has no label", story.name);
    }
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_catalog_parses() {
    use fieldui::DocumentFormat;

    let source = r#"
title: Yaml
stories:
  - name: One
    args:
      label: First
      size: lg
"#;
    let catalog = StoryCatalog::parse_str(source, DocumentFormat::Yaml).unwrap();
    assert_eq!(catalog.stories[0].props.label.as_deref(), Some("First"));
}
