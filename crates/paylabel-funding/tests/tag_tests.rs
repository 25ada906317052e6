//! Integration tests for tag selection.

use std::sync::Arc;

use paylabel_common::warning::has_warned;
use paylabel_dom::RenderTree;
use paylabel_funding::constants::class;
use paylabel_funding::tag::{MISSING_LOCALE_WARNING, TAG_DUAL_CLASS, TAG_SAFER_CLASS};
use paylabel_funding::{
    Locale, RenderConfig, RenderEnv, StaticContentTable, TagContent, TagOptions, tag,
};

fn options(lang: &str, multiple: bool) -> TagOptions {
    TagOptions {
        multiple,
        locale: Locale::lang(lang),
    }
}

fn only_text(tree: &RenderTree, class_name: &str) -> String {
    let found = tree.find_by_class(class_name);
    assert_eq!(found.len(), 1);
    let element = tree.as_element(found[0]).unwrap();
    assert!(element.has_class(class::TEXT));
    assert_eq!(element.attr("optional"), Some("1"));
    tree.text_content(found[0])
}

#[test]
fn test_multiple_with_dual_tag_uses_dual() {
    let env = RenderEnv::default();
    let tree = tag(&env, &options("en", true)).unwrap();
    assert_eq!(only_text(&tree, TAG_DUAL_CLASS), "Two easy ways to pay");
    assert!(tree.find_by_class(TAG_SAFER_CLASS).is_empty());
}

#[test]
fn test_single_button_uses_safer() {
    let env = RenderEnv::default();
    let tree = tag(&env, &options("en", false)).unwrap();
    assert_eq!(only_text(&tree, TAG_SAFER_CLASS), "The safer, easier way to pay");
}

#[test]
fn test_multiple_without_dual_tag_falls_back_to_safer() {
    let env = RenderEnv::default();
    let tree = tag(&env, &options("de", true)).unwrap();
    assert_eq!(
        only_text(&tree, TAG_SAFER_CLASS),
        "Überall schnell und sicher bezahlen"
    );
}

#[test]
fn test_backend_renders_nothing() {
    let env = RenderEnv::new(RenderConfig::backend());
    assert!(tag(&env, &options("en", true)).is_none());
}

#[test]
fn test_unknown_locale_warns_and_renders_nothing() {
    let env = RenderEnv::default();
    assert!(tag(&env, &options("xx", false)).is_none());
    assert!(has_warned("Tag", MISSING_LOCALE_WARNING));
}

#[test]
fn test_unknown_locales_share_one_warning() {
    let env = RenderEnv::default();
    for i in 0..500 {
        let lang = format!("zz{i}");
        assert!(tag(&env, &options(&lang, i % 2 == 0)).is_none());
        assert!(!has_warned("Tag", &format!("no tag content for locale '{lang}'")));
        assert!(!has_warned("Tag", &lang));
    }
    assert!(has_warned("Tag", MISSING_LOCALE_WARNING));
}

#[test]
fn test_empty_dual_tag_falls_back_to_safer() {
    let table =
        StaticContentTable::from_json_str(r#"{"en":{"DualTag":"","SaferTag":"Safer"}}"#).unwrap();
    let env = RenderEnv::default().with_content(Arc::new(table));

    let tree = tag(&env, &options("en", true)).unwrap();
    assert_eq!(only_text(&tree, TAG_SAFER_CLASS), "Safer");
    assert!(tree.find_by_class(TAG_DUAL_CLASS).is_empty());
}

#[test]
fn test_custom_content_table() {
    let table = StaticContentTable::new().with_locale(
        "pt",
        TagContent {
            dual_tag: Some("Duas formas".to_string()),
            safer_tag: "Mais seguro".to_string(),
        },
    );
    let env = RenderEnv::default().with_content(Arc::new(table));

    let tree = tag(&env, &options("pt", true)).unwrap();
    assert_eq!(only_text(&tree, TAG_DUAL_CLASS), "Duas formas");
    assert!(tag(&env, &options("en", true)).is_none());
}
