//! Integration tests for selector matching and style sheet serialization.

use paylabel_css::{
    AnimationValue, CompoundSelector, Declaration, Keyframe, KeyframesRule, MediaQuery, MediaRule,
    Rule, Selector, StyleRule, Stylesheet,
};
use paylabel_dom::{NodeId, RenderTree};

fn button_tree() -> (RenderTree, NodeId, NodeId) {
    let mut tree = RenderTree::new();
    let ready = tree.append_element(NodeId::ROOT, "div", &[("class", "dom-ready")]);
    let button = tree.append_element(
        ready,
        "div",
        &[("class", "paypal-button"), ("data-funding-source", "paypal")],
    );
    let text = tree.append_element(button, "span", &[("class", "paypal-button-text")]);
    let personalized = tree.append_element(
        button,
        "span",
        &[("class", "paypal-button-text personalization-text")],
    );
    (tree, text, personalized)
}

fn default_text_selector() -> Selector {
    Selector::new(CompoundSelector::new().class("dom-ready"))
        .descendant(
            CompoundSelector::new()
                .class("paypal-button")
                .attr_eq("data-funding-source", "paypal"),
        )
        .descendant(
            CompoundSelector::new()
                .class("paypal-button-text")
                .not(CompoundSelector::new().class("personalization-text")),
        )
}

// ========== matching ==========

#[test]
fn test_descendant_selector_matches_nested_subject() {
    let (tree, text, personalized) = button_tree();
    let selector = default_text_selector();

    assert!(selector.matches_in_tree(&tree, text));
    assert!(!selector.matches_in_tree(&tree, personalized));
    assert_eq!(selector.select(&tree), vec![text]);
}

#[test]
fn test_descendant_selector_requires_every_ancestor() {
    let mut tree = RenderTree::new();
    let button = tree.append_element(
        NodeId::ROOT,
        "div",
        &[("class", "paypal-button"), ("data-funding-source", "venmo")],
    );
    let text = tree.append_element(button, "span", &[("class", "paypal-button-text")]);

    assert!(!default_text_selector().matches_in_tree(&tree, text));
}

#[test]
fn test_selector_never_matches_text_nodes() {
    let mut tree = RenderTree::new();
    tree.append_text(NodeId::ROOT, "plain");
    let selector = Selector::new(CompoundSelector::new());
    assert!(selector.select(&tree).is_empty());
}

// ========== serialization ==========

#[test]
fn test_media_and_keyframes_serialize() {
    let sheet = Stylesheet::new()
        .with_rule(Rule::Media(MediaRule {
            query: MediaQuery::MaxWidth(300),
            rules: vec![StyleRule::new(
                Selector::new(CompoundSelector::new().class("personalization-text")),
                vec![Declaration::new("visibility", "hidden")],
            )],
        }))
        .with_rule(Rule::Keyframes(KeyframesRule {
            name: "pulse".to_string(),
            keyframes: vec![
                Keyframe {
                    percent: 0,
                    declarations: vec![Declaration::new("opacity", "0")],
                },
                Keyframe {
                    percent: 100,
                    declarations: vec![Declaration::new("opacity", "1")],
                },
            ],
        }));

    let expected = "\
@media only screen and (max-width: 300px) {
    .personalization-text {
        visibility: hidden;
    }
}
@keyframes pulse {
    0% {
        opacity: 0;
    }
    100% {
        opacity: 1;
    }
}
";
    assert_eq!(sheet.to_string(), expected);
}

#[test]
fn test_important_declaration() {
    let mut declaration = Declaration::new("display", "none");
    declaration.important = true;
    assert_eq!(declaration.to_string(), "display: none !important;");
}

#[test]
fn test_animation_values() {
    assert_eq!(AnimationValue::None.to_string(), "none");
    assert_eq!(
        AnimationValue::run("show-text", 1).declaration().to_string(),
        "animation: show-text 1s 0s forwards;"
    );
}

// ========== scoping and media evaluation ==========

#[test]
fn test_scoped_prefixes_style_rules_but_not_keyframes() {
    let keyframes = KeyframesRule {
        name: "fade".to_string(),
        keyframes: Vec::new(),
    };
    let sheet = Stylesheet::new()
        .with_rule(Rule::Style(StyleRule::new(
            Selector::new(CompoundSelector::new().class("label")),
            vec![Declaration::new("display", "inline-block")],
        )))
        .with_rule(Rule::Media(MediaRule {
            query: MediaQuery::MinWidth(301),
            rules: vec![StyleRule::new(
                Selector::new(CompoundSelector::new().class("logo")),
                Vec::new(),
            )],
        }))
        .with_rule(Rule::Keyframes(keyframes.clone()));

    let scoped = sheet.scoped("wallet-scope");
    let css = scoped.to_string();
    assert!(css.contains(".wallet-scope .label {"));
    assert!(css.contains("    .wallet-scope .logo {"));
    assert_eq!(scoped.keyframes("fade"), Some(&keyframes));
}

#[test]
fn test_style_rules_at_width_respects_media() {
    let narrow = StyleRule::new(Selector::new(CompoundSelector::new().class("n")), Vec::new());
    let wide = StyleRule::new(Selector::new(CompoundSelector::new().class("w")), Vec::new());
    let sheet = Stylesheet::new()
        .with_rule(Rule::Media(MediaRule {
            query: MediaQuery::MaxWidth(300),
            rules: vec![narrow.clone()],
        }))
        .with_rule(Rule::Media(MediaRule {
            query: MediaQuery::MinWidth(301),
            rules: vec![wide.clone()],
        }));

    assert_eq!(sheet.style_rules_at_width(300), vec![&narrow]);
    assert_eq!(sheet.style_rules_at_width(301), vec![&wide]);
}
