//! Small building blocks shared by the label components.

use paylabel_css::{CompoundSelector, Declaration, Rule, Selector, StyleRule, Stylesheet};
use paylabel_dom::{NodeId, RenderTree};

use crate::constants::class;
use crate::env::RenderEnv;

/// Append a text run.
///
/// `optional` is the priority at which the host may drop the run when the
/// button is too narrow; lower numbers are dropped last.
pub fn text(
    tree: &mut RenderTree,
    parent: NodeId,
    content: &str,
    extra_classes: &[&str],
    optional: Option<u8>,
) {
    let classes = std::iter::once(class::TEXT)
        .chain(extra_classes.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    let optional = optional.map(|level| level.to_string());

    let mut attrs = vec![("class", classes.as_str())];
    if let Some(level) = &optional {
        attrs.push(("optional", level.as_str()));
    }
    let span = tree.append_element(parent, "span", &attrs);
    tree.append_text(span, content);
}

/// Append a single breaking space.
pub fn space(tree: &mut RenderTree, parent: NodeId) {
    let span = tree.append_element(parent, "span", &[("class", class::SPACE)]);
    tree.append_text(span, " ");
}

/// Append issuer card art.
pub fn card_art(tree: &mut RenderTree, parent: NodeId, url: &str) {
    let _ = tree.append_element(parent, "img", &[("class", class::CARD_ART), ("src", url)]);
}

fn tracking_beacon_stylesheet() -> Stylesheet {
    Stylesheet::new().with_rule(Rule::Style(StyleRule::new(
        Selector::new(CompoundSelector::new().class(class::TRACKING_BEACON)),
        vec![
            Declaration::new("visibility", "hidden"),
            Declaration::new("position", "absolute"),
            Declaration::new("height", "1px"),
            Declaration::new("width", "1px"),
        ],
    )))
}

/// Append an invisible impression pixel for `url`.
pub fn tracking_beacon(
    env: &RenderEnv,
    tree: &mut RenderTree,
    parent: NodeId,
    url: &str,
    nonce: Option<&str>,
) {
    env.styles
        .inline(tree, parent, &tracking_beacon_stylesheet(), nonce);

    let mut attrs = vec![("class", class::TRACKING_BEACON), ("src", url)];
    if let Some(nonce) = nonce {
        attrs.push(("nonce", nonce));
    }
    let _ = tree.append_element(parent, "img", &attrs);
}
