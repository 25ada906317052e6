//! Style sheet injection into the render tree.

use paylabel_css::Stylesheet;
use paylabel_dom::{NodeId, RenderTree};

/// Turns a declarative style sheet into render tree nodes.
pub trait StyleInjector: Send + Sync {
    /// Append `sheet` under `parent` as a page-wide style fragment.
    fn inline(&self, tree: &mut RenderTree, parent: NodeId, sheet: &Stylesheet, nonce: Option<&str>);

    /// Append a wrapper under `parent` whose descendants alone are styled by
    /// `sheet`, and return the wrapper for the caller to fill.
    fn scoped(&self, tree: &mut RenderTree, parent: NodeId, sheet: &Stylesheet, scope: &str) -> NodeId;
}

/// Emits `<style>` elements holding serialized CSS.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStyles;

impl StyleInjector for InlineStyles {
    fn inline(&self, tree: &mut RenderTree, parent: NodeId, sheet: &Stylesheet, nonce: Option<&str>) {
        let attrs: Vec<(&str, &str)> = nonce.map(|n| ("nonce", n)).into_iter().collect();
        let style = tree.append_element(parent, "style", &attrs);
        tree.append_text(style, &sheet.to_string());
    }

    fn scoped(&self, tree: &mut RenderTree, parent: NodeId, sheet: &Stylesheet, scope: &str) -> NodeId {
        let wrapper = tree.append_element(parent, "div", &[("class", scope)]);
        let style = tree.append_element(wrapper, "style", &[]);
        tree.append_text(style, &sheet.scoped(scope).to_string());
        wrapper
    }
}
