//! The PayPal logo and button label, with the personalization overlay.

use paylabel_dom::{NodeId, RenderTree};
use tracing::debug;

use crate::assets::Glyph;
use crate::constants::class;
use crate::env::RenderEnv;
use crate::options::{LabelOptions, LogoColor};
use crate::personalization::{personalization_text, personalization_tracker};
use crate::timing::personalization_style;
use crate::ui;

/// Renders the non-personalized part of a label.
pub trait BaseLabel: Send + Sync {
    /// Append the base label for `opts` under `parent`.
    fn render(&self, env: &RenderEnv, tree: &mut RenderTree, parent: NodeId, opts: &LabelOptions);
}

/// The plain PayPal logo as the base label.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicLabel;

impl BaseLabel for BasicLabel {
    fn render(&self, env: &RenderEnv, tree: &mut RenderTree, parent: NodeId, opts: &LabelOptions) {
        render_logo(env, tree, parent, opts.logo_color);
    }
}

fn render_logo(env: &RenderEnv, tree: &mut RenderTree, parent: NodeId, color: LogoColor) {
    env.glyphs.render(tree, parent, &Glyph::PpLogo, color);
    ui::space(tree, parent);
    env.glyphs.render(tree, parent, &Glyph::PayPalLogo, color);
}

/// The "PP" monogram followed by the "PayPal" wordmark.
#[must_use]
pub fn logo(env: &RenderEnv, color: LogoColor) -> RenderTree {
    let mut tree = RenderTree::new();
    render_logo(env, &mut tree, NodeId::ROOT, color);
    tree
}

/// The base label followed by the personalization overlay, when one applies.
#[must_use]
pub fn label(env: &RenderEnv, opts: &LabelOptions) -> RenderTree {
    let mut tree = RenderTree::new();
    env.base_label.render(env, &mut tree, NodeId::ROOT, opts);

    if let Some(overlay) = button_personalization(env, opts) {
        tree.graft(NodeId::ROOT, &overlay);
    }
    tree
}

/// The personalization overlay alone: copy, impression beacon and timing styles.
///
/// Nothing is rendered on a back-end pass, when a tagline is requested, when
/// no label is requested, or when there is no usable copy.
#[must_use]
pub fn button_personalization(env: &RenderEnv, opts: &LabelOptions) -> Option<RenderTree> {
    if env.is_backend() {
        return None;
    }
    if opts.tagline || !opts.label {
        debug!(tagline = opts.tagline, label = opts.label, "personalization not attempted");
        return None;
    }
    let text = personalization_text(opts)?;

    let mut tree = RenderTree::new();
    ui::text(
        &mut tree,
        NodeId::ROOT,
        text,
        &[class::PERSONALIZATION_TEXT],
        Some(2),
    );

    if let Some(url) = personalization_tracker(opts) {
        ui::tracking_beacon(env, &mut tree, NodeId::ROOT, url, opts.nonce.as_deref());
    }

    if let Some(sheet) = personalization_style(&env.config, opts) {
        env.styles.inline(&mut tree, NodeId::ROOT, &sheet, None);
    }

    Some(tree)
}
