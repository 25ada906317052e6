//! Wallet instrument labels, in the legacy and the new design.

use paylabel_css::{CompoundSelector, Declaration, Rule, Selector, StyleRule, Stylesheet};
use paylabel_dom::{NodeId, RenderTree};
use tracing::debug;

use crate::assets::Glyph;
use crate::constants::class;
use crate::env::RenderEnv;
use crate::options::{ContentBundle, Instrument, InstrumentType, WalletLabelOptions};
use crate::ui;

/// Class of the wrapper the wallet style sheet is scoped to.
pub const WALLET_STYLE_SCOPE: &str = "paypal-wallet-label-style";

const MASK_RUN: &str = "••••";
const MASK_SHORT: &str = "••";

/// Collapse every run of four masking dots to two, e.g. `1234••••5678` to `1234••5678`.
#[must_use]
pub fn collapse_mask(label: &str) -> String {
    label.replace(MASK_RUN, MASK_SHORT)
}

/// "Pay Now" for one-click instruments on commit flows, "Pay with" otherwise.
#[must_use]
pub fn pay_label<'a>(instrument: &Instrument, commit: bool, content: &'a ContentBundle) -> &'a str {
    if instrument.one_click && commit {
        &content.pay_now
    } else {
        &content.pay_with
    }
}

/// Logo art for an instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogoArt<'a> {
    CardArt(&'a str),
    Glyph(Glyph),
}

fn rule(compound: CompoundSelector, declarations: &[(&str, &str)]) -> Rule {
    Rule::Style(StyleRule::new(
        Selector::new(compound),
        declarations
            .iter()
            .map(|(name, value)| Declaration::new(name, *value))
            .collect(),
    ))
}

/// Styles shared by both wallet designs.
#[must_use]
pub fn wallet_stylesheet() -> Stylesheet {
    [
        rule(
            CompoundSelector::new().class("wallet-label"),
            &[("display", "inline-flex"), ("align-items", "center"), ("white-space", "nowrap")],
        ),
        rule(
            CompoundSelector::new().class("wallet-label-new"),
            &[("display", "inline-flex"), ("align-items", "center"), ("white-space", "nowrap")],
        ),
        rule(
            CompoundSelector::new().class("divider"),
            &[("margin", "0 4px"), ("opacity", "0.6")],
        ),
        rule(
            CompoundSelector::new().tag("img").class(class::CARD_ART),
            &[("height", "100%"), ("max-height", "20px"), ("border-radius", "3px")],
        ),
        rule(
            CompoundSelector::new().class("limit"),
            &[
                ("max-width", "140px"),
                ("overflow", "hidden"),
                ("text-overflow", "ellipsis"),
            ],
        ),
    ]
    .into_iter()
    .fold(Stylesheet::new(), Stylesheet::with_rule)
}

/// The wallet label for `opts`, or nothing on a back-end pass.
///
/// The experiment flag picks the design; the new design also renders nothing
/// for card and bank instruments without a label.
#[must_use]
pub fn wallet_label(env: &RenderEnv, opts: &WalletLabelOptions) -> Option<RenderTree> {
    if env.is_backend() {
        return None;
    }

    if opts.experiment.new_wallet_design {
        debug!(instrument = %opts.instrument.instrument_type, "new wallet design");
        wallet_label_new(env, opts)
    } else {
        debug!(instrument = %opts.instrument.instrument_type, "legacy wallet design");
        Some(wallet_label_legacy(env, opts))
    }
}

fn render_logo_art(
    env: &RenderEnv,
    tree: &mut RenderTree,
    parent: NodeId,
    art: &LogoArt<'_>,
    opts: &WalletLabelOptions,
) {
    match art {
        LogoArt::CardArt(url) => ui::card_art(tree, parent, url),
        LogoArt::Glyph(glyph) => env.glyphs.render(tree, parent, glyph, opts.logo_color),
    }
}

fn wallet_label_legacy(env: &RenderEnv, opts: &WalletLabelOptions) -> RenderTree {
    let instrument = &opts.instrument;

    let art = match (instrument.logo_url.as_deref(), instrument.instrument_type) {
        (Some(url), _) => Some(LogoArt::CardArt(url)),
        (None, InstrumentType::Card) => Some(LogoArt::Glyph(Glyph::Card)),
        (None, InstrumentType::Bank) => Some(LogoArt::Glyph(Glyph::Bank)),
        (None, InstrumentType::Credit) => Some(LogoArt::Glyph(Glyph::CreditLogo {
            locale: opts.locale.clone(),
        })),
        (None, InstrumentType::Balance) => None,
    };

    let mut tree = RenderTree::new();
    let scope = env
        .styles
        .scoped(&mut tree, NodeId::ROOT, &wallet_stylesheet(), WALLET_STYLE_SCOPE);
    let root = tree.append_element(scope, "div", &[("class", "wallet-label")]);

    let mark = tree.append_element(root, "div", &[("class", "paypal-mark")]);
    env.glyphs.render(&mut tree, mark, &Glyph::PpLogo, opts.logo_color);

    if let Some(content) = opts.content.as_ref().filter(|_| instrument.one_click && opts.commit) {
        let pay = tree.append_element(root, "div", &[("class", "pay-label")]);
        ui::space(&mut tree, pay);
        ui::text(&mut tree, pay, &content.pay_now, &[], None);
    }

    let wordmark = tree.append_element(root, "div", &[("class", "paypal-wordmark")]);
    ui::space(&mut tree, wordmark);
    env.glyphs.render(&mut tree, wordmark, &Glyph::PayPalLogo, opts.logo_color);

    let divider = tree.append_element(root, "div", &[("class", "divider")]);
    tree.append_text(divider, "|");

    if let Some(art) = &art {
        let logo = tree.append_element(root, "div", &[("class", "logo"), ("optional", "1")]);
        render_logo_art(env, &mut tree, logo, art, opts);
        ui::space(&mut tree, logo);
    }

    let label = tree.append_element(root, "div", &[("class", "label")]);
    ui::text(
        &mut tree,
        label,
        instrument.label.as_deref().unwrap_or_default(),
        &["limit"],
        None,
    );

    tree
}

fn wallet_label_new(env: &RenderEnv, opts: &WalletLabelOptions) -> Option<RenderTree> {
    let instrument = &opts.instrument;
    let content = opts.content.as_ref();

    let (art, label) = match instrument.instrument_type {
        InstrumentType::Card | InstrumentType::Bank => {
            let Some(raw) = instrument.label.as_deref().filter(|l| !l.is_empty()) else {
                debug!("card or bank instrument without a label; nothing to render");
                return None;
            };
            let glyph = if instrument.instrument_type == InstrumentType::Card {
                Glyph::Card
            } else {
                Glyph::Bank
            };
            let art = instrument
                .logo_url
                .as_deref()
                .map_or(LogoArt::Glyph(glyph), LogoArt::CardArt);
            (art, Some(collapse_mask(raw)))
        }
        InstrumentType::Credit => (
            LogoArt::Glyph(Glyph::CreditMark),
            content.and_then(|c| c.credit.clone()),
        ),
        InstrumentType::Balance => (
            LogoArt::Glyph(Glyph::PayPalMark),
            content.and_then(|c| c.balance.clone()),
        ),
    };

    let mut tree = RenderTree::new();
    let scope = env
        .styles
        .scoped(&mut tree, NodeId::ROOT, &wallet_stylesheet(), WALLET_STYLE_SCOPE);
    let root = tree.append_element(scope, "div", &[("class", "wallet-label-new")]);

    let mark = tree.append_element(root, "div", &[("class", "paypal-mark")]);
    env.glyphs.render(&mut tree, mark, &Glyph::PpLogo, opts.logo_color);
    ui::space(&mut tree, mark);

    if let Some(content) = content {
        let pay = tree.append_element(root, "div", &[("class", "pay-label"), ("optional", "2")]);
        ui::space(&mut tree, pay);
        ui::text(&mut tree, pay, pay_label(instrument, opts.commit, content), &[], None);
        ui::space(&mut tree, pay);
    }

    let logo = tree.append_element(root, "div", &[("class", "logo"), ("optional", "1")]);
    render_logo_art(env, &mut tree, logo, &art, opts);

    if let Some(label) = label.filter(|l| !l.is_empty()) {
        let node = tree.append_element(root, "div", &[("class", "label")]);
        ui::space(&mut tree, node);
        ui::text(&mut tree, node, &label, &[], None);
    }

    Some(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_mask_every_run() {
        assert_eq!(collapse_mask("1234••••5678••••"), "1234••5678••");
        assert_eq!(collapse_mask("Visa ••••1111"), "Visa ••1111");
        assert_eq!(collapse_mask("no mask"), "no mask");
        assert_eq!(collapse_mask("•••"), "•••");
    }

    #[test]
    fn test_pay_label_needs_one_click_and_commit() {
        let content = ContentBundle {
            pay_now: "Pay Now".to_string(),
            pay_with: "Pay with".to_string(),
            ..ContentBundle::default()
        };
        let mut instrument = Instrument::new(InstrumentType::Card);
        assert_eq!(pay_label(&instrument, true, &content), "Pay with");
        instrument.one_click = true;
        assert_eq!(pay_label(&instrument, false, &content), "Pay with");
        assert_eq!(pay_label(&instrument, true, &content), "Pay Now");
    }
}
