//! Logo glyphs and the provider that renders them.

use paylabel_dom::{NodeId, RenderTree};

use crate::constants::class;
use crate::options::{Locale, LogoColor};

/// A logo or mark from the glyph library.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// The "PP" monogram.
    PpLogo,
    /// The "PayPal" wordmark.
    PayPalLogo,
    /// The "PayPal Credit" logo, which varies by locale.
    CreditLogo {
        /// Buyer locale.
        locale: Locale,
    },
    /// The compact credit mark.
    CreditMark,
    /// The compact PayPal mark.
    PayPalMark,
    /// Generic card glyph.
    Card,
    /// Generic bank glyph.
    Bank,
}

impl Glyph {
    /// Name used in the `paypal-logo-<name>` class.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PpLogo => "pp",
            Self::PayPalLogo => "paypal",
            Self::CreditLogo { .. } => "credit",
            Self::CreditMark => "credit-mark",
            Self::PayPalMark => "paypal-mark",
            Self::Card => "glyph-card",
            Self::Bank => "glyph-bank",
        }
    }
}

/// Renders glyphs into a tree. The asset library itself lives outside this crate.
pub trait GlyphProvider: Send + Sync {
    /// Append `glyph` in `color` as children of `parent`.
    fn render(&self, tree: &mut RenderTree, parent: NodeId, glyph: &Glyph, color: LogoColor);
}

/// Renders each glyph as a classed placeholder image.
///
/// The host's asset loader swaps the placeholder for the real artwork by class.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGlyphs;

impl GlyphProvider for DefaultGlyphs {
    fn render(&self, tree: &mut RenderTree, parent: NodeId, glyph: &Glyph, color: LogoColor) {
        let classes = format!(
            "{logo} {logo}-{name} {logo}-color-{color}",
            logo = class::LOGO,
            name = glyph.name(),
        );
        let locale = match glyph {
            Glyph::CreditLogo { locale } => Some(match &locale.country {
                Some(country) => format!("{}_{country}", locale.lang),
                None => locale.lang.clone(),
            }),
            _ => None,
        };

        let mut attrs = vec![("class", classes.as_str()), ("alt", glyph.name())];
        if let Some(locale) = &locale {
            attrs.push(("data-locale", locale.as_str()));
        }
        let _ = tree.append_element(parent, "img", &attrs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_glyph_classes() {
        let mut tree = RenderTree::new();
        DefaultGlyphs.render(&mut tree, NodeId::ROOT, &Glyph::PayPalLogo, LogoColor::Blue);
        assert_eq!(
            tree.to_html(),
            r#"<img alt="paypal" class="paypal-logo paypal-logo-paypal paypal-logo-color-blue">"#
        );
    }

    #[test]
    fn test_credit_logo_carries_locale() {
        let mut tree = RenderTree::new();
        let locale = Locale {
            lang: "de".to_string(),
            country: Some("DE".to_string()),
        };
        DefaultGlyphs.render(&mut tree, NodeId::ROOT, &Glyph::CreditLogo { locale }, LogoColor::Black);
        let img = tree.find_by_tag("img")[0];
        assert_eq!(tree.as_element(img).unwrap().attr("data-locale"), Some("de_DE"));
    }
}
