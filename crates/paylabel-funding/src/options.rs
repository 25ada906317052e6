//! Option bundles accepted by the entry points.
//!
//! Every field that the host may leave out is either an `Option` or has a
//! serde default, so a missing field means "feature not applicable".

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Logo colour theme.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogoColor {
    /// Theme default for the button colour.
    #[default]
    Default,
    /// Blue logo.
    Blue,
    /// Black logo.
    Black,
    /// White logo.
    White,
}

/// How multiple buttons are stacked.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ButtonLayout {
    /// Buttons side by side.
    Horizontal,
    /// Buttons stacked.
    #[default]
    Vertical,
}

/// Impression tracking attached to personalization copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracking {
    /// URL to hit once when the copy is shown.
    #[serde(default)]
    pub impression: Option<String>,
}

/// Personalized button copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonText {
    /// The copy itself.
    pub text: String,
    /// Impression tracking for the copy.
    #[serde(default)]
    pub tracking: Option<Tracking>,
}

/// Personalization payload from the experience service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personalization {
    /// Copy shown alongside the default label.
    #[serde(default)]
    pub button_text: Option<ButtonText>,
}

/// Inputs to [`crate::label`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelOptions {
    /// Logo colour theme for the base label.
    pub logo_color: LogoColor,
    /// Personalization payload, if any.
    pub personalization: Option<Personalization>,
    /// Button stacking.
    pub layout: ButtonLayout,
    /// Whether more than one button is rendered.
    pub multiple: bool,
    /// Whether a tagline is requested.
    pub tagline: bool,
    /// Whether a label is requested.
    pub label: bool,
    /// CSP nonce for inline resources.
    pub nonce: Option<String>,
}

impl LabelOptions {
    /// Options with only a personalization text set.
    #[must_use]
    pub fn with_personalization_text(text: &str) -> Self {
        Self {
            personalization: Some(Personalization {
                button_text: Some(ButtonText {
                    text: text.to_string(),
                    tracking: None,
                }),
            }),
            label: true,
            ..Self::default()
        }
    }
}

/// A locale as language plus optional country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// ISO 639-1 language code.
    pub lang: String,
    /// ISO 3166-1 country code.
    #[serde(default)]
    pub country: Option<String>,
}

impl Locale {
    /// A locale with only a language.
    #[must_use]
    pub fn lang(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
            country: None,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::lang("en")
    }
}

/// The kind of wallet instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InstrumentType {
    /// A debit or credit card.
    Card,
    /// A bank account.
    Bank,
    /// A PayPal credit line.
    Credit,
    /// The PayPal balance.
    Balance,
}

/// A wallet-held payment means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// What kind of instrument this is.
    #[serde(rename = "type")]
    pub instrument_type: InstrumentType,
    /// Display label, usually a masked number.
    #[serde(default)]
    pub label: Option<String>,
    /// Issuer art overriding the type glyph.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Whether the instrument can pay without another authentication step.
    #[serde(default)]
    pub one_click: bool,
}

impl Instrument {
    /// An instrument of `instrument_type` with nothing else set.
    #[must_use]
    pub const fn new(instrument_type: InstrumentType) -> Self {
        Self {
            instrument_type,
            label: None,
            logo_url: None,
            one_click: false,
        }
    }
}

/// Locale-specific wallet strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBundle {
    /// "Pay Now"
    pub pay_now: String,
    /// "Pay with"
    pub pay_with: String,
    /// Label for a credit line.
    #[serde(default)]
    pub credit: Option<String>,
    /// Label for the PayPal balance.
    #[serde(default)]
    pub balance: Option<String>,
}

/// Experiment switches that affect wallet rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperimentFlags {
    /// Use the new wallet label design.
    pub new_wallet_design: bool,
}

/// Inputs to [`crate::wallet_label`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletLabelOptions {
    /// Logo colour theme.
    #[serde(default)]
    pub logo_color: LogoColor,
    /// The instrument to show.
    pub instrument: Instrument,
    /// Buyer locale.
    #[serde(default)]
    pub locale: Locale,
    /// Wallet strings, if supplied.
    #[serde(default)]
    pub content: Option<ContentBundle>,
    /// Whether the buyer commits to pay on the PayPal side.
    #[serde(default)]
    pub commit: bool,
    /// Experiment switches.
    #[serde(default)]
    pub experiment: ExperimentFlags,
}

impl WalletLabelOptions {
    /// Options for `instrument` with every other field defaulted.
    #[must_use]
    pub fn new(instrument: Instrument) -> Self {
        Self {
            logo_color: LogoColor::default(),
            instrument,
            locale: Locale::default(),
            content: None,
            commit: false,
            experiment: ExperimentFlags::default(),
        }
    }
}

/// Inputs to [`crate::tag`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagOptions {
    /// Whether more than one button is rendered.
    pub multiple: bool,
    /// Buyer locale.
    pub locale: Locale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_options_from_json_defaults_missing_fields() {
        let opts: LabelOptions = serde_json::from_str(
            r#"{"layout":"horizontal","personalization":{"buttonText":{"text":"Hi","tracking":{"impression":"https://t.test/i"}}}}"#,
        )
        .unwrap();
        assert_eq!(opts.layout, ButtonLayout::Horizontal);
        assert!(!opts.multiple);
        assert!(!opts.label);
        assert_eq!(opts.nonce, None);
        let text = opts.personalization.and_then(|p| p.button_text).unwrap();
        assert_eq!(text.text, "Hi");
        assert_eq!(
            text.tracking.and_then(|t| t.impression).as_deref(),
            Some("https://t.test/i")
        );
    }

    #[test]
    fn test_instrument_type_parses_lowercase() {
        let instrument: Instrument =
            serde_json::from_str(r#"{"type":"balance","oneClick":true}"#).unwrap();
        assert_eq!(instrument.instrument_type, InstrumentType::Balance);
        assert!(instrument.one_click);
        assert_eq!("CARD".parse::<InstrumentType>().unwrap(), InstrumentType::Card);
        assert_eq!(InstrumentType::Credit.to_string(), "credit");
    }
}
