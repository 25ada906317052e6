//! Label, wallet instrument and tag selection for the PayPal funding source.
//!
//! # Scope
//!
//! This crate implements:
//! - **Logo and label** ([`logo`], [`label`])
//!   - Base label through a pluggable [`BaseLabel`]
//!   - Personalization overlay ([`button_personalization`]): copy validation,
//!     impression beacon and timing styles
//!
//! - **Personalization timing** ([`plan_personalization`], [`personalization_style`])
//!   - Logo/default text/personalization text tracks per width branch
//!   - Keyframe animations rendered as CSS
//!
//! - **Wallet labels** ([`wallet_label`])
//!   - Legacy design and the new design behind an experiment flag
//!   - Masked number collapsing ([`collapse_mask`])
//!
//! - **Tags** ([`tag`])
//!   - Dual or safer copy by locale
//!
//! Every entry point takes a [`RenderEnv`] carrying the [`RenderConfig`] and
//! the collaborators that produce artwork, copy and styles. Back-end passes
//! render nothing for wallet labels, tags and personalization.

pub mod assets;
pub mod beacon;
pub mod config;
pub mod constants;
pub mod content;
pub mod env;
pub mod label;
pub mod options;
pub mod personalization;
pub mod styles;
pub mod tag;
pub mod timing;
pub mod ui;
pub mod wallet;

pub use assets::{DefaultGlyphs, Glyph, GlyphProvider};
pub use beacon::{BeaconDelivery, BeaconMarker, beacon_markers, dispatch_beacons};
pub use config::{ConfigError, RenderConfig, RenderMode};
pub use content::{ContentError, ContentTable, StaticContentTable, TagContent};
pub use env::RenderEnv;
pub use label::{BaseLabel, BasicLabel, button_personalization, label, logo};
pub use options::{
    ButtonLayout, ButtonText, ContentBundle, ExperimentFlags, Instrument, InstrumentType,
    LabelOptions, Locale, LogoColor, Personalization, TagOptions, Tracking, WalletLabelOptions,
};
pub use personalization::{personalization_text, personalization_tracker};
pub use styles::{InlineStyles, StyleInjector};
pub use tag::{TagChoice, tag};
pub use timing::{PersonalizationPlan, personalization_style, plan_personalization};
pub use wallet::{collapse_mask, wallet_label};
