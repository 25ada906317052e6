//! Class names, attribute names and timing constants shared with the button markup.

/// Class names emitted by the label components and targeted by their styles.
pub mod class {
    /// The button container rendered by the host page.
    pub const BUTTON: &str = "paypal-button";
    /// Added to the page once the button DOM has been mounted.
    pub const DOM_READY: &str = "dom-ready";
    /// Any text run inside a button.
    pub const TEXT: &str = "paypal-button-text";
    /// A single breaking space between label parts.
    pub const SPACE: &str = "paypal-button-space";
    /// The personalization text run.
    pub const PERSONALIZATION_TEXT: &str = "personalization-text";
    /// Text the host has hidden.
    pub const HIDDEN: &str = "hidden";
    /// Impression tracking pixel.
    pub const TRACKING_BEACON: &str = "tracking-beacon";
    /// Issuer-supplied card art image.
    pub const CARD_ART: &str = "card-art";
    /// Any logo glyph; combined with `paypal-logo-<name>`.
    pub const LOGO: &str = "paypal-logo";
}

/// Attribute carrying the funding source on the button container.
pub const ATTRIBUTE_FUNDING_SOURCE: &str = "data-funding-source";

/// Funding source value for PayPal buttons.
pub const FUNDING_PAYPAL: &str = "paypal";

/// Length of the personalization sequence, in seconds.
pub const PERSONALIZATION_DURATION_SECS: u32 = 5;

/// Widest viewport (CSS px) on which personalization text is always hidden.
pub const PERSONALIZATION_MIN_WIDTH: u32 = 300;
