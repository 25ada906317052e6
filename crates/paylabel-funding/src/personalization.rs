//! Personalization copy extraction and validation.

use tracing::debug;

use crate::options::{ButtonLayout, LabelOptions};

/// Personalization copy to show, if any.
///
/// Copy containing `{` or `}` is an unresolved template and is dropped, as is
/// any copy on horizontally stacked multiple buttons where there is no room.
#[must_use]
pub fn personalization_text(opts: &LabelOptions) -> Option<&str> {
    let text = opts
        .personalization
        .as_ref()
        .and_then(|p| p.button_text.as_ref())
        .map(|b| b.text.as_str())
        .filter(|text| !text.is_empty())?;

    if text.contains(['{', '}']) {
        debug!(text, "personalization text has template braces; dropping");
        return None;
    }

    if opts.layout == ButtonLayout::Horizontal && opts.multiple {
        debug!("personalization text suppressed for horizontal multiple buttons");
        return None;
    }

    Some(text)
}

/// Impression tracking URL for the personalization copy, if any.
#[must_use]
pub fn personalization_tracker(opts: &LabelOptions) -> Option<&str> {
    opts.personalization
        .as_ref()
        .and_then(|p| p.button_text.as_ref())
        .and_then(|b| b.tracking.as_ref())
        .and_then(|t| t.impression.as_deref())
        .filter(|url| !url.is_empty())
}
