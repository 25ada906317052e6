//! The tagline shown under the buttons.

use paylabel_common::warning::warn_once;
use paylabel_dom::{NodeId, RenderTree};
use tracing::debug;

use crate::content::TagContent;
use crate::env::RenderEnv;
use crate::options::TagOptions;
use crate::ui;

/// Class of a dual tag run.
pub const TAG_DUAL_CLASS: &str = "tag-dual";
/// Class of a safer tag run.
pub const TAG_SAFER_CLASS: &str = "tag-safer";
/// Warning emitted once when a locale has no tag content.
pub const MISSING_LOCALE_WARNING: &str = "no tag content for requested locale";

/// Which tag copy a locale's content resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagChoice<'a> {
    /// The multiple-buttons copy.
    Dual(&'a str),
    /// The default copy.
    Safer(&'a str),
}

impl<'a> TagChoice<'a> {
    /// Pick the dual tag for multiple buttons when the locale defines a
    /// non-empty one.
    #[must_use]
    pub fn select(content: &'a TagContent, multiple: bool) -> Self {
        match content.dual_tag.as_deref() {
            Some(dual) if multiple && !dual.is_empty() => Self::Dual(dual),
            _ => Self::Safer(&content.safer_tag),
        }
    }

    /// The copy itself.
    #[must_use]
    pub const fn text(self) -> &'a str {
        match self {
            Self::Dual(text) | Self::Safer(text) => text,
        }
    }

    const fn class(self) -> &'static str {
        match self {
            Self::Dual(_) => TAG_DUAL_CLASS,
            Self::Safer(_) => TAG_SAFER_CLASS,
        }
    }
}

/// The tag for `opts`, or nothing on a back-end pass or for an unknown locale.
#[must_use]
pub fn tag(env: &RenderEnv, opts: &TagOptions) -> Option<RenderTree> {
    if env.is_backend() {
        return None;
    }

    let lang = opts.locale.lang.as_str();
    let Some(content) = env.content.tag_content(lang) else {
        debug!(lang, "no tag content");
        warn_once("Tag", MISSING_LOCALE_WARNING);
        return None;
    };

    let choice = TagChoice::select(content, opts.multiple);
    debug!(lang, ?choice, "tag selected");

    let mut tree = RenderTree::new();
    ui::text(&mut tree, NodeId::ROOT, choice.text(), &[choice.class()], Some(1));
    Some(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(dual: Option<&str>) -> TagContent {
        TagContent {
            dual_tag: dual.map(str::to_string),
            safer_tag: "Safer".to_string(),
        }
    }

    #[test]
    fn test_select_dual_only_for_multiple() {
        let with_dual = content(Some("Dual"));
        assert_eq!(TagChoice::select(&with_dual, true), TagChoice::Dual("Dual"));
        assert_eq!(TagChoice::select(&with_dual, false), TagChoice::Safer("Safer"));
    }

    #[test]
    fn test_select_falls_back_without_dual() {
        let no_dual = content(None);
        assert_eq!(TagChoice::select(&no_dual, true), TagChoice::Safer("Safer"));
        assert_eq!(TagChoice::select(&no_dual, true).text(), "Safer");
    }

    #[test]
    fn test_select_treats_empty_dual_as_absent() {
        let empty_dual = content(Some(""));
        assert_eq!(TagChoice::select(&empty_dual, true), TagChoice::Safer("Safer"));
        assert_eq!(TagChoice::select(&empty_dual, false), TagChoice::Safer("Safer"));
    }
}
