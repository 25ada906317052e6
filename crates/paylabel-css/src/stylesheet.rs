//! Style sheet model and CSS text serialization.
//!
//! The shapes follow the CSS Syntax rule taxonomy (style rules and at-rules),
//! but only the at-rules the label components emit are modelled:
//! `@media` with a single width condition, and `@keyframes`.

use std::fmt;

use crate::selector::{CompoundSelector, Selector};

/// Indentation used when serializing nested blocks.
const INDENT: &str = "    ";

/// [§ 5.4.4 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-a-declaration)
///
/// A CSS declaration (e.g., `opacity: 0`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The property name.
    pub name: String,
    /// The property value, already serialized.
    pub value: String,
    /// Whether the declaration has `!important`.
    pub important: bool,
}

impl Declaration {
    /// A normal (not `!important`) declaration.
    #[must_use]
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            important: false,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)?;
        if self.important {
            write!(f, " !important")?;
        }
        write!(f, ";")
    }
}

/// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-a-qualified-rule)
///
/// A CSS style rule (selectors + declarations).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// The list of selectors for this rule.
    pub selectors: Vec<Selector>,
    /// The declarations in this rule block.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// A rule with a single selector.
    #[must_use]
    pub fn new(selector: Selector, declarations: Vec<Declaration>) -> Self {
        Self {
            selectors: vec![selector],
            declarations,
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = INDENT.repeat(depth);
        let selectors: Vec<String> = self.selectors.iter().map(ToString::to_string).collect();
        writeln!(f, "{pad}{} {{", selectors.join(", "))?;
        for declaration in &self.declarations {
            writeln!(f, "{pad}{INDENT}{declaration}")?;
        }
        writeln!(f, "{pad}}}")
    }
}

/// [Media Queries Level 4 § 4 Media Features](https://www.w3.org/TR/mediaqueries-4/#media-descriptor-table)
///
/// A screen-only width condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaQuery {
    /// `only screen and (max-width: Npx)`
    MaxWidth(u32),
    /// `only screen and (min-width: Npx)`
    MinWidth(u32),
}

impl MediaQuery {
    /// Whether a viewport of `width` CSS pixels satisfies this query.
    #[must_use]
    pub const fn matches_width(self, width: u32) -> bool {
        match self {
            Self::MaxWidth(max) => width <= max,
            Self::MinWidth(min) => width >= min,
        }
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxWidth(px) => write!(f, "only screen and (max-width: {px}px)"),
            Self::MinWidth(px) => write!(f, "only screen and (min-width: {px}px)"),
        }
    }
}

/// [CSS Conditional Rules § 6 Media Queries](https://www.w3.org/TR/css-conditional-3/#at-media)
///
/// An `@media` block holding style rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRule {
    /// The condition.
    pub query: MediaQuery,
    /// Style rules applied when the condition holds.
    pub rules: Vec<StyleRule>,
}

/// [CSS Animations § 3 Keyframes](https://www.w3.org/TR/css-animations-1/#keyframes)
///
/// One keyframe selector and its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyframe {
    /// Position in the animation, 0 to 100.
    pub percent: u8,
    /// Declarations in effect at this position.
    pub declarations: Vec<Declaration>,
}

/// [CSS Animations § 3 Keyframes](https://www.w3.org/TR/css-animations-1/#keyframes)
///
/// "Keyframes are used to specify the values for the animating properties at
/// various points during the animation."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyframesRule {
    /// The animation name referenced by `animation-name`.
    pub name: String,
    /// Keyframes in ascending percent order.
    pub keyframes: Vec<Keyframe>,
}

/// [§ 5.3.3 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
///
/// A CSS rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// A style rule (qualified rule).
    Style(StyleRule),
    /// An `@media` rule.
    Media(MediaRule),
    /// An `@keyframes` rule.
    Keyframes(KeyframesRule),
}

/// [§ 5.3.2 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// A style sheet built in code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// The list of rules in the stylesheet.
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// An empty style sheet.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Whether the sheet has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find a keyframes rule by animation name.
    #[must_use]
    pub fn keyframes(&self, name: &str) -> Option<&KeyframesRule> {
        self.rules.iter().find_map(|rule| match rule {
            Rule::Keyframes(k) if k.name == name => Some(k),
            _ => None,
        })
    }

    /// Style rules in effect at a viewport `width`: top-level rules plus those
    /// inside matching `@media` blocks, in source order.
    #[must_use]
    pub fn style_rules_at_width(&self, width: u32) -> Vec<&StyleRule> {
        let mut out = Vec::new();
        for rule in &self.rules {
            match rule {
                Rule::Style(style) => out.push(style),
                Rule::Media(media) if media.query.matches_width(width) => {
                    out.extend(media.rules.iter());
                }
                Rule::Media(_) | Rule::Keyframes(_) => {}
            }
        }
        out
    }

    /// Restrict every style rule to descendants of `.scope_class`.
    ///
    /// Rules nested in `@media` are scoped as well; keyframes are global by
    /// nature and left untouched.
    #[must_use]
    pub fn scoped(&self, scope_class: &str) -> Self {
        let scope = || CompoundSelector::new().class(scope_class);
        let scope_rule = |rule: &StyleRule| StyleRule {
            selectors: rule.selectors.iter().map(|s| s.within(scope())).collect(),
            declarations: rule.declarations.clone(),
        };

        let rules = self
            .rules
            .iter()
            .map(|rule| match rule {
                Rule::Style(style) => Rule::Style(scope_rule(style)),
                Rule::Media(media) => Rule::Media(MediaRule {
                    query: media.query,
                    rules: media.rules.iter().map(&scope_rule).collect(),
                }),
                Rule::Keyframes(k) => Rule::Keyframes(k.clone()),
            })
            .collect();
        Self { rules }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            match rule {
                Rule::Style(style) => style.write_indented(f, 0)?,
                Rule::Media(media) => {
                    writeln!(f, "@media {} {{", media.query)?;
                    for style in &media.rules {
                        style.write_indented(f, 1)?;
                    }
                    writeln!(f, "}}")?;
                }
                Rule::Keyframes(keyframes) => {
                    writeln!(f, "@keyframes {} {{", keyframes.name)?;
                    for frame in &keyframes.keyframes {
                        writeln!(f, "{INDENT}{}% {{", frame.percent)?;
                        for declaration in &frame.declarations {
                            writeln!(f, "{INDENT}{INDENT}{declaration}")?;
                        }
                        writeln!(f, "{INDENT}}}")?;
                    }
                    writeln!(f, "}}")?;
                }
            }
        }
        Ok(())
    }
}
