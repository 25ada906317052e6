//! Personalization timing plan.
//!
//! The plan is pure data: which elements get which base states and which
//! keyframed animation, per responsive branch. [`PersonalizationPlan::to_stylesheet`]
//! is the adapter that realizes it as CSS; the browser runs the animation.
//!
//! Over the five-second window on wide buttons:
//!
//! ```text
//!                 0%    15%   25%         70%   85%   100%
//! logo            exp   cmp   cmp         cmp   cmp   exp
//! default text    cmp   .     .           .     cmp   exp
//! personalization cmp   cmp   exp         exp   cmp   cmp
//! ```

use paylabel_css::{
    AnimationValue, CompoundSelector, Declaration, Keyframe, KeyframesRule, MediaQuery, MediaRule,
    Rule, Selector, StyleRule, Stylesheet,
};
use serde::Serialize;
use strum_macros::Display;

use crate::config::RenderConfig;
use crate::constants::{
    ATTRIBUTE_FUNDING_SOURCE, FUNDING_PAYPAL, PERSONALIZATION_DURATION_SECS,
    PERSONALIZATION_MIN_WIDTH, class,
};
use crate::options::LabelOptions;
use crate::personalization::personalization_text;

/// A visual state an element can be put in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VisualState {
    /// Out of flow and invisible.
    Hidden,
    /// In flow and visible.
    Visible,
    /// Zero width and transparent.
    Compressed,
    /// Full width and opaque.
    Expanded,
}

impl VisualState {
    /// Declarations that put an element in this state.
    #[must_use]
    pub fn declarations(self) -> Vec<Declaration> {
        match self {
            Self::Hidden => vec![
                Declaration::new("position", "absolute"),
                Declaration::new("visibility", "hidden"),
            ],
            Self::Visible => vec![
                Declaration::new("position", "static"),
                Declaration::new("visibility", "visible"),
            ],
            Self::Compressed => vec![
                Declaration::new("max-width", "0%"),
                Declaration::new("opacity", "0"),
            ],
            Self::Expanded => vec![
                Declaration::new("max-width", "100%"),
                Declaration::new("opacity", "1"),
            ],
        }
    }
}

/// The elements a plan animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Target {
    /// The PayPal wordmark.
    Logo,
    /// Label text other than the personalization copy.
    DefaultText,
    /// The personalization copy.
    PersonalizationText,
}

impl Target {
    /// Selector for this target inside a ready PayPal button.
    #[must_use]
    pub fn selector(self) -> Selector {
        let subject = match self {
            Self::Logo => CompoundSelector::new()
                .class(class::LOGO)
                .class(&format!("{}-{FUNDING_PAYPAL}", class::LOGO)),
            Self::DefaultText => CompoundSelector::new()
                .class(class::TEXT)
                .not(CompoundSelector::new().class(class::PERSONALIZATION_TEXT))
                .not(CompoundSelector::new().class(class::HIDDEN)),
            Self::PersonalizationText => CompoundSelector::new().class(class::PERSONALIZATION_TEXT),
        };

        Selector::new(CompoundSelector::new().class(class::DOM_READY))
            .descendant(
                CompoundSelector::new()
                    .class(class::BUTTON)
                    .attr_eq(ATTRIBUTE_FUNDING_SOURCE, FUNDING_PAYPAL),
            )
            .descendant(subject)
    }
}

/// A point in an animation: at `percent` of the window the element is in `state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Phase {
    /// Position in the window, 0 to 100.
    pub percent: u8,
    /// State at that position.
    pub state: VisualState,
}

const fn phase(percent: u8, state: VisualState) -> Phase {
    Phase { percent, state }
}

/// A named keyframed animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimedAnimation {
    /// Keyframes rule name.
    pub name: &'static str,
    /// Length in seconds.
    pub duration_secs: u32,
    /// Phases in ascending percent order, starting at 0 and ending at 100.
    pub phases: Vec<Phase>,
}

impl TimedAnimation {
    /// The state the animation holds at `percent`: the last phase at or before it.
    #[must_use]
    pub fn state_at(&self, percent: u8) -> Option<VisualState> {
        self.phases
            .iter()
            .take_while(|p| p.percent <= percent)
            .last()
            .map(|p| p.state)
    }

    fn keyframes_rule(&self) -> KeyframesRule {
        KeyframesRule {
            name: self.name.to_string(),
            keyframes: self
                .phases
                .iter()
                .map(|p| Keyframe {
                    percent: p.percent,
                    declarations: p.state.declarations(),
                })
                .collect(),
        }
    }
}

/// Logo hides while the personalization copy is shown, then returns.
fn toggle_paypal_logo() -> TimedAnimation {
    TimedAnimation {
        name: "toggle-paypal-logo",
        duration_secs: PERSONALIZATION_DURATION_SECS,
        phases: vec![
            phase(0, VisualState::Expanded),
            phase(15, VisualState::Compressed),
            phase(85, VisualState::Compressed),
            phase(100, VisualState::Expanded),
        ],
    }
}

/// Default text waits for the personalization copy to finish.
fn show_text_delayed() -> TimedAnimation {
    TimedAnimation {
        name: "show-text-delayed",
        duration_secs: PERSONALIZATION_DURATION_SECS,
        phases: vec![
            phase(0, VisualState::Compressed),
            phase(85, VisualState::Compressed),
            phase(100, VisualState::Expanded),
        ],
    }
}

/// Default text appears over the first second.
fn show_text() -> TimedAnimation {
    TimedAnimation {
        name: "show-text",
        duration_secs: 1,
        phases: vec![
            phase(0, VisualState::Compressed),
            phase(100, VisualState::Expanded),
        ],
    }
}

/// A single pulse of the personalization copy.
fn show_personalization_text() -> TimedAnimation {
    TimedAnimation {
        name: "show-personalization-text",
        duration_secs: PERSONALIZATION_DURATION_SECS,
        phases: vec![
            phase(0, VisualState::Compressed),
            phase(15, VisualState::Compressed),
            phase(25, VisualState::Expanded),
            phase(70, VisualState::Expanded),
            phase(85, VisualState::Compressed),
            phase(100, VisualState::Compressed),
        ],
    }
}

/// Whether and how a target moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Motion {
    /// Explicitly not animated (`animation: none`).
    Static,
    /// Runs a keyframed animation once and holds the final state.
    Animated(TimedAnimation),
}

/// How one target is styled within a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    /// The element styled.
    pub target: Target,
    /// States applied before any animation.
    pub base: Vec<VisualState>,
    /// Motion, or `None` when the branch leaves animation untouched.
    pub motion: Option<Motion>,
}

impl Track {
    /// The animation this track runs, if any.
    #[must_use]
    pub const fn animation(&self) -> Option<&TimedAnimation> {
        match &self.motion {
            Some(Motion::Animated(animation)) => Some(animation),
            _ => None,
        }
    }
}

/// Styling for one side of the width breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branch {
    /// Width condition.
    #[serde(skip)]
    pub query: MediaQuery,
    /// Tracks in emission order.
    pub tracks: Vec<Track>,
}

/// The full personalization plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalizationPlan {
    /// Buttons at or under the breakpoint.
    pub narrow: Branch,
    /// Buttons over the breakpoint.
    pub wide: Branch,
}

/// Plan the personalization sequence for resolved copy (or its absence).
#[must_use]
pub fn plan_personalization(text: Option<&str>) -> PersonalizationPlan {
    let personalized = text.is_some();

    let narrow = Branch {
        query: MediaQuery::MaxWidth(PERSONALIZATION_MIN_WIDTH),
        tracks: vec![Track {
            target: Target::PersonalizationText,
            base: vec![VisualState::Hidden],
            motion: None,
        }],
    };

    let wide = Branch {
        query: MediaQuery::MinWidth(PERSONALIZATION_MIN_WIDTH + 1),
        tracks: vec![
            Track {
                target: Target::Logo,
                base: Vec::new(),
                motion: Some(if personalized {
                    Motion::Animated(toggle_paypal_logo())
                } else {
                    Motion::Static
                }),
            },
            Track {
                target: Target::DefaultText,
                base: vec![VisualState::Compressed, VisualState::Visible],
                motion: Some(Motion::Animated(if personalized {
                    show_text_delayed()
                } else {
                    show_text()
                })),
            },
            Track {
                target: Target::PersonalizationText,
                base: vec![VisualState::Compressed, VisualState::Visible],
                motion: Some(Motion::Animated(show_personalization_text())),
            },
        ],
    };

    PersonalizationPlan { narrow, wide }
}

impl PersonalizationPlan {
    /// The track for `target` in the branch that applies at viewport `width`.
    #[must_use]
    pub fn track_at_width(&self, width: u32, target: Target) -> Option<&Track> {
        [&self.narrow, &self.wide]
            .into_iter()
            .filter(|branch| branch.query.matches_width(width))
            .flat_map(|branch| branch.tracks.iter())
            .find(|track| track.target == target)
    }

    /// Realize the plan as a style sheet: one `@media` block per branch
    /// followed by the keyframes the tracks reference.
    #[must_use]
    pub fn to_stylesheet(&self) -> Stylesheet {
        let mut sheet = Stylesheet::new();
        let mut keyframes: Vec<KeyframesRule> = Vec::new();

        for branch in [&self.narrow, &self.wide] {
            let rules = branch
                .tracks
                .iter()
                .map(|track| {
                    let mut declarations: Vec<Declaration> =
                        track.base.iter().flat_map(|s| s.declarations()).collect();
                    match &track.motion {
                        None => {}
                        Some(Motion::Static) => declarations.push(AnimationValue::None.declaration()),
                        Some(Motion::Animated(animation)) => {
                            declarations.push(
                                AnimationValue::run(animation.name, animation.duration_secs)
                                    .declaration(),
                            );
                            if !keyframes.iter().any(|k| k.name == animation.name) {
                                keyframes.push(animation.keyframes_rule());
                            }
                        }
                    }
                    StyleRule::new(track.target.selector(), declarations)
                })
                .collect();

            sheet = sheet.with_rule(Rule::Media(MediaRule {
                query: branch.query,
                rules,
            }));
        }

        keyframes
            .into_iter()
            .fold(sheet, |sheet, k| sheet.with_rule(Rule::Keyframes(k)))
    }
}

/// The personalization style sheet for `opts`, or `None` in test mode.
#[must_use]
pub fn personalization_style(config: &RenderConfig, opts: &LabelOptions) -> Option<Stylesheet> {
    if config.test_mode {
        return None;
    }

    let text = if opts.tagline {
        None
    } else {
        personalization_text(opts)
    };
    Some(plan_personalization(text).to_stylesheet())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_at_holds_last_phase() {
        let animation = show_personalization_text();
        assert_eq!(animation.state_at(0), Some(VisualState::Compressed));
        assert_eq!(animation.state_at(20), Some(VisualState::Compressed));
        assert_eq!(animation.state_at(25), Some(VisualState::Expanded));
        assert_eq!(animation.state_at(84), Some(VisualState::Expanded));
        assert_eq!(animation.state_at(85), Some(VisualState::Compressed));
        assert_eq!(animation.state_at(100), Some(VisualState::Compressed));
    }

    #[test]
    fn test_every_animation_spans_full_window() {
        for animation in [
            toggle_paypal_logo(),
            show_text_delayed(),
            show_text(),
            show_personalization_text(),
        ] {
            assert_eq!(animation.phases.first().map(|p| p.percent), Some(0));
            assert_eq!(animation.phases.last().map(|p| p.percent), Some(100));
            assert!(animation.phases.windows(2).all(|w| w[0].percent < w[1].percent));
        }
    }

    fn wide_motion(plan: &PersonalizationPlan, target: Target) -> Option<&Motion> {
        plan.track_at_width(PERSONALIZATION_MIN_WIDTH + 1, target)
            .and_then(|track| track.motion.as_ref())
    }

    fn phases(animation: &TimedAnimation) -> Vec<(u8, VisualState)> {
        animation.phases.iter().map(|p| (p.percent, p.state)).collect()
    }

    #[test]
    fn test_wide_branch_without_text() {
        let plan = plan_personalization(None);
        assert_eq!(wide_motion(&plan, Target::Logo), Some(&Motion::Static));

        let Some(Motion::Animated(text)) = wide_motion(&plan, Target::DefaultText) else {
            panic!("default text should animate");
        };
        assert_eq!((text.name, text.duration_secs), ("show-text", 1));
        assert_eq!(
            phases(text),
            [(0, VisualState::Compressed), (100, VisualState::Expanded)]
        );

        let css = plan.to_stylesheet().to_string();
        assert!(css.contains("animation: none;"));
        assert!(css.contains("animation: show-text 1s 0s forwards;"));
        assert!(!css.contains("toggle-paypal-logo"));
        assert!(!css.contains("show-text-delayed"));
    }

    #[test]
    fn test_wide_branch_with_text() {
        let plan = plan_personalization(Some("Pay in 4"));

        let Some(Motion::Animated(logo)) = wide_motion(&plan, Target::Logo) else {
            panic!("logo should animate");
        };
        assert_eq!((logo.name, logo.duration_secs), ("toggle-paypal-logo", 5));
        assert_eq!(
            phases(logo),
            [
                (0, VisualState::Expanded),
                (15, VisualState::Compressed),
                (85, VisualState::Compressed),
                (100, VisualState::Expanded),
            ]
        );

        let Some(Motion::Animated(text)) = wide_motion(&plan, Target::DefaultText) else {
            panic!("default text should animate");
        };
        assert_eq!((text.name, text.duration_secs), ("show-text-delayed", 5));
        assert_eq!(
            phases(text),
            [
                (0, VisualState::Compressed),
                (85, VisualState::Compressed),
                (100, VisualState::Expanded),
            ]
        );

        let css = plan.to_stylesheet().to_string();
        assert!(css.contains("animation: toggle-paypal-logo 5s 0s forwards;"));
        assert!(css.contains("animation: show-text-delayed 5s 0s forwards;"));
        assert!(css.contains("animation: show-personalization-text 5s 0s forwards;"));
        assert!(!css.contains("animation: none;"));
        assert!(!css.contains("animation: show-text 1s"));
    }

    #[test]
    fn test_target_selectors() {
        assert_eq!(
            Target::Logo.selector().to_string(),
            ".dom-ready .paypal-button[data-funding-source=\"paypal\"] .paypal-logo.paypal-logo-paypal"
        );
        assert_eq!(
            Target::DefaultText.selector().to_string(),
            ".dom-ready .paypal-button[data-funding-source=\"paypal\"] \
             .paypal-button-text:not(.personalization-text):not(.hidden)"
        );
    }
}
