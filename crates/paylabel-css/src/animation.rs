//! The `animation` shorthand value.

use std::fmt;

use crate::stylesheet::Declaration;

/// [CSS Animations § 4.9 The animation shorthand](https://www.w3.org/TR/css-animations-1/#animation)
///
/// Only the forms the label components emit: `none`, or a named animation
/// with a duration and delay in whole seconds that holds its final keyframe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationValue {
    /// `animation: none`
    None,
    /// `animation: <name> <duration>s <delay>s forwards`
    Run {
        /// Keyframes rule name.
        name: String,
        /// Duration in seconds.
        duration_secs: u32,
        /// Delay in seconds.
        delay_secs: u32,
    },
}

impl AnimationValue {
    /// A named animation starting immediately.
    #[must_use]
    pub fn run(name: &str, duration_secs: u32) -> Self {
        Self::Run {
            name: name.to_string(),
            duration_secs,
            delay_secs: 0,
        }
    }

    /// The `animation` declaration carrying this value.
    #[must_use]
    pub fn declaration(&self) -> Declaration {
        Declaration::new("animation", self.to_string())
    }
}

impl fmt::Display for AnimationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Run {
                name,
                duration_secs,
                delay_secs,
            } => write!(f, "{name} {duration_secs}s {delay_secs}s forwards"),
        }
    }
}
