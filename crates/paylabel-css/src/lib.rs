//! Style sheet model for the paylabel renderer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, class, attribute-equals and `:not()` simple selectors
//!   - Descendant combinators
//!   - Matching against a [`paylabel_dom::RenderTree`]
//!
//! - **Rules** ([CSS Syntax Level 3](https://www.w3.org/TR/css-syntax-3/))
//!   - Style rules, `@media` width queries, `@keyframes`
//!   - Selector scoping under a wrapper class
//!   - Serialization to CSS text
//!
//! # Not Implemented
//!
//! - Parsing CSS text; every sheet is built in code
//! - Cascade and computed values

/// The `animation` shorthand value.
pub mod animation;
/// Selector building and matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// Rules and style sheets per [CSS Syntax Level 3](https://www.w3.org/TR/css-syntax-3/).
pub mod stylesheet;

pub use animation::AnimationValue;
pub use selector::{CompoundSelector, Selector, SimpleSelector};
pub use stylesheet::{
    Declaration, Keyframe, KeyframesRule, MediaQuery, MediaRule, Rule, StyleRule, Stylesheet,
};
