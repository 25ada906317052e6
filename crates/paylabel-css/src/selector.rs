//! CSS selectors built in code and matched against a render tree.
//!
//! Only the subset the label components emit is modelled: type, class,
//! attribute-equals and `:not()` simple selectors, joined into compounds,
//! joined by descendant combinators.

use std::fmt;

use paylabel_dom::{ElementData, NodeId, RenderTree};

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// A simple selector is a single condition on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `span`, `img`
    Type(String),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.paypal-button`, `.personalization-text`
    Class(String),

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// `[name="value"]` exact match.
    AttributeEquals {
        /// Attribute name.
        name: String,
        /// Required value.
        value: String,
    },

    /// [§ 4.3 The Negation pseudo-class](https://www.w3.org/TR/selectors-4/#negation)
    ///
    /// Example: `:not(.hidden)`
    Not(Box<CompoundSelector>),
}

impl SimpleSelector {
    /// Whether this condition holds for `element`.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Type(name) => element.tag_name.eq_ignore_ascii_case(name),
            Self::Class(class_name) => element.has_class(class_name),
            Self::AttributeEquals { name, value } => element.attr(name) == Some(value.as_str()),
            // "The negation pseudo-class, :not(), is a functional pseudo-class taking a
            // selector list as an argument. It represents an element that is not
            // represented by its argument."
            Self::Not(inner) => !inner.matches(element),
        }
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(name) => write!(f, "{name}"),
            Self::Class(name) => write!(f, ".{name}"),
            Self::AttributeEquals { name, value } => write!(f, "[{name}=\"{value}\"]"),
            Self::Not(inner) => write!(f, ":not({inner})"),
        }
    }
}

/// [§ 3.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
///
/// "A compound selector is a sequence of simple selectors that are not separated
/// by a combinator, and represents a set of simultaneous conditions on a single element."
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    /// The simple selectors, all of which must match.
    pub simple_selectors: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// An empty compound (matches every element).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            simple_selectors: Vec::new(),
        }
    }

    /// Add a type condition.
    #[must_use]
    pub fn tag(mut self, name: &str) -> Self {
        self.simple_selectors.push(SimpleSelector::Type(name.to_string()));
        self
    }

    /// Add a class condition.
    #[must_use]
    pub fn class(mut self, name: &str) -> Self {
        self.simple_selectors.push(SimpleSelector::Class(name.to_string()));
        self
    }

    /// Add an `[name="value"]` condition.
    #[must_use]
    pub fn attr_eq(mut self, name: &str, value: &str) -> Self {
        self.simple_selectors.push(SimpleSelector::AttributeEquals {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Add a `:not(...)` condition.
    #[must_use]
    pub fn not(mut self, inner: Self) -> Self {
        self.simple_selectors.push(SimpleSelector::Not(Box::new(inner)));
        self
    }

    /// Whether every simple selector matches `element`.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        self.simple_selectors.iter().all(|s| s.matches(element))
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.simple_selectors.is_empty() {
            return write!(f, "*");
        }
        for simple in &self.simple_selectors {
            write!(f, "{simple}")?;
        }
        Ok(())
    }
}

/// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
///
/// A complex selector whose compounds are joined by descendant combinators,
/// stored left to right. The last compound is the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Compounds from outermost ancestor to subject.
    pub compounds: Vec<CompoundSelector>,
}

impl Selector {
    /// A selector consisting of one compound.
    #[must_use]
    pub fn new(subject: CompoundSelector) -> Self {
        Self {
            compounds: vec![subject],
        }
    }

    /// Append a compound that must match a descendant of the current subject.
    #[must_use]
    pub fn descendant(mut self, compound: CompoundSelector) -> Self {
        self.compounds.push(compound);
        self
    }

    /// Prefix this selector with an ancestor compound.
    #[must_use]
    pub fn within(&self, ancestor: CompoundSelector) -> Self {
        let mut compounds = Vec::with_capacity(self.compounds.len() + 1);
        compounds.push(ancestor);
        compounds.extend(self.compounds.iter().cloned());
        Self { compounds }
    }

    /// Whether the element at `node_id` matches this selector in `tree`.
    ///
    /// "A descendant combinator is whitespace that separates two compound selectors.
    /// A selector of the form A B represents an element B that is an arbitrary
    /// descendant of some ancestor element A."
    #[must_use]
    pub fn matches_in_tree(&self, tree: &RenderTree, node_id: NodeId) -> bool {
        let Some((subject, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        let Some(element) = tree.as_element(node_id) else {
            return false;
        };
        if !subject.matches(element) {
            return false;
        }

        // Greedy right-to-left walk: the nearest matching ancestor is always
        // the best choice for a pure descendant chain.
        let mut remaining = ancestors.iter().rev().peekable();
        for ancestor_id in tree.ancestors(node_id) {
            let Some(next) = remaining.peek() else { break };
            if tree.as_element(ancestor_id).is_some_and(|e| next.matches(e)) {
                let _ = remaining.next();
            }
        }
        remaining.peek().is_none()
    }

    /// All elements in `tree` matched by this selector, in document order.
    #[must_use]
    pub fn select(&self, tree: &RenderTree) -> Vec<NodeId> {
        tree.descendants(NodeId::ROOT)
            .into_iter()
            .filter(|&id| self.matches_in_tree(tree, id))
            .collect()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.compounds.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{compound}")?;
        }
        Ok(())
    }
}
