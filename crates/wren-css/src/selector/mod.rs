//! CSS selector building
//!
//! This module builds selector strings per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/), one part at a
//! time, rejecting parts that arrive out of order or more often than a
//! compound selector allows.
//!
//! ```
//! use wren_css::selector::{combine, element};
//!
//! let a = element("div").id("main")?;
//! let b = element("table").id("data")?;
//! assert_eq!(combine(&a, "+", &b).stringify(), "div#main + table#data");
//! # Ok::<(), wren_css::SelectorError>(())
//! ```

mod combinator;
mod error;
mod part;

use std::fmt;

use serde::Serialize;
use wren_common::warning::warn_once;

pub use combinator::Combinator;
pub use error::SelectorError;
pub use part::PartKind;

/// A selector under construction.
///
/// Holds either the parts of one compound selector or, after [`combine`],
/// the finished text of a complex selector. In the second case the parts are
/// empty and no more can be added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectorBuilder {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    /// Inside-bracket text such as `href$=".png"`; brackets are added when
    /// rendering.
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    combined: Option<String>,
    /// Furthest part kind added so far.
    #[serde(skip)]
    reached: Option<PartKind>,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn seeded(kind: PartKind, value: String) -> Self {
        let mut builder = Self::default();
        builder.store(kind, value);
        builder
    }

    /// Set the type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if any other part is already present,
    /// [`SelectorError::Duplicate`] if an element is already set.
    pub fn element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(PartKind::Element, value.into())
    }

    /// Set the ID selector. `value` is the name without `#`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a class or any later part is present,
    /// [`SelectorError::Duplicate`] if an id is already set.
    pub fn id(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(PartKind::Id, value.into())
    }

    /// Append a class selector. `value` is the name without `.`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if an attribute, pseudo-class or
    /// pseudo-element is present.
    pub fn class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(PartKind::Class, value.into())
    }

    /// Append an attribute selector.
    ///
    /// `value` is what goes between the brackets: `href`, or a name, operator
    /// and value such as `href$=".png"`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-class or pseudo-element is present.
    pub fn attr(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(PartKind::Attribute, value.into())
    }

    /// Append a pseudo-class. `value` is the name without `:`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if the pseudo-element is set.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(PartKind::PseudoClass, value.into())
    }

    /// Set the pseudo-element. `value` is the name without `::`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if a pseudo-element is already set.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(PartKind::PseudoElement, value.into())
    }

    fn add(mut self, kind: PartKind, value: String) -> Result<Self, SelectorError> {
        if self.combined.is_some() {
            return Err(SelectorError::Combined { kind });
        }
        if let Some(reached) = self.reached {
            if reached > kind {
                return Err(SelectorError::Order {
                    kind,
                    after: reached,
                });
            }
            if reached == kind && !kind.is_repeatable() {
                return Err(SelectorError::Duplicate { kind });
            }
        }
        self.store(kind, value);
        Ok(self)
    }

    fn store(&mut self, kind: PartKind, value: String) {
        match kind {
            PartKind::Element => self.element = Some(value),
            PartKind::Id => self.id = Some(value),
            PartKind::Class => self.classes.push(value),
            PartKind::Attribute => self.attributes.push(value),
            PartKind::PseudoClass => self.pseudo_classes.push(value),
            PartKind::PseudoElement => self.pseudo_element = Some(value),
        }
        self.reached = Some(kind);
    }

    /// Render the selector text.
    ///
    /// A combined builder returns its stored text. Otherwise the parts are
    /// written in canonical order: `div#main.a.b[href][lang|=en]:hover::before`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// The furthest part kind added so far, if any.
    #[must_use]
    pub const fn reached(&self) -> Option<PartKind> {
        self.reached
    }

    /// Whether this builder holds a combined selector.
    #[must_use]
    pub const fn is_combined(&self) -> bool {
        self.combined.is_some()
    }

    /// Whether nothing has been added yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reached.is_none() && self.combined.is_none()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(combined) = &self.combined {
            return f.write_str(combined);
        }
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attribute in &self.attributes {
            write!(f, "[{attribute}]")?;
        }
        for pseudo_class in &self.pseudo_classes {
            write!(f, ":{pseudo_class}")?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{pseudo_element}")?;
        }
        Ok(())
    }
}

/// Start a selector with a type selector, e.g. `div`.
#[must_use]
pub fn element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(PartKind::Element, value.into())
}

/// Start a selector with an ID selector.
#[must_use]
pub fn id(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(PartKind::Id, value.into())
}

/// Start a selector with a class selector.
#[must_use]
pub fn class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(PartKind::Class, value.into())
}

/// Start a selector with an attribute selector (text without brackets).
#[must_use]
pub fn attr(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(PartKind::Attribute, value.into())
}

/// Start a selector with a pseudo-class.
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(PartKind::PseudoClass, value.into())
}

/// Start a selector with a pseudo-element.
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(PartKind::PseudoElement, value.into())
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Join two selectors as `first <combinator> second`, with one space on each
/// side of the combinator. The combinator is inserted verbatim.
///
/// Symbols other than ` `, `>`, `+` and `~` are still accepted, but the first
/// use of each one writes a warning to stderr through
/// [`wren_common::warning::warn_once`]. This is the only I/O the builder
/// performs; [`wren_common::warning::clear_warnings`] resets the record.
///
/// Either side may itself be combined.
#[must_use]
pub fn combine(
    first: &SelectorBuilder,
    combinator: &str,
    second: &SelectorBuilder,
) -> SelectorBuilder {
    if Combinator::from_symbol(combinator).is_none() {
        warn_once(
            "CSS",
            &format!("non-standard combinator {combinator:?} inserted verbatim"),
        );
    }
    SelectorBuilder {
        combined: Some(format!("{first} {combinator} {second}")),
        ..SelectorBuilder::default()
    }
}

/// Join two selectors with a typed [`Combinator`].
#[must_use]
pub fn combine_with(
    first: &SelectorBuilder,
    combinator: Combinator,
    second: &SelectorBuilder,
) -> SelectorBuilder {
    combine(first, combinator.symbol(), second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_seeds_reached_kind() {
        assert_eq!(element("a").reached(), Some(PartKind::Element));
        assert_eq!(pseudo_element("after").reached(), Some(PartKind::PseudoElement));
        assert_eq!(SelectorBuilder::new().reached(), None);
    }

    #[test]
    fn test_repeatable_parts_keep_pointer() {
        let builder = class("a").class("b").unwrap().class("c").unwrap();
        assert_eq!(builder.reached(), Some(PartKind::Class));
        assert_eq!(builder.classes, ["a", "b", "c"]);
    }

    #[test]
    fn test_order_error_reports_furthest_part() {
        let builder = element("a").attr("href").unwrap().pseudo_class("hover").unwrap();
        assert_eq!(
            builder.class("x"),
            Err(SelectorError::Order {
                kind: PartKind::Class,
                after: PartKind::PseudoClass,
            })
        );
    }

    #[test]
    fn test_empty_builder_renders_empty() {
        let builder = SelectorBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.stringify(), "");
    }

    #[test]
    fn test_non_standard_combinator_warns() {
        let joined = combine(&element("a"), "||", &element("b"));
        assert_eq!(joined.stringify(), "a || b");
        assert!(wren_common::warning::has_warned(
            "CSS",
            "non-standard combinator \"||\" inserted verbatim"
        ));
    }
}
