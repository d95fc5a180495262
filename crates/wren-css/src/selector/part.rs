use serde::Serialize;
use strum_macros::Display;

/// The kinds of part a compound selector is built from, in the order they
/// must appear.
///
/// The derived ordering is the canonical part order, so a builder only needs
/// to remember the furthest kind it has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id,
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.highlight`
    Class,
    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    Attribute,
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:first-child`
    PseudoClass,
    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement,
}

impl PartKind {
    /// Whether a compound selector may hold more than one part of this kind.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_in_canonical_order() {
        assert!(PartKind::Element < PartKind::Id);
        assert!(PartKind::Id < PartKind::Class);
        assert!(PartKind::Class < PartKind::Attribute);
        assert!(PartKind::Attribute < PartKind::PseudoClass);
        assert!(PartKind::PseudoClass < PartKind::PseudoElement);
    }

    #[test]
    fn test_only_list_kinds_repeat() {
        assert!(!PartKind::Element.is_repeatable());
        assert!(!PartKind::Id.is_repeatable());
        assert!(PartKind::Class.is_repeatable());
        assert!(PartKind::Attribute.is_repeatable());
        assert!(PartKind::PseudoClass.is_repeatable());
        assert!(!PartKind::PseudoElement.is_repeatable());
    }

    #[test]
    fn test_display_is_kebab_case() {
        assert_eq!(PartKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(PartKind::PseudoElement.to_string(), "pseudo-element");
        assert_eq!(PartKind::Attribute.to_string(), "attribute");
    }
}
