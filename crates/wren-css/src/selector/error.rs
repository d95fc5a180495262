use thiserror::Error;

use super::PartKind;

/// Why a part could not be added to a selector.
///
/// Every variant is a mistake in the construction sequence, reported by the
/// call that made it. Retrying the same call cannot succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id or pseudo-element was set a second time.
    #[error("{kind} may occur only once in a selector")]
    Duplicate {
        /// The part that was repeated.
        kind: PartKind,
    },

    /// A part was added after a part that must follow it.
    ///
    /// Parts go element, id, class, attribute, pseudo-class, pseudo-element.
    #[error(
        "{kind} cannot follow {after}; selector parts go element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    Order {
        /// The part that was rejected.
        kind: PartKind,
        /// The furthest part already present.
        after: PartKind,
    },

    /// A part was added to a builder holding a combined selector.
    #[error("cannot add {kind} to a combined selector")]
    Combined {
        /// The part that was rejected.
        kind: PartKind,
    },
}
