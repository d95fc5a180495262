//! Fluent CSS selector construction for the Wren tools.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element parts
//!   - Part order and singleton validation at the point of each call
//!
//! - **Complex selectors** ([§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex))
//!   - Combining two built selectors with a combinator, recursively
//!
//! # Not Implemented
//!
//! - Parsing selector strings back into structured form

/// Fluent selector builder per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use selector::{
    Combinator, PartKind, SelectorBuilder, SelectorError, attr, class, combine, combine_with,
    element, id, pseudo_class, pseudo_element,
};
