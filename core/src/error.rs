//! Schema construction errors.

use thiserror::Error;

/// Fatal schema-construction errors.
///
/// These reflect a broken schema declaration, not bad user input, and are
/// raised once at build time — a [`Schema`](crate::Schema) that builds
/// successfully can never raise one of these during a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two properties share a primary name.
    #[error("duplicate property name: {0}")]
    DuplicateName(String),
    /// An alias collides with another alias or primary name anywhere in the
    /// schema.
    #[error("duplicate alias across schema: {0}")]
    DuplicateAlias(String),
    /// A positional-name entry matches no declared property.
    #[error("positional name does not match any property: {0}")]
    UnknownPositional(String),
    /// A list element kind is not a primitive.
    #[error("list element kind must be a primitive for property: {0}")]
    InvalidElementKind(String),
    /// An enumeration property declares no members.
    #[error("enumeration has no members for property: {0}")]
    EmptyEnumeration(String),
    /// An enumeration property declares the same member twice.
    #[error("duplicate enumeration member '{member}' for property: {property}")]
    DuplicateEnumMember {
        /// The property whose declaration is invalid.
        property: String,
        /// The repeated member name.
        member: String,
    },
}
