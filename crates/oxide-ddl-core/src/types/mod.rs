//! Type strings: parsing user-entered text and reducing it to a canonical type.
//!
//! A raw type such as `"Decimal(10, 2) UNSIGNED"` is first split into a
//! [`ParsedType`], whose base type is then looked up in the alias table to
//! obtain a [`CanonicalType`]. Dialect rendering starts from there.

mod canonical;
mod parse;

pub use canonical::{CanonicalType, canonicalize};
pub use parse::ParsedType;
