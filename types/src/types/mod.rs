//! Type representation: enum, bit-flag mask and tagged typing

mod flags;
mod pokemon_type;
mod typing;

pub use flags::{MAX_ORDINAL, TypeFlags, ordinal_of, validate};
pub use pokemon_type::Type;
pub use typing::Typing;
