//! Single and dual typings

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::TypeError;

use super::flags::TypeFlags;
use super::pokemon_type::Type;

/// The type (or pair of types) a Pokemon has.
///
/// A dual typing never repeats a type and carries no order: [`Typing::new`]
/// collapses a repeated pair into a single typing and stores the two members
/// of a dual typing lowest ordinal first. Equality and hashing go through
/// [`Typing::to_flags`], so `Dual(Steel, Grass) == Dual(Grass, Steel)`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Typing {
    Single(Type),
    Dual(Type, Type),
}

impl Typing {
    /// Build a typing from two types, in either order
    pub fn new(a: Type, b: Type) -> Self {
        match a.cmp(&b) {
            Ordering::Equal => Typing::Single(a),
            Ordering::Less => Typing::Dual(a, b),
            Ordering::Greater => Typing::Dual(b, a),
        }
    }

    /// Iterate over the one or two types
    pub fn types(&self) -> impl Iterator<Item = Type> {
        let (first, second) = match *self {
            Typing::Single(t) => (t, None),
            Typing::Dual(a, b) => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }

    /// First stored type; the lower ordinal for values built by [`Typing::new`]
    pub fn primary(&self) -> Type {
        match *self {
            Typing::Single(t) | Typing::Dual(t, _) => t,
        }
    }

    /// Second stored type, if dual
    pub fn secondary(&self) -> Option<Type> {
        match *self {
            Typing::Single(_) => None,
            Typing::Dual(_, t) => Some(t),
        }
    }

    /// Check whether this typing includes `t`
    pub fn contains(&self, t: Type) -> bool {
        self.types().any(|own| own == t)
    }

    /// Check whether this is a dual typing
    pub fn is_dual(&self) -> bool {
        matches!(self, Typing::Dual(..))
    }

    /// Pack into a type mask
    pub fn to_flags(&self) -> TypeFlags {
        self.types()
            .fold(TypeFlags::empty(), |acc, t| acc | t.flag())
    }
}

impl PartialEq for Typing {
    fn eq(&self, other: &Self) -> bool {
        self.to_flags() == other.to_flags()
    }
}

impl Eq for Typing {}

impl Hash for Typing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_flags().hash(state);
    }
}

impl From<Type> for Typing {
    fn from(t: Type) -> Self {
        Typing::Single(t)
    }
}

impl From<Typing> for TypeFlags {
    fn from(typing: Typing) -> Self {
        typing.to_flags()
    }
}

impl TryFrom<TypeFlags> for Typing {
    type Error = TypeError;

    /// Unpack a validated mask; dual types come out in ordinal order.
    fn try_from(flags: TypeFlags) -> Result<Self, Self::Error> {
        let flags = flags.validate(2)?;
        let mut types = flags.types();
        match (types.next(), types.next()) {
            (Some(a), Some(b)) => Ok(Typing::Dual(a, b)),
            (Some(a), None) => Ok(Typing::Single(a)),
            _ => Err(TypeError::NoSuchType(flags.bits())),
        }
    }
}

impl std::fmt::Display for Typing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Typing::Single(t) => write!(f, "{}", t),
            Typing::Dual(a, b) => write!(f, "{}/{}", a, b),
        }
    }
}
