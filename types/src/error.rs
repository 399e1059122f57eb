use thiserror::Error;

/// Rejected type value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Invalid expected type quantity: {0} (must be 1 or 2)")]
    InvalidQuantity(u8),

    #[error("Unknown type: value {0:#x}")]
    NoSuchType(u32),

    #[error("Too many types: got {got}, expected at most {expected}")]
    TooManyTypes { got: u8, expected: u8 },

    #[error("Unknown type name: {0}")]
    UnknownName(String),
}

/// Rejected input to the effectiveness engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectivenessError {
    #[error("Invalid attacker type, must be exactly one type")]
    InvalidAttacker(#[source] TypeError),

    #[error("Invalid defender type, must be one or two types")]
    InvalidDefender(#[source] TypeError),
}
