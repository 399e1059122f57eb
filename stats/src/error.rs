use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NatureError {
    #[error("Invalid nature byte {0:#04x}: both nibbles must name a non-HP stat")]
    InvalidRole(u8),

    #[error("Unknown nature: {0}")]
    UnknownName(String),
}
