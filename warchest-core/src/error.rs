//! Error types for geometry and board operations
//!
//! These are structural errors: they signal a caller bug and are never used
//! for rule violations, which `Action::is_valid` reports as `false`.

use crate::hex::Hex;

/// Errors raised by hex geometry operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised by board construction and mutation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Every listed coordinate lies outside the board layout
    #[error("off-board coordinates: [{}]", join_hexes(.0))]
    OutOfBounds(Vec<Hex>),

    #[error("No tokens at {0}")]
    EmptyStack(Hex),

    #[error("Cannot move a token from {0} onto itself")]
    SameHex(Hex),

    #[error("Destination {0} is occupied")]
    DestinationOccupied(Hex),
}

impl BoardError {
    /// Out-of-bounds error for a single coordinate
    pub fn out_of_bounds(hex: Hex) -> Self {
        BoardError::OutOfBounds(vec![hex])
    }
}

fn join_hexes(hexes: &[Hex]) -> String {
    hexes
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = BoardError::OutOfBounds(vec![Hex::new(5, 5), Hex::new(-4, 0)]);
        assert_eq!(err.to_string(), "off-board coordinates: [Hex(5, 5), Hex(-4, 0)]");
    }

    #[test]
    fn test_single_out_of_bounds() {
        let err = BoardError::out_of_bounds(Hex::new(5, 5));
        assert_eq!(err, BoardError::OutOfBounds(vec![Hex::new(5, 5)]));
        assert_eq!(err.to_string(), "off-board coordinates: [Hex(5, 5)]");
    }
}
