//! Error types for board construction.

use std::fmt;

use super::types::Color;

/// Why a FEN string failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four mandatory fields.
    TooFewParts { found: usize },
    /// The placement field does not have eight ranks.
    InvalidRankCount { found: usize },
    /// Unknown piece letter in the placement field.
    InvalidPiece { piece: char },
    /// A rank in the placement field spills past the h-file.
    TooManyFiles { rank: usize },
    /// A side must have exactly one king.
    InvalidKingCount { color: Color },
    /// The side-to-move field is not `w` or `b`.
    InvalidSideToMove { found: String },
    /// Unknown castling letter.
    InvalidCastling { right: char },
    /// The en-passant field is neither `-` nor a square on the third
    /// or sixth rank.
    InvalidEnPassant { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 fields, found {found}")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { piece } => {
                write!(f, "invalid piece character '{piece}' in FEN")
            }
            FenError::TooManyFiles { rank } => {
                write!(f, "too many files on rank {} in FEN", rank + 1)
            }
            FenError::InvalidKingCount { color } => {
                write!(f, "{color} must have exactly one king")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { right } => {
                write!(f, "invalid castling character '{right}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}
