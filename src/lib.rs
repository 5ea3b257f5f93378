//! A chess engine core: position representation, fully legal move
//! generation, Polyglot-compatible hashing, and perft validation.

pub mod board;

pub use board::{
    Bitboard, Board, BoardHistory, CastlingRights, Color, FenError, GenMode, Move, MoveList,
    Piece, Square, START_FEN,
};
