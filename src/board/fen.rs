//! FEN parsing and output, and long-algebraic move matching.

use std::str::FromStr;

use super::error::FenError;
use super::state::{Board, EP_NONE, START_FEN};
use super::types::{file_to_index, CastlingRights, Color, Move, Piece, Square};

impl Board {
    /// Parses a FEN string (or the literal `startpos`) into a new
    /// board.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let mut board = Board::empty();
        board.set_from_fen(fen)?;
        Ok(board)
    }

    /// Parses a FEN string (or the literal `startpos`) into this
    /// board, returning the number of whitespace-separated tokens
    /// consumed: 1 for `startpos`, otherwise 4 plus however many of
    /// the optional clock fields parsed as numbers.
    ///
    /// On error the board is left exactly as it was before the call.
    pub fn set_from_fen(&mut self, fen: &str) -> Result<usize, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.first() == Some(&"startpos") {
            let start: Vec<&str> = START_FEN.split_whitespace().collect();
            *self = parse_fields(&start)?.0;
            return Ok(1);
        }
        let (board, consumed) = parse_fields(&parts)?;
        *self = board;
        Ok(consumed)
    }

    /// Renders the position as a FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::new(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let stm = if self.stm == Color::White { "w" } else { "b" };

        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = if self.ep_file == EP_NONE {
            "-".to_string()
        } else {
            let rank = if self.stm == Color::White { 5 } else { 2 };
            Square::new(rank, self.ep_file as usize).to_string()
        };

        format!(
            "{placement} {stm} {castling} {ep} {} {}",
            self.halfmove_clock, self.fullmove_counter
        )
    }

    /// Matches a long-algebraic move string (`e2e4`, `e7e8q`) against
    /// the legal moves of this position. Returns `None` when the
    /// string is malformed or no legal move matches.
    #[must_use]
    pub fn move_from_string(&self, s: &str) -> Option<Move> {
        let bytes = s.as_bytes();
        if !(4..=5).contains(&bytes.len()) {
            return None;
        }
        let from: Square = s.get(0..2)?.parse().ok()?;
        let to: Square = s.get(2..4)?.parse().ok()?;
        let promotion = match bytes.get(4) {
            None => None,
            Some(&c) => match c {
                b'r' => Some(Piece::Rook),
                b'n' => Some(Piece::Knight),
                b'b' => Some(Piece::Bishop),
                b'q' => Some(Piece::Queen),
                _ => return None,
            },
        };

        self.legal_moves()
            .iter()
            .copied()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion() == promotion)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}

fn parse_fields(parts: &[&str]) -> Result<(Board, usize), FenError> {
    if parts.len() < 4 {
        return Err(FenError::TooFewParts { found: parts.len() });
    }

    let mut board = Board::empty();

    // piece placement
    let ranks: Vec<&str> = parts[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRankCount { found: ranks.len() });
    }
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx;
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
            } else {
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { piece: c })?;
                let color = if c.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(FenError::TooManyFiles { rank });
                }
                board.put_piece(color, piece, Square::new(rank, file));
                file += 1;
            }
        }
    }
    for color in [Color::White, Color::Black] {
        if board.pieces_of(color, Piece::King).popcount() != 1 {
            return Err(FenError::InvalidKingCount { color });
        }
    }

    // side to move
    board.stm = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    // castling rights; rights whose king or rook has left its starting
    // square are dropped so the rights mask always reflects the board
    let mut rights = CastlingRights::none();
    for c in parts[2].chars() {
        match c {
            'K' => rights.set(Color::White, true),
            'Q' => rights.set(Color::White, false),
            'k' => rights.set(Color::Black, true),
            'q' => rights.set(Color::Black, false),
            '-' => {}
            _ => return Err(FenError::InvalidCastling { right: c }),
        }
    }
    for (color, home_rank) in [(Color::White, 0), (Color::Black, 7)] {
        let king_home = board.piece_at(Square::new(home_rank, 4)) == Some((color, Piece::King));
        for (kingside, rook_file) in [(true, 7), (false, 0)] {
            let rook_home =
                board.piece_at(Square::new(home_rank, rook_file)) == Some((color, Piece::Rook));
            if !(king_home && rook_home) {
                rights.remove(color, kingside);
            }
        }
    }
    board.castling = rights;

    // en passant target
    board.ep_file = if parts[3] == "-" {
        EP_NONE
    } else {
        let chars: Vec<char> = parts[3].chars().collect();
        let valid = chars.len() == 2
            && ('a'..='h').contains(&chars[0])
            && (chars[1] == '3' || chars[1] == '6');
        if !valid {
            return Err(FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            });
        }
        file_to_index(chars[0]) as u8
    };

    // optional clocks; a token that is not a number simply stops the
    // parse
    let mut consumed = 4;
    if let Some(halfmove) = parts.get(4).and_then(|t| t.parse().ok()) {
        board.halfmove_clock = halfmove;
        consumed = 5;
        if let Some(fullmove) = parts.get(5).and_then(|t| t.parse().ok()) {
            board.fullmove_counter = fullmove;
            consumed = 6;
        }
    }

    (board.key, board.pawn_key) = board.recompute_keys();
    board.recompute_checkers_and_pins();
    Ok((board, consumed))
}
