//! Legal move records handed to engines.

use std::fmt;

use crate::types::{sq_to_coord, PieceKind};

/// Special-move markers for a [`CandidateMove`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveFlags {
    pub capture: bool,
    pub en_passant: bool,
    pub castle_kingside: bool,
    pub castle_queenside: bool,
    pub promotion: bool,
    pub double_push: bool,
}

impl MoveFlags {
    pub fn is_castle(&self) -> bool {
        self.castle_kingside || self.castle_queenside
    }
}

/// A legal move in a specific position, enriched with everything the
/// decision layer needs without re-querying the board.
///
/// Castling moves report the king's destination (`g1`, `c1`, `g8`, `c8`)
/// as `to`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub from: u8,
    pub to: u8,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub flags: MoveFlags,
    pub promotion: Option<PieceKind>,
    pub san: String,
    pub(crate) raw: cozy_chess::Move,
}

impl CandidateMove {
    pub fn is_capture(&self) -> bool {
        self.flags.capture
    }

    pub fn is_castle(&self) -> bool {
        self.flags.is_castle()
    }

    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub fn uci(&self) -> String {
        let mut s = sq_to_coord(self.from);
        s.push_str(&sq_to_coord(self.to));
        if let Some(p) = self.promotion {
            let ch = match p {
                PieceKind::Queen => 'q',
                PieceKind::Rook => 'r',
                PieceKind::Bishop => 'b',
                PieceKind::Knight => 'n',
                _ => 'q',
            };
            s.push(ch);
        }
        s
    }
}

impl fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.san)
    }
}
