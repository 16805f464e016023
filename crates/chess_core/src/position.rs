use cozy_chess::Board;

use crate::error::RulesError;
use crate::moves::{CandidateMove, MoveFlags};
use crate::notation::{looks_like_move, normalize_san, parse_uci_move, san_for};
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Draw(DrawReason),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// A chess position together with the half-move history that led to it.
///
/// Rules are answered by `cozy-chess`; this type adds the pieces a game
/// front end needs on top: SAN for every legal move, the played SAN
/// history, repetition tracking and draw detection.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    history: Vec<String>,
    last_move: Option<(u8, u8)>,
    /// Board and last move before each played move, oldest first
    undo_stack: Vec<(Board, Option<(u8, u8)>)>,
    /// Repetition key of every position reached, including the initial one
    keys: Vec<String>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    /// Parses a FEN. Move counters may be omitted. The history starts empty,
    /// so the ply count of a loaded position is 0.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let mut fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(RulesError::InvalidFen(fen.to_string()));
        }
        if fields.len() == 4 {
            fields.push("0");
        }
        if fields.len() == 5 {
            fields.push("1");
        }
        let board = Board::from_fen(&fields.join(" "), false)
            .map_err(|e| RulesError::InvalidFen(format!("{fen} ({e:?})")))?;
        Ok(Self::from_board(board))
    }

    fn from_board(board: Board) -> Self {
        let key = repetition_key(&board);
        Self {
            board,
            history: Vec::new(),
            last_move: None,
            undo_stack: Vec::new(),
            keys: vec![key],
        }
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn side_to_move(&self) -> Color {
        Color::from_cozy(self.board.side_to_move())
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        if sq >= 64 {
            return None;
        }
        let s = to_cozy_sq(sq);
        let kind = self.board.piece_on(s)?;
        let color = self.board.color_on(s)?;
        Some(Piece {
            color: Color::from_cozy(color),
            kind: PieceKind::from_cozy(kind),
        })
    }

    /// Every occupied square with its piece, a1 first.
    pub fn pieces(&self) -> Vec<(u8, Piece)> {
        (0..64u8)
            .filter_map(|s| self.piece_at(s).map(|pc| (s, pc)))
            .collect()
    }

    pub fn king_square(&self, c: Color) -> u8 {
        from_cozy_sq(self.board.king(c.to_cozy()))
    }

    /// SAN of every half-move played since this position was created.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// From/to squares of the most recent move, if any.
    pub fn last_move(&self) -> Option<(u8, u8)> {
        self.last_move
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.board.halfmove_clock() as u32
    }

    pub fn fullmove_number(&self) -> u32 {
        self.board.fullmove_number() as u32
    }

    pub fn legal_moves(&self) -> Vec<CandidateMove> {
        let raw = raw_moves(&self.board);
        raw.iter()
            .filter_map(|&mv| describe(&self.board, mv))
            .map(|mut cm| {
                cm.san = san_for(&self.board, &cm, &raw);
                cm
            })
            .collect()
    }

    pub fn legal_move_count(&self) -> usize {
        count_legal(&self.board)
    }

    /// Number of `by`-coloured pieces with a legal move landing on `target`,
    /// judged as if `by` were to move. When `by` is not on move and the side
    /// to move is in check no such position exists and the count is 0.
    pub fn attackers(&self, target: u8, by: Color) -> usize {
        let board = if self.board.side_to_move() == by.to_cozy() {
            Some(self.board.clone())
        } else {
            self.board.null_move()
        };
        let Some(board) = board else {
            return 0;
        };

        let mut froms: Vec<u8> = Vec::new();
        for mv in raw_moves(&board) {
            if let Some(cm) = describe(&board, mv) {
                if cm.to == target && !froms.contains(&cm.from) {
                    froms.push(cm.from);
                }
            }
        }
        froms.len()
    }

    pub fn is_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && self.legal_move_count() == 0
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && self.legal_move_count() == 0
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// The current position has occurred three times. Positions compare by
    /// placement, side to move, castling rights and a capturable en passant
    /// square.
    pub fn is_threefold_repetition(&self) -> bool {
        let Some(current) = self.keys.last() else {
            return false;
        };
        self.keys.iter().filter(|&k| k == current).count() >= 3
    }

    /// K v K, K+minor v K, and bishops-only endings with every bishop on
    /// the same square colour.
    pub fn is_insufficient_material(&self) -> bool {
        let others: Vec<(u8, PieceKind)> = self
            .pieces()
            .into_iter()
            .filter(|(_, pc)| pc.kind != PieceKind::King)
            .map(|(s, pc)| (s, pc.kind))
            .collect();

        match others.as_slice() {
            [] => true,
            [(_, PieceKind::Knight)] | [(_, PieceKind::Bishop)] => true,
            _ => {
                let shade = |s: u8| (file_of(s) + rank_of(s)) % 2;
                let first = shade(others[0].0);
                others
                    .iter()
                    .all(|&(s, kind)| kind == PieceKind::Bishop && shade(s) == first)
            }
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self.status(), GameStatus::Draw(_))
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    pub fn status(&self) -> GameStatus {
        if self.legal_move_count() == 0 {
            return if self.is_check() {
                GameStatus::Checkmate {
                    winner: self.side_to_move().other(),
                }
            } else {
                GameStatus::Draw(DrawReason::Stalemate)
            };
        }
        if self.is_insufficient_material() {
            return GameStatus::Draw(DrawReason::InsufficientMaterial);
        }
        if self.is_fifty_move_draw() {
            return GameStatus::Draw(DrawReason::FiftyMoveRule);
        }
        if self.is_threefold_repetition() {
            return GameStatus::Draw(DrawReason::ThreefoldRepetition);
        }
        GameStatus::Ongoing
    }

    /// Plays a move produced by [`Position::legal_moves`] on this position.
    pub fn play(&mut self, mv: &CandidateMove) -> Result<(), RulesError> {
        let before = self.board.clone();
        self.board
            .try_play(mv.raw)
            .map_err(|_| RulesError::IllegalMove(mv.san.clone()))?;
        self.undo_stack.push((before, self.last_move));
        self.history.push(mv.san.clone());
        self.last_move = Some((mv.from, mv.to));
        self.keys.push(repetition_key(&self.board));
        Ok(())
    }

    /// Takes back the most recent move and returns its SAN. Returns `None`
    /// when no move has been played since the position was created.
    pub fn undo(&mut self) -> Option<String> {
        let (board, last_move) = self.undo_stack.pop()?;
        self.board = board;
        self.last_move = last_move;
        self.keys.pop();
        self.history.pop()
    }

    /// The position after `mv`, leaving `self` untouched.
    pub fn after(&self, mv: &CandidateMove) -> Result<Position, RulesError> {
        let mut next = self.clone();
        next.play(mv)?;
        Ok(next)
    }

    /// Resolves SAN (`Nf3`, `exd5`, `O-O`, `e8=Q+`) or coordinate notation
    /// (`g1f3`, `e7e8q`) to a legal move.
    pub fn find_move(&self, notation: &str) -> Result<CandidateMove, RulesError> {
        let wanted = normalize_san(notation);
        let legal = self.legal_moves();

        if let Some(mv) = legal.iter().find(|m| normalize_san(&m.san) == wanted) {
            return Ok(mv.clone());
        }
        if let Some(mv) = parse_uci_move(self, notation) {
            return Ok(mv);
        }

        if looks_like_move(notation) {
            Err(RulesError::IllegalMove(notation.trim().to_string()))
        } else {
            Err(RulesError::UnknownMove(notation.trim().to_string()))
        }
    }

    pub fn play_notation(&mut self, notation: &str) -> Result<CandidateMove, RulesError> {
        let mv = self.find_move(notation)?;
        self.play(&mv)?;
        Ok(mv)
    }
}

pub(crate) fn raw_moves(board: &Board) -> Vec<cozy_chess::Move> {
    let mut out = Vec::with_capacity(64);
    board.generate_moves(|moves| {
        out.extend(moves);
        false
    });
    out
}

/// FEN without the move counters. The en passant square is kept only when
/// an en passant capture is actually legal.
fn repetition_key(board: &Board) -> String {
    let fen = board.to_string();
    let mut fields: Vec<&str> = fen.split_whitespace().take(4).collect();
    if fields.len() == 4 && fields[3] != "-" && !has_en_passant(board) {
        fields[3] = "-";
    }
    fields.join(" ")
}

fn has_en_passant(board: &Board) -> bool {
    raw_moves(board)
        .into_iter()
        .filter_map(|mv| describe(board, mv))
        .any(|cm| cm.flags.en_passant)
}

pub(crate) fn count_legal(board: &Board) -> usize {
    let mut n = 0;
    board.generate_moves(|moves| {
        n += moves.len();
        false
    });
    n
}

/// Translates a legal `cozy-chess` move into a [`CandidateMove`] with an
/// empty SAN. Castling is encoded by cozy-chess as king-takes-own-rook and
/// is rewritten to the king's real destination.
fn describe(board: &Board, mv: cozy_chess::Move) -> Option<CandidateMove> {
    let us = board.side_to_move();
    let piece = PieceKind::from_cozy(board.piece_on(mv.from)?);
    let from = from_cozy_sq(mv.from);
    let mut to = from_cozy_sq(mv.to);
    let mut flags = MoveFlags::default();
    let mut captured = None;

    if piece == PieceKind::King && board.color_on(mv.to) == Some(us) {
        let rank = rank_of(from);
        if file_of(to) > file_of(from) {
            flags.castle_kingside = true;
            to = sq(6, rank)?;
        } else {
            flags.castle_queenside = true;
            to = sq(2, rank)?;
        }
    } else if let Some(victim) = board.piece_on(mv.to) {
        flags.capture = true;
        captured = Some(PieceKind::from_cozy(victim));
    } else if piece == PieceKind::Pawn && file_of(from) != file_of(to) {
        flags.capture = true;
        flags.en_passant = true;
        captured = Some(PieceKind::Pawn);
    }

    if piece == PieceKind::Pawn && (rank_of(to) - rank_of(from)).abs() == 2 {
        flags.double_push = true;
    }

    let promotion = mv.promotion.map(PieceKind::from_cozy);
    flags.promotion = promotion.is_some();

    Some(CandidateMove {
        from,
        to,
        piece,
        captured,
        flags,
        promotion,
        san: String::new(),
        raw: mv,
    })
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
