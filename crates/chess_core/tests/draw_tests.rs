//! Tests for game-ending conditions
//!
//! This module tests all draw conditions plus the checkmate/check boundary:
//! - Stalemate
//! - Fifty-move rule
//! - Threefold repetition
//! - Insufficient material

use chess_core::{Color, DrawReason, GameStatus, Position};

fn fen(s: &str) -> Position {
    Position::from_fen(s).expect("test FEN should parse")
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, White queen on b6, White king on c7
    let pos = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");

    assert_eq!(pos.legal_move_count(), 0);
    assert!(!pos.is_check(), "Stalemate means king is not in check");
    assert!(pos.is_stalemate());
    assert_eq!(pos.status(), GameStatus::Draw(DrawReason::Stalemate));
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    let pos = fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");

    assert!(pos.legal_moves().is_empty());
    assert!(pos.is_stalemate());
    assert!(pos.is_draw());
}

// =============================================================================
// Fifty-Move Rule Tests
// =============================================================================

#[test]
fn test_fifty_move_rule_at_100_halfmoves() {
    let pos = fen("8/8/8/4k3/8/4K3/4P3/8 w - - 100 60");

    assert!(pos.is_fifty_move_draw());
    assert_eq!(pos.status(), GameStatus::Draw(DrawReason::FiftyMoveRule));
}

#[test]
fn test_fifty_move_rule_at_99_halfmoves() {
    let pos = fen("8/8/8/4k3/8/4K3/4P3/8 w - - 99 60");

    assert!(!pos.is_fifty_move_draw());
    assert_eq!(pos.status(), GameStatus::Ongoing);
}

#[test]
fn test_fifty_move_rule_reset_on_pawn_move() {
    let mut pos = fen("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60");
    pos.play_notation("e3").unwrap();

    assert!(!pos.is_fifty_move_draw(), "Pawn move should reset halfmove clock");
    assert_eq!(pos.halfmove_clock(), 0);
}

#[test]
fn test_fifty_move_rule_reached_by_king_move() {
    let mut pos = fen("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60");
    pos.play_notation("Kc4").unwrap();

    assert_eq!(pos.halfmove_clock(), 100);
    assert!(pos.is_draw());
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_insufficient_material_king_vs_king() {
    let pos = fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1");
    assert!(pos.is_insufficient_material());
    assert_eq!(
        pos.status(),
        GameStatus::Draw(DrawReason::InsufficientMaterial)
    );
}

#[test]
fn test_insufficient_material_single_minor() {
    assert!(fen("8/8/8/4k3/8/4KB2/8/8 w - - 0 1").is_insufficient_material());
    assert!(fen("8/8/8/4k3/8/4K3/8/6N1 w - - 0 1").is_insufficient_material());
    assert!(fen("8/8/4b3/4k3/8/4K3/8/8 w - - 0 1").is_insufficient_material());
    assert!(fen("8/8/4n3/4k3/8/4K3/8/8 w - - 0 1").is_insufficient_material());
}

#[test]
fn test_insufficient_material_same_color_bishops() {
    // f8 and c1 are both dark squares
    let pos = fen("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1");
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_sufficient_material_opposite_color_bishops() {
    // c1 is dark, c8 is light
    let pos = fen("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1");
    assert!(!pos.is_insufficient_material());
}

#[test]
fn test_sufficient_material() {
    // Pawn, rook, queen, two knights
    assert!(!fen("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1").is_insufficient_material());
    assert!(!fen("8/8/8/4k3/8/4K3/8/4R3 w - - 0 1").is_insufficient_material());
    assert!(!fen("8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1").is_insufficient_material());
    assert!(!fen("8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1").is_insufficient_material());
}

// =============================================================================
// Threefold Repetition Tests
// =============================================================================

#[test]
fn test_threefold_repetition_by_knight_shuffle() {
    let mut pos = Position::startpos();
    let cycle = ["Nf3", "Nf6", "Ng1", "Ng8"];

    for mv in cycle {
        pos.play_notation(mv).unwrap();
    }
    assert!(!pos.is_threefold_repetition(), "Start position seen only twice");

    for mv in cycle {
        pos.play_notation(mv).unwrap();
    }
    assert!(pos.is_threefold_repetition());
    assert_eq!(
        pos.status(),
        GameStatus::Draw(DrawReason::ThreefoldRepetition)
    );
    assert_eq!(pos.ply_count(), 8);
}

#[test]
fn test_threefold_after_double_push_without_en_passant() {
    // The position after 1.e4 recurs twice; no black pawn can take en passant
    let mut pos = Position::startpos();
    pos.play_notation("e4").unwrap();

    for round in 0..2 {
        assert!(!pos.is_threefold_repetition(), "round {round}");
        for mv in ["Nf6", "Nf3", "Ng8", "Ng1"] {
            pos.play_notation(mv).unwrap();
        }
    }

    assert_eq!(pos.ply_count(), 9);
    assert!(pos.is_threefold_repetition());
    assert_eq!(
        pos.status(),
        GameStatus::Draw(DrawReason::ThreefoldRepetition)
    );
}

#[test]
fn test_capturable_en_passant_makes_position_distinct() {
    // After e4 the f4 pawn may take en passant; once the kings shuffle
    // that right is gone, so the first occurrence does not count
    let mut pos = fen("4k3/8/8/8/5p2/8/4P3/4K3 w - - 0 1");
    pos.play_notation("e4").unwrap();
    assert!(pos.find_move("fxe3").is_ok());

    let shuffle = ["Kd7", "Kd2", "Ke8", "Ke1"];
    for _ in 0..2 {
        for mv in shuffle {
            pos.play_notation(mv).unwrap();
        }
    }
    assert!(
        !pos.is_threefold_repetition(),
        "Only two occurrences without the en passant right"
    );

    for mv in shuffle {
        pos.play_notation(mv).unwrap();
    }
    assert!(pos.is_threefold_repetition());
}

#[test]
fn test_loaded_position_has_no_repetition_history() {
    let pos = fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 6 5");
    assert!(!pos.is_threefold_repetition());
    assert_eq!(pos.ply_count(), 0);
}

// =============================================================================
// Checkmate versus check
// =============================================================================

#[test]
fn test_checkmate_is_not_stalemate() {
    // Scholar's mate
    let pos = fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");

    assert!(pos.legal_moves().is_empty());
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());
    assert_eq!(
        pos.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_check_is_not_checkmate() {
    let pos = fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");

    assert!(!pos.legal_moves().is_empty());
    assert!(pos.is_check());
    assert!(!pos.is_checkmate());
    assert_eq!(pos.status(), GameStatus::Ongoing);
}
