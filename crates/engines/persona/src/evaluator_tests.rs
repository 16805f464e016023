use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fen(s: &str) -> Position {
    Position::from_fen(s).expect("test FEN should parse")
}

fn by_san(pos: &Position, san: &str) -> CandidateMove {
    pos.legal_moves()
        .into_iter()
        .find(|m| m.san == san)
        .unwrap_or_else(|| panic!("{san} should be legal in {}", pos.fen()))
}

// Black rook delivers a back-rank mate with Ra1#
const BACK_RANK: &str = "r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1";

#[test]
fn piece_values() {
    assert_eq!(piece_value(PieceKind::Pawn), 1);
    assert_eq!(piece_value(PieceKind::Knight), 3);
    assert_eq!(piece_value(PieceKind::Bishop), 3);
    assert_eq!(piece_value(PieceKind::Rook), 5);
    assert_eq!(piece_value(PieceKind::Queen), 9);
    assert_eq!(piece_value(PieceKind::King), 0);
}

#[test]
fn material_balance_signs() {
    assert_eq!(material_balance(&Position::startpos()), 0);
    // White has an extra queen
    assert_eq!(material_balance(&fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1")), 9);
    // Black has an extra rook
    assert_eq!(material_balance(&fen(BACK_RANK)), -2);
}

#[test]
fn mating_move_scores_checkmate() {
    let pos = fen(BACK_RANK);
    let mate = by_san(&pos, "Ra1#");

    assert_eq!(score(&pos, &mate).unwrap(), CHECKMATE_SCORE);
    assert!(breakdown(&pos, &mate).unwrap().checkmate);
}

#[test]
fn sole_mating_move_is_the_unique_best() {
    let pos = fen(BACK_RANK);
    let moves = pos.legal_moves();

    let (top, tied) = best_moves(&pos, &moves).unwrap().unwrap();
    assert_eq!(top, CHECKMATE_SCORE);
    assert_eq!(tied.len(), 1);
    assert_eq!(tied[0].san, "Ra1#");

    let mut rng = StdRng::seed_from_u64(9);
    let (chosen, value) = select_best(&pos, &moves, &mut rng).unwrap().unwrap();
    assert_eq!(chosen.san, "Ra1#");
    assert_eq!(value, CHECKMATE_SCORE);
}

#[test]
fn hanging_piece_is_penalised() {
    // Knight on b6; a4 is covered by the b3 pawn, d7 is not
    let pos = fen("4k3/8/1n6/8/8/1P6/8/4K3 b - - 0 1");
    let hanging = breakdown(&pos, &by_san(&pos, "Na4")).unwrap();
    let safe = breakdown(&pos, &by_san(&pos, "Nd7")).unwrap();

    assert_eq!(hanging.hanging, -3 * 200);
    assert_eq!(safe.hanging, 0);
    assert_eq!(safe.total() - hanging.total(), 600);
}

#[test]
fn capture_adds_bonus_and_material() {
    let pos = fen("4k3/8/8/8/8/2n5/8/1R2K3 b - - 0 1");
    let s = breakdown(&pos, &by_san(&pos, "Nxb1")).unwrap();

    assert_eq!(s.capture, 5 * 50);
    // White is left with a bare king, Black keeps the knight
    assert_eq!(s.material, 300);
    assert_eq!(s.hanging, 0);
}

#[test]
fn forcing_check_beats_plain_check() {
    let pos = fen("3qk3/8/8/8/8/8/8/4K3 b - - 0 1");

    // Qd1+ leaves only Kxd1 and Kf2
    let forcing = breakdown(&pos, &by_san(&pos, "Qd1+")).unwrap();
    assert_eq!(forcing.check, 100);

    // Qa5+ leaves four king moves
    let plain = breakdown(&pos, &by_san(&pos, "Qa5+")).unwrap();
    assert_eq!(plain.check, 10);

    let quiet = breakdown(&pos, &by_san(&pos, "Qd7")).unwrap();
    assert_eq!(quiet.check, 0);
}

#[test]
fn castling_bonus_on_both_wings() {
    let pos = fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1");

    assert_eq!(breakdown(&pos, &by_san(&pos, "O-O")).unwrap().castling, 100);
    assert_eq!(breakdown(&pos, &by_san(&pos, "O-O-O")).unwrap().castling, 100);
    assert_eq!(breakdown(&pos, &by_san(&pos, "Kf8")).unwrap().castling, 0);
}

#[test]
fn early_center_and_development_bonuses() {
    let mut pos = Position::startpos();
    pos.play_notation("e4").unwrap();

    let e5 = breakdown(&pos, &by_san(&pos, "e5")).unwrap();
    assert_eq!(e5.center, 30);
    assert_eq!(e5.development, 0);

    let nc6 = breakdown(&pos, &by_san(&pos, "Nc6")).unwrap();
    assert_eq!(nc6.center, 0);
    assert_eq!(nc6.development, 25);
}

#[test]
fn opening_bonuses_expire() {
    let mut pos = Position::startpos();
    pos.play_notation("e4").unwrap();
    for _ in 0..4 {
        for mv in ["Nc6", "Nf3", "Nb8", "Ng1"] {
            pos.play_notation(mv).unwrap();
        }
    }
    assert_eq!(pos.ply_count(), 17);

    let e5 = breakdown(&pos, &by_san(&pos, "e5")).unwrap();
    assert_eq!(e5.center, 0);
    let nc6 = breakdown(&pos, &by_san(&pos, "Nc6")).unwrap();
    assert_eq!(nc6.development, 0);
}

#[test]
fn legal_move_never_leaves_own_king_attacked() {
    let pos = fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1");
    for mv in pos.legal_moves() {
        assert_eq!(breakdown(&pos, &mv).unwrap().king_safety, 0, "{}", mv.san);
    }
}

#[test]
fn ties_are_broken_among_equal_scores_only() {
    // Every opening knight move scores the same: development and no center
    let pos = Position::startpos();
    let knights: Vec<CandidateMove> = pos
        .legal_moves()
        .into_iter()
        .filter(|m| m.piece == PieceKind::Knight)
        .collect();

    let (_, tied) = best_moves(&pos, &knights).unwrap().unwrap();
    assert_eq!(tied.len(), 4);

    let mut seen = std::collections::HashSet::new();
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..200 {
        let (mv, _) = select_best(&pos, &knights, &mut rng).unwrap().unwrap();
        seen.insert(mv.san.clone());
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn empty_move_list_selects_nothing() {
    let pos = Position::startpos();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(select_best(&pos, &[], &mut rng).unwrap().is_none());
}

#[test]
fn foreign_move_is_an_error() {
    let start = Position::startpos();
    let e4 = by_san(&start, "e4");
    let mut pos = start.clone();
    pos.play(&e4).unwrap();

    assert!(score(&pos, &e4).is_err());
}
