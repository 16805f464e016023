use super::*;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::seeded(1);
    let pos = Position::startpos();

    let mv = engine.choose_move(&pos);

    assert!(mv.is_some());
    assert!(pos.legal_moves().contains(&mv.unwrap()));
    assert_eq!(engine.moves_played(), 1);
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::seeded(2);
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    assert!(engine.choose_move(&pos).is_none());
    assert_eq!(engine.moves_played(), 0);
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::seeded(3);
    let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    assert!(engine.choose_move(&pos).is_none());
}

#[test]
fn same_seed_same_moves() {
    let pos = Position::startpos();
    let mut a = RandomEngine::seeded(7);
    let mut b = RandomEngine::seeded(7);

    for _ in 0..10 {
        assert_eq!(a.choose_move(&pos), b.choose_move(&pos));
    }
}

#[test]
fn new_game_resets_counter() {
    let mut engine = RandomEngine::seeded(4);
    let pos = Position::startpos();
    engine.choose_move(&pos);
    engine.choose_move(&pos);
    assert_eq!(engine.moves_played(), 2);

    engine.new_game();
    assert_eq!(engine.moves_played(), 0);
}
