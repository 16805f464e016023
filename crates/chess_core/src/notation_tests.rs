use super::*;

fn sans(pos: &Position) -> Vec<String> {
    pos.legal_moves().into_iter().map(|m| m.san).collect()
}

#[test]
fn test_startpos_san() {
    let sans = sans(&Position::startpos());
    assert!(sans.contains(&"e4".to_string()));
    assert!(sans.contains(&"Nf3".to_string()));
    assert!(sans.contains(&"Na3".to_string()));
    assert!(!sans.iter().any(|s| s.contains('x')));
}

#[test]
fn test_file_disambiguation() {
    // Both rooks can reach d1
    let pos = Position::from_fen("1k6/8/8/8/8/8/4K3/R6R w - - 0 1").unwrap();
    let sans = sans(&pos);
    assert!(sans.contains(&"Rad1".to_string()));
    assert!(sans.contains(&"Rhd1".to_string()));
    // Only the a-rook reaches a2, so no disambiguation there
    assert!(sans.contains(&"Ra2".to_string()));
}

#[test]
fn test_rank_disambiguation() {
    // Knights on b1 and b5 both reach c3
    let pos = Position::from_fen("k7/8/8/1N6/8/8/4K3/1N6 w - - 0 1").unwrap();
    let sans = sans(&pos);
    assert!(sans.contains(&"N1c3".to_string()));
    assert!(sans.contains(&"N5c3".to_string()));
}

#[test]
fn test_check_and_mate_suffixes() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    assert!(sans(&pos).contains(&"Ra8+".to_string()));

    // Back-rank mate
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    assert!(sans(&pos).contains(&"Ra8#".to_string()));
}

#[test]
fn test_promotion_san_and_uci() {
    let pos = Position::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let sans = sans(&pos);
    assert!(sans.contains(&"a8=Q".to_string()));
    assert!(sans.contains(&"a8=N".to_string()));

    let queen = parse_uci_move(&pos, "a7a8").unwrap();
    assert_eq!(queen.promotion, Some(PieceKind::Queen));
    assert!(queen.flags.promotion);

    let knight = parse_uci_move(&pos, "a7a8n").unwrap();
    assert_eq!(knight.san, "a8=N");
    assert_eq!(move_to_uci(&knight), "a7a8n");
}

#[test]
fn test_parse_uci_rejects_bad_input() {
    let pos = Position::startpos();
    assert!(parse_uci_move(&pos, "e2").is_none());
    assert!(parse_uci_move(&pos, "e2e5").is_none());
    assert!(parse_uci_move(&pos, "z9e4").is_none());
    assert!(parse_uci_move(&pos, "e2e4").is_some());
}

#[test]
fn test_normalize_san() {
    assert_eq!(normalize_san("Nf3+"), "Nf3");
    assert_eq!(normalize_san("Qxf7#"), "Qxf7");
    assert_eq!(normalize_san("0-0"), "O-O");
    assert_eq!(normalize_san(" e4!? "), "e4");
}

#[test]
fn test_find_move_ignores_check_marker() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    assert_eq!(pos.find_move("Ra8").unwrap().san, "Ra8+");
    assert_eq!(pos.find_move("Ra8+").unwrap().san, "Ra8+");
}
