use super::*;

#[test]
fn startpos_diagram() {
    let text = render(&Position::startpos(), None);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "8  r  n  b  q  k  b  n  r ");
    assert_eq!(lines[3], "5  .  .  .  .  .  .  .  . ");
    assert_eq!(lines[7], "1  R  N  B  Q  K  B  N  R ");
    assert_eq!(lines[8], "   a  b  c  d  e  f  g  h");
}

#[test]
fn last_move_is_bracketed() {
    let mut pos = Position::startpos();
    let mv = pos.play_notation("e4").unwrap();
    let text = render(&pos, Some((mv.from, mv.to)));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[4], "4  .  .  .  . [P] .  .  . ");
    assert_eq!(lines[6], "2  P  P  P  P [.] P  P  P ");
    assert_eq!(describe_move((mv.from, mv.to)), "e2-e4");
}
