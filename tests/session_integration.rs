use chess_sim::board::{Board, PieceKind, Side, Square};
use chess_sim::session::{
    DisplayConfig, DropOutcome, IndicatorKind, PieceStyle, PixelPos, Selection,
    SelectionRejected, Session,
};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

#[test]
fn test_turns_alternate_through_drops() {
    let mut session = Session::default();

    // Black cannot open
    assert_eq!(
        session.pick_up(sq("e7")),
        Selection::Rejected(SelectionRejected::NotYourTurn {
            square: sq("e7"),
            side: Side::Black
        })
    );

    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")] {
        let outcome = session.try_move(sq(from), sq(to)).expect("pick-up accepted");
        assert!(
            matches!(outcome, DropOutcome::Moved { captured: None, .. }),
            "{from}-{to}: {outcome:?}"
        );
    }

    assert_eq!(session.board().side_to_move(), Side::White);
    assert_eq!(
        session.board().to_placement(),
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w"
    );
}

#[test]
fn test_cancelled_drop_keeps_board_and_turn() {
    let mut session = Session::default();
    let before = session.board().to_placement();

    let Selection::Started { id, moves } = session.pick_up(sq("g1")) else {
        panic!("knight pick-up rejected");
    };
    assert_eq!(moves.sorted(), vec![sq("f3"), sq("h3")]);
    assert_eq!(session.held_piece(), Some(id));

    assert_eq!(
        session.drop_on(sq("g3")),
        DropOutcome::Cancelled { id, from: sq("g1") }
    );
    assert_eq!(session.held_piece(), None);
    assert_eq!(session.board().to_placement(), before);
    assert_eq!(session.drop_on(sq("f3")), DropOutcome::NothingHeld);
}

#[test]
fn test_pointer_drag_and_drop() {
    let mut session = Session::new(DisplayConfig::new());

    // Grab e2 slightly off-centre; the sprite keeps the grab offset
    let Selection::Started { id, .. } = session.pick_up_at(PixelPos::new(330.0, 100.0)) else {
        panic!("pointer pick-up rejected");
    };
    assert_eq!(session.sprite_centre(id), Some(PixelPos::new(337.5, 112.5)));

    assert_eq!(
        session.drag_to(PixelPos::new(330.0, 180.0)),
        Some(PixelPos::new(337.5, 192.5))
    );

    match session.drop_at(PixelPos::new(330.0, 250.0)) {
        DropOutcome::Moved { from, to, .. } => {
            assert_eq!(from, sq("e2"));
            assert_eq!(to, sq("e4"));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(session.sprite_centre(id), Some(PixelPos::new(337.5, 262.5)));
}

#[test]
fn test_drop_outside_window_cancels() {
    let mut session = Session::default();
    let Selection::Started { id, .. } = session.pick_up(sq("b1")) else {
        panic!("pick-up rejected");
    };
    assert_eq!(
        session.drop_at(PixelPos::new(-200.0, 100.0)),
        DropOutcome::Cancelled { id, from: sq("b1") }
    );
    assert_eq!(
        session.pick_up_at(PixelPos::new(700.0, 10.0)),
        Selection::Rejected(SelectionRejected::OffBoard)
    );
}

#[test]
fn test_king_can_be_captured() {
    let board = Board::from_placement("4k3/8/8/8/8/8/4q3/4K3 b").unwrap();
    let mut session = Session::with_board(board, DisplayConfig::default());

    session.pick_up(sq("e2"));
    let marks = session.indicators();
    assert!(marks.iter().all(|m| m.square != sq("e1")));
    assert!(marks.iter().all(|m| m.kind == IndicatorKind::Quiet));

    let outcome = session.drop_on(sq("e1"));
    let DropOutcome::Moved {
        captured: Some(captured),
        ..
    } = outcome
    else {
        panic!("expected a capture, got {outcome:?}");
    };
    assert_eq!(captured.piece.kind, PieceKind::King);
    assert_eq!(captured.piece.side, Side::White);
    assert_eq!(session.board().find_king(Side::White), None);
    assert_eq!(session.board().piece_count(), 2);

    // White has nothing left to move
    assert!(matches!(
        session.pick_up(sq("e1")),
        Selection::Rejected(SelectionRejected::NotYourTurn { .. })
    ));
}

#[test]
fn test_style_switch_and_reset() {
    let mut session = Session::default();
    session.try_move(sq("d2"), sq("d4")).unwrap();
    session.pick_up(sq("d7"));

    session.set_style(PieceStyle::Style2);
    assert_eq!(session.config().style, PieceStyle::Style2);
    assert!(session.held_piece().is_some());

    session.reset();
    assert_eq!(session.held_piece(), None);
    assert_eq!(session.board().to_placement(), Board::new().to_placement());
    assert_eq!(session.config().style, PieceStyle::Style2);
}

#[test]
fn test_empty_square_is_not_selectable() {
    let mut session = Session::default();
    let before = session.board().to_placement();

    assert_eq!(
        session.pick_up(sq("e4")),
        Selection::Rejected(SelectionRejected::EmptySquare { square: sq("e4") })
    );
    assert_eq!(session.held_piece(), None);
    assert!(session.indicators().is_empty());

    // Pointer inside d5's cell
    assert_eq!(
        session.pick_up_at(PixelPos::new(240.0, 330.0)),
        Selection::Rejected(SelectionRejected::EmptySquare { square: sq("d5") })
    );
    assert_eq!(session.held_piece(), None);
    assert_eq!(session.board().to_placement(), before);
    assert_eq!(session.board().side_to_move(), Side::White);
}
