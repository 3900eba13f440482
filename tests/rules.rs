// Testes de integração das regras: make/unmake, legalidade, fim de partida
mod common;

use common::*;
use roque::*;

/// Faz e desfaz cada lance legal recursivamente e compara a posição.
fn assert_round_trip(pos: &mut Position, depth: u8) {
    if depth == 0 {
        return;
    }
    let before = pos.clone();
    for mv in pos.all_legal_moves(pos.side_to_move()) {
        pos.make_move(mv);
        assert_round_trip(pos, depth - 1);
        assert_eq!(pos.undo_move(), Some(mv));
        assert_eq!(*pos, before, "make/undo de {} alterou a posição", mv);
    }
}

#[test]
fn test_make_undo_round_trip_from_start() {
    let mut pos = Position::new();
    assert_round_trip(&mut pos, 3);
}

#[test]
fn test_make_undo_round_trip_with_special_moves() {
    // Roques, en passant e promoções possíveis na mesma árvore
    let mut pos = position_from_diagram(
        [
            "r . . . k . . r",
            ". P . . . . . .",
            ". . . . . . . .",
            ". . . p P . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . p .",
            "R . . . K . . R",
        ],
        Color::White,
    );
    assert_round_trip(&mut pos, 2);
}

#[test]
fn test_make_undo_round_trip_with_rook_trades() {
    // Torres frente a frente nas colunas a e h: capturas e recapturas nos cantos
    let mut pos = position_from_diagram(
        [
            "r . . . k . . r",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            "R . . . K . . R",
        ],
        Color::White,
    );
    assert_round_trip(&mut pos, 3);
}

#[test]
fn test_make_undo_round_trip_with_rooks_off_corners() {
    // Torres fora dos cantos que podem entrar neles, promoções a torre com captura
    let mut pos = position_from_diagram(
        [
            "r . . . k . . .",
            ". P . . . . . r",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . R . . . . .",
            ". . . . . . p .",
            ". . . . K . . R",
        ],
        Color::White,
    );
    assert_round_trip(&mut pos, 3);
}

#[test]
fn test_rook_moving_onto_empty_corner() {
    let mut pos = position_from_diagram(
        [
            ". . . . k . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . R K . . .",
        ],
        Color::White,
    );
    let before = pos.clone();
    let to_corner = find_move(&mut pos, "d1a1");
    pos.make_move(to_corner);
    assert_eq!(pos.side(Color::White).left_rook, None);
    pos.undo_move();
    assert_eq!(pos, before);
}

#[test]
fn test_recapture_on_corner_restores_both_sides() {
    let mut pos = position_from_diagram(
        [
            "r . . . k . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . K . . .",
            "R . . . . . . R",
        ],
        Color::Black,
    );
    let capture = find_move(&mut pos, "a8a1");
    pos.make_move(capture);
    let after_capture = pos.clone();
    assert_eq!(pos.side(Color::White).left_rook, None);

    let recapture = find_move(&mut pos, "h1a1");
    pos.make_move(recapture);
    pos.undo_move();
    assert_eq!(pos, after_capture);
    assert_eq!(pos.side(Color::White).right_rook, Some(sq("h1")));
    assert_eq!(pos.side(Color::White).right_rook_moves, 0);
}

#[test]
fn test_legal_moves_never_leave_king_attacked() {
    let mut game = Game::with_config(EngineConfig { seed: Some(5), depth: 1, ..EngineConfig::default() });
    for _ in 0..20 {
        if game.is_over() {
            break;
        }
        let mut pos = game.position().clone();
        let side = pos.side_to_move();
        for mv in pos.all_legal_moves(side) {
            pos.make_move(mv);
            assert!(!pos.is_in_check(side), "{} deixa o rei em xeque", mv);
            pos.undo_move();
        }
        game.play_engine_move().unwrap();
    }
}

#[test]
fn test_dropped_moves_leave_king_attacked() {
    let mut pos = position_from_diagram(
        [
            ". . . . k . . .",
            ". . . . r . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . B . . .",
            ". . . . K . . .",
        ],
        Color::White,
    );
    assert!(pos.legal_moves(sq("e2")).is_empty());

    // Todos os lances descartados deixam o rei atacado
    let dropped = pos.pseudo_legal_moves(sq("e2"));
    assert!(!dropped.is_empty());
    for mv in dropped {
        pos.make_move(mv);
        assert!(pos.is_in_check(Color::White));
        pos.undo_move();
    }
}

#[test]
fn test_scholars_mate() {
    let mut game = Game::with_config(EngineConfig { seed: Some(1), ..EngineConfig::default() });
    for text in ["e2e4", "e7e5", "f1c4", "f8c5", "d1h5", "b8c6", "h5f7"] {
        game.play_notation(text).unwrap();
    }
    assert_eq!(game.position().result(), Some(GameResult::Checkmate { winner: Color::White }));
    assert!(game.position().is_king_in_check(Color::Black));
    assert_eq!(game.play_notation("e8e7"), Err(GameError::GameOver));
    assert_eq!(game.play_engine_move().unwrap_err(), GameError::GameOver);

    // Desfazer reabre a partida
    game.undo();
    assert_eq!(game.position().result(), None);
    assert!(!game.position().is_king_in_check(Color::Black));
}

#[test]
fn test_stalemate_is_not_checkmate() {
    let mut pos = position_from_diagram(
        [
            "k . . . . . . .",
            ". . . . . . . .",
            ". Q . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . K",
        ],
        Color::Black,
    );
    assert!(!pos.is_in_check(Color::Black));
    assert!(pos.no_legal_moves(Color::Black));

    pos.end_turn();
    assert_eq!(pos.result(), Some(GameResult::Stalemate));
    assert!(!pos.is_king_in_check(Color::Black));
}

#[test]
fn test_en_passant_only_right_after_double_push() {
    let mut pos = position_from_diagram(
        [
            ". . . . k . . .",
            ". . . p . . . .",
            ". . . . . . . .",
            ". . . . P . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . K . . .",
        ],
        Color::Black,
    );
    let push = find_move(&mut pos, "d7d5");
    pos.make_move(push);

    let ep = find_move(&mut pos, "e5d6");
    assert!(ep.is_en_passant());
    assert_eq!(ep.capture_square(), sq("d5"));

    let before = pos.clone();
    pos.make_move(ep);
    assert_eq!(pos.piece_at(sq("d5")), None);
    assert_eq!(pos.piece_at(sq("d6")), Some(Piece::new(PieceKind::Pawn, Color::White)));
    pos.undo_move();
    assert_eq!(pos, before);

    // Um lance de rei pelo meio e a oportunidade perde-se
    let king_move = find_move(&mut pos, "e1e2");
    pos.make_move(king_move);
    let reply = find_move(&mut pos, "e8e7");
    pos.make_move(reply);
    assert!(!pos.legal_moves(sq("e5")).iter().any(|mv| mv.is_en_passant()));
}

#[test]
fn test_castle_short_make_and_undo() {
    let mut pos = position_from_diagram(
        [
            ". . . . k . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            "R . . . K . . R",
        ],
        Color::White,
    );
    let before = pos.clone();
    let castle = find_move(&mut pos, "e1g1");
    assert_eq!(castle.castle_kind(), Some(CastleKind::Short));
    assert!(pos.legal_moves(sq("e1")).iter().any(|mv| mv.castle_kind() == Some(CastleKind::Long)));

    pos.make_move(castle);
    assert_eq!(pos.piece_at(sq("g1")), Some(Piece::new(PieceKind::King, Color::White)));
    assert_eq!(pos.piece_at(sq("f1")), Some(Piece::new(PieceKind::Rook, Color::White)));
    assert_eq!(pos.piece_at(sq("h1")), None);
    assert_eq!(pos.king_square(Color::White), sq("g1"));

    pos.undo_move();
    assert_eq!(pos, before);
}

#[test]
fn test_castle_blocked_through_attacked_square() {
    let mut pos = position_from_diagram(
        [
            ". . . . k r . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . K . . R",
        ],
        Color::White,
    );
    assert!(!pos.legal_moves(sq("e1")).iter().any(|mv| mv.castle_kind().is_some()));
}

#[test]
fn test_dead_positions() {
    let mut bishop = position_from_diagram(
        [
            ". . . . k . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . B . K . . .",
        ],
        Color::Black,
    );
    assert!(bishop.is_dead_position());
    bishop.end_turn();
    assert_eq!(bishop.result(), Some(GameResult::Stalemate));

    let rook = position_from_diagram(
        [
            ". . . . k . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . R . K . . .",
        ],
        Color::Black,
    );
    assert!(!rook.is_dead_position());

    // Dois bispos em casas da mesma cor, sejam de que cor forem
    let same_colour_bishops = position_from_diagram(
        [
            ". . . . k . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . b . .",
            ". . B . K . . .",
        ],
        Color::Black,
    );
    assert!(same_colour_bishops.is_dead_position());
}

#[test]
fn test_promotion_generates_four_pieces() {
    let mut pos = position_from_diagram(
        [
            ". . . . . . . k",
            "P . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . K . . .",
        ],
        Color::White,
    );
    let kinds: Vec<PieceKind> = pos
        .legal_moves(sq("a7"))
        .iter()
        .filter_map(|mv| mv.promotion_piece().map(|p| p.kind))
        .collect();
    assert_eq!(kinds, PieceKind::PROMOTIONS.to_vec());
}
