// Ficheiro: src/moves/king.rs
// Descrição: Lógica para gerar os lances do Rei, incluindo o roque.

use crate::core::{CastleKind, Move, Piece, PieceKind, Position, Square};
use super::{push_step_moves, MoveSet};

// Movimentos de um passo nas 8 direções, varridos linha a linha
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Gera os lances de um passo do rei (o roque é gerado à parte).
pub fn generate_king_moves(pos: &Position, from: Square, piece: Piece, moves: &mut MoveSet) {
    push_step_moves(pos, from, piece, &KING_OFFSETS, moves);
}

/// Lógica de roque. Precisa de `&mut` porque testa as casas de passagem
/// fazendo o lance do rei, verificando o xeque e desfazendo-o.
pub fn generate_castling_moves(pos: &mut Position, from: Square, moves: &mut MoveSet) {
    let Some(king) = pos.piece_at(from) else { return };
    if king.kind != PieceKind::King {
        return;
    }

    let color = king.color;
    let side = *pos.side(color);
    let row = color.back_row();

    if side.king_moves != 0 || from != Square::new(row, 4) {
        return;
    }
    if pos.is_in_check(color) {
        return;
    }

    let own_rook = Some(Piece::new(PieceKind::Rook, color));

    // Roque grande (b, c e d vazias)
    if side.left_rook == Some(Square::new(row, 0))
        && side.left_rook_moves == 0
        && pos.piece_at(Square::new(row, 0)) == own_rook
        && (1..4).all(|col| pos.piece_at(Square::new(row, col)).is_none())
        && king_path_is_safe(pos, king, from, -1)
    {
        moves.push(Move::castle(king, from, Square::new(row, 2), CastleKind::Long));
    }

    // Roque pequeno (f e g vazias)
    if side.right_rook == Some(Square::new(row, 7))
        && side.right_rook_moves == 0
        && pos.piece_at(Square::new(row, 7)) == own_rook
        && (5..7).all(|col| pos.piece_at(Square::new(row, col)).is_none())
        && king_path_is_safe(pos, king, from, 1)
    {
        moves.push(Move::castle(king, from, Square::new(row, 6), CastleKind::Short));
    }
}

/// O rei não pode passar nem parar numa casa atacada: faz os lances de uma e de
/// duas casas na direção da torre, testa o xeque e desfaz.
fn king_path_is_safe(pos: &mut Position, king: Piece, from: Square, step: i8) -> bool {
    (1..=2).all(|n| {
        let Some(to) = from.offset(0, step * n) else { return false };
        pos.make_move(Move::new(king, from, to, None));
        let attacked = pos.is_in_check(king.color);
        pos.undo_move();
        !attacked
    })
}
