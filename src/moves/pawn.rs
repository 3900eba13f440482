// Ficheiro: src/moves/pawn.rs
// Descrição: Lógica para gerar os lances dos peões (avanços, capturas, promoção e en passant).

use crate::core::{Move, Piece, PieceKind, Position, Square};
use super::MoveSet;

/// Gera todos os lances pseudo-legais do peão em `from`.
pub fn generate_pawn_moves(pos: &Position, from: Square, piece: Piece, moves: &mut MoveSet) {
    let color = piece.color;
    let dir = color.pawn_direction();
    let start_row = (color.back_row() as i8 + dir) as u8;

    let Some(ahead) = from.offset(dir, 0) else { return };

    // Avanço simples (e duplo a partir da fila inicial)
    if pos.piece_at(ahead).is_none() {
        push_pawn_move(moves, piece, from, ahead, None);

        if from.row == start_row {
            if let Some(two_ahead) = ahead.offset(dir, 0) {
                if pos.piece_at(two_ahead).is_none() {
                    moves.push(Move::new(piece, from, two_ahead, None));
                }
            }
        }
    }

    // Capturas diagonais: só para casas ocupadas pelo adversário
    for d_col in [-1, 1] {
        let Some(to) = from.offset(dir, d_col) else { continue };
        if let Some(target) = pos.piece_at(to) {
            if target.color != color {
                push_pawn_move(moves, piece, from, to, Some(target));
            }
        }
    }

    generate_en_passant(pos, from, piece, moves);
}

/// Empurra um lance de peão; ao chegar à última fila gera uma promoção por peça candidata.
fn push_pawn_move(moves: &mut MoveSet, pawn: Piece, from: Square, to: Square, captured: Option<Piece>) {
    let last_row = (!pawn.color).back_row();
    if to.row == last_row {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::promotion(pawn, from, to, captured, kind));
        }
    } else {
        moves.push(Move::new(pawn, from, to, captured));
    }
}

/// En passant: só se o lance imediatamente anterior foi um avanço duplo de um peão
/// adversário que ficou ao lado deste, na mesma linha.
fn generate_en_passant(pos: &Position, from: Square, pawn: Piece, moves: &mut MoveSet) {
    let Some(last) = pos.last_move() else { return };
    let pushed = last.piece();

    let is_double_push = pushed.kind == PieceKind::Pawn
        && pushed.color != pawn.color
        && last.from().row.abs_diff(last.to().row) == 2;

    if !is_double_push || last.to().row != from.row || last.to().col.abs_diff(from.col) != 1 {
        return;
    }

    let d_col = last.to().col as i8 - from.col as i8;
    if let Some(to) = from.offset(pawn.color.pawn_direction(), d_col) {
        moves.push(Move::en_passant(pawn, from, to, pushed));
    }
}
