// Ficheiro: src/moves/sliding.rs
// Descrição: Lógica para gerar os lances de peças deslizantes (Torres e Bispos).

use crate::core::{Move, Piece, Position, Square};
use super::MoveSet;

/// Raios da torre: cima, baixo, direita, esquerda.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Raios do bispo: cima-esquerda, cima-direita, baixo-direita, baixo-esquerda.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];

/// Função genérica para gerar lances de Torres e Bispos.
/// Cada raio avança casa a casa: para antes de uma peça amiga, captura e para numa inimiga.
pub fn generate_sliding_moves(
    pos: &Position,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match pos.piece_at(to) {
                None => moves.push(Move::new(piece, from, to, None)),
                Some(target) if target.color != piece.color => {
                    moves.push(Move::new(piece, from, to, Some(target)));
                    break;
                }
                Some(_) => break,
            }
            current = to;
        }
    }
}
