// Ficheiro: src/moves/queen.rs
// Descrição: Lógica para gerar os lances da Dama (raios de torre seguidos dos de bispo).

use crate::core::{Piece, Position, Square};
use super::sliding::{generate_sliding_moves, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::MoveSet;

/// Gera todos os lances pseudo-legais da dama em `from`.
#[inline]
pub fn generate_queen_moves(pos: &Position, from: Square, piece: Piece, moves: &mut MoveSet) {
    generate_sliding_moves(pos, from, piece, &ROOK_DIRECTIONS, moves);
    generate_sliding_moves(pos, from, piece, &BISHOP_DIRECTIONS, moves);
}
