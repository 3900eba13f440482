// Ficheiro: src/moves/knight.rs
// Descrição: Lógica para gerar os lances dos cavalos.

use crate::core::{Piece, Position, Square};
use super::{push_step_moves, MoveSet};

// Array com os possíveis deslocamentos do cavalo (linha, coluna)
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2), (1, -2),
    (-1, 2), (1, 2),
    (-2, -1), (-2, 1),
    (2, -1), (2, 1),
];

/// Gera todos os lances pseudo-legais do cavalo em `from`.
pub fn generate_knight_moves(pos: &Position, from: Square, piece: Piece, moves: &mut MoveSet) {
    push_step_moves(pos, from, piece, &KNIGHT_OFFSETS, moves);
}
