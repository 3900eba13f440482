// Ficheiro: src/perft.rs
// Descrição: Perft (contagem de folhas da árvore de lances legais) para validar
// o gerador, o make/unmake e o filtro de legalidade.

use rayon::prelude::*;
use tracing::warn;

use crate::core::{Move, Position};

/// Número de folhas da árvore de lances legais até `depth`.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = pos.all_legal_moves(pos.side_to_move());
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        pos.make_move(mv);
        nodes += perft(pos, depth - 1);
        pos.undo_move();
    }
    nodes
}

/// Perft dividido pelos lances da raiz, cada sub-árvore numa cópia da posição,
/// contadas em paralelo num pool de `threads` threads. A ordem é a da geração.
pub fn perft_divide(pos: &Position, depth: u8, threads: usize) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut root = pos.clone();
    let moves = root.all_legal_moves(root.side_to_move());

    let count = |mv: Move| {
        let mut child = pos.clone();
        child.make_move(mv);
        (mv, perft(&mut child, depth - 1))
    };

    match rayon::ThreadPoolBuilder::new().num_threads(threads.max(1)).build() {
        Ok(pool) => pool.install(|| moves.par_iter().map(|&mv| count(mv)).collect()),
        Err(err) => {
            warn!(%err, "could not build perft thread pool, counting sequentially");
            moves.iter().map(|&mv| count(mv)).collect()
        }
    }
}
