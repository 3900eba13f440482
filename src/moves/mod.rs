// Ficheiro: src/moves/mod.rs
// Descrição: Declara os submódulos para a geração de lances de cada peça
// e o despacho por tipo de peça.

pub mod pawn;
pub mod knight;
pub mod sliding;
pub mod queen;
pub mod king;

use crate::core::{Move, Piece, PieceKind, Position, Square};

/// Lances de uma peça separados em capturas e não-capturas,
/// para que a busca possa olhar primeiro para as capturas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    pub captures: Vec<Move>,
    pub quiets: Vec<Move>,
}

impl MoveSet {
    pub fn new() -> Self {
        MoveSet { captures: Vec::with_capacity(8), quiets: Vec::with_capacity(16) }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        if mv.is_capture() {
            self.captures.push(mv);
        } else {
            self.quiets.push(mv);
        }
    }

    pub fn append(&mut self, other: &mut MoveSet) {
        self.captures.append(&mut other.captures);
        self.quiets.append(&mut other.quiets);
    }

    pub fn clear(&mut self) {
        self.captures.clear();
        self.quiets.clear();
    }

    pub fn len(&self) -> usize {
        self.captures.len() + self.quiets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty() && self.quiets.is_empty()
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.iter().any(|m| m == mv)
    }

    /// Capturas primeiro, depois os restantes lances.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.captures.iter().chain(self.quiets.iter())
    }

    pub fn into_vec(mut self) -> Vec<Move> {
        self.captures.append(&mut self.quiets);
        self.captures
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = std::iter::Chain<std::vec::IntoIter<Move>, std::vec::IntoIter<Move>>;

    fn into_iter(self) -> Self::IntoIter {
        self.captures.into_iter().chain(self.quiets)
    }
}

/// Gera os lances pseudo-legais da peça em `from`, sem roque.
/// É o gerador usado pela deteção de xeque: o roque nunca captura.
pub fn generate_piece_moves(pos: &Position, from: Square, moves: &mut MoveSet) {
    let Some(piece) = pos.piece_at(from) else { return };

    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(pos, from, piece, moves),
        PieceKind::Knight => knight::generate_knight_moves(pos, from, piece, moves),
        PieceKind::Bishop => sliding::generate_sliding_moves(pos, from, piece, &sliding::BISHOP_DIRECTIONS, moves),
        PieceKind::Rook => sliding::generate_sliding_moves(pos, from, piece, &sliding::ROOK_DIRECTIONS, moves),
        PieceKind::Queen => queen::generate_queen_moves(pos, from, piece, moves),
        PieceKind::King => king::generate_king_moves(pos, from, piece, moves),
    }
}

/// Lances de passo fixo (cavalo, rei): dentro do tabuleiro e sem peça amiga no destino.
pub(crate) fn push_step_moves(
    pos: &Position,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else { continue };
        match pos.piece_at(to) {
            Some(target) if target.color == piece.color => {}
            target => moves.push(Move::new(piece, from, to, target)),
        }
    }
}
