use crate::core::*;

/// Pontuação de derrota: quem não tem lances perdeu.
pub const MATE_SCORE: i32 = 999_999;

/// Avaliação simples baseada no material das peças.
/// Positivo favorece as brancas, negativo as pretas. O rei entra na soma e domina-a.
pub fn evaluate_position(pos: &Position) -> i32 {
    Square::all()
        .filter_map(|sq| pos.piece_at(sq))
        .map(signed_value)
        .sum()
}

/// Valor da peça com sinal (brancas positivo).
#[inline]
pub fn signed_value(piece: Piece) -> i32 {
    match piece.color {
        Color::White => piece.kind.value(),
        Color::Black => -piece.kind.value(),
    }
}

/// Pior pontuação possível para `color`; é também o valor de partida do melhor lance.
#[inline]
pub fn loss_score(color: Color) -> i32 {
    match color {
        Color::White => -MATE_SCORE,
        Color::Black => MATE_SCORE,
    }
}

/// `a` é pelo menos tão bom quanto `b` do ponto de vista de `color`.
#[inline]
pub fn at_least_as_good(color: Color, a: i32, b: i32) -> bool {
    match color {
        Color::White => a >= b,
        Color::Black => a <= b,
    }
}

/// `a` é estritamente melhor que `b` do ponto de vista de `color`.
#[inline]
pub fn strictly_better(color: Color, a: i32, b: i32) -> bool {
    match color {
        Color::White => a > b,
        Color::Black => a < b,
    }
}
