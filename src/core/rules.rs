// Ficheiro: src/core/rules.rs
// Descrição: Filtro de legalidade, deteção de xeque, mate, afogamento e
// material insuficiente, e o controlo de fim de turno.

use tracing::info;

use super::board::{GameResult, Position};
use super::types::*;
use crate::moves::{self, MoveSet};

impl Position {
    /// Lances pseudo-legais da peça em `from`, incluindo o roque para o rei.
    pub fn pseudo_legal_moves(&mut self, from: Square) -> MoveSet {
        let mut moves = MoveSet::new();
        moves::generate_piece_moves(self, from, &mut moves);

        if matches!(self.piece_at(from), Some(p) if p.kind == PieceKind::King) {
            moves::king::generate_castling_moves(self, from, &mut moves);
        }
        moves
    }

    /// Verifica se o rei da cor especificada está atacado.
    /// Calculado de raiz: gera todos os lances do adversário e procura uma captura de rei.
    pub fn is_in_check(&self, color: Color) -> bool {
        let mut moves = MoveSet::new();
        for (square, _) in self.pieces(!color) {
            moves.clear();
            moves::generate_piece_moves(self, square, &mut moves);
            if moves
                .captures
                .iter()
                .any(|mv| matches!(mv.captured(), Some(p) if p.kind == PieceKind::King))
            {
                return true;
            }
        }
        false
    }

    /// Lances legais da peça em `from`: cada lance pseudo-legal é feito, o rei de
    /// quem jogou é testado e o lance é desfeito.
    pub fn legal_moves(&mut self, from: Square) -> MoveSet {
        let Some(piece) = self.piece_at(from) else { return MoveSet::new() };

        let mut legal = MoveSet::new();
        for mv in self.pseudo_legal_moves(from) {
            self.make_move(mv);
            let leaves_king_attacked = self.is_in_check(piece.color);
            self.undo_move();

            if !leaves_king_attacked {
                legal.push(mv);
            }
        }
        legal
    }

    /// Todos os lances legais de uma cor: capturas primeiro, depois os restantes.
    pub fn all_legal_moves(&mut self, color: Color) -> Vec<Move> {
        let squares: Vec<Square> = self.pieces(color).map(|(sq, _)| sq).collect();

        let mut all = MoveSet::new();
        for square in squares {
            let mut moves = self.legal_moves(square);
            all.append(&mut moves);
        }
        all.into_vec()
    }

    /// Pára no primeiro lance legal encontrado.
    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        let squares: Vec<Square> = self.pieces(color).map(|(sq, _)| sq).collect();
        squares.into_iter().any(|square| !self.legal_moves(square).is_empty())
    }

    /// Só testa a ausência de lances: quem chama já tem de saber que a cor está em xeque.
    /// Sem xeque, a mesma condição é afogamento.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        !self.has_legal_moves(color)
    }

    pub fn no_legal_moves(&mut self, color: Color) -> bool {
        !self.has_legal_moves(color)
    }

    /// Material insuficiente, pela heurística das três primeiras peças (sem reis)
    /// encontradas no varrimento do tabuleiro:
    /// nenhuma peça; uma só peça que é cavalo ou bispo; ou dois bispos em casas da mesma cor.
    pub fn is_dead_position(&self) -> bool {
        let found: Vec<(Square, Piece)> = Square::all()
            .filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
            .filter(|(_, p)| p.kind != PieceKind::King)
            .take(3)
            .collect();

        match found.as_slice() {
            [] => true,
            [(_, only)] => matches!(only.kind, PieceKind::Knight | PieceKind::Bishop),
            [(sq_a, a), (sq_b, b)] => {
                a.kind == PieceKind::Bishop
                    && b.kind == PieceKind::Bishop
                    && sq_a.parity() == sq_b.parity()
            }
            _ => false,
        }
    }

    /// Controlo de fim de turno, a chamar depois de cada lance aplicado (ou desfeito).
    /// Atualiza as flags de xeque e regista xeque-mate ou afogamento para quem vai jogar.
    pub fn end_turn(&mut self) {
        let to_move = self.side_to_move;

        // Quem acabou de jogar nunca fica em xeque
        self.sides[(!to_move).index()].in_check = false;

        if self.is_in_check(to_move) {
            self.sides[to_move.index()].in_check = true;

            if self.is_checkmate(to_move) {
                let winner = !to_move;
                info!(?winner, "checkmate");
                self.result = Some(GameResult::Checkmate { winner });
                return;
            }
        } else {
            self.sides[to_move.index()].in_check = false;
        }

        self.result = if self.no_legal_moves(to_move) || self.is_dead_position() {
            info!(side = ?to_move, "stalemate");
            Some(GameResult::Stalemate)
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn kings_only(side: Color) -> Position {
        let mut pos = Position::empty(side);
        pos.put(sq("e1"), Piece::new(PieceKind::King, Color::White));
        pos.put(sq("e8"), Piece::new(PieceKind::King, Color::Black));
        pos
    }

    #[test]
    fn test_start_position_has_twenty_moves() {
        let mut pos = Position::new();
        let moves = pos.all_legal_moves(Color::White);
        assert_eq!(moves.len(), 20);
        assert!(!pos.is_in_check(Color::White));
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        let mut pos = kings_only(Color::White);
        pos.put(sq("e2"), Piece::new(PieceKind::Bishop, Color::White));
        pos.put(sq("e7"), Piece::new(PieceKind::Rook, Color::Black));

        assert!(pos.legal_moves(sq("e2")).is_empty());
        assert!(!pos.pseudo_legal_moves(sq("e2")).is_empty());
    }

    #[test]
    fn test_captures_listed_before_quiets() {
        let mut pos = kings_only(Color::White);
        pos.put(sq("a1"), Piece::new(PieceKind::Rook, Color::White));
        pos.put(sq("h8"), Piece::new(PieceKind::Knight, Color::Black));
        pos.put(sq("a5"), Piece::new(PieceKind::Pawn, Color::Black));

        let moves = pos.all_legal_moves(Color::White);
        assert!(moves[0].is_capture());
        let first_quiet = moves.iter().position(|m| !m.is_capture()).unwrap();
        assert!(moves[first_quiet..].iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_dead_position_heuristic() {
        assert!(kings_only(Color::White).is_dead_position());

        let mut knight = kings_only(Color::White);
        knight.put(sq("c3"), Piece::new(PieceKind::Knight, Color::Black));
        assert!(knight.is_dead_position());

        let mut rook = kings_only(Color::White);
        rook.put(sq("c3"), Piece::new(PieceKind::Rook, Color::Black));
        assert!(!rook.is_dead_position());

        // c1 e f4 têm a mesma cor; c1 e f5 não
        let mut same = kings_only(Color::White);
        same.put(sq("c1"), Piece::new(PieceKind::Bishop, Color::White));
        same.put(sq("f4"), Piece::new(PieceKind::Bishop, Color::Black));
        assert!(same.is_dead_position());

        let mut opposite = kings_only(Color::White);
        opposite.put(sq("c1"), Piece::new(PieceKind::Bishop, Color::White));
        opposite.put(sq("f5"), Piece::new(PieceKind::Bishop, Color::Black));
        assert!(!opposite.is_dead_position());

        assert!(!Position::new().is_dead_position());
    }

    #[test]
    fn test_end_turn_sets_check_flag_only_for_side_to_move() {
        let mut pos = kings_only(Color::Black);
        pos.put(sq("a8"), Piece::new(PieceKind::Rook, Color::White));
        pos.put(sq("h7"), Piece::new(PieceKind::Pawn, Color::Black));
        pos.sides[Color::White.index()].in_check = true;

        pos.end_turn();
        assert!(pos.is_king_in_check(Color::Black));
        assert!(!pos.is_king_in_check(Color::White));
        assert_eq!(pos.result(), None);
    }
}
