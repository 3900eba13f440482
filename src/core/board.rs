// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Position e os seus métodos principais (make/unmake).

use std::fmt;

use super::types::*;

/// Resultado final registado pelo controlo de fim de turno.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Checkmate { winner: Color },
    Stalemate,
}

/// Estado seguido por cor: rei, torres (para o roque) e xeque.
/// Só são seguidas as torres que estavam no canto de origem quando foram colocadas;
/// `None` quer dizer que não há torre (ou foi capturada) e o roque desse lado está perdido.
/// Os contadores de lances só interessam como booleano "já se moveu".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideState {
    pub king: Square,
    pub king_moves: u32,
    pub left_rook: Option<Square>,
    pub left_rook_moves: u32,
    pub right_rook: Option<Square>,
    pub right_rook_moves: u32,
    pub in_check: bool,
}

impl SideState {
    fn initial(color: Color) -> Self {
        SideState {
            king: Square::new(color.back_row(), 4),
            king_moves: 0,
            left_rook: None,
            left_rook_moves: 0,
            right_rook: None,
            right_rook_moves: 0,
            in_check: false,
        }
    }
}

// A struct principal do jogo: tabuleiro 8x8, vez de jogar e histórico de lances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) history: Vec<Move>,
    // Estado por cor antes de cada lance do histórico, reposto tal e qual no undo
    pub(crate) saved_sides: Vec<[SideState; 2]>,
    pub(crate) sides: [SideState; 2],
    pub(crate) result: Option<GameResult>,
}

impl Position {
    /// Cria um novo tabuleiro na posição inicial padrão.
    pub fn new() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut pos = Position::empty(Color::White);
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            pos.put(Square::new(0, col), Piece::new(kind, Color::Black));
            pos.put(Square::new(1, col), Piece::new(PieceKind::Pawn, Color::Black));
            pos.put(Square::new(6, col), Piece::new(PieceKind::Pawn, Color::White));
            pos.put(Square::new(7, col), Piece::new(kind, Color::White));
        }
        pos
    }

    /// Tabuleiro vazio; as peças são colocadas com `put`.
    /// Torres e reis são seguidos a partir das casas iniciais, sem lances feitos.
    pub fn empty(side_to_move: Color) -> Self {
        Position {
            board: [[None; 8]; 8],
            side_to_move,
            history: Vec::new(),
            saved_sides: Vec::new(),
            sides: [SideState::initial(Color::White), SideState::initial(Color::Black)],
            result: None,
        }
    }

    /// Coloca uma peça numa casa. Colocar um rei atualiza a casa seguida desse rei;
    /// uma torre no seu canto de origem passa a ser seguida para o roque.
    pub fn put(&mut self, square: Square, piece: Piece) {
        self.forget_rook_at(square);
        self.set(square, Some(piece));

        let side = &mut self.sides[piece.color.index()];
        let row = piece.color.back_row();
        match piece.kind {
            PieceKind::King => side.king = square,
            PieceKind::Rook if square == Square::new(row, 0) => {
                side.left_rook = Some(square);
                side.left_rook_moves = 0;
            }
            PieceKind::Rook if square == Square::new(row, 7) => {
                side.right_rook = Some(square);
                side.right_rook_moves = 0;
            }
            _ => {}
        }
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_at(square);
        self.forget_rook_at(square);
        self.set(square, None);
        piece
    }

    // Deixa de seguir uma torre que vai ser substituída ou retirada
    fn forget_rook_at(&mut self, square: Square) {
        for side in self.sides.iter_mut() {
            if side.left_rook == Some(square) {
                side.left_rook = None;
            }
            if side.right_rook == Some(square) {
                side.right_rook = None;
            }
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row as usize][square.col as usize] = piece;
    }

    /// Grelha completa, para quem desenha o tabuleiro.
    pub fn board(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn side(&self, color: Color) -> &SideState {
        &self.sides[color.index()]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.sides[color.index()].king
    }

    /// Flag de xeque registada no último fim de turno.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.sides[color.index()].in_check
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Peças de uma cor na ordem de varrimento do tabuleiro.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Executa um lance, atualizando o estado do tabuleiro.
    /// Não valida nada: o lance tem de vir do gerador desta mesma posição.
    pub fn make_move(&mut self, mv: Move) {
        let moved = mv.piece();
        let color = moved.color;
        let (from, to) = (mv.from(), mv.to());
        self.saved_sides.push(self.sides);

        match moved.kind {
            PieceKind::King => {
                let side = &mut self.sides[color.index()];
                side.king = to;
                side.king_moves += 1;
            }
            PieceKind::Rook => self.track_rook_move(color, from, to),
            _ => {}
        }

        // Torre seguida que é capturada deixa de contar para o roque
        if let Some(captured) = mv.captured() {
            if captured.kind == PieceKind::Rook {
                self.track_rook_capture(captured.color, mv.capture_square());
            }
        }

        self.set(to, Some(moved));
        self.set(from, None);

        if mv.is_en_passant() {
            self.set(mv.capture_square(), None);
        }

        if let Some(promoted) = mv.promotion_piece() {
            self.set(to, Some(promoted));
        }

        if let Some(kind) = mv.castle_kind() {
            let (rook_from, rook_to) = castle_rook_squares(from.row, kind);
            let rook = self.piece_at(rook_from);
            self.set(rook_to, rook);
            self.set(rook_from, None);
            self.track_rook_move(color, rook_from, rook_to);
        }

        self.history.push(mv);
        self.side_to_move = !self.side_to_move;
    }

    /// Desfaz o último lance. Sem histórico não faz nada.
    /// O estado de reis e torres volta ao que estava antes do lance, sem recontagens.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        let moved = mv.piece();
        let (from, to) = (mv.from(), mv.to());

        self.side_to_move = !self.side_to_move;

        // Repor a peça que se moveu desfaz também a promoção (era um peão)
        self.set(from, Some(moved));
        self.set(to, None);
        if let Some(captured) = mv.captured() {
            self.set(mv.capture_square(), Some(captured));
        }

        if let Some(kind) = mv.castle_kind() {
            let (rook_from, rook_to) = castle_rook_squares(from.row, kind);
            let rook = self.piece_at(rook_to);
            self.set(rook_from, rook);
            self.set(rook_to, None);
        }

        if let Some(sides) = self.saved_sides.pop() {
            self.sides = sides;
        }

        Some(mv)
    }

    fn track_rook_move(&mut self, color: Color, from: Square, to: Square) {
        let side = &mut self.sides[color.index()];
        if side.left_rook == Some(from) {
            side.left_rook = Some(to);
            side.left_rook_moves += 1;
        } else if side.right_rook == Some(from) {
            side.right_rook = Some(to);
            side.right_rook_moves += 1;
        }
    }

    fn track_rook_capture(&mut self, color: Color, square: Square) {
        let side = &mut self.sides[color.index()];
        if side.left_rook == Some(square) {
            side.left_rook = None;
        } else if side.right_rook == Some(square) {
            side.right_rook = None;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Casas (origem, destino) da torre num roque feito na linha `row`.
pub(crate) fn castle_rook_squares(row: u8, kind: CastleKind) -> (Square, Square) {
    let (from_col, to_col) = kind.rook_cols();
    (Square::new(row, from_col), Square::new(row, to_col))
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let ch = self.piece_at(Square::new(row, col)).map_or('.', |p| p.to_char());
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
