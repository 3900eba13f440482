// Ficheiro: src/core/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Índice usado nas tabelas por cor (brancas = 0, pretas = 1).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Linha da primeira fila (onde começam rei e torres).
    #[inline]
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Direção de avanço dos peões em linhas do tabuleiro.
    #[inline]
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

// Enum para representar o tipo de uma peça de xadrez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Valor material usado pela avaliação.
    pub fn value(&self) -> i32 {
        match self {
            PieceKind::Pawn   => 10,
            PieceKind::Knight => 30,
            PieceKind::Bishop => 30,
            PieceKind::Rook   => 50,
            PieceKind::Queen  => 90,
            PieceKind::King   => 900, // Domina a soma: perder o rei = fim de jogo
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Peças possíveis numa promoção, na ordem em que os lances são gerados.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
    ];
}

// Struct para representar uma peça no tabuleiro, combinando o tipo e a cor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Letra da peça: maiúscula para as brancas, minúscula para as pretas.
    pub fn to_char(&self) -> char {
        let ch = self.kind.to_char();
        if self.color == Color::White { ch.to_ascii_uppercase() } else { ch }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_char(ch)?;
        let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece { kind, color })
    }
}

/// Casa do tabuleiro em coordenadas (linha, coluna).
/// Linha 0 = oitava fila (lado das pretas), coluna 0 = coluna "a".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    /// Desloca a casa, devolvendo `None` se sair do tabuleiro.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Cor da casa: duas casas têm a mesma cor quando (linha + coluna) tem a mesma paridade.
    #[inline]
    pub fn parity(self) -> u8 {
        (self.row + self.col) % 2
    }

    /// Todas as casas na ordem de varrimento (a8..h8, a7..h7, ..., a1..h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{}{}", file, rank)
    }
}

impl FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(GameError::InvalidSquare(s.to_string()));
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(GameError::InvalidSquare(s.to_string()));
        }
        Ok(Square::new(b'8' - rank, file - b'a'))
    }
}

/// Tipo de roque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleKind {
    Short,
    Long,
}

impl CastleKind {
    /// Colunas (origem, destino) da torre.
    pub fn rook_cols(self) -> (u8, u8) {
        match self {
            CastleKind::Short => (7, 5),
            CastleKind::Long => (0, 3),
        }
    }
}

// Struct para representar um lance no jogo.
// É construído a partir do tabuleiro no momento em que é proposto e nunca é alterado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    en_passant: bool,
    castle: Option<CastleKind>,
    promotion: Option<Piece>,
}

impl Move {
    /// Lance simples ou captura normal. A peça capturada é a que está no destino.
    pub(crate) fn new(piece: Piece, from: Square, to: Square, captured: Option<Piece>) -> Self {
        Move { from, to, piece, captured, en_passant: false, castle: None, promotion: None }
    }

    /// Captura en passant: o peão capturado está em (from.row, to.col).
    pub(crate) fn en_passant(piece: Piece, from: Square, to: Square, captured: Piece) -> Self {
        Move { from, to, piece, captured: Some(captured), en_passant: true, castle: None, promotion: None }
    }

    pub(crate) fn castle(king: Piece, from: Square, to: Square, kind: CastleKind) -> Self {
        Move { from, to, piece: king, captured: None, en_passant: false, castle: Some(kind), promotion: None }
    }

    pub(crate) fn promotion(
        pawn: Piece,
        from: Square,
        to: Square,
        captured: Option<Piece>,
        kind: PieceKind,
    ) -> Self {
        Move {
            from,
            to,
            piece: pawn,
            captured,
            en_passant: false,
            castle: None,
            promotion: Some(Piece::new(kind, pawn.color)),
        }
    }

    /// Novo lance igual a este mas promovendo para `kind` (cor de quem joga).
    pub fn with_promotion(&self, kind: PieceKind) -> Move {
        Move { promotion: Some(Piece::new(kind, self.piece.color)), ..*self }
    }

    /// Novo lance igual a este mas sem peça de promoção.
    pub fn without_promotion(&self) -> Move {
        Move { promotion: None, ..*self }
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.en_passant
    }

    #[inline]
    pub fn castle_kind(&self) -> Option<CastleKind> {
        self.castle
    }

    #[inline]
    pub fn promotion_piece(&self) -> Option<Piece> {
        self.promotion
    }

    /// Casa onde está a peça capturada (difere do destino no en passant).
    #[inline]
    pub fn capture_square(&self) -> Square {
        if self.en_passant {
            Square::new(self.from.row, self.to.col)
        } else {
            self.to
        }
    }

    /// Notação de quatro caracteres: casa de origem seguida da casa de destino.
    pub fn notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
