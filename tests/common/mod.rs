// Utilitários partilhados pelos testes de integração
#![allow(dead_code)]

use roque::*;

pub fn sq(text: &str) -> Square {
    text.parse().unwrap()
}

/// Monta uma posição a partir de um diagrama: linha 0 é a oitava fila,
/// '.' é casa vazia e as letras seguem a convenção maiúscula = brancas.
pub fn position_from_diagram(rows: [&str; 8], side_to_move: Color) -> Position {
    let mut pos = Position::empty(side_to_move);
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(cells.len(), 8, "linha {} do diagrama mal formada", row);
        for (col, ch) in cells.into_iter().enumerate() {
            if ch == '.' {
                continue;
            }
            let piece = Piece::from_char(ch).unwrap();
            pos.put(Square::new(row as u8, col as u8), piece);
        }
    }
    pos
}

/// Procura um lance legal pela notação de quatro caracteres ("e2e4").
/// Numa promoção devolve a primeira gerada (torre).
pub fn find_move(pos: &mut Position, notation: &str) -> Move {
    let side = pos.side_to_move();
    pos.all_legal_moves(side)
        .into_iter()
        .find(|mv| mv.notation() == notation)
        .unwrap_or_else(|| panic!("lance {} não é legal", notation))
}
