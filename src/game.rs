// Ficheiro: src/game.rs
// Descrição: Fronteira usada pela interface: consultar o tabuleiro, pedir lances
// legais, jogar, desfazer, pedir o lance do motor e resolver promoções.

use rand::rngs::StdRng;
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::core::*;
use crate::error::{GameError, Result};
use crate::search::{evaluate_position, loss_score, SearchOutcome, Searcher};

/// Uma partida: a posição, o motor de busca e o estado da promoção pendente.
pub struct Game<R: Rng = StdRng> {
    position: Position,
    searcher: Searcher<R>,
    config: EngineConfig,
    pending_promotion: bool,
}

impl Game<StdRng> {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::from_position(Position::new(), config)
    }

    /// Partida a partir de uma posição qualquer; o fim de turno é avaliado logo.
    pub fn from_position(position: Position, config: EngineConfig) -> Self {
        let searcher = match config.seed {
            Some(seed) => Searcher::seeded(seed),
            None => Searcher::new(),
        };
        Self::with_searcher(position, config, searcher)
    }
}

impl Default for Game<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    pub fn with_searcher(mut position: Position, config: EngineConfig, searcher: Searcher<R>) -> Self {
        position.end_turn();
        Game { position, searcher, config, pending_promotion: false }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_pending_promotion(&self) -> bool {
        self.pending_promotion
    }

    pub fn is_over(&self) -> bool {
        self.position.result().is_some()
    }

    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.searcher.stop_handle()
    }

    /// Lances legais da peça em `square` (capturas primeiro).
    /// Com a partida terminada a lista vem vazia.
    pub fn legal_moves_from(&mut self, square: Square) -> Result<Vec<Move>> {
        if self.pending_promotion {
            return Err(GameError::PromotionPending);
        }
        let piece = self
            .position
            .piece_at(square)
            .ok_or_else(|| GameError::EmptySquare(square.to_string()))?;
        if piece.color != self.position.side_to_move() {
            return Err(GameError::NotYourPiece(square.to_string()));
        }
        if self.is_over() {
            return Ok(Vec::new());
        }
        Ok(self.position.legal_moves(square).into_vec())
    }

    /// Joga um lance legal. Um lance de promoção deixa o peão na última fila
    /// até `resolve_promotion` ser chamado; só então corre o fim de turno.
    pub fn play(&mut self, mv: Move) -> Result<()> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let legal = self.legal_moves_from(mv.from())?;
        if !legal.contains(&mv) {
            return Err(GameError::IllegalMove(mv.to_string()));
        }

        trace!(%mv, "play");
        if mv.promotion_piece().is_some() {
            self.position.make_move(mv.without_promotion());
            self.pending_promotion = true;
        } else {
            self.position.make_move(mv);
            self.position.end_turn();
        }
        Ok(())
    }

    /// Joga um lance em notação "e2e4"; um quinto caráter ("e7e8q") escolhe a
    /// promoção e resolve-a logo.
    pub fn play_notation(&mut self, text: &str) -> Result<Move> {
        let text = text.trim();
        let invalid = || GameError::InvalidNotation(text.to_string());
        if !(text.len() == 4 || text.len() == 5) || !text.is_ascii() {
            return Err(invalid());
        }

        let from: Square = text[0..2].parse().map_err(|_| invalid())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid())?;
        let promotion = match text[4..].chars().next() {
            Some(ch) => Some(PieceKind::from_char(ch).ok_or_else(invalid)?),
            None => None,
        };

        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let candidates: Vec<Move> = self
            .legal_moves_from(from)?
            .into_iter()
            .filter(|mv| mv.to() == to)
            .collect();

        let mv = match promotion {
            Some(kind) => candidates
                .iter()
                .find(|mv| mv.promotion_piece().map(|p| p.kind) == Some(kind))
                .copied(),
            None => candidates.first().copied(),
        }
        .ok_or_else(|| GameError::IllegalMove(text.to_string()))?;

        self.play(mv)?;
        if let Some(kind) = promotion {
            self.resolve_promotion(kind)?;
        }
        Ok(mv)
    }

    /// Segunda fase da promoção: troca o peão deixado na última fila pela peça escolhida.
    pub fn resolve_promotion(&mut self, kind: PieceKind) -> Result<()> {
        if !self.pending_promotion {
            return Err(GameError::NoPendingPromotion);
        }
        if !PieceKind::PROMOTIONS.contains(&kind) {
            return Err(GameError::InvalidPromotionPiece(kind.to_char()));
        }

        let pawn_move = self.position.undo_move().ok_or(GameError::NoPendingPromotion)?;
        self.position.make_move(pawn_move.with_promotion(kind));
        self.pending_promotion = false;
        self.position.end_turn();
        Ok(())
    }

    /// Desfaz o último lance e reavalia o fim de turno.
    pub fn undo(&mut self) -> Option<Move> {
        self.pending_promotion = false;
        let undone = self.position.undo_move();
        self.position.end_turn();
        undone
    }

    /// Lance escolhido pelo motor à profundidade pedida, com o algoritmo configurado.
    /// Com a partida terminada não há lance; com uma promoção por resolver a
    /// posição está incompleta e o pedido é recusado.
    pub fn best_move(&mut self, depth: u8) -> Result<SearchOutcome> {
        if self.pending_promotion {
            return Err(GameError::PromotionPending);
        }
        if let Some(result) = self.position.result() {
            let score = match result {
                GameResult::Checkmate { winner } => loss_score(!winner),
                GameResult::Stalemate => evaluate_position(&self.position),
            };
            return Ok(SearchOutcome::without_move(score));
        }

        let outcome = self.searcher.search(&mut self.position, self.config.algorithm, depth);
        debug!(
            side = ?self.position.side_to_move(),
            score = outcome.score,
            nodes = outcome.nodes,
            elapsed_ms = outcome.elapsed.as_millis() as u64,
            "engine move"
        );
        Ok(outcome)
    }

    /// Lance do motor à profundidade configurada.
    pub fn engine_move(&mut self) -> Result<SearchOutcome> {
        self.best_move(self.config.depth)
    }

    /// Pede o lance ao motor e joga-o (a promoção escolhida pelo motor entra logo).
    pub fn play_engine_move(&mut self) -> Result<SearchOutcome> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let outcome = self.engine_move()?;
        if let Some(mv) = outcome.best_move {
            trace!(%mv, "engine plays");
            self.position.make_move(mv);
        }
        self.position.end_turn();
        Ok(outcome)
    }
}
