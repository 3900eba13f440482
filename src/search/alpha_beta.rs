use crate::core::*;
use crate::error::GameError;
use super::evaluation::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Algoritmo de escolha de lance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Melhor lance a uma profundidade, sem olhar para a resposta.
    Greedy,
    Minimax,
    AlphaBeta,
    IterativeDeepening,
}

impl FromStr for Algorithm {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(Algorithm::Greedy),
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(Algorithm::AlphaBeta),
            "iterative" | "iterative-deepening" | "iterative_deepening" => Ok(Algorithm::IterativeDeepening),
            other => Err(GameError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alphabeta",
            Algorithm::IterativeDeepening => "iterative",
        };
        f.write_str(name)
    }
}

/// Resultado da busca
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
}

impl SearchOutcome {
    /// Resultado sem lance nem busca (partida já terminada).
    pub fn without_move(score: i32) -> Self {
        SearchOutcome { best_move: None, score, depth: 0, nodes: 0, elapsed: Duration::ZERO }
    }
}

// Estatísticas
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub nodes: u64,
}

/// Lances empatados no melhor valor de um nó.
struct BestMoves {
    color: Color,
    score: i32,
    moves: Vec<Move>,
}

impl BestMoves {
    fn new(color: Color) -> Self {
        BestMoves { color, score: loss_score(color), moves: Vec::new() }
    }

    fn offer(&mut self, mv: Move, score: i32) {
        if score == self.score {
            self.moves.push(mv);
        } else if strictly_better(self.color, score, self.score) {
            self.score = score;
            self.moves.clear();
            self.moves.push(mv);
        }
    }

    /// O nó já é estritamente melhor que o limite herdado: o pai nunca o escolheria.
    fn beats(&self, bound: Option<i32>) -> bool {
        bound.is_some_and(|bound| strictly_better(self.color, self.score, bound))
    }
}

/// Motor de busca: minimax, alpha-beta com um só limite e aprofundamento iterativo.
/// A posição é alterada no lugar (make, recursão, unmake) e volta intacta.
/// Os empates no melhor valor são desfeitos pelo gerador aleatório injetado.
pub struct Searcher<R: Rng = StdRng> {
    rng: R,
    should_stop: Arc<AtomicBool>,
    stats: SearchStats,
}

impl Searcher<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Busca reprodutível: mesma semente, mesma escolha entre empates.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Searcher<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Searcher<R> {
    pub fn with_rng(rng: R) -> Self {
        Searcher {
            rng,
            should_stop: Arc::new(AtomicBool::new(false)),
            stats: SearchStats::default(),
        }
    }

    /// Flag partilhada para interromper a busca a partir de outra thread.
    /// Um pedido feito antes de a busca começar também conta; a flag é limpa
    /// quando a busca termina.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.should_stop)
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[inline]
    fn should_stop(&self) -> bool {
        self.should_stop.load(Ordering::Relaxed)
    }

    /// Busca principal - interface pública
    pub fn search(&mut self, pos: &mut Position, algorithm: Algorithm, depth: u8) -> SearchOutcome {
        self.stats = SearchStats::default();
        let start = Instant::now();
        let depth = depth.max(1);

        let (best_move, score) = match algorithm {
            Algorithm::Greedy => self.best_move_at_depth_1(pos, None),
            Algorithm::Minimax => self.minimax(pos, depth),
            Algorithm::AlphaBeta => self.alpha_beta(pos, depth, None),
            Algorithm::IterativeDeepening => self.iterative_deepening(pos, depth),
        };

        self.should_stop.store(false, Ordering::Relaxed);

        let outcome = SearchOutcome {
            best_move,
            score,
            depth: if algorithm == Algorithm::Greedy { 1 } else { depth },
            nodes: self.stats.nodes,
            elapsed: start.elapsed(),
        };
        let best = best_move.map_or_else(|| "-".to_string(), |m| m.to_string());
        debug!(
            %algorithm,
            depth = outcome.depth,
            score,
            nodes = outcome.nodes,
            %best,
            "search finished"
        );
        outcome
    }

    /// Avalia cada lance legal diretamente. Com `bound`, pára assim que um lance
    /// ultrapassa estritamente o limite do pai.
    pub fn best_move_at_depth_1(&mut self, pos: &mut Position, bound: Option<i32>) -> (Option<Move>, i32) {
        let color = pos.side_to_move();
        let moves = pos.all_legal_moves(color);
        self.stats.nodes += 1;

        if moves.is_empty() {
            return (None, loss_score(color));
        }

        let mut best = BestMoves::new(color);
        for mv in moves {
            if self.should_stop() {
                break;
            }

            pos.make_move(mv);
            let score = evaluate_position(pos);
            pos.undo_move();
            self.stats.nodes += 1;

            best.offer(mv, score);
            if best.beats(bound) {
                break;
            }
        }
        self.finish(best)
    }

    /// Minimax puro: explora a árvore inteira até `depth`.
    pub fn minimax(&mut self, pos: &mut Position, depth: u8) -> (Option<Move>, i32) {
        if depth <= 1 {
            return self.best_move_at_depth_1(pos, None);
        }

        let color = pos.side_to_move();
        let moves = pos.all_legal_moves(color);
        self.stats.nodes += 1;

        if moves.is_empty() {
            return (None, loss_score(color));
        }

        let mut best = BestMoves::new(color);
        for mv in moves {
            if self.should_stop() {
                break;
            }

            pos.make_move(mv);
            let (_, score) = self.minimax(pos, depth - 1);
            pos.undo_move();

            best.offer(mv, score);
        }
        self.finish(best)
    }

    /// Alpha-beta simplificado: em vez da janela [α, β] cada nó recebe um só limite,
    /// o melhor valor já garantido pelo pai, e passa o seu próprio melhor aos filhos.
    /// Um nó pára quando o seu melhor é estritamente melhor que esse limite.
    pub fn alpha_beta(&mut self, pos: &mut Position, depth: u8, bound: Option<i32>) -> (Option<Move>, i32) {
        if depth <= 1 {
            return self.best_move_at_depth_1(pos, bound);
        }

        let color = pos.side_to_move();
        let moves = pos.all_legal_moves(color);
        self.stats.nodes += 1;

        if moves.is_empty() {
            return (None, loss_score(color));
        }

        let mut best = BestMoves::new(color);
        for mv in moves {
            if self.should_stop() {
                break;
            }

            pos.make_move(mv);
            let (_, score) = self.alpha_beta(pos, depth - 1, Some(best.score));
            pos.undo_move();

            best.offer(mv, score);
            if best.beats(bound) {
                break;
            }
        }
        self.finish(best)
    }

    /// Aprofundamento iterativo: alpha-beta às profundidades 1..=max_depth.
    /// Cada iteração recebe como limite o valor da anterior; o resultado só
    /// substitui o atual se for pelo menos tão bom para quem joga.
    pub fn iterative_deepening(&mut self, pos: &mut Position, max_depth: u8) -> (Option<Move>, i32) {
        let color = pos.side_to_move();
        let mut best_score = loss_score(color);
        let mut best_move = None;

        for depth in 1..=max_depth.max(1) {
            let bound = if depth == 1 { None } else { Some(best_score) };
            let (mv, score) = self.alpha_beta(pos, depth, bound);

            // Iteração interrompida: descartada
            if self.should_stop() {
                break;
            }

            debug!(depth, score, nodes = self.stats.nodes, "iterative deepening");

            if mv.is_some() && at_least_as_good(color, score, best_score) {
                best_score = score;
                best_move = mv;
            } else if best_move.is_none() {
                best_score = score;
            }
        }
        (best_move, best_score)
    }

    /// Escolhe ao acaso entre os lances empatados.
    fn finish(&mut self, best: BestMoves) -> (Option<Move>, i32) {
        let chosen = best.moves.choose(&mut self.rng).copied();
        (chosen, best.score)
    }
}
