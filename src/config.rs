use crate::search::Algorithm;

/// Configurações do motor, lidas de variáveis de ambiente com valores por omissão.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Algoritmo usado para escolher o lance do motor.
    pub algorithm: Algorithm,
    /// Profundidade da busca (meios-lances).
    pub depth: u8,
    /// Semente para desempatar lances de forma reprodutível.
    pub seed: Option<u64>,
    /// Threads usadas pelo perft paralelo.
    pub threads: usize,
}

impl EngineConfig {
    /// Lê `ROQUE_ALGORITHM`, `ROQUE_DEPTH`, `ROQUE_SEED` e `ROQUE_THREADS`.
    /// Valores ausentes ou inválidos ficam com o valor por omissão.
    pub fn from_env() -> Self {
        let defaults = EngineConfig::default();
        EngineConfig {
            algorithm: std::env::var("ROQUE_ALGORITHM")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.algorithm),
            depth: std::env::var("ROQUE_DEPTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&d| d > 0)
                .unwrap_or(defaults.depth),
            seed: std::env::var("ROQUE_SEED")
                .ok()
                .and_then(|v| v.parse().ok()),
            threads: std::env::var("ROQUE_THREADS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&t| t > 0)
                .unwrap_or(defaults.threads),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            algorithm: Algorithm::AlphaBeta,
            depth: 3,
            seed: None,
            threads: num_cpus::get().max(1),
        }
    }
}
