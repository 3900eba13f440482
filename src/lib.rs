// Roque - motor de regras e busca de xadrez

pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod moves;
pub mod perft;
pub mod search;

pub use config::EngineConfig;
pub use self::core::*;
pub use error::GameError;
pub use game::Game;
pub use moves::MoveSet;
pub use search::{Algorithm, SearchOutcome, Searcher};
