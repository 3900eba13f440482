pub mod board;
pub mod rules;
pub mod types;

pub use board::*;
pub use types::*;
