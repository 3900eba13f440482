// Perft dividido a partir da posição inicial
//
// Uso: perft [profundidade]   (3 por omissão; threads por ROQUE_THREADS)
use roque::perft::perft_divide;
use roque::*;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let depth: u8 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3);
    let config = EngineConfig::from_env();

    println!("🔍 Perft profundidade {} ({} threads)", depth, config.threads);

    let start = Instant::now();
    let divide = perft_divide(&Position::new(), depth, config.threads);
    let elapsed = start.elapsed();

    for (mv, nodes) in &divide {
        println!("{}: {}", mv, nodes);
    }

    let total: u64 = divide.iter().map(|&(_, nodes)| nodes).sum();
    let total = if depth == 0 { 1 } else { total };
    let nps = total as f64 / elapsed.as_secs_f64().max(1e-9);
    println!("\nTotal: {} nós em {:.3}s ({:.0} nós/s)", total, elapsed.as_secs_f64(), nps);
}
