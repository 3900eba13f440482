// Roque - partida do motor contra si próprio
//
// Uso: roque [lances...]   ex.: roque e2e4 e7e5
// Os lances dados são jogados primeiro; depois o motor joga os dois lados.
// Configuração por ROQUE_ALGORITHM, ROQUE_DEPTH, ROQUE_SEED; logs por RUST_LOG.
use roque::*;
use std::process;
use tracing_subscriber::EnvFilter;

const MAX_PLIES: usize = 100;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = EngineConfig::from_env();
    println!("=== ROQUE ===");
    println!("Algoritmo: {} | Profundidade: {}", config.algorithm, config.depth);

    let mut game = Game::with_config(config);

    for text in std::env::args().skip(1) {
        if let Err(err) = game.play_notation(&text) {
            eprintln!("❌ Lance {} rejeitado: {}", text, err);
            process::exit(1);
        }
        println!("Jogado: {}", text);
    }

    let mut plies = 0;
    while !game.is_over() && plies < MAX_PLIES {
        let side = game.position().side_to_move();
        match game.play_engine_move() {
            Ok(outcome) => {
                let Some(mv) = outcome.best_move else { break };
                println!(
                    "{:>3}. {:?} {} (valor {}, {} nós, {:.2}ms)",
                    plies + 1,
                    side,
                    mv,
                    outcome.score,
                    outcome.nodes,
                    outcome.elapsed.as_secs_f64() * 1000.0
                );
            }
            Err(err) => {
                eprintln!("❌ {}", err);
                break;
            }
        }
        plies += 1;
    }

    println!("\n{}", game.position());
    match game.position().result() {
        Some(GameResult::Checkmate { winner }) => println!("🏁 Xeque-mate! Vencem as {:?}", winner),
        Some(GameResult::Stalemate) => println!("🏁 Empate"),
        None => println!("⏱️  Limite de {} meios-lances atingido", MAX_PLIES),
    }
}
