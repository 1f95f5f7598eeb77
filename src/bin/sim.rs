use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, simulate, GameConfig, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [config.json]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let config: GameConfig = match args.get(2) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let summary = simulate(&config, &mut rng)?;

    let side_name = |side: Side| match side {
        Side::First => "player1",
        Side::Second => "player2",
    };
    let result = json!({
        "seed": seed,
        "width": config.width,
        "height": config.height,
        "player1": {"shots": summary.shots[0]},
        "player2": {"shots": summary.shots[1]},
        "opener": side_name(summary.opener),
        "winner": side_name(summary.winner),
        "winner_ships_left": summary.winner_ships_left,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
