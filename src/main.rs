use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    init_logging, simulate, ui, AiPlayer, CliPlayer, GameConfig, GameSession, SessionError, Side,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[command(flatten)]
        rules: RuleArgs,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Place your fleet randomly instead of ship by ship.
        #[arg(long)]
        auto_place: bool,
        /// Pause before each computer shot, in milliseconds.
        #[arg(long, default_value_t = 0)]
        think_ms: u64,
        /// Draw ships without terminal colors.
        #[arg(long)]
        no_color: bool,
    },
    /// Let two computer players fight and print a summary.
    Sim {
        #[command(flatten)]
        rules: RuleArgs,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Number of games to play.
        #[arg(long, default_value_t = 1)]
        games: usize,
    },
}

#[derive(Args)]
struct RuleArgs {
    /// Board width (10-26).
    #[arg(long)]
    width: Option<usize>,
    /// Board height (10-18).
    #[arg(long)]
    height: Option<usize>,
    /// JSON file with game rules; flags override its size.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl RuleArgs {
    fn load(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => GameConfig::default(),
        };
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        config.validate()?;
        Ok(config)
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            rules,
            seed,
            auto_place,
            think_ms,
            no_color,
        } => {
            let config = rules.load()?;
            let mut rng = make_rng(seed);
            play(config, &mut rng, auto_place, think_ms, !no_color)?;
        }
        Commands::Sim { rules, seed, games } => {
            let config = rules.load()?;
            let mut rng = make_rng(seed);
            let mut wins = [0usize; 2];
            let mut total_shots = 0usize;
            for game in 1..=games {
                let summary = simulate(&config, &mut rng)?;
                let winner_shots = match summary.winner {
                    Side::First => summary.shots[0],
                    Side::Second => summary.shots[1],
                };
                println!(
                    "game {}: {} won in {} shots ({} moved first, {} ships left)",
                    game,
                    summary.winner,
                    winner_shots,
                    summary.opener,
                    summary.winner_ships_left
                );
                match summary.winner {
                    Side::First => wins[0] += 1,
                    Side::Second => wins[1] += 1,
                }
                total_shots += winner_shots;
            }
            if games > 0 {
                println!(
                    "first player won {}, second player won {}, {:.1} winning shots on average",
                    wins[0],
                    wins[1],
                    total_shots as f64 / games as f64
                );
            }
        }
    }
    Ok(())
}

fn play(
    config: GameConfig,
    rng: &mut SmallRng,
    auto_place: bool,
    think_ms: u64,
    colored: bool,
) -> anyhow::Result<()> {
    let human = CliPlayer::stdio()
        .with_colors(colored)
        .with_auto_place(auto_place);
    let computer = AiPlayer::new(config.counts);
    let mut session = GameSession::new(config, Box::new(human), Box::new(computer))?;

    session.setup(rng)?;
    println!("Your fleet:");
    println!("{}", ui::render_own_board(session.board(Side::First), None, colored));
    let opener = session.start(rng)?;
    if opener == Side::First {
        println!("You move first.");
    } else {
        println!("The computer moves first.");
    }

    loop {
        let side = session.current_side();
        if side == Side::Second && think_ms > 0 {
            thread::sleep(Duration::from_millis(think_ms));
        }
        let turn = match session.play_move(rng) {
            Ok(turn) => turn,
            Err(SessionError::NoTarget(Side::First)) => {
                println!("Game abandoned.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        if turn.side == Side::Second && (turn.game_over || !turn.hit) {
            println!("Your fleet:");
            println!("{}", ui::render_own_board(session.board(Side::First), None, colored));
        }
        if turn.game_over {
            break;
        }
    }

    match session.winner() {
        Some(Side::First) => println!("VICTORY! You have destroyed the enemy fleet."),
        Some(Side::Second) => {
            println!("DEFEAT. All your ships have been destroyed.");
            println!("The enemy fleet was:");
            println!("{}", ui::render_own_board(session.board(Side::Second), None, colored));
        }
        None => {}
    }
    Ok(())
}
