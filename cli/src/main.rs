mod config;
mod game;
mod input;
mod render;

use clap::Parser;
use tictactoe_engine::logger::init_logger;
use tictactoe_engine::GameRng;

use config::{DifficultySetting, FirstPlayerSetting, GameConfig};
use game::Game;

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Console tic-tac-toe against the computer")]
struct Args {
    /// Path to the YAML config file
    #[arg(long, default_value = "tictactoe_config.yaml")]
    config: String,

    /// Board side length (3 to 20)
    #[arg(long)]
    side_length: Option<usize>,

    /// Points needed to win the match
    #[arg(long)]
    winning_score: Option<u32>,

    /// easy, hard, impossible, or choose
    #[arg(long)]
    difficulty: Option<String>,

    /// human, computer, random, or choose
    #[arg(long)]
    first_player: Option<String>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,
}

fn resolve_config(args: &Args) -> Result<GameConfig, String> {
    let mut config = GameConfig::load(&args.config)?;

    if let Some(side_length) = args.side_length {
        config.side_length = side_length;
    }
    if let Some(winning_score) = args.winning_score {
        config.winning_score = winning_score;
    }
    if let Some(ref name) = args.difficulty {
        config.difficulty = DifficultySetting::from_name(name)
            .ok_or_else(|| format!("Unknown difficulty: {}", name))?;
    }
    if let Some(ref name) = args.first_player {
        config.first_player = FirstPlayerSetting::from_name(name)
            .ok_or_else(|| format!("Unknown first player setting: {}", name))?;
    }

    config.validate()?;
    Ok(config)
}

fn main() {
    let args = Args::parse();
    init_logger(None);

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };

    match Game::new(&config, rng) {
        Ok(mut game) => game.play(),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
