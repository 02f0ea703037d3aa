use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::{
    init_logging, render_board, ConsoleSink, GameConfig, HuntTargeting, NullSink, PlayerId,
    RandomTargeting, TargetingStrategy, TurnController,
};

/// Self-play driver: two automated players fight to the end.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fix RNG seed for reproducible games (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
    /// Use the classic 10x10 rules instead of the default 6x6 game.
    #[arg(long)]
    classic: bool,
    /// Pit a plain random shooter (P2) against the hunting AI (P1).
    #[arg(long)]
    random_opponent: bool,
    /// Print the attacker's tracking view after every shot.
    #[arg(long)]
    show_boards: bool,
    /// Suppress per-shot output.
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let cfg = if cli.classic {
        GameConfig::classic()
    } else {
        GameConfig::default()
    };

    let mut rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let p2: Box<dyn TargetingStrategy> = if cli.random_opponent {
        Box::new(RandomTargeting::from_config(&cfg))
    } else {
        Box::new(HuntTargeting::from_config(&cfg))
    };
    let strategies: [Box<dyn TargetingStrategy>; 2] =
        [Box::new(HuntTargeting::from_config(&cfg)), p2];

    let mut game = TurnController::new(&cfg, strategies, &mut rng)?;

    if cli.show_boards && !cli.quiet {
        println!("P1 board:\n{}", render_board(game.board(PlayerId::P1)));
        println!("P2 board:\n{}", render_board(game.board(PlayerId::P2)));
    }

    let winner = if cli.quiet {
        game.run(&mut rng, &mut NullSink)?
    } else {
        let mut sink = ConsoleSink {
            show_boards: cli.show_boards,
        };
        game.run(&mut rng, &mut sink)?
    };

    let stats = game.stats(winner);
    println!(
        "{:?} wins in {} shots ({} hits, {} ships sunk)",
        winner, stats.shots_fired, stats.hits, stats.ships_sunk
    );
    Ok(())
}
