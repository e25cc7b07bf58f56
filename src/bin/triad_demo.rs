//! Plays a short scripted match and prints the board after every move.
//!
//! ```text
//! RUST_LOG=rust_triad=debug triad-demo --rules plus,greater-than
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rust_triad::{Match, MatchConfig, Ownership, RuleKind};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated capture rules, e.g. "plus,greater-than"
    #[arg(short, long, value_delimiter = ',')]
    rules: Vec<String>,

    /// Seed for the coin flip
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON match configuration; --rules and --seed override it
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// (seat, hand slot, x, y)
const SCRIPT: [(Ownership, usize, usize, usize); 5] = [
    (Ownership::Player, 0, 0, 0),
    (Ownership::Player, 1, 2, 0),
    (Ownership::Npc, 0, 1, 0),
    (Ownership::Npc, 1, 2, 1),
    (Ownership::Player, 2, 1, 1),
];

fn load_config(args: &Args) -> anyhow::Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            MatchConfig::from_json(&json)?
        }
        None => MatchConfig::new().with_rule(RuleKind::Plus),
    };

    if !args.rules.is_empty() {
        config.rules = args
            .rules
            .iter()
            .map(|name| name.parse::<RuleKind>())
            .collect::<Result<_, _>>()?;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_triad=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let mut game = Match::new(&config)?;
    game.add_player(Ownership::Player);
    game.add_player(Ownership::Npc);

    let catalog = game.catalog().clone();
    for (seat, cards) in [
        (Ownership::Player, &["Dodo", "Tonberry", "Sabotender"][..]),
        (Ownership::Npc, &["Tonberry", "Sabotender"][..]),
    ] {
        if let Some(hand) = game.hand_mut(seat) {
            hand.add_many(&catalog, cards)?;
        }
    }

    println!("Rules: {}", game.rules());
    if let Some(first) = game.choose_starting_player() {
        println!("Coin flip: {first} would move first\n");
    }

    for (seat, slot, x, y) in SCRIPT {
        let name = game
            .hand(seat)
            .and_then(|hand| hand.get(slot))
            .map(|card| card.to_string())
            .unwrap_or_default();

        if !game.play_from_hand(seat, slot, x, y)? {
            println!("{seat} could not play {name} at ({x}, {y})\n");
            continue;
        }
        println!("{seat} plays {name} at ({x}, {y})");
        if let Some(record) = game.history().last() {
            for capture in &record.captures {
                println!("  {} captured by {} (chain depth {})", capture.at, capture.rule, capture.depth);
            }
        }
        println!("{}", game.board());
    }

    for seat in Ownership::PLAYERS {
        println!("{seat}: {} cards", game.card_count_for_owner(seat));
    }
    Ok(())
}
