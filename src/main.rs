//! Plays one game between the two bots and prints the transcript.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use durak_sim::{Deck, Game, Player, report};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "durak-sim",
    version,
    about = "Simulates a two-player durak-style card game between bots",
    long_about = None
)]
struct Cli {
    /// Seed for the shuffle and the opening move (defaults to the system clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Log game events to stderr at debug level
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the transcript.
    let log_filter = if cli.debug { "durak_sim=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(cli.debug)
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing log subscriber: {err}"))?;

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::debug!(seed, "starting game");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);

    println!("{deck}");
    println!();

    let mut game = Game::from_deck(deck, rng);

    for line in report::deal_lines(
        game.hand(Player::First).cards(),
        game.hand(Player::Second).cards(),
    ) {
        println!("{line}");
    }
    println!();

    while let Ok(record) = game.play_turn() {
        for line in record.lines() {
            println!("{line}");
        }
    }

    Ok(())
}
