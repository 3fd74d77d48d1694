use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rust_spotit::{Canonicalization, Deck, DeckConfig, DeckRng, PlayerId, TowerGameBuilder};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "spotit")]
#[command(about = "Generate and check projective-plane matching decks")]
struct Cmd {
    /// JSON config file; command-line flags override its fields
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Prime modulus p (deck of p²+p+1 cards with p+1 symbols each)
    #[arg(long, short, global = true)]
    modulus: Option<u32>,

    /// Canonicalization strategy
    #[arg(long, global = true, value_parser = parse_strategy)]
    strategy: Option<Canonicalization>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the deck
    Generate {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Skip the one-shared-symbol check
        #[arg(long)]
        no_verify: bool,
        /// Shuffle card order with this seed
        #[arg(long)]
        shuffle_seed: Option<u64>,
    },
    /// Build the deck, check every pair of cards and print a summary
    Verify,
    /// Simulate a game of The Tower
    Play {
        #[arg(long, default_value_t = 2)]
        players: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_strategy(s: &str) -> Result<Canonicalization, String> {
    s.parse().map_err(|e: rust_spotit::PlaneError| e.to_string())
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let mut config = load_config(&cmd)?;
    match cmd.action {
        Action::Generate {
            format,
            no_verify,
            shuffle_seed,
        } => {
            if no_verify {
                config = config.without_verify();
            }
            if let Some(seed) = shuffle_seed {
                config = config.with_shuffle_seed(seed);
            }
            generate(&config, format)
        }
        Action::Verify => verify(&config),
        Action::Play { players, seed } => play(&config, players, seed),
    }
}

fn load_config(cmd: &Cmd) -> Result<DeckConfig> {
    let mut config = match &cmd.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            DeckConfig::from_json(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => DeckConfig::default(),
    };
    if let Some(modulus) = cmd.modulus {
        config.modulus = modulus;
    }
    if let Some(strategy) = cmd.strategy {
        config = config.with_canonicalization(strategy);
    }
    Ok(config)
}

fn generate(config: &DeckConfig, format: Format) -> Result<()> {
    tracing::info!(modulus = config.modulus, "generate");
    let deck = Deck::generate(config).context("generating deck")?;
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&deck)?),
        Format::Text => {
            for (i, card) in deck.cards().iter().enumerate() {
                let symbols: Vec<String> = card.to_indices().iter().map(u32::to_string).collect();
                println!("{i:>4}: {}", symbols.join(" "));
            }
        }
    }
    Ok(())
}

fn verify(config: &DeckConfig) -> Result<()> {
    let config = config.clone().without_verify();
    let deck = Deck::generate(&config).context("generating deck")?;
    deck.verify().context("verifying deck")?;
    println!(
        "{}: {} cards, {} symbols, {} symbols per card, every pair shares exactly one",
        deck.modulus(),
        deck.len(),
        deck.symbol_count(),
        deck.modulus().card_size()
    );
    Ok(())
}

fn play(config: &DeckConfig, players: usize, seed: u64) -> Result<()> {
    tracing::info!(modulus = config.modulus, players, seed, "play");
    let deck = Deck::generate(config).context("generating deck")?;
    let mut game = TowerGameBuilder::new()
        .player_count(players)
        .build(&deck, seed)?;
    let mut rng = DeckRng::new(seed).for_context("play");
    let result = game
        .play_out(&mut rng)
        .context("game ended without a result")?;

    for player in PlayerId::all(players) {
        println!("{player}: {} cards", game.pile_size(player));
    }
    println!("{result}");
    Ok(())
}
