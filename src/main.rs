//! TCG Catalog - command line browser
//!
//! Prints the set list, a set's cards, or a card's details from the hosted
//! catalog database.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tcg_catalog::{
    card_image_url,
    core::{CardId, CardSet, RawAttack, SetCode},
    loader::{config, BackendConfig, RestCatalog},
    normalize_attacks, CardView, Catalog, SetView,
};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Log verbosity (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(LevelFilter);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(LevelFilter::OFF)),
            "minimal" | "1" => Ok(VerbosityArg(LevelFilter::WARN)),
            "normal" | "2" => Ok(VerbosityArg(LevelFilter::INFO)),
            "verbose" | "3" => Ok(VerbosityArg(LevelFilter::DEBUG)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "TCG Catalog - read-only trading card catalog browser", long_about = None)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log verbosity (0=silent, 1=minimal, 2=normal, 3=verbose); RUST_LOG overrides
    #[arg(long, short = 'v', global = true, default_value = "minimal")]
    verbosity: VerbosityArg,

    /// Backend base URL
    #[arg(long, global = true, env = config::URL_VAR, hide_env_values = true)]
    backend_url: Option<String>,

    /// Backend anon API key
    #[arg(long, global = true, env = config::ANON_KEY_VAR, hide_env_values = true)]
    anon_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all sets, newest first
    Sets,

    /// Show a set and its cards
    Set {
        /// Set code (e.g. SVI)
        code: String,
    },

    /// Show a card with its attacks, abilities and other printings
    Card {
        /// Card id (e.g. SVI-006)
        id: String,
    },

    /// Print the image URL for a set code and card number
    ImageUrl {
        set_code: String,
        card_number: String,
    },

    /// Normalize a JSON array of raw attack rows ("-" reads stdin)
    Normalize {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match &cli.command {
        Commands::Sets => {
            let catalog = connect(&cli)?;
            let sets = catalog.sets().await.context("failed to list sets")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&sets)?);
            } else {
                print_sets(&sets);
            }
        }
        Commands::Set { code } => {
            let catalog = connect(&cli)?;
            let Some(view) = catalog.set_view(&SetCode::new(code.as_str())).await? else {
                bail!("set not found: {code}");
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_set(&view);
            }
        }
        Commands::Card { id } => {
            let catalog = connect(&cli)?;
            let Some(view) = catalog.card_view(&CardId::new(id.as_str())).await? else {
                bail!("card not found: {id}");
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_card(&view);
            }
        }
        Commands::ImageUrl {
            set_code,
            card_number,
        } => {
            println!("{}", card_image_url(set_code, card_number));
        }
        Commands::Normalize { input } => {
            let contents = read_input(input).await?;
            let raws: Vec<RawAttack> = serde_json::from_str(&contents)
                .with_context(|| format!("invalid attack rows in {}", input.display()))?;
            let attacks = normalize_attacks(raws);
            println!("{}", serde_json::to_string_pretty(&attacks)?);
        }
    }

    Ok(())
}

fn init_logging(verbosity: VerbosityArg) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity.0.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the catalog from flags, falling back to the environment
fn connect(cli: &Cli) -> anyhow::Result<Catalog<RestCatalog>> {
    let config = BackendConfig::new(
        cli.backend_url.clone().unwrap_or_default(),
        cli.anon_key.clone().unwrap_or_default(),
    )
    .context("backend is not configured (use --backend-url/--anon-key or the environment)")?;

    tracing::debug!(url = %config.url, "connecting to catalog backend");
    Ok(Catalog::new(RestCatalog::new(&config)))
}

async fn read_input(input: &Path) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let stdin = tokio::task::spawn_blocking(|| std::io::read_to_string(std::io::stdin()))
            .await?
            .context("failed to read stdin")?;
        return Ok(stdin);
    }

    tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("failed to read {}", input.display()))
}

fn print_sets(sets: &[CardSet]) {
    for set in sets {
        println!(
            "{:<6} {:<32} {:<20} {:>4} cards  {}",
            set.id.as_str(),
            set.name,
            set.series,
            set.total_cards,
            set.release_date
        );
    }
}

fn print_set(view: &SetView) {
    let set = &view.set;
    println!("{} ({})", set.name, set.id);
    println!("{}", set.series);
    println!("{} cards, released {}", set.total_cards, set.release_date);
    println!();

    for tile in &view.cards {
        let card = &tile.card;
        println!(
            "{:>4}  {:<12} {:<28} {}",
            card.card_number,
            card.id.as_str(),
            card.card_name,
            rarity_label(&card.rarity)
        );
    }
}

fn print_card(view: &CardView) {
    let card = &view.card;
    print!("{}", card.card_name);
    if let Some(hp) = card.hp {
        print!("  {hp} HP");
    }
    println!();

    let mut kind = format!("{} {}", card.card_subtype, card.card_type);
    if !card.element_type.is_empty() {
        kind.push_str(&format!(" · {}", card.element_type));
    }
    println!("{}", kind.trim());

    println!("Set     {}", card.set_code);
    println!("Number  {}", card.card_number);
    println!("Rarity  {}", rarity_label(&card.rarity));
    if let Some(artist) = &card.artist {
        println!("Artist  {artist}");
    }
    println!("Image   {}", view.image_url);

    if view.is_pokemon() {
        if let Some(weakness) = &card.weakness {
            println!("Weakness      {weakness}");
        }
        if let Some(resistance) = &card.resistance {
            println!("Resistance    {resistance}");
        }
        if let Some(retreat) = card.retreat_cost {
            println!("Retreat Cost  {retreat}");
        }
    }

    if !view.abilities.is_empty() {
        println!("\nAbility");
        for ability in &view.abilities {
            println!("  {}", ability.ability_name);
            println!("    {}", ability.ability_effect);
        }
    }

    if !view.attacks.is_empty() {
        println!("\nAttacks");
        for attack in &view.attacks {
            let cost = if attack.energy_symbols.is_empty() {
                attack.energy_cost_total.to_string()
            } else {
                attack.energy_symbols.to_string()
            };
            match attack.damage {
                Some(damage) => println!("  {}  [{}]  {}", attack.attack_name, cost, damage),
                None => println!("  {}  [{}]", attack.attack_name, cost),
            }
            if let Some(effect) = &attack.effect_text {
                println!("    {effect}");
            }
        }
    }

    if !view.equivalents.is_empty() {
        println!("\nInternational Prints");
        for tile in &view.equivalents {
            println!(
                "  {:<12} {:<12} {}",
                tile.card.id.as_str(),
                rarity_label(&tile.card.rarity),
                tile.image_url
            );
        }
    }
}

fn rarity_label(rarity: &str) -> &str {
    if rarity.is_empty() {
        "Unknown"
    } else {
        rarity
    }
}
