use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use network::{FriendNetwork, UNBOUNDED};
use ranking::{RankMode, favorites_by_distance, favorites_by_rating};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;
use world::{LoverId, MAX_SCORE, MIN_SCORE, PizzaPlace, PizzaWorld, PlaceId};

/// pizza-net - favorite pizza places across a network of friends
#[derive(Parser)]
#[command(name = "pizza-net")]
#[command(about = "Query pizza lovers, their favorite places and their friends", long_about = None)]
struct Cli {
    /// Path to the seed file describing the world
    #[arg(short, long, default_value = "data/turtles.seed")]
    seed: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered pizza lovers
    Lovers,

    /// List registered pizza places with their ratings
    Places,

    /// Render the whole world, or a single lover or place
    Show {
        /// Lover to describe
        #[arg(long, conflicts_with = "place")]
        lover: Option<LoverId>,

        /// Place to describe
        #[arg(long)]
        place: Option<PlaceId>,
    },

    /// A lover's own favorites, filtered by a threshold and ranked
    Favorites {
        #[arg(long)]
        lover: LoverId,

        /// Ranking key: rating or distance
        #[arg(long, default_value = "rating")]
        by: RankMode,

        /// Minimum average rating, or maximum distance when ranking by distance
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Favorites of a lover and their friends, ranked
    Network {
        #[arg(long)]
        lover: LoverId,

        /// Ranking key: rating or distance
        #[arg(long, default_value = "rating")]
        by: RankMode,

        /// List friends' favorites friend by friend instead of as one ranking
        #[arg(long)]
        grouped: bool,

        /// How many hops away a lover may be and still contribute
        #[arg(long, default_value = "1", conflicts_with = "grouped")]
        scope: usize,
    },

    /// Hop distance from a lover to everyone they can reach
    Distances {
        #[arg(long)]
        lover: LoverId,
    },

    /// Whether someone close enough to a lover favorites a place
    Recommend {
        #[arg(long)]
        lover: LoverId,

        #[arg(long)]
        place: PlaceId,

        /// Maximum hop distance (unbounded when omitted)
        #[arg(long)]
        max_hops: Option<usize>,
    },
}

/// A place as listed by the CLI
#[derive(Serialize)]
struct PlaceRow<'a> {
    id: PlaceId,
    name: &'a str,
    distance: u32,
    average_rating: f64,
    ratings: usize,
}

impl<'a> From<&'a PizzaPlace> for PlaceRow<'a> {
    fn from(place: &'a PizzaPlace) -> Self {
        Self {
            id: place.id(),
            name: place.name(),
            distance: place.distance(),
            average_rating: place.average_rating(),
            ratings: place.number_of_rates(),
        }
    }
}

#[derive(Serialize)]
struct LoverRow<'a> {
    id: LoverId,
    name: &'a str,
    favorites: usize,
    friends: usize,
}

#[derive(Serialize)]
struct Recommendation {
    lover: LoverId,
    place: PlaceId,
    max_hops: Option<usize>,
    recommended: bool,
    recommenders: Vec<(LoverId, usize)>,
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let world = PizzaWorld::load_from_file(&cli.seed)
        .with_context(|| format!("Failed to load seed file {}", cli.seed.display()))?;
    debug!(elapsed = ?start.elapsed(), "seed loaded");

    match cli.command {
        Commands::Lovers => handle_lovers(&world, cli.json)?,
        Commands::Places => handle_places(&world, cli.json)?,
        Commands::Show { lover, place } => handle_show(&world, lover, place, cli.json)?,
        Commands::Favorites {
            lover,
            by,
            threshold,
        } => handle_favorites(&world, lover, by, threshold, cli.json)?,
        Commands::Network {
            lover,
            by,
            grouped,
            scope,
        } => handle_network(&world, lover, by, grouped, scope, cli.json)?,
        Commands::Distances { lover } => handle_distances(&world, lover, cli.json)?,
        Commands::Recommend {
            lover,
            place,
            max_hops,
        } => handle_recommend(&world, lover, place, max_hops, cli.json)?,
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

/// Handle the 'lovers' command
fn handle_lovers(world: &PizzaWorld, json: bool) -> Result<()> {
    let rows: Vec<LoverRow> = world
        .lovers()
        .map(|lover| LoverRow {
            id: lover.id(),
            name: lover.name(),
            favorites: lover.favorites().len(),
            friends: lover.friends().len(),
        })
        .collect();

    if json {
        return print_json(&rows);
    }

    println!("{}", "Pizza lovers:".bold().blue());
    for row in &rows {
        println!(
            "{} {} ({} favorites, {} friends)",
            format!("{:>6}", row.id).green(),
            row.name,
            row.favorites,
            row.friends
        );
    }
    Ok(())
}

/// Handle the 'places' command
fn handle_places(world: &PizzaWorld, json: bool) -> Result<()> {
    let rows: Vec<PlaceRow> = world.places().map(PlaceRow::from).collect();
    if json {
        return print_json(&rows);
    }
    print_places("Pizza places:", &rows);
    Ok(())
}

/// Handle the 'show' command
fn handle_show(
    world: &PizzaWorld,
    lover: Option<LoverId>,
    place: Option<PlaceId>,
    json: bool,
) -> Result<()> {
    match (lover, place) {
        (Some(id), _) => {
            let report = world.lover_report(id)?;
            if json {
                print_json(&report)?;
            } else {
                println!("{}", report);
            }
        }
        (None, Some(id)) => {
            let place = world.get_place(id)?;
            if json {
                print_json(place)?;
            } else {
                println!("{}", place);
            }
        }
        (None, None) => {
            if json {
                let lovers = world.registered_lovers();
                let places = world.registered_places();
                print_json(&serde_json::json!({ "lovers": lovers, "places": places }))?;
            } else {
                println!("{}", world);
            }
        }
    }
    Ok(())
}

/// Handle the 'favorites' command
fn handle_favorites(
    world: &PizzaWorld,
    lover: LoverId,
    by: RankMode,
    threshold: Option<f64>,
    json: bool,
) -> Result<()> {
    let places = match by {
        RankMode::Rating => {
            let min_rating = threshold.unwrap_or(f64::from(MIN_SCORE));
            if !(0.0..=f64::from(MAX_SCORE)).contains(&min_rating) {
                bail!("Rating threshold {} must lie in 0..={}", min_rating, MAX_SCORE);
            }
            favorites_by_rating(world, lover, min_rating)?
        }
        RankMode::Distance => {
            let max_distance = match threshold {
                None => u32::MAX,
                Some(t) if t < 0.0 => bail!("Distance threshold {} must not be negative", t),
                Some(t) => t.min(f64::from(u32::MAX)).floor() as u32,
            };
            favorites_by_distance(world, lover, max_distance)?
        }
    };

    let rows: Vec<PlaceRow> = places.into_iter().map(PlaceRow::from).collect();
    if json {
        return print_json(&rows);
    }
    let name = world.get_lover(lover)?.name();
    print_places(&format!("Favorites of {} by {}:", name, by), &rows);
    Ok(())
}

/// Handle the 'network' command
fn handle_network(
    world: &PizzaWorld,
    lover: LoverId,
    by: RankMode,
    grouped: bool,
    scope: usize,
    json: bool,
) -> Result<()> {
    let network = FriendNetwork::new(world).with_scope_hops(scope);
    let places = if grouped {
        network.friend_favorites(lover, by)?
    } else {
        network.favorites(lover, by)?
    };

    let rows: Vec<PlaceRow> = places.into_iter().map(PlaceRow::from).collect();
    if json {
        return print_json(&rows);
    }
    let name = world.get_lover(lover)?.name();
    let title = if grouped {
        format!("Favorites of {}'s friends, friend by friend, by {}:", name, by)
    } else {
        format!("Favorites around {} by {}:", name, by)
    };
    print_places(&title, &rows);
    Ok(())
}

/// Handle the 'distances' command
fn handle_distances(world: &PizzaWorld, lover: LoverId, json: bool) -> Result<()> {
    let network = FriendNetwork::new(world);
    let distances = network.distances(lover)?;
    if json {
        return print_json(&distances);
    }

    let name = world.get_lover(lover)?.name();
    println!("{}", format!("Hop distances from {}:", name).bold().blue());
    for other in world.lovers() {
        let hops = match distances.distance(other.id()) {
            Some(hops) => hops.to_string().green(),
            None => "unreachable".red(),
        };
        println!("  {:>6} {:<16} {}", other.id(), other.name(), hops);
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    world: &PizzaWorld,
    lover: LoverId,
    place: PlaceId,
    max_hops: Option<usize>,
    json: bool,
) -> Result<()> {
    let network = FriendNetwork::new(world);
    let bound = max_hops.unwrap_or(UNBOUNDED);
    let recommended = network.is_recommended(lover, place, bound)?;
    let recommenders: Vec<(LoverId, usize)> = network
        .recommenders(lover, place)?
        .into_iter()
        .filter(|&(_, hops)| hops <= bound)
        .collect();

    if json {
        return print_json(&Recommendation {
            lover,
            place,
            max_hops,
            recommended,
            recommenders,
        });
    }

    let place_name = world.get_place(place)?.name();
    let lover_name = world.get_lover(lover)?.name();
    if recommended {
        println!(
            "{} {} is recommended to {}",
            "✓".green(),
            place_name.bold(),
            lover_name
        );
        for (id, hops) in &recommenders {
            println!("  favorited by {} ({} hops away)", world.get_lover(*id)?.name(), hops);
        }
    } else {
        let within = match max_hops {
            Some(hops) => format!("within {} hops", hops),
            None => "in their network".to_string(),
        };
        println!(
            "{} Nobody {} of {} favorites {}",
            "✗".red(),
            within,
            lover_name,
            place_name.bold()
        );
    }
    Ok(())
}

/// Helper function to format and print a list of places
fn print_places(title: &str, rows: &[PlaceRow]) {
    println!("{}", title.bold().blue());
    if rows.is_empty() {
        println!("  (none)");
        return;
    }
    for (rank, row) in rows.iter().enumerate() {
        println!(
            "{}. {} - avg {:.2} ({} ratings), {} away",
            (rank + 1).to_string().green(),
            row.name,
            row.average_rating,
            row.ratings,
            row.distance
        );
    }
}
