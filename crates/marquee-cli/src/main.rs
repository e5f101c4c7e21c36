//! marquee-cli: Command-line interface for marquee.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use marquee_core::{AddOutcome, Config, Movie, NominationStore, NOMINATION_LIMIT};
use marquee_omdb::OmdbClient;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Search OMDb and keep a shortlist of five nominated movies", long_about = None)]
#[command(version = marquee_core::build_info::BUILD_INFO.version)]
struct Cli {
    /// Path to config file (defaults to $MARQUEE_DIR/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search OMDb for movies
    Search {
        /// Search query
        query: String,

        /// Result page
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show nominated movies
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Nominate a movie
    Nominate {
        #[arg(long)]
        title: String,

        #[arg(long)]
        year: String,

        /// Poster URI as reported by OMDb
        #[arg(long, default_value = marquee_core::movie::NO_POSTER)]
        poster: String,
    },

    /// Withdraw a nomination
    Denominate {
        #[arg(long)]
        title: String,

        #[arg(long)]
        year: String,

        /// Poster URI; when omitted every nomination with this title and year is withdrawn
        #[arg(long)]
        poster: Option<String>,
    },

    /// Withdraw every nomination
    Clear,

    /// Write a default config file
    Init {
        /// OMDb API key to store
        #[arg(long)]
        api_key: Option<String>,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Plain,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        marquee_core::logging::init_with_level("debug");
    } else {
        marquee_core::logging::init();
    }

    let config_path = cli
        .config
        .unwrap_or_else(marquee_core::paths::config_path);

    match cli.command {
        Some(Commands::Search {
            query,
            page,
            format,
        }) => search(&config_path, &query, page, format),
        Some(Commands::List { format }) => list(&config_path, format),
        Some(Commands::Nominate {
            title,
            year,
            poster,
        }) => nominate(&config_path, Movie::new(title, year, poster)),
        Some(Commands::Denominate {
            title,
            year,
            poster,
        }) => denominate(&config_path, &title, &year, poster.as_deref()),
        Some(Commands::Clear) => clear(&config_path),
        Some(Commands::Init { api_key, force }) => init(&config_path, api_key, force),
        None => {
            println!("{}", marquee_core::build_info::version_string("marquee"));
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn search(config_path: &Path, query: &str, page: u32, format: OutputFormat) -> Result<()> {
    let config = load_config(config_path)?;
    let query = query.trim();
    if query.is_empty() {
        bail!("Search query is empty");
    }

    if !config.has_api_key() {
        bail!(
            "OMDb API key is not configured; run `marquee init --api-key <KEY>` or set {}",
            marquee_core::config::API_KEY_ENV_VARS[0]
        );
    }
    let client = OmdbClient::new(&config.omdb)?;
    let result = client
        .search_page(query, page)
        .with_context(|| format!("Search for \"{query}\" failed"))?;
    info!(count = result.movies.len(), total = result.total_results, "Search complete");

    let nominations = open_nominations(&config)?;
    match format {
        OutputFormat::Json => print_json(&result.movies)?,
        OutputFormat::Plain => print_plain(&result.movies),
        OutputFormat::Table => {
            if result.movies.is_empty() {
                println!("No movies found, try to change your search query.");
                return Ok(());
            }
            print_table(&result.movies, &nominations);
            println!(
                "\nPage {page} · {} of {} results",
                result.movies.len(),
                result.total_results
            );
        }
    }

    Ok(())
}

fn list(config_path: &Path, format: OutputFormat) -> Result<()> {
    let config = load_config(config_path)?;
    let nominations = open_nominations(&config)?;

    match format {
        OutputFormat::Json => print_json(nominations.movies())?,
        OutputFormat::Plain => print_plain(nominations.movies()),
        OutputFormat::Table => {
            if nominations.is_empty() {
                println!("No nominations yet.");
                return Ok(());
            }
            print_table(nominations.movies(), &nominations);
            println!("\n{}/{NOMINATION_LIMIT} nominated", nominations.len());
        }
    }

    Ok(())
}

fn nominate(config_path: &Path, movie: Movie) -> Result<()> {
    let config = load_config(config_path)?;
    let mut nominations = open_nominations(&config)?;

    match nominations.add(movie.clone())? {
        AddOutcome::Added => {
            println!(
                "{} Nominated {movie} ({}/{NOMINATION_LIMIT})",
                "✓".green(),
                nominations.len()
            );
            if nominations.is_full() {
                println!("Wooho! You have nominated {NOMINATION_LIMIT} movies.");
            }
        }
        AddOutcome::AlreadyNominated => println!("{movie} is already nominated"),
        AddOutcome::LimitReached => {
            bail!("Nomination limit of {NOMINATION_LIMIT} reached; withdraw a movie first")
        }
    }

    Ok(())
}

fn denominate(config_path: &Path, title: &str, year: &str, poster: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut nominations = open_nominations(&config)?;

    let targets: Vec<Movie> = match poster {
        Some(poster) => vec![Movie::new(title, year, poster)],
        None => nominations
            .movies()
            .iter()
            .filter(|m| m.title == title && m.year == year)
            .cloned()
            .collect(),
    };

    let mut removed = 0;
    for movie in &targets {
        removed += nominations.remove(movie)?;
    }

    if removed == 0 {
        println!("{title} ({year}) is not nominated");
    } else {
        println!(
            "{} Withdrew {title} ({year}) ({}/{NOMINATION_LIMIT})",
            "✓".green(),
            nominations.len()
        );
    }

    Ok(())
}

fn clear(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let mut nominations = open_nominations(&config)?;
    let count = nominations.len();
    nominations.clear()?;
    println!("Withdrew {count} nomination(s)");
    Ok(())
}

fn init(config_path: &Path, api_key: Option<String>, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let mut config = Config::default();
    if let Some(key) = api_key {
        config.omdb.api_key = key;
    }
    config.save(config_path)?;
    println!("Wrote {}", config_path.display());
    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    Config::load_or_default(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn open_nominations(config: &Config) -> Result<NominationStore> {
    NominationStore::open_file(&config.storage_path).with_context(|| {
        format!(
            "Failed to open nominations at {}",
            config.storage_path.display()
        )
    })
}

fn print_json(movies: &[Movie]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(movies)?);
    Ok(())
}

fn print_plain(movies: &[Movie]) {
    for movie in movies {
        println!("{}\t{}\t{}", movie.title, movie.year, movie.poster_uri);
    }
}

fn print_table(movies: &[Movie], nominations: &NominationStore) {
    println!(
        "{}",
        format!("{:<4} {:<3} {:<8} TITLE", "#", "", "YEAR").bold()
    );
    for (i, movie) in movies.iter().enumerate() {
        let mark = if nominations.contains(movie) {
            "★".yellow().to_string()
        } else {
            " ".to_string()
        };
        println!("{:<4} {:<3} {:<8} {}", i + 1, mark, movie.year, movie.title);
    }
}
