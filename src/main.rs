//! emotions-comparison CLI
//!
//! Builds the books/films tables, computes emotion rates of book texts and
//! film scripts, and compares them.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use emotions_comparison::app::{self, DEFAULT_CHART_WIDTH};
use emotions_comparison::dataset::{self, Catalogue};
use emotions_comparison::report::{format_rate, NO_SIGNAL};
use emotions_comparison::{
    AppConfig, EmotionRates, Lexicon, ScriptResolver, WorkKind, VERSION,
};

/// Kind of work on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Book,
    Film,
}

impl From<KindArg> for WorkKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Book => WorkKind::Book,
            KindArg::Film => WorkKind::Film,
        }
    }
}

/// Compare emotions in books and their film adaptations
#[derive(Parser, Debug)]
#[command(name = "emotions-comparison")]
#[command(author, version, about, long_about = None)]
#[command(long_about = "
Compares emotion rates computed from book texts and film scripts against a
word-to-emotion lexicon, alongside reader and viewer ratings.

Examples:
  # Build data/books.csv and data/films.csv from the raw dumps
  emotions-comparison datasets

  # Emotion rates of one film script
  emotions-comparison emotions --kind film --title \"The Invisible Man\" --year 1933

  # Book vs film table
  emotions-comparison compare --title \"The Time Machine\" --year 1960
")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (.toml, .yaml or .yml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the books and films tables from the raw datasets
    Datasets,

    /// Print the emotion rates of one book or film
    Emotions {
        /// Work kind
        #[arg(long, value_enum)]
        kind: KindArg,

        /// Title as it appears in the tables
        #[arg(short, long)]
        title: String,

        /// Release year (films only)
        #[arg(short, long)]
        year: Option<i32>,

        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Compare a book with one of its film adaptations
    Compare {
        /// Book title
        #[arg(short, long)]
        title: String,

        /// Film year, required when the book has several adaptations
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Ratings chart for every adaptation in the catalogue
    Analysis {
        /// Chart width in cells
        #[arg(short, long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: usize,
    },

    /// Menu-driven comparison
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    info!("emotions-comparison v{}", VERSION);

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?,
        None => AppConfig::default(),
    };

    match &cli.command {
        Commands::Datasets => run_datasets(&config),
        Commands::Emotions {
            kind,
            title,
            year,
            json,
        } => run_emotions(&config, (*kind).into(), title, *year, *json),
        Commands::Compare { title, year } => run_compare(&config, title, *year),
        Commands::Analysis { width } => {
            let catalogue = load_catalogue(&config)?;
            print!("{}", app::analysis(&catalogue, *width)?);
            Ok(())
        }
        Commands::Interactive => {
            let resolver = load_resolver(&config)?;
            let catalogue = load_catalogue(&config)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            app::interactive(&resolver, &catalogue, &mut stdin.lock(), &mut stdout)?;
            Ok(())
        }
    }
}

fn run_datasets(config: &AppConfig) -> Result<()> {
    let pb = create_progress_bar("Building books and films tables...");
    let start = Instant::now();

    let catalogue = dataset::generate_datasets(config).context("Dataset generation failed")?;

    pb.finish_with_message(format!(
        "Wrote {} books and {} films in {:.1}s",
        catalogue.books.len(),
        catalogue.films.len(),
        start.elapsed().as_secs_f32()
    ));
    info!("Books table: {:?}", config.books_table());
    info!("Films table: {:?}", config.films_table());
    Ok(())
}

fn run_emotions(
    config: &AppConfig,
    kind: WorkKind,
    title: &str,
    year: Option<i32>,
    json: bool,
) -> Result<()> {
    let resolver = load_resolver(config)?;

    let rates = match resolver.emotions_for(kind, title, year) {
        Ok(rates) => rates,
        Err(err) if err.is_recoverable() => {
            warn!("{}", err);
            println!("No {} script available for '{}'", kind, title);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if json {
        let value = serde_json::json!({
            "kind": kind.to_string(),
            "title": title,
            "year": year,
            "result": rates,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match &rates {
        EmotionRates::Measured(vector) => {
            for (label, rate) in vector.iter() {
                println!("{:>10}  {}", label, format_rate(rate));
            }
            if let Some((label, _)) = vector.dominant() {
                println!("\nDominant emotion: {}", label);
            }
        }
        EmotionRates::NoSignal => {
            println!("{}: no lexicon words found", NO_SIGNAL);
        }
    }
    Ok(())
}

fn run_compare(config: &AppConfig, title: &str, year: Option<i32>) -> Result<()> {
    let resolver = load_resolver(config)?;
    let catalogue = load_catalogue(config)?;

    let comparison = match app::compare(&resolver, &catalogue, title, year) {
        Ok(comparison) => comparison,
        Err(err) if err.is_recoverable() => {
            warn!("{}", err);
            println!("No script available to compare '{}'", title);
            return Ok(());
        }
        Err(err) => return Err(err).with_context(|| format!("Cannot compare '{}'", title)),
    };
    print!("{}", comparison.render(resolver.lexicon().labels()));
    Ok(())
}

fn load_resolver(config: &AppConfig) -> Result<ScriptResolver> {
    let pb = create_progress_bar("Loading lexicon...");
    let labels = config.emotion_labels()?;
    let lexicon = Lexicon::load(&config.lexicon_path, labels).context("Failed to load lexicon")?;
    pb.finish_and_clear();

    Ok(ScriptResolver::new(
        Arc::new(lexicon),
        &config.books_dir,
        &config.scripts_dir,
    ))
}

fn load_catalogue(config: &AppConfig) -> Result<Catalogue> {
    Catalogue::load(config.books_table(), config.films_table())
        .context("Failed to load books/films tables (run `datasets` first)")
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn create_progress_bar(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb
}
