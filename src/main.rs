use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use nexus::config::{Config, TopicBackend};
use nexus::document::TabularDataset;
use nexus::output::{report, terminal};
use nexus::pipeline::analyze::Analyzer;
use nexus::sentiment::lexicon::LexiconOracle;
use nexus::sentiment::traits::SentimentOracle;
use nexus::text::normalizer::TextNormalizer;
use nexus::text::resources::LanguageResources;
use nexus::topics::keywords::KeywordClusterModeler;
use nexus::topics::lda::LdaModeler;
use nexus::topics::traits::TopicModel;

/// Nexus: structured insight from unstructured text.
///
/// Normalizes a document, then reports word and sentence counts, sentiment,
/// ranked keywords, latent topics, a readability grade and a summary.
#[derive(Parser)]
#[command(name = "nexus", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a text file (or stdin with "-")
    Analyze {
        /// Path to a UTF-8 text file, or "-" for stdin
        #[arg(default_value = "-")]
        path: String,

        /// Analyze the text as given instead of normalizing it first
        #[arg(long)]
        raw: bool,

        /// Number of ranked keywords (overrides NEXUS_KEYWORDS)
        #[arg(long)]
        keywords: Option<usize>,

        /// Number of topics to request (overrides NEXUS_TOPICS)
        #[arg(long)]
        topics: Option<usize>,

        /// Print the full analysis as JSON instead of the terminal view
        #[arg(long)]
        json: bool,

        /// Also write the plain-text report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Analyze the text columns of a CSV file, one report per column
    Table {
        /// Path to a CSV file with a header row
        path: PathBuf,

        /// Comma-separated column names (default: every text column)
        #[arg(long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Number of ranked keywords (overrides NEXUS_KEYWORDS)
        #[arg(long)]
        keywords: Option<usize>,

        /// Number of topics to request (overrides NEXUS_TOPICS)
        #[arg(long)]
        topics: Option<usize>,

        /// Print the full analysis as JSON instead of the terminal view
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized form of a text file (or stdin with "-")
    Normalize {
        #[arg(default_value = "-")]
        path: String,
    },

    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("nexus=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            raw,
            keywords,
            topics,
            json,
            report: report_path,
        } => {
            let config = apply_overrides(Config::load()?, keywords, topics);
            let analyzer = build_analyzer(&config)?;
            let bytes = read_input(&path)?;

            let result = if raw {
                let text = String::from_utf8(bytes)
                    .map_err(nexus::error::PreprocessingError::wrap)?;
                analyzer.analyze_prepared(&text)?
            } else {
                analyzer.analyze_bytes(bytes)?
            };

            if json {
                println!("{}", report::to_json(&result)?);
            } else {
                terminal::display_report(&result);
            }

            if let Some(out) = report_path {
                report::write_text_report(&result, &out)?;
                println!("\n{} {}", "Report written to".green(), out.display());
            }
        }

        Commands::Table {
            path,
            columns,
            keywords,
            topics,
            json,
        } => {
            let config = apply_overrides(Config::load()?, keywords, topics);
            let analyzer = build_analyzer(&config)?;
            let table = load_table(&path)?;

            let selected = columns.clone().unwrap_or_else(|| table.text_columns());
            let pb = ProgressBar::new(selected.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  Columns [{bar:30}] {pos}/{len} ({eta})")
                    .unwrap(),
            );

            let analysis = analyzer.analyze_table(&table, columns.as_deref(), |_| pb.inc(1))?;
            pb.finish_and_clear();

            if json {
                println!("{}", report::to_json(&analysis)?);
            } else {
                terminal::display_table(&analysis);
            }
        }

        Commands::Normalize { path } => {
            let bytes = read_input(&path)?;
            let text = String::from_utf8(bytes).map_err(nexus::error::PreprocessingError::wrap)?;
            let normalizer = TextNormalizer::new(LanguageResources::english());
            println!("{}", normalizer.clean_text(&text));
        }

        Commands::Config => {
            let config = Config::load()?;
            println!("{}", "=== Nexus configuration ===".bold());
            println!("  Keywords:         {}", config.keyword_count);
            println!("  Topics:           {}", config.topic_count);
            println!("  Topic backend:    {}", config.topic_backend);
            println!("  Sentence window:  {}", config.topics.sentence_window);
            println!("  Max features:     {}", config.topics.max_features);
            println!("  Iterations:       {}", config.topics.max_iterations);
            println!("  Seed:             {}", config.topics.seed);
            match &config.lexicon_path {
                Some(p) => println!("  Lexicon:          {}", p.display()),
                None => println!("  Lexicon:          {}", "built-in".dimmed()),
            }
        }
    }

    Ok(())
}

fn apply_overrides(mut config: Config, keywords: Option<usize>, topics: Option<usize>) -> Config {
    if let Some(n) = keywords {
        config.keyword_count = n;
    }
    if let Some(k) = topics {
        config.topic_count = k;
    }
    config
}

/// Create the sentiment oracle: a lexicon file when configured, else the built-in one.
fn create_oracle(config: &Config) -> Result<Arc<dyn SentimentOracle>> {
    match &config.lexicon_path {
        Some(path) => {
            info!(path = %path.display(), "Loading sentiment lexicon");
            Ok(Arc::new(LexiconOracle::load(path)?))
        }
        None => Ok(Arc::new(LexiconOracle::default())),
    }
}

/// Create a topic model based on the configured backend.
fn create_topic_model(config: &Config) -> Box<dyn TopicModel> {
    match config.topic_backend {
        TopicBackend::Lda => {
            info!("Using TF-IDF + LDA topic model");
            Box::new(LdaModeler::new(config.topics.clone()))
        }
        TopicBackend::Keywords => {
            info!("Using keyword-clustering topic model");
            Box::new(KeywordClusterModeler::new(config.topics.clone()))
        }
    }
}

fn build_analyzer(config: &Config) -> Result<Analyzer> {
    Ok(Analyzer::english(
        create_oracle(config)?,
        create_topic_model(config),
        config.analysis_options(),
    ))
}

fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read(path).with_context(|| format!("Failed to read {path}"))
    }
}

fn load_table(path: &Path) -> Result<TabularDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    TabularDataset::from_csv_reader(file)
        .with_context(|| format!("Failed to parse CSV {}", path.display()))
}
