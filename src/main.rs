use clap::Parser;
use ideamap_core::{Analyzer, CountVectorizer, LanguageResources, TfidfVectorizer};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Rank a batch of ideas by similarity and lay them out in 2D
#[derive(Parser, Debug)]
#[command(name = "ideamap")]
#[command(about = "Similarity analysis for short text ideas", long_about = None)]
struct Args {
    /// Path to a file with one idea per line, or "-" for stdin
    ideas: PathBuf,

    /// Path to a GloVe-format embedding table (optional; sparse-only
    /// features are used when absent)
    #[arg(short, long)]
    embeddings: Option<PathBuf>,

    /// Path to a stop-word file, one word per line (defaults to the
    /// built-in English list)
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// Sparse vectorizer to use
    #[arg(long, default_value = "count", value_parser = ["count", "tfidf"])]
    vectorizer: String,

    /// Seed for the MDS layout
    #[arg(long, default_value_t = ideamap_core::DEFAULT_SEED)]
    seed: u64,

    /// Draw a fresh random seed instead (coordinates vary run to run)
    #[arg(long)]
    random_seed: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn read_ideas(path: &PathBuf) -> anyhow::Result<Vec<String>> {
    let content = if path.to_str() == Some("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let resources = match &args.stop_words {
        Some(path) => LanguageResources::with_stop_words_file(path)?,
        None => LanguageResources::english(),
    };

    let mut analyzer = Analyzer::new(resources);
    analyzer = match args.vectorizer.as_str() {
        "tfidf" => analyzer.with_vectorizer(Box::new(TfidfVectorizer::new())),
        _ => analyzer.with_vectorizer(Box::new(CountVectorizer::new())),
    };
    if let Some(path) = &args.embeddings {
        analyzer = analyzer.with_embeddings_file(path);
    }
    analyzer = if args.random_seed {
        analyzer.with_random_seed()
    } else {
        analyzer.with_seed(args.seed)
    };

    let ideas = read_ideas(&args.ideas)?;
    info!(count = ideas.len(), "read ideas");

    let analysis = analyzer.analyze(&ideas)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&analysis)?
    } else {
        serde_json::to_string(&analysis)?
    };
    println!("{json}");

    Ok(())
}
