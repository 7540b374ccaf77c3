use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use word_ladder::{
    build_with_workers, FileSnapshotStore, FileWordSource, Ladder, LadderConfig, LadderError,
    SnapshotStore, WordSource,
};

#[derive(Parser, Debug)]
#[command(name = "word-ladder")]
#[command(about = "Shortest one-letter-at-a-time ladders between dictionary words", long_about = None)]
struct Cli {
    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Word list (one word per line)
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Snapshot file for the built graph
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Worker pool size for building the graph
    #[arg(long)]
    workers: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the graph from the word list and save a snapshot
    Build,

    /// Find the shortest ladder between two words
    Find {
        start: String,
        end: String,

        /// Rebuild the graph even if a snapshot exists
        #[arg(long)]
        rebuild: bool,
    },

    /// List the one-letter neighbors of a word
    Neighbors { word: String },
}

fn load_config(cli: &Cli) -> word_ladder::Result<LadderConfig> {
    let mut config = match &cli.config {
        Some(path) => LadderConfig::from_yaml_file(path)?,
        None => LadderConfig::default(),
    };
    // flags win over the file
    if let Some(words) = &cli.words {
        config.word_list = words.clone();
    }
    if let Some(snapshot) = &cli.snapshot {
        config.snapshot = snapshot.clone();
    }
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }
    if let Commands::Find { rebuild: true, .. } = cli.command {
        config.rebuild = true;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> word_ladder::Result<()> {
    let config = load_config(&cli)?;
    let source = FileWordSource::new(&config.word_list);
    let store = FileSnapshotStore::new(&config.snapshot);

    match cli.command {
        Commands::Build => {
            let start = Instant::now();
            let words = source.words()?;
            let map = build_with_workers(&words, config.workers)?;
            store.save(&map)?;
            println!(
                "Built graph: {} words, {} edges",
                map.len(),
                map.edge_count()
            );
            println!("Saved to {}", config.snapshot.display());
            println!("Time taken: {}ms", start.elapsed().as_millis());
        }
        Commands::Find { start, end, .. } => {
            let ladder = Ladder::open(&config, &source, &store)?;

            let timer = Instant::now();
            let path = ladder.find_path(&start, &end)?;
            let elapsed = timer.elapsed();

            match path {
                Some(path) => println!("{}", path),
                None => println!("No path found!"),
            }
            println!("Time taken: {}ms", elapsed.as_millis());
        }
        Commands::Neighbors { word } => {
            let ladder = Ladder::open(&config, &source, &store)?;
            match ladder.neighbors(&word) {
                Some([]) => println!("{} has no neighbors", word),
                Some(neighbors) => println!("{}", neighbors.join(", ")),
                None => println!("{} is not in the word list", word),
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr) // stdout carries results only
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ LadderError::InvalidInput { .. }) => {
            error!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
