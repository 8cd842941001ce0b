use anyhow::Context;
use clap::{ArgGroup, Parser};
use log::{error, info};
use std::path::PathBuf;
use std::time::Instant;
use wordtally::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "wordtally")]
#[command(about = "Counts the frequency of target words across a set of documents, \
  distributing either the words or the documents among workers")]
#[command(group(ArgGroup::new("partition").required(true).args(["word", "document"])))]
struct Args {
  /// Count frequency by iterating through words
  #[arg(short, long)]
  word: bool,
  /// Count frequency by iterating through documents
  #[arg(short, long)]
  document: bool,
  /// Run in parallel, a shard of words or documents per worker
  #[arg(short, long)]
  parallel: bool,
  /// Print the expected reference frequencies
  #[arg(short, long)]
  expected: bool,
  /// Number of workers for parallel runs (defaults to one per core)
  #[arg(long)]
  workers: Option<usize>,
  /// JSON run configuration
  #[arg(short, long)]
  config: Option<PathBuf>,
  /// Directory relative document paths are resolved against
  #[arg(short, long)]
  root: Option<PathBuf>,
  /// Comma separated target words, overriding the configuration
  #[arg(long, value_delimiter = ',')]
  words: Option<Vec<String>>,
  /// Documents to count, overriding the configuration
  documents: Vec<String>,
}

impl Args {
  fn strategy(&self) -> Strategy {
    let partition = if self.word {
      Partition::ByWord
    } else {
      Partition::ByDocument
    };
    Strategy::new(partition, self.parallel)
  }

  fn run_config(&self) -> anyhow::Result<RunConfig> {
    let mut config = match &self.config {
      Some(path) => RunConfig::from_json_file(path)?,
      None => RunConfig::default(),
    };
    if let Some(words) = &self.words {
      config.words = TargetWords::new(words);
    }
    if !self.documents.is_empty() {
      config.documents = self.documents.clone();
    }
    if self.workers.is_some() {
      config.workers = self.workers;
    }
    if self.root.is_some() {
      config.root = self.root.clone();
    }
    config.validate()?;
    Ok(config)
  }
}

fn run(args: Args) -> anyhow::Result<()> {
  let start_master = Instant::now();
  let config = args.run_config().context("Invalid run configuration")?;
  let strategy = args.strategy();

  let source = match &config.root {
    Some(root) => FsSource::with_root(root),
    None => FsSource::new(),
  };
  let targets = &config.words;
  let context = CountContext::new(&source, &config.documents, targets);

  info!(
    "running {} over {} documents for {} words",
    strategy,
    config.documents.len(),
    targets.len()
  );

  let start_search = Instant::now();
  let results = aggregator(strategy, config.workers())
    .aggregate(&context)
    .with_context(|| format!("Failed to count words with {strategy}"))?;
  let elapsed = start_search.elapsed();

  if args.expected {
    println!("Expected words and frequency:");
    match &config.expected {
      Some(expected) => {
        for (word, freq) in expected {
          println!("\t{word} - {freq}");
        }
      }
      None => println!("\t(no reference counts configured)"),
    }
  }

  println!("Searched words and frequency:");
  for (word, freq) in &results {
    println!("\t{word} - {freq}");
  }
  println!("Total search time: {:.4} seconds", elapsed.as_secs_f64());
  println!(
    "Total run time: {:.4} seconds",
    start_master.elapsed().as_secs_f64()
  );

  Ok(())
}

fn main() {
  env_logger::init();

  if let Err(e) = run(Args::parse()) {
    error!("{e:#}");
    std::process::exit(1);
  }
}
