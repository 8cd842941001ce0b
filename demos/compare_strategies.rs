//! Runs all four strategies over a generated corpus and checks they agree.
use std::time::Instant;
use wordtally::config::DEFAULT_WORDS;
use wordtally::prelude::*;

fn main() {
  println!("=== Wordtally Strategy Comparison ===\n");

  let lines = [
    "But soft, what light through yonder window breaks? It is the east.",
    "My bounty is as boundless as the sea, my love as deep.",
    "O, I am fortune's fool! Time, night and sleep, death and blood.",
    "Is this a dagger which I see before me? Macbeth, Macbeth, Macbeth!",
    "Uneasy lies the head that wears a crown, King Henry.",
  ];

  let mut source = MemorySource::new();
  let mut documents = Vec::new();
  for i in 0..64 {
    let id = format!("folio-{i}");
    source.insert(id.clone(), lines[i % lines.len()].repeat(500));
    documents.push(id);
  }
  let targets = TargetWords::new(DEFAULT_WORDS);
  let context = CountContext::new(&source, &documents, &targets);

  println!("Counting {} words over {} documents\n", targets.len(), documents.len());

  let mut reference: Option<ResultMap> = None;
  for strategy in Strategy::ALL {
    let start = Instant::now();
    let results = match aggregator(strategy, Workers::Auto).aggregate(&context) {
      Ok(results) => results,
      Err(e) => {
        eprintln!("{strategy} failed: {e}");
        return;
      }
    };
    println!("  {:<22} {:?}", strategy.to_string(), start.elapsed());

    match &reference {
      Some(reference) => assert_eq!(reference, &results, "{strategy} disagrees"),
      None => reference = Some(results),
    }
  }

  if let Some(results) = reference {
    println!("\nSearched words and frequency:");
    for (word, freq) in results {
      println!("\t{word} - {freq}");
    }
  }
}
