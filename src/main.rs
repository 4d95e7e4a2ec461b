//! Command-line entry point: classify sentences about an animal into an ecosystem.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use ecosense::config::AppConfig;
use ecosense::domain::TaggedConcept;
use ecosense::embedding::FastEmbedProvider;
use ecosense::extraction::ConceptExtractor;
use ecosense::lexicon::Lexicon;
use ecosense::predictor::EcosystemPredictor;
use ecosense::telemetry;

#[derive(Debug, Serialize)]
struct SentenceConcepts<'a> {
    sentence: &'a str,
    concepts: Vec<TaggedConcept>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let (config, cli) = AppConfig::load_from_args(std::env::args()).context("Failed to load configuration")?;
    telemetry::init(&config.logging.filter);

    let sentences = if cli.sentences.is_empty() {
        read_stdin_sentences().await.context("Failed to read sentences from stdin")?
    } else {
        cli.sentences.clone()
    };

    info!(
        entity = %cli.entity,
        sentences = sentences.len(),
        embeddings = config.embedding.enabled,
        model = %config.embedding.model,
        "Configuration loaded"
    );

    if cli.concepts {
        let extractor = ConceptExtractor::new(Lexicon::standard());
        let listing: Vec<_> = sentences
            .iter()
            .map(|sentence| SentenceConcepts {
                sentence,
                concepts: extractor.extract_for_labeling(sentence, &cli.entity),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&listing).context("Failed to serialize concepts")?
        );
    }

    let predictor = if config.embedding.enabled {
        let provider = FastEmbedProvider::new(&config.embedding.model, config.embedding.show_download_progress);
        EcosystemPredictor::with_embeddings(config.prediction.clone(), Arc::new(provider))
    } else {
        EcosystemPredictor::new(config.prediction.clone())
    };

    let result = predictor.predict(&sentences, &cli.entity).await;
    println!(
        "{}",
        serde_json::to_string_pretty(&result).context("Failed to serialize prediction")?
    );

    Ok(())
}

/// One sentence per non-blank line.
async fn read_stdin_sentences() -> std::io::Result<Vec<String>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut sentences = Vec::new();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if !line.is_empty() {
            sentences.push(line.to_string());
        }
    }
    Ok(sentences)
}
