use crate::scoring::ScoringSettings;
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;

/// Default config file looked up in the working directory (extension optional).
const DEFAULT_CONFIG_BASENAME: &str = "ecosense";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Animal the sentences are about
    #[arg(short, long, default_value = "bees")]
    pub entity: String,

    /// Score with keywords only, never load an embedding model
    #[arg(long, env = "ECOSENSE_NO_EMBEDDINGS")]
    pub no_embeddings: bool,

    /// Embedding model name
    #[arg(long)]
    pub model: Option<String>,

    /// Print the tagged concepts of every sentence before the prediction
    #[arg(long)]
    pub concepts: bool,

    /// Sentences to classify; read from stdin, one per line, when omitted
    pub sentences: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub prediction: ScoringSettings,
    pub embedding: EmbeddingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmbeddingConfig {
    pub enabled: bool,
    pub model: String,
    pub show_download_progress: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args()).map(|(config, _)| config)
    }

    /// Load configuration and also return the parsed command line.
    pub fn load_from_args<I, T>(args: I) -> Result<(Self, Cli), config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let defaults = ScoringSettings::default();
        let mut builder = Config::builder()
            .set_default("prediction.sharpening_exponent", defaults.sharpening_exponent)?
            .set_default("prediction.keyword_bonus", defaults.keyword_bonus)?
            .set_default("prediction.neutral_multiplier", defaults.neutral_multiplier)?
            .set_default("prediction.negation_window", defaults.negation_window as u64)?
            .set_default("embedding.enabled", true)?
            .set_default("embedding.model", "bge-small-en-v1.5")?
            .set_default("embedding.show_download_progress", false)?
            .set_default("logging.filter", "info,ecosense=debug")?;

        // Explicit file must exist; the working-directory default is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false)),
        };

        // ECOSENSE_PREDICTION__KEYWORD_BONUS=0.2
        builder = builder.add_source(
            Environment::with_prefix("ECOSENSE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // RUST_LOG wins over the configured filter, as with EnvFilter itself.
        if let Ok(filter) = env::var("RUST_LOG") {
            if !filter.trim().is_empty() {
                builder = builder.set_override("logging.filter", filter)?;
            }
        }

        if cli.no_embeddings {
            builder = builder.set_override("embedding.enabled", false)?;
        }
        if let Some(model) = &cli.model {
            builder = builder.set_override("embedding.model", model.clone())?;
        }

        let cfg = builder.build()?;
        let config: Self = cfg.try_deserialize()?;
        config.validate()?;
        Ok((config, cli))
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        let p = &self.prediction;
        if !(p.sharpening_exponent.is_finite() && p.sharpening_exponent > 0.0) {
            return Err(config::ConfigError::Message(
                "prediction.sharpening_exponent must be a positive number".to_string(),
            ));
        }
        if !(p.keyword_bonus.is_finite() && p.keyword_bonus >= 0.0) {
            return Err(config::ConfigError::Message(
                "prediction.keyword_bonus cannot be negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&p.neutral_multiplier) {
            return Err(config::ConfigError::Message(
                "prediction.neutral_multiplier must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}
