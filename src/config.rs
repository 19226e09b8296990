// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{AssistantError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub store: StoreConfig,
    pub retrieval: RetrievalConfig,
    pub synthesis: SynthesisConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    pub corpus_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetrievalConfig {
    /// Result cap for searches across every platform.
    pub global_limit: usize,
    /// Result cap for each platform-filtered search.
    pub scoped_limit: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SynthesisConfig {
    pub max_steps: usize,
    pub max_sentences: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            global_limit: 5,
            scoped_limit: 3,
        }
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_steps: 7,
            max_sentences: 5,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CDP_ASSISTANT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| AssistantError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| AssistantError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            store: StoreConfig {
                corpus_path: PathBuf::from("data/sample_corpus.json"),
            },
            retrieval: RetrievalConfig::default(),
            synthesis: SynthesisConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.store.corpus_path.as_os_str().is_empty() {
            return Err(AssistantError::Config(
                "corpus_path must not be empty".to_string(),
            ));
        }

        if self.retrieval.global_limit == 0 || self.retrieval.scoped_limit == 0 {
            return Err(AssistantError::Config(
                "retrieval limits must be greater than 0".to_string(),
            ));
        }

        if self.synthesis.max_steps == 0 || self.synthesis.max_sentences == 0 {
            return Err(AssistantError::Config(
                "synthesis caps must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
